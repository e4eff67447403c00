//! Const evaluation of constant initializers.
//!
//! This module computes the literal value of a `const` initializer so the collector can compare and order
//! values without running the compiler. It is deliberately small: integer and string literals, unary `-`
//! and `!`, the binary arithmetic and bitwise operators, parentheses, `as` casts to integer types, and paths
//! to other constants (resolved through a [`ConstEnv`]).
//!
//! ## Notes
//!
//! - Integers are typed the way `rustc` types them: a suffix wins, otherwise the expected type flows in from
//!   the newtype field, the other operand, or the cast target, and `i32` is the fallback.
//! - `!` and `as` wrap to the width of their type. Arithmetic is checked; a result outside its type,
//!   division by zero, or an out-of-range shift yields `None`.
//! - Anything else (calls, floats, chars, byte strings) is not const-evaluable here and yields `None`.

use syn::{BinOp, Expr, ExprBinary, ExprUnary, Lit, LitInt, Member, UnOp};

use super::model::{ConstValue, IntType};

/// Resolves paths to other constants during evaluation.
pub trait ConstEnv {
    /// Value of the constant `path` names, or `None` when it is unknown or not evaluable.
    fn resolve(&mut self, path: &syn::Path) -> Option<Evaluated>;
}

/// Environment without any named constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConsts;

impl ConstEnv for NoConsts {
    fn resolve(&mut self, _path: &syn::Path) -> Option<Evaluated> {
        None
    }
}

/// A value together with the integer type it was computed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluated {
    Int(i128, IntType),
    Text(String),
}

impl Evaluated {
    fn int(self) -> Option<(i128, IntType)> {
        match self {
            Evaluated::Int(v, ty) => Some((v, ty)),
            Evaluated::Text(_) => None,
        }
    }

    pub fn into_value(self) -> ConstValue {
        match self {
            Evaluated::Int(v, _) => ConstValue::Int(v),
            Evaluated::Text(s) => ConstValue::Text(s),
        }
    }
}

/// Evaluate `expr` as a value of `ty`, when the integer type of the result is known.
///
/// An integer result that does not fit in `ty` yields `None`.
pub fn eval_const_expr(expr: &Expr, ty: Option<IntType>, env: &mut dyn ConstEnv) -> Option<Evaluated> {
    match (eval(expr, ty, env)?, ty) {
        (Evaluated::Int(v, _), Some(ty)) => ty.contains(v).then_some(Evaluated::Int(v, ty)),
        (value, _) => Some(value),
    }
}

fn eval(expr: &Expr, expected: Option<IntType>, env: &mut dyn ConstEnv) -> Option<Evaluated> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(i) => {
                let (v, ty) = int_lit(i, expected)?;
                ty.contains(v).then_some(Evaluated::Int(v, ty))
            }
            Lit::Str(s) => Some(Evaluated::Text(s.value())),
            _ => None,
        },
        Expr::Paren(p) => eval(&p.expr, expected, env),
        Expr::Group(g) => eval(&g.expr, expected, env),
        Expr::Path(p) if p.qself.is_none() => env.resolve(&p.path),
        // `OTHER.0`: constants resolve to their wrapped value already.
        Expr::Field(f) if matches!(&f.member, Member::Unnamed(i) if i.index == 0) => match &*f.base {
            Expr::Path(p) if p.qself.is_none() => env.resolve(&p.path),
            _ => None,
        },
        Expr::Unary(u) => eval_unary(u, expected, env),
        Expr::Binary(b) => eval_binary(b, expected, env),
        Expr::Cast(c) => {
            let syn::Type::Path(p) = &*c.ty else {
                return None;
            };
            let target = p.path.get_ident().and_then(|i| IntType::from_name(&i.to_string()))?;
            let (v, _) = eval(&c.expr, Some(target), env)?.int()?;
            Some(Evaluated::Int(target.wrap(v)?, target))
        }
        _ => None,
    }
}

/// Value of an integer literal and its type, before the range check.
fn int_lit(lit: &LitInt, expected: Option<IntType>) -> Option<(i128, IntType)> {
    let ty = match lit.suffix() {
        "" => expected.unwrap_or(IntType::I32),
        suffix => IntType::from_name(suffix)?,
    };
    let v = lit.base10_parse::<i128>().ok()?;
    Some((v, ty))
}

fn eval_unary(u: &ExprUnary, expected: Option<IntType>, env: &mut dyn ConstEnv) -> Option<Evaluated> {
    match u.op {
        UnOp::Neg(_) => {
            // `-128i8` is in range even though `128i8` alone is not.
            let (v, ty) = match &*u.expr {
                Expr::Lit(syn::ExprLit { lit: Lit::Int(i), .. }) => int_lit(i, expected)?,
                other => eval(other, expected, env)?.int()?,
            };
            let negated = v.checked_neg()?;
            (ty.signed && ty.contains(negated)).then_some(Evaluated::Int(negated, ty))
        }
        UnOp::Not(_) => {
            let (v, ty) = eval(&u.expr, expected, env)?.int()?;
            Some(Evaluated::Int(ty.wrap(!v)?, ty))
        }
        _ => None,
    }
}

fn eval_binary(b: &ExprBinary, expected: Option<IntType>, env: &mut dyn ConstEnv) -> Option<Evaluated> {
    let (l, ty) = eval(&b.left, expected, env)?.int()?;
    if let BinOp::Shl(_) | BinOp::Shr(_) = b.op {
        let (r, _) = eval(&b.right, None, env)?.int()?;
        let shift = u32::try_from(r).ok().filter(|s| *s < ty.bits)?;
        let v = match b.op {
            BinOp::Shl(_) => ty.wrap(l.checked_shl(shift)?)?,
            _ => l.checked_shr(shift)?,
        };
        return Some(Evaluated::Int(v, ty));
    }

    let (r, rty) = eval(&b.right, Some(ty), env)?.int()?;
    if rty != ty {
        return None;
    }
    let v = match b.op {
        BinOp::Add(_) => l.checked_add(r),
        BinOp::Sub(_) => l.checked_sub(r),
        BinOp::Mul(_) => l.checked_mul(r),
        BinOp::Div(_) => l.checked_div(r),
        BinOp::Rem(_) => l.checked_rem(r),
        BinOp::BitAnd(_) => Some(l & r),
        BinOp::BitOr(_) => Some(l | r),
        BinOp::BitXor(_) => Some(l ^ r),
        _ => None,
    }?;
    ty.contains(v).then_some(Evaluated::Int(v, ty))
}
