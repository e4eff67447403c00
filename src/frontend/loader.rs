//! Load Rust source files into a [`SourceModel`].
//!
//! This is the front end of the generator: it parses every file with `syn`, records each named definition
//! with its position, and resolves the declared type of every constant nominally.
//!
//! ## Notes
//!
//! - Items are walked recursively through inline `mod` blocks and inherent `impl` blocks. Constants inside
//!   function bodies and trait impls are not part of the model.
//! - Positions come from `proc-macro2` span locations (line, column); byte offsets are recomputed against
//!   the file text.
//! - Type resolution prefers a type in the same file and inline module, then the same file, then a type
//!   that is unique across all loaded files. Anything else stays unresolved. Paths to other constants in an
//!   initializer resolve the same way.
//! - Initializers are evaluated once every file is loaded, in the integer type of the newtype field or the
//!   primitive declared type. Reference cycles evaluate to no value.

use std::fs;
use std::path::{Path, PathBuf};

use miette::NamedSource;
use proc_macro2::{LineColumn, Span};
use syn::{Expr, Fields, ImplItem, Item, Type};

use super::const_eval::{ConstEnv, Evaluated, eval_const_expr};
use super::diagnostics::LoadError;
use super::model::{
    ConstDef, ConstOwner, IntType, ItemKind, Position, SemanticModel, SourceModel, TypeId, TypeShape,
};

/// Read and load `paths` into one model.
pub fn load_files(paths: &[PathBuf]) -> Result<SourceModel, LoadError> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        sources.push((path.clone(), text));
    }
    load_sources(&sources)
}

/// Load already-read sources (`(path, text)` pairs) into one model.
#[tracing::instrument(skip_all, fields(file_count = sources.len()))]
pub fn load_sources(sources: &[(PathBuf, String)]) -> Result<SourceModel, LoadError> {
    let mut loader = Loader::default();
    for (path, text) in sources {
        loader.add_source(path, text)?;
    }
    Ok(loader.finish())
}

/// A constant whose declared type has not been resolved yet.
#[derive(Debug)]
struct PendingConst {
    name: String,
    position: Position,
    module_path: Vec<String>,
    type_name: Option<String>,
    owner_name: Option<String>,
    init: Initializer,
}

/// Initializer of a constant: the constructor it called (`Kind(..)`, if any) and the expression to evaluate.
#[derive(Debug)]
struct Initializer {
    constructor: Option<String>,
    expr: Expr,
}

/// A constant with its declared type and owner resolved, waiting for its value.
#[derive(Debug)]
struct ResolvedConst {
    pending: PendingConst,
    declared_type: Option<TypeId>,
    owner: ConstOwner,
    /// Integer type the initializer is evaluated in.
    int_type: Option<IntType>,
}

/// Incremental loader: add sources, then [`Loader::finish`] to resolve constants.
#[derive(Debug, Default)]
pub struct Loader {
    model: SourceModel,
    pending: Vec<PendingConst>,
}

impl Loader {
    /// Parse one file and record its definitions.
    pub fn add_source(&mut self, path: &Path, text: &str) -> Result<(), LoadError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let file = syn::parse_file(text).map_err(|e| parse_error(path, text, &e))?;

        let index = LineIndex::new(text);
        let mut walker = FileWalker {
            path,
            index: &index,
            module_path: Vec::new(),
            loader: self,
        };
        walker.walk_items(&file.items);
        Ok(())
    }

    /// Resolve and evaluate every pending constant and return the finished model.
    pub fn finish(mut self) -> SourceModel {
        let pending = std::mem::take(&mut self.pending);
        let mut resolved = Vec::with_capacity(pending.len());
        for p in pending {
            let declared_type = p
                .type_name
                .as_deref()
                .and_then(|name| self.resolve_type(name, &p.position.file, &p.module_path));
            let owner = match p.owner_name.as_deref() {
                Some(name) => match self.resolve_type(name, &p.position.file, &p.module_path) {
                    Some(id) => ConstOwner::Associated(id),
                    None => {
                        tracing::debug!(name = %p.name, owner = name, "skipping associated const of unknown type");
                        continue;
                    }
                },
                None => ConstOwner::Free,
            };
            let int_type = match declared_type {
                Some(id) => self.model.type_def(id).and_then(|t| t.int_repr),
                None => {
                    tracing::debug!(name = %p.name, ty = ?p.type_name, "const type does not resolve to a model type");
                    p.type_name.as_deref().and_then(IntType::from_name)
                }
            };
            resolved.push(ResolvedConst {
                pending: p,
                declared_type,
                owner,
                int_type,
            });
        }

        let values: Vec<_> = {
            let mut evaluator = Evaluator {
                loader: &self,
                consts: &resolved,
                slots: vec![Slot::Pending; resolved.len()],
            };
            (0..resolved.len()).map(|i| evaluator.value(i)).collect()
        };

        for (c, value) in resolved.into_iter().zip(values) {
            if value.is_none() && c.declared_type.is_some() {
                tracing::debug!(name = %c.pending.name, "initializer is not const-evaluable");
            }
            self.model.add_const(ConstDef {
                name: c.pending.name,
                position: c.pending.position,
                declared_type: c.declared_type,
                value: value.map(Evaluated::into_value),
                owner: c.owner,
            });
        }
        self.model
    }

    /// Whether a constructor call `ctor(..)` builds values of type `ty`.
    fn constructor_names(&self, ctor: &str, ty: TypeId) -> bool {
        ctor == "Self" || self.model.type_def(ty).is_some_and(|t| t.name == ctor)
    }

    fn resolve_type(&self, name: &str, file: &Path, module_path: &[String]) -> Option<TypeId> {
        let candidates: Vec<_> = self.model.type_defs().iter().filter(|t| t.name == name).collect();
        nearest(&candidates, file, module_path, |t| (&t.position.file, &t.module_path)).map(|t| t.id)
    }
}

/// The candidate in the same file and module, else in the same file, else the only one.
fn nearest<'c, T>(
    candidates: &[&'c T],
    file: &Path,
    module_path: &[String],
    location: impl Fn(&T) -> (&PathBuf, &Vec<String>),
) -> Option<&'c T> {
    if let Some(c) = candidates.iter().find(|c| {
        let (f, m) = location(c);
        f == file && m == module_path
    }) {
        return Some(*c);
    }
    if let Some(c) = candidates.iter().find(|c| location(c).0 == file) {
        return Some(*c);
    }
    match candidates {
        [only] => Some(*only),
        _ => None,
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Pending,
    InProgress,
    Done(Option<Evaluated>),
}

/// Evaluates resolved constants on demand, following references between them.
struct Evaluator<'a> {
    loader: &'a Loader,
    consts: &'a [ResolvedConst],
    slots: Vec<Slot>,
}

impl Evaluator<'_> {
    fn value(&mut self, index: usize) -> Option<Evaluated> {
        match &self.slots[index] {
            Slot::Done(value) => return value.clone(),
            Slot::InProgress => {
                tracing::debug!(name = %self.consts[index].pending.name, "constant refers to itself");
                return None;
            }
            Slot::Pending => {}
        }
        self.slots[index] = Slot::InProgress;

        let consts = self.consts;
        let c = &consts[index];
        let applies = match (&c.pending.init.constructor, c.declared_type) {
            (None, _) => true,
            (Some(ctor), Some(ty)) => self.loader.constructor_names(ctor, ty),
            (Some(_), None) => false,
        };
        let value = if applies {
            let mut scope = Scope { evaluator: self, from: index };
            eval_const_expr(&c.pending.init.expr, c.int_type, &mut scope)
        } else {
            None
        };
        self.slots[index] = Slot::Done(value.clone());
        value
    }

    /// Index of the constant `path` names, seen from the constant at `from`.
    fn lookup(&self, path: &syn::Path, from: usize) -> Option<usize> {
        let here = &self.consts[from];
        let name = path.segments.last()?.ident.to_string();
        let owner = match path.segments.len() {
            0 | 1 => None,
            n => {
                let qualifier = path.segments[n - 2].ident.to_string();
                match (qualifier.as_str(), here.owner) {
                    ("Self", ConstOwner::Associated(id)) => Some(id),
                    ("Self", ConstOwner::Free) => return None,
                    _ => self
                        .loader
                        .resolve_type(&qualifier, &here.pending.position.file, &here.pending.module_path),
                }
            }
        };
        let want = owner.map_or(ConstOwner::Free, ConstOwner::Associated);
        let candidates: Vec<_> = self
            .consts
            .iter()
            .filter(|c| c.pending.name == name && c.owner == want)
            .collect();
        let found = nearest(
            &candidates,
            &here.pending.position.file,
            &here.pending.module_path,
            |c| (&c.pending.position.file, &c.pending.module_path),
        )?;
        self.consts.iter().position(|c| std::ptr::eq(c, found))
    }
}

/// Resolution scope of one initializer.
struct Scope<'e, 'a> {
    evaluator: &'e mut Evaluator<'a>,
    from: usize,
}

impl ConstEnv for Scope<'_, '_> {
    fn resolve(&mut self, path: &syn::Path) -> Option<Evaluated> {
        let index = self.evaluator.lookup(path, self.from)?;
        self.evaluator.value(index)
    }
}

/// Walks the items of one file.
struct FileWalker<'w> {
    path: &'w Path,
    index: &'w LineIndex<'w>,
    module_path: Vec<String>,
    loader: &'w mut Loader,
}

impl FileWalker<'_> {
    fn position(&self, span: Span) -> Position {
        let start = span.start();
        Position::new(self.path, start.line, start.column, self.index.offset(start))
    }

    fn walk_items(&mut self, items: &[Item]) {
        for item in items {
            self.walk_item(item);
        }
    }

    fn walk_item(&mut self, item: &Item) {
        match item {
            Item::Struct(s) => match &s.fields {
                Fields::Unnamed(f) if f.unnamed.len() == 1 => {
                    let int_repr = f
                        .unnamed
                        .first()
                        .and_then(|field| type_name(&field.ty, None))
                        .and_then(|name| IntType::from_name(&name));
                    self.add_type(&s.ident, TypeShape::Newtype, int_repr);
                }
                _ => self.add_type(&s.ident, TypeShape::Other, None),
            },
            Item::Enum(e) => self.add_type(&e.ident, TypeShape::Other, None),
            Item::Union(u) => self.add_type(&u.ident, TypeShape::Other, None),
            Item::Type(t) => self.add_type(&t.ident, TypeShape::Other, None),
            Item::Const(c) => {
                let name = c.ident.to_string();
                let position = self.position(c.ident.span());
                self.add_const(name, position, &c.ty, &c.expr, None);
            }
            Item::Fn(f) => self.add_item(ItemKind::Fn, &f.sig.ident),
            Item::Static(s) => self.add_item(ItemKind::Static, &s.ident),
            Item::Trait(t) => self.add_item(ItemKind::Trait, &t.ident),
            Item::TraitAlias(t) => self.add_item(ItemKind::Trait, &t.ident),
            Item::Macro(m) => {
                if let Some(ident) = &m.ident {
                    self.add_item(ItemKind::Macro, ident);
                }
            }
            Item::Mod(m) => {
                self.add_item(ItemKind::Module, &m.ident);
                if let Some((_, items)) = &m.content {
                    self.module_path.push(m.ident.to_string());
                    self.walk_items(items);
                    self.module_path.pop();
                }
            }
            Item::Impl(imp) => self.walk_impl(imp),
            _ => {}
        }
    }

    fn walk_impl(&mut self, imp: &syn::ItemImpl) {
        let self_name = type_name(&imp.self_ty, None);
        let inherent = imp.trait_.is_none();
        for item in &imp.items {
            match item {
                ImplItem::Const(c) if inherent => {
                    let Some(owner) = self_name.clone() else {
                        continue;
                    };
                    let name = c.ident.to_string();
                    let position = self.position(c.ident.span());
                    self.add_const(name, position, &c.ty, &c.expr, Some(owner));
                }
                ImplItem::Fn(f) => self.add_item(ItemKind::Method, &f.sig.ident),
                _ => {}
            }
        }
    }

    fn add_type(&mut self, ident: &syn::Ident, shape: TypeShape, int_repr: Option<IntType>) {
        let position = self.position(ident.span());
        self.loader
            .model
            .add_type_in_module(ident.to_string(), position, self.module_path.clone(), shape, int_repr);
    }

    fn add_item(&mut self, kind: ItemKind, ident: &syn::Ident) {
        let position = self.position(ident.span());
        self.loader.model.add_item(kind, ident.to_string(), position);
    }

    fn add_const(&mut self, name: String, position: Position, ty: &Type, expr: &Expr, owner: Option<String>) {
        let type_name = type_name(ty, owner.as_deref());
        let init = initializer(expr, owner.as_deref());
        self.loader.pending.push(PendingConst {
            name,
            position,
            module_path: self.module_path.clone(),
            type_name,
            owner_name: owner,
            init,
        });
    }
}

/// Last path segment of a type, with `Self` replaced by the enclosing impl's type.
fn type_name(ty: &Type, self_name: Option<&str>) -> Option<String> {
    match ty {
        Type::Path(p) if p.qself.is_none() => {
            let last = p.path.segments.last()?.ident.to_string();
            if last == "Self" {
                self_name.map(str::to_string)
            } else {
                Some(last)
            }
        }
        Type::Paren(p) => type_name(&p.elem, self_name),
        Type::Group(g) => type_name(&g.elem, self_name),
        _ => None,
    }
}

/// Split `Type(expr)` or `Self(expr)` into constructor and argument; any other initializer is kept whole.
fn initializer(expr: &Expr, self_name: Option<&str>) -> Initializer {
    match expr {
        Expr::Call(call) if call.args.len() == 1 => {
            let constructor = match &*call.func {
                Expr::Path(p) => p.path.segments.last().map(|s| {
                    let name = s.ident.to_string();
                    match (name.as_str(), self_name) {
                        ("Self", Some(owner)) => owner.to_string(),
                        _ => name,
                    }
                }),
                _ => None,
            };
            match (constructor, call.args.first()) {
                (Some(constructor), Some(arg)) => Initializer {
                    constructor: Some(constructor),
                    expr: arg.clone(),
                },
                _ => Initializer {
                    constructor: None,
                    expr: expr.clone(),
                },
            }
        }
        Expr::Paren(p) => initializer(&p.expr, self_name),
        Expr::Group(g) => initializer(&g.expr, self_name),
        other => Initializer {
            constructor: None,
            expr: other.clone(),
        },
    }
}

fn parse_error(path: &Path, text: &str, err: &syn::Error) -> LoadError {
    let index = LineIndex::new(text);
    let span = err.span();
    let start = index.offset(span.start());
    let end = index.offset(span.end()).max(start);
    LoadError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
        src: NamedSource::new(path.display().to_string(), text.to_string()),
        span: (start, (end - start).max(1)).into(),
    }
}

/// Converts `proc-macro2` line/column pairs into byte offsets.
struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    fn offset(&self, at: LineColumn) -> usize {
        let Some(&start) = self.line_starts.get(at.line.saturating_sub(1)) else {
            return self.text.len();
        };
        self.text[start..]
            .char_indices()
            .nth(at.column)
            .map(|(i, _)| start + i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::model::{ConstValue, Definition};

    fn load(src: &str) -> SourceModel {
        load_sources(&[(PathBuf::from("src/kind.rs"), src.to_string())]).unwrap()
    }

    #[test]
    fn test_newtype_and_free_constants() {
        let model = load(
            "pub struct Kind(pub i32);\n\
             pub const KIND1: Kind = Kind(0);\n\
             pub const KIND2: Kind = Kind(1);\n",
        );
        let kind = model.find_type_by_name("Kind").unwrap();
        assert_eq!(kind.shape, TypeShape::Newtype);
        assert_eq!(kind.position.line, 1);

        let consts = model.constants_of_type(kind.id);
        assert_eq!(consts.len(), 2);
        assert_eq!(consts[0].value, Some(ConstValue::Int(0)));
        assert_eq!(consts[1].value, Some(ConstValue::Int(1)));
        assert_eq!(consts[0].owner, ConstOwner::Free);
        assert!(consts[0].position.offset < consts[1].position.offset);
    }

    #[test]
    fn test_associated_constants_use_self() {
        let model = load(
            "struct StrKind(&'static str);\n\
             impl StrKind {\n\
                 const HELLO: Self = Self(\"Hello\");\n\
                 const WORLD: StrKind = StrKind(\"World\");\n\
                 fn helper(&self) {}\n\
             }\n",
        );
        let ty = model.find_type_by_name("StrKind").unwrap().id;
        let consts = model.constants_of_type(ty);
        assert_eq!(consts.len(), 2);
        assert_eq!(consts[0].owner, ConstOwner::Associated(ty));
        assert_eq!(consts[0].value, Some(ConstValue::Text("Hello".to_string())));
        assert_eq!(model.item_defs()[0].kind, ItemKind::Method);
    }

    #[test]
    fn test_byte_offsets_match_text() {
        let src = "// héllo\nstruct Kind(u8);\nconst A: Kind = Kind(1);\n";
        let model = load(src);
        let a = &model.const_defs()[0];
        assert_eq!(&src[a.position.offset..a.position.offset + 1], "A");
        assert_eq!(a.position.line, 3);
    }

    #[test]
    fn test_mismatched_constructor_has_no_value() {
        let model = load(
            "struct Kind(u8);\nstruct Other(u8);\n\
             const A: Kind = Other(1);\n",
        );
        assert_eq!(model.const_defs()[0].value, None);
    }

    #[test]
    fn test_newtype_records_integer_field_type() {
        let model = load("struct Flags(pub u8);\nstruct Name(&'static str);\ntype Alias = i32;\n");
        let flags = model.find_type_by_name("Flags").unwrap();
        assert_eq!(flags.int_repr, IntType::from_name("u8"));
        assert_eq!(model.find_type_by_name("Name").unwrap().int_repr, None);
        let alias = model.find_type_by_name("Alias").unwrap();
        assert_eq!((alias.shape, alias.int_repr), (TypeShape::Other, None));
    }

    #[test]
    fn test_not_wraps_to_field_width() {
        let model = load(
            "pub struct Flags(pub u8);\n\
             pub const NONE: Flags = Flags(0);\n\
             pub const ALL: Flags = Flags(!0);\n",
        );
        let values: Vec<_> = model.const_defs().iter().map(|c| c.value.clone()).collect();
        assert_eq!(values, vec![Some(ConstValue::Int(0)), Some(ConstValue::Int(255))]);
    }

    #[test]
    fn test_cast_truncates_to_target() {
        let model = load("pub struct B(pub u8);\npub const A: B = B(300u16 as u8);\n");
        assert_eq!(model.const_defs()[0].value, Some(ConstValue::Int(44)));
    }

    #[test]
    fn test_out_of_range_value_has_none() {
        let model = load("pub struct B(pub u8);\npub const A: B = B(300u16);\npub const C: B = B(-1);\n");
        assert_eq!(model.const_defs()[0].value, None);
        assert_eq!(model.const_defs()[1].value, None);
    }

    #[test]
    fn test_paths_to_other_constants_resolve() {
        let model = load(
            "pub struct Kind(pub i32);\n\
             const BASE: i32 = 4;\n\
             pub const KIND1: Kind = Kind(BASE + 1);\n\
             pub const DEFAULT: Kind = KIND1;\n\
             impl Kind {\n\
                 pub const NEXT: Kind = Self(Self::LAST.0 - 1);\n\
                 pub const LAST: Kind = Kind(KIND1.0 * 2);\n\
             }\n",
        );
        let value = |name: &str| {
            model
                .const_defs()
                .iter()
                .find(|c| c.name == name)
                .and_then(|c| c.value.clone())
        };
        assert_eq!(value("BASE"), Some(ConstValue::Int(4)));
        assert_eq!(value("KIND1"), Some(ConstValue::Int(5)));
        assert_eq!(value("DEFAULT"), Some(ConstValue::Int(5)));
        assert_eq!(value("LAST"), Some(ConstValue::Int(10)));
        assert_eq!(value("NEXT"), Some(ConstValue::Int(9)));
    }

    #[test]
    fn test_reference_cycles_have_no_value() {
        let model = load(
            "struct Kind(i32);\n\
             const A: Kind = Kind(B.0);\n\
             const B: Kind = Kind(A.0);\n\
             const C: Kind = Kind(MISSING);\n",
        );
        assert!(model.const_defs().iter().all(|c| c.value.is_none()));
    }

    #[test]
    fn test_constants_resolve_across_files() {
        let model = load_sources(&[
            (PathBuf::from("src/a.rs"), "pub struct Kind(pub u8);\npub const A: Kind = Kind(B.0 + 1);\n".to_string()),
            (PathBuf::from("src/b.rs"), "pub const B: Kind = Kind(2);\n".to_string()),
        ])
        .unwrap();
        assert_eq!(model.const_defs()[0].value, Some(ConstValue::Int(3)));
    }

    #[test]
    fn test_type_resolution_prefers_same_module() {
        let model = load(
            "struct Kind(u8);\n\
             mod inner {\n\
                 pub struct Kind(u8);\n\
                 pub const A: Kind = Kind(1);\n\
             }\n",
        );
        let inner = model
            .type_defs()
            .iter()
            .find(|t| t.module_path == vec!["inner".to_string()])
            .unwrap();
        assert_eq!(model.const_defs()[0].declared_type, Some(inner.id));
    }

    #[test]
    fn test_types_resolve_across_files() {
        let model = load_sources(&[
            (PathBuf::from("src/a.rs"), "pub struct Kind(pub u8);\n".to_string()),
            (PathBuf::from("src/b.rs"), "pub const B: Kind = Kind(2);\n".to_string()),
        ])
        .unwrap();
        let kind = model.find_type_by_name("Kind").unwrap().id;
        assert_eq!(model.constants_of_type(kind).len(), 1);
    }

    #[test]
    fn test_other_items_are_recorded() {
        let model = load("fn main() {}\nstatic S: u8 = 0;\nmacro_rules! m { () => {} }\n");
        let found = model.find_in_file_after_line(Path::new("src/kind.rs"), 0);
        let described: Vec<String> = found.iter().map(Definition::describe).collect();
        assert_eq!(described, vec!["fn main", "static S", "macro m"]);
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = load_sources(&[(PathBuf::from("src/bad.rs"), "struct Kind(\n".to_string())]).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.path(), &PathBuf::from("src/bad.rs"));
    }
}
