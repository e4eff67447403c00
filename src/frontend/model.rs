//! Semantic model of the scanned sources.
//!
//! The model is a set of typed, pre-classified definition tables produced once by a front end (see
//! [`crate::frontend::loader`]). The analysis passes only ever talk to it through [`SemanticModel`], so a
//! different front end can be swapped in without touching them.
//!
//! ## Notes
//!
//! - Nothing here performs IO; files are identified by the paths the front end recorded.
//! - Definitions are never mutated after the model is built.

use std::fmt;
use std::path::{Path, PathBuf};

/// Index of a type definition inside its model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub usize);

/// Source position of a definition's name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub file: PathBuf,
    /// 1-based line.
    pub line: usize,
    /// 0-based column, in characters.
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
}

impl Position {
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column + 1)
    }
}

/// Structural shape of a type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// Tuple struct with exactly one unnamed field.
    Newtype,
    /// Any other struct, enum, union, or type alias.
    Other,
}

/// Primitive integer type: width in bits and signedness.
///
/// Values are carried as `i128`, so `u128` is limited to `0..=i128::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    pub bits: u32,
    pub signed: bool,
}

impl IntType {
    /// Type of an unsuffixed literal with nothing to infer from.
    pub const I32: IntType = IntType { bits: 32, signed: true };

    /// Parse a primitive integer type name (`u8`, `isize`, ...). Pointer-sized types are 64 bits wide.
    pub fn from_name(name: &str) -> Option<Self> {
        let (signed, width) = match name.split_at_checked(1)? {
            ("i", width) => (true, width),
            ("u", width) => (false, width),
            _ => return None,
        };
        let bits = match width {
            "8" => 8,
            "16" => 16,
            "32" => 32,
            "64" | "size" => 64,
            "128" => 128,
            _ => return None,
        };
        Some(Self { bits, signed })
    }

    pub fn min(self) -> i128 {
        match (self.signed, self.bits) {
            (false, _) => 0,
            (true, 128) => i128::MIN,
            (true, bits) => -(1i128 << (bits - 1)),
        }
    }

    pub fn max(self) -> i128 {
        match (self.signed, self.bits) {
            (_, 128) => i128::MAX,
            (true, bits) => (1i128 << (bits - 1)) - 1,
            (false, bits) => (1i128 << bits) - 1,
        }
    }

    pub fn contains(self, v: i128) -> bool {
        (self.min()..=self.max()).contains(&v)
    }

    /// Two's-complement truncation of `v` to this type, as `as` and `!` behave.
    ///
    /// `None` when the wrapped value is not representable (`u128` above `i128::MAX`).
    pub fn wrap(self, v: i128) -> Option<i128> {
        if self.bits == 128 {
            return (self.signed || v >= 0).then_some(v);
        }
        let modulus = 1i128 << self.bits;
        let r = v.rem_euclid(modulus);
        Some(if self.signed && r > self.max() { r - modulus } else { r })
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.signed { 'i' } else { 'u' }, self.bits)
    }
}

/// A named type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub id: TypeId,
    pub name: String,
    pub position: Position,
    /// Inline module path inside the file (empty at file level).
    pub module_path: Vec<String>,
    pub shape: TypeShape,
    /// Primitive integer type of a newtype's field (`u8` in `struct Flags(u8)`).
    pub int_repr: Option<IntType>,
}

/// Literal value of a constant after const evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstValue {
    Int(i128),
    Text(String),
}

impl ConstValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConstValue::Int(_) => ValueKind::Integer,
            ConstValue::Text(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Int(v) => write!(f, "{}", v),
            ConstValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Shared literal representation of a constant group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// Where a constant is declared, which decides how generated code names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstOwner {
    /// A module-level `const` item, referenced by its bare name.
    Free,
    /// An associated constant in an inherent `impl` of the given type, referenced as `Type::NAME`.
    Associated(TypeId),
}

/// A constant definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDef {
    pub name: String,
    pub position: Position,
    /// Nominally resolved declared type, when it names a type in the model.
    pub declared_type: Option<TypeId>,
    /// Evaluated literal value, when the initializer is const-evaluable.
    pub value: Option<ConstValue>,
    pub owner: ConstOwner,
}

/// Kind of a definition that is neither a type nor a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Fn,
    Method,
    Static,
    Trait,
    Module,
    Macro,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::Fn => "fn",
            ItemKind::Method => "method",
            ItemKind::Static => "static",
            ItemKind::Trait => "trait",
            ItemKind::Module => "mod",
            ItemKind::Macro => "macro",
        };
        f.write_str(s)
    }
}

/// Any other named definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDef {
    pub kind: ItemKind,
    pub name: String,
    pub position: Position,
}

/// A borrowed view over one definition of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition<'a> {
    Type(&'a TypeDef),
    Const(&'a ConstDef),
    Item(&'a ItemDef),
}

impl<'a> Definition<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Definition::Type(t) => &t.name,
            Definition::Const(c) => &c.name,
            Definition::Item(i) => &i.name,
        }
    }

    pub fn position(&self) -> &'a Position {
        match self {
            Definition::Type(t) => &t.position,
            Definition::Const(c) => &c.position,
            Definition::Item(i) => &i.position,
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Definition::Type(_))
    }

    /// Short human-readable description (`fn main`, `const KIND1`).
    pub fn describe(&self) -> String {
        match self {
            Definition::Type(t) => format!("type {}", t.name),
            Definition::Const(c) => format!("const {}", c.name),
            Definition::Item(i) => format!("{} {}", i.kind, i.name),
        }
    }
}

/// Read-only query interface over a semantic model.
///
/// Implementors only provide the three definition tables; every query has a default implementation.
pub trait SemanticModel {
    fn type_defs(&self) -> &[TypeDef];
    fn const_defs(&self) -> &[ConstDef];
    fn item_defs(&self) -> &[ItemDef];

    fn type_def(&self, id: TypeId) -> Option<&TypeDef> {
        self.type_defs().iter().find(|t| t.id == id)
    }

    /// First type definition named `name`, in model order.
    fn find_type_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.type_defs().iter().find(|t| t.name == name)
    }

    /// All definitions in `file` whose line is `>= line`, nearest first.
    ///
    /// Ties on the same line are ordered by column.
    fn find_in_file_after_line(&self, file: &Path, line: usize) -> Vec<Definition<'_>> {
        let mut found: Vec<Definition<'_>> = self
            .type_defs()
            .iter()
            .map(Definition::Type)
            .chain(self.const_defs().iter().map(Definition::Const))
            .chain(self.item_defs().iter().map(Definition::Item))
            .filter(|d| d.position().file == file && d.position().line >= line)
            .collect();
        found.sort_by_key(|d| (d.position().line, d.position().column));
        found
    }

    /// Constants whose declared type is exactly `ty`, in model order.
    fn constants_of_type(&self, ty: TypeId) -> Vec<&ConstDef> {
        self.const_defs().iter().filter(|c| c.declared_type == Some(ty)).collect()
    }
}

/// In-memory semantic model.
#[derive(Debug, Clone, Default)]
pub struct SourceModel {
    types: Vec<TypeDef>,
    constants: Vec<ConstDef>,
    items: Vec<ItemDef>,
}

impl SourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type and return its id.
    pub fn add_type(&mut self, name: impl Into<String>, position: Position, shape: TypeShape) -> TypeId {
        self.add_type_in_module(name, position, Vec::new(), shape, None)
    }

    /// Register a type declared inside inline modules of its file.
    pub fn add_type_in_module(
        &mut self,
        name: impl Into<String>,
        position: Position,
        module_path: Vec<String>,
        shape: TypeShape,
        int_repr: Option<IntType>,
    ) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(TypeDef {
            id,
            name: name.into(),
            position,
            module_path,
            shape,
            int_repr,
        });
        id
    }

    pub fn add_const(&mut self, konst: ConstDef) {
        self.constants.push(konst);
    }

    pub fn add_item(&mut self, kind: ItemKind, name: impl Into<String>, position: Position) {
        self.items.push(ItemDef {
            kind,
            name: name.into(),
            position,
        });
    }
}

impl SemanticModel for SourceModel {
    fn type_defs(&self) -> &[TypeDef] {
        &self.types
    }

    fn const_defs(&self) -> &[ConstDef] {
        &self.constants
    }

    fn item_defs(&self) -> &[ItemDef] {
        &self.items
    }
}
