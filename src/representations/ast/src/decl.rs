use crate::{FuncDecl, NamespaceDecl};
use derive_more::IsVariant;
use source_files::Source;

/// A top-level or namespace-scope declaration.
#[derive(Clone, Debug)]
pub struct Decl {
    pub kind: DeclKind,
    pub source: Source,

    /// Compiler-synthesized declarations are materialized on demand by later
    /// stages and are never scheduled directly.
    pub is_implicit: bool,
}

impl Decl {
    pub fn new(kind: DeclKind, source: Source) -> Self {
        Self {
            kind,
            source,
            is_implicit: false,
        }
    }

    pub fn implicit(kind: DeclKind, source: Source) -> Self {
        Self {
            kind,
            source,
            is_implicit: true,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            DeclKind::Func(func) => Some(&func.name),
            DeclKind::Namespace(namespace) => Some(&namespace.name),
            DeclKind::Record(record) => Some(&record.name),
            DeclKind::Enum(enumeration) => Some(&enumeration.name),
            DeclKind::Buffer(buffer) => Some(&buffer.name),
            DeclKind::Var(var) => Some(&var.name),
            DeclKind::TypeAlias(alias) => Some(&alias.name),
            DeclKind::Template(template) => Some(&template.name),
            DeclKind::Using(_) | DeclKind::Empty => None,
        }
    }
}

// Downstream crates must keep a wildcard arm when dispatching over this,
// which is where additions to the kind set get flagged.
#[derive(Clone, Debug, IsVariant)]
#[non_exhaustive]
pub enum DeclKind {
    Func(FuncDecl),
    Namespace(NamespaceDecl),
    Record(RecordDecl),
    Enum(EnumDecl),
    Buffer(BufferDecl),
    Var(VarDecl),
    TypeAlias(TypeAliasDecl),
    Template(TemplateDecl),
    Using(UsingDecl),
    Empty,
}

#[derive(Clone, Debug)]
pub struct RecordDecl {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct EnumDecl {
    pub name: String,
}

/// A resource buffer declaration (`cbuffer` / `tbuffer`).
#[derive(Clone, Debug)]
pub struct BufferDecl {
    pub name: String,
    pub is_cbuffer: bool,
}

#[derive(Clone, Debug)]
pub struct VarDecl {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct TypeAliasDecl {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct TemplateDecl {
    pub name: String,
    pub kind: TemplateKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum TemplateKind {
    Class,
    Func,
    TypeAlias,
    Var,
}

#[derive(Clone, Debug)]
pub struct UsingDecl {
    pub kind: UsingKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum UsingKind {
    Declaration,
    Directive,
}
