mod decl;
mod func;
mod namespace;
mod unit;

pub use decl::{
    BufferDecl, Decl, DeclKind, EnumDecl, RecordDecl, TemplateDecl, TemplateKind, TypeAliasDecl,
    UsingDecl, UsingKind, VarDecl,
};
pub use func::{FuncAttrs, FuncDecl, StageAttr};
pub use namespace::NamespaceDecl;
pub use unit::{DeclId, DeclKey, TranslationUnit};
