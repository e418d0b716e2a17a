use crate::DeclId;

#[derive(Clone, Debug)]
pub struct NamespaceDecl {
    pub name: String,

    /// Child declarations in source order.
    pub children: Vec<DeclId>,
}
