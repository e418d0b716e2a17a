use crate::Decl;
use arena::{Arena, Idx, new_id};
use std::ops::Index;

new_id!(DeclKey, u32);

/// A stable, comparable handle to one declaration, used as the dedup key
/// during scheduling.
pub type DeclId = Idx<DeclKey, Decl>;

/// A parsed translation unit: all declarations, arena-allocated, plus the
/// top-level ones in source order.
#[derive(Debug, Default)]
pub struct TranslationUnit {
    decls: Arena<DeclKey, Decl>,
    top_level: Vec<DeclId>,
}

impl TranslationUnit {
    pub fn new() -> Self {
        Self {
            decls: Arena::new(),
            top_level: Vec::new(),
        }
    }

    /// Allocates a declaration without making it top-level. Used for
    /// namespace children, which are linked by their parent.
    pub fn add(&mut self, decl: Decl) -> DeclId {
        self.decls.alloc(decl)
    }

    /// Allocates a declaration and appends it to the top level.
    pub fn add_top_level(&mut self, decl: Decl) -> DeclId {
        let id = self.decls.alloc(decl);
        self.top_level.push(id);
        id
    }

    /// Top-level declarations in source order.
    pub fn top_level(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.top_level.iter().copied()
    }

    pub fn get(&self, id: DeclId) -> &Decl {
        &self.decls[id]
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl Index<DeclId> for TranslationUnit {
    type Output = Decl;

    fn index(&self, id: DeclId) -> &Self::Output {
        &self.decls[id]
    }
}
