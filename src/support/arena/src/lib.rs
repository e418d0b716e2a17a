#![no_std]

/*
    =======================  support/arena/src/lib.rs  ========================
    A minimal index-based arena with strongly-typed handles
    ---------------------------------------------------------------------------
*/

mod arena;
mod id;
mod idx;
mod iter;
mod new_id;

extern crate alloc;

pub use arena::Arena;
pub use id::Id;
pub use idx::Idx;
pub use iter::{Iter, Keys};
