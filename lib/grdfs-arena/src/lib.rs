//! A file-backed, page-growing memory-mapped byte arena.

mod arena;
mod error;

pub use arena::{PagedArena, INITIAL_PAGES, PAGE_SIZE};
pub use error::BackingStoreError;
