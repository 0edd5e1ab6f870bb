//! Core types shared by the `grdfs` RDFS materialization crates: the tagged
//! [`KeyId`], the [`TermKind`] it encodes, and [`Triple`]/[`TripleFlags`].

mod key;
mod triple;

pub use key::{KeyId, TermKind, BLANK_BIT, CORE_MASK, LITERAL_BIT};
pub use triple::{Triple, TripleFlags};
