mod axioms;
mod closure;
mod error;
mod index;
pub mod vocab;

pub use closure::{compute_closure, transitive_closure};
pub use error::{CycleError, ReasonerError, SchemaGraph};
pub use index::{ReasonerIndex, TermMap};
pub use vocab::RuleSet;
