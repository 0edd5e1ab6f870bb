mod error;
mod join;
mod pair_index;
mod table;

pub use error::KernelError;
pub use join::{HostKernelRuntime, JoinCount, JoinOutput, KernelRuntime, PairKeyFn};
pub use pair_index::PairIndex;
pub use table::SuccessorTable;
