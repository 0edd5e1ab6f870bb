use grdfs_dict::DictionaryError;
use grdfs_kernel::KernelError;
use thiserror::Error;

/// Which adjacency map a cycle was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaGraph {
    SubClassOf,
    SubPropertyOf,
}

impl std::fmt::Display for SchemaGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubClassOf => write!(f, "subClassOf"),
            Self::SubPropertyOf => write!(f, "subPropertyOf"),
        }
    }
}

/// The schema subgraph for `graph` is not a DAG; transitive closure cannot run.
#[derive(Debug, Error)]
#[error("{graph} schema graph contains a cycle; closure requires a DAG")]
pub struct CycleError {
    pub graph: SchemaGraph,
}

/// Aggregates every error a reasoner operation can raise, so callers have
/// one type to match on.
#[derive(Debug, Error)]
pub enum ReasonerError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Cycle(#[from] CycleError),
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
