use std::io;
use thiserror::Error;

/// A file or memory-mapping operation failed. Fatal: the arena cannot make
/// progress once this happens.
#[derive(Debug, Error)]
pub enum BackingStoreError {
    #[error("paged arena I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("paged arena allocation of {requested} bytes exceeds the maximum arena size")]
    AllocationTooLarge { requested: usize },
}

impl From<BackingStoreError> for io::Error {
    fn from(error: BackingStoreError) -> Self {
        match error {
            BackingStoreError::Io(error) => error,
            BackingStoreError::AllocationTooLarge { .. } => {
                Self::new(io::ErrorKind::OutOfMemory, error.to_string())
            }
        }
    }
}
