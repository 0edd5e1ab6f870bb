use grdfs_arena::BackingStoreError;
use grdfs_model::KeyId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error(transparent)]
    BackingStore(#[from] BackingStoreError),
    /// `find` was called with an id this dictionary never issued.
    #[error("unknown key {0:?}")]
    UnknownKey(KeyId),
}
