use thiserror::Error;

/// A join kernel's device allocation, build, or execution step failed.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("kernel allocation failed: {0}")]
    Allocation(String),
    #[error("kernel build failed: {message}")]
    Build {
        message: String,
        /// Device-reported build log, when the backend provides one.
        build_log: Option<String>,
    },
    #[error("kernel execution failed: {0}")]
    Execution(String),
}
