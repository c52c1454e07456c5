use thiserror::Error;

/// Everything that can go wrong when talking to the ledger,
/// either directly or through a textual command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested address space is larger than the
    /// simulator supports.
    #[error("memory size {requested} exceeds the maximum allowed ({max} addresses)")]
    CapacityExceeded { requested: usize, max: usize },
    /// No hole is large enough for the request.
    #[error("insufficient memory to allocate {size} addresses for process {owner}")]
    InsufficientMemory { owner: String, size: usize },
    #[error("process {0} not found")]
    UnknownOwner(String),
    #[error("process {0} already holds a block")]
    OwnerExists(String),
    /// Malformed input: bad sizes, unknown policies, unknown
    /// commands.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
