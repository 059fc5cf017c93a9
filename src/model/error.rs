use std::io;
use std::path::PathBuf;

/// Failures raised by the text store and its file persistence.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Growing the gap buffer could not allocate. The document is left as it was
    /// before the edit that triggered the growth.
    #[error("memory: could not grow buffer to {requested} bytes")]
    OutOfMemory { requested: usize },

    /// The file exists but could not be read.
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be opened or written for saving.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
