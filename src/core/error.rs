//! Error types for the logger

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Output file could not be opened or created
    #[error("cannot open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Rotation rename step failed
    #[error("cannot rename '{from}' to '{to}': {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    /// Write to the log destination failed
    #[error("write to log destination failed: {0}")]
    Write(#[from] std::io::Error),
}

impl LogError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        LogError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a rename error for a failed rotation step
    pub fn rename(from: impl Into<String>, to: impl Into<String>, source: std::io::Error) -> Self {
        LogError::Rename {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}
