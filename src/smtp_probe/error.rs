use thiserror::Error;

/// Transport-level failures. They never escape the probe: the driver turns
/// each one into an indeterminate outcome.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {target} failed: {source}")]
    Connect {
        target: String,
        #[source]
        source: std::io::Error,
    },
    #[error("connection to {target} timed out")]
    ConnectTimeout { target: String },
    #[error("timed out waiting for a reply")]
    Timeout,
    #[error("reply line exceeds {limit} bytes")]
    ReplyTooLong { limit: usize },
    #[error("I/O error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    pub(crate) fn io(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
