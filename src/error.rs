use std::io;

/// Listener startup or serve-loop failure. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

impl ServerError {
    /// Underlying I/O error kind, e.g. `AddrInUse` for a port conflict.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            ServerError::Bind { source, .. } => source.kind(),
            ServerError::Serve(e) => e.kind(),
        }
    }
}
