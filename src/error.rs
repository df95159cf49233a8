use std::io;
use thiserror::Error;

/// Startup failures. Any of these ends `Engine::run`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to build runtime: {0}")]
    Runtime(#[source] io::Error),
}
