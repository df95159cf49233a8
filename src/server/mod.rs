// Server module entry point
// Runtime startup, accept loop and per-connection serving

pub mod connection;
pub mod listener;

pub use connection::ConnectionOptions;
pub use listener::{create_listener, resolve_addr};

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{LoggingSettings, Settings};
use crate::engine::Engine;
use crate::error::ServerError;
use crate::logger::{self, AccessLogFormat};

/// Build the Tokio runtime, bind `addr` and serve `engine` forever.
///
/// Only returns on a startup failure.
pub fn run(engine: Arc<Engine>, addr: &str, settings: &Settings) -> Result<(), ServerError> {
    let addr = resolve_addr(addr)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    let workers = settings.server.workers.filter(|&n| n > 0);
    if let Some(n) = workers {
        runtime_builder.worker_threads(n);
    }
    let runtime = runtime_builder.build().map_err(ServerError::Runtime)?;

    runtime.block_on(async move {
        let listener =
            create_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;
        logger::log_server_start(&addr, engine.len(), workers);
        serve(listener, engine, settings).await;
        Ok::<(), ServerError>(())
    })
}

/// Accept loop. Each connection gets its own task; accept errors are logged
/// and the loop keeps going.
pub async fn serve(listener: TcpListener, engine: Arc<Engine>, settings: &Settings) {
    let options = ConnectionOptions {
        access_log: access_log_format(&settings.logging),
        max_body_size: settings.server.max_body_size,
    };

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::handle_connection(stream, peer_addr, Arc::clone(&engine), options);
            }
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

fn access_log_format(settings: &LoggingSettings) -> Option<AccessLogFormat> {
    if !settings.access_log {
        return None;
    }
    match settings.access_log_format.parse() {
        Ok(format) => Some(format),
        Err(e) => {
            logger::log_warning(&format!("{e}, falling back to common"));
            Some(AccessLogFormat::Common)
        }
    }
}
