// Connection handling module
// Serves one accepted TCP connection per task and dispatches its requests

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes, Incoming};
use hyper::header::{HeaderMap, CONTENT_LENGTH};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, Version};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::engine::Engine;
use crate::http;
use crate::logger::{self, AccessLogEntry, AccessLogFormat};

/// Per-connection request handling options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Access log layout, `None` when access logging is off
    pub access_log: Option<AccessLogFormat>,
    /// Largest request body accepted, in bytes
    pub max_body_size: u64,
}

/// Serve `stream` on its own task. Requests on a keep-alive connection are
/// handled in order; separate connections run concurrently.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    engine: Arc<Engine>,
    options: ConnectionOptions,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let engine = Arc::clone(&engine);
                async move {
                    Ok::<_, Infallible>(handle_request(req, &engine, peer_addr, options).await)
                }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Buffer the request body, dispatch, and write the access log line
async fn handle_request(
    req: Request<Incoming>,
    engine: &Engine,
    peer_addr: SocketAddr,
    options: ConnectionOptions,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let mut entry = options.access_log.map(|_| access_entry(&req, peer_addr));

    let (parts, body) = req.into_parts();
    let body = read_body(&parts.headers, body, options.max_body_size).await;
    let response = match body {
        Ok(bytes) => engine.dispatch(&Request::from_parts(parts, bytes)),
        Err(resp) => resp,
    };

    if let (Some(entry), Some(format)) = (entry.as_mut(), options.access_log) {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(entry, format);
    }

    response
}

/// Collect at most `max_body_size` bytes of `body`.
///
/// A declared Content-Length over the limit is rejected before reading;
/// bodies without one are cut off once they pass it. Either way the caller
/// gets a 413 to send back.
async fn read_body<B>(
    headers: &HeaderMap,
    body: B,
    max_body_size: u64,
) -> Result<Bytes, Response<Full<Bytes>>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    if let Some(size) = declared_length(headers) {
        if size > max_body_size {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            return Err(http::build_413_response());
        }
    }

    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_error(&format!(
                "Request body exceeded {max_body_size} bytes while reading"
            ));
            Err(http::build_413_response())
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(http::build_400_response())
        }
    }
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(CONTENT_LENGTH)?;
    match value.to_str().ok().and_then(|v| v.trim().parse::<u64>().ok()) {
        Some(size) => Some(size),
        None => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: {value:?}, skipping size check"
            ));
            None
        }
    }
}

fn access_entry(req: &Request<Incoming>, peer_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
