//! Logger module
//!
//! Logging utilities for the router:
//! - Server lifecycle and route registration
//! - Per-request access lines in several formats
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::{AccessLogEntry, AccessLogFormat};

use crate::config::LoggingSettings;
use std::net::SocketAddr;

/// Initialize the logger from settings
///
/// Should be called once at application startup. Until then every line goes
/// to stdout/stderr.
pub fn init(settings: &LoggingSettings) -> std::io::Result<()> {
    writer::init(
        settings.access_log_file.as_deref(),
        settings.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, route_count: usize, workers: Option<usize>) {
    write_info("======================================");
    write_info("Router started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Registered routes: {route_count}"));
    match workers {
        Some(n) => write_info(&format!("Worker threads: {n}")),
        None => write_info("Worker threads: default (CPU cores)"),
    }
    write_info("======================================");
}

pub fn log_route_registered(method: &str, path: &str, replaced: bool) {
    if replaced {
        write_info(&format!("[Route] {method:>4} - {path} (replaced)"));
    } else {
        write_info(&format!("[Route] {method:>4} - {path}"));
    }
}

pub fn log_not_found(method: &str, path: &str) {
    write_error(&format!("[WARN] No route for {method} {path}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_access(entry: &AccessLogEntry, format: AccessLogFormat) {
    write_info(&entry.format(format));
}
