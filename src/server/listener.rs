// Listener module
// Resolves listen addresses and creates TCP listeners for the server loop

use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, ToSocketAddrs};
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Resolve a listen address string.
///
/// `":9999"` means every IPv4 interface; anything else must be `host:port`,
/// with host names resolved to their first address.
pub fn resolve_addr(addr: &str) -> Result<SocketAddr, ServerError> {
    let normalized = if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    };

    let invalid = |reason: String| ServerError::InvalidAddress {
        addr: addr.to_string(),
        reason,
    };

    normalized
        .to_socket_addrs()
        .map_err(|e| invalid(e.to_string()))?
        .next()
        .ok_or_else(|| invalid("address resolved to nothing".to_string()))
}

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Must be called from within a Tokio runtime.
pub fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow rebinding a port still in TIME_WAIT after a restart
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
