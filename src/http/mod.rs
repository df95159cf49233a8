//! HTTP protocol layer module
//!
//! Request path decoding, the response writing capability for handlers and
//! the router's own fixed responses, decoupled from route lookup.

pub mod path;
pub mod response;
pub mod writer;

pub use path::{decode_path, request_path};
pub use response::{build_400_response, build_404_response, build_413_response};
pub use writer::ResponseWriter;
