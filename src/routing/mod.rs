//! Routing module
//!
//! Static routing only: a request matches when its method and path equal a
//! registered pair exactly.

mod table;

pub use table::{route_key, HandlerFunc, RouteTable};
