//! Route table
//!
//! Exact-match mapping from `METHOD path` keys to handlers.

use hyper::body::Bytes;
use hyper::{Method, Request};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::http::ResponseWriter;

/// A registered handler. It owns the response through the writer and
/// returns nothing.
pub type HandlerFunc = Arc<dyn Fn(&mut ResponseWriter, &Request<Bytes>) + Send + Sync>;

/// Composite key for a method and a literal path.
///
/// Method tokens never contain a space, so the first space always splits the
/// key back into its two parts and distinct pairs cannot collide.
pub fn route_key(method: &Method, path: &str) -> String {
    format!("{} {path}", method.as_str())
}

#[derive(Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, HandlerFunc>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` under the method/path key. Returns `true` when an
    /// earlier handler for the same key was replaced.
    pub fn insert(&mut self, method: &Method, path: &str, handler: HandlerFunc) -> bool {
        self.routes
            .insert(route_key(method, path), handler)
            .is_some()
    }

    pub fn lookup(&self, method: &Method, path: &str) -> Option<&HandlerFunc> {
        self.routes.get(&route_key(method, path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.routes.keys().collect();
        keys.sort();
        f.debug_struct("RouteTable").field("routes", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> HandlerFunc {
        Arc::new(|_w: &mut ResponseWriter, _req: &Request<Bytes>| {})
    }

    #[test]
    fn test_route_key() {
        assert_eq!(route_key(&Method::GET, "/hello"), "GET /hello");
        assert_eq!(route_key(&Method::POST, "/"), "POST /");
    }

    #[test]
    fn test_hyphenated_method_does_not_collide() {
        let hyphenated = Method::from_bytes(b"A-B").unwrap();
        let plain = Method::from_bytes(b"A").unwrap();

        let mut table = RouteTable::new();
        assert!(!table.insert(&hyphenated, "/x", noop()));
        assert!(!table.insert(&plain, "B-/x", noop()));
        assert_eq!(table.len(), 2);
        assert!(table.lookup(&hyphenated, "/x").is_some());
        assert!(table.lookup(&plain, "B-/x").is_some());
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut table = RouteTable::new();
        table.insert(&Method::GET, "/about", noop());

        assert!(table.lookup(&Method::GET, "/about").is_some());
        assert!(table.lookup(&Method::GET, "/about/").is_none());
        assert!(table.lookup(&Method::GET, "/About").is_none());
        assert!(table.lookup(&Method::HEAD, "/about").is_none());
    }

    #[test]
    fn test_insert_reports_replacement() {
        let mut table = RouteTable::new();
        assert!(!table.insert(&Method::GET, "/", noop()));
        assert!(table.insert(&Method::GET, "/", noop()));
        assert!(!table.insert(&Method::POST, "/", noop()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_debug_lists_sorted_keys() {
        let mut table = RouteTable::new();
        table.insert(&Method::POST, "/login", noop());
        table.insert(&Method::GET, "/", noop());
        assert_eq!(
            format!("{table:?}"),
            r#"RouteTable { routes: ["GET /", "POST /login"] }"#
        );
    }
}
