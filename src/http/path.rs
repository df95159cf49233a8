//! Request path decoding
//!
//! Routes are registered with plain paths (`/a b`), while the request line
//! can only carry their percent-encoded form (`/a%20b`).

use hyper::Request;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Percent-decode a raw URI path. Paths that do not decode to UTF-8 are
/// returned unchanged.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

/// Decoded path of a request, used for route lookup
pub fn request_path<B>(req: &Request<B>) -> Cow<'_, str> {
    decode_path(req.uri().path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_borrowed() {
        assert!(matches!(decode_path("/hello"), Cow::Borrowed("/hello")));
    }

    #[test]
    fn test_decodes_escapes() {
        assert_eq!(decode_path("/a%20b"), "/a b");
        assert_eq!(decode_path("/caf%C3%A9"), "/café");
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_raw() {
        assert_eq!(decode_path("/bad%FF"), "/bad%FF");
    }

    #[test]
    fn test_request_path_ignores_query() {
        let req = Request::get("/a%20b?x=%20").body(()).unwrap();
        assert_eq!(request_path(&req), "/a b");
    }
}
