use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::Request;
use std::fmt::Write as _;

use static_router::http::request_path;
use static_router::{logger, Engine, ResponseWriter, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    logger::init(&settings.logging)?;

    let mut engine = Engine::new();
    engine.get("/", index).get("/hello", hello);

    engine.run_with(&settings.server.addr, &settings)?;
    Ok(())
}

fn index(w: &mut ResponseWriter, req: &Request<Bytes>) {
    let _ = writeln!(w, "URL.Path = {:?}", request_path(req));
}

fn hello(w: &mut ResponseWriter, req: &Request<Bytes>) {
    for (name, values) in header_lines(req.headers()) {
        let _ = writeln!(w, "Header[{name:?}] = {}", quoted_list(&values));
    }
}

/// `["a" "b"]`: each value quoted, space separated
fn quoted_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", quoted.join(" "))
}

/// Group header values by name, with names in canonical `Title-Case`
fn header_lines(headers: &HeaderMap) -> Vec<(String, Vec<String>)> {
    let mut lines: Vec<(String, Vec<String>)> = headers
        .keys()
        .map(|name| {
            let values = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            (canonical_header_key(name.as_str()), values)
        })
        .collect();
    lines.sort();
    lines
}

fn canonical_header_key(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::{Method, StatusCode};

    fn demo() -> Engine {
        let mut engine = Engine::new();
        engine.get("/", index).get("/hello", hello);
        engine
    }

    async fn body_of(engine: &Engine, req: &Request<Bytes>) -> (StatusCode, String) {
        let resp = engine.dispatch(req);
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_canonical_header_key() {
        assert_eq!(canonical_header_key("user-agent"), "User-Agent");
        assert_eq!(canonical_header_key("k"), "K");
        assert_eq!(canonical_header_key("x-request-id"), "X-Request-Id");
    }

    #[tokio::test]
    async fn test_index_writes_path() {
        let req = Request::get("/").body(Bytes::new()).unwrap();
        let (status, body) = body_of(&demo(), &req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "URL.Path = \"/\"\n");
    }

    #[tokio::test]
    async fn test_hello_writes_headers() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/hello")
            .header("k", "V")
            .header("accept", "*/*")
            .header("accept", "text/plain")
            .body(Bytes::new())
            .unwrap();
        let (_, body) = body_of(&demo(), &req).await;
        assert_eq!(
            body,
            "Header[\"Accept\"] = [\"*/*\" \"text/plain\"]\nHeader[\"K\"] = [\"V\"]\n"
        );
    }

    #[test]
    fn test_quoted_list() {
        assert_eq!(quoted_list(&["V".to_string()]), r#"["V"]"#);
        assert_eq!(
            quoted_list(&["a".to_string(), "b c".to_string()]),
            r#"["a" "b c"]"#
        );
        assert_eq!(quoted_list(&[]), "[]");
    }

    #[test]
    fn test_index_writes_decoded_path() {
        let req = Request::get("/a%20b").body(Bytes::new()).unwrap();
        let mut w = ResponseWriter::new();
        index(&mut w, &req);
        assert_eq!(w.body(), b"URL.Path = \"/a b\"\n");
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let req = Request::get("/world").body(Bytes::new()).unwrap();
        let (status, body) = body_of(&demo(), &req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "404 NOT FOUND: /world\n");
    }
}
