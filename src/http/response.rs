//! Fixed responses produced by the router itself

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build the fallback for requests no route matched
pub fn build_404_response(path: &str) -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, format!("404 NOT FOUND: {path}\n"))
}

/// Build 400 Bad Request response, used when a request body cannot be read
pub fn build_400_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::BAD_REQUEST, "400 BAD REQUEST\n".to_string())
}

/// Build 413 Payload Too Large response for bodies over the configured limit
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_text_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        "413 PAYLOAD TOO LARGE\n".to_string(),
    )
}

fn build_text_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let body = Bytes::from(body);
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            let mut fallback = Response::new(Full::new(body));
            *fallback.status_mut() = status;
            fallback
        })
}

fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
