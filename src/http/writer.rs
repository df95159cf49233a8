//! Response writer handed to route handlers
//!
//! Handlers never build a `hyper::Response` themselves; they set headers,
//! optionally commit a status, and append body bytes. The router turns the
//! writer into a response once the handler returns.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use std::{fmt, io};

use crate::logger;

const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers sent with the response. Mutations after the body is complete
    /// still apply since nothing is flushed before the handler returns.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Commit the status code. Only the first call counts.
    pub fn write_header(&mut self, status: StatusCode) {
        if let Some(current) = self.status {
            logger::log_warning(&format!(
                "Superfluous write_header({status}), status already {current}"
            ));
            return;
        }
        self.status = Some(status);
    }

    /// Append to the body, committing `200 OK` if no status was written yet.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(data);
        data.len()
    }

    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_response(mut self) -> Response<Full<Bytes>> {
        if !self.body.is_empty() && !self.headers.contains_key(CONTENT_TYPE) {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        }

        let status = self.status();
        let mut response = Response::new(Full::new(Bytes::from(self.body)));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl io::Write for ResponseWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Self::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for ResponseWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Self::write(self, s.as_bytes());
        Ok(())
    }
}
