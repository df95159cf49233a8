//! Engine: route registration and request dispatch
//!
//! Routes are registered on an owned `Engine` before serving. `run` consumes
//! the engine, so the table is frozen once the server accepts traffic and
//! dispatch never needs a lock.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::error::ServerError;
use crate::http::{self, ResponseWriter};
use crate::logger;
use crate::routing::{HandlerFunc, RouteTable};
use crate::server;

#[derive(Debug, Default)]
pub struct Engine {
    routes: RouteTable,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` and the literal `path`.
    ///
    /// The path is not validated. Registering the same pair again replaces
    /// the earlier handler.
    pub fn add_route<F>(&mut self, method: Method, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request<Bytes>) + Send + Sync + 'static,
    {
        let handler: HandlerFunc = Arc::new(handler);
        let replaced = self.routes.insert(&method, path, handler);
        logger::log_route_registered(method.as_str(), path, replaced);
        self
    }

    pub fn get<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request<Bytes>) + Send + Sync + 'static,
    {
        self.add_route(Method::GET, path, handler)
    }

    pub fn post<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request<Bytes>) + Send + Sync + 'static,
    {
        self.add_route(Method::POST, path, handler)
    }

    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.routes.lookup(method, path).is_some()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Answer one request: run the matching handler, or reply 404 naming the
    /// requested path. Lookup uses the percent-decoded path.
    pub fn dispatch(&self, req: &Request<Bytes>) -> Response<Full<Bytes>> {
        let path = http::request_path(req);
        match self.routes.lookup(req.method(), &path) {
            Some(handler) => {
                let mut writer = ResponseWriter::new();
                handler(&mut writer, req);
                writer.into_response()
            }
            None => {
                logger::log_not_found(req.method().as_str(), &path);
                http::build_404_response(&path)
            }
        }
    }

    /// Bind `addr` and serve until the process exits, blocking the calling
    /// thread. `":port"` listens on all interfaces.
    pub fn run(self, addr: &str) -> Result<(), ServerError> {
        self.run_with(addr, &Settings::default())
    }

    /// Same as [`Engine::run`] with explicit runtime and logging settings
    pub fn run_with(self, addr: &str, settings: &Settings) -> Result<(), ServerError> {
        server::run(Arc::new(self), addr, settings)
    }

    /// Serve on an already bound listener inside an existing runtime
    pub async fn serve(self: Arc<Self>, listener: TcpListener, settings: &Settings) {
        server::serve(listener, self, settings).await;
    }
}
