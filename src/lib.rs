//! Static HTTP router
//!
//! Maps an HTTP method and an exact path to a handler and serves it over
//! HTTP/1.1 with hyper. Unmatched requests get a plain-text 404.
//!
//! ```no_run
//! use static_router::Engine;
//!
//! let mut engine = Engine::new();
//! engine.get("/", |w, _req| {
//!     w.write(b"hello");
//! });
//! engine.run(":9999").unwrap();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;

pub use config::Settings;
pub use engine::Engine;
pub use error::ServerError;
pub use http::ResponseWriter;
pub use routing::HandlerFunc;
