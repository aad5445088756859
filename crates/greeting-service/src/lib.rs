//! # greeting-service
//!
//! HTTP service answering `GET /` with a JSON greeting that reports the
//! deployment environment and application version.
//!
//! Configuration is read from `PORT` (default `8080`), `ENVIRONMENT`
//! (default `dev`) and `APP_HOST` (default `0.0.0.0`), after an optional
//! `.env` file.
//!
//! ## Features
//!
//! - `tracing` - Enable logging initialization with tracing-subscriber

mod config;
mod environment;
mod layer;
mod logging;
mod router;
mod routes;
mod server;

pub use config::{ConfigBuilder, ConfigError, ServiceConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use environment::{Environment, DEFAULT_ENVIRONMENT};
pub use layer::RequestTraceLayer;
pub use logging::{LogFormat, DEFAULT_LOG_FILTER};
pub use router::RouterExt;
pub use routes::{greeting_routes, Greeting, GREETING_MESSAGE, VERSION};
pub use server::{serve_router, serve_with_shutdown, ServerError};

#[cfg(feature = "tracing")]
pub use logging::init_logging;

use axum::Router;

/// Greeting routes wrapped in the default middleware stack.
pub fn app(environment: Environment) -> Router {
    greeting_routes(environment).with_default_layers()
}
