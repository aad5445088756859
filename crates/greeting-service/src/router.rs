//! Router extension traits.

use axum::Router;

use crate::ServiceConfig;

/// Chainable service helpers on [`Router`].
///
/// # Example
///
/// ```rust,ignore
/// use greeting_service::{greeting_routes, RouterExt};
///
/// greeting_routes(config.environment.clone())
///     .with_default_layers()
///     .serve(&config)
///     .await?;
/// ```
pub trait RouterExt: Sized {
    /// Applies the default middleware stack.
    ///
    /// Layers applied (innermost to outermost):
    /// - `CatchPanicLayer` - Converts panics to 500 responses
    /// - `RequestTraceLayer` - Response logging with latency
    fn with_default_layers(self) -> Self;

    /// Serve the router with graceful shutdown support.
    ///
    /// Handles `SIGINT` (Ctrl+C) and `SIGTERM` signals, waiting for
    /// in-flight requests to complete before shutting down.
    fn serve(
        self,
        config: &(impl AsRef<ServiceConfig> + Sync),
    ) -> impl std::future::Future<Output = Result<(), crate::ServerError>> + Send;
}

impl RouterExt for Router {
    fn with_default_layers(self) -> Self {
        crate::layer::default_layers(self)
    }

    async fn serve(
        self,
        config: &(impl AsRef<ServiceConfig> + Sync),
    ) -> Result<(), crate::ServerError> {
        crate::server::serve_router(self, config).await
    }
}
