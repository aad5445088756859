//! Middleware applied around the service routes.

mod trace;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub use trace::RequestTraceLayer;

/// Applies the default middleware stack to a router.
///
/// `CatchPanicLayer` sits inside the trace layer so a panicking handler is
/// logged as a 500 like any other response.
pub(crate) fn default_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(RequestTraceLayer::new())
}
