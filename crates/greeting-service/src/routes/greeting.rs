//! `GET /` greeting endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::Environment;

/// Fixed message returned by `GET /`.
pub const GREETING_MESSAGE: &str = "Hello from Multi-Env DevOps Platform";

/// Application version reported in every greeting.
pub const VERSION: &str = "0.1.0";

/// Body of the `GET /` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub environment: Environment,
    pub version: &'static str,
}

impl Greeting {
    pub fn new(environment: Environment) -> Self {
        Self {
            message: GREETING_MESSAGE,
            environment,
            version: VERSION,
        }
    }
}

/// Returns a router with the `GET /` greeting endpoint.
pub fn greeting_routes(environment: Environment) -> Router {
    Router::new()
        .route("/", get(greet))
        .with_state(environment)
}

async fn greet(State(environment): State<Environment>) -> Json<Greeting> {
    Json(Greeting::new(environment))
}
