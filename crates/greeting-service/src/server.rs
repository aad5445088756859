//! Server utilities.

use crate::ServiceConfig;
use axum::Router;
use std::future::Future;
use std::{fmt, io};
use tokio::net::TcpListener;

/// Error type for server operations.
#[derive(Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    Bind(io::Error),
    /// Server runtime error.
    Runtime(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "Failed to bind to address: {}", e),
            Self::Runtime(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(e) | Self::Runtime(e) => Some(e),
        }
    }
}

/// Bind `config.addr()` and serve until SIGINT or SIGTERM.
pub async fn serve_router(
    router: Router,
    config: &(impl AsRef<ServiceConfig> + Sync),
) -> Result<(), ServerError> {
    let addr = config.as_ref().addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(ServerError::Bind)?;

    serve_with_shutdown(listener, router, shutdown_signal()).await
}

/// Serve on an already bound listener until `signal` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr().map_err(ServerError::Bind)?;

    tracing::info!(addr = %local, "App running on port {}", local.port());

    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await
        .map_err(ServerError::Runtime)?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signals (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, Environment};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn serves_greeting_over_tcp_and_shuts_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_shutdown(
            listener,
            app(Environment::new("prod")),
            async move {
                let _ = rx.await;
            },
        ));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        let body = raw.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["environment"], "prod");
        assert_eq!(json["version"], "0.1.0");

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn port_in_use_is_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
            ..Default::default()
        };

        let result = serve_router(app(Environment::default()), &config).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));
    }

    #[test]
    fn server_error_display() {
        let err = ServerError::Bind(io::Error::new(io::ErrorKind::AddrInUse, "in use"));
        assert!(err.to_string().starts_with("Failed to bind"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
