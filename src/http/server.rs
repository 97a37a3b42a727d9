//! HTTP server startup logic.
//!
//! Plain HTTP only, on the fixed listen address.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::LISTEN_ADDR;
use crate::error::ServerError;

/// Bind a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve `app` on an already bound listener until the serve loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Starting HTTP server");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind the fixed listen address and serve `app`.
///
/// This function blocks for the lifetime of the process unless binding or
/// serving fails.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let listener = bind(LISTEN_ADDR).await?;
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_bind_on_same_address_fails() {
        let first = bind("127.0.0.1:0").await.unwrap();
        let addr = first.local_addr().unwrap().to_string();

        let err = bind(&addr).await.unwrap_err();
        match err {
            ServerError::Bind { addr: failed, source } => {
                assert_eq!(failed, addr);
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_address_is_bind_error() {
        let err = bind("not-an-address").await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
