//! Resource API server: loads settings from env, opens the store, serves until Ctrl-C / SIGTERM.
//!
//! Run from repo root: `cargo run -p server`

use resource_api::{build_app, AppState, Settings, Store, RESOURCE_PREFIX};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("resource_api=info,server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    let store = Store::open(&settings).await?;
    let app = build_app(AppState::new(store.clone()), settings.body_limit);

    let listener = TcpListener::bind(settings.listen_addr()?).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Server is running on port {}", port);
    tracing::info!("Health check: http://localhost:{}/health", port);
    tracing::info!("Resources: http://localhost:{}{}", port, RESOURCE_PREFIX);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
