//! Portfolio server entry point.
//!
//! Server builds run the Dioxus app behind a hand-rolled axum router so the
//! two CV files can be served next to the SSR application. Web builds launch
//! the WASM client directly.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use dioxus::prelude::*;
    use std::net::SocketAddr;
    use tower_http::services::ServeFile;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "kreulich_portfolio=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio server");

    // Load configuration
    let config = kreulich_portfolio::config::load_server_config()?;
    tracing::info!(?config, "Configuration loaded");

    let public_dir = std::path::PathBuf::from(&config.public_dir);

    // The CVs are plain static files; everything else is the SSR application
    let app = axum::Router::new()
        .route_service(
            "/curriculo.pdf",
            ServeFile::new(public_dir.join("curriculo.pdf")),
        )
        .route_service(
            "/curriculoenglish.pdf",
            ServeFile::new(public_dir.join("curriculoenglish.pdf")),
        )
        .serve_dioxus_application(ServeConfigBuilder::default(), kreulich_portfolio::app::App)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(kreulich_portfolio::app::App);
}
