//! Folio Web Server
//!
//! Serves the egui-based site via WASM and provides the contact and
//! content API endpoints.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::api::{create_contact_router, create_content_router};
use folio::{create_relay, ContactConfig, ContactService, RelayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_web=debug,folio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio Web Server");

    // Contact relay
    let relay_config = RelayConfig::from_env().context("invalid relay configuration")?;
    let contact_config = ContactConfig::from_env().context("invalid contact configuration")?;
    tracing::info!(
        "Relay failure policy: {:?}, admin address set: {}",
        contact_config.failure_policy,
        contact_config.admin_email.is_some()
    );

    let relay = create_relay(&relay_config).context("failed to build email relay client")?;
    let contact_service = Arc::new(ContactService::new(relay, contact_config));
    let relay_configured = contact_service.relay_configured();
    if !relay_configured {
        tracing::warn!("Contact submissions will be validated but not delivered");
    }

    // Static file serving - STATIC_DIR env var at runtime, else the crate's static dir
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        format!("{}/static", manifest_dir)
    });
    tracing::info!("Serving static files from: {}", static_dir);

    // CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router: Router<()> = Router::new()
        .merge(create_contact_router(contact_service))
        .merge(create_content_router(relay_configured));

    let app = Router::new()
        // Static files (JS, CSS, WASM) with no-cache headers for development
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-cache, no-store, must-revalidate"),
                ))
                .service(ServeDir::new(&static_dir).precompressed_gzip()),
        )
        // Index.html at root (egui app)
        .route("/", get(routes::static_files::serve_index))
        .merge(api_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("===========================================");
    tracing::info!("  Folio Web Server running on http://{}", addr);
    tracing::info!("===========================================");
    tracing::info!("API Endpoints:");
    tracing::info!("  POST /api/contact   - Contact form submission");
    tracing::info!("  GET  /api/projects  - Project catalog");
    tracing::info!("  GET  /health        - Health + relay status");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use. Set SERVER_PORT to another port", port);
            }
            return Err(e).with_context(|| format!("failed to bind to {}", addr));
        }
    };

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
