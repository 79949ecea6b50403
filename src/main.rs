use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_core::{load_site_config, Site};

/// Main entry point for the site server
///
/// Resolves the site configuration once, loads the embedded content and serves the rendered
/// pages and article API.
///
/// # Environment Variables
/// - `SITE_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `SITE_CONFIG`: optional YAML file overriding the built-in site details
/// - `SITE_BASE_URL`: base URL for canonical links, overriding the config file
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the site configuration or embedded content is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_run=info".parse()?)
                .add_directive("site_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("SITE_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let config_path = std::env::var("SITE_CONFIG").ok().map(PathBuf::from);
    let cfg = load_site_config(config_path.as_deref(), std::env::var("SITE_BASE_URL").ok())?;
    let site = Site::new(cfg)?;

    tracing::info!(
        articles = site.content().articles().len(),
        locations = site.locations().locations().len(),
        "++ Starting site on {} for {}",
        addr,
        site.config().base_url()
    );

    let app = api_rest::router(Arc::new(site));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
