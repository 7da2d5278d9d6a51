use shared_routes::config::Config;
use shared_routes::RouteManifest;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the manifest, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("shared-routes starting");

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env()?;
    config.log_startup();

    let manifest = match config.api_base_url.as_deref() {
        Some(base) => RouteManifest::new().with_base_url(base),
        None => RouteManifest::new(),
    };

    println!("{}", manifest.to_json(config.pretty)?);

    tracing::info!("Wrote manifest with {} routes", manifest.entries().len());

    Ok(())
}
