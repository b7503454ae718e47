use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use linkway_gateway::cli::Cli;
use linkway_gateway::{telemetry, App, AppState};
use linkway_generator::RandomGenerator;
use linkway_redirector::ResolverConfig;
use linkway_registry::{load_into, JsonFileSeed, LinkRegistry, SeedSource, StaticSeed};
use linkway_shortener::{ShortenerService, ShortenerSettings};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        fallback_path = %config.fallback_path,
        "starting gateway server"
    );

    let seed: Box<dyn SeedSource> = match &config.seed_file {
        Some(path) => {
            info!(path = %path.display(), "seeding registry from file");
            Box::new(JsonFileSeed::new(path))
        }
        None => Box::new(StaticSeed::demo()?),
    };

    // The registry starts loading; redirects wait for the seed task.
    let registry = LinkRegistry::new();
    tokio::spawn({
        let registry = registry.clone();
        async move {
            if let Err(e) = load_into(&registry, &*seed).await {
                error!(error = %e, "registry seed failed, redirects will stay pending");
            }
        }
    });

    let generator = RandomGenerator::new(config.alias_length)?;
    let shortener = ShortenerService::new(registry.clone(), generator).settings(
        ShortenerSettings::builder()
            .reserved_aliases(App::reserved_aliases(&config.fallback_path))
            .build(),
    );

    let state = AppState::builder()
        .registry(registry)
        .shortener(Arc::new(shortener))
        .public_base_url(config.public_base_url)
        .resolver_config(
            ResolverConfig::builder()
                .fallback_path(config.fallback_path)
                .build(),
        )
        .resolve_timeout(Duration::from_millis(config.resolve_timeout_ms))
        .build();

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state)).await?;
    Ok(())
}
