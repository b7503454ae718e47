use std::sync::Arc;
use std::time::Duration;

use linkway_redirector::ResolverConfig;
use linkway_registry::LinkRegistry;
use linkway_shortener::Shortener;
use typed_builder::TypedBuilder;

pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, TypedBuilder)]
pub struct AppState {
    registry: LinkRegistry,
    shortener: Arc<dyn Shortener>,
    #[builder(setter(into))]
    public_base_url: String,
    #[builder(default)]
    resolver_config: ResolverConfig,
    /// Upper bound on how long a redirect waits for the registry to load.
    #[builder(default = DEFAULT_RESOLVE_TIMEOUT)]
    resolve_timeout: Duration,
}

impl AppState {
    pub fn registry(&self) -> &LinkRegistry {
        &self.registry
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn resolver_config(&self) -> &ResolverConfig {
        &self.resolver_config
    }

    pub fn resolve_timeout(&self) -> Duration {
        self.resolve_timeout
    }
}
