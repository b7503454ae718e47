use crate::error::ShortenerError;
use linkway_core::destination::scheme;
use linkway_core::{Clock, LinkId, LinkRecord, ShortCode, SystemClock};
use linkway_generator::Generator;
use linkway_registry::{LinkRegistry, RegistryError};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, ShortenerError>;

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone, Default)]
pub struct ShortenParams {
    /// The destination to shorten. Scheme-less values are accepted.
    pub original_url: String,
    /// Optional custom alias. An empty alias counts as none.
    pub custom_alias: Option<String>,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// How many generated codes to try before giving up.
    #[builder(default = 8)]
    pub max_attempts: u32,
    /// Codes that must never be handed out, such as path segments a front
    /// end serves itself. Compared case-sensitively.
    #[builder(default, setter(into))]
    pub reserved_aliases: Vec<String>,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub trait Shortener: Send + Sync + 'static {
    /// Creates a link and appends it to the registry.
    fn shorten(&self, params: ShortenParams) -> Result<LinkRecord>;
}

/// Creates links on top of a shared [`LinkRegistry`].
///
/// A custom alias that is already taken is reported as
/// [`ShortenerError::AliasConflict`] and a reserved one as
/// [`ShortenerError::ReservedAlias`]. Generated codes that collide, or that
/// hit a reserved alias, are regenerated up to `max_attempts` times.
pub struct ShortenerService<G, C = SystemClock> {
    registry: LinkRegistry,
    generator: G,
    clock: C,
    settings: ShortenerSettings,
}

impl<G: Generator> ShortenerService<G> {
    pub fn new(registry: LinkRegistry, generator: G) -> Self {
        Self::with_clock(registry, generator, SystemClock)
    }
}

impl<G: Generator, C: Clock> ShortenerService<G, C> {
    pub fn with_clock(registry: LinkRegistry, generator: G, clock: C) -> Self {
        Self {
            registry,
            generator,
            clock,
            settings: ShortenerSettings::default(),
        }
    }

    pub fn settings(mut self, settings: ShortenerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Rejects empty destinations, embedded whitespace and schemes other
    /// than http(s).
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        if url.chars().any(char::is_whitespace) {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must not contain whitespace: {:?}",
                url
            )));
        }

        if let Some(scheme) = scheme(url) {
            if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
                return Err(ShortenerError::InvalidUrl(format!(
                    "URL scheme must be http or https: {}",
                    scheme
                )));
            }
            if url[scheme.len() + 3..].is_empty() {
                return Err(ShortenerError::InvalidUrl(format!(
                    "URL must have a host: {}",
                    url
                )));
            }
        }

        Ok(())
    }

    fn is_reserved(&self, code: &ShortCode) -> bool {
        self.settings
            .reserved_aliases
            .iter()
            .any(|reserved| reserved == code.as_str())
    }

    fn record(&self, short_code: ShortCode, destination_url: &str) -> LinkRecord {
        let created_at = self.clock.now();
        LinkRecord::builder()
            .id(LinkId::new(format!(
                "{}-{}",
                created_at.as_millisecond(),
                short_code
            )))
            .short_code(short_code)
            .destination_url(destination_url)
            .created_at(created_at)
            .build()
    }

    fn insert_custom(&self, alias: &str, url: &str) -> Result<LinkRecord> {
        let code = ShortCode::new(alias)?;
        if self.is_reserved(&code) {
            debug!(code = %code, "custom alias is reserved");
            return Err(ShortenerError::ReservedAlias(code));
        }
        let record = self.record(code, url);

        match self.registry.insert(record.clone()) {
            Ok(()) => Ok(record),
            Err(RegistryError::DuplicateShortCode(code)) => {
                debug!(code = %code, "custom alias already taken");
                Err(ShortenerError::AliasConflict(code))
            }
            Err(other) => Err(other.into()),
        }
    }

    fn insert_generated(&self, url: &str) -> Result<LinkRecord> {
        let attempts = self.settings.max_attempts;
        for attempt in 1..=attempts {
            let code: ShortCode = self.generator.generate().into();
            if self.is_reserved(&code) {
                debug!(code = %code, attempt, "generated code is reserved, retrying");
                continue;
            }
            let record = self.record(code, url);

            match self.registry.insert(record.clone()) {
                Ok(()) => return Ok(record),
                Err(RegistryError::DuplicateShortCode(code)) => {
                    debug!(code = %code, attempt, "generated code collided, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }
        Err(ShortenerError::GeneratorExhausted { attempts })
    }
}

impl<G: Generator, C: Clock + 'static> Shortener for ShortenerService<G, C> {
    fn shorten(&self, params: ShortenParams) -> Result<LinkRecord> {
        let url = params.original_url.trim();
        Self::validate_url(url)?;

        let record = match params.custom_alias.as_deref().map(str::trim) {
            Some(alias) if !alias.is_empty() => self.insert_custom(alias, url)?,
            _ => self.insert_generated(url)?,
        };

        info!(code = %record.short_code, url = %record.destination_url, "link created");
        Ok(record)
    }
}
