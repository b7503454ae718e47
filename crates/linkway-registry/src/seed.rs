//! Sources of the initial registry contents.

use crate::error::RegistryError;
use crate::registry::LinkRegistry;
use async_trait::async_trait;
use jiff::Timestamp;
use linkway_core::{CoreError, LinkRecord, ShortCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

const DEMO_SEED: &str = include_str!("../seed/demo.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed links: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed link {id} is invalid: {source}")]
    InvalidLink {
        id: String,
        #[source]
        source: CoreError,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// A link as supplied by the seed collaborator.
///
/// Only `originalUrl` and `shortCode` matter for resolution; `analytics`
/// and any other extra field are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedLink {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub clicks: u64,
}

impl TryFrom<SeedLink> for LinkRecord {
    type Error = SeedError;

    fn try_from(link: SeedLink) -> Result<Self, Self::Error> {
        let short_code = ShortCode::new(link.short_code).map_err(|source| SeedError::InvalidLink {
            id: link.id.clone(),
            source,
        })?;

        Ok(LinkRecord::builder()
            .id(link.id)
            .short_code(short_code)
            .destination_url(link.original_url)
            .created_at(link.created_at)
            .click_count(link.clicks)
            .build())
    }
}

/// Parses a JSON array of seed links, newest first.
pub fn parse_seed(json: &str) -> Result<Vec<LinkRecord>, SeedError> {
    let links: Vec<SeedLink> = serde_json::from_str(json)?;
    links.into_iter().map(LinkRecord::try_from).collect()
}

/// The sample links shown on the demo dashboard.
pub fn demo_seed() -> Result<Vec<LinkRecord>, SeedError> {
    parse_seed(DEMO_SEED)
}

/// Supplies the initial sequence of links at session start.
#[async_trait]
pub trait SeedSource: Send + Sync + 'static {
    async fn load(&self) -> Result<Vec<LinkRecord>, SeedError>;
}

/// A seed held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    records: Vec<LinkRecord>,
}

impl StaticSeed {
    pub fn new(records: Vec<LinkRecord>) -> Self {
        Self { records }
    }

    pub fn demo() -> Result<Self, SeedError> {
        Ok(Self::new(demo_seed()?))
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load(&self) -> Result<Vec<LinkRecord>, SeedError> {
        Ok(self.records.clone())
    }
}

/// A seed read from a JSON file of [`SeedLink`]s.
#[derive(Debug, Clone)]
pub struct JsonFileSeed {
    path: PathBuf,
}

impl JsonFileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for JsonFileSeed {
    async fn load(&self) -> Result<Vec<LinkRecord>, SeedError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SeedError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_seed(&contents)
    }
}

/// Loads `source` and attaches it to `registry`, returning the number of
/// seeded links.
pub async fn load_into<S>(registry: &LinkRegistry, source: &S) -> Result<usize, SeedError>
where
    S: SeedSource + ?Sized,
{
    let records = match source.load().await {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "failed to load registry seed");
            return Err(e);
        }
    };
    let count = records.len();
    if let Err(e) = registry.initialize(records) {
        warn!(error = %e, "registry seed rejected");
        return Err(e.into());
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_seed_matches_dashboard_links() {
        let seed = demo_seed().unwrap();
        let codes: Vec<_> = seed.iter().map(|r| r.short_code.as_str()).collect();
        assert_eq!(codes, ["ai-launch", "funding-news", "css-features"]);
        assert_eq!(
            seed[0].destination_url,
            "https://www.producthunt.com/posts/new-ai-product-launch"
        );
        assert_eq!(seed[0].click_count, 1258);
    }

    #[test]
    fn parse_ignores_analytics_and_defaults_clicks() {
        let json = r#"[
            {
                "id": "7",
                "originalUrl": "example.com/page",
                "shortCode": "page",
                "createdAt": "2024-07-01T00:00:00Z",
                "analytics": { "geo": [] }
            }
        ]"#;

        let seed = parse_seed(json).unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].click_count, 0);
        assert_eq!(seed[0].destination_url, "example.com/page");
    }

    #[test]
    fn parse_rejects_invalid_short_code() {
        let json = r#"[
            {
                "id": "7",
                "originalUrl": "https://example.com",
                "shortCode": "no spaces",
                "createdAt": "2024-07-01T00:00:00Z"
            }
        ]"#;

        let err = parse_seed(json).unwrap_err();
        assert!(matches!(err, SeedError::InvalidLink { ref id, .. } if id == "7"));
    }

    #[tokio::test]
    async fn json_file_seed_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEMO_SEED.as_bytes()).unwrap();

        let registry = LinkRegistry::new();
        let count = load_into(&registry, &JsonFileSeed::new(file.path()))
            .await
            .unwrap();

        assert_eq!(count, 3);
        assert!(registry.is_loaded());
        assert!(registry.lookup("css-features").is_some());
    }

    #[tokio::test]
    async fn missing_file_leaves_registry_loading() {
        let registry = LinkRegistry::new();
        let err = load_into(&registry, &JsonFileSeed::new("/nonexistent/linkway-seed.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Io { .. }));
        assert!(!registry.is_loaded());
    }

    #[tokio::test]
    async fn empty_static_seed_completes_loading() {
        let registry = LinkRegistry::new();
        let count = load_into(&registry, &StaticSeed::default()).await.unwrap();

        assert_eq!(count, 0);
        assert!(registry.is_loaded());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn rejected_seed_leaves_registry_loading() {
        let mut records = demo_seed().unwrap();
        records.push(records[0].clone());
        let registry = LinkRegistry::new();

        let err = load_into(&registry, &StaticSeed::new(records))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SeedError::Registry(RegistryError::DuplicateShortCode(_))
        ));
        assert!(!registry.is_loaded());
        assert!(registry.is_empty());
    }
}
