use std::time::Duration;

use jiff::Timestamp;
use linkway_core::{LinkRecord, ShortCode};
use linkway_generator::{RandomGenerator, SeqGenerator};
use linkway_redirector::{
    evaluate, Navigation, NavigationTarget, RecordingNavigator, RedirectResolver, Resolution,
    ResolverConfig,
};
use linkway_registry::{LinkRegistry, RegistryError};
use linkway_shortener::{ShortenParams, Shortener, ShortenerService};

const AI_LAUNCH_URL: &str = "https://www.producthunt.com/posts/new-ai-product-launch";

fn ai_launch_seed() -> Vec<LinkRecord> {
    vec![LinkRecord::builder()
        .id("1")
        .short_code(ShortCode::new("ai-launch").unwrap())
        .destination_url(AI_LAUNCH_URL)
        .created_at("2024-07-20T10:00:00Z".parse::<Timestamp>().unwrap())
        .click_count(1258)
        .build()]
}

fn resolver() -> RedirectResolver<RecordingNavigator> {
    RedirectResolver::new(ResolverConfig::default(), RecordingNavigator::default())
}

#[test]
fn seeded_code_resolves_to_its_destination() {
    let registry = LinkRegistry::with_seed(ai_launch_seed()).unwrap();
    let mut resolver = resolver();
    resolver.request("ai-launch");

    let outcome = resolver.evaluate(&registry.snapshot());

    assert_eq!(outcome, Resolution::Found(AI_LAUNCH_URL.to_string()));
    assert_eq!(
        resolver.navigator().history(),
        vec![Navigation::destination(AI_LAUNCH_URL)]
    );
}

#[test]
fn missing_code_falls_back_to_dashboard() {
    let registry = LinkRegistry::with_seed(ai_launch_seed()).unwrap();
    let mut resolver = resolver();
    resolver.request("missing-code");

    let outcome = resolver.evaluate(&registry.snapshot());

    assert_eq!(outcome, Resolution::NotFound);
    let navigation = resolver.navigator().last().unwrap();
    assert_eq!(navigation.location, "/dashboard");
    assert_eq!(navigation.target, NavigationTarget::Fallback);
}

#[test]
fn loading_registry_is_pending_then_found() {
    let registry = LinkRegistry::new();
    let mut resolver = resolver();
    resolver.request("ai-launch");

    assert_eq!(resolver.evaluate(&registry.snapshot()), Resolution::Pending);
    assert!(resolver.navigator().history().is_empty());

    registry.initialize(ai_launch_seed()).unwrap();

    assert_eq!(
        resolver.evaluate(&registry.snapshot()),
        Resolution::Found(AI_LAUNCH_URL.to_string())
    );
    assert_eq!(resolver.navigator().history().len(), 1);
}

#[test]
fn duplicate_insert_is_rejected() {
    let registry = LinkRegistry::with_seed(ai_launch_seed()).unwrap();
    let duplicate = LinkRecord::builder()
        .id("2")
        .short_code(ShortCode::new("ai-launch").unwrap())
        .destination_url("https://elsewhere.example")
        .build();

    let err = registry.insert(duplicate).unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateShortCode(_)));
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.lookup("ai-launch").unwrap().destination_url,
        AI_LAUNCH_URL
    );
}

#[test]
fn every_shortened_link_resolves_to_its_destination() {
    let registry = LinkRegistry::with_seed(ai_launch_seed()).unwrap();
    let shortener = ShortenerService::new(registry.clone(), RandomGenerator::default());

    for (url, alias) in [
        ("https://example.com/a", None),
        ("example.com/b", None),
        ("http://example.com/c", Some("spring-sale")),
        ("https://example.com/d", Some("Spring_Sale_2024")),
    ] {
        let record = shortener
            .shorten(ShortenParams {
                original_url: url.to_string(),
                custom_alias: alias.map(str::to_string),
            })
            .unwrap();

        assert_eq!(
            evaluate(record.short_code.as_str(), &registry.snapshot()),
            Resolution::Found(record.destination().into_owned())
        );
    }

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.len(), 5);
    for record in snapshot.iter() {
        assert!(evaluate(record.short_code.as_str(), &snapshot).is_terminal());
        assert_ne!(evaluate(record.short_code.as_str(), &snapshot), Resolution::NotFound);
    }
}

#[test]
fn generator_with_overlong_prefix_cannot_store_unresolvable_links() {
    let registry = LinkRegistry::with_seed(ai_launch_seed()).unwrap();
    let shortener = ShortenerService::new(
        registry.clone(),
        SeqGenerator::with_prefix("campaign-summer-2024-launch-"),
    );

    let result = shortener.shorten(ShortenParams {
        original_url: "https://example.com".to_string(),
        custom_alias: None,
    });

    assert!(result.is_err());
    assert_eq!(registry.len(), 1);
    for record in registry.snapshot().iter() {
        assert_ne!(
            evaluate(record.short_code.as_str(), &registry.snapshot()),
            Resolution::NotFound
        );
    }
}

#[test]
fn unchecked_malformed_code_is_refused_by_the_registry() {
    let registry = LinkRegistry::with_seed(ai_launch_seed()).unwrap();
    let record = LinkRecord::builder()
        .id("2")
        .short_code(ShortCode::new_unchecked("ab"))
        .destination_url("https://example.com")
        .build();

    let err = registry.insert(record).unwrap_err();

    assert!(matches!(err, RegistryError::InvalidShortCode(_)));
    assert!(registry.lookup("ab").is_none());
    assert_eq!(evaluate("ab", &registry.snapshot()), Resolution::NotFound);
}

#[tokio::test]
async fn live_resolution_fires_once_despite_later_changes() {
    let registry = LinkRegistry::new();
    let mut watcher = registry.subscribe();

    let writer = registry.clone();
    let feeder = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        writer.initialize(ai_launch_seed()).unwrap();
        for i in 0..3 {
            let record = LinkRecord::builder()
                .id(format!("extra-{i}"))
                .short_code(ShortCode::new(format!("extra-{i}")).unwrap())
                .destination_url("https://extra.example")
                .build();
            writer.insert(record).unwrap();
        }
    });

    let mut resolver = resolver();
    resolver.request("ai-launch");
    let outcome = resolver.resolve(&mut watcher).await;
    feeder.await.unwrap();

    // Later registry changes re-trigger evaluation but never navigation.
    while let Ok(true) =
        tokio::time::timeout(Duration::from_millis(10), watcher.changed()).await
    {
        resolver.evaluate(&watcher.snapshot());
    }
    resolver.evaluate(&registry.snapshot());

    assert_eq!(outcome, Resolution::Found(AI_LAUNCH_URL.to_string()));
    assert_eq!(resolver.navigator().history().len(), 1);
}

#[tokio::test]
async fn empty_seed_resolves_to_not_found_instead_of_hanging() {
    let registry = LinkRegistry::new();
    let mut watcher = registry.subscribe();
    let mut resolver = resolver();
    resolver.request("ai-launch");

    let writer = registry.clone();
    tokio::spawn(async move {
        writer.initialize(Vec::new()).unwrap();
    });

    let outcome = tokio::time::timeout(Duration::from_secs(1), resolver.resolve(&mut watcher))
        .await
        .expect("resolution should terminate once loading completes");

    assert_eq!(outcome, Resolution::NotFound);
    assert_eq!(
        resolver.navigator().history(),
        vec![Navigation::fallback("/dashboard")]
    );
}

#[tokio::test]
async fn never_loaded_registry_stays_pending() {
    let registry = LinkRegistry::new();
    let mut watcher = registry.subscribe();
    let mut resolver = resolver();
    resolver.request("ai-launch");

    let outcome =
        tokio::time::timeout(Duration::from_millis(50), resolver.resolve(&mut watcher)).await;

    assert!(outcome.is_err());
    assert_eq!(resolver.outcome(), Resolution::Pending);
    assert!(resolver.navigator().history().is_empty());
    drop(registry);
}
