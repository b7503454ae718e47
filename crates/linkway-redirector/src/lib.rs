//! Short-code resolution and the one-time redirect.
//!
//! [`evaluate`] is the pure decision: given a requested code and a registry
//! snapshot it answers [`Resolution::Pending`] while the registry is still
//! loading, and [`Resolution::Found`] or [`Resolution::NotFound`] once it
//! has loaded. [`RedirectResolver`] wraps that decision in a per-request
//! state machine that hands exactly one [`Navigation`] to its
//! [`Navigator`], however often it is re-evaluated.
//!
//! # Example
//!
//! ```rust
//! use linkway_redirector::{RecordingNavigator, RedirectResolver, Resolution, ResolverConfig};
//! use linkway_registry::{demo_seed, LinkRegistry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = LinkRegistry::new();
//! let mut watcher = registry.subscribe();
//!
//! let mut resolver =
//!     RedirectResolver::new(ResolverConfig::default(), RecordingNavigator::default());
//! resolver.request("ai-launch");
//!
//! // Still loading: nothing is decided yet.
//! assert_eq!(resolver.evaluate(&registry.snapshot()), Resolution::Pending);
//!
//! registry.initialize(demo_seed()?)?;
//! let outcome = resolver.resolve(&mut watcher).await;
//! assert!(matches!(outcome, Resolution::Found(_)));
//! assert_eq!(resolver.navigator().history().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod navigator;
pub mod resolution;
pub mod resolver;

pub use navigator::{Navigation, NavigationTarget, Navigator, RecordingNavigator};
pub use resolution::{evaluate, Resolution};
pub use resolver::{RedirectResolver, ResolverConfig, DEFAULT_FALLBACK_PATH};
