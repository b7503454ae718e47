//! The link registry: the single source of truth for short-code mappings.
//!
//! [`LinkRegistry`] is an explicitly owned store handed to both the
//! shortener and the redirector. It starts out *loading*; attaching the
//! seed with [`LinkRegistry::initialize`] flips the load signal, which is
//! distinct from the registry being non-empty. Observers hold a
//! [`RegistryWatcher`] and are woken on every mutation.

pub mod error;
pub mod registry;
pub mod seed;
pub mod snapshot;

pub use error::{RegistryError, Result};
pub use registry::{LinkRegistry, RegistryWatcher};
pub use seed::{
    demo_seed, load_into, parse_seed, JsonFileSeed, SeedError, SeedLink, SeedSource, StaticSeed,
};
pub use snapshot::RegistrySnapshot;
