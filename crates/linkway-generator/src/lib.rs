//! Short code generators.

pub mod random;
pub mod seq;

use linkway_core::ShortCode;
use thiserror::Error;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Collisions with existing codes are possible and are rejected by the
/// registry, so callers regenerate on conflict.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Produces the next candidate short code.
    fn generate(&self) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("code length must be between {min} and {max}, got {got}")]
    InvalidLength { got: usize, min: usize, max: usize },
}
