use linkway_core::ShortCode;
use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("short code already exists: {0}")]
    DuplicateShortCode(ShortCode),
    #[error("malformed short code: {0}")]
    InvalidShortCode(ShortCode),
    #[error("registry has already been initialized")]
    AlreadyInitialized,
}
