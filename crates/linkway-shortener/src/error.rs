use linkway_core::{CoreError, ShortCode};
use linkway_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("alias already exists: {0}")]
    AliasConflict(ShortCode),
    #[error("alias is reserved: {0}")]
    ReservedAlias(ShortCode),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("no free short code after {attempts} attempts")]
    GeneratorExhausted { attempts: u32 },
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortCode(message),
        }
    }
}
