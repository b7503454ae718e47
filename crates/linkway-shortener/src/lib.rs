//! Link creation.
//!
//! [`ShortenerService`] builds new [`LinkRecord`](linkway_core::LinkRecord)s
//! from a destination and an optional custom alias and appends them to the
//! shared registry.

pub mod error;
pub mod service;

pub use error::ShortenerError;
pub use service::{ShortenParams, Shortener, ShortenerService, ShortenerSettings};
