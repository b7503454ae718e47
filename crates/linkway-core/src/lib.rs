//! Core types for the Linkway short-link service.
//!
//! This crate provides the types shared by the registry, the shortener and
//! the redirector: validated short codes, link records, destination
//! normalization and the clock abstraction used to stamp new records.

pub mod clock;
pub mod destination;
pub mod error;
pub mod record;
pub mod shortcode;

pub use clock::{Clock, FixedClock, SystemClock};
pub use destination::normalize_destination;
pub use error::{CoreError, Result};
pub use record::{LinkId, LinkRecord};
pub use shortcode::ShortCode;
