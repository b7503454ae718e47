use linkway_core::ShortCode;
use linkway_registry::RegistrySnapshot;

/// Outcome of resolving a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The registry has not finished loading yet.
    Pending,
    /// The code maps to this (normalized) destination.
    Found(String),
    /// The code is malformed or absent from a loaded registry.
    NotFound,
}

impl Resolution {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Resolution::Pending)
    }
}

/// Resolves `requested` against `snapshot` without side effects.
///
/// The registry refuses to store a malformed code, so one resolves to
/// `NotFound` immediately. Otherwise the load signal is consulted first: an unloaded
/// registry yields `Pending` even when it happens to be empty.
pub fn evaluate(requested: &str, snapshot: &RegistrySnapshot) -> Resolution {
    if !ShortCode::is_valid(requested) {
        return Resolution::NotFound;
    }

    if !snapshot.is_loaded() {
        return Resolution::Pending;
    }

    match snapshot.lookup(requested) {
        Some(record) => Resolution::Found(record.destination().into_owned()),
        None => Resolution::NotFound,
    }
}
