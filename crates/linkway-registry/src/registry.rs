use crate::error::{RegistryError, Result};
use crate::snapshot::RegistrySnapshot;
use linkway_core::{LinkRecord, ShortCode};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// The authoritative set of short-code mappings for a session.
///
/// The registry state lives inside a [`watch`] channel: the channel is both
/// the store and the notification mechanism. Every mutation happens under
/// the channel's write lock, so a reader that looks after `insert` returns
/// always sees the new record, and every [`RegistryWatcher`] is woken.
///
/// Handles are cheap to clone and share the same state.
#[derive(Debug, Clone)]
pub struct LinkRegistry {
    state: Arc<watch::Sender<RegistrySnapshot>>,
}

impl LinkRegistry {
    /// Creates a registry in the loading state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(RegistrySnapshot::default());
        Self {
            state: Arc::new(state),
        }
    }

    /// Creates a registry and immediately attaches `seed`.
    pub fn with_seed(seed: Vec<LinkRecord>) -> Result<Self> {
        let registry = Self::new();
        registry.initialize(seed)?;
        Ok(registry)
    }

    /// Attaches the session seed and signals that loading has completed.
    ///
    /// The seed is given newest first. Records inserted while loading stay
    /// newer than every seed record. Fails with
    /// [`RegistryError::AlreadyInitialized`] on a second call and with
    /// [`RegistryError::DuplicateShortCode`] if the seed repeats a code or
    /// [`RegistryError::InvalidShortCode`] if a code is malformed; in every
    /// case nothing changes.
    pub fn initialize(&self, seed: Vec<LinkRecord>) -> Result<()> {
        let mut outcome = Ok(());
        let seed_len = seed.len();

        self.state.send_if_modified(|snapshot| {
            if snapshot.is_loaded() {
                outcome = Err(RegistryError::AlreadyInitialized);
                return false;
            }

            let mut seen = HashSet::with_capacity(seed.len());
            for record in &seed {
                let code = record.short_code.as_str();
                if !ShortCode::is_valid(code) {
                    outcome = Err(RegistryError::InvalidShortCode(record.short_code.clone()));
                    return false;
                }
                if !seen.insert(code) || snapshot.contains(code) {
                    outcome = Err(RegistryError::DuplicateShortCode(record.short_code.clone()));
                    return false;
                }
            }
            drop(seen);

            snapshot.attach_seed(seed);
            true
        });

        if outcome.is_ok() {
            info!(links = seed_len, "link registry loaded");
        }
        outcome
    }

    /// Case-sensitive exact lookup. Absence is a normal outcome.
    pub fn lookup(&self, code: &str) -> Option<LinkRecord> {
        self.state.borrow().lookup(code).cloned()
    }

    /// Prepends `record`, rejecting a short code that is already taken or
    /// that [`ShortCode::new`] would not accept.
    ///
    /// On error the registry is left unchanged.
    pub fn insert(&self, record: LinkRecord) -> Result<()> {
        let code = record.short_code.clone();
        if !ShortCode::is_valid(code.as_str()) {
            debug!(code = %code, "rejected malformed short code");
            return Err(RegistryError::InvalidShortCode(code));
        }

        let mut outcome = Ok(());

        self.state.send_if_modified(|snapshot| {
            if snapshot.contains(code.as_str()) {
                outcome = Err(RegistryError::DuplicateShortCode(code.clone()));
                return false;
            }
            snapshot.push(record);
            true
        });

        match &outcome {
            Ok(()) => debug!(code = %code, "link inserted"),
            Err(_) => debug!(code = %code, "rejected duplicate short code"),
        }
        outcome
    }

    /// True once [`LinkRegistry::initialize`] has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().is_loaded()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// A consistent view of the current state.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.state.borrow().clone()
    }

    /// Registers a live observer of the registry.
    pub fn subscribe(&self) -> RegistryWatcher {
        RegistryWatcher {
            receiver: self.state.subscribe(),
        }
    }
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A live view of a [`LinkRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryWatcher {
    receiver: watch::Receiver<RegistrySnapshot>,
}

impl RegistryWatcher {
    /// Returns the current state and marks it as seen.
    pub fn snapshot(&mut self) -> RegistrySnapshot {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits until the registry changes after the last seen snapshot.
    ///
    /// Returns `false` once every registry handle has been dropped, after
    /// which no further change can happen.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}
