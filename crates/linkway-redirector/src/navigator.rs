use parking_lot::Mutex;

/// What a navigation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The resolved destination of a short code.
    Destination,
    /// The fallback surface for codes that cannot be resolved.
    Fallback,
}

/// A navigation instruction.
///
/// Navigations replace the current location rather than pushing a new
/// one, so the redirect step never becomes a back-button stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
    pub target: NavigationTarget,
}

impl Navigation {
    pub fn destination(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            target: NavigationTarget::Destination,
        }
    }

    pub fn fallback(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            target: NavigationTarget::Fallback,
        }
    }
}

/// Executes navigation instructions emitted by the resolver.
pub trait Navigator: Send + Sync {
    /// Replaces the current location.
    fn replace(&self, navigation: Navigation);
}

/// A navigator that records every instruction it is given.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    /// All instructions received so far, oldest first.
    pub fn history(&self) -> Vec<Navigation> {
        self.history.lock().clone()
    }

    /// The most recent instruction.
    pub fn last(&self) -> Option<Navigation> {
        self.history.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, navigation: Navigation) {
        self.history.lock().push(navigation);
    }
}
