use crate::navigator::{Navigation, Navigator};
use crate::resolution::{evaluate, Resolution};
use linkway_registry::{RegistrySnapshot, RegistryWatcher};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

pub const DEFAULT_FALLBACK_PATH: &str = "/dashboard";

#[derive(Debug, Clone, TypedBuilder)]
pub struct ResolverConfig {
    /// Where unresolvable codes are sent.
    #[builder(default = DEFAULT_FALLBACK_PATH.to_string(), setter(into))]
    pub fallback_path: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug)]
struct ActiveRequest {
    code: String,
    outcome: Resolution,
}

/// Per-request redirect state machine.
///
/// `Pending` moves to `Found` or `NotFound` at most once per requested
/// code. The navigation for a terminal outcome is handed to the navigator
/// on that transition only; later re-evaluations for the same code are
/// no-ops. Requesting a different code starts over.
#[derive(Debug)]
pub struct RedirectResolver<N> {
    config: ResolverConfig,
    navigator: N,
    request: Option<ActiveRequest>,
}

impl<N: Navigator> RedirectResolver<N> {
    pub fn new(config: ResolverConfig, navigator: N) -> Self {
        Self {
            config,
            navigator,
            request: None,
        }
    }

    /// Sets the code being resolved.
    ///
    /// Requesting the code that is already active keeps its state.
    pub fn request(&mut self, code: impl Into<String>) {
        let code = code.into();
        if self.request.as_ref().is_some_and(|active| active.code == code) {
            return;
        }
        trace!(code = %code, "new redirect request");
        self.request = Some(ActiveRequest {
            code,
            outcome: Resolution::Pending,
        });
    }

    /// The code currently being resolved, if any.
    pub fn requested(&self) -> Option<&str> {
        self.request.as_ref().map(|active| active.code.as_str())
    }

    /// The outcome recorded for the active request.
    pub fn outcome(&self) -> Resolution {
        self.request
            .as_ref()
            .map_or(Resolution::Pending, |active| active.outcome.clone())
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Re-evaluates the active request against `snapshot`.
    ///
    /// Emits a navigation only on the transition out of `Pending`.
    pub fn evaluate(&mut self, snapshot: &RegistrySnapshot) -> Resolution {
        let Some(active) = self.request.as_mut() else {
            return Resolution::Pending;
        };

        if active.outcome.is_terminal() {
            trace!(
                code = %active.code,
                revision = snapshot.revision(),
                "already resolved, skipping"
            );
            return active.outcome.clone();
        }

        let outcome = evaluate(&active.code, snapshot);
        let navigation = match &outcome {
            Resolution::Pending => {
                trace!(code = %active.code, "registry still loading");
                return outcome;
            }
            Resolution::Found(destination) => {
                debug!(code = %active.code, destination = %destination, "short code resolved");
                Navigation::destination(destination.clone())
            }
            Resolution::NotFound => {
                debug!(
                    code = %active.code,
                    fallback = %self.config.fallback_path,
                    "short code not found"
                );
                Navigation::fallback(self.config.fallback_path.clone())
            }
        };

        active.outcome = outcome.clone();
        self.navigator.replace(navigation);
        outcome
    }

    /// Evaluates against the live registry until the active request is
    /// terminal.
    ///
    /// Returns `Pending` right away when no code has been requested, and
    /// otherwise only if the registry goes away before it has loaded. There
    /// is no timeout; callers that need one wrap this future.
    pub async fn resolve(&mut self, watcher: &mut RegistryWatcher) -> Resolution {
        if self.request.is_none() {
            return Resolution::Pending;
        }
        loop {
            let snapshot = watcher.snapshot();
            let outcome = self.evaluate(&snapshot);
            if outcome.is_terminal() {
                return outcome;
            }
            if !watcher.changed().await {
                return outcome;
            }
        }
    }
}
