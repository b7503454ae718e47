use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use linkway_redirector::{RecordingNavigator, RedirectResolver, Resolution};
use tracing::warn;

/// Resolves a short code and answers with a temporary redirect to the
/// destination, or to the fallback surface when the code is unknown.
///
/// Waits for the registry to finish loading, bounded by the configured
/// resolve timeout.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let mut resolver = RedirectResolver::new(
        state.resolver_config().clone(),
        RecordingNavigator::default(),
    );
    resolver.request(short_code.as_str());

    let mut watcher = state.registry().subscribe();
    let outcome = tokio::time::timeout(state.resolve_timeout(), resolver.resolve(&mut watcher))
        .await
        .unwrap_or(Resolution::Pending);

    if !outcome.is_terminal() {
        warn!(code = %short_code, "registry not loaded in time, giving up on redirect");
        return Err(AppError::RegistryLoading);
    }

    let Some(navigation) = resolver.navigator().last() else {
        return Err(AppError::RegistryLoading);
    };
    let location = HeaderValue::from_str(&navigation.location)
        .map_err(|_| AppError::InvalidDestination(navigation.location.clone()))?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
