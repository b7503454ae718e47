use crate::error::{AppError, Result};
use crate::model::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use linkway_shortener::ShortenParams;

pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>)> {
    let record = state.shortener().shorten(ShortenParams {
        original_url: request.original_url,
        custom_alias: request.custom_alias,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_record(&record, state.public_base_url())),
    ))
}

pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinkListResponse> {
    let snapshot = state.registry().snapshot();
    let links = snapshot
        .iter()
        .map(|record| LinkResponse::from_record(record, state.public_base_url()))
        .collect();

    Json(LinkListResponse {
        registry_loaded: snapshot.is_loaded(),
        links,
    })
}

/// The fallback surface for unresolvable short codes.
pub async fn dashboard_handler(state: State<AppState>) -> Json<LinkListResponse> {
    list_links_handler(state).await
}

pub async fn get_link_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>> {
    let snapshot = state.registry().snapshot();
    match snapshot.lookup(&short_code) {
        Some(record) => Ok(Json(LinkResponse::from_record(
            record,
            state.public_base_url(),
        ))),
        None if !snapshot.is_loaded() => Err(AppError::RegistryLoading),
        None => Err(AppError::LinkNotFound(short_code)),
    }
}
