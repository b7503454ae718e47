use crate::model::HealthResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.registry().snapshot();
    Json(HealthResponse {
        status: "ok",
        registry_loaded: snapshot.is_loaded(),
        links: snapshot.len(),
    })
}
