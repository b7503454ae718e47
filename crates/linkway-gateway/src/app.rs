use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_link_handler, dashboard_handler, get_link_handler, health_handler, list_links_handler,
    redirect_handler,
};
use crate::state::AppState;

/// First path segments served by the router itself.
const ROUTED_SEGMENTS: [&str; 3] = ["health", "dashboard", "v1"];

pub struct App {}

impl App {
    /// Aliases that would be shadowed by a static route, including the
    /// first segment of the configured fallback path.
    pub fn reserved_aliases(fallback_path: &str) -> Vec<String> {
        let mut reserved: Vec<String> = ROUTED_SEGMENTS.iter().map(|s| s.to_string()).collect();
        if let Some(segment) = fallback_path.trim_start_matches('/').split('/').next() {
            if !segment.is_empty() && !reserved.iter().any(|r| r == segment) {
                reserved.push(segment.to_string());
            }
        }
        reserved
    }

    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/dashboard", get(dashboard_handler))
            .route(
                "/v1/links",
                get(list_links_handler).post(create_link_handler),
            )
            .route("/v1/links/{short_code}", get(get_link_handler))
            .route("/{short_code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
