//! HTTP gateway for Linkway.
//!
//! Serves link creation, listing and the short-code redirect on top of a
//! shared [`LinkRegistry`](linkway_registry::LinkRegistry).

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
