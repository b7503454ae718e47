mod health;
mod link;
mod redirect;

pub use health::health_handler;
pub use link::{create_link_handler, dashboard_handler, get_link_handler, list_links_handler};
pub use redirect::redirect_handler;
