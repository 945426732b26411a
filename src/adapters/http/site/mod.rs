//! Server-rendered public site.

mod handlers;
mod routes;
mod templates;

pub use handlers::{not_found, safe_next};
pub use routes::site_routes;
pub use templates::SiteTemplates;
