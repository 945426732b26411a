//! Public JSON API: published content and the contact form.

mod handlers;
mod routes;

pub use handlers::ProjectsQuery;
pub use routes::{contact_routes, public_routes};
