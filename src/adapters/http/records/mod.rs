//! Back-office record endpoints under `/api/admin`.

mod handlers;
mod routes;

pub use handlers::{parse_id, ReorderRequest};
pub use routes::{ordered_resource_routes, page_routes, resource_routes};
