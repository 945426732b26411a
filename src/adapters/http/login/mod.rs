//! Admin session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdminResponse, LoginResponse};
pub use handlers::{expired_session_cookie, session_cookie};
pub use routes::auth_routes;
