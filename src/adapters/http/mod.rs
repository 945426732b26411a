//! HTTP adapters - REST API and server-rendered pages.
//!
//! Each area has its own module exposing a route table; [`router`] puts
//! them together behind the shared middleware stack.

pub mod analyze;
pub mod error;
pub mod finance;
pub mod login;
pub mod middleware;
pub mod public;
pub mod records;
pub mod router;
pub mod site;
pub mod state;
pub mod uploads;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use router::{app_routes, build_router, RouterSettings};
pub use site::SiteTemplates;
pub use state::{AppParts, AppState, CookieSettings, RecordHandlers};
