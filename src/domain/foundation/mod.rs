//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the `Record` abstraction and error
//! types used by every other domain module.

mod auth;
mod errors;
mod ids;
mod money;
mod record;
mod slug;
mod timestamp;

pub use auth::{AuthError, AuthenticatedAdmin};
pub use errors::{require_text, DomainError, ErrorCode, ValidationError};
pub use ids::{AdminId, RecordId};
pub use money::Money;
pub use record::{clean_list, optional_text, sort_records, Ordered, Record};
pub use slug::{slugify, Slug};
pub use timestamp::Timestamp;
