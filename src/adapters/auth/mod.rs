//! Session adapters.
//!
//! - `JwtSessionService` - HS256 tokens signed with the configured secret
//! - `MockSessionValidator` - Fixed tokens for tests

mod jwt;
mod mock;

pub use jwt::JwtSessionService;
pub use mock::MockSessionValidator;
