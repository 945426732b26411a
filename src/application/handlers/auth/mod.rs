//! Admin authentication handlers.

mod login;

pub use login::{sha256_hex, AdminCredentials, LoginCommand, LoginHandler, LoginResult};
