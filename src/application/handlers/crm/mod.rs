//! CRM handlers.

mod submit_contact;

pub use submit_contact::{SubmitContactCommand, SubmitContactHandler};
