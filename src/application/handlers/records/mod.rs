//! Generic record handlers.

mod crud;

pub use crud::{CrudHandler, ReorderResult};
