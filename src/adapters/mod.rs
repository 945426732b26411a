//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - JSON file and in-memory repositories
//! - `postgres` - sqlx-backed repositories
//! - `auth` - JWT admin sessions
//! - `ai` - Gemini and Anthropic vision models
//! - `browser` - Chromium page capture
//! - `media` - Uploaded image storage
//! - `http` - axum routes, middleware and server-rendered pages

pub mod ai;
pub mod auth;
pub mod browser;
pub mod http;
pub mod media;
pub mod postgres;
pub mod repositories;
pub mod storage;

pub use repositories::Repositories;
