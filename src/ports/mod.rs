//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Repository` - Generic record persistence (Postgres, JSON files, memory)
//! - `SessionValidator` / `SessionIssuer` - Admin session tokens
//! - `VisionModel` - Hosted LLM critiquing a screenshot
//! - `PageCapturer` - Headless browser capture
//! - `MediaStorage` - Uploaded images

mod media_storage;
mod page_capturer;
mod repository;
mod session_validator;
mod vision_model;

pub use media_storage::{MediaError, MediaStorage, StoredMedia};
pub use page_capturer::{CaptureError, PageCapture, PageCapturer};
pub use repository::Repository;
pub use session_validator::{IssuedSession, SessionIssuer, SessionValidator};
pub use vision_model::{AIError, VisionModel, VisionRequest};
