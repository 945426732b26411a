//! Content handlers - CMS page sections and public read queries.

mod page_content;
mod public_content;

pub use page_content::{PageContentHandler, UpsertSectionCommand, UpsertSectionResult};
pub use public_content::PublicContentHandler;
