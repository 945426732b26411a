//! Content module - blog posts, portfolio/lab projects, services and
//! CMS page sections shown on the public site.

mod page;
mod post;
mod project;
mod service;

pub use page::{PageSection, PageSectionDraft};
pub use post::{Post, PostDraft};
pub use project::{Project, ProjectDraft};
pub use service::{Service, ServiceDraft};
