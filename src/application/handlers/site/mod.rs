//! Public site handlers.

mod site_pages;

pub use site_pages::{SiteIdentity, SitePagesHandler};
