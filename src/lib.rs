//! Agency Site - Marketing site, admin back-office and website analyzer.
//!
//! Public pages are rendered from CMS-lite content with built-in fallbacks;
//! the back-office exposes CRUD, reordering, finance views and image upload
//! behind an admin session; the analyzer screenshots a URL and asks a
//! vision model for a structured critique.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
