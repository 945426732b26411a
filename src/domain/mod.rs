//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, money, slugs, errors, the `Record` trait)
//! - `content` - Posts, portfolio/lab projects, services and editable page sections
//! - `crm` - Clients, tasks and contact messages
//! - `finance` - Income, expenses, payables and dashboard aggregation
//! - `analyzer` - Website analysis targets, prompts and result parsing
//! - `site` - Public site read models and fallback content

pub mod analyzer;
pub mod content;
pub mod crm;
pub mod finance;
pub mod foundation;
pub mod site;
