//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over ports.

pub mod analysis;
pub mod auth;
pub mod content;
pub mod crm;
pub mod finance;
pub mod records;
pub mod site;

pub use analysis::{AnalyzeWebsiteHandler, AnalyzerSettings};
pub use auth::{sha256_hex, AdminCredentials, LoginCommand, LoginHandler, LoginResult};
pub use content::{PageContentHandler, PublicContentHandler, UpsertSectionCommand, UpsertSectionResult};
pub use crm::{SubmitContactCommand, SubmitContactHandler};
pub use finance::{CrmCounts, DashboardView, FinanceQueryHandler, FinanceRepositories};
pub use records::{CrudHandler, ReorderResult};
pub use site::{SiteIdentity, SitePagesHandler};
