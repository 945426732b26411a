//! Finance handlers.

mod finance_queries;

pub use finance_queries::{CrmCounts, DashboardView, FinanceQueryHandler, FinanceRepositories};
