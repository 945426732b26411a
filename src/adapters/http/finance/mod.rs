//! Finance endpoints under `/api/admin/finance`.

mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::application::handlers::FinanceQueryHandler;

pub fn finance_routes(finance: Arc<FinanceQueryHandler>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/receivables", get(handlers::receivables))
        .route("/payables", get(handlers::payables))
        .route("/clients/:id/statement", get(handlers::client_statement))
        .with_state(finance)
}
