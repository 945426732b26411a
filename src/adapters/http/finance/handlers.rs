//! Finance dashboard and ledger endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::application::handlers::FinanceQueryHandler;

use super::super::error::ApiResult;
use super::super::records::parse_id;

/// GET /api/admin/finance/dashboard
pub async fn dashboard(State(finance): State<Arc<FinanceQueryHandler>>) -> ApiResult<Response> {
    let view = finance.dashboard(Utc::now().date_naive()).await?;
    Ok(Json(view).into_response())
}

/// GET /api/admin/finance/receivables
pub async fn receivables(State(finance): State<Arc<FinanceQueryHandler>>) -> ApiResult<Response> {
    let entries = finance.receivables(Utc::now().date_naive()).await?;
    Ok(Json(entries).into_response())
}

/// GET /api/admin/finance/payables
pub async fn payables(State(finance): State<Arc<FinanceQueryHandler>>) -> ApiResult<Response> {
    let entries = finance.payables(Utc::now().date_naive()).await?;
    Ok(Json(entries).into_response())
}

/// GET /api/admin/finance/clients/:id/statement
pub async fn client_statement(
    State(finance): State<Arc<FinanceQueryHandler>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let statement = finance.statement(parse_id(&id)?).await?;
    Ok(Json(statement).into_response())
}
