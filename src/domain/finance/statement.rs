//! Per-client account statement.

use chrono::NaiveDate;
use serde::Serialize;

use super::Income;
use crate::domain::crm::Client;
use crate::domain::foundation::{Money, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub income_id: RecordId,
    pub description: String,
    pub amount: Money,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
    pub paid: bool,
    pub paid_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientStatement {
    pub client_id: RecordId,
    pub client_name: String,
    /// Oldest invoice first.
    pub lines: Vec<StatementLine>,
    pub total_billed: Money,
    pub total_paid: Money,
    /// Amount still owed by the client.
    pub balance: Money,
}

impl ClientStatement {
    /// Builds the statement from all income records; only the client's are used.
    pub fn build(client: &Client, incomes: &[Income]) -> Self {
        let mut lines: Vec<StatementLine> = incomes
            .iter()
            .filter(|income| income.client_id == Some(client.id))
            .map(|income| StatementLine {
                income_id: income.id,
                description: income.description.clone(),
                amount: income.amount,
                issued_on: income.issued_on,
                due_on: income.due_on,
                paid: income.paid,
                paid_on: income.paid_on,
            })
            .collect();
        lines.sort_by(|a, b| a.issued_on.cmp(&b.issued_on));

        let total_billed: Money = lines.iter().map(|l| l.amount).sum();
        let total_paid: Money = lines.iter().filter(|l| l.paid).map(|l| l.amount).sum();

        Self {
            client_id: client.id,
            client_name: client.display_name().to_string(),
            lines,
            total_billed,
            total_paid,
            balance: total_billed - total_paid,
        }
    }
}
