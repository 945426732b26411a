//! Open receivables and payables, ordered by due date.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::{due_date_order, Income, Payable};
use crate::domain::crm::Client;
use crate::domain::foundation::{Money, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivableEntry {
    pub income_id: RecordId,
    pub client_id: Option<RecordId>,
    pub client_name: Option<String>,
    pub description: String,
    pub amount: Money,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
    /// Zero unless the due date has passed.
    pub days_overdue: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayableEntry {
    pub payable_id: RecordId,
    pub vendor: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Money,
    pub due_on: Option<NaiveDate>,
    pub days_overdue: i64,
}

fn days_overdue(due_on: Option<NaiveDate>, today: NaiveDate) -> i64 {
    due_on
        .map(|due| (today - due).num_days().max(0))
        .unwrap_or(0)
}

/// Unpaid income joined with client names.
pub fn receivables(incomes: &[Income], clients: &[Client], today: NaiveDate) -> Vec<ReceivableEntry> {
    let names: HashMap<RecordId, &str> = clients.iter().map(|c| (c.id, c.display_name())).collect();

    let mut entries: Vec<ReceivableEntry> = incomes
        .iter()
        .filter(|income| !income.paid)
        .map(|income| ReceivableEntry {
            income_id: income.id,
            client_id: income.client_id,
            client_name: income
                .client_id
                .and_then(|id| names.get(&id))
                .map(|name| name.to_string()),
            description: income.description.clone(),
            amount: income.amount,
            issued_on: income.issued_on,
            due_on: income.due_on,
            days_overdue: days_overdue(income.due_on, today),
        })
        .collect();

    entries.sort_by(|a, b| due_date_order(a.due_on, b.due_on).then_with(|| a.issued_on.cmp(&b.issued_on)));
    entries
}

/// Unpaid vendor bills.
pub fn open_payables(payables: &[Payable], today: NaiveDate) -> Vec<PayableEntry> {
    let mut entries: Vec<PayableEntry> = payables
        .iter()
        .filter(|payable| !payable.paid)
        .map(|payable| PayableEntry {
            payable_id: payable.id,
            vendor: payable.vendor.clone(),
            description: payable.description.clone(),
            category: payable.category.clone(),
            amount: payable.amount,
            due_on: payable.due_on,
            days_overdue: days_overdue(payable.due_on, today),
        })
        .collect();

    entries.sort_by(|a, b| due_date_order(a.due_on, b.due_on));
    entries
}
