//! Finance module - income, expenses, payables and the aggregations the
//! back-office dashboard shows over them.

mod expense;
mod income;
mod ledger;
mod overview;
mod payable;
mod statement;

use chrono::NaiveDate;
use std::cmp::Ordering;

pub use expense::{Expense, ExpenseDraft};
pub use income::{Income, IncomeDraft};
pub use ledger::{open_payables, receivables, PayableEntry, ReceivableEntry};
pub use overview::{FinanceOverview, MonthlyTotals};
pub use payable::{Payable, PayableDraft};
pub use statement::{ClientStatement, StatementLine};

/// Earliest due date first; undated entries last.
pub(crate) fn due_date_order(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
