//! Dashboard totals over income, expense and payable records.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{Expense, Income, Payable};
use crate::domain::foundation::Money;

/// Income and spend booked in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    /// `YYYY-MM`
    pub month: String,
    pub income: Money,
    pub expenses: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceOverview {
    /// Paid income.
    pub total_income: Money,
    /// Expenses plus paid payables.
    pub total_expenses: Money,
    pub net_profit: Money,
    pub outstanding_receivables: Money,
    pub overdue_receivables: Money,
    pub overdue_receivable_count: usize,
    pub outstanding_payables: Money,
    pub overdue_payables: Money,
    pub overdue_payable_count: usize,
    /// Oldest month first.
    pub monthly: Vec<MonthlyTotals>,
}

impl FinanceOverview {
    pub fn compute(
        incomes: &[Income],
        expenses: &[Expense],
        payables: &[Payable],
        today: NaiveDate,
    ) -> Self {
        let total_income: Money = incomes.iter().filter(|i| i.paid).map(|i| i.amount).sum();
        let spent: Money = expenses.iter().map(|e| e.amount).sum();
        let settled_bills: Money = payables.iter().filter(|p| p.paid).map(|p| p.amount).sum();
        let total_expenses = spent + settled_bills;

        let open_incomes: Vec<&Income> = incomes.iter().filter(|i| !i.paid).collect();
        let overdue_incomes: Vec<&&Income> = open_incomes.iter().filter(|i| i.is_overdue(today)).collect();

        let open_payables: Vec<&Payable> = payables.iter().filter(|p| !p.paid).collect();
        let overdue_payables: Vec<&&Payable> = open_payables.iter().filter(|p| p.is_overdue(today)).collect();

        Self {
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
            outstanding_receivables: open_incomes.iter().map(|i| i.amount).sum(),
            overdue_receivables: overdue_incomes.iter().map(|i| i.amount).sum(),
            overdue_receivable_count: overdue_incomes.len(),
            outstanding_payables: open_payables.iter().map(|p| p.amount).sum(),
            overdue_payables: overdue_payables.iter().map(|p| p.amount).sum(),
            overdue_payable_count: overdue_payables.len(),
            monthly: monthly_totals(incomes, expenses, payables),
        }
    }
}

fn monthly_totals(incomes: &[Income], expenses: &[Expense], payables: &[Payable]) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();
    let key = |d: NaiveDate| (d.year(), d.month());

    for income in incomes.iter().filter(|i| i.paid) {
        let bucket = months.entry(key(income.paid_on.unwrap_or(income.issued_on))).or_default();
        bucket.0 = bucket.0 + income.amount;
    }
    for expense in expenses {
        let bucket = months.entry(key(expense.spent_on)).or_default();
        bucket.1 = bucket.1 + expense.amount;
    }
    for payable in payables.iter().filter(|p| p.paid) {
        if let Some(day) = payable.paid_on {
            let bucket = months.entry(key(day)).or_default();
            bucket.1 = bucket.1 + payable.amount;
        }
    }

    months
        .into_iter()
        .map(|((year, month), (income, expenses))| MonthlyTotals {
            month: format!("{:04}-{:02}", year, month),
            income,
            expenses,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finance::{ExpenseDraft, IncomeDraft, PayableDraft};
    use crate::domain::foundation::{Record, RecordId, Timestamp};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(amount: i64, paid_on: Option<NaiveDate>, due_on: Option<NaiveDate>) -> Income {
        Income::create(
            RecordId::new(),
            IncomeDraft {
                description: "Invoice".into(),
                amount,
                issued_on: Some(date(2024, 1, 10)),
                due_on,
                paid: paid_on.is_some(),
                paid_on,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    fn expense(amount: i64, spent_on: NaiveDate) -> Expense {
        Expense::create(
            RecordId::new(),
            ExpenseDraft {
                description: "Software".into(),
                amount,
                spent_on: Some(spent_on),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    fn payable(amount: i64, paid_on: Option<NaiveDate>, due_on: Option<NaiveDate>) -> Payable {
        Payable::create(
            RecordId::new(),
            PayableDraft {
                vendor: "Printer".into(),
                amount,
                due_on,
                paid: paid_on.is_some(),
                paid_on,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn totals_split_paid_and_outstanding() {
        let today = date(2024, 3, 15);
        let incomes = vec![
            income(100_000, Some(date(2024, 2, 1)), None),
            income(40_000, None, Some(date(2024, 3, 1))),
            income(10_000, None, Some(date(2024, 4, 1))),
        ];
        let expenses = vec![expense(20_000, date(2024, 2, 5))];
        let payables = vec![
            payable(5_000, Some(date(2024, 2, 20)), None),
            payable(7_000, None, Some(date(2024, 3, 10))),
        ];

        let overview = FinanceOverview::compute(&incomes, &expenses, &payables, today);

        assert_eq!(overview.total_income, Money::from_minor(100_000));
        assert_eq!(overview.total_expenses, Money::from_minor(25_000));
        assert_eq!(overview.net_profit, Money::from_minor(75_000));
        assert_eq!(overview.outstanding_receivables, Money::from_minor(50_000));
        assert_eq!(overview.overdue_receivables, Money::from_minor(40_000));
        assert_eq!(overview.overdue_receivable_count, 1);
        assert_eq!(overview.outstanding_payables, Money::from_minor(7_000));
        assert_eq!(overview.overdue_payable_count, 1);
    }

    #[test]
    fn monthly_totals_bucket_by_booking_month() {
        let incomes = vec![income(100, Some(date(2024, 2, 1)), None)];
        let expenses = vec![expense(30, date(2024, 1, 31)), expense(20, date(2024, 2, 2))];
        let payables = vec![payable(5, Some(date(2024, 2, 9)), None)];

        let overview = FinanceOverview::compute(&incomes, &expenses, &payables, date(2024, 3, 1));

        assert_eq!(
            overview.monthly,
            vec![
                MonthlyTotals {
                    month: "2024-01".into(),
                    income: Money::ZERO,
                    expenses: Money::from_minor(30),
                },
                MonthlyTotals {
                    month: "2024-02".into(),
                    income: Money::from_minor(100),
                    expenses: Money::from_minor(25),
                },
            ]
        );
    }

    #[test]
    fn empty_books_are_all_zero() {
        let overview = FinanceOverview::compute(&[], &[], &[], date(2024, 1, 1));
        assert_eq!(overview.net_profit, Money::ZERO);
        assert!(overview.monthly.is_empty());
    }

    #[test]
    fn oversized_stored_amounts_saturate() {
        let day = date(2024, 2, 5);
        let mut first = expense(1, day);
        let mut second = expense(1, day);
        first.amount = Money::from_minor(i64::MAX);
        second.amount = Money::from_minor(i64::MAX);
        let mut paid = income(1, Some(day), None);
        paid.amount = Money::from_minor(i64::MAX);

        let overview = FinanceOverview::compute(&[paid], &[first, second], &[], day);

        assert_eq!(overview.total_expenses, Money::from_minor(i64::MAX));
        assert_eq!(overview.net_profit, Money::ZERO);
        assert_eq!(overview.monthly[0].expenses, Money::from_minor(i64::MAX));
    }
}
