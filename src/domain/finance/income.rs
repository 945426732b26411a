//! Invoiced income. Unpaid income is a receivable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{require_text, Money, Record, RecordId, Timestamp, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: RecordId,
    pub client_id: Option<RecordId>,
    pub description: String,
    pub amount: Money,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
    pub paid: bool,
    pub paid_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomeDraft {
    #[serde(default)]
    pub client_id: Option<RecordId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: i64,
    /// Defaults to the creation date.
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
}

/// Paid records get a payment date: the supplied one, the existing one, or today.
pub(crate) fn settle(paid: bool, supplied: Option<NaiveDate>, existing: Option<NaiveDate>, today: NaiveDate) -> Option<NaiveDate> {
    if !paid {
        return None;
    }
    supplied.or(existing).or(Some(today))
}

impl Income {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.paid && self.due_on.is_some_and(|due| due < today)
    }
}

impl Record for Income {
    const RESOURCE: &'static str = "incomes";
    const LABEL: &'static str = "Income";
    type Draft = IncomeDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: IncomeDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            client_id: draft.client_id,
            description: require_text("description", &draft.description)?,
            amount: Money::positive("amount", draft.amount)?,
            issued_on: draft.issued_on.unwrap_or_else(|| now.date()),
            due_on: draft.due_on,
            paid: draft.paid,
            paid_on: settle(draft.paid, draft.paid_on, None, now.date()),
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: IncomeDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.description = require_text("description", &draft.description)?;
        self.amount = Money::positive("amount", draft.amount)?;
        self.client_id = draft.client_id;
        self.issued_on = draft.issued_on.unwrap_or(self.issued_on);
        self.due_on = draft.due_on;
        self.paid_on = settle(draft.paid, draft.paid_on, self.paid_on, now.date());
        self.paid = draft.paid;
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.issued_on
            .cmp(&a.issued_on)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn amount_must_be_positive() {
        let draft = IncomeDraft {
            description: "Website".into(),
            amount: 0,
            ..Default::default()
        };
        let err = Income::create(RecordId::new(), draft, Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn paying_sets_paid_on_and_unpaying_clears_it() {
        let now = Timestamp::now();
        let mut income = Income::create(
            RecordId::new(),
            IncomeDraft {
                description: "Retainer".into(),
                amount: 50_000,
                ..Default::default()
            },
            now,
        )
        .unwrap();
        assert!(income.paid_on.is_none());
        assert_eq!(income.issued_on, now.date());

        income
            .revise(
                IncomeDraft {
                    description: "Retainer".into(),
                    amount: 50_000,
                    paid: true,
                    ..Default::default()
                },
                now,
            )
            .unwrap();
        assert_eq!(income.paid_on, Some(now.date()));

        income
            .revise(
                IncomeDraft {
                    description: "Retainer".into(),
                    amount: 50_000,
                    paid: false,
                    ..Default::default()
                },
                now,
            )
            .unwrap();
        assert!(income.paid_on.is_none());
    }

    #[test]
    fn overdue_only_when_unpaid_and_past_due() {
        let mut income = Income::create(
            RecordId::new(),
            IncomeDraft {
                description: "Logo".into(),
                amount: 1000,
                due_on: Some(date(2024, 3, 1)),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        assert!(income.is_overdue(date(2024, 3, 2)));
        assert!(!income.is_overdue(date(2024, 3, 1)));
        income.paid = true;
        assert!(!income.is_overdue(date(2024, 4, 1)));
    }

    #[test]
    fn settle_prefers_supplied_date() {
        let today = date(2024, 5, 5);
        assert_eq!(settle(true, Some(date(2024, 5, 1)), None, today), Some(date(2024, 5, 1)));
        assert_eq!(settle(true, None, Some(date(2024, 4, 1)), today), Some(date(2024, 4, 1)));
        assert_eq!(settle(true, None, None, today), Some(today));
        assert_eq!(settle(false, Some(today), Some(today), today), None);
    }
}
