//! Bills owed to vendors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::income::settle;
use crate::domain::foundation::{
    optional_text, require_text, Money, Record, RecordId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payable {
    pub id: RecordId,
    pub vendor: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Money,
    pub due_on: Option<NaiveDate>,
    pub paid: bool,
    pub paid_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayableDraft {
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
}

impl Payable {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.paid && self.due_on.is_some_and(|due| due < today)
    }
}

impl Record for Payable {
    const RESOURCE: &'static str = "payables";
    const LABEL: &'static str = "Payable";
    type Draft = PayableDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: PayableDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            vendor: require_text("vendor", &draft.vendor)?,
            description: optional_text(draft.description),
            category: optional_text(draft.category),
            amount: Money::positive("amount", draft.amount)?,
            due_on: draft.due_on,
            paid: draft.paid,
            paid_on: settle(draft.paid, draft.paid_on, None, now.date()),
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: PayableDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.vendor = require_text("vendor", &draft.vendor)?;
        self.description = optional_text(draft.description);
        self.category = optional_text(draft.category);
        self.amount = Money::positive("amount", draft.amount)?;
        self.due_on = draft.due_on;
        self.paid_on = settle(draft.paid, draft.paid_on, self.paid_on, now.date());
        self.paid = draft.paid;
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        super::due_date_order(a.due_on, b.due_on).then_with(|| a.created_at.cmp(&b.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_is_required() {
        let err = Payable::create(
            RecordId::new(),
            PayableDraft {
                amount: 100,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(err.field(), "vendor");
    }
}
