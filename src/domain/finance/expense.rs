//! One-off expenses that are already paid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{
    optional_text, require_text, Money, Record, RecordId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub description: String,
    pub category: Option<String>,
    pub amount: Money,
    pub spent_on: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub spent_on: Option<NaiveDate>,
}

impl Record for Expense {
    const RESOURCE: &'static str = "expenses";
    const LABEL: &'static str = "Expense";
    type Draft = ExpenseDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: ExpenseDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            description: require_text("description", &draft.description)?,
            category: optional_text(draft.category),
            amount: Money::positive("amount", draft.amount)?,
            spent_on: draft.spent_on.unwrap_or_else(|| now.date()),
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: ExpenseDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.description = require_text("description", &draft.description)?;
        self.category = optional_text(draft.category);
        self.amount = Money::positive("amount", draft.amount)?;
        self.spent_on = draft.spent_on.unwrap_or(self.spent_on);
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.spent_on
            .cmp(&a.spent_on)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spent_on_defaults_to_creation_date() {
        let now = Timestamp::now();
        let expense = Expense::create(
            RecordId::new(),
            ExpenseDraft {
                description: "Hosting".into(),
                amount: 2_500,
                ..Default::default()
            },
            now,
        )
        .unwrap();
        assert_eq!(expense.spent_on, now.date());
        assert_eq!(expense.amount, Money::from_minor(2_500));
    }
}
