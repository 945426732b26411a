//! Agency clients.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::foundation::{
    optional_text, require_text, Ordered, Record, RecordId, Timestamp, ValidationError,
};

/// Relationship stage of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Lead,
    #[default]
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Lead => "lead",
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for ClientStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(ClientStatus::Lead),
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown client status '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub status: ClientStatus,
    pub notes: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub status: ClientStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Client {
    /// Company name when set, otherwise the contact name.
    pub fn display_name(&self) -> &str {
        self.company.as_deref().unwrap_or(&self.name)
    }
}

impl Record for Client {
    const RESOURCE: &'static str = "clients";
    const LABEL: &'static str = "Client";
    type Draft = ClientDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: ClientDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: require_text("name", &draft.name)?,
            company: optional_text(draft.company),
            email: optional_text(draft.email),
            phone: optional_text(draft.phone),
            website: optional_text(draft.website),
            status: draft.status,
            notes: optional_text(draft.notes),
            sort_order: 0,
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: ClientDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.name = require_text("name", &draft.name)?;
        self.company = optional_text(draft.company);
        self.email = optional_text(draft.email);
        self.phone = optional_text(draft.phone);
        self.website = optional_text(draft.website);
        self.status = draft.status;
        self.notes = optional_text(draft.notes);
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.created_at.cmp(&b.created_at))
    }
}

impl Ordered for Client {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn set_sort_order(&mut self, order: i32, now: Timestamp) {
        self.sort_order = order;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_and_prints() {
        for status in [ClientStatus::Lead, ClientStatus::Active, ClientStatus::Inactive] {
            assert_eq!(status.as_str().parse::<ClientStatus>().unwrap(), status);
        }
        assert!("archived".parse::<ClientStatus>().is_err());
    }

    #[test]
    fn display_name_prefers_company() {
        let mut client = Client::create(
            RecordId::new(),
            ClientDraft {
                name: "Ada".into(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(client.display_name(), "Ada");
        client.company = Some("Analytical Engines".into());
        assert_eq!(client.display_name(), "Analytical Engines");
    }

    #[test]
    fn name_is_required() {
        let err = Client::create(RecordId::new(), ClientDraft::default(), Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "name");
    }
}
