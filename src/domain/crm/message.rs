//! Contact-form messages received from the public site.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{
    optional_text, require_text, Record, RecordId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub read: bool,
}

fn email(value: &str) -> Result<String, ValidationError> {
    let email = require_text("email", value)?;
    if !email.contains('@') {
        return Err(ValidationError::invalid_format("email", "missing @ symbol"));
    }
    Ok(email)
}

impl Record for Message {
    const RESOURCE: &'static str = "messages";
    const LABEL: &'static str = "Message";
    type Draft = MessageDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: MessageDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: require_text("name", &draft.name)?,
            email: email(&draft.email)?,
            subject: optional_text(draft.subject),
            body: require_text("body", &draft.body)?,
            read: draft.read,
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: MessageDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.name = require_text("name", &draft.name)?;
        self.email = email(&draft.email)?;
        self.subject = optional_text(draft.subject);
        self.body = require_text("body", &draft.body)?;
        self.read = draft.read;
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(email: &str) -> MessageDraft {
        MessageDraft {
            name: "Grace".into(),
            email: email.into(),
            body: "Can you redesign our site?".into(),
            ..Default::default()
        }
    }

    #[test]
    fn email_must_contain_at() {
        let err = Message::create(RecordId::new(), draft("grace.example.com"), Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn new_messages_are_unread() {
        let msg = Message::create(RecordId::new(), draft("grace@example.com"), Timestamp::now()).unwrap();
        assert!(!msg.read);
    }
}
