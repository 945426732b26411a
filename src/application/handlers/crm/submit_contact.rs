//! SubmitContactHandler - Public contact form submissions.

use std::sync::Arc;

use crate::domain::crm::{Message, MessageDraft};
use crate::domain::foundation::{DomainError, Record, RecordId, Timestamp};
use crate::ports::Repository;

/// Command from the public contact form.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SubmitContactCommand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "message")]
    pub body: String,
}

pub struct SubmitContactHandler {
    messages: Arc<dyn Repository<Message>>,
}

impl SubmitContactHandler {
    pub fn new(messages: Arc<dyn Repository<Message>>) -> Self {
        Self { messages }
    }

    /// Stores the submission as an unread message.
    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<Message, DomainError> {
        let draft = MessageDraft {
            name: cmd.name,
            email: cmd.email,
            subject: cmd.subject,
            body: cmd.body,
            read: false,
        };
        let message = Message::create(RecordId::new(), draft, Timestamp::now())?;
        self.messages.insert(&message).await?;
        tracing::info!(id = %message.id, "contact message received");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRepository;

    #[tokio::test]
    async fn submission_is_stored_unread() {
        let repo = Arc::new(InMemoryRepository::<Message>::new());
        let handler = SubmitContactHandler::new(repo.clone());

        let message = handler
            .handle(SubmitContactCommand {
                name: "Rosa".into(),
                email: "rosa@example.com".into(),
                subject: Some("Quote".into()),
                body: "Need a site".into(),
            })
            .await
            .unwrap();

        assert!(!message.read);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let handler = SubmitContactHandler::new(Arc::new(InMemoryRepository::<Message>::new()));
        let err = handler
            .handle(SubmitContactCommand {
                name: "Rosa".into(),
                email: "not-an-email".into(),
                subject: None,
                body: "Hi".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.details.get("field").map(String::as_str), Some("email"));
    }
}
