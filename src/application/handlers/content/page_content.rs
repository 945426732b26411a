//! PageContentHandler - CMS-lite editing of page sections.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::content::{PageSection, PageSectionDraft};
use crate::domain::foundation::{slugify, DomainError, Record, RecordId, Timestamp};
use crate::ports::Repository;

/// Upsert command for one section of one page.
#[derive(Debug, Clone)]
pub struct UpsertSectionCommand {
    pub page: String,
    pub section: String,
    pub content: Value,
}

/// Result of an upsert.
#[derive(Debug, Clone)]
pub struct UpsertSectionResult {
    pub section: PageSection,
    pub created: bool,
}

pub struct PageContentHandler {
    repository: Arc<dyn Repository<PageSection>>,
}

impl PageContentHandler {
    pub fn new(repository: Arc<dyn Repository<PageSection>>) -> Self {
        Self { repository }
    }

    /// All sections of a page, ordered by section key.
    pub async fn sections(&self, page: &str) -> Result<Vec<PageSection>, DomainError> {
        let key = slugify(page);
        let mut sections: Vec<PageSection> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|s| s.page == key)
            .collect();
        sections.sort_by(|a, b| a.section.cmp(&b.section));
        Ok(sections)
    }

    /// Creates the section or replaces the content of the existing one.
    pub async fn upsert(&self, cmd: UpsertSectionCommand) -> Result<UpsertSectionResult, DomainError> {
        let now = Timestamp::now();
        let draft = PageSectionDraft {
            page: cmd.page,
            section: cmd.section,
            content: cmd.content,
        };
        // Normalizes keys the same way stored sections were normalized.
        let probe = PageSection::create(RecordId::new(), draft.clone(), now)?;

        let existing = self
            .repository
            .list()
            .await?
            .into_iter()
            .find(|s| s.matches(&probe.page, &probe.section));

        match existing {
            Some(mut section) => {
                section.revise(draft, now)?;
                self.repository.update(&section).await?;
                tracing::info!(page = %section.page, section = %section.section, "page section updated");
                Ok(UpsertSectionResult {
                    section,
                    created: false,
                })
            }
            None => {
                self.repository.insert(&probe).await?;
                tracing::info!(page = %probe.page, section = %probe.section, "page section created");
                Ok(UpsertSectionResult {
                    section: probe,
                    created: true,
                })
            }
        }
    }
}
