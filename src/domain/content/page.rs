//! CMS-lite page sections.
//!
//! Each public page is split into named sections (`hero`, `intro`, ...) whose
//! content is free-form JSON edited from the back-office.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{require_text, slugify, Record, RecordId, Timestamp, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub id: RecordId,
    pub page: String,
    pub section: String,
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSectionDraft {
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

fn key(field: &str, value: &str) -> Result<String, ValidationError> {
    let value = require_text(field, value)?;
    let key = slugify(&value);
    if key.is_empty() {
        return Err(ValidationError::invalid_format(field, "must contain letters or digits"));
    }
    Ok(key)
}

impl PageSection {
    pub fn matches(&self, page: &str, section: &str) -> bool {
        self.page == page && self.section == section
    }

    /// Reads a string field from the section's JSON content.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.content.get(field).and_then(|v| v.as_str())
    }
}

impl Record for PageSection {
    const RESOURCE: &'static str = "page_sections";
    const LABEL: &'static str = "Page section";
    type Draft = PageSectionDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: PageSectionDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            page: key("page", &draft.page)?,
            section: key("section", &draft.section)?,
            content: draft.content,
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: PageSectionDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.page = key("page", &draft.page)?;
        self.section = key("section", &draft.section)?;
        self.content = draft.content;
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.page.cmp(&b.page).then_with(|| a.section.cmp(&b.section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_normalized() {
        let section = PageSection::create(
            RecordId::new(),
            PageSectionDraft {
                page: "Home".into(),
                section: "Hero Banner".into(),
                content: json!({"title": "We build brands"}),
            },
            Timestamp::now(),
        )
        .unwrap();
        assert!(section.matches("home", "hero-banner"));
        assert_eq!(section.text("title"), Some("We build brands"));
        assert_eq!(section.text("missing"), None);
    }

    #[test]
    fn blank_page_is_rejected() {
        let result = PageSection::create(RecordId::new(), PageSectionDraft::default(), Timestamp::now());
        assert_eq!(result.unwrap_err(), ValidationError::empty_field("page"));
    }
}
