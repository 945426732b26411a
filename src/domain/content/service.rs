//! Agency service offerings.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{
    clean_list, optional_text, require_text, Ordered, Record, RecordId, Slug, Timestamp,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub features: Vec<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDraft {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Service {
    const RESOURCE: &'static str = "services";
    const LABEL: &'static str = "Service";
    type Draft = ServiceDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: ServiceDraft, now: Timestamp) -> Result<Self, ValidationError> {
        let title = require_text("title", &draft.title)?;
        Ok(Self {
            id,
            slug: Slug::resolve(draft.slug.as_deref(), &title)?,
            title,
            description: draft.description,
            icon: optional_text(draft.icon),
            features: clean_list(draft.features),
            sort_order: 0,
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: ServiceDraft, now: Timestamp) -> Result<(), ValidationError> {
        let title = require_text("title", &draft.title)?;
        self.slug = Slug::resolve(draft.slug.as_deref(), &title)?;
        self.title = title;
        self.description = draft.description;
        self.icon = optional_text(draft.icon);
        self.features = clean_list(draft.features);
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.created_at.cmp(&b.created_at))
    }
}

impl Ordered for Service {
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
    fn revise_keeps_sort_order() {
        let now = Timestamp::now();
        let mut service = Service::create(
            RecordId::new(),
            ServiceDraft {
                title: "Web Design".into(),
                ..Default::default()
            },
            now,
        )
        .unwrap();
        service.set_sort_order(4, now);

        service
            .revise(
                ServiceDraft {
                    title: "Web & Product Design".into(),
                    ..Default::default()
                },
                now,
            )
            .unwrap();

        assert_eq!(service.sort_order(), 4);
        assert_eq!(service.slug.as_str(), "web-product-design");
    }
}
