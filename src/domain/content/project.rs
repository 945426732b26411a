//! Portfolio items and lab projects.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{
    clean_list, optional_text, require_text, Record, RecordId, Slug, Timestamp, ValidationError,
};

/// A showcased project. `lab` separates experiments from client work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub slug: Slug,
    pub title: String,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub description: String,
    pub cover_image: Option<String>,
    pub url: Option<String>,
    pub technologies: Vec<String>,
    pub lab: bool,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDraft {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub lab: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl Record for Project {
    const RESOURCE: &'static str = "projects";
    const LABEL: &'static str = "Project";
    type Draft = ProjectDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: ProjectDraft, now: Timestamp) -> Result<Self, ValidationError> {
        let title = require_text("title", &draft.title)?;
        Ok(Self {
            id,
            slug: Slug::resolve(draft.slug.as_deref(), &title)?,
            title,
            category: optional_text(draft.category),
            summary: optional_text(draft.summary),
            description: draft.description,
            cover_image: optional_text(draft.cover_image),
            url: optional_text(draft.url),
            technologies: clean_list(draft.technologies),
            lab: draft.lab,
            featured: draft.featured,
            sort_order: draft.sort_order,
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: ProjectDraft, now: Timestamp) -> Result<(), ValidationError> {
        let title = require_text("title", &draft.title)?;
        self.slug = Slug::resolve(draft.slug.as_deref(), &title)?;
        self.title = title;
        self.category = optional_text(draft.category);
        self.summary = optional_text(draft.summary);
        self.description = draft.description;
        self.cover_image = optional_text(draft.cover_image);
        self.url = optional_text(draft.url);
        self.technologies = clean_list(draft.technologies);
        self.lab = draft.lab;
        self.featured = draft.featured;
        self.sort_order = draft.sort_order;
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}
