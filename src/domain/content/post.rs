//! Blog posts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{
    clean_list, optional_text, require_text, Record, RecordId, Slug, Timestamp, ValidationError,
};

/// A blog post. `content` holds the HTML produced by the rich-text editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub slug: Slug,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create/update payload for posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

impl Post {
    /// Date shown to readers: publication time, else creation time.
    pub fn display_date(&self) -> Timestamp {
        self.published_at.unwrap_or(self.created_at)
    }
}

impl Record for Post {
    const RESOURCE: &'static str = "posts";
    const LABEL: &'static str = "Post";
    type Draft = PostDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: PostDraft, now: Timestamp) -> Result<Self, ValidationError> {
        let title = require_text("title", &draft.title)?;
        let slug = Slug::resolve(draft.slug.as_deref(), &title)?;
        Ok(Self {
            id,
            slug,
            title,
            excerpt: optional_text(draft.excerpt),
            content: draft.content,
            cover_image: optional_text(draft.cover_image),
            tags: clean_list(draft.tags),
            published: draft.published,
            published_at: draft.published.then_some(now),
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: PostDraft, now: Timestamp) -> Result<(), ValidationError> {
        let title = require_text("title", &draft.title)?;
        self.slug = Slug::resolve(draft.slug.as_deref(), &title)?;
        self.title = title;
        self.excerpt = optional_text(draft.excerpt);
        self.content = draft.content;
        self.cover_image = optional_text(draft.cover_image);
        self.tags = clean_list(draft.tags);
        self.published_at = match (draft.published, self.published_at) {
            (true, Some(at)) => Some(at),
            (true, None) => Some(now),
            (false, _) => None,
        };
        self.published = draft.published;
        self.updated_at = now;
        Ok(())
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.display_date().cmp(&a.display_date())
    }
}
