//! Read models rendered by the public site.

use serde::Serialize;

use crate::domain::content::{PageSection, Post, Project, Service};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub description: String,
    pub cover_image: Option<String>,
    pub url: Option<String>,
    pub technologies: Vec<String>,
    pub lab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    /// Rich-text HTML.
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Headline copy for a page, editable through page sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageCopy {
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

impl From<&Service> for ServiceCard {
    fn from(service: &Service) -> Self {
        Self {
            slug: service.slug.to_string(),
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
            features: service.features.clone(),
        }
    }
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            slug: project.slug.to_string(),
            title: project.title.clone(),
            category: project.category.clone(),
            summary: project.summary.clone(),
            description: project.description.clone(),
            cover_image: project.cover_image.clone(),
            url: project.url.clone(),
            technologies: project.technologies.clone(),
            lab: project.lab,
        }
    }
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.to_string(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            cover_image: post.cover_image.clone(),
            tags: post.tags.clone(),
            date: post.display_date().date().format("%Y-%m-%d").to_string(),
        }
    }
}

impl PageCopy {
    /// Overlays whatever `title`/`subtitle`/`body` strings the section defines.
    pub fn overlay(mut self, section: Option<&PageSection>) -> Self {
        if let Some(section) = section {
            if let Some(title) = section.text("title").filter(|t| !t.trim().is_empty()) {
                self.title = title.to_string();
            }
            if let Some(subtitle) = section.text("subtitle").filter(|t| !t.trim().is_empty()) {
                self.subtitle = subtitle.to_string();
            }
            if let Some(body) = section.text("body").filter(|t| !t.trim().is_empty()) {
                self.body = body.to_string();
            }
        }
        self
    }
}
