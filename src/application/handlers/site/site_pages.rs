//! SitePagesHandler - Data for the server-rendered public pages.
//!
//! Store reads that fail or come back empty fall back to built-in content,
//! so the public site keeps rendering without a database.

use std::future::Future;
use std::sync::Arc;

use super::super::content::PublicContentHandler;
use crate::domain::content::PageSection;
use crate::domain::foundation::DomainError;
use crate::domain::site::{
    fallback_copy, PageCopy, PostCard, ProjectCard, ServiceCard, FALLBACK_POSTS, FALLBACK_PROJECTS, FALLBACK_SERVICES,
};

/// Site identity shown in every page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteIdentity {
    pub name: String,
    pub tagline: String,
    pub contact_email: String,
}

pub struct SitePagesHandler {
    content: Arc<PublicContentHandler>,
    identity: SiteIdentity,
}

/// Returns the store's items, or the fallback when the read fails or is empty.
async fn or_fallback<T, F>(what: &str, read: F, fallback: &[T]) -> Vec<T>
where
    T: Clone,
    F: Future<Output = Result<Vec<T>, DomainError>>,
{
    match read.await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => fallback.to_vec(),
        Err(e) => {
            tracing::warn!(content = what, error = %e, "store read failed, rendering fallback");
            fallback.to_vec()
        }
    }
}

impl SitePagesHandler {
    pub fn new(content: Arc<PublicContentHandler>, identity: SiteIdentity) -> Self {
        Self { content, identity }
    }

    pub fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    /// Page copy, overlaid with the page's `hero` (or first) section.
    pub async fn copy(&self, page: &str) -> PageCopy {
        let base = fallback_copy(page, &self.identity.name, &self.identity.tagline);
        let sections = match self.content.page(page).await {
            Ok(sections) => sections,
            Err(e) => {
                tracing::warn!(page, error = %e, "page sections unavailable");
                Vec::new()
            }
        };
        let section: Option<&PageSection> = sections
            .iter()
            .find(|s| s.section == "hero")
            .or_else(|| sections.first());
        base.overlay(section)
    }

    pub async fn services(&self) -> Vec<ServiceCard> {
        let read = async {
            let items = self.content.services().await?;
            Ok::<Vec<ServiceCard>, DomainError>(items.iter().map(ServiceCard::from).collect())
        };
        or_fallback("services", read, &FALLBACK_SERVICES).await
    }

    /// Portfolio (`lab == false`) or lab (`lab == true`) projects.
    pub async fn projects(&self, lab: bool) -> Vec<ProjectCard> {
        let read = async {
            let items = self.content.projects(Some(lab)).await?;
            Ok::<Vec<ProjectCard>, DomainError>(items.iter().map(ProjectCard::from).collect())
        };
        let fallback: Vec<ProjectCard> = FALLBACK_PROJECTS.iter().filter(|p| p.lab == lab).cloned().collect();
        or_fallback("projects", read, &fallback).await
    }

    pub async fn posts(&self) -> Vec<PostCard> {
        let read = async {
            let items = self.content.published_posts().await?;
            Ok::<Vec<PostCard>, DomainError>(items.iter().map(PostCard::from).collect())
        };
        or_fallback("posts", read, &FALLBACK_POSTS).await
    }

    /// A project by slug from the store, else from the fallback set.
    pub async fn project(&self, slug: &str) -> Option<ProjectCard> {
        match self.content.project_by_slug(slug).await {
            Ok(project) => Some(ProjectCard::from(&project)),
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(slug, error = %e, "project lookup failed");
                }
                FALLBACK_PROJECTS.iter().find(|p| p.slug == slug).cloned()
            }
        }
    }

    /// A published post by slug from the store, else from the fallback set.
    pub async fn post(&self, slug: &str) -> Option<PostCard> {
        match self.content.post_by_slug(slug).await {
            Ok(post) => Some(PostCard::from(&post)),
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(slug, error = %e, "post lookup failed");
                }
                FALLBACK_POSTS.iter().find(|p| p.slug == slug).cloned()
            }
        }
    }
}
