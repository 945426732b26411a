//! PublicContentHandler - Read-only queries behind the public site and API.

use std::sync::Arc;

use crate::domain::content::{PageSection, Post, Project, Service};
use crate::domain::foundation::{slugify, DomainError};
use crate::ports::Repository;

pub struct PublicContentHandler {
    posts: Arc<dyn Repository<Post>>,
    projects: Arc<dyn Repository<Project>>,
    services: Arc<dyn Repository<Service>>,
    pages: Arc<dyn Repository<PageSection>>,
}

impl PublicContentHandler {
    pub fn new(
        posts: Arc<dyn Repository<Post>>,
        projects: Arc<dyn Repository<Project>>,
        services: Arc<dyn Repository<Service>>,
        pages: Arc<dyn Repository<PageSection>>,
    ) -> Self {
        Self {
            posts,
            projects,
            services,
            pages,
        }
    }

    /// Published posts, newest first.
    pub async fn published_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list().await?.into_iter().filter(|p| p.published).collect())
    }

    /// A published post by slug. Drafts are not found.
    pub async fn post_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        self.published_posts()
            .await?
            .into_iter()
            .find(|p| p.slug.as_str() == slug)
            .ok_or_else(|| DomainError::not_found("Post", slug))
    }

    /// Projects, optionally restricted to lab (`Some(true)`) or portfolio (`Some(false)`).
    pub async fn projects(&self, lab: Option<bool>) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .projects
            .list()
            .await?
            .into_iter()
            .filter(|p| lab.map_or(true, |lab| p.lab == lab))
            .collect())
    }

    pub async fn project_by_slug(&self, slug: &str) -> Result<Project, DomainError> {
        self.projects
            .list()
            .await?
            .into_iter()
            .find(|p| p.slug.as_str() == slug)
            .ok_or_else(|| DomainError::not_found("Project", slug))
    }

    pub async fn services(&self) -> Result<Vec<Service>, DomainError> {
        self.services.list().await
    }

    /// Sections of one page.
    pub async fn page(&self, page: &str) -> Result<Vec<PageSection>, DomainError> {
        let key = slugify(page);
        Ok(self.pages.list().await?.into_iter().filter(|s| s.page == key).collect())
    }
}
