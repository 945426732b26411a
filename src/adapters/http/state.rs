//! Shared state handed to every router.

use std::sync::Arc;

use crate::adapters::Repositories;
use crate::application::handlers::{
    AdminCredentials, AnalyzeWebsiteHandler, CrudHandler, FinanceQueryHandler, FinanceRepositories, LoginHandler,
    PageContentHandler, PublicContentHandler, SiteIdentity, SitePagesHandler, SubmitContactHandler,
};
use crate::domain::content::{PageSection, Post, Project, Service};
use crate::domain::crm::{Client, Message, Task};
use crate::domain::finance::{Expense, Income, Payable};
use crate::ports::{MediaStorage, SessionIssuer, SessionValidator};

use super::site::SiteTemplates;

/// CRUD handlers for every back-office resource.
#[derive(Clone)]
pub struct RecordHandlers {
    pub posts: CrudHandler<Post>,
    pub projects: CrudHandler<Project>,
    pub services: CrudHandler<Service>,
    pub clients: CrudHandler<Client>,
    pub tasks: CrudHandler<Task>,
    pub messages: CrudHandler<Message>,
    pub incomes: CrudHandler<Income>,
    pub expenses: CrudHandler<Expense>,
    pub payables: CrudHandler<Payable>,
    pub page_sections: CrudHandler<PageSection>,
}

impl RecordHandlers {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            posts: CrudHandler::new(repos.posts.clone()),
            projects: CrudHandler::new(repos.projects.clone()),
            services: CrudHandler::new(repos.services.clone()),
            clients: CrudHandler::new(repos.clients.clone()),
            tasks: CrudHandler::new(repos.tasks.clone()),
            messages: CrudHandler::new(repos.messages.clone()),
            incomes: CrudHandler::new(repos.incomes.clone()),
            expenses: CrudHandler::new(repos.expenses.clone()),
            payables: CrudHandler::new(repos.payables.clone()),
            page_sections: CrudHandler::new(repos.page_sections.clone()),
        }
    }
}

/// Session cookie attributes.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
}

/// Everything the HTTP layer is built from.
pub struct AppParts {
    pub repositories: Repositories,
    pub sessions: Arc<dyn SessionValidator>,
    pub issuer: Arc<dyn SessionIssuer>,
    pub credentials: AdminCredentials,
    pub analyzer: AnalyzeWebsiteHandler,
    pub media: Arc<dyn MediaStorage>,
    pub identity: SiteIdentity,
    pub cookies: CookieSettings,
    pub upload_limit_bytes: usize,
    pub storage_backend: &'static str,
}

#[derive(Clone)]
pub struct AppState {
    pub records: RecordHandlers,
    pub pages: Arc<PageContentHandler>,
    pub public: Arc<PublicContentHandler>,
    pub contact: Arc<SubmitContactHandler>,
    pub finance: Arc<FinanceQueryHandler>,
    pub login: Arc<LoginHandler>,
    pub analyzer: Arc<AnalyzeWebsiteHandler>,
    pub site: Arc<SitePagesHandler>,
    pub templates: Arc<SiteTemplates>,
    pub media: Arc<dyn MediaStorage>,
    pub sessions: Arc<dyn SessionValidator>,
    pub cookies: CookieSettings,
    /// Largest upload accepted by the upload endpoint.
    pub upload_limit_bytes: usize,
    /// `"postgres"` or `"json"`, reported by `/health`.
    pub storage_backend: &'static str,
}

impl AppState {
    /// Wires handlers over the repositories. Fails only if a template does not parse.
    pub fn new(parts: AppParts) -> Result<Self, minijinja::Error> {
        let repos = &parts.repositories;
        let public = Arc::new(PublicContentHandler::new(
            repos.posts.clone(),
            repos.projects.clone(),
            repos.services.clone(),
            repos.page_sections.clone(),
        ));
        let finance = FinanceQueryHandler::new(FinanceRepositories {
            incomes: repos.incomes.clone(),
            expenses: repos.expenses.clone(),
            payables: repos.payables.clone(),
            clients: repos.clients.clone(),
            tasks: repos.tasks.clone(),
            messages: repos.messages.clone(),
        });

        Ok(Self {
            records: RecordHandlers::new(repos),
            pages: Arc::new(PageContentHandler::new(repos.page_sections.clone())),
            contact: Arc::new(SubmitContactHandler::new(repos.messages.clone())),
            finance: Arc::new(finance),
            login: Arc::new(LoginHandler::new(parts.credentials, parts.issuer)),
            analyzer: Arc::new(parts.analyzer),
            site: Arc::new(SitePagesHandler::new(public.clone(), parts.identity)),
            public,
            templates: Arc::new(SiteTemplates::new()?),
            media: parts.media,
            sessions: parts.sessions,
            cookies: parts.cookies,
            upload_limit_bytes: parts.upload_limit_bytes,
            storage_backend: parts.storage_backend,
        })
    }
}
