//! One repository per record type, all backed by the same store.

use std::path::Path;
use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::content::{PageSection, Post, Project, Service};
use crate::domain::crm::{Client, Message, Task};
use crate::domain::finance::{Expense, Income, Payable};
use crate::ports::Repository;

use super::postgres::PostgresRepository;
use super::storage::{InMemoryRepository, JsonFileRepository};

#[derive(Clone)]
pub struct Repositories {
    pub posts: Arc<dyn Repository<Post>>,
    pub projects: Arc<dyn Repository<Project>>,
    pub services: Arc<dyn Repository<Service>>,
    pub page_sections: Arc<dyn Repository<PageSection>>,
    pub clients: Arc<dyn Repository<Client>>,
    pub tasks: Arc<dyn Repository<Task>>,
    pub messages: Arc<dyn Repository<Message>>,
    pub incomes: Arc<dyn Repository<Income>>,
    pub expenses: Arc<dyn Repository<Expense>>,
    pub payables: Arc<dyn Repository<Payable>>,
}

impl Repositories {
    /// Tables in a Postgres database sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            posts: Arc::new(PostgresRepository::<Post>::new(pool.clone())),
            projects: Arc::new(PostgresRepository::<Project>::new(pool.clone())),
            services: Arc::new(PostgresRepository::<Service>::new(pool.clone())),
            page_sections: Arc::new(PostgresRepository::<PageSection>::new(pool.clone())),
            clients: Arc::new(PostgresRepository::<Client>::new(pool.clone())),
            tasks: Arc::new(PostgresRepository::<Task>::new(pool.clone())),
            messages: Arc::new(PostgresRepository::<Message>::new(pool.clone())),
            incomes: Arc::new(PostgresRepository::<Income>::new(pool.clone())),
            expenses: Arc::new(PostgresRepository::<Expense>::new(pool.clone())),
            payables: Arc::new(PostgresRepository::<Payable>::new(pool)),
        }
    }

    /// `<resource>.json` files under `data_dir`.
    pub fn json_files(data_dir: &Path) -> Self {
        Self {
            posts: Arc::new(JsonFileRepository::<Post>::new(data_dir)),
            projects: Arc::new(JsonFileRepository::<Project>::new(data_dir)),
            services: Arc::new(JsonFileRepository::<Service>::new(data_dir)),
            page_sections: Arc::new(JsonFileRepository::<PageSection>::new(data_dir)),
            clients: Arc::new(JsonFileRepository::<Client>::new(data_dir)),
            tasks: Arc::new(JsonFileRepository::<Task>::new(data_dir)),
            messages: Arc::new(JsonFileRepository::<Message>::new(data_dir)),
            incomes: Arc::new(JsonFileRepository::<Income>::new(data_dir)),
            expenses: Arc::new(JsonFileRepository::<Expense>::new(data_dir)),
            payables: Arc::new(JsonFileRepository::<Payable>::new(data_dir)),
        }
    }

    /// Empty process-local stores.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryRepository::<Post>::new()),
            projects: Arc::new(InMemoryRepository::<Project>::new()),
            services: Arc::new(InMemoryRepository::<Service>::new()),
            page_sections: Arc::new(InMemoryRepository::<PageSection>::new()),
            clients: Arc::new(InMemoryRepository::<Client>::new()),
            tasks: Arc::new(InMemoryRepository::<Task>::new()),
            messages: Arc::new(InMemoryRepository::<Message>::new()),
            incomes: Arc::new(InMemoryRepository::<Income>::new()),
            expenses: Arc::new(InMemoryRepository::<Expense>::new()),
            payables: Arc::new(InMemoryRepository::<Payable>::new()),
        }
    }
}
