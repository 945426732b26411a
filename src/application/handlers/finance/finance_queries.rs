//! FinanceQueryHandler - Dashboard totals, ledgers and client statements.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::crm::{Client, ClientStatus, Message, Task};
use crate::domain::finance::{
    open_payables, receivables, ClientStatement, Expense, FinanceOverview, Income, Payable, PayableEntry,
    ReceivableEntry,
};
use crate::domain::foundation::{DomainError, RecordId};
use crate::ports::Repository;

/// CRM activity counters shown next to the finance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrmCounts {
    pub clients: usize,
    pub active_clients: usize,
    pub open_tasks: usize,
    pub unread_messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub finance: FinanceOverview,
    pub crm: CrmCounts,
}

/// Repositories the finance queries read from.
#[derive(Clone)]
pub struct FinanceRepositories {
    pub incomes: Arc<dyn Repository<Income>>,
    pub expenses: Arc<dyn Repository<Expense>>,
    pub payables: Arc<dyn Repository<Payable>>,
    pub clients: Arc<dyn Repository<Client>>,
    pub tasks: Arc<dyn Repository<Task>>,
    pub messages: Arc<dyn Repository<Message>>,
}

pub struct FinanceQueryHandler {
    repos: FinanceRepositories,
}

impl FinanceQueryHandler {
    pub fn new(repos: FinanceRepositories) -> Self {
        Self { repos }
    }

    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardView, DomainError> {
        let incomes = self.repos.incomes.list().await?;
        let expenses = self.repos.expenses.list().await?;
        let payables = self.repos.payables.list().await?;
        let clients = self.repos.clients.list().await?;
        let tasks = self.repos.tasks.list().await?;
        let messages = self.repos.messages.list().await?;

        let crm = CrmCounts {
            clients: clients.len(),
            active_clients: clients.iter().filter(|c| c.status == ClientStatus::Active).count(),
            open_tasks: tasks.iter().filter(|t| t.status.is_open()).count(),
            unread_messages: messages.iter().filter(|m| !m.read).count(),
        };

        Ok(DashboardView {
            finance: FinanceOverview::compute(&incomes, &expenses, &payables, today),
            crm,
        })
    }

    pub async fn receivables(&self, today: NaiveDate) -> Result<Vec<ReceivableEntry>, DomainError> {
        let incomes = self.repos.incomes.list().await?;
        let clients = self.repos.clients.list().await?;
        Ok(receivables(&incomes, &clients, today))
    }

    pub async fn payables(&self, today: NaiveDate) -> Result<Vec<PayableEntry>, DomainError> {
        let payables = self.repos.payables.list().await?;
        Ok(open_payables(&payables, today))
    }

    /// Statement for one client; `NotFound` for unknown ids.
    pub async fn statement(&self, client_id: RecordId) -> Result<ClientStatement, DomainError> {
        let client = self
            .repos
            .clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", client_id))?;
        let incomes = self.repos.incomes.list().await?;
        Ok(ClientStatement::build(&client, &incomes))
    }
}
