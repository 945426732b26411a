//! Back-office tasks, optionally tied to a client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::foundation::{
    optional_text, require_text, Record, RecordId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, TaskStatus::Done)
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown task status '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(ValidationError::invalid_format(
                "priority",
                format!("unknown task priority '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_on: Option<NaiveDate>,
    pub client_id: Option<RecordId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub client_id: Option<RecordId>,
}

impl Record for Task {
    const RESOURCE: &'static str = "tasks";
    const LABEL: &'static str = "Task";
    type Draft = TaskDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create(id: RecordId, draft: TaskDraft, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: require_text("title", &draft.title)?,
            description: optional_text(draft.description),
            status: draft.status,
            priority: draft.priority,
            due_on: draft.due_on,
            client_id: draft.client_id,
            created_at: now,
            updated_at: now,
        })
    }

    fn revise(&mut self, draft: TaskDraft, now: Timestamp) -> Result<(), ValidationError> {
        self.title = require_text("title", &draft.title)?;
        self.description = optional_text(draft.description);
        self.status = draft.status;
        self.priority = draft.priority;
        self.due_on = draft.due_on;
        self.client_id = draft.client_id;
        self.updated_at = now;
        Ok(())
    }

    /// Open before done, then earliest due date (undated last), then highest priority.
    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.status
            .is_open()
            .cmp(&a.status.is_open())
            .then_with(|| match (a.due_on, b.due_on) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| a.created_at.cmp(&b.created_at))
    }
}
