//! CRM module - clients, tasks and contact messages.

mod client;
mod message;
mod task;

pub use client::{Client, ClientDraft, ClientStatus};
pub use message::{Message, MessageDraft};
pub use task::{Task, TaskDraft, TaskPriority, TaskStatus};
