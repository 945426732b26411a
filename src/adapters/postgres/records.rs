//! Table mappings for every persisted record.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use std::str::FromStr;
use uuid::Uuid;

use super::repository::{column, PgQuery, PgRecord};
use crate::domain::content::{PageSection, Post, Project, Service};
use crate::domain::crm::{Client, ClientStatus, Message, Task, TaskPriority, TaskStatus};
use crate::domain::finance::{Expense, Income, Payable};
use crate::domain::foundation::{DomainError, Money, RecordId, Slug, Timestamp};

fn record_id(row: &PgRow, name: &str) -> Result<RecordId, DomainError> {
    column::<Uuid>(row, name).map(RecordId::from_uuid)
}

fn optional_record_id(row: &PgRow, name: &str) -> Result<Option<RecordId>, DomainError> {
    Ok(column::<Option<Uuid>>(row, name)?.map(RecordId::from_uuid))
}

fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    column::<DateTime<Utc>>(row, name).map(Timestamp::from_datetime)
}

fn slug(row: &PgRow) -> Result<Slug, DomainError> {
    let raw: String = column(row, "slug")?;
    Ok(Slug::resolve(Some(&raw), &raw)?)
}

fn money(row: &PgRow, name: &str) -> Result<Money, DomainError> {
    column::<i64>(row, name).map(Money::from_minor)
}

fn parsed<E: FromStr>(row: &PgRow, name: &str) -> Result<E, DomainError>
where
    DomainError: From<E::Err>,
{
    let raw: String = column(row, name)?;
    Ok(raw.parse::<E>()?)
}

impl PgRecord for Post {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "slug",
        "title",
        "excerpt",
        "content",
        "cover_image",
        "tags",
        "published",
        "published_at",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(self.slug.as_str())
            .bind(&self.title)
            .bind(&self.excerpt)
            .bind(&self.content)
            .bind(&self.cover_image)
            .bind(&self.tags)
            .bind(self.published)
            .bind(self.published_at.map(|t| *t.as_datetime()))
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            slug: slug(row)?,
            title: column(row, "title")?,
            excerpt: column(row, "excerpt")?,
            content: column(row, "content")?,
            cover_image: column(row, "cover_image")?,
            tags: column(row, "tags")?,
            published: column(row, "published")?,
            published_at: column::<Option<DateTime<Utc>>>(row, "published_at")?.map(Timestamp::from_datetime),
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Project {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "slug",
        "title",
        "category",
        "summary",
        "description",
        "cover_image",
        "url",
        "technologies",
        "lab",
        "featured",
        "sort_order",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(self.slug.as_str())
            .bind(&self.title)
            .bind(&self.category)
            .bind(&self.summary)
            .bind(&self.description)
            .bind(&self.cover_image)
            .bind(&self.url)
            .bind(&self.technologies)
            .bind(self.lab)
            .bind(self.featured)
            .bind(self.sort_order)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            slug: slug(row)?,
            title: column(row, "title")?,
            category: column(row, "category")?,
            summary: column(row, "summary")?,
            description: column(row, "description")?,
            cover_image: column(row, "cover_image")?,
            url: column(row, "url")?,
            technologies: column(row, "technologies")?,
            lab: column(row, "lab")?,
            featured: column(row, "featured")?,
            sort_order: column(row, "sort_order")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Service {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "slug",
        "title",
        "description",
        "icon",
        "features",
        "sort_order",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(self.slug.as_str())
            .bind(&self.title)
            .bind(&self.description)
            .bind(&self.icon)
            .bind(&self.features)
            .bind(self.sort_order)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            slug: slug(row)?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            icon: column(row, "icon")?,
            features: column(row, "features")?,
            sort_order: column(row, "sort_order")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for PageSection {
    const COLUMNS: &'static [&'static str] = &["id", "page", "section", "content", "created_at", "updated_at"];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(&self.page)
            .bind(&self.section)
            .bind(&self.content)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            page: column(row, "page")?,
            section: column(row, "section")?,
            content: column(row, "content")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Client {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "company",
        "email",
        "phone",
        "website",
        "status",
        "notes",
        "sort_order",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(&self.name)
            .bind(&self.company)
            .bind(&self.email)
            .bind(&self.phone)
            .bind(&self.website)
            .bind(self.status.as_str())
            .bind(&self.notes)
            .bind(self.sort_order)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            name: column(row, "name")?,
            company: column(row, "company")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            website: column(row, "website")?,
            status: parsed::<ClientStatus>(row, "status")?,
            notes: column(row, "notes")?,
            sort_order: column(row, "sort_order")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Task {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "status",
        "priority",
        "due_on",
        "client_id",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(&self.title)
            .bind(&self.description)
            .bind(self.status.as_str())
            .bind(self.priority.as_str())
            .bind(self.due_on)
            .bind(self.client_id.map(|id| *id.as_uuid()))
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            status: parsed::<TaskStatus>(row, "status")?,
            priority: parsed::<TaskPriority>(row, "priority")?,
            due_on: column::<Option<NaiveDate>>(row, "due_on")?,
            client_id: optional_record_id(row, "client_id")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Message {
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "email", "subject", "body", "read", "created_at", "updated_at"];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.subject)
            .bind(&self.body)
            .bind(self.read)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            subject: column(row, "subject")?,
            body: column(row, "body")?,
            read: column(row, "read")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Income {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "client_id",
        "description",
        "amount",
        "issued_on",
        "due_on",
        "paid",
        "paid_on",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(self.client_id.map(|id| *id.as_uuid()))
            .bind(&self.description)
            .bind(self.amount.minor())
            .bind(self.issued_on)
            .bind(self.due_on)
            .bind(self.paid)
            .bind(self.paid_on)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            client_id: optional_record_id(row, "client_id")?,
            description: column(row, "description")?,
            amount: money(row, "amount")?,
            issued_on: column(row, "issued_on")?,
            due_on: column(row, "due_on")?,
            paid: column(row, "paid")?,
            paid_on: column(row, "paid_on")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Expense {
    const COLUMNS: &'static [&'static str] =
        &["id", "description", "category", "amount", "spent_on", "created_at", "updated_at"];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(&self.description)
            .bind(&self.category)
            .bind(self.amount.minor())
            .bind(self.spent_on)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            description: column(row, "description")?,
            category: column(row, "category")?,
            amount: money(row, "amount")?,
            spent_on: column(row, "spent_on")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}

impl PgRecord for Payable {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "vendor",
        "description",
        "category",
        "amount",
        "due_on",
        "paid",
        "paid_on",
        "created_at",
        "updated_at",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.as_uuid())
            .bind(&self.vendor)
            .bind(&self.description)
            .bind(&self.category)
            .bind(self.amount.minor())
            .bind(self.due_on)
            .bind(self.paid)
            .bind(self.paid_on)
            .bind(self.created_at.as_datetime())
            .bind(self.updated_at.as_datetime())
    }

    fn from_row(row: &PgRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: record_id(row, "id")?,
            vendor: column(row, "vendor")?,
            description: column(row, "description")?,
            category: column(row, "category")?,
            amount: money(row, "amount")?,
            due_on: column(row, "due_on")?,
            paid: column(row, "paid")?,
            paid_on: column(row, "paid_on")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }
}
