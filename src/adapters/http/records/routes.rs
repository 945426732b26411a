//! Route tables for back-office records.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::application::handlers::{CrudHandler, PageContentHandler};
use crate::domain::foundation::{Ordered, Record};

use super::handlers::{
    create_ordered_record, create_record, delete_record, get_record, list_records, page_sections, reorder_records,
    update_record, upsert_page_section,
};

/// `GET|POST /` and `GET|PUT|DELETE /:id` for one resource.
pub fn resource_routes<T: Record>(handler: CrudHandler<T>) -> Router {
    Router::new()
        .route("/", get(list_records::<T>).post(create_record::<T>))
        .route(
            "/:id",
            get(get_record::<T>).put(update_record::<T>).delete(delete_record::<T>),
        )
        .with_state(handler)
}

/// Like [`resource_routes`], with append-on-create and `PUT /reorder`.
pub fn ordered_resource_routes<T: Ordered>(handler: CrudHandler<T>) -> Router {
    Router::new()
        .route("/", get(list_records::<T>).post(create_ordered_record::<T>))
        .route("/reorder", put(reorder_records::<T>))
        .route(
            "/:id",
            get(get_record::<T>).put(update_record::<T>).delete(delete_record::<T>),
        )
        .with_state(handler)
}

/// CMS-lite page editing.
pub fn page_routes(handler: Arc<PageContentHandler>) -> Router {
    Router::new()
        .route("/:page", get(page_sections))
        .route("/:page/:section", put(upsert_page_section))
        .with_state(handler)
}
