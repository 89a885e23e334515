//! Path and query parameter parsing.

use actix_web::{HttpRequest, web};
use postdesk_core::domain::{Pagination, RecordId};
use postdesk_shared::dto::ListQuery;

use crate::middleware::error::AppError;

/// Parse an `{id}` path segment as an unsigned integer that fits the id column.
pub fn record_id(raw: &str) -> Result<RecordId, AppError> {
    raw.parse::<u32>()
        .ok()
        .and_then(|id| RecordId::try_from(id).ok())
        .ok_or_else(|| AppError::BadRequest("Invalid ID format".to_string()))
}

/// Read `?page=&limit=`. Never fails: anything unusable becomes the default.
pub fn pagination(req: &HttpRequest) -> Pagination {
    let query = web::Query::<ListQuery>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();

    Pagination::new(number(query.page.as_deref()), number(query.limit.as_deref()))
}

fn number(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse().ok())
}
