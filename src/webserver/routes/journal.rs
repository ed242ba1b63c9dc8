//! Trade journal API routes
//!
//! Thin handlers: extract, call the journal service, wrap the result in the
//! response envelope. Every entry is returned with its derived fields.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Response,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::errors::JournalError;
use crate::journal::{DashboardQuery, TradeEntry, TradeEntryView};
use crate::logger::{self, LogTag};
use crate::webserver::state::AppState;
use crate::webserver::utils::{journal_error_response, success_response};

// ============================================================================
// ROUTES
// ============================================================================

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/journal", get(list_entries).post(create_entry))
        .route("/v1/journal/dashboard", get(get_dashboard))
        .route("/v1/journal/:id", get(get_entry).put(update_entry))
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /api/v1/journal
async fn create_entry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TradeEntry>, JsonRejection>,
) -> Response {
    let entry = match read_body(payload) {
        Ok(entry) => entry,
        Err(e) => return journal_error_response(&e),
    };

    match state.journal.save_entry(entry) {
        Ok(saved) => success_response(
            TradeEntryView::from(saved),
            "Journal entry created successfully",
        ),
        Err(e) => journal_error_response(&e),
    }
}

/// GET /api/v1/journal
async fn list_entries(State(state): State<Arc<AppState>>) -> Response {
    match state.journal.get_all_entries() {
        Ok(entries) => {
            let views: Vec<TradeEntryView> = entries.into_iter().map(Into::into).collect();
            success_response(views, "All trades fetched successfully")
        }
        Err(e) => journal_error_response(&e),
    }
}

/// GET /api/v1/journal/:id
async fn get_entry(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.journal.get_entry(&id) {
        Ok(entry) => success_response(TradeEntryView::from(entry), "Trade fetched successfully"),
        Err(e) => journal_error_response(&e),
    }
}

/// PUT /api/v1/journal/:id - full replace, the path id wins
async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<TradeEntry>, JsonRejection>,
) -> Response {
    let entry = match read_body(payload) {
        Ok(entry) => entry,
        Err(e) => return journal_error_response(&e),
    };

    match state.journal.update_entry(&id, entry) {
        Ok(saved) => success_response(TradeEntryView::from(saved), "Trade updated successfully"),
        Err(e) => journal_error_response(&e),
    }
}

/// GET /api/v1/journal/dashboard?fromDate=yyyy-MM-dd&toDate=yyyy-MM-dd
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            return journal_error_response(&JournalError::MalformedRequest(rejection.body_text()))
        }
    };

    let ctx = match query.validate() {
        Ok(ctx) => ctx,
        Err(e) => return journal_error_response(&JournalError::Validation(e)),
    };

    logger::debug(
        LogTag::Dashboard,
        &format!("Dashboard requested for {} to {}", ctx.from_date, ctx.to_date),
    );

    match state.journal.dashboard(ctx) {
        Ok(data) => success_response(data, "Dashboard data fetched successfully"),
        Err(e) => journal_error_response(&e),
    }
}

fn read_body(payload: Result<Json<TradeEntry>, JsonRejection>) -> Result<TradeEntry, JournalError> {
    payload
        .map(|Json(entry)| entry)
        .map_err(|rejection| JournalError::MalformedRequest(rejection.body_text()))
}
