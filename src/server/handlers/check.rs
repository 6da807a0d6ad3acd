//! Single-name check handler.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::types::{AppState, CSV_CONTENT_TYPE};
use crate::batch::check_single;

/// `GET /check/{domain}`: one CSV record `name,errorText,status,why`.
pub async fn check_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Response {
    let result = match check_single(state.connector.as_ref(), &state.session, &domain).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Cannot check {domain}: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    match result.to_csv_line() {
        Ok(line) => ([(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], line).into_response(),
        Err(e) => {
            log::error!("Failed to write csv: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
