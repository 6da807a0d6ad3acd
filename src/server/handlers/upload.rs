//! Batch upload handler.

use axum::{
    body::{Body, Bytes},
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use futures::stream;

use super::super::types::{AppState, CSV_CONTENT_TYPE};
use crate::batch::check_batch;
use crate::check::ResultCollection;
use crate::config::UPLOAD_FIELD_NAME;
use crate::error_handling::BatchError;

/// `POST /upload`: checks the CSV name list in the `domainlist` form field.
///
/// Responds with the sorted results, one body chunk per CSV record.
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let upload = match read_upload(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("missing form field '{UPLOAD_FIELD_NAME}'"),
            )
                .into_response();
        }
        Err(e) => {
            log::warn!("Failed to read upload: {e}");
            return (e.status(), e.body_text()).into_response();
        }
    };
    log::info!("Received name list of {} bytes", upload.len());

    match check_batch(
        state.connector.as_ref(),
        &state.session,
        &state.batch,
        &upload[..],
    )
    .await
    {
        Ok(all) => stream_results(all),
        Err(BatchError::Input(e)) => {
            log::warn!("Rejected name list: {e}");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e @ BatchError::Session(_)) => {
            log::error!("Cannot check name list: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD_NAME) {
            return Ok(Some(field.bytes().await?));
        }
    }
    Ok(None)
}

fn stream_results(all: ResultCollection) -> Response {
    let records = stream::iter(all.into_iter().map(|result| {
        result.to_csv_line().map(Bytes::from).map_err(|e| {
            log::error!("Failed to write csv: {e}");
            e
        })
    }));
    (
        [(header::CONTENT_TYPE, CSV_CONTENT_TYPE)],
        Body::from_stream(records),
    )
        .into_response()
}
