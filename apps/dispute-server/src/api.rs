//! API handlers for the dispute server
//!
//! Provides REST endpoints for:
//! - Health checks
//! - Dispute document upload and parsing

use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use shared_types::ParseOutcome;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::ServerError;
use crate::AppState;

/// Multipart field carrying the PDF
pub const UPLOAD_FIELD: &str = "file";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "dispute-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /upload
///
/// Accepts a multipart form with a `file` part holding the PDF and returns
/// the dispute summary, or `{}` when no text could be extracted.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseOutcome>, ServerError> {
    let request_id = Uuid::new_v4();
    process_upload(state, multipart)
        .instrument(info_span!("upload", %request_id))
        .await
}

async fn process_upload(
    state: AppState,
    mut multipart: Multipart,
) -> Result<Json<ParseOutcome>, ServerError> {
    let mut document = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!(field = ?field.name(), "ignoring multipart field");
            continue;
        }

        if let Some(content_type) = field.content_type() {
            if !is_pdf_content_type(content_type) {
                warn!(content_type, "rejecting non-PDF upload");
                return Err(ServerError::UnsupportedMedia(content_type.to_string()));
            }
        }

        let file_name = field.file_name().unwrap_or("upload.pdf").to_string();
        let data = field.bytes().await?;
        info!(file_name = %file_name, size = data.len(), "received upload");
        document = Some(data);
        break;
    }

    let data = document.ok_or_else(|| {
        ServerError::InvalidRequest(format!("Missing multipart field '{}'", UPLOAD_FIELD))
    })?;

    let engine = state.engine.clone();
    let result = tokio::time::timeout(
        Duration::from_millis(state.timeout_ms),
        tokio::task::spawn_blocking(move || engine.parse_pdf(&data)),
    )
    .await;

    let outcome = match result {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(join_error)) => {
            return Err(ServerError::Internal(format!(
                "Parse task failed: {}",
                join_error
            )));
        }
        Err(_timeout) => {
            // spawn_blocking work cannot be cancelled
            warn!(
                timeout_ms = state.timeout_ms,
                "parse timed out, blocking worker keeps running until the PDF backend returns"
            );
            return Err(ServerError::Timeout(state.timeout_ms));
        }
    };

    match &outcome {
        ParseOutcome::Unreadable if state.strict_extraction => {
            return Err(ServerError::UnreadableDocument);
        }
        ParseOutcome::Unreadable => info!("document unreadable, returning empty result"),
        ParseOutcome::Parsed(summary) => info!(
            name_found = summary.user_info.name.is_some(),
            card_found = summary.user_info.credit_card.is_some(),
            amount_found = summary.amount.is_found(),
            "document parsed"
        ),
    }

    Ok(Json(outcome))
}

/// `application/pdf`, ignoring case and parameters.
pub fn is_pdf_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false)
}
