use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AsrResponse {
    pub transcription: String,
    /// Clip duration in seconds, fixed-point with one decimal.
    pub duration: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Transcribe an uploaded audio file.
///
/// Every pipeline failure maps to a single 500 response; a partial or
/// degraded transcription is never returned.
pub async fn asr_handler(State(state): State<AppState>, multipart: Multipart) -> impl IntoResponse {
    let Some(transcriber) = state.transcriber.as_ref() else {
        tracing::error!("Transcription requested but the acoustic model is unavailable");
        return internal_error("acoustic model unavailable");
    };

    let data = match read_file_field(multipart).await {
        Ok(data) => data,
        Err(message) => {
            tracing::warn!(error = %message, "Rejected upload");
            return internal_error(&message);
        }
    };

    match transcriber.transcribe(data.to_vec()).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AsrResponse {
                transcription: result.transcription,
                duration: format!("{:.1}", result.duration_seconds),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, stage = e.stage(), "Transcription pipeline failed");
            internal_error(&e.to_string())
        }
    }
}

async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, String> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| format!("malformed multipart body: {}", e))?;
        let Some(field) = field else {
            return Err("missing multipart field 'file'".to_string());
        };
        if field.name() == Some("file") {
            return field
                .bytes()
                .await
                .map_err(|e| format!("failed to read upload: {}", e));
        }
    }
}

fn internal_error(message: &str) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
