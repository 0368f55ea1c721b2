use axum::{
    Form,
    extract::{Extension, rejection::FormRejection},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::{models::LogEntry, repositories::log::LogRepo};

#[derive(Debug, Deserialize)]
pub struct AppendLog {
    #[serde(default)]
    pub message: String,
}

/// `POST /log` — wrap the form message in a timestamped record and insert it.
#[instrument(name = "handlers.append_log", skip(repo, form))]
pub async fn append_log_handler(
    Extension(repo): Extension<LogRepo>,
    form: Result<Form<AppendLog>, FormRejection>,
) -> Result<String, (StatusCode, String)> {
    // A non-form body carries no message field; treat it like an empty one
    let message = match form {
        Ok(Form(form)) => form.message,
        Err(_) => String::new(),
    };

    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Log message is required\n".to_string(),
        ));
    }

    let entry = LogEntry::new(message);

    repo.append(entry).await.map_err(|err| {
        error!(msg = "Failed to save log entry", error = %err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save log to MongoDB\n".to_string(),
        )
    })?;

    info!(msg = "Log entry saved");

    Ok("Log received and saved to MongoDB\n".to_string())
}
