use axum::{
    extract::Extension,
    http::{StatusCode, header},
};
use tracing::{error, instrument};

use crate::repositories::log::LogRepo;

/// `GET /logs` — unfiltered scan rendered as `[YYYY-MM-DD HH:MM:SS] message`
/// lines, one per record, in store order.
///
/// The `application/json` content type on a plain-text body is a legacy
/// quirk kept for compatibility with existing consumers.
#[instrument(name = "handlers.list_logs", skip(repo))]
pub async fn list_logs_handler(
    Extension(repo): Extension<LogRepo>,
) -> Result<([(header::HeaderName, &'static str); 1], String), (StatusCode, String)> {
    let entries = repo.list().await.map_err(|err| {
        error!(msg = "Failed to fetch log entries", error = %err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch logs from MongoDB\n".to_string(),
        )
    })?;

    let mut body = String::new();
    for entry in &entries {
        body.push_str(&entry.render_line());
        body.push('\n');
    }

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
