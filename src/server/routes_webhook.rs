use crate::overseerr::Notification;
use crate::processor::Outcome;
use crate::server::AppContext;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// `POST /webhook` -- Overseerr notification endpoint.
///
/// Every successfully handled notification is acknowledged with 202,
/// including "no rule matched"; processing failures surface as 500 with a
/// plain-text body. Diagnosis happens in the server logs, not the response.
pub async fn handle_webhook(
    State(ctx): State<AppContext>,
    Json(notification): Json<Notification>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!(
        notification_type = %notification.notification_type,
        "Received webhook notification"
    );

    match ctx.processor.handle(notification).await {
        Ok(outcome) => {
            if let Outcome::Applied { rule, approved } = &outcome {
                tracing::debug!(rule = %rule, approved, "Webhook handled");
            }
            Ok(StatusCode::ACCEPTED)
        }
        Err(e) => {
            tracing::error!("Webhook processing failed: {:#}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)))
        }
    }
}
