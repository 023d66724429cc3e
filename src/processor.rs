use crate::config::{Config, MediaKind};
use crate::metadata::MediaAttributes;
use crate::overseerr::{Notification, OverseerrClient};
use crate::rules;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Overseerr's type for the "test notification" button.
const TEST_NOTIFICATION: &str = "TEST_NOTIFICATION";

/// Terminal outcome of handling one webhook notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing actionable; acknowledged without side effects.
    Ignored(&'static str),
    /// Music request approved without rule evaluation.
    Approved,
    /// A rule matched and the update was applied.
    Applied { rule: String, approved: bool },
    /// No configured rule matched; the request is left untouched.
    NoMatch,
}

/// Orchestrates one webhook notification: enrichment, rule selection, and the
/// update/approve calls back to Overseerr.
pub struct NotificationProcessor {
    config: Arc<Config>,
    overseerr: OverseerrClient,
}

impl NotificationProcessor {
    pub fn new(config: Arc<Config>, overseerr: OverseerrClient) -> Self {
        Self { config, overseerr }
    }

    /// Handle a single notification.
    ///
    /// Each evaluation is ephemeral: at most one metadata fetch and up to two
    /// mutation calls, no state carried between notifications. Failures in
    /// any outbound call bubble up unchanged; the HTTP layer translates them.
    pub async fn handle(&self, notification: Notification) -> Result<Outcome> {
        if notification.notification_type == TEST_NOTIFICATION {
            tracing::info!("Test notification received, nothing to do");
            return Ok(Outcome::Ignored("test notification"));
        }

        let media = match notification.media.as_ref() {
            Some(media) => media,
            None => {
                tracing::info!(
                    notification_type = %notification.notification_type,
                    "Notification has no media section, ignoring"
                );
                return Ok(Outcome::Ignored("no media section"));
            }
        };

        let request_id = match notification.request.as_ref() {
            Some(request) => request.request_id,
            None => {
                tracing::info!(
                    notification_type = %notification.notification_type,
                    "Notification has no request section, ignoring"
                );
                return Ok(Outcome::Ignored("no request section"));
            }
        };

        // Music has no per-rule configurability; approve and move on.
        if media.media_type == MediaKind::Music {
            tracing::info!(request_id, "Music request, approving without rule evaluation");
            self.overseerr
                .approve_request(request_id)
                .await
                .with_context(|| format!("Failed to approve music request {request_id}"))?;
            return Ok(Outcome::Approved);
        }

        if media.media_type == MediaKind::Unknown {
            tracing::info!(request_id, "Unrecognized media type, ignoring");
            return Ok(Outcome::Ignored("unrecognized media type"));
        }

        let details = self
            .overseerr
            .get_media_details(media.media_type, media.tmdb_id)
            .await
            .with_context(|| {
                format!(
                    "Failed to fetch {} metadata for request {request_id}",
                    media.media_type
                )
            })?;
        let attrs = MediaAttributes::from_details(media.media_type, details);

        tracing::debug!(
            request_id,
            genres = attrs.genres.len(),
            keywords = attrs.keywords.len(),
            ratings = attrs.content_ratings.len(),
            language = %attrs.original_language,
            "Enriched request metadata"
        );

        let rule = match rules::find_matching_rule(&attrs, &self.config.rules) {
            Some(rule) => rule,
            None => {
                tracing::info!(
                    request_id,
                    media_type = %attrs.media_type,
                    "No rule matched, leaving request untouched"
                );
                return Ok(Outcome::NoMatch);
            }
        };

        let label = rule.name.clone().unwrap_or_else(|| "unnamed".to_string());
        let update = rules::build_update(rule, &notification);

        tracing::info!(
            request_id,
            rule = %label,
            root_folder = %update.document.root_folder,
            server_id = update.document.server_id,
            approve = update.approve,
            "Applying rule"
        );

        self.overseerr
            .update_request(request_id, &update.document)
            .await
            .with_context(|| format!("Failed to update request {request_id}"))?;

        if update.approve {
            self.overseerr
                .approve_request(request_id)
                .await
                .with_context(|| format!("Failed to approve request {request_id}"))?;
        }

        Ok(Outcome::Applied {
            rule: label,
            approved: update.approve,
        })
    }
}
