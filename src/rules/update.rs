use crate::config::{MediaKind, Rule};
use crate::overseerr::types::{Notification, RequestUpdateDocument};

/// Extra entry Overseerr fills with the season selection of a series request.
const REQUESTED_SEASONS: &str = "Requested Seasons";

/// The computed side effect of a matched rule: what to PUT, and whether to
/// follow up with an approval.
#[derive(Debug, Clone)]
pub struct RequestUpdate {
    pub document: RequestUpdateDocument,
    pub approve: bool,
}

/// Build the update to send back for a selected rule.
pub fn build_update(rule: &Rule, notification: &Notification) -> RequestUpdate {
    let profile_id = rule.apply.quality_profile_id.filter(|id| *id > 0);

    let seasons = if rule.media_type == MediaKind::Tv {
        requested_seasons(notification)
    } else {
        None
    };

    RequestUpdate {
        document: RequestUpdateDocument {
            media_type: rule.media_type,
            root_folder: rule.apply.root_folder.clone(),
            server_id: rule.apply.server_id,
            profile_id,
            seasons,
        },
        approve: rule.apply.approve,
    }
}

fn requested_seasons(notification: &Notification) -> Option<Vec<i32>> {
    let entry = notification
        .extra
        .iter()
        .find(|entry| entry.name == REQUESTED_SEASONS)?;

    let seasons: Vec<i32> = entry
        .value
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            if token.is_empty() {
                return None;
            }
            match token.parse() {
                Ok(season) => Some(season),
                Err(_) => {
                    tracing::warn!("Ignoring unparseable season token: {:?}", token);
                    None
                }
            }
        })
        .collect();

    if seasons.is_empty() {
        None
    } else {
        Some(seasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApplySettings, MatchCriteria};
    use crate::overseerr::types::ExtraEntry;

    fn make_rule(media_type: MediaKind, quality_profile_id: Option<i32>) -> Rule {
        Rule {
            name: None,
            media_type,
            match_criteria: MatchCriteria::default(),
            apply: ApplySettings {
                root_folder: "/data/media".to_string(),
                server_id: 1,
                quality_profile_id,
                approve: true,
            },
        }
    }

    fn make_notification(extra: Vec<ExtraEntry>) -> Notification {
        let mut value = serde_json::json!({
            "notification_type": "MEDIA_PENDING",
            "media": {"media_type": "tv", "tmdbId": 1},
            "request": {"request_id": 1},
            "extra": []
        });
        value["extra"] = serde_json::to_value(
            extra
                .iter()
                .map(|e| serde_json::json!({"name": e.name, "value": e.value}))
                .collect::<Vec<_>>(),
        )
        .unwrap();
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn seasons_parsed_from_extra_entry() {
        let rule = make_rule(MediaKind::Tv, Some(4));
        let notification = make_notification(vec![ExtraEntry {
            name: REQUESTED_SEASONS.to_string(),
            value: "1,2,3".to_string(),
        }]);

        let update = build_update(&rule, &notification);
        assert_eq!(update.document.seasons, Some(vec![1, 2, 3]));
        assert_eq!(update.document.profile_id, Some(4));
        assert!(update.approve);
    }

    #[test]
    fn seasons_omitted_without_extra_entry() {
        let rule = make_rule(MediaKind::Tv, None);
        let notification = make_notification(vec![]);

        let update = build_update(&rule, &notification);
        assert_eq!(update.document.seasons, None);
        assert_eq!(update.document.profile_id, None);
    }

    #[test]
    fn seasons_never_attached_for_movies() {
        let rule = make_rule(MediaKind::Movie, Some(2));
        let notification = make_notification(vec![ExtraEntry {
            name: REQUESTED_SEASONS.to_string(),
            value: "1,2".to_string(),
        }]);

        let update = build_update(&rule, &notification);
        assert_eq!(update.document.seasons, None);
    }

    #[test]
    fn zero_profile_id_is_treated_as_absent() {
        let rule = make_rule(MediaKind::Movie, Some(0));
        let notification = make_notification(vec![]);

        let update = build_update(&rule, &notification);
        assert_eq!(update.document.profile_id, None);
    }

    #[test]
    fn bad_season_tokens_are_skipped() {
        let rule = make_rule(MediaKind::Tv, None);
        let notification = make_notification(vec![ExtraEntry {
            name: REQUESTED_SEASONS.to_string(),
            value: "1,two,3".to_string(),
        }]);

        let update = build_update(&rule, &notification);
        assert_eq!(update.document.seasons, Some(vec![1, 3]));
    }

    #[test]
    fn empty_season_value_omits_the_field() {
        let rule = make_rule(MediaKind::Tv, None);
        let notification = make_notification(vec![ExtraEntry {
            name: REQUESTED_SEASONS.to_string(),
            value: "".to_string(),
        }]);

        let update = build_update(&rule, &notification);
        assert_eq!(update.document.seasons, None);
    }
}
