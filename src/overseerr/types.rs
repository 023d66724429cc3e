use crate::config::MediaKind;
use serde::{Deserialize, Deserializer, Serialize};

/// Overseerr webhook payload
///
/// Only the sections the processor acts on are modeled; the payload carries
/// more (subject, message, image) that we never read.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub notification_type: String,

    pub media: Option<NotificationMedia>,

    pub request: Option<NotificationRequest>,

    #[serde(default)]
    pub extra: Vec<ExtraEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationMedia {
    pub media_type: MediaKind,

    // Overseerr's webhook template renders ids as JSON strings.
    #[serde(rename = "tmdbId", default, deserialize_with = "flexible_id")]
    pub tmdb_id: i64,

    #[serde(rename = "tvdbId", default, deserialize_with = "flexible_id")]
    pub tvdb_id: i64,

    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRequest {
    #[serde(rename = "request_id", default, deserialize_with = "flexible_id")]
    pub request_id: i64,

    #[serde(rename = "requestedBy_username", default)]
    pub requested_by_username: Option<String>,

    #[serde(rename = "requestedBy_email", default)]
    pub requested_by_email: Option<String>,
}

/// One `{name, value}` pair from the webhook's `extra` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraEntry {
    pub name: String,
    pub value: String,
}

/// Accept ids as either JSON numbers or the stringified numbers Overseerr's
/// template engine produces. Missing values render as empty strings (a
/// movie's tvdbId, for instance); those and nulls become 0.
fn flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(i64),
        Str(String),
    }

    match Option::<Repr>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Repr::Num(n)) => Ok(n),
        Some(Repr::Str(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(0)
            } else {
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Media detail responses (GET /api/v1/{movie,tv}/{id})
// ---------------------------------------------------------------------------

/// Canonical item details as returned by Overseerr.
///
/// Movies carry certifications inside `releases`, series carry them inside
/// `contentRatings`; list fields are omitted by the API when empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetails {
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,

    #[serde(default)]
    pub keywords: Option<Vec<Keyword>>,

    #[serde(default)]
    pub original_language: Option<String>,

    /// Movie-only: per-country release records.
    #[serde(default)]
    pub releases: Option<ReleaseResults>,

    /// Series-only: flat per-country rating list.
    #[serde(default)]
    pub content_ratings: Option<ContentRatingResults>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseResults {
    #[serde(default)]
    pub results: Vec<CountryRelease>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRelease {
    pub iso_3166_1: String,

    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseDate {
    #[serde(default)]
    pub certification: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentRatingResults {
    #[serde(default)]
    pub results: Vec<RatingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingEntry {
    pub iso_3166_1: String,

    #[serde(default)]
    pub rating: String,
}

// ---------------------------------------------------------------------------
// Request update (PUT /api/v1/request/{id})
// ---------------------------------------------------------------------------

/// Body of the request update call.
///
/// `profileId` and `seasons` must be omitted entirely when not applicable;
/// Overseerr treats explicit nulls as values.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdateDocument {
    pub media_type: MediaKind,

    pub root_folder: String,

    pub server_id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<i32>>,
}
