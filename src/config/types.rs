use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Base URL of the Overseerr instance, e.g. `http://overseerr:5055`.
    #[serde(default)]
    pub overseerr_baseurl: String,

    /// API key from Overseerr's settings page.
    #[serde(default)]
    pub overseerr_api_key: String,

    /// Ordered rule list; the first matching rule wins.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The kind of media a request refers to, as reported by Overseerr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Music,
    /// Anything Overseerr starts sending that we don't know about yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Music => "music",
            MediaKind::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rule {
    /// Optional display name used in logs.
    #[serde(default)]
    pub name: Option<String>,

    pub media_type: MediaKind,

    #[serde(rename = "match", default)]
    pub match_criteria: MatchCriteria,

    pub apply: ApplySettings,
}

impl Rule {
    /// Name for diagnostics, falling back to the 1-based position in the list.
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// Conditions a request's metadata must satisfy for a rule to apply.
///
/// Empty criteria always match. Keyword checks use substring containment
/// against the media's keyword names, so partial words like `"anime"` match
/// `"japanese anime"` -- keep rule keywords specific enough.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchCriteria {
    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default)]
    pub exclude_keywords: Vec<String>,

    #[serde(default)]
    pub include_keywords: Vec<String>,

    #[serde(default)]
    pub content_ratings: Vec<RatingCriterion>,

    /// Hard gate: when set, the rule is skipped outright on mismatch.
    #[serde(default)]
    pub original_language: Option<String>,
}

impl MatchCriteria {
    /// True when no dimension constrains anything, i.e. a catch-all.
    pub fn is_unconstrained(&self) -> bool {
        self.genres.is_empty()
            && self.exclude_keywords.is_empty()
            && self.include_keywords.is_empty()
            && self.content_ratings.is_empty()
            && self.original_language.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatingCriterion {
    /// ISO 3166-1 country code; a country-agnostic entry matches any country.
    #[serde(default)]
    pub country: Option<String>,

    pub rating: String,
}

/// What a matching rule does to the request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplySettings {
    pub root_folder: String,

    pub server_id: i32,

    /// Quality profile to set; zero or absent leaves the profile untouched.
    #[serde(default)]
    pub quality_profile_id: Option<i32>,

    #[serde(default)]
    pub approve: bool,
}
