//! Shared fixtures for rule matching tests.

use crate::config::MediaKind;
use crate::metadata::{ContentRating, MediaAttributes};
use crate::overseerr::types::{Genre, Keyword};

/// A Japanese animated series with typical anime keywords.
pub fn make_anime_series() -> MediaAttributes {
    MediaAttributes {
        media_type: MediaKind::Tv,
        genres: vec![
            Genre {
                id: 16,
                name: "Animation".to_string(),
            },
            Genre {
                id: 35,
                name: "Comedy".to_string(),
            },
        ],
        keywords: vec![
            Keyword {
                id: 210024,
                name: "anime".to_string(),
            },
            Keyword {
                id: 13141,
                name: "based on manga".to_string(),
            },
        ],
        original_language: "ja".to_string(),
        content_ratings: vec![ContentRating {
            country: "US".to_string(),
            rating: "TV-14".to_string(),
        }],
    }
}

/// An English-language family movie rated PG in the US.
pub fn make_family_movie() -> MediaAttributes {
    MediaAttributes {
        media_type: MediaKind::Movie,
        genres: vec![
            Genre {
                id: 10751,
                name: "Family".to_string(),
            },
            Genre {
                id: 12,
                name: "Adventure".to_string(),
            },
        ],
        keywords: vec![Keyword {
            id: 9715,
            name: "superhero".to_string(),
        }],
        original_language: "en".to_string(),
        content_ratings: vec![ContentRating {
            country: "US".to_string(),
            rating: "PG".to_string(),
        }],
    }
}
