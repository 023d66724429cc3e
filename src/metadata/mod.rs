//! Normalization of Overseerr item details into one uniform shape.
//!
//! The upstream API models certifications differently per media type: movies
//! bury them in per-country release records, series expose a flat rating
//! list. This module is the single place resolving that divergence so the
//! rule matcher only ever sees [`MediaAttributes`].

use crate::config::MediaKind;
use crate::overseerr::types::{Genre, Keyword, MediaDetails, ReleaseResults};

/// A normalized per-country content rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRating {
    pub country: String,
    pub rating: String,
}

/// Everything the rule matcher evaluates, with empty defaults for whatever
/// the upstream source lacks.
#[derive(Debug, Clone)]
pub struct MediaAttributes {
    pub media_type: MediaKind,
    pub genres: Vec<Genre>,
    pub keywords: Vec<Keyword>,
    pub original_language: String,
    pub content_ratings: Vec<ContentRating>,
}

impl MediaAttributes {
    pub fn from_details(kind: MediaKind, details: MediaDetails) -> Self {
        let content_ratings = match kind {
            MediaKind::Movie => movie_certifications(details.releases),
            _ => details
                .content_ratings
                .map(|ratings| {
                    ratings
                        .results
                        .into_iter()
                        .map(|entry| ContentRating {
                            country: entry.iso_3166_1,
                            rating: entry.rating,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        };

        Self {
            media_type: kind,
            genres: details.genres.unwrap_or_default(),
            keywords: details.keywords.unwrap_or_default(),
            original_language: details.original_language.unwrap_or_default(),
            content_ratings,
        }
    }
}

/// Movies: the certification is the first release-date entry per country;
/// countries without one are dropped.
fn movie_certifications(releases: Option<ReleaseResults>) -> Vec<ContentRating> {
    let Some(releases) = releases else {
        return Vec::new();
    };

    releases
        .results
        .into_iter()
        .filter_map(|country| {
            let certification = country
                .release_dates
                .first()
                .map(|entry| entry.certification.clone())
                .unwrap_or_default();

            if certification.is_empty() {
                None
            } else {
                Some(ContentRating {
                    country: country.iso_3166_1,
                    rating: certification,
                })
            }
        })
        .collect()
}
