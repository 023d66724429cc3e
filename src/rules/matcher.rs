use crate::config::{MatchCriteria, RatingCriterion};
use crate::metadata::MediaAttributes;

/// Check if media attributes satisfy a rule's criteria
pub fn matches_criteria(attrs: &MediaAttributes, criteria: &MatchCriteria) -> bool {
    // All specified criteria must match (AND logic)
    // Empty criteria always match

    if !matches_genres(attrs, &criteria.genres) {
        return false;
    }

    if !matches_exclude_keywords(attrs, &criteria.exclude_keywords) {
        return false;
    }

    if !matches_include_keywords(attrs, &criteria.include_keywords) {
        return false;
    }

    if !matches_content_ratings(attrs, &criteria.content_ratings) {
        return false;
    }

    true
}

/// The original-language gate, evaluated before [`matches_criteria`] so a
/// mismatch skips the rule outright.
pub fn language_gate_passes(attrs: &MediaAttributes, criteria: &MatchCriteria) -> bool {
    match &criteria.original_language {
        Some(language) => attrs.original_language == *language,
        None => true,
    }
}

fn matches_genres(attrs: &MediaAttributes, genres: &[String]) -> bool {
    if genres.is_empty() {
        return true;
    }

    attrs
        .genres
        .iter()
        .any(|genre| genres.iter().any(|wanted| wanted == &genre.name))
}

fn matches_exclude_keywords(attrs: &MediaAttributes, excluded: &[String]) -> bool {
    if excluded.is_empty() {
        return true;
    }

    // Substring containment, matching how include keywords work.
    !attrs.keywords.iter().any(|keyword| {
        excluded
            .iter()
            .any(|fragment| keyword.name.contains(fragment.as_str()))
    })
}

fn matches_include_keywords(attrs: &MediaAttributes, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }

    attrs.keywords.iter().any(|keyword| {
        wanted
            .iter()
            .any(|fragment| keyword.name.contains(fragment.as_str()))
    })
}

fn matches_content_ratings(attrs: &MediaAttributes, wanted: &[RatingCriterion]) -> bool {
    if wanted.is_empty() {
        return true;
    }

    wanted.iter().any(|criterion| {
        attrs.content_ratings.iter().any(|rating| {
            rating.rating == criterion.rating
                && criterion
                    .country
                    .as_ref()
                    .map_or(true, |country| country == &rating.country)
        })
    })
}
