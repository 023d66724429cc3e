mod matcher;
mod update;

#[cfg(test)]
mod test_fixtures;

pub use matcher::{language_gate_passes, matches_criteria};
pub use update::{build_update, RequestUpdate};

use crate::config::Rule;
use crate::metadata::MediaAttributes;

/// Find the first rule matching the given media attributes.
///
/// Rules are evaluated in configuration order; a rule with empty criteria
/// matches everything of its media type, so a catch-all belongs last.
pub fn find_matching_rule<'a>(attrs: &MediaAttributes, rules: &'a [Rule]) -> Option<&'a Rule> {
    rules.iter().enumerate().find_map(|(index, rule)| {
        if rule.media_type != attrs.media_type {
            return None;
        }

        if !matcher::language_gate_passes(attrs, &rule.match_criteria) {
            tracing::debug!(
                rule = %rule.label(index),
                wanted = ?rule.match_criteria.original_language,
                actual = %attrs.original_language,
                "Original language mismatch, skipping rule"
            );
            return None;
        }

        matcher::matches_criteria(attrs, &rule.match_criteria).then_some(rule)
    })
}
