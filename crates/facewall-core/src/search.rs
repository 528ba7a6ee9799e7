//! Name Search - Case-insensitive substring filter over the batch
//!
//! Filtering is a pure read: it never reorders, never mutates, and always
//! reports each hit's position in the ORIGINAL batch so the modal can
//! navigate the full batch regardless of the active filter.

use crate::types::profile::{Profile, ProfileBatch};

/// A profile that matched a search, paired with its original batch index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Position of the profile in the unfiltered batch
    pub index: usize,
    /// The matching profile
    pub profile: &'a Profile,
}

/// Filter the batch down to profiles whose display name contains `query`.
///
/// Matching is case-insensitive and literal. The query is compared with
/// plain substring search, never compiled as a pattern, so regex
/// metacharacters (`.`, `*`, `(`...) match only themselves. An empty query
/// matches every profile. An empty result is a valid outcome and drives the
/// "no results" display state.
pub fn filter_by_name<'a>(batch: &'a ProfileBatch, query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.to_lowercase();

    batch
        .iter()
        .enumerate()
        .filter(|(_, profile)| profile.display_name().to_lowercase().contains(&needle))
        .map(|(index, profile)| SearchHit { index, profile })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str) -> Profile {
        Profile {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first).to_lowercase(),
            city: "Tulsa".to_string(),
            state: "Oklahoma".to_string(),
            postcode: "74104".to_string(),
            street_number: 1,
            street_name: "Dane St".to_string(),
            phone: "(555) 123-4567".to_string(),
            dob: "1990-05-02T00:00:00.000Z".to_string(),
            picture_medium: String::new(),
            picture_large: String::new(),
        }
    }

    fn sample_batch() -> ProfileBatch {
        ProfileBatch::new(vec![
            profile("Ada", "Lovelace"),
            profile("Grace", "Hopper"),
            profile("Adam", "Smith"),
        ])
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let batch = sample_batch();
        let hits = filter_by_name(&batch, "");
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[2].index, 2);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let batch = sample_batch();
        let hits = filter_by_name(&batch, "GRACE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].profile.first_name, "Grace");
    }

    #[test]
    fn test_substring_spans_first_and_last_name() {
        let batch = sample_batch();
        // "a l" only occurs across the first/last boundary of "Ada Lovelace"
        let hits = filter_by_name(&batch, "a l");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn test_hits_keep_original_indices() {
        let batch = sample_batch();
        // "ada" matches "Ada Lovelace" and "Adam Smith" but not "Grace Hopper"
        let hits = filter_by_name(&batch, "ada");
        let indices: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let batch = sample_batch();
        assert!(filter_by_name(&batch, "zzz").is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let batch = ProfileBatch::new(vec![profile("A.*a", "Paren(thesis)")]);

        // ".*" would match anything as a pattern; here it must only match
        // the literal characters
        assert_eq!(filter_by_name(&batch, ".*").len(), 1);
        assert!(filter_by_name(&sample_batch(), ".*").is_empty());
        assert_eq!(filter_by_name(&batch, "(thesis)").len(), 1);
    }
}
