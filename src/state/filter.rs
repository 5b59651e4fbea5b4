/// Search and category filtering over the static catalogue
///
/// A pure function: the visible subsequence is recomputed from scratch on
/// every relevant state change. The dataset is four records, so there is
/// no caching or indexing.

use super::catalog::{Asset, Category};

/// Return the assets matching the current search text and category filter,
/// preserving catalogue insertion order.
///
/// An asset is kept when both predicates hold:
/// - category: no active category, or an exact category match;
/// - text: empty query, or the title contains it case-insensitively, or
///   the space-joined highlights contain it case-insensitively.
///
/// An empty result is a normal outcome rendered as the empty-state panel.
pub fn filter_assets<'a>(
    assets: &'a [Asset],
    query: &str,
    active: Option<Category>,
) -> Vec<&'a Asset> {
    let needle = query.to_lowercase();

    assets
        .iter()
        .filter(|asset| {
            let category_ok = active.map_or(true, |cat| asset.category == cat);
            let text_ok = needle.is_empty()
                || asset.title.to_lowercase().contains(&needle)
                || asset.highlights.join(" ").to_lowercase().contains(&needle);
            category_ok && text_ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::ASSETS;

    fn ids(result: &[&Asset]) -> Vec<&'static str> {
        result.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_no_filters_returns_full_catalogue_in_order() {
        let result = filter_assets(&ASSETS, "", None);
        assert_eq!(ids(&result), vec!["a1", "a2", "a3", "a4"]);
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let result = filter_assets(&ASSETS, "stair", None);
        assert_eq!(ids(&result), vec!["a2"]);

        let shouting = filter_assets(&ASSETS, "STAIR", None);
        assert_eq!(ids(&shouting), vec!["a2"]);
    }

    #[test]
    fn test_highlights_are_searched() {
        // "LOD 300" appears only in the door set's highlights, not its title
        let result = filter_assets(&ASSETS, "lod 300", None);
        assert_eq!(ids(&result), vec!["a1"]);
    }

    #[test]
    fn test_category_filter_alone() {
        let result = filter_assets(&ASSETS, "", Some(Category::Renders));
        assert_eq!(ids(&result), vec!["a4"]);
    }

    #[test]
    fn test_category_and_text_must_both_match() {
        // "stair" matches a2 (details), so restricting to renders empties it
        let result = filter_assets(&ASSETS, "stair", Some(Category::Renders));
        assert!(result.is_empty());

        let agreeing = filter_assets(&ASSETS, "stair", Some(Category::Details));
        assert_eq!(ids(&agreeing), vec!["a2"]);
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let result = filter_assets(&ASSETS, "zzz-nomatch", None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let once = filter_assets(&ASSETS, "detail", Some(Category::Details));
        let owned: Vec<Asset> = once.iter().map(|a| **a).collect();
        let twice = filter_assets(&owned, "detail", Some(Category::Details));
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_every_result_satisfies_both_predicates() {
        for cat in Category::ALL.iter().copied().map(Some).chain([None]) {
            for query in ["", "spec", "4k", "a"] {
                let result = filter_assets(&ASSETS, query, cat);
                for asset in &result {
                    if let Some(c) = cat {
                        assert_eq!(asset.category, c);
                    }
                    let needle = query.to_lowercase();
                    assert!(
                        asset.title.to_lowercase().contains(&needle)
                            || asset.highlights.join(" ").to_lowercase().contains(&needle)
                    );
                }
            }
        }
    }
}
