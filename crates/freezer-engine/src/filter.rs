//! Free-text and attribute filtering over the item list.

use freezer_model::Item;

/// Filters `items` by whitespace-separated search terms.
///
/// An item survives when every term is a case-insensitive substring of
/// its description or category, or an exact case-insensitive match of
/// its unit name. Zero terms match everything. Soft-deleted items are
/// dropped unless `include_deleted` is set. Input order is preserved.
pub fn filter(items: &[Item], search_text: &str, include_deleted: bool) -> Vec<Item> {
    let terms: Vec<String> = search_text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    items
        .iter()
        .filter(|item| include_deleted || !item.is_deleted)
        .filter(|item| terms.iter().all(|term| matches_term(item, term)))
        .cloned()
        .collect()
}

fn matches_term(item: &Item, term: &str) -> bool {
    item.description.to_lowercase().contains(term)
        || item.category.to_lowercase().contains(term)
        || item.unit.as_str() == term
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use freezer_model::Unit;

    fn items() -> Vec<Item> {
        let now = Utc::now();
        vec![
            Item {
                id: 1,
                ..Item::new("Chicken Breast", "Meat", 500, Unit::Gram, now, now)
            },
            Item {
                id: 2,
                is_deleted: true,
                deleted_on: Some(now),
                ..Item::new("Beef Steak", "Meat", 300, Unit::Gram, now, now)
            },
            Item {
                id: 3,
                ..Item::new("Fish", "Seafood", 2, Unit::Pieces, now, now)
            },
        ]
    }

    #[test]
    fn test_filters_by_description_case_insensitive() {
        let result = filter(&items(), "chicken", false);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Chicken Breast");
    }

    #[test]
    fn test_filters_by_unit_name() {
        let result = filter(&items(), "pieces", false);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Fish");
    }

    #[test]
    fn test_every_term_must_match() {
        // "meat" matches category, "gram" matches unit; only Chicken
        // survives both (Beef is deleted).
        let result = filter(&items(), "meat gram", false);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Chicken Breast");
    }

    #[test]
    fn test_excludes_deleted_by_default() {
        let result = filter(&items(), "", false);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|item| !item.is_deleted));
    }

    #[test]
    fn test_includes_deleted_on_request() {
        let result = filter(&items(), "", true);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter(&items(), "xyz", false).is_empty());
    }

    #[test]
    fn test_mixed_case_terms() {
        for term in ["CHICKEN", "ChIcKeN", "PIECES", "PiEcEs"] {
            assert!(!filter(&items(), term, false).is_empty(), "term {term}");
        }
    }
}
