//! Free-text search over fetched records.
//!
//! Every listing page (members, projects, blogs, gallery) runs the same
//! pipeline: an optional category predicate followed by a case-insensitive
//! substring matcher over the record's searchable fields. Filtering is
//! order-preserving and introduces no ranking.

use crate::config::CATEGORY_ALL;

/// A record that can be searched and looked up by identifier.
///
/// Each content type declares its own searchable fields explicitly instead of
/// probing for whatever happens to be present. Optional fields that are unset
/// simply don't contribute to `text_fields`, so they never match and never
/// error.
pub trait Searchable {
    /// Unique identifier within the record's content type.
    fn id(&self) -> &str;

    /// Plain string fields the matcher should look at.
    fn text_fields(&self) -> Vec<&str>;

    /// String-list fields (tags, tech stack) the matcher should look at.
    fn list_fields(&self) -> Vec<&[String]> {
        Vec::new()
    }

    /// Category label used by the tab filter, if the content type has one.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Case-insensitive substring predicate over a record's searchable fields.
///
/// The empty query matches every record. The query is treated as a literal
/// substring (`str::contains`), so regex metacharacters are inert.
pub fn matches<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    record
        .text_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
        || record
            .list_fields()
            .iter()
            .any(|list| list.iter().any(|item| item.to_lowercase().contains(&needle)))
}

/// Select the records visible for a query/category combination.
///
/// The category predicate (exact match, skipped for `"all"`) is applied before
/// the matcher. Original fetch order is preserved.
pub fn filter<T: Searchable + Clone>(records: &[T], query: &str, category: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| {
            category == CATEGORY_ALL || record.category() == Some(category)
        })
        .filter(|record| matches(*record, query))
        .cloned()
        .collect()
}

/// Distinct category labels in order of first appearance.
///
/// Used to build the tab row for content types that carry a category
/// (blogs, gallery). Does not include the synthetic "all" tab.
pub fn categories<T: Searchable>(records: &[T]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        if let Some(category) = record.category()
            && !seen.iter().any(|c: &String| c == category)
        {
            seen.push(category.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: String,
        title: String,
        tags: Vec<String>,
        category: Option<String>,
    }

    impl Item {
        fn new(id: &str, title: &str, tags: &[&str], category: Option<&str>) -> Self {
            Self {
                id: id.to_string(),
                title: title.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                category: category.map(|c| c.to_string()),
            }
        }
    }

    impl Searchable for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn text_fields(&self) -> Vec<&str> {
            vec![&self.title]
        }

        fn list_fields(&self) -> Vec<&[String]> {
            vec![&self.tags]
        }

        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("1", "Portfolio Site", &["React", "Node"], None),
            Item::new("2", "CLI Tool", &["Rust"], None),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        for item in sample() {
            assert!(matches(&item, ""));
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let items = sample();
        assert!(matches(&items[0], "PORTFOLIO"));
        assert!(matches(&items[0], "folio s"));
        assert!(!matches(&items[0], "rust"));
    }

    #[test]
    fn test_list_field_match() {
        let items = sample();
        let hits = filter(&items, "react", CATEGORY_ALL);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let items = sample();
        assert_eq!(filter(&items, "xyz", CATEGORY_ALL), Vec::<Item>::new());
    }

    #[test]
    fn test_empty_query_preserves_order() {
        let items = sample();
        assert_eq!(filter(&items, "", CATEGORY_ALL), items);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let once = filter(&items, "t", CATEGORY_ALL);
        let twice = filter(&once, "t", CATEGORY_ALL);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_is_safe() {
        assert_eq!(filter(&[] as &[Item], "anything", CATEGORY_ALL), vec![]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let items = vec![Item::new("1", "a.b (draft) [wip]", &[], None)];
        assert!(matches(&items[0], "(draft)"));
        assert!(matches(&items[0], "[wip]"));
        // A regex would let "." match any character; a literal must not.
        assert!(!matches(&items[0], "x.y"));
        assert!(matches(&items[0], "a.b"));
    }

    #[test]
    fn test_category_filter_is_exact_and_pre_search() {
        let items = vec![
            Item::new("1", "Sunset", &[], Some("nature")),
            Item::new("2", "Logo Draft", &[], Some("design")),
            Item::new("3", "Poster", &[], Some("design")),
        ];
        // Category applies even with an empty query.
        let design = filter(&items, "", "design");
        assert_eq!(design.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["2", "3"]);
        // Exact match, not substring.
        assert!(filter(&items, "", "desig").is_empty());
        // Query narrows within the category.
        let hits = filter(&items, "poster", "design");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_records_without_category_hide_under_specific_tab() {
        let items = sample();
        assert!(filter(&items, "", "design").is_empty());
    }

    #[test]
    fn test_categories_deduplicated_in_first_appearance_order() {
        let items = vec![
            Item::new("1", "a", &[], Some("events")),
            Item::new("2", "b", &[], Some("design")),
            Item::new("3", "c", &[], Some("events")),
            Item::new("4", "d", &[], None),
        ];
        assert_eq!(categories(&items), vec!["events", "design"]);
    }
}
