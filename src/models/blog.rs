//! Blog post records.

use serde::Deserialize;

use crate::core::Searchable;

/// One blog post as returned by `GET /api/blogs`.
///
/// `content` is markdown source; it is rendered and sanitized client-side by
/// the reader modal. `read_time` arrives pre-formatted ("5 min read").
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub category: String,
    pub author: String,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Searchable for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.author, &self.category]
    }

    fn list_fields(&self) -> Vec<&[String]> {
        vec![&self.tags]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search;

    fn sample() -> Vec<BlogPost> {
        serde_json::from_str(
            r##"[
                {"id": "1", "title": "Shipping Our First Site", "content": "# Hello",
                 "date": "2025-02-03", "category": "engineering", "author": "Ada",
                 "readTime": "4 min read", "tags": ["launch", "web"]},
                {"id": "2", "title": "Brand Refresh", "content": "New logo.",
                 "date": "2025-03-11", "category": "design", "author": "Grace",
                 "readTime": "2 min read", "tags": ["identity"]}
            ]"##,
        )
        .unwrap()
    }

    #[test]
    fn test_category_tab_overrides_nothing_else() {
        // Category selection applies even with an empty query.
        let hits = search::filter(&sample(), "", "design");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_tag_and_author_search() {
        let posts = sample();
        assert!(search::matches(&posts[0], "launch"));
        assert!(search::matches(&posts[1], "grace"));
    }

    #[test]
    fn test_derived_categories() {
        assert_eq!(search::categories(&sample()), vec!["engineering", "design"]);
    }
}
