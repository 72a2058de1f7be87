//! Gallery image records.

use serde::Deserialize;

use crate::core::Searchable;

/// One gallery entry as returned by `GET /api/gallery`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub caption: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Searchable for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![&self.caption, &self.description, &self.category]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search;

    #[test]
    fn test_caption_and_category_search() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"id": "1", "caption": "Hack Night", "category": "events",
                "description": "Winter hack night at the studio",
                "imageUrl": "/uploads/hn.jpg"}"#,
        )
        .unwrap();
        assert!(search::matches(&item, "hack"));
        assert!(search::matches(&item, "studio"));
        assert!(search::matches(&item, "events"));
        assert!(!search::matches(&item, "summer"));
    }
}
