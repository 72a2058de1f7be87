//! Project records.

use serde::Deserialize;

use crate::core::Searchable;

/// One project as returned by `GET /api/projects`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Searchable for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn list_fields(&self) -> Vec<&[String]> {
        vec![&self.tech_stack]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CATEGORY_ALL;
    use crate::core::search;

    fn sample() -> Vec<Project> {
        serde_json::from_str(
            r#"[
                {"id": "1", "title": "Portfolio Site", "description": "Personal portfolio",
                 "techStack": ["React", "Node"]},
                {"id": "2", "title": "CLI Tool", "description": "A command line helper",
                 "techStack": ["Rust"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_tech_stack_match_is_case_insensitive() {
        let hits = search::filter(&sample(), "react", CATEGORY_ALL);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_unmatched_query_yields_nothing() {
        assert!(search::filter(&sample(), "xyz", CATEGORY_ALL).is_empty());
    }

    #[test]
    fn test_missing_tech_stack_defaults_empty() {
        let project: Project =
            serde_json::from_str(r#"{"id": "3", "title": "Zine", "description": "Print run"}"#)
                .unwrap();
        assert!(project.tech_stack.is_empty());
        assert!(search::matches(&project, "zine"));
    }
}
