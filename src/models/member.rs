//! Team member records.

use serde::Deserialize;

use crate::core::Searchable;

/// One team member as returned by `GET /api/members`.
///
/// The photo and resume are optional uploads; a member without a photo is
/// rendered with an initials avatar instead.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Searchable for Member {
    fn id(&self) -> &str {
        &self.id
    }

    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.role.as_str()];
        if let Some(email) = &self.email {
            fields.push(email);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "65f1",
            "name": "Ada Lovelace",
            "role": "Founder",
            "email": "ada@example.org",
            "linkedin": "https://linkedin.com/in/ada",
            "github": "https://github.com/ada",
            "photoUrl": "/uploads/abc.jpg",
            "resumeUrl": "/uploads/abc.pdf",
            "createdAt": "2025-01-21T00:00:00Z"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.name, "Ada Lovelace");
        assert_eq!(member.photo_url.as_deref(), Some("/uploads/abc.jpg"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": "65f2", "name": "Grace Hopper", "role": "Mentor"}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.email, None);
        assert_eq!(member.photo_url, None);
    }

    #[test]
    fn test_search_covers_name_role_email() {
        let member: Member = serde_json::from_str(
            r#"{"id": "1", "name": "Ada Lovelace", "role": "Founder", "email": "ada@example.org"}"#,
        )
        .unwrap();
        assert!(search::matches(&member, "lovelace"));
        assert!(search::matches(&member, "found"));
        assert!(search::matches(&member, "@example"));
        assert!(!search::matches(&member, "hopper"));
    }
}
