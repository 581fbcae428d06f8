//! Project and post records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    /// Free-form category ("library", "service", "cli", ...).
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "project".to_string()
}

/// Mirrors of a post published elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLinks {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dev_to: Option<String>,
}

impl ExternalLinks {
    /// `(label, url)` pairs for the mirrors that are set.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(ref url) = self.medium {
            out.push(("Medium", url.as_str()));
        }
        if let Some(ref url) = self.dev_to {
            out.push(("DEV", url.as_str()));
        }
        out
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub external_links: Option<ExternalLinks>,
}

/// Full Unicode case-insensitive equality.
pub(crate) fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Post {
    /// Case-insensitive exact tag membership. `Go` does not match `Golang`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| same_ignoring_case(t, tag))
    }

    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(tags: &[&str]) -> Post {
        Post {
            slug: "p".into(),
            title: "P".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            excerpt: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            external_links: None,
        }
    }

    #[test]
    fn has_tag_is_exact_and_case_insensitive() {
        let p = post(&["Golang", "kafka"]);
        assert!(!p.has_tag("Go"));
        assert!(p.has_tag("golang"));
        assert!(p.has_tag("KAFKA"));
    }

    #[test]
    fn has_tag_folds_non_ascii_case() {
        let p = post(&["Été"]);
        assert!(p.has_tag("été"));
        assert!(p.has_tag("ÉTÉ"));
        assert!(!p.has_tag("ete"));
    }

    #[test]
    fn first_tag_of_untagged_post() {
        assert_eq!(post(&[]).first_tag(), None);
        assert_eq!(post(&["rust", "io"]).first_tag(), Some("rust"));
    }

    #[test]
    fn external_link_entries_skip_unset() {
        let links = ExternalLinks {
            medium: None,
            dev_to: Some("https://dev.to/x".into()),
        };
        assert_eq!(links.entries(), vec![("DEV", "https://dev.to/x")]);
    }

    #[test]
    fn project_json_uses_camel_case_and_type() {
        let json = r#"{
            "id": 7, "slug": "s", "title": "T",
            "githubUrl": "https://github.com/x/s", "type": "cli"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.github_url.as_deref(), Some("https://github.com/x/s"));
        assert_eq!(p.kind, "cli");
        assert!(p.live_url.is_none());
    }

    #[test]
    fn post_date_parses_from_iso_string() {
        let json = r#"{"slug":"s","title":"T","date":"2023-11-05","externalLinks":{"devTo":"u"}}"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2023, 11, 5).unwrap());
        assert_eq!(p.external_links.unwrap().dev_to.as_deref(), Some("u"));
    }
}
