//! Catalog container and lookup.
//!
//! Lookup precedence is the same for projects and posts: exact numeric id
//! (projects only), then exact slug, then substring of the title, then
//! substring of the slug. All comparisons ignore case and the first
//! match in catalog order wins.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

use crate::record::{Post, Project, same_ignoring_case};

/// Ordered, read-only projects and posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    posts: Vec<Post>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate project ids and slugs.
    pub fn new(projects: Vec<Project>, posts: Vec<Post>) -> Result<Self> {
        let catalog = Self { projects, posts };
        catalog.validate()?;
        Ok(catalog)
    }

    pub(crate) fn from_parts(projects: Vec<Project>, posts: Vec<Post>) -> Self {
        Self { projects, posts }
    }

    /// Parse a catalog from TOML (`[[projects]]` / `[[posts]]` tables).
    pub fn from_toml(source: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON (`{"projects": [...], "posts": [...]}`).
    pub fn from_json(source: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file, choosing the format from its extension
    /// (`.json`, anything else is parsed as TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json(&source)?
        } else {
            Self::from_toml(&source)?
        };
        log::info!(
            "Loaded catalog from {} ({} projects, {} posts)",
            path.display(),
            catalog.projects.len(),
            catalog.posts.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for p in &self.projects {
            if !ids.insert(p.id) {
                return Err(FolioError::Catalog(format!("duplicate project id {}", p.id)));
            }
            if !slugs.insert(p.slug.to_lowercase()) {
                return Err(FolioError::Catalog(format!(
                    "duplicate project slug '{}'",
                    p.slug
                )));
            }
        }
        let mut post_slugs = HashSet::new();
        for p in &self.posts {
            if !post_slugs.insert(p.slug.to_lowercase()) {
                return Err(FolioError::Catalog(format!("duplicate post slug '{}'", p.slug)));
            }
        }
        log::debug!(
            "Catalog validated: {} projects, {} posts",
            self.projects.len(),
            self.posts.len()
        );
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn project_by_id(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve a project by id, slug, or title/slug substring.
    pub fn find_project(&self, query: &str) -> Option<&Project> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Ok(id) = query.parse::<u32>()
            && let Some(p) = self.project_by_id(id)
        {
            return Some(p);
        }
        let needle = query.to_lowercase();
        self.projects
            .iter()
            .find(|p| same_ignoring_case(&p.slug, query))
            .or_else(|| {
                self.projects
                    .iter()
                    .find(|p| p.title.to_lowercase().contains(&needle))
            })
            .or_else(|| {
                self.projects
                    .iter()
                    .find(|p| p.slug.to_lowercase().contains(&needle))
            })
    }

    /// Resolve a post by slug, or title/slug substring.
    pub fn find_post(&self, query: &str) -> Option<&Post> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let needle = query.to_lowercase();
        self.posts
            .iter()
            .find(|p| same_ignoring_case(&p.slug, query))
            .or_else(|| {
                self.posts
                    .iter()
                    .find(|p| p.title.to_lowercase().contains(&needle))
            })
            .or_else(|| {
                self.posts
                    .iter()
                    .find(|p| p.slug.to_lowercase().contains(&needle))
            })
    }

    /// Posts ordered newest first. Ties keep catalog order.
    pub fn posts_by_date(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// The `n` most recent posts.
    pub fn recent_posts(&self, n: usize) -> Vec<&Post> {
        let mut posts = self.posts_by_date();
        posts.truncate(n);
        posts
    }

    /// Distinct tags across all posts with the number of posts carrying each.
    ///
    /// Tags differing only in case are merged under the first spelling seen.
    /// Sorted by count (descending), then name.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for post in &self.posts {
            let mut seen_in_post = HashSet::new();
            for tag in &post.tags {
                let key = tag.to_lowercase();
                if !seen_in_post.insert(key.clone()) {
                    continue;
                }
                let count = counts.entry(key).or_insert_with(|| {
                    order.push(tag.clone());
                    0
                });
                *count += 1;
            }
        }
        let mut out: Vec<(String, usize)> = order
            .into_iter()
            .map(|tag| {
                let n = counts.get(&tag.to_lowercase()).copied().unwrap_or(0);
                (tag, n)
            })
            .collect();
        out.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
        });
        out
    }

    /// Posts (newest first) carrying `tag` exactly, ignoring case.
    pub fn posts_with_tag(&self, tag: &str) -> Vec<&Post> {
        self.posts_by_date()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn project(id: u32, slug: &str, title: &str) -> Project {
        Project {
            id,
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            languages: Vec::new(),
            frameworks: Vec::new(),
            github_url: None,
            live_url: None,
            kind: "project".into(),
        }
    }

    fn post(slug: &str, title: &str, date: (i32, u32, u32), tags: &[&str]) -> Post {
        Post {
            slug: slug.into(),
            title: title.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            excerpt: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            external_links: None,
        }
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                project(1, "logpipe", "Logpipe: structured log shipper"),
                project(100, "rudis-redis-server", "Rudis"),
                project(7, "100-days", "A hundred days of code"),
            ],
            vec![
                post("go-channels", "Go channels in practice", (2023, 4, 2), &["Go", "concurrency"]),
                post("golang-gc", "Tuning the Golang GC", (2024, 1, 9), &["Golang"]),
                post("kafka-101", "Kafka 101", (2022, 8, 15), &["kafka", "go"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn project_by_numeric_id_and_substring_agree() {
        let c = sample();
        let by_id = c.find_project("100").unwrap();
        let by_text = c.find_project("redis").unwrap();
        assert_eq!(by_id, by_text);
        assert_eq!(by_id.id, 100);
    }

    #[test]
    fn numeric_query_without_id_falls_back_to_text() {
        let c = sample();
        assert_eq!(c.find_project("1").unwrap().id, 1);
        // No project has id 5 but nothing contains "5" either.
        assert!(c.find_project("5").is_none());
    }

    #[test]
    fn exact_slug_beats_title_substring() {
        let c = sample();
        assert_eq!(c.find_project("LOGPIPE").unwrap().id, 1);
        assert_eq!(c.find_project("hundred").unwrap().id, 7);
    }

    #[test]
    fn unknown_and_empty_queries_resolve_to_none() {
        let c = sample();
        assert!(c.find_project("doesnotexist").is_none());
        assert!(c.find_project("   ").is_none());
        assert!(c.find_post("").is_none());
    }

    #[test]
    fn find_post_by_slug_then_title() {
        let c = sample();
        assert_eq!(c.find_post("kafka-101").unwrap().title, "Kafka 101");
        assert_eq!(c.find_post("channels in").unwrap().slug, "go-channels");
        assert_eq!(c.find_post("GC").unwrap().slug, "golang-gc");
    }

    #[test]
    fn recent_posts_sorted_descending() {
        let c = sample();
        let slugs: Vec<&str> = c.recent_posts(2).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["golang-gc", "go-channels"]);
        assert_eq!(c.recent_posts(10).len(), 3);
    }

    #[test]
    fn tag_lookup_is_exact_not_substring() {
        let c = sample();
        let slugs: Vec<&str> = c.posts_with_tag("Go").iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["go-channels", "kafka-101"]);
        assert!(c.posts_with_tag("gol").is_empty());
    }

    #[test]
    fn tag_counts_merge_case_and_sort() {
        let c = sample();
        let counts = c.tag_counts();
        assert_eq!(counts[0], ("Go".to_string(), 2));
        assert!(counts.contains(&("Golang".to_string(), 1)));
        assert!(counts.contains(&("kafka".to_string(), 1)));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn tag_counts_and_tag_lookup_agree_beyond_ascii() {
        let c = Catalog::new(
            vec![project(1, "écrit", "Notes")],
            vec![
                post("a", "A", (2021, 1, 1), &["Été"]),
                post("b", "B", (2021, 2, 1), &["été"]),
            ],
        )
        .unwrap();
        assert_eq!(c.tag_counts(), vec![("Été".to_string(), 2)]);
        assert_eq!(c.posts_with_tag("Été").len(), 2);
        assert_eq!(c.posts_with_tag("ÉTÉ").len(), 2);
        assert_eq!(c.find_project("ÉCRIT").map(|p| p.id), Some(1));
        assert_eq!(c.find_post("B").map(|p| p.slug.as_str()), Some("b"));
    }

    #[test]
    fn duplicate_project_id_rejected() {
        let err = Catalog::new(vec![project(1, "a", "A"), project(1, "b", "B")], vec![]).unwrap_err();
        assert!(format!("{err}").contains("duplicate project id 1"));
    }

    #[test]
    fn duplicate_post_slug_rejected() {
        let posts = vec![
            post("same", "A", (2020, 1, 1), &[]),
            post("SAME", "B", (2020, 1, 2), &[]),
        ];
        assert!(Catalog::new(vec![], posts).is_err());
    }

    #[test]
    fn from_toml_tables() {
        let toml = r#"
[[projects]]
id = 3
slug = "tiny"
title = "Tiny"
type = "cli"
tags = ["rust"]

[[posts]]
slug = "hello"
title = "Hello"
date = "2021-02-03"
tags = ["meta"]
externalLinks = { medium = "https://medium.com/@x/hello" }
"#;
        let c = Catalog::from_toml(toml).unwrap();
        assert_eq!(c.projects()[0].kind, "cli");
        assert_eq!(c.posts()[0].external_links.as_ref().unwrap().entries().len(), 1);
    }

    #[test]
    fn load_picks_format_from_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        let json = dir.join("catalog.json");
        std::fs::write(
            &json,
            r#"{"projects":[{"id":1,"slug":"a","title":"A","githubUrl":"https://x"}],"posts":[]}"#,
        )
        .unwrap();
        let c = Catalog::load(&json).unwrap();
        assert_eq!(c.projects()[0].github_url.as_deref(), Some("https://x"));

        let toml = dir.join("catalog.toml");
        std::fs::write(&toml, "[[posts]]\nslug = \"p\"\ntitle = \"P\"\ndate = \"2020-01-01\"\n").unwrap();
        assert_eq!(Catalog::load(&toml).unwrap().posts().len(), 1);

        assert!(matches!(
            Catalog::load(&dir.join("missing.toml")),
            Err(FolioError::Io(_))
        ));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(FolioError::Json(_))
        ));
    }

    #[test]
    fn from_toml_reports_parse_errors() {
        assert!(matches!(
            Catalog::from_toml("[[projects]]\nid = "),
            Err(FolioError::TomlParse(_))
        ));
    }
}
