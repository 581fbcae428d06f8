//! Built-in demo content used when no catalog file is configured.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::record::{ExternalLinks, Post, Project};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Catalog {
    /// A small catalog of sample projects and posts.
    pub fn demo() -> Self {
        let projects = vec![
            Project {
                id: 100,
                slug: "rudis-redis-server".to_string(),
                title: "Rudis".to_string(),
                description: "A Redis-compatible in-memory store speaking RESP2, with AOF persistence."
                    .to_string(),
                tags: strings(&["databases", "networking"]),
                languages: strings(&["Rust"]),
                frameworks: strings(&["tokio"]),
                github_url: Some("https://github.com/samcarter/rudis".to_string()),
                live_url: None,
                kind: "service".to_string(),
            },
            Project {
                id: 101,
                slug: "streamline".to_string(),
                title: "Streamline: Kafka consumer toolkit".to_string(),
                description: "Exactly-once consumer groups with pluggable offset stores.".to_string(),
                tags: strings(&["kafka", "streaming"]),
                languages: strings(&["Go"]),
                frameworks: strings(&["sarama"]),
                github_url: Some("https://github.com/samcarter/streamline".to_string()),
                live_url: None,
                kind: "library".to_string(),
            },
            Project {
                id: 102,
                slug: "tracewise".to_string(),
                title: "Tracewise".to_string(),
                description: "Trace sampling dashboard that surfaces slow spans by service.".to_string(),
                tags: strings(&["observability", "web"]),
                languages: strings(&["TypeScript", "Go"]),
                frameworks: strings(&["React", "OpenTelemetry"]),
                github_url: Some("https://github.com/samcarter/tracewise".to_string()),
                live_url: Some("https://tracewise.samcarter.dev".to_string()),
                kind: "web app".to_string(),
            },
            Project {
                id: 103,
                slug: "pgshift".to_string(),
                title: "pgshift".to_string(),
                description: "Zero-downtime PostgreSQL schema migrations with shadow tables."
                    .to_string(),
                tags: strings(&["databases", "cli"]),
                languages: strings(&["Rust"]),
                frameworks: strings(&["clap", "sqlx"]),
                github_url: Some("https://github.com/samcarter/pgshift".to_string()),
                live_url: None,
                kind: "cli".to_string(),
            },
            Project {
                id: 104,
                slug: "loadgen".to_string(),
                title: "Loadgen".to_string(),
                description: "Scriptable HTTP/gRPC load generator with HDR histograms.".to_string(),
                tags: strings(&["testing", "performance"]),
                languages: strings(&["Go"]),
                frameworks: strings(&["grpc-go"]),
                github_url: Some("https://github.com/samcarter/loadgen".to_string()),
                live_url: None,
                kind: "cli".to_string(),
            },
            Project {
                id: 105,
                slug: "folio".to_string(),
                title: "This site".to_string(),
                description: "The portfolio you are reading, terminal included.".to_string(),
                tags: strings(&["web"]),
                languages: strings(&["TypeScript", "Rust"]),
                frameworks: strings(&["Next.js"]),
                github_url: Some("https://github.com/samcarter/folio".to_string()),
                live_url: Some("https://samcarter.dev".to_string()),
                kind: "web app".to_string(),
            },
        ];

        let posts = vec![
            Post {
                slug: "go-channels-in-practice".to_string(),
                title: "Go channels in practice".to_string(),
                date: date(2024, 3, 18),
                excerpt: "Fan-out, fan-in and the bugs I shipped along the way.".to_string(),
                tags: strings(&["Go", "concurrency"]),
                external_links: Some(ExternalLinks {
                    medium: Some("https://medium.com/@samcarter/go-channels".to_string()),
                    dev_to: Some("https://dev.to/samcarter/go-channels".to_string()),
                }),
            },
            Post {
                slug: "tuning-the-golang-gc".to_string(),
                title: "Tuning the Golang GC for latency".to_string(),
                date: date(2024, 1, 9),
                excerpt: "GOGC, GOMEMLIMIT and what the pause graphs actually told us.".to_string(),
                tags: strings(&["Golang", "performance"]),
                external_links: None,
            },
            Post {
                slug: "kafka-rebalancing".to_string(),
                title: "Surviving Kafka consumer rebalances".to_string(),
                date: date(2023, 10, 2),
                excerpt: "Cooperative sticky assignment and idempotent handlers.".to_string(),
                tags: strings(&["kafka", "streaming", "Go"]),
                external_links: Some(ExternalLinks {
                    medium: Some("https://medium.com/@samcarter/kafka-rebalances".to_string()),
                    dev_to: None,
                }),
            },
            Post {
                slug: "writing-a-redis-clone".to_string(),
                title: "Writing a Redis clone in Rust".to_string(),
                date: date(2023, 6, 21),
                excerpt: "Parsing RESP with zero copies and testing against redis-cli.".to_string(),
                tags: strings(&["rust", "databases"]),
                external_links: None,
            },
            Post {
                slug: "tracing-without-tears".to_string(),
                title: "Distributed tracing without tears".to_string(),
                date: date(2022, 11, 30),
                excerpt: "Sampling strategies that keep the interesting traces.".to_string(),
                tags: strings(&["observability"]),
                external_links: None,
            },
            Post {
                slug: "hello-world".to_string(),
                title: "Hello, world".to_string(),
                date: date(2022, 5, 1),
                excerpt: "Why this blog exists.".to_string(),
                tags: strings(&["meta"]),
                external_links: None,
            },
        ];

        Self::from_parts(projects, posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_valid() {
        let demo = Catalog::demo();
        let rebuilt = Catalog::new(demo.projects().to_vec(), demo.posts().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn demo_resolves_redis_both_ways() {
        let demo = Catalog::demo();
        assert_eq!(demo.find_project("100"), demo.find_project("redis"));
    }

    #[test]
    fn demo_has_go_and_golang_tags() {
        let demo = Catalog::demo();
        let go = demo.posts_with_tag("Go");
        assert_eq!(go.len(), 2);
        assert!(go.iter().all(|p| p.slug != "tuning-the-golang-gc"));
    }
}
