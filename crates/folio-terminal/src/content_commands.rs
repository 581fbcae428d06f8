//! Catalog browsing commands: projects, project, blog, post, tags, tag.

use folio_catalog::{Post, Project};
use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::parse::quoted_argument;
use crate::transcript::{Action, Panel};

/// Register the catalog commands.
pub fn register_content_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(ProjectsCmd))?;
    reg.register(Box::new(ProjectCmd))?;
    reg.register(Box::new(BlogCmd))?;
    reg.register(Box::new(PostCmd))?;
    reg.register(Box::new(TagsCmd))?;
    reg.register(Box::new(TagCmd))?;
    Ok(())
}

fn usage_text(cmd: &dyn Command) -> CommandOutput {
    CommandOutput::Text(format!("usage: {}", cmd.usage()))
}

fn post_summary(post: &Post) -> String {
    let mut line = format!("{}  {}", post.date.format("%Y-%m-%d"), post.title);
    if !post.tags.is_empty() {
        line.push_str(&format!(" [{}]", post.tags.join(", ")));
    }
    line
}

fn project_summary(project: &Project) -> String {
    let mut line = format!("[{}] {} ({})", project.id, project.title, project.kind);
    if !project.tags.is_empty() {
        line.push_str(&format!(" - {}", project.tags.join(", ")));
    }
    line
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Featured projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let all = env.catalog.projects();
        if all.is_empty() {
            return Ok(CommandOutput::Text("No projects yet.".to_string()));
        }
        let shown = &all[..env.config.projects_preview.min(all.len())];
        let mut panel = Panel::new("Projects").lines(shown.iter().map(project_summary));
        panel = panel.line(format!(
            "Showing {} of {}. Type 'project <id>' for details.",
            shown.len(),
            all.len()
        ));
        if let Some(first) = shown.first() {
            panel = panel.action(Action::run(
                format!("View {}", first.title),
                format!("project {}", first.id),
            ));
        }
        panel = panel.action(Action::run("All projects", "open projects"));
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// project
// ---------------------------------------------------------------------------

struct ProjectCmd;
impl Command for ProjectCmd {
    fn name(&self) -> &str {
        "project"
    }
    fn description(&self) -> &str {
        "Details for one project"
    }
    fn usage(&self) -> &str {
        "project <id-or-name>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(first) = args.first() else {
            return Ok(usage_text(self));
        };
        let query = args.join(" ");
        let found = first
            .parse::<u32>()
            .ok()
            .and_then(|id| env.catalog.project_by_id(id))
            .or_else(|| env.catalog.find_project(&query));
        let Some(project) = found else {
            return Ok(CommandOutput::Text(format!("Project not found: {query}")));
        };

        let mut panel = Panel::new(&project.title).line(&project.description);
        panel = panel.line(format!("Type: {}", project.kind));
        for (label, values) in [
            ("Tags", &project.tags),
            ("Languages", &project.languages),
            ("Frameworks", &project.frameworks),
        ] {
            if !values.is_empty() {
                panel = panel.line(format!("{label}: {}", values.join(", ")));
            }
        }
        if let Some(ref url) = project.github_url {
            panel = panel.action(Action::open("Source", url));
        }
        if let Some(ref url) = project.live_url {
            panel = panel.action(Action::open("Live demo", url));
        }
        panel = panel.action(Action::run(
            "Project page",
            format!("open project {}", project.slug),
        ));
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// blog
// ---------------------------------------------------------------------------

struct BlogCmd;
impl Command for BlogCmd {
    fn name(&self) -> &str {
        "blog"
    }
    fn description(&self) -> &str {
        "Recent blog posts"
    }
    fn usage(&self) -> &str {
        "blog"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let posts = env.catalog.recent_posts(env.config.blog_preview);
        if posts.is_empty() {
            return Ok(CommandOutput::Text("No posts yet.".to_string()));
        }
        let mut panel = Panel::new("Recent posts");
        for post in &posts {
            panel = panel.line(post_summary(post));
            if let Some(ref links) = post.external_links {
                for (site, url) in links.entries() {
                    panel = panel.line(format!("    {site}: {url}"));
                }
            }
        }
        if let Some(newest) = posts.first() {
            panel = panel.action(Action::run("Read latest", format!("post {}", newest.slug)));
        }
        panel = panel
            .action(Action::run("Browse tags", "tags"))
            .action(Action::run("All posts", "open blog"));
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// post
// ---------------------------------------------------------------------------

struct PostCmd;
impl Command for PostCmd {
    fn name(&self) -> &str {
        "post"
    }
    fn description(&self) -> &str {
        "Read a post summary"
    }
    fn usage(&self) -> &str {
        "post <slug-or-\"title\">"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let query = quoted_argument(args);
        if query.is_empty() {
            return Ok(usage_text(self));
        }
        let Some(post) = env.catalog.find_post(&query) else {
            return Ok(CommandOutput::Text(format!("Post not found: {query}")));
        };

        let mut panel = Panel::new(&post.title)
            .line(post.date.format("%B %-d, %Y").to_string())
            .line(&post.excerpt);
        if !post.tags.is_empty() {
            panel = panel.line(format!("Tags: {}", post.tags.join(", ")));
        }
        if let Some(tag) = post.first_tag() {
            panel = panel.action(Action::run(
                format!("More on {tag}"),
                format!("tag \"{tag}\""),
            ));
        }
        panel = panel.action(Action::run("Read full post", format!("open post {}", post.slug)));
        if let Some(ref links) = post.external_links {
            for (site, url) in links.entries() {
                panel = panel.action(Action::open(format!("Read on {site}"), url));
            }
        }
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// tags
// ---------------------------------------------------------------------------

struct TagsCmd;
impl Command for TagsCmd {
    fn name(&self) -> &str {
        "tags"
    }
    fn description(&self) -> &str {
        "All post tags with counts"
    }
    fn usage(&self) -> &str {
        "tags"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let counts = env.catalog.tag_counts();
        if counts.is_empty() {
            return Ok(CommandOutput::Text("No tags yet.".to_string()));
        }
        Ok(CommandOutput::Table {
            headers: vec!["Tag".to_string(), "Posts".to_string()],
            rows: counts
                .into_iter()
                .map(|(tag, n)| vec![tag, n.to_string()])
                .collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// tag
// ---------------------------------------------------------------------------

struct TagCmd;
impl Command for TagCmd {
    fn name(&self) -> &str {
        "tag"
    }
    fn description(&self) -> &str {
        "Posts with a given tag"
    }
    fn usage(&self) -> &str {
        "tag <name-or-\"quoted name\">"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let tag = quoted_argument(args);
        if tag.is_empty() {
            return Ok(usage_text(self));
        }
        let posts = env.catalog.posts_with_tag(&tag);
        if posts.is_empty() {
            return Ok(CommandOutput::Text(format!("No posts tagged \"{tag}\".")));
        }
        let mut panel = Panel::new(format!("Posts tagged \"{tag}\" ({})", posts.len()))
            .lines(posts.iter().map(|p| post_summary(p)));
        for post in &posts {
            panel = panel.action(Action::run(&post.title, format!("post {}", post.slug)));
        }
        Ok(CommandOutput::Panel(panel))
    }
}

#[cfg(test)]
mod tests {
    use folio_types::config::TerminalConfig;

    use crate::testing::Fixture;
    use crate::transcript::{Action, EntryContent, EntryKind};

    #[test]
    fn projects_previews_first_five() {
        let mut f = Fixture::new();
        let panel = f.panel("projects");
        assert_eq!(panel.lines.len(), 6);
        assert!(panel.lines[0].starts_with("[100] Rudis (service)"));
        assert_eq!(panel.lines[5], "Showing 5 of 6. Type 'project <id>' for details.");
        assert!(panel.actions.contains(&Action::run("View Rudis", "project 100")));
        assert!(panel.actions.contains(&Action::run("All projects", "open projects")));
    }

    #[test]
    fn preview_sizes_come_from_config() {
        let config = TerminalConfig {
            projects_preview: 2,
            blog_preview: 1,
            ..TerminalConfig::default()
        };
        let mut f = Fixture::with_config(config);
        assert_eq!(f.panel("projects").lines.len(), 3);
        // One post plus its two mirror links.
        assert_eq!(f.panel("blog").lines.len(), 3);
    }

    #[test]
    fn project_by_id_and_text_agree() {
        let mut f = Fixture::new();
        let by_id = f.panel("project 100");
        let by_text = f.panel("project redis");
        assert_eq!(by_id, by_text);
        assert_eq!(by_id.title, "Rudis");
    }

    #[test]
    fn project_not_found_is_plain_output() {
        let mut f = Fixture::new();
        let entries = f.run("project doesnotexist");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Output);
        assert_eq!(
            entries[0].content.plain_text(),
            "Project not found: doesnotexist"
        );
        assert_eq!(f.error_count(), 0);
    }

    #[test]
    fn project_multi_word_title_search() {
        let mut f = Fixture::new();
        assert_eq!(f.panel("project kafka consumer").title, "Streamline: Kafka consumer toolkit");
        assert_eq!(f.text("project"), "usage: project <id-or-name>");
    }

    #[test]
    fn blog_lists_recent_posts_with_mirrors() {
        let mut f = Fixture::new();
        let panel = f.panel("blog");
        assert!(panel.lines[0].contains("Go channels in practice"));
        assert!(panel.lines[1].contains("Medium: https://medium.com/@samcarter/go-channels"));
        assert!(!panel.lines.iter().any(|l| l.contains("Hello, world")));
    }

    #[test]
    fn post_follow_up_filters_by_first_tag() {
        let mut f = Fixture::new();
        let panel = f.panel("post \"Go channels\"");
        assert_eq!(panel.title, "Go channels in practice");
        assert_eq!(panel.actions[0], Action::run("More on Go", "tag \"Go\""));
        assert!(panel.actions.iter().any(|a| a.label() == "Read on DEV"));
        assert_eq!(f.text("post nothing-here"), "Post not found: nothing-here");
    }

    #[test]
    fn tag_match_is_exact() {
        let mut f = Fixture::new();
        let panel = f.panel("tag \"Go\"");
        let text = panel.lines.join("\n");
        assert!(text.contains("Go channels in practice"));
        assert!(text.contains("Surviving Kafka consumer rebalances"));
        assert!(!text.contains("Golang"));
        assert_eq!(f.text("tag go"), f.text("tag \"GO\"").replace("\"GO\"", "\"go\""));
    }

    #[test]
    fn unknown_tag_is_plain_output() {
        let mut f = Fixture::new();
        let entries = f.run("tag cobol");
        assert_eq!(entries[0].kind, EntryKind::Output);
        assert_eq!(entries[0].content.plain_text(), "No posts tagged \"cobol\".");
    }

    #[test]
    fn tags_table_sorted_by_count() {
        let mut f = Fixture::new();
        let entries = f.run("tags");
        let EntryContent::Table { headers, rows } = &entries[0].content else {
            panic!("expected a table");
        };
        assert_eq!(headers, &vec!["Tag".to_string(), "Posts".to_string()]);
        assert_eq!(rows[0], vec!["Go".to_string(), "2".to_string()]);
        assert!(rows.iter().any(|r| r[0] == "Golang"));
    }
}
