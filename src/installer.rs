//! Installation engine
//!
//! Turns selected registry items into remote fetches, local writes, and
//! manifest updates. Items are installed strictly one at a time in caller
//! order; a failed item is recorded in the batch report and never stops the
//! items after it.

use crate::error::Result;
use crate::project::{import_line, Project};
use crate::registry::ContentItem;
use crate::remote::ContentFetcher;

/// Aggregated outcome of one batch run
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Number of items fully installed
    pub installed: usize,
    /// Number of items attempted
    pub attempted: usize,
    /// Names of successfully installed items, in install order
    pub installed_names: Vec<String>,
    /// One `"name: detail"` entry per failed item, in install order
    pub errors: Vec<String>,
}

impl InstallReport {
    pub fn is_complete_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Installs registry items into a project
pub struct Installer<'a, F: ContentFetcher> {
    fetcher: &'a F,
    project: &'a Project,
}

impl<'a, F: ContentFetcher> Installer<'a, F> {
    pub fn new(fetcher: &'a F, project: &'a Project) -> Self {
        Self { fetcher, project }
    }

    /// Install a single item: fetch its files, persist each one, then append
    /// one import line derived from the item's remote path.
    ///
    /// There is no retry and no cleanup of files already written when a later
    /// step fails; the content is reinstallable.
    pub fn install_item(&self, item: &ContentItem) -> Result<()> {
        let files = self.fetcher.fetch_item(item)?;

        for (path, content) in &files {
            self.project.write_content_file(path, content)?;
        }

        self.project.append_import(&import_line(&item.remote_path))
    }

    /// Install items sequentially in the given order, capturing per-item
    /// failures into the report. Never fails as a whole.
    pub fn install_batch(&self, items: &[ContentItem]) -> InstallReport {
        self.install_batch_with(items, |_, _, _| {})
    }

    /// `install_batch` with a per-item callback for progress display,
    /// invoked before each item is attempted with (name, index, total)
    pub fn install_batch_with(
        &self,
        items: &[ContentItem],
        mut on_item: impl FnMut(&str, usize, usize),
    ) -> InstallReport {
        let mut report = InstallReport {
            attempted: items.len(),
            ..InstallReport::default()
        };

        for (index, item) in items.iter().enumerate() {
            on_item(&item.name, index, items.len());

            match self.install_item(item) {
                Ok(()) => {
                    report.installed += 1;
                    report.installed_names.push(item.name.clone());
                }
                Err(e) => {
                    report.errors.push(format!("{}: {}", item.name, e));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DotclaudeError;
    use crate::registry::ItemType;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// Fetcher backed by an in-memory table; paths absent from the table fail
    struct FakeFetcher {
        responses: HashMap<String, Vec<(String, String)>>,
    }

    impl FakeFetcher {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn with_item(mut self, remote_path: &str, files: &[(&str, &str)]) -> Self {
            self.responses.insert(
                remote_path.to_string(),
                files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.to_string()))
                    .collect(),
            );
            self
        }
    }

    impl ContentFetcher for FakeFetcher {
        fn fetch_item(&self, item: &ContentItem) -> Result<Vec<(String, String)>> {
            self.responses
                .get(&item.remote_path)
                .cloned()
                .ok_or_else(|| DotclaudeError::FetchFailed {
                    path: item.remote_path.clone(),
                    status: "404 Not Found".to_string(),
                })
        }
    }

    fn rule(name: &str) -> ContentItem {
        ContentItem::new(
            name,
            ItemType::Rule,
            &format!("rules/{}.md", name),
            "test rule",
        )
    }

    fn test_project() -> (TempDir, Project) {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path());
        project.ensure_claude_dir().unwrap();
        (temp, project)
    }

    #[test]
    fn test_install_single_file_item() {
        let (_temp, project) = test_project();
        let fetcher = FakeFetcher::new()
            .with_item("rules/typescript.md", &[("rules/typescript.md", "# TS\n")]);
        let installer = Installer::new(&fetcher, &project);

        installer.install_item(&rule("typescript")).unwrap();

        assert!(project.file_exists("rules/typescript.md"));
        assert_eq!(
            project.read_claude_md().unwrap(),
            "@.claude/rules/typescript.md"
        );
    }

    #[test]
    fn test_install_directory_item_single_manifest_line() {
        let (_temp, project) = test_project();
        let fetcher = FakeFetcher::new().with_item(
            "skills/tdd",
            &[
                ("skills/tdd/SKILL.md", "# TDD\n"),
                ("skills/tdd/reference.md", "# Reference\n"),
            ],
        );
        let installer = Installer::new(&fetcher, &project);

        let item = ContentItem::new("tdd", ItemType::Skill, "skills/tdd", "TDD workflow");
        installer.install_item(&item).unwrap();

        assert!(project.file_exists("skills/tdd/SKILL.md"));
        assert!(project.file_exists("skills/tdd/reference.md"));

        // One import line for the item itself, not one per file
        let manifest = project.read_claude_md().unwrap();
        assert_eq!(manifest, "@.claude/skills/tdd");
    }

    #[test]
    fn test_batch_continues_past_failed_item() {
        let (_temp, project) = test_project();
        let fetcher = FakeFetcher::new()
            .with_item("rules/workflow.md", &[("rules/workflow.md", "one")])
            .with_item("rules/convex.md", &[("rules/convex.md", "three")]);
        let installer = Installer::new(&fetcher, &project);

        // Second item is not in the fake table, so its fetch fails
        let items = vec![rule("workflow"), rule("missing"), rule("convex")];
        let report = installer.install_batch(&items);

        assert_eq!(report.installed, 2);
        assert_eq!(report.attempted, 3);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("missing:"));
        assert_eq!(report.installed_names, vec!["workflow", "convex"]);

        // Items 1 and 3 were fully installed
        assert!(project.file_exists("rules/workflow.md"));
        assert!(project.file_exists("rules/convex.md"));
        let manifest = project.read_claude_md().unwrap();
        assert!(manifest.lines().any(|l| l == "@.claude/rules/workflow.md"));
        assert!(manifest.lines().any(|l| l == "@.claude/rules/convex.md"));
        assert!(!manifest.contains("missing"));
    }

    #[test]
    fn test_reinstall_is_idempotent_at_manifest_level() {
        let (_temp, project) = test_project();
        let fetcher = FakeFetcher::new()
            .with_item("rules/typescript.md", &[("rules/typescript.md", "# TS\n")]);
        let installer = Installer::new(&fetcher, &project);

        let items = vec![rule("typescript")];
        installer.install_batch(&items);
        installer.install_batch(&items);

        let manifest = project.read_claude_md().unwrap();
        assert_eq!(
            manifest.matches("@.claude/rules/typescript.md").count(),
            1
        );
    }

    #[test]
    fn test_empty_batch() {
        let (_temp, project) = test_project();
        let fetcher = FakeFetcher::new();
        let installer = Installer::new(&fetcher, &project);

        let report = installer.install_batch(&[]);

        assert_eq!(report.installed, 0);
        assert_eq!(report.attempted, 0);
        assert!(report.is_complete_success());
    }

    #[test]
    fn test_batch_callback_sees_every_item_in_order() {
        let (_temp, project) = test_project();
        let fetcher = FakeFetcher::new()
            .with_item("rules/workflow.md", &[("rules/workflow.md", "one")]);
        let installer = Installer::new(&fetcher, &project);

        let mut seen = Vec::new();
        let items = vec![rule("workflow"), rule("missing")];
        installer.install_batch_with(&items, |name, index, total| {
            seen.push((name.to_string(), index, total));
        });

        assert_eq!(
            seen,
            vec![
                ("workflow".to_string(), 0, 2),
                ("missing".to_string(), 1, 2)
            ]
        );
    }
}
