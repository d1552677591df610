//! Static catalogue of installable content items
//!
//! The registry is an immutable value constructed once at startup. Commands
//! receive it by reference; tests may construct smaller registries.

use std::fmt;

/// Kind of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Agent,
    Skill,
    Rule,
}

impl ItemType {
    /// All item types in display order
    pub const ALL: [ItemType; 3] = [ItemType::Agent, ItemType::Skill, ItemType::Rule];

    /// Plural form used for section headers
    pub fn plural(&self) -> &'static str {
        match self {
            ItemType::Agent => "agents",
            ItemType::Skill => "skills",
            ItemType::Rule => "rules",
        }
    }

    /// Parse a user-supplied type filter; accepts singular and plural forms
    pub fn parse_filter(value: &str) -> Option<ItemType> {
        match value.to_lowercase().as_str() {
            "agent" | "agents" => Some(ItemType::Agent),
            "skill" | "skills" => Some(ItemType::Skill),
            "rule" | "rules" => Some(ItemType::Rule),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemType::Agent => "agent",
            ItemType::Skill => "skill",
            ItemType::Rule => "rule",
        };
        write!(f, "{}", name)
    }
}

/// A named, typed content asset installable into a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// Unique user-facing key
    pub name: String,
    pub item_type: ItemType,
    /// Path on the remote host; a `.md` suffix denotes a single file,
    /// anything else a directory whose contents are enumerated
    pub remote_path: String,
    pub description: String,
}

impl ContentItem {
    pub fn new(name: &str, item_type: ItemType, remote_path: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            item_type,
            remote_path: remote_path.to_string(),
            description: description.to_string(),
        }
    }
}

/// Immutable catalogue of content items
///
/// Invariants: names are unique; the three item types partition the registry.
#[derive(Debug, Clone)]
pub struct Registry {
    items: Vec<ContentItem>,
}

impl Registry {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// The built-in catalogue served from the claude-kit repository
    pub fn builtin() -> Self {
        use ItemType::{Agent, Rule, Skill};

        Self::new(vec![
            // Agents
            ContentItem::new("backend", Agent, "agents/backend.md", "Convex, APIs, data layer"),
            ContentItem::new(
                "frontend",
                Agent,
                "agents/frontend.md",
                "Next.js, React, TDD, Shadcn",
            ),
            ContentItem::new("qa", Agent, "agents/qa.md", "Testing, validation, pre-commit"),
            ContentItem::new(
                "orchestrate",
                Agent,
                "agents/orchestrate.md",
                "Multi-agent coordination",
            ),
            ContentItem::new(
                "debugger",
                Agent,
                "agents/debugger.md",
                "Error detective, troubleshooting",
            ),
            ContentItem::new(
                "security",
                Agent,
                "agents/security.md",
                "Vulnerability assessment, audits",
            ),
            ContentItem::new(
                "performance",
                Agent,
                "agents/performance.md",
                "Optimization, profiling, bundle analysis",
            ),
            ContentItem::new(
                "refactor",
                Agent,
                "agents/refactor.md",
                "Code modernization, cleanup",
            ),
            // Skills
            ContentItem::new(
                "compound",
                Skill,
                "skills/compound",
                "Self-improvement, capture learnings",
            ),
            ContentItem::new("graphite", Skill, "skills/graphite", "Git stacking workflow"),
            ContentItem::new(
                "review",
                Skill,
                "skills/review",
                "Code review, simplification guidelines",
            ),
            ContentItem::new(
                "docs",
                Skill,
                "skills/docs",
                "Documentation patterns, JSDoc, README",
            ),
            ContentItem::new("tdd", Skill, "skills/tdd", "Test-driven development workflow"),
            ContentItem::new(
                "design-system",
                Skill,
                "skills/design-system",
                "UI design guidelines, anti-patterns",
            ),
            ContentItem::new(
                "security-checklist",
                Skill,
                "skills/security-checklist",
                "OWASP Top 10, secure coding patterns",
            ),
            // Rules
            ContentItem::new("workflow", Rule, "rules/workflow.md", "Unified workflow phases"),
            ContentItem::new(
                "typescript",
                Rule,
                "rules/typescript.md",
                "TypeScript conventions",
            ),
            ContentItem::new(
                "react-useeffect",
                Rule,
                "rules/react-useeffect.md",
                "useEffect patterns and anti-patterns",
            ),
            ContentItem::new("convex", Rule, "rules/convex.md", "Convex database patterns"),
            ContentItem::new(
                "nextjs-api",
                Rule,
                "rules/nextjs-api.md",
                "Next.js API route patterns",
            ),
        ])
    }

    /// All items in registry order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of the given type, registry order preserved
    pub fn items_by_type(&self, item_type: ItemType) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.item_type == item_type)
            .collect()
    }

    /// Exact, case-sensitive lookup by name
    pub fn item_by_name(&self, name: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.name == name)
    }
}
