//! Project-local storage for installed content
//!
//! All filesystem access is anchored at the project root: the `.claude/`
//! asset directory mirrors remote paths, and `CLAUDE.md` accumulates one
//! import reference per installed item.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DotclaudeError, Result};

/// Asset directory name, relative to the project root
pub const CLAUDE_DIR: &str = ".claude";

/// Instruction manifest name, relative to the project root
pub const CLAUDE_MD: &str = "CLAUDE.md";

/// Manifest import line for an installed item's remote path
pub fn import_line(remote_path: &str) -> String {
    format!("@{}/{}", CLAUDE_DIR, remote_path)
}

/// A project directory holding the asset tree and the instruction manifest
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().map_err(|e| DotclaudeError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn claude_dir(&self) -> PathBuf {
        self.root.join(CLAUDE_DIR)
    }

    fn claude_md_path(&self) -> PathBuf {
        self.root.join(CLAUDE_MD)
    }

    /// Create the asset directory if absent; no-op when it already exists
    pub fn ensure_claude_dir(&self) -> Result<()> {
        let dir = self.claude_dir();
        fs::create_dir_all(&dir).map_err(|e| DotclaudeError::FileWriteFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write a content file under the asset directory, creating parents;
    /// overwrites any existing file. Returns the resolved absolute path.
    pub fn write_content_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let full_path = self.claude_dir().join(relative_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| DotclaudeError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        fs::write(&full_path, content).map_err(|e| DotclaudeError::FileWriteFailed {
            path: full_path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(full_path)
    }

    /// Existence probe under the asset directory; display-only, never used
    /// to block installation
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.claude_dir().join(relative_path).exists()
    }

    pub fn claude_md_exists(&self) -> bool {
        self.claude_md_path().exists()
    }

    /// Read the manifest; an absent file reads as an empty string
    pub fn read_claude_md(&self) -> Result<String> {
        let path = self.claude_md_path();
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(DotclaudeError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn write_claude_md(&self, content: &str) -> Result<()> {
        let path = self.claude_md_path();
        fs::write(&path, content).map_err(|e| DotclaudeError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Append an import line to the manifest unless an identical line is
    /// already present. The first line of an empty manifest gets no leading
    /// newline.
    pub fn append_import(&self, line: &str) -> Result<()> {
        let existing = self.read_claude_md()?;

        if existing.lines().any(|l| l == line) {
            return Ok(());
        }

        let updated = if existing.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{}", existing, line)
        };

        self.write_claude_md(&updated)
    }
}
