//! Remote content fetching from the claude-kit GitHub repository
//!
//! Two read-only operations against the content host: raw file fetch and
//! directory listing via the contents API. Items whose remote path ends in
//! `.md` are single files; any other path is a directory whose immediate
//! file entries are fetched one by one.

use serde::Deserialize;

use crate::error::{DotclaudeError, Result};
use crate::registry::ContentItem;

/// Raw content base for the claude-kit repository
pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com/davehudson/claude-kit/main";

/// Contents API base for the claude-kit repository
pub const GITHUB_API_BASE: &str = "https://api.github.com/repos/davehudson/claude-kit";

/// Remote host configuration
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL for raw file content
    pub raw_base: String,
    /// Base URL for the contents API
    pub api_base: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            raw_base: GITHUB_RAW_BASE.to_string(),
            api_base: GITHUB_API_BASE.to_string(),
        }
    }
}

impl RemoteConfig {
    /// Default configuration with `DOTCLAUDE_RAW_BASE` / `DOTCLAUDE_API_BASE`
    /// environment overrides applied
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            raw_base: std::env::var("DOTCLAUDE_RAW_BASE").unwrap_or(defaults.raw_base),
            api_base: std::env::var("DOTCLAUDE_API_BASE").unwrap_or(defaults.api_base),
        }
    }
}

/// Resolves a registry item to its (relative path, content) pairs
///
/// The install engine depends on this trait rather than a concrete client so
/// it can be exercised without a network.
pub trait ContentFetcher {
    /// Fetch all files for one item, in listing order; keys are unique
    /// relative paths. Any single failure aborts the whole item's fetch.
    fn fetch_item(&self, item: &ContentItem) -> Result<Vec<(String, String)>>;
}

/// One entry of a GitHub contents API response
#[derive(Debug, Deserialize)]
struct DirEntry {
    path: String,
    #[serde(rename = "type")]
    entry_type: String,
}

/// GitHub-backed content fetcher
pub struct GithubFetcher {
    config: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl GithubFetcher {
    pub fn new() -> Result<Self> {
        Self::with_config(RemoteConfig::from_env())
    }

    pub fn with_config(config: RemoteConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("dotclaude/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetch one raw file from the content host
    pub fn fetch_file(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.config.raw_base, path);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(DotclaudeError::FetchFailed {
                path: path.to_string(),
                status: response.status().to_string(),
            });
        }

        Ok(response.text()?)
    }

    /// List the immediate file entries of a remote directory
    ///
    /// Only one level is listed; nested subdirectories are not expanded.
    pub fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        let url = format!("{}/contents/{}", self.config.api_base, path);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()?;

        if !response.status().is_success() {
            return Err(DotclaudeError::ListFailed {
                path: path.to_string(),
                status: response.status().to_string(),
            });
        }

        let body = response.text()?;
        let entries = parse_directory_listing(path, &body)?;
        Ok(entries)
    }
}

impl ContentFetcher for GithubFetcher {
    fn fetch_item(&self, item: &ContentItem) -> Result<Vec<(String, String)>> {
        let mut files = Vec::new();

        if is_single_file(&item.remote_path) {
            let content = self.fetch_file(&item.remote_path)?;
            files.push((item.remote_path.clone(), content));
        } else {
            for path in self.list_directory(&item.remote_path)? {
                let content = self.fetch_file(&path)?;
                files.push((path, content));
            }
        }

        Ok(files)
    }
}

/// Whether a remote path denotes a single file rather than a directory
pub fn is_single_file(remote_path: &str) -> bool {
    remote_path.ends_with(".md")
}

/// Parse a contents API response into file paths, listing order preserved
fn parse_directory_listing(path: &str, body: &str) -> Result<Vec<String>> {
    let entries: Vec<DirEntry> =
        serde_json::from_str(body).map_err(|e| DotclaudeError::ListingParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.entry_type == "file")
        .map(|entry| entry.path)
        .collect())
}
