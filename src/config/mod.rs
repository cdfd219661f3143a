pub mod loader;
pub mod defaults;

pub use loader::*;
pub use defaults::*;

use crate::themes::SymbolTemplates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub segments: SegmentConfig,
    pub layout: LayoutConfig,
    pub symbols: SymbolTemplates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    pub cwd: Option<CwdConfig>,
    pub git: Option<GitConfig>,
    pub jobs: Option<JobsConfig>,
    pub user: Option<UserConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CwdConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    pub enabled: bool,
    /// Executable to run, `git` unless overridden.
    pub program: Option<String>,
    /// Repository roots (as printed by `rev-parse --show-toplevel`) to skip.
    #[serde(rename = "ignoreRepos")]
    pub ignore_repos: Option<Vec<String>>,
    /// Index size in KB above which untracked files are not scanned. 0 disables.
    #[serde(rename = "assumeUnchangedSize")]
    pub assume_unchanged_size: Option<u64>,
    #[serde(rename = "dirtySource")]
    pub dirty_source: Option<DirtySource>,
    #[serde(rename = "timeoutMs")]
    pub timeout_ms: Option<u64>,
}

/// Where the branch segment gets its clean/dirty coloring from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirtySource {
    /// File counts from the porcelain status.
    Status,
    /// `git describe --always --dirty`.
    Describe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub enabled: bool,
    #[serde(rename = "ignoreUser")]
    pub ignore_user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRewrite {
    pub prefix: String,
    pub replacement: String,
}

impl PrefixRewrite {
    pub fn new(prefix: &str, replacement: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Truncation thresholds shared by the branch and path shorteners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub branch_max_len: usize,
    pub branch_width_percent: usize,
    pub branch_prefixes: Vec<PrefixRewrite>,
    pub path_max_len: usize,
    pub path_width_percent: usize,
    pub path_keep_components: usize,
    pub ellipsis: String,
    pub hash_run_len: usize,
    pub hash_cap: usize,
    pub dotted_cap: usize,
    pub word_cap: usize,
    pub default_cap: usize,
}

impl GitConfig {
    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or("git")
    }

    pub fn is_ignored(&self, repo_root: &str) -> bool {
        self.ignore_repos
            .as_ref()
            .map_or(false, |roots| roots.iter().any(|root| root == repo_root))
    }

    pub fn dirty_source(&self) -> DirtySource {
        self.dirty_source.unwrap_or(DirtySource::Status)
    }
}

impl SegmentConfig {
    pub fn git_or_default(&self) -> GitConfig {
        self.git.clone().unwrap_or_default()
    }

    pub fn cwd_enabled(&self) -> bool {
        self.cwd.as_ref().map_or(true, |c| c.enabled)
    }

    pub fn git_enabled(&self) -> bool {
        self.git.as_ref().map_or(true, |c| c.enabled)
    }

    pub fn jobs_enabled(&self) -> bool {
        self.jobs.as_ref().map_or(true, |c| c.enabled)
    }

    pub fn user_enabled(&self) -> bool {
        self.user.as_ref().map_or(true, |c| c.enabled)
    }

    pub fn ignore_user(&self) -> Option<&str> {
        self.user.as_ref().and_then(|c| c.ignore_user.as_deref())
    }
}
