use crate::config::*;
use crate::themes::SymbolTemplates;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            segments: SegmentConfig::default(),
            layout: LayoutConfig::default(),
            symbols: SymbolTemplates::default(),
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            cwd: Some(CwdConfig::default()),
            git: Some(GitConfig::default()),
            jobs: Some(JobsConfig::default()),
            user: Some(UserConfig::default()),
        }
    }
}

impl Default for CwdConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: None,
            ignore_repos: None,
            assume_unchanged_size: Some(0),
            dirty_source: Some(DirtySource::Status),
            timeout_ms: None,
        }
    }
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_user: None,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            branch_max_len: 14,
            branch_width_percent: 25,
            branch_prefixes: vec![
                PrefixRewrite::new("release/", "r/"),
                PrefixRewrite::new("release-", "r/"),
                PrefixRewrite::new("feature/", "f/"),
                PrefixRewrite::new("feat/", "f/"),
                PrefixRewrite::new("chore/", "c/"),
                PrefixRewrite::new("master", "m"),
            ],
            path_max_len: 50,
            path_width_percent: 40,
            path_keep_components: 3,
            ellipsis: "\u{F141}".to_string(),
            hash_run_len: 32,
            hash_cap: 9,
            dotted_cap: 4,
            word_cap: 3,
            default_cap: 9,
        }
    }
}
