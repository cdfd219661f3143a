use serde::{Deserialize, Serialize};

/// 256-color indices for every segment the prompt can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub home_fg: u8,
    pub home_bg: u8,
    pub repo_clean_fg: u8,
    pub repo_clean_bg: u8,
    pub repo_dirty_fg: u8,
    pub repo_dirty_bg: u8,
    pub git_ahead_fg: u8,
    pub git_ahead_bg: u8,
    pub jobs_fg: u8,
    pub jobs_bg: u8,
    pub username_fg: u8,
    pub username_bg: u8,
    pub username_root_bg: u8,
}

impl Theme {
    /// (fg, bg) for the branch segment.
    pub fn repo_colors(&self, dirty: bool) -> (u8, u8) {
        if dirty {
            (self.repo_dirty_fg, self.repo_dirty_bg)
        } else {
            (self.repo_clean_fg, self.repo_clean_bg)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Glyphs used inside segment content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymbolTemplates {
    pub repo_branch: String,
    pub repo_detached: String,
    pub repo_ahead: String,
    pub repo_behind: String,
    pub repo_not_staged: String,
    pub repo_conflicted: String,
}

impl Default for SymbolTemplates {
    fn default() -> Self {
        Self {
            repo_branch: String::new(),
            repo_detached: "\u{2693}".to_string(),
            repo_ahead: "\u{2B06}".to_string(),
            repo_behind: "\u{2B07}".to_string(),
            repo_not_staged: "\u{270E}".to_string(),
            repo_conflicted: "\u{273C}".to_string(),
        }
    }
}

pub const THEME_NAMES: &[&str] = &["default", "low-contrast"];

pub fn get_theme(name: &str) -> Theme {
    match name {
        "default" => default_theme(),
        "low-contrast" => low_contrast_theme(),
        _ => default_theme(), // fallback
    }
}

fn default_theme() -> Theme {
    Theme {
        home_fg: 15,
        home_bg: 31,
        repo_clean_fg: 0,
        repo_clean_bg: 148,
        repo_dirty_fg: 15,
        repo_dirty_bg: 161,
        git_ahead_fg: 250,
        git_ahead_bg: 240,
        jobs_fg: 39,
        jobs_bg: 238,
        username_fg: 250,
        username_bg: 240,
        username_root_bg: 124,
    }
}

fn low_contrast_theme() -> Theme {
    Theme {
        home_fg: 0,
        home_bg: 255,
        repo_clean_fg: 0,
        repo_clean_bg: 252,
        repo_dirty_fg: 0,
        repo_dirty_bg: 250,
        git_ahead_fg: 0,
        git_ahead_bg: 254,
        jobs_fg: 0,
        jobs_bg: 250,
        username_fg: 0,
        username_bg: 252,
        username_root_bg: 248,
    }
}
