use crate::config::{Config, SegmentConfig};
use crate::segments::{PromptContext, Segment, SegmentProvider};
use crate::themes::Theme;
use crate::utils::fit_path;
use std::path::Path;

pub struct CwdSegment {
    pub enabled: bool,
}

impl CwdSegment {
    pub fn from_config(segments: &SegmentConfig) -> Self {
        Self {
            enabled: segments.cwd_enabled(),
        }
    }
}

/// Replace a leading home directory with `~`.
pub fn elide_home(cwd: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| cwd.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.to_string_lossy()),
        None => cwd.to_string_lossy().into_owned(),
    }
}

impl SegmentProvider for CwdSegment {
    async fn segments(&self, ctx: &PromptContext, config: &Config, theme: &Theme) -> Vec<Segment> {
        let cwd = elide_home(&ctx.cwd, ctx.home.as_deref());
        vec![Segment {
            name: "cwd",
            content: fit_path(&cwd, ctx.term_width, &config.layout),
            foreground: theme.home_fg,
            background: theme.home_bg,
        }]
    }

    fn name(&self) -> &'static str {
        "cwd"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
