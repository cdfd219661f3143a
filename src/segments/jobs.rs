use crate::config::{Config, SegmentConfig};
use crate::segments::{PromptContext, Segment, SegmentProvider};
use crate::themes::Theme;

const ONE_JOB: &str = "\u{F013}";
const MANY_JOBS: &str = "\u{F085}";

/// Background job indicator. The count itself comes from the caller.
pub struct JobsSegment {
    pub enabled: bool,
}

impl JobsSegment {
    pub fn from_config(segments: &SegmentConfig) -> Self {
        Self {
            enabled: segments.jobs_enabled(),
        }
    }
}

impl SegmentProvider for JobsSegment {
    async fn segments(&self, ctx: &PromptContext, _config: &Config, theme: &Theme) -> Vec<Segment> {
        if ctx.jobs == 0 {
            return Vec::new();
        }
        let content = if ctx.jobs > 1 { MANY_JOBS } else { ONE_JOB };
        vec![Segment {
            name: "jobs",
            content: content.to_string(),
            foreground: theme.jobs_fg,
            background: theme.jobs_bg,
        }]
    }

    fn name(&self) -> &'static str {
        "jobs"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
