use crate::config::{Config, SegmentConfig};
use crate::segments::{PromptContext, Segment, SegmentProvider};
use crate::themes::Theme;

const ROOT_GLYPH: &str = "\u{F2BD}";

pub struct UserSegment {
    pub enabled: bool,
    pub ignore_user: Option<String>,
}

impl UserSegment {
    pub fn from_config(segments: &SegmentConfig) -> Self {
        Self {
            enabled: segments.user_enabled(),
            ignore_user: segments.ignore_user().map(str::to_string),
        }
    }

    fn should_ignore(&self, username: &str) -> bool {
        username.is_empty() || self.ignore_user.as_deref() == Some(username)
    }
}

/// Username as the shell should print it; bash and zsh expand their own escapes.
pub fn user_prompt(ctx: &PromptContext) -> String {
    if ctx.is_root {
        return ROOT_GLYPH.to_string();
    }
    match ctx.shell.as_str() {
        "bash" => "\\u".to_string(),
        "zsh" => "%n".to_string(),
        _ => ctx.username.clone(),
    }
}

impl SegmentProvider for UserSegment {
    async fn segments(&self, ctx: &PromptContext, _config: &Config, theme: &Theme) -> Vec<Segment> {
        if self.should_ignore(&ctx.username) {
            return Vec::new();
        }
        let background = if ctx.is_root {
            theme.username_root_bg
        } else {
            theme.username_bg
        };
        vec![Segment {
            name: "user",
            content: user_prompt(ctx),
            foreground: theme.username_fg,
            background,
        }]
    }

    fn name(&self) -> &'static str {
        "user"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
