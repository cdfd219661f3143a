pub mod cwd;
pub mod git;
pub mod jobs;
pub mod username;

pub use cwd::*;
pub use git::*;
pub use jobs::*;
pub use username::*;

use crate::config::Config;
use crate::themes::{get_theme, Theme};
use crate::vcs::CommandRunner;
use serde::Serialize;
use std::path::PathBuf;

/// One colored chunk of the prompt, handed to an external renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: &'static str,
    pub content: String,
    pub foreground: u8,
    pub background: u8,
}

/// Facts about the caller's environment, gathered outside the library.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    /// Terminal width in columns.
    pub term_width: usize,
    pub username: String,
    pub is_root: bool,
    pub shell: String,
    pub jobs: usize,
}

impl Default for PromptContext {
    fn default() -> Self {
        Self {
            cwd: PathBuf::from("/"),
            home: None,
            term_width: 80,
            username: String::new(),
            is_root: false,
            shell: String::new(),
            jobs: 0,
        }
    }
}

/// Trait for all prompt segments
#[allow(async_fn_in_trait)]
pub trait SegmentProvider {
    /// Zero or more segments; an empty list means "nothing to show".
    async fn segments(&self, ctx: &PromptContext, config: &Config, theme: &Theme) -> Vec<Segment>;

    /// Get segment name for debugging
    fn name(&self) -> &'static str;

    fn is_enabled(&self) -> bool {
        true
    }
}

async fn collect<P: SegmentProvider>(
    provider: &P,
    ctx: &PromptContext,
    config: &Config,
    theme: &Theme,
    out: &mut Vec<Segment>,
) {
    if provider.is_enabled() {
        out.extend(provider.segments(ctx, config, theme).await);
    } else {
        crate::utils::debug_with_context(provider.name(), "disabled");
    }
}

/// All enabled segments in prompt order: user, cwd, git, jobs.
pub async fn generate_segments<R: CommandRunner>(
    ctx: &PromptContext,
    config: &Config,
    runner: R,
) -> Vec<Segment> {
    let theme = get_theme(&config.theme);
    let mut segments = Vec::new();

    let user = UserSegment::from_config(&config.segments);
    collect(&user, ctx, config, &theme, &mut segments).await;

    let cwd = CwdSegment::from_config(&config.segments);
    collect(&cwd, ctx, config, &theme, &mut segments).await;

    let git = GitSegment::new(runner, config.segments.git_or_default());
    collect(&git, ctx, config, &theme, &mut segments).await;

    let jobs = JobsSegment::from_config(&config.segments);
    collect(&jobs, ctx, config, &theme, &mut segments).await;

    segments
}
