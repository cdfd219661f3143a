use crate::config::{Config, DirtySource, GitConfig};
use crate::segments::{PromptContext, Segment, SegmentProvider};
use crate::themes::{SymbolTemplates, Theme};
use crate::utils::debug_with_context;
use crate::vcs::{
    aggregate, decorate_branch, parse_status, resolve_branch, CommandRunner, RepoStats,
};
use std::path::Path;

pub const TOPLEVEL_ARGS: &[&str] = &["rev-parse", "--show-toplevel"];
pub const STATUS_ARGS: &[&str] = &["status", "--porcelain", "-b", "--ignore-submodules"];
pub const NO_UNTRACKED_ARG: &str = "-uno";
pub const DESCRIBE_ARGS: &[&str] = &["describe", "--always", "--dirty"];

/// Branch and sync-state segments for the repository containing the cwd.
pub struct GitSegment<R> {
    runner: R,
    config: GitConfig,
}

impl<R: CommandRunner> GitSegment<R> {
    pub fn new(runner: R, config: GitConfig) -> Self {
        Self { runner, config }
    }

    /// Top-level directory of the repository, or `None` outside of one.
    pub async fn repo_root(&self) -> Option<String> {
        match self.runner.run(TOPLEVEL_ARGS).await {
            Ok(output) => Some(output.trim().to_string()),
            Err(e) => {
                debug_with_context("git", &format!("Not in a git repository: {}", e));
                None
            }
        }
    }

    /// Status arguments, adding `-uno` when the index is over the configured size.
    pub async fn status_args(&self, repo_root: &str) -> Vec<&'static str> {
        let mut args = STATUS_ARGS.to_vec();
        let limit_kb = self.config.assume_unchanged_size.unwrap_or(0);
        if limit_kb > 0 && index_size(Path::new(repo_root)).await > limit_kb * 1024 {
            debug_with_context("git", "Index exceeds size limit, skipping untracked files");
            args.push(NO_UNTRACKED_ARG);
        }
        args
    }

    /// Clean/dirty state used for coloring the branch segment.
    pub async fn is_dirty(&self, stats: &RepoStats) -> bool {
        match self.config.dirty_source() {
            DirtySource::Status => stats.dirty(),
            DirtySource::Describe => match self.runner.run(DESCRIBE_ARGS).await {
                Ok(output) => output.trim().ends_with("-dirty"),
                Err(e) => {
                    debug_with_context("git", &format!("describe failed, assuming dirty: {}", e));
                    true
                }
            },
        }
    }

    pub async fn render(&self, ctx: &PromptContext, config: &Config, theme: &Theme) -> Vec<Segment> {
        let Some(root) = self.repo_root().await else {
            return Vec::new();
        };
        if self.config.is_ignored(&root) {
            debug_with_context("git", &format!("Ignoring repository {}", root));
            return Vec::new();
        }

        let args = self.status_args(&root).await;
        let status = match self.runner.run(&args).await {
            Ok(output) => output,
            Err(e) => {
                debug_with_context("git", &format!("status failed: {}", e));
                return Vec::new();
            }
        };

        let parsed = parse_status(&status);
        if parsed.branch.is_empty() {
            debug_with_context("git", "No branch info in status, resolving HEAD");
        }

        let stats = aggregate(&self.runner, parsed.files, &parsed.branch).await;
        let name = resolve_branch(&self.runner, &parsed.branch).await;
        let branch = decorate_branch(&name, &stats, &config.symbols, &config.layout, ctx.term_width);

        let (foreground, background) = theme.repo_colors(self.is_dirty(&stats).await);
        let mut segments = vec![Segment {
            name: "git-branch",
            content: branch,
            foreground,
            background,
        }];
        segments.extend(stats_segment(&stats, theme, &config.symbols));
        segments
    }
}

impl<R: CommandRunner> SegmentProvider for GitSegment<R> {
    async fn segments(&self, ctx: &PromptContext, config: &Config, theme: &Theme) -> Vec<Segment> {
        self.render(ctx, config, theme).await
    }

    fn name(&self) -> &'static str {
        "git"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

/// Ahead, behind and stash counts. `None` when all three are zero.
pub fn stats_segment(stats: &RepoStats, theme: &Theme, symbols: &SymbolTemplates) -> Option<Segment> {
    if !stats.has_sync_state() {
        return None;
    }

    // Stashes share the behind glyph.
    let content = [
        (stats.ahead, &symbols.repo_ahead),
        (stats.behind, &symbols.repo_behind),
        (stats.stashed, &symbols.repo_behind),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, symbol)| format!("{}{}", count, symbol))
    .collect::<Vec<_>>()
    .join(" ");

    Some(Segment {
        name: "git-status",
        content,
        foreground: theme.git_ahead_fg,
        background: theme.git_ahead_bg,
    })
}

/// Size of `.git/index` in bytes; 0 when it cannot be read.
pub async fn index_size(repo_root: &Path) -> u64 {
    tokio::fs::metadata(repo_root.join(".git").join("index"))
        .await
        .map(|meta| meta.len())
        .unwrap_or(0)
}
