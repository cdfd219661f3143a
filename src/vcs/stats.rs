use crate::utils::debug_with_context;
use crate::vcs::runner::CommandRunner;
use crate::vcs::status::{BranchDescriptor, FileCounts};

pub const STASH_ARGS: &[&str] = &["rev-list", "-g", "refs/stash"];

/// Snapshot of one repository at one point in time.
///
/// Built once per prompt; a new query builds a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub ahead: u32,
    pub behind: u32,
    pub untracked: u32,
    pub not_staged: u32,
    pub staged: u32,
    pub conflicted: u32,
    pub stashed: u32,
}

impl RepoStats {
    pub fn new(files: FileCounts, branch: &BranchDescriptor, stashed: u32) -> Self {
        Self {
            ahead: branch.ahead,
            behind: branch.behind,
            untracked: files.untracked,
            not_staged: files.not_staged,
            staged: files.staged,
            conflicted: files.conflicted,
            stashed,
        }
    }

    /// Working tree has changes. Ahead/behind and stashes are sync state and
    /// do not count.
    pub fn dirty(&self) -> bool {
        self.untracked + self.not_staged + self.staged + self.conflicted > 0
    }

    pub fn has_sync_state(&self) -> bool {
        self.ahead > 0 || self.behind > 0 || self.stashed > 0
    }
}

pub fn count_stashes(output: &str) -> u32 {
    output.lines().filter(|line| !line.trim().is_empty()).count() as u32
}

/// Number of stash entries. A missing `refs/stash` makes the query fail,
/// which just means there are none.
pub async fn query_stash_count<R: CommandRunner>(runner: &R) -> u32 {
    match runner.run(STASH_ARGS).await {
        Ok(output) => count_stashes(&output),
        Err(e) => {
            debug_with_context("stats", &format!("No stashes: {}", e));
            0
        }
    }
}

pub async fn aggregate<R: CommandRunner>(
    runner: &R,
    files: FileCounts,
    branch: &BranchDescriptor,
) -> RepoStats {
    let stashed = query_stash_count(runner).await;
    let stats = RepoStats::new(files, branch, stashed);
    debug_with_context("stats", &format!("{:?}", stats));
    stats
}
