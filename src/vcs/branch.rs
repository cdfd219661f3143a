use crate::config::LayoutConfig;
use crate::themes::SymbolTemplates;
use crate::utils::{debug_with_context, fit_branch};
use crate::vcs::runner::{first_line, CommandRunner};
use crate::vcs::stats::RepoStats;
use crate::vcs::status::BranchDescriptor;

pub const SHORT_HEAD_ARGS: &[&str] = &["rev-parse", "--short", "HEAD"];
pub const SYMBOLIC_REF_ARGS: &[&str] = &["symbolic-ref", "--short", "HEAD"];

/// Shown when neither a commit nor a symbolic ref could be resolved.
pub const ERROR_BRANCH: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchName {
    /// Named branch from the status line.
    Local(String),
    /// Detached HEAD, identified by its short hash.
    Detached(String),
    /// HEAD points at a branch with no commits yet.
    Unborn(String),
    Unresolved,
}

impl BranchName {
    pub fn display(&self, symbols: &SymbolTemplates) -> String {
        match self {
            BranchName::Local(name) | BranchName::Unborn(name) => name.clone(),
            BranchName::Detached(hash) => format!("{} {}", symbols.repo_detached, hash),
            BranchName::Unresolved => ERROR_BRANCH.to_string(),
        }
    }
}

pub async fn resolve_branch<R: CommandRunner>(runner: &R, descriptor: &BranchDescriptor) -> BranchName {
    if !descriptor.is_empty() {
        return BranchName::Local(descriptor.local.clone());
    }

    match runner.run(SHORT_HEAD_ARGS).await {
        Ok(output) => return BranchName::Detached(first_line(&output).to_string()),
        Err(e) => debug_with_context("branch", &format!("No HEAD commit: {}", e)),
    }

    match runner.run(SYMBOLIC_REF_ARGS).await {
        Ok(output) => BranchName::Unborn(first_line(&output).to_string()),
        Err(e) => {
            debug_with_context("branch", &format!("No symbolic ref: {}", e));
            BranchName::Unresolved
        }
    }
}

/// Final branch segment text: shortened name, branch glyph, then counts for
/// unstaged and conflicted files.
pub fn decorate_branch(
    name: &BranchName,
    stats: &RepoStats,
    symbols: &SymbolTemplates,
    layout: &LayoutConfig,
    term_width: usize,
) -> String {
    let display = name.display(symbols);
    let display = match name {
        BranchName::Unresolved => display,
        _ => fit_branch(&display, term_width, layout),
    };

    let mut branch = format!("{}{}", symbols.repo_branch, display);
    let mut separator = " ";
    for (count, symbol) in [
        (stats.not_staged, &symbols.repo_not_staged),
        (stats.conflicted, &symbols.repo_conflicted),
    ] {
        if count > 0 {
            branch.push_str(separator);
            branch.push_str(&format!("{}{}", count, symbol));
            separator = "";
        }
    }

    branch.trim().to_string()
}
