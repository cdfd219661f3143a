//! Porcelain v1 status parsing.
//!
//! The first line of `git status --porcelain -b` describes the branch:
//!
//! ```text
//! ## main...origin/main [ahead 2, behind 1]
//! ```
//!
//! Every following line starts with a two-letter (index, worktree) code.

/// Tracking information from the `##` line. `local` is empty when the line
/// did not match, which callers treat as "no branch info".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchDescriptor {
    pub local: String,
    pub remote: Option<String>,
    pub ahead: u32,
    pub behind: u32,
}

impl BranchDescriptor {
    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }
}

/// Per-file change counts from the lines after the branch line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub untracked: u32,
    pub not_staged: u32,
    pub staged: u32,
    pub conflicted: u32,
}

/// Unmerged (index, worktree) permutations.
const CONFLICT_CODES: [&[u8; 2]; 7] = [b"DD", b"AU", b"UD", b"UA", b"DU", b"AA", b"UU"];

impl FileCounts {
    /// Count one status line. Lines shorter than two bytes are ignored.
    pub fn record(&mut self, line: &str) {
        let code = match line.as_bytes() {
            [index, worktree, ..] => [*index, *worktree],
            _ => return,
        };

        if &code == b"??" {
            self.untracked += 1;
        } else if CONFLICT_CODES.contains(&&code) {
            self.conflicted += 1;
        } else {
            if code[0] != b' ' {
                self.staged += 1;
            }
            if code[1] != b' ' {
                self.not_staged += 1;
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStatus {
    pub branch: BranchDescriptor,
    pub files: FileCounts,
}

pub fn parse_status(output: &str) -> ParsedStatus {
    let mut lines = output.split('\n');
    let branch = parse_branch_line(lines.next().unwrap_or(""));
    let files = parse_file_counts(lines);
    ParsedStatus { branch, files }
}

pub fn parse_file_counts<'a>(lines: impl IntoIterator<Item = &'a str>) -> FileCounts {
    let mut counts = FileCounts::default();
    for line in lines {
        counts.record(line);
    }
    counts
}

/// Parse a `## <local>[...<remote>[ [ahead N][, ][behind M]]]` line.
///
/// The whole line must match; anything else (detached `## HEAD (no branch)`,
/// `[gone]` upstreams, error text) gives an empty descriptor.
pub fn parse_branch_line(line: &str) -> BranchDescriptor {
    match_branch_line(line).unwrap_or_default()
}

fn match_branch_line(line: &str) -> Option<BranchDescriptor> {
    let rest = line.strip_prefix("## ")?;

    // Shortest local name first: the first `...` that leaves a valid tail wins.
    for (idx, _) in rest.char_indices().skip(1) {
        let local = &rest[..idx];
        if local.contains(char::is_whitespace) {
            break;
        }
        let Some(tail) = rest[idx..].strip_prefix("...") else {
            continue;
        };
        if let Some(tracking) = match_tracking(tail) {
            return Some(BranchDescriptor {
                local: local.to_string(),
                ..tracking
            });
        }
    }

    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return None;
    }
    Some(BranchDescriptor {
        local: rest.to_string(),
        ..BranchDescriptor::default()
    })
}

fn match_tracking(tail: &str) -> Option<BranchDescriptor> {
    let (remote, bracket) = match tail.find(char::is_whitespace) {
        Some(idx) => tail.split_at(idx),
        None => (tail, ""),
    };
    if remote.is_empty() {
        return None;
    }

    let (ahead, behind) = if bracket.is_empty() {
        (0, 0)
    } else {
        let inner = bracket.strip_prefix(" [")?.strip_suffix(']')?;
        match_ahead_behind(inner)?
    };

    Some(BranchDescriptor {
        local: String::new(),
        remote: Some(remote.to_string()),
        ahead,
        behind,
    })
}

fn match_ahead_behind(inner: &str) -> Option<(u32, u32)> {
    let mut rest = inner;
    let mut ahead = 0;
    let mut behind = 0;

    if let Some(after) = rest.strip_prefix("ahead ") {
        let (count, remaining) = take_count(after)?;
        ahead = count;
        rest = remaining.strip_prefix(", ").unwrap_or(remaining);
    }
    if let Some(after) = rest.strip_prefix("behind ") {
        let (count, remaining) = take_count(after)?;
        behind = count;
        rest = remaining;
    }

    rest.is_empty().then_some((ahead, behind))
}

/// Leading ASCII digits as a count. Values that overflow degrade to 0.
fn take_count(text: &str) -> Option<(u32, &str)> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let (digits, rest) = text.split_at(len);
    Some((digits.parse().unwrap_or(0), rest))
}
