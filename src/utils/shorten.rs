//! Width policies for branch names and path-like strings.
//!
//! Both policies only kick in when the text is longer than a fixed length or a
//! share of the terminal width. Branch names get a literal prefix rewrite and
//! nothing else; paths are collapsed and every component is capped by class.

use crate::config::LayoutConfig;

fn exceeds(len: usize, max_len: usize, term_width: usize, width_percent: usize) -> bool {
    len > max_len || len > term_width * width_percent / 100
}

fn cap(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn is_word(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_' || c == ' ')
}

pub fn branch_needs_shortening(branch: &str, term_width: usize, layout: &LayoutConfig) -> bool {
    exceeds(
        branch.chars().count(),
        layout.branch_max_len,
        term_width,
        layout.branch_width_percent,
    )
}

/// Apply the first matching prefix rewrite. Names without a known prefix are
/// returned untouched, whatever their length.
pub fn shorten_branch(branch: &str, layout: &LayoutConfig) -> String {
    layout
        .branch_prefixes
        .iter()
        .find_map(|rule| {
            branch
                .strip_prefix(rule.prefix.as_str())
                .map(|rest| format!("{}{}", rule.replacement, rest))
        })
        .unwrap_or_else(|| branch.to_string())
}

pub fn fit_branch(branch: &str, term_width: usize, layout: &LayoutConfig) -> String {
    if branch_needs_shortening(branch, term_width, layout) {
        shorten_branch(branch, layout)
    } else {
        branch.to_string()
    }
}

pub fn path_needs_shortening(path: &str, term_width: usize, layout: &LayoutConfig) -> bool {
    exceeds(
        path.chars().count(),
        layout.path_max_len,
        term_width,
        layout.path_width_percent,
    )
}

/// Max characters kept for one path component, picked by content class.
pub fn component_limit(component: &str, layout: &LayoutConfig) -> usize {
    let alnum_run = component
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    if alnum_run >= layout.hash_run_len {
        return layout.hash_cap;
    }
    if let Some(rest) = component.strip_prefix('.') {
        if is_word(rest) {
            return layout.dotted_cap;
        }
    }
    if is_word(component) {
        return layout.word_cap;
    }
    layout.default_cap
}

pub fn shorten_path(path: &str, layout: &LayoutConfig) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut components: Vec<&str> = trimmed.split('/').collect();

    if components.len() > layout.path_keep_components {
        let tail = components.split_off(components.len() - layout.path_keep_components);
        components = Vec::with_capacity(tail.len() + 1);
        components.push(layout.ellipsis.as_str());
        components.extend(tail);
    }

    components
        .iter()
        .map(|component| cap(component, component_limit(component, layout)))
        .collect::<Vec<_>>()
        .join("/")
}

pub fn fit_path(path: &str, term_width: usize, layout: &LayoutConfig) -> String {
    if path_needs_shortening(path, term_width, layout) {
        shorten_path(path, layout)
    } else {
        path.to_string()
    }
}
