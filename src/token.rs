//! Token resolution for blueprint names and file contents.
//! Replaces literal `{{tokenName}}` placeholders in a single pass;
//! unrecognized tokens pass through verbatim.

use chrono::{DateTime, Local};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The values available to one resolution pass.
///
/// `current_name` differs between the two passes a node goes through: when
/// resolving the node's name it is the raw, unresolved name; when resolving
/// a file's content it is the already-resolved final name.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    /// Name given to the root project folder at materialization time
    pub project_name: &'a str,
    /// Name of the immediate containing folder being created
    pub parent_name: &'a str,
    /// Name of the node itself
    pub current_name: &'a str,
    /// Slash-joined path of the node relative to the project root,
    /// empty for the project root's direct children
    pub relative_path: &'a str,
    /// Human-readable date of materialization start, fixed per operation
    pub creation_date: &'a str,
}

impl TokenContext<'_> {
    fn value(&self, token: &str) -> Option<&str> {
        match token {
            "projectName" => Some(self.project_name),
            "parentName" => Some(self.parent_name),
            "currentName" => Some(self.current_name),
            "relativePath" => Some(self.relative_path),
            "creationDate" => Some(self.creation_date),
            _ => None,
        }
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z][A-Za-z0-9]*)\}\}").expect("token pattern is valid")
    })
}

/// Replaces every literal `{{tokenName}}` occurrence in `input` with its
/// value from `context`.
///
/// Resolution is a single non-recursive pass: a token whose value itself
/// contains `{{...}}` is not re-expanded, and unknown tokens are left in
/// place rather than treated as errors.
pub fn resolve_tokens(input: &str, context: &TokenContext) -> String {
    token_pattern()
        .replace_all(input, |caps: &Captures| match context.value(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Formats a materialization start time as e.g. "09 January 2026":
/// two-digit day, full month name, four-digit year.
pub fn format_creation_date(moment: DateTime<Local>) -> String {
    moment.format("%d %B %Y").to_string()
}
