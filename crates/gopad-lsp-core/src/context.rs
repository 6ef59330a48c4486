//! Line-local completion context analysis
//!
//! Grammar recognised at the cursor, over the text of the current line up to
//! the cursor column:
//!
//! ```text
//! member-access := ident-start ident-char* "." <cursor>
//! ident-start   := letter | "_"
//! ident-char    := letter | digit | "_"
//! ```
//!
//! The identifier is the maximal run of `ident-char` before the dot. Anything
//! else, including a run that starts with a digit (`1.`), is general position.
//! Columns are `char` offsets into the line.

use std::ops::Range;

/// Where the cursor sits, syntactically
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextMode {
    /// Directly after `<package>.`
    MemberAccess(String),
    General,
}

/// Classified cursor position plus the columns a suggestion will replace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionContext {
    pub mode: ContextMode,
    pub range: Range<usize>,
}

impl CompletionContext {
    pub fn general(range: Range<usize>) -> Self {
        Self {
            mode: ContextMode::General,
            range,
        }
    }

    pub fn member_access(package: &str, range: Range<usize>) -> Self {
        Self {
            mode: ContextMode::MemberAccess(package.to_string()),
            range,
        }
    }

    pub fn package(&self) -> Option<&str> {
        match &self.mode {
            ContextMode::MemberAccess(p) => Some(p.as_str()),
            ContextMode::General => None,
        }
    }
}

pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    is_ident_char(c) && !c.is_numeric()
}

/// Classify the cursor position on `line`. A column past the end of the
/// line is treated as the end of the line.
pub fn analyze(line: &str, column: usize) -> CompletionContext {
    let before: Vec<char> = line.chars().take(column).collect();
    let cursor = before.len();
    let range = identifier_start(&before, cursor)..cursor;

    if cursor == 0 || before[cursor - 1] != '.' {
        return CompletionContext::general(range);
    }

    let dot = cursor - 1;
    let start = identifier_start(&before, dot);
    if start == dot || !is_ident_start(before[start]) {
        return CompletionContext::general(range);
    }

    let package: String = before[start..dot].iter().collect();
    CompletionContext::member_access(&package, range)
}

/// The partial identifier immediately before `column`, possibly empty
pub fn replace_range(line: &str, column: usize) -> Range<usize> {
    let before: Vec<char> = line.chars().take(column).collect();
    identifier_start(&before, before.len())..before.len()
}

/// The whole identifier touching `column`, if any, with its column range
pub fn word_at(line: &str, column: usize) -> Option<(String, Range<usize>)> {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());

    let start = identifier_start(&chars, column);
    let mut end = column;
    while end < chars.len() && is_ident_char(chars[end]) {
        end += 1;
    }

    if start < end {
        Some((chars[start..end].iter().collect(), start..end))
    } else {
        None
    }
}

fn identifier_start(chars: &[char], end: usize) -> usize {
    let mut start = end;
    while start > 0 && is_ident_char(chars[start - 1]) {
        start -= 1;
    }
    start
}
