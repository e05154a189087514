//! Compound pattern expansion
//!
//! A compound pattern is a comma-separated list of clauses:
//!
//! ```text
//! clause := prefix [separator] [ '(' extlist ')' | extlist ]
//! ```
//!
//! Parenthesized extension lists fan out into one path per extension, so
//! `widget-1.(html,js)` becomes `widget-1.html` and `widget-1.js`. Expansion
//! never fails: text that does not form a useful clause simply produces no path.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::models::{PathSegment, Separator};

/// Splits a compound pattern into [`PathSegment`]s, one per clause
///
/// Clauses are separated by top-level commas. Commas inside parentheses belong
/// to the extension list of the enclosing clause. An unterminated `(` extends
/// the list to the end of the input.
#[derive(Debug, Clone)]
pub struct ClauseTokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ClauseTokenizer<'a> {
    /// Create a tokenizer over `input`
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Build a segment from a clause written without parentheses
    ///
    /// The clause is split at its last separator so the trailing literal
    /// extension lands in the extension group.
    fn literal(head: &str) -> PathSegment {
        let head = head.trim();
        let split = head
            .char_indices()
            .rev()
            .find_map(|(idx, c)| Separator::from_char(c).map(|sep| (idx, sep)));

        match split {
            Some((idx, sep)) => PathSegment::new(
                head[..idx].trim(),
                sep,
                head[idx + 1..].trim(),
                false,
            ),
            None => PathSegment::new(head, Separator::None, "", false),
        }
    }

    /// Build a segment from `head(inner)`
    fn grouped(head: &str, inner: &str) -> PathSegment {
        let head = head.trim();
        match head.chars().last().and_then(Separator::from_char) {
            Some(sep) => PathSegment::new(head[..head.len() - 1].trim(), sep, inner, true),
            None => PathSegment::new(head, Separator::None, inner, true),
        }
    }
}

impl Iterator for ClauseTokenizer<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let bytes = input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let mut pos = self.pos;
        if bytes[pos] == b',' {
            pos += 1;
        }

        let head_start = pos;
        while pos < bytes.len() && bytes[pos] != b'(' && bytes[pos] != b',' {
            pos += 1;
        }
        let head = &input[head_start..pos];

        let segment = if pos < bytes.len() && bytes[pos] == b'(' {
            let inner_start = pos + 1;
            match input[inner_start..].find(')') {
                Some(0) => {
                    // `()` carries no extension list; keep it as literal text
                    let end = input[pos..].find(',').map_or(bytes.len(), |i| pos + i);
                    let segment = Self::literal(&input[head_start..end]);
                    pos = end;
                    segment
                }
                Some(offset) => {
                    let close = inner_start + offset;
                    let segment = Self::grouped(head, &input[inner_start..close]);
                    pos = close + 1;
                    segment
                }
                None if inner_start < bytes.len() => {
                    let segment = Self::grouped(head, &input[inner_start..]);
                    pos = bytes.len();
                    segment
                }
                None => {
                    let segment = Self::literal(&input[head_start..]);
                    pos = bytes.len();
                    segment
                }
            }
        } else {
            Self::literal(head)
        };

        self.pos = pos;
        Some(segment)
    }
}

/// Expands compound patterns into ordered, case-insensitively distinct paths
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExpander;

impl PatternExpander {
    /// Create a new expander
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw` into its clauses without expanding them
    pub fn segments(&self, raw: &str) -> Vec<PathSegment> {
        ClauseTokenizer::new(raw).collect()
    }

    /// Expand `raw` into concrete relative paths
    ///
    /// Output order follows the input. Empty candidates and candidates ending
    /// in `.` are dropped, and a candidate equal to an earlier one ignoring
    /// case is dropped as well.
    pub fn expand(&self, raw: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut seen = HashSet::new();

        for segment in ClauseTokenizer::new(raw) {
            trace!(
                prefix = %segment.prefix,
                separator = %segment.separator,
                extensions = %segment.extension_group,
                "parsed clause"
            );

            let before = results.len();
            for value in segment.candidates() {
                if !Self::is_acceptable(&value) {
                    continue;
                }
                if seen.insert(value.to_lowercase()) {
                    results.push(value);
                }
            }

            if results.len() == before {
                debug!(clause = %segment.base(), "clause produced no new paths");
            }
        }

        results
    }

    fn is_acceptable(value: &str) -> bool {
        !value.trim().is_empty() && !value.ends_with('.')
    }
}

/// Expand `raw` with a default [`PatternExpander`]
pub fn expand(raw: &str) -> Vec<String> {
    PatternExpander::new().expand(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_comma_separated_files() {
        assert_eq!(expand("file1.txt, file2.txt"), vec!["file1.txt", "file2.txt"]);
    }

    #[test]
    fn test_expand_single_file() {
        assert_eq!(expand("file1.txt"), vec!["file1.txt"]);
    }

    #[test]
    fn test_expand_dotfile_with_group() {
        assert_eq!(expand(".ignore.(old,new)"), vec![".ignore.old", ".ignore.new"]);
    }

    #[test]
    fn test_expand_plain_dotfile() {
        assert_eq!(expand(".ignore"), vec![".ignore"]);
    }

    #[test]
    fn test_expand_plain_name() {
        assert_eq!(expand("license"), vec!["license"]);
        assert_eq!(expand("  license  "), vec!["license"]);
    }

    #[test]
    fn test_expand_hyphenated_group() {
        assert_eq!(expand("widget-1.(html,js)"), vec!["widget-1.html", "widget-1.js"]);
    }

    #[test]
    fn test_expand_trailing_folder_separator() {
        assert_eq!(expand("folder/"), vec!["folder/"]);
        assert_eq!(expand("folder\\"), vec!["folder\\"]);
    }

    #[test]
    fn test_expand_nested_paths() {
        assert_eq!(expand("folder\\file.txt"), vec!["folder\\file.txt"]);
        assert_eq!(expand("folder/.thing"), vec!["folder/.thing"]);
        assert_eq!(
            expand("pages\\home.(aspx, aspx.cs)"),
            vec!["pages\\home.aspx", "pages\\home.aspx.cs"]
        );
    }

    #[test]
    fn test_expand_multi_dot_names() {
        assert_eq!(expand("page.aspx.cs"), vec!["page.aspx.cs"]);
        assert_eq!(
            expand("backup.2016.(old, new)"),
            vec!["backup.2016.old", "backup.2016.new"]
        );
    }

    #[test]
    fn test_expand_multiple_groups() {
        assert_eq!(
            expand("home.(html,js), about.(html,js,css)"),
            vec!["home.html", "home.js", "about.html", "about.js", "about.css"]
        );
    }

    #[test]
    fn test_expand_suppresses_empty_slots_and_duplicates() {
        assert_eq!(expand("file.(txt,txt,,)"), vec!["file.txt"]);
        assert_eq!(expand("file.txt,,file.txt,File.TXT"), vec!["file.txt"]);
    }

    #[test]
    fn test_expand_first_spelling_wins() {
        assert_eq!(expand("README.md, readme.MD, notes.md"), vec!["README.md", "notes.md"]);
    }

    #[test]
    fn test_expand_special_characters() {
        assert_eq!(
            expand("file_@#d+|%.3-2...3^&.txt"),
            vec!["file_@#d+|%.3-2...3^&.txt"]
        );
    }

    #[test]
    fn test_expand_trailing_dot_rejected() {
        assert!(expand("file.").is_empty());
        assert!(expand("file.()").iter().all(|p| !p.ends_with('.')));
    }

    #[test]
    fn test_expand_empty_and_blank_input() {
        assert!(expand("").is_empty());
        assert!(expand("   ").is_empty());
        assert!(expand(",,,").is_empty());
    }

    #[test]
    fn test_expand_empty_group_is_literal_text() {
        assert_eq!(expand("()a"), vec!["()a"]);
        assert_eq!(expand("a(), b"), vec!["a()", "b"]);
    }

    #[test]
    fn test_expand_unterminated_group() {
        assert_eq!(expand("a.(b, c"), vec!["a.b", "a.c"]);
    }

    #[test]
    fn test_expand_text_after_group_starts_new_clause() {
        assert_eq!(expand("a.(b)c, d.e"), vec!["a.b", "c", "d.e"]);
    }

    #[test]
    fn test_expand_group_without_separator() {
        assert_eq!(expand("file(1,2)"), vec!["file1", "file2"]);
    }

    #[test]
    fn test_expand_multibyte_names() {
        assert_eq!(expand("报告.(txt,md)"), vec!["报告.txt", "报告.md"]);
    }

    #[test]
    fn test_segments_literal_clause() {
        let segments = PatternExpander::new().segments("file1.txt");
        assert_eq!(
            segments,
            vec![PathSegment::new("file1", Separator::Dot, "txt", false)]
        );
    }

    #[test]
    fn test_segments_grouped_clause() {
        let segments = PatternExpander::new().segments("pages\\home.(aspx, aspx.cs), license");
        assert_eq!(
            segments,
            vec![
                PathSegment::new("pages\\home", Separator::Dot, "aspx, aspx.cs", true),
                PathSegment::new("license", Separator::None, "", false),
            ]
        );
    }

    #[test]
    fn test_segments_folder_clause() {
        let segments = PatternExpander::new().segments("folder/");
        assert_eq!(
            segments,
            vec![PathSegment::new("folder", Separator::Slash, "", false)]
        );
    }

    #[test]
    fn test_expand_is_deterministic() {
        let input = "home.(html,js), about.(html,js,css), Home.HTML";
        assert_eq!(expand(input), expand(input));
    }
}
