//! Naming helpers shared by the template engine and the scaffolder

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::TemplateKind;

/// Namespace used when the project configures none
pub const DEFAULT_NAMESPACE: &str = "MyNamespace";

/// Canonical line terminator of rendered content
pub const LINE_ENDING: &str = "\r\n";

static LINE_TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\n\r|\n|\r").expect("line terminator pattern is valid"));

/// Lower-case the input, then upper-case its first character
///
/// `book` and `BOOK` both become `Book`; `orderItem` becomes `Orderitem`.
pub fn normalize_entity_name(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a relative folder path into dot-joined namespace segments
///
/// Periods, spaces and dashes are removed, other characters that cannot
/// appear in an identifier are dropped, and a segment starting with a digit
/// gets a leading underscore.
pub fn sanitize_namespace(relative: &str) -> String {
    relative
        .split(|c: char| c == '/' || c == '\\')
        .filter_map(|segment| {
            let cleaned: String = segment
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if cleaned.is_empty() {
                None
            } else if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
                Some(format!("_{}", cleaned))
            } else {
                Some(cleaned)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Namespace a file of `kind` receives
///
/// Starts from `root_namespace` (or [`DEFAULT_NAMESPACE`]), appends the
/// sanitized relative folder, and appends `.Dto` for DTO kinds unless the
/// namespace already ends with it.
pub fn effective_namespace(
    root_namespace: Option<&str>,
    relative_folder: Option<&str>,
    kind: TemplateKind,
) -> String {
    let mut namespace = match root_namespace.map(str::trim) {
        Some(root) if !root.is_empty() => root.to_string(),
        _ => DEFAULT_NAMESPACE.to_string(),
    };

    if let Some(relative) = relative_folder {
        let suffix = sanitize_namespace(relative);
        if !suffix.is_empty() {
            namespace.push('.');
            namespace.push_str(&suffix);
        }
    }

    if kind.is_dto() && !namespace.ends_with(".Dto") {
        namespace.push_str(".Dto");
    }

    namespace
}

/// Rewrite every `\r\n`, `\n\r`, `\n` and `\r` to [`LINE_ENDING`]
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    LINE_TERMINATOR.replace_all(content, LINE_ENDING)
}
