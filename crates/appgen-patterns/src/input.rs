//! Raw prompt input handling and folder-only entries
//!
//! An expanded entry that ends in a path separator asks for a folder and no
//! file. Such entries are tagged with [`FOLDER_SENTINEL`] so later stages can
//! route them to folder creation instead of template rendering.

use std::path::MAIN_SEPARATOR;

/// Suffix that marks an entry as "create folder, no file"
pub const FOLDER_SENTINEL: &str = "__dummy__";

fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Clean raw prompt input for expansion using the host separator
pub fn normalize_input(raw: &str) -> String {
    normalize_input_with(raw, MAIN_SEPARATOR)
}

/// Clean raw prompt input for expansion
///
/// Surrounding whitespace and leading path separators are removed, and every
/// `/` or `\` becomes `separator`.
pub fn normalize_input_with(raw: &str, separator: char) -> String {
    raw.trim()
        .trim_start_matches(is_path_separator)
        .chars()
        .map(|c| if is_path_separator(c) { separator } else { c })
        .collect()
}

/// Append [`FOLDER_SENTINEL`] to entries that end in a path separator
pub fn mark_folder_only(entry: &str) -> String {
    if entry.ends_with(is_path_separator) {
        format!("{}{}", entry, FOLDER_SENTINEL)
    } else {
        entry.to_string()
    }
}

/// Whether `entry` was marked folder-only
pub fn is_folder_only(entry: &str) -> bool {
    entry.ends_with(FOLDER_SENTINEL)
}

/// Folder path of a folder-only entry, without sentinel or trailing separators
///
/// Returns `None` for entries that are not folder-only or that name no folder.
pub fn folder_path(entry: &str) -> Option<&str> {
    let folder = entry
        .strip_suffix(FOLDER_SENTINEL)?
        .trim_end_matches(is_path_separator);
    if folder.is_empty() {
        None
    } else {
        Some(folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_separators() {
        assert_eq!(normalize_input_with("  /\\folder/file.txt ", '\\'), "folder\\file.txt");
        assert_eq!(normalize_input_with("\\a\\b", '/'), "a/b");
    }

    #[test]
    fn test_normalize_keeps_inner_text() {
        assert_eq!(normalize_input_with("home.(html, js)", '/'), "home.(html, js)");
    }

    #[test]
    fn test_mark_folder_only() {
        assert_eq!(mark_folder_only("folder/"), "folder/__dummy__");
        assert_eq!(mark_folder_only("folder\\"), "folder\\__dummy__");
        assert_eq!(mark_folder_only("file.txt"), "file.txt");
    }

    #[test]
    fn test_is_folder_only() {
        assert!(is_folder_only(&mark_folder_only("a/b/")));
        assert!(!is_folder_only("a/b"));
    }

    #[test]
    fn test_folder_path() {
        assert_eq!(folder_path("a/b/__dummy__"), Some("a/b"));
        assert_eq!(folder_path("a\\__dummy__"), Some("a"));
        assert_eq!(folder_path("/__dummy__"), None);
        assert_eq!(folder_path("a/b"), None);
    }
}
