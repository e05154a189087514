#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # appgen patterns
//!
//! Expands a compact, hand-typed compound pattern into concrete relative file paths.
//!
//! ```
//! use appgen_patterns::expand;
//!
//! let paths = expand("home.(html,js), about.(html,js,css)");
//! assert_eq!(
//!     paths,
//!     vec!["home.html", "home.js", "about.html", "about.js", "about.css"]
//! );
//! ```
//!
//! The expander is a pure function: it never touches the filesystem. Inputs that
//! come from a prompt are cleaned with [`normalize_input`] first, and folder-only
//! entries (those ending in a path separator) are recognized with the helpers in
//! [`input`].

pub mod expander;
pub mod input;
pub mod models;

pub use expander::{expand, ClauseTokenizer, PatternExpander};
pub use input::{
    folder_path, is_folder_only, mark_folder_only, normalize_input, FOLDER_SENTINEL,
};
pub use models::{PathSegment, Separator};
