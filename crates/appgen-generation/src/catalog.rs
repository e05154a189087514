//! Template catalog
//!
//! The catalog is built once from a directory holding one `{Kind}.txt` file per
//! template kind and is read-only afterwards. The engine reads bodies through
//! the [`TemplateSource`] trait so tests can hand it an in-memory catalog.

use std::{
    borrow::Cow,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{
    error::{GenerationError, Result},
    kind::TemplateKind,
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Provides template bodies by kind
pub trait TemplateSource: Send + Sync {
    /// Body for `kind`, or `None` when no template exists for it
    fn template(&self, kind: TemplateKind) -> Result<Option<Cow<'_, str>>>;
}

/// Immutable set of template bodies keyed by kind
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    bodies: HashMap<TemplateKind, String>,
    root: Option<PathBuf>,
}

impl TemplateCatalog {
    /// Extension of catalog files
    pub const DEFAULT_EXTENSION: &'static str = ".txt";

    /// A catalog with no templates
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from in-memory bodies
    pub fn from_bodies<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = (TemplateKind, S)>,
        S: Into<String>,
    {
        Self {
            bodies: bodies
                .into_iter()
                .map(|(kind, body)| (kind, body.into()))
                .collect(),
            root: None,
        }
    }

    /// Load a catalog from `dir` using [`Self::DEFAULT_EXTENSION`]
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_extension(dir, Self::DEFAULT_EXTENSION)
    }

    /// Load a catalog from `dir`, searching subdirectories too
    ///
    /// A file belongs to a kind when its name equals `{identifier}{extension}`
    /// ignoring case. The first match in file-name order wins. A missing
    /// directory yields an empty catalog; unreadable files are logged and
    /// skipped.
    pub fn load_with_extension(dir: &Path, extension: &str) -> Result<Self> {
        let mut catalog = Self {
            bodies: HashMap::new(),
            root: Some(dir.to_path_buf()),
        };

        if !dir.exists() {
            warn!(dir = %dir.display(), "template directory not found; all templates render empty");
            return Ok(catalog);
        }
        if !dir.is_dir() {
            return Err(GenerationError::InvalidTemplateDirectory(dir.to_path_buf()));
        }

        let expected: Vec<(TemplateKind, String)> = TemplateKind::ALL
            .into_iter()
            .map(|kind| (kind, format!("{}{}", kind.identifier(), extension)))
            .collect();

        let entries = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable template entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file());

        for entry in entries {
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(kind) = expected
                .iter()
                .find(|(kind, name)| {
                    !catalog.bodies.contains_key(kind) && name.eq_ignore_ascii_case(file_name)
                })
                .map(|(kind, _)| *kind)
            else {
                continue;
            };

            match fs::read_to_string(entry.path()) {
                Ok(body) => {
                    debug!(kind = %kind, path = %entry.path().display(), "loaded template");
                    let body = if body.starts_with(BYTE_ORDER_MARK) {
                        body[BYTE_ORDER_MARK.len_utf8()..].to_string()
                    } else {
                        body
                    };
                    catalog.bodies.insert(kind, body);
                }
                Err(source) => {
                    let error = GenerationError::TemplateRead {
                        path: entry.path().to_path_buf(),
                        source,
                    };
                    warn!(kind = %kind, error = %error, "treating template as missing");
                }
            }
        }

        debug!(
            dir = %dir.display(),
            templates = catalog.bodies.len(),
            "template catalog loaded"
        );
        Ok(catalog)
    }

    /// Body for `kind`
    pub fn body(&self, kind: TemplateKind) -> Option<&str> {
        self.bodies.get(&kind).map(String::as_str)
    }

    /// Kinds that have a template, in generation order
    pub fn kinds(&self) -> Vec<TemplateKind> {
        TemplateKind::ALL
            .into_iter()
            .filter(|kind| self.bodies.contains_key(kind))
            .collect()
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog holds no templates
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Directory the catalog was loaded from
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

impl TemplateSource for TemplateCatalog {
    fn template(&self, kind: TemplateKind) -> Result<Option<Cow<'_, str>>> {
        Ok(self.body(kind).map(Cow::Borrowed))
    }
}

impl TemplateSource for HashMap<TemplateKind, String> {
    fn template(&self, kind: TemplateKind) -> Result<Option<Cow<'_, str>>> {
        Ok(self.get(&kind).map(|body| Cow::Borrowed(body.as_str())))
    }
}
