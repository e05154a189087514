//! Project discovery: root folder and configured root namespace
//!
//! The project root is the nearest ancestor of the target folder that holds a
//! `*.csproj` file or an `appgen.toml`. The root namespace comes from the
//! project file's `<RootNamespace>` element, falling back to the project file
//! name the way the IDE does.

use std::{
    env, fs, io,
    path::{Component, Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::{context::GenerationContext, error::Result};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "appgen.toml";

/// Extension of project files that define a root namespace
pub const PROJECT_FILE_EXTENSION: &str = "csproj";

static ROOT_NAMESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<RootNamespace>\s*(.*?)\s*</RootNamespace>")
        .expect("root namespace pattern is valid")
});

/// Root folder and namespace of the project files are generated into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    root_namespace: Option<String>,
}

impl ProjectContext {
    /// Create a context for `root` with no namespace
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            root_namespace: None,
        }
    }

    /// Replace the root namespace
    pub fn with_root_namespace(mut self, root_namespace: Option<String>) -> Self {
        self.root_namespace = root_namespace.filter(|ns| !ns.trim().is_empty());
        self
    }

    /// Find the project enclosing `start`
    ///
    /// Falls back to `start` itself, without a namespace, when no ancestor
    /// holds a project file.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = absolutize(start)?;

        for dir in start.ancestors() {
            let project_file = find_project_file(dir);
            let has_config = dir.join(PROJECT_CONFIG_FILE).is_file();
            if project_file.is_none() && !has_config {
                continue;
            }

            let root_namespace = project_file.as_deref().and_then(read_root_namespace);
            debug!(
                root = %dir.display(),
                namespace = ?root_namespace,
                "discovered project root"
            );
            return Ok(Self {
                root: dir.to_path_buf(),
                root_namespace,
            });
        }

        debug!(root = %start.display(), "no project file found; using target folder as root");
        Ok(Self::new(start))
    }

    /// Use `root` as the project root without searching its ancestors
    ///
    /// The namespace is read from a project file directly inside `root`.
    pub fn at(root: &Path) -> Result<Self> {
        let root = absolutize(root)?;
        let root_namespace = find_project_file(&root)
            .as_deref()
            .and_then(read_root_namespace);
        Ok(Self {
            root,
            root_namespace,
        })
    }

    /// Project root folder
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configured root namespace
    pub fn root_namespace(&self) -> Option<&str> {
        self.root_namespace.as_deref()
    }

    /// `folder` relative to the project root, `/`-separated
    ///
    /// `None` when `folder` is the root itself or lies outside it.
    pub fn relative_folder(&self, folder: &Path) -> Option<String> {
        let relative = folder.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }

    /// Generation context for an entity rendered into `folder`
    pub fn context_for(&self, folder: &Path, entity_name: &str) -> GenerationContext {
        GenerationContext {
            root_namespace: self.root_namespace.clone(),
            relative_folder: self.relative_folder(folder),
            entity_name: entity_name.to_string(),
        }
    }
}

/// Make `path` absolute against the current directory without touching the filesystem
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn find_project_file(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_FILE_EXTENSION))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

/// Root namespace declared by a project file
///
/// Uses `<RootNamespace>` when present and non-empty, otherwise the file stem.
pub fn read_root_namespace(project_file: &Path) -> Option<String> {
    match fs::read_to_string(project_file) {
        Ok(content) => {
            if let Some(namespace) = ROOT_NAMESPACE
                .captures(&content)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().trim())
                .filter(|ns| !ns.is_empty())
            {
                return Some(namespace.to_string());
            }
        }
        Err(e) => {
            warn!(path = %project_file.display(), error = %e, "failed to read project file");
        }
    }

    project_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
