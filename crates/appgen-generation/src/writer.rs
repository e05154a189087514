//! Writes generated files to disk
//!
//! Files are created only when absent; an existing file is never overwritten.
//! Content is UTF-8, with a byte-order mark unless the file extension is on
//! the no-BOM list.

use std::path::Path;

use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::{
    error::{GenerationError, Result},
    models::{GeneratedFile, MaterializeOutcome},
};

/// Extensions written without a byte-order mark
pub const DEFAULT_NO_BOM_EXTENSIONS: &[&str] = &[".cmd", ".bat", ".json"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Configuration for materialization
#[derive(Debug, Clone)]
pub struct MaterializerConfig {
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
    /// Extensions (with leading dot, any case) written without a BOM
    pub no_bom_extensions: Vec<String>,
}

impl Default for MaterializerConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            no_bom_extensions: DEFAULT_NO_BOM_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

/// Creates generated files and folders
#[derive(Debug, Clone, Default)]
pub struct FileMaterializer {
    config: MaterializerConfig,
}

impl FileMaterializer {
    /// Create a materializer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a materializer with custom configuration
    pub fn with_config(config: MaterializerConfig) -> Self {
        Self { config }
    }

    /// Whether this materializer is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Whether a file at `path` gets a byte-order mark
    pub fn needs_bom(&self, path: &Path) -> bool {
        let extension = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!(".{}", ext),
            None => return true,
        };
        !self
            .config
            .no_bom_extensions
            .iter()
            .any(|listed| listed.eq_ignore_ascii_case(&extension))
    }

    /// Bytes written for `content` at `path`
    pub fn encode(&self, path: &Path, content: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(content.len() + UTF8_BOM.len());
        if self.needs_bom(path) {
            bytes.extend_from_slice(UTF8_BOM);
        }
        bytes.extend_from_slice(content.as_bytes());
        bytes
    }

    /// Write `file` into `dir` unless a file of that name already exists
    pub async fn write(&self, dir: &Path, file: &GeneratedFile) -> Result<MaterializeOutcome> {
        let path = dir.join(&file.file_name);

        if fs::try_exists(&path).await.map_err(|source| GenerationError::WriteFailed {
            path: path.clone(),
            source,
        })? {
            debug!(path = %path.display(), "file exists; leaving it untouched");
            return Ok(MaterializeOutcome::AlreadyExists { path });
        }

        if self.config.dry_run {
            return Ok(MaterializeOutcome::WouldCreate { path });
        }

        fs::create_dir_all(dir)
            .await
            .map_err(|source| GenerationError::WriteFailed {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut handle = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(handle) => handle,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Ok(MaterializeOutcome::AlreadyExists { path });
            }
            Err(source) => return Err(GenerationError::WriteFailed { path, source }),
        };

        let bytes = self.encode(&path, &file.content);
        let written = async {
            handle.write_all(&bytes).await?;
            handle.flush().await
        }
        .await;
        if let Err(source) = written {
            return Err(GenerationError::WriteFailed { path, source });
        }

        debug!(path = %path.display(), bytes = bytes.len(), "file created");
        Ok(MaterializeOutcome::Created {
            path,
            cursor_offset: file.cursor_offset,
        })
    }

    /// Create `path` and its parents; `true` when the folder was new
    pub async fn ensure_folder(&self, path: &Path) -> Result<bool> {
        let exists = fs::try_exists(path)
            .await
            .map_err(|source| GenerationError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        if exists {
            return Ok(false);
        }
        if self.config.dry_run {
            return Ok(true);
        }

        fs::create_dir_all(path)
            .await
            .map_err(|source| GenerationError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "folder created");
        Ok(true)
    }
}
