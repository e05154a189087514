//! Batch orchestration: one pattern in, folders and files out
//!
//! Every expanded entry and every template kind is attempted. A failure is
//! recorded in the report for that file alone and never stops its siblings.

use std::path::{Path, PathBuf};

use appgen_patterns::{folder_path, is_folder_only, mark_folder_only, normalize_input, PatternExpander};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    catalog::{TemplateCatalog, TemplateSource},
    engine::TemplateEngine,
    kind::{KindFolder, TemplateKind},
    models::MaterializeOutcome,
    naming::normalize_entity_name,
    project::{absolutize, ProjectContext},
    writer::FileMaterializer,
};

/// Default name of the sub-folder that receives DTO and mapping files
pub const DEFAULT_DTO_FOLDER: &str = "Dto";

/// What happened to one generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was written
    Created {
        /// Written path
        path: PathBuf,
        /// Character offset of the caret, if the template placed one
        cursor_offset: Option<usize>,
    },
    /// A file already existed and was left untouched
    AlreadyExists {
        /// Existing path
        path: PathBuf,
    },
    /// Dry run: the file would have been written
    WouldCreate {
        /// Target path
        path: PathBuf,
    },
    /// The file could not be written
    Failed {
        /// Target path
        path: PathBuf,
        /// Error description
        reason: String,
    },
}

impl FileOutcome {
    /// Path the outcome refers to
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Created { path, .. }
            | FileOutcome::AlreadyExists { path }
            | FileOutcome::WouldCreate { path }
            | FileOutcome::Failed { path, .. } => path,
        }
    }
}

impl From<MaterializeOutcome> for FileOutcome {
    fn from(outcome: MaterializeOutcome) -> Self {
        match outcome {
            MaterializeOutcome::Created {
                path,
                cursor_offset,
            } => FileOutcome::Created {
                path,
                cursor_offset,
            },
            MaterializeOutcome::AlreadyExists { path } => FileOutcome::AlreadyExists { path },
            MaterializeOutcome::WouldCreate { path } => FileOutcome::WouldCreate { path },
        }
    }
}

/// Outcome of one file of the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Kind rendered
    pub kind: TemplateKind,
    /// Normalized entity name
    pub entity: String,
    /// What happened
    pub outcome: FileOutcome,
}

/// A folder that could not be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderFailure {
    /// Folder path
    pub path: PathBuf,
    /// Error description
    pub reason: String,
}

/// Everything a scaffolding run did, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldReport {
    /// Expanded entries, in expansion order
    pub entries: Vec<String>,
    /// Folders created (or that would be created in a dry run)
    pub folders: Vec<PathBuf>,
    /// Folders that could not be created
    pub failed_folders: Vec<FolderFailure>,
    /// Per-file outcomes
    pub files: Vec<FileReport>,
}

impl ScaffoldReport {
    /// The last file written, which the caller should open
    pub fn last_created(&self) -> Option<&FileReport> {
        self.files
            .iter()
            .rev()
            .find(|report| matches!(report.outcome, FileOutcome::Created { .. }))
    }

    /// Number of files written
    pub fn created_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Created { .. }))
    }

    /// Number of files left untouched because they existed
    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::AlreadyExists { .. }))
    }

    /// Number of files and folders that failed
    pub fn failure_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Failed { .. })) + self.failed_folders.len()
    }

    /// Whether anything failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|report| predicate(&report.outcome)).count()
    }
}

/// Expands a pattern and writes the template set for every entity it names
#[derive(Debug, Clone)]
pub struct Scaffolder<S = TemplateCatalog> {
    engine: TemplateEngine<S>,
    materializer: FileMaterializer,
    project: ProjectContext,
    dto_folder: String,
    expander: PatternExpander,
}

impl<S: TemplateSource> Scaffolder<S> {
    /// Create a scaffolder
    pub fn new(engine: TemplateEngine<S>, materializer: FileMaterializer, project: ProjectContext) -> Self {
        Self {
            engine,
            materializer,
            project,
            dto_folder: DEFAULT_DTO_FOLDER.to_string(),
            expander: PatternExpander::new(),
        }
    }

    /// Use a different DTO sub-folder name
    pub fn with_dto_folder(mut self, dto_folder: impl Into<String>) -> Self {
        self.dto_folder = dto_folder.into();
        self
    }

    /// Project the scaffolder generates into
    pub fn project(&self) -> &ProjectContext {
        &self.project
    }

    /// Expand `raw` and generate everything it names below `target_dir`
    pub async fn run(&self, raw: &str, target_dir: &Path) -> ScaffoldReport {
        let mut report = ScaffoldReport::default();

        let input = normalize_input(raw);
        if input.is_empty() {
            debug!("empty pattern; nothing to generate");
            return report;
        }

        let target = absolutize(target_dir).unwrap_or_else(|_| target_dir.to_path_buf());
        report.entries = self.expander.expand(&input);

        for entry in report.entries.clone() {
            if escapes_target(&entry) {
                warn!(entry = %entry, "entry leaves the target folder; skipped");
                report.failed_folders.push(FolderFailure {
                    path: join_components(&target, &entry),
                    reason: "path leaves the target folder".to_string(),
                });
                continue;
            }

            let entry = mark_folder_only(&entry);
            if is_folder_only(&entry) {
                match folder_path(&entry) {
                    Some(folder) => {
                        let path = join_components(&target, folder);
                        self.create_folder(&path, &mut report).await;
                    }
                    None => debug!(entry = %entry, "folder entry names no folder"),
                }
                continue;
            }

            self.scaffold_entity(&target, &entry, &mut report).await;
        }

        info!(
            entries = report.entries.len(),
            created = report.created_count(),
            skipped = report.skipped_count(),
            failed = report.failure_count(),
            "scaffolding finished"
        );
        report
    }

    async fn scaffold_entity(&self, target: &Path, entry: &str, report: &mut ScaffoldReport) {
        let mut components: Vec<&str> = split_components(entry).collect();
        let Some(raw_entity) = components.pop() else {
            return;
        };
        let entity = normalize_entity_name(raw_entity);
        if entity.is_empty() {
            debug!(entry = %entry, "entry has no entity name");
            return;
        }

        let mut entity_folder = target.to_path_buf();
        entity_folder.extend(components);
        entity_folder.push(&entity);
        let dto_folder = entity_folder.join(&self.dto_folder);

        self.create_folder(&entity_folder, report).await;
        self.create_folder(&dto_folder, report).await;

        for kind in TemplateKind::ALL {
            let dir = match kind.folder() {
                KindFolder::Entity => &entity_folder,
                KindFolder::Dto => &dto_folder,
            };
            let context = self.project.context_for(dir, &entity);
            let file = self.engine.generate(kind, &context);

            let outcome = match self.materializer.write(dir, &file).await {
                Ok(outcome) => {
                    if let MaterializeOutcome::AlreadyExists { path } = &outcome {
                        info!(path = %path.display(), "file already exists; skipped");
                    }
                    FileOutcome::from(outcome)
                }
                Err(e) => {
                    let path = dir.join(&file.file_name);
                    warn!(path = %path.display(), error = %e, "failed to write file");
                    FileOutcome::Failed {
                        path,
                        reason: e.to_string(),
                    }
                }
            };

            report.files.push(FileReport {
                kind,
                entity: entity.clone(),
                outcome,
            });
        }
    }

    async fn create_folder(&self, path: &Path, report: &mut ScaffoldReport) {
        match self.materializer.ensure_folder(path).await {
            Ok(true) => report.folders.push(path.to_path_buf()),
            Ok(false) => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to create folder");
                report.failed_folders.push(FolderFailure {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

fn split_components(entry: &str) -> impl Iterator<Item = &str> {
    entry
        .split(|c: char| c == '/' || c == '\\')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

fn escapes_target(entry: &str) -> bool {
    split_components(entry).any(|part| part == "..")
}

fn join_components(base: &Path, relative: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(split_components(relative));
    path
}
