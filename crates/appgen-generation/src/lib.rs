#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # appgen generation
//!
//! Turns entity names into a fixed set of application-service scaffolding
//! files. Each [`TemplateKind`] derives its file name from the entity name and
//! renders its template by literal token substitution.
//!
//! ```
//! use appgen_generation::{GenerationContext, TemplateCatalog, TemplateEngine, TemplateKind};
//!
//! let catalog = TemplateCatalog::from_bodies([(
//!     TemplateKind::Interface,
//!     "namespace {namespace}\n{\n    public interface {classname} {}\n}",
//! )]);
//! let engine = TemplateEngine::new(catalog);
//! let context = GenerationContext::new("Book").with_root_namespace("Acme");
//!
//! let file = engine.generate(TemplateKind::Interface, &context);
//! assert_eq!(file.file_name, "IBookAppService.cs");
//! assert!(file.content.starts_with("namespace Acme\r\n"));
//! ```
//!
//! [`Scaffolder`] drives a whole batch: it expands a pattern, creates the entity
//! folders and writes every kind through a [`FileMaterializer`].

pub mod catalog;
pub mod context;
pub mod engine;
pub mod error;
pub mod kind;
pub mod models;
pub mod naming;
pub mod project;
pub mod scaffold;
pub mod writer;

pub use catalog::{TemplateCatalog, TemplateSource};
pub use context::GenerationContext;
pub use engine::{TemplateEngine, DEFAULT_CURSOR_MARKER, DEFAULT_OUTPUT_EXTENSION};
pub use error::{GenerationError, Result};
pub use kind::{FileNamePattern, KindFolder, TemplateDescriptor, TemplateKind};
pub use models::{GeneratedFile, MaterializeOutcome, RenderedTemplate};
pub use naming::{effective_namespace, normalize_entity_name, normalize_line_endings, sanitize_namespace};
pub use project::{ProjectContext, PROJECT_CONFIG_FILE};
pub use scaffold::{FileOutcome, FileReport, FolderFailure, ScaffoldReport, Scaffolder, DEFAULT_DTO_FOLDER};
pub use writer::{FileMaterializer, MaterializerConfig, DEFAULT_NO_BOM_EXTENSIONS};
