//! Template engine: file-name derivation and token substitution
//!
//! Rendering is literal find-and-replace over a fixed token set, not a
//! template language:
//!
//! | Token | Value |
//! |---|---|
//! | `{namespace}` | effective namespace of the file |
//! | `{classname}` | file name without extension |
//! | `{entity}` | entity name (mapping and service kinds) |
//! | `{pageddto}`, `{defaultdto}`, `{createdto}`, `{updatedto}`, `{interface}` | sibling file names |
//!
//! Tokens a kind does not define are left in place. After substitution every
//! line terminator becomes `\r\n`, and the first cursor marker is removed and
//! its position reported.

use tracing::{debug, warn};

use crate::{
    catalog::{TemplateCatalog, TemplateSource},
    context::GenerationContext,
    error::Result,
    kind::TemplateKind,
    models::{GeneratedFile, RenderedTemplate},
    naming::normalize_line_endings,
};

/// Extension appended to every generated file name
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".cs";

/// Character marking the caret position in a template
pub const DEFAULT_CURSOR_MARKER: char = '$';

/// Renders template kinds against a [`TemplateSource`]
#[derive(Debug, Clone)]
pub struct TemplateEngine<S = TemplateCatalog> {
    source: S,
    output_extension: String,
    cursor_marker: char,
}

impl<S: TemplateSource> TemplateEngine<S> {
    /// Create an engine over `source` with default extension and marker
    pub fn new(source: S) -> Self {
        Self {
            source,
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            cursor_marker: DEFAULT_CURSOR_MARKER,
        }
    }

    /// Use a different output extension
    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = extension.into();
        self
    }

    /// Use a different cursor marker
    pub fn with_cursor_marker(mut self, marker: char) -> Self {
        self.cursor_marker = marker;
        self
    }

    /// Template source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Extension appended to generated file names
    pub fn output_extension(&self) -> &str {
        &self.output_extension
    }

    /// File name for `kind` and `entity`, including the output extension
    pub fn resolve_file_name(&self, kind: TemplateKind, entity: &str) -> String {
        format!("{}{}", kind.file_stem(entity), self.output_extension)
    }

    /// Token/value pairs substituted for `kind`
    pub fn tokens(&self, kind: TemplateKind, context: &GenerationContext) -> Vec<(&'static str, String)> {
        let descriptor = kind.descriptor();
        let entity = context.entity_name.as_str();

        let mut tokens = vec![
            ("{namespace}", context.namespace_for(kind)),
            ("{classname}", kind.file_stem(entity)),
        ];
        if descriptor.substitutes_entity {
            tokens.push(("{entity}", entity.to_string()));
        }
        tokens.extend(
            descriptor
                .sibling_tokens
                .iter()
                .map(|(token, sibling)| (*token, sibling.file_stem(entity))),
        );
        tokens
    }

    /// Render `kind` in `context`
    ///
    /// A kind without a template renders empty content with no cursor hint.
    /// The cursor offset counts characters of the final content.
    pub fn render(&self, kind: TemplateKind, context: &GenerationContext) -> Result<RenderedTemplate> {
        let Some(body) = self.source.template(kind)? else {
            debug!(kind = %kind, "no template for kind; rendering empty content");
            return Ok(RenderedTemplate::empty());
        };

        let tokens = self.tokens(kind, context);
        let finish = |text: &str| normalize_line_endings(&substitute(text, &tokens)).into_owned();

        let rendered = match body.split_once(self.cursor_marker) {
            Some((before, after)) => {
                let mut content = finish(before);
                let cursor_offset = content.chars().count();
                content.push_str(&finish(after));
                RenderedTemplate {
                    content,
                    cursor_offset: Some(cursor_offset),
                }
            }
            None => RenderedTemplate {
                content: finish(&body),
                cursor_offset: None,
            },
        };

        Ok(rendered)
    }

    /// Render `kind`, turning any failure into empty content
    pub fn render_or_empty(&self, kind: TemplateKind, context: &GenerationContext) -> RenderedTemplate {
        match self.render(kind, context) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(kind = %kind, error = %e, "template rendering failed; writing empty file");
                RenderedTemplate::empty()
            }
        }
    }

    /// Resolve the file name and render the content for `kind`
    pub fn generate(&self, kind: TemplateKind, context: &GenerationContext) -> GeneratedFile {
        let rendered = self.render_or_empty(kind, context);
        GeneratedFile {
            kind,
            file_name: self.resolve_file_name(kind, &context.entity_name),
            content: rendered.content,
            cursor_offset: rendered.cursor_offset,
        }
    }
}

/// Replace every occurrence of each token in one left-to-right pass
///
/// Substituted values are never rescanned.
fn substitute(text: &str, tokens: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tokens.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                output.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                output.push('{');
                rest = &tail[1..];
            }
        }
    }

    output.push_str(rest);
    output
}
