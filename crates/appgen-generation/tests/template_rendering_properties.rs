//! Property-based tests for file-name derivation and template rendering
//!
//! Properties:
//! - every kind derives a non-empty file name for any entity name
//! - every token a kind defines is gone from its rendered output
//! - rendered output only ever contains `\r\n` line terminators
//! - the cursor offset points at the end of the rendered text before the marker

use appgen_generation::{
    normalize_line_endings, GenerationContext, TemplateCatalog, TemplateEngine, TemplateKind,
};
use proptest::prelude::*;

/// Strategy for generating entity names
fn entity_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z0-9]{0,12}".prop_map(|s| s.to_string())
}

/// Strategy for picking a template kind
fn kind_strategy() -> impl Strategy<Value = TemplateKind> {
    prop::sample::select(TemplateKind::ALL.to_vec())
}

/// Strategy for text that holds neither tokens nor cursor markers
fn plain_text_strategy() -> impl Strategy<Value = String> {
    r"[a-zA-Z0-9 ;:.\r\n]{0,24}".prop_map(|s| s.to_string())
}

/// Strategy for a template body mixing plain text and the kind's tokens
fn body_strategy(tokens: Vec<&'static str>) -> impl Strategy<Value = String> {
    prop::collection::vec(
        (plain_text_strategy(), prop::sample::select(tokens)),
        1..6,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(text, token)| format!("{}{}", text, token))
            .collect::<String>()
    })
}

fn kind_and_body() -> impl Strategy<Value = (TemplateKind, String)> {
    kind_strategy().prop_flat_map(|kind| {
        let engine = TemplateEngine::new(TemplateCatalog::empty());
        let tokens: Vec<&'static str> = engine
            .tokens(kind, &GenerationContext::new("X"))
            .into_iter()
            .map(|(token, _)| token)
            .collect();
        (Just(kind), body_strategy(tokens))
    })
}

fn only_crlf(content: &str) -> bool {
    !content.replace("\r\n", "").contains(|c: char| c == '\r' || c == '\n')
}

proptest! {
    /// Property: file-name derivation is total and non-empty
    #[test]
    fn prop_file_name_is_total(entity in entity_strategy(), kind in kind_strategy()) {
        let engine = TemplateEngine::new(TemplateCatalog::empty());
        let file_name = engine.resolve_file_name(kind, &entity);

        prop_assert!(!file_name.is_empty());
        prop_assert!(file_name.ends_with(".cs"));
        prop_assert!(file_name.contains(&entity));
    }

    /// Property: the seven kinds never share a file name
    #[test]
    fn prop_file_names_are_distinct(entity in entity_strategy()) {
        let engine = TemplateEngine::new(TemplateCatalog::empty());
        let mut names: Vec<String> = TemplateKind::ALL
            .iter()
            .map(|kind| engine.resolve_file_name(*kind, &entity))
            .collect();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), TemplateKind::ALL.len());
    }

    /// Property: no token the kind defines survives rendering
    #[test]
    fn prop_defined_tokens_are_eliminated(
        (kind, body) in kind_and_body(),
        entity in entity_strategy(),
    ) {
        let engine = TemplateEngine::new(TemplateCatalog::from_bodies([(kind, body)]));
        let context = GenerationContext::new(entity).with_root_namespace("Acme");

        let rendered = engine.render(kind, &context).unwrap();
        for (token, _) in engine.tokens(kind, &context) {
            prop_assert!(!rendered.content.contains(token), "{} left in {:?}", token, rendered.content);
        }
    }

    /// Property: rendered line terminators are all `\r\n`
    #[test]
    fn prop_line_endings_normalized(body in plain_text_strategy(), kind in kind_strategy()) {
        let engine = TemplateEngine::new(TemplateCatalog::from_bodies([(kind, body)]));
        let rendered = engine.render(kind, &GenerationContext::new("Book")).unwrap();

        prop_assert!(only_crlf(&rendered.content));
        prop_assert_eq!(rendered.cursor_offset, None);
    }

    /// Property: the cursor offset is the rendered length of the text before the marker
    #[test]
    fn prop_cursor_offset_matches_prefix(
        before in plain_text_strategy(),
        after in plain_text_strategy(),
    ) {
        let body = format!("{}${}", before, after);
        let engine = TemplateEngine::new(TemplateCatalog::from_bodies([(TemplateKind::Class, body)]));
        let rendered = engine.render(TemplateKind::Class, &GenerationContext::new("Book")).unwrap();

        let expected_prefix = normalize_line_endings(&before).into_owned();
        let offset = rendered.cursor_offset.unwrap();
        prop_assert_eq!(offset, expected_prefix.chars().count());
        prop_assert!(rendered.content.starts_with(&expected_prefix));
        prop_assert!(!rendered.content.contains('$'));
    }
}
