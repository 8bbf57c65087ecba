//! End-to-end diff scenarios on small documents.

use pretty_assertions::assert_eq;
use redline_core::{
    AttributedDocument, DiffOp, DiffTag, HighlightRange, ReviewOptions, RichText, Run,
    collect_ranges, diff_documents, diff_text, finalize,
};
use serde_json::{Map, json};

fn ranges(old: &str, new: &str, kept_tag: DiffTag) -> Vec<HighlightRange> {
    collect_ranges(&diff_text(old, new), kept_tag).unwrap().ranges
}

#[test]
fn test_insertion_highlights_right_only() {
    let ops = diff_text("Hello world", "Hello brave world");
    assert_eq!(
        ops,
        vec![
            DiffOp::equal("Hello "),
            DiffOp::insert("brave "),
            DiffOp::equal("world"),
        ]
    );

    assert!(ranges("Hello world", "Hello brave world", DiffTag::Delete).is_empty());
    assert_eq!(
        ranges("Hello world", "Hello brave world", DiffTag::Insert),
        vec![HighlightRange::new(6, 6)]
    );

    let old = AttributedDocument::plain("Hello world");
    let new = AttributedDocument::plain("Hello brave world");
    let view = diff_documents(&old, &new, &ReviewOptions::default()).unwrap();

    assert_eq!(view.left, old);
    assert_eq!(
        view.right.runs(),
        &[
            Run::text("Hello "),
            Run::text("brave ").with_attribute("background", "#e6ffec"),
            Run::text("world"),
        ]
    );
}

#[test]
fn test_replacement_highlights_both_sides() {
    assert_eq!(
        diff_text("abc", "abd"),
        vec![DiffOp::equal("ab"), DiffOp::delete("c"), DiffOp::insert("d")]
    );
    assert_eq!(
        ranges("abc", "abd", DiffTag::Delete),
        vec![HighlightRange::new(2, 1)]
    );
    assert_eq!(
        ranges("abc", "abd", DiffTag::Insert),
        vec![HighlightRange::new(2, 1)]
    );
}

#[test]
fn test_insertion_into_empty_document() {
    assert_eq!(diff_text("", "New"), vec![DiffOp::insert("New")]);

    let old = AttributedDocument::new();
    let new = AttributedDocument::plain("New");
    let view = diff_documents(&old, &new, &ReviewOptions::default()).unwrap();

    assert!(view.left.is_empty());
    assert_eq!(
        view.right.runs(),
        &[Run::text("New").with_attribute("background", "#e6ffec")]
    );
    assert_eq!(
        ranges("", "New", DiffTag::Insert),
        vec![HighlightRange::new(0, 3)]
    );
}

#[test]
fn test_formatting_survives_review_round_trip() {
    let old = AttributedDocument::from_runs([
        Run::text("Senior ").with_attribute("bold", true),
        Run::text("engineer at "),
        Run::text("Acme").with_attribute("link", "https://acme.example"),
        Run::text("\n"),
    ]);
    let new = AttributedDocument::from_runs([
        Run::text("Staff ").with_attribute("bold", true),
        Run::text("engineer at "),
        Run::text("Acme").with_attribute("link", "https://acme.example"),
        Run::text(" since 2020\n"),
    ]);

    let options = ReviewOptions::default();
    let view = diff_documents(&old, &new, &options).unwrap();

    // Bold is kept under the highlight on both sides.
    assert!(view.left.runs().iter().any(|run| {
        run.attribute("bold") == Some(&json!(true))
            && run.attribute("background") == Some(&json!("#ffe6e6"))
    }));
    assert!(view.right.runs().iter().any(|run| {
        run.attribute("bold") == Some(&json!(true))
            && run.attribute("background") == Some(&json!("#e6ffec"))
    }));
    assert!(
        view.right
            .runs()
            .iter()
            .any(|run| run.as_text().is_some_and(|text| text.contains("2020"))
                && run.attribute("background") == Some(&json!("#e6ffec")))
    );

    assert_eq!(finalize(&view.left, &options.highlight), old);
    assert_eq!(finalize(&view.right, &options.highlight), new);
}

#[test]
fn test_embed_counts_as_one_position() {
    let mut image = Map::new();
    image.insert("image".to_string(), json!("avatar.png"));

    let old = AttributedDocument::from_runs([Run::embed(image.clone()), Run::text("Jane\n")]);
    let new = AttributedDocument::from_runs([Run::embed(image.clone()), Run::text("Jane Doe\n")]);

    assert_eq!(old.extract_text(), "\u{0}Jane\n");

    let view = diff_documents(&old, &new, &ReviewOptions::default()).unwrap();
    assert_eq!(
        view.right.runs(),
        &[
            Run::embed(image),
            Run::text("Jane"),
            Run::text(" Doe").with_attribute("background", "#e6ffec"),
            Run::text("\n"),
        ]
    );
}

#[test]
fn test_swapped_embeds_are_indistinguishable() {
    let mut first = Map::new();
    first.insert("image".to_string(), json!("a.png"));
    let mut second = Map::new();
    second.insert("image".to_string(), json!("b.png"));

    let old = AttributedDocument::from_runs([Run::embed(first)]);
    let new = AttributedDocument::from_runs([Run::embed(second)]);

    let view = diff_documents(&old, &new, &ReviewOptions::default()).unwrap();
    assert!(view.stats.is_unchanged());
    assert_eq!(view.right, new);
}
