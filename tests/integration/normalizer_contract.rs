//! Normalizer output contract across actions and reply shapes.

use content_studio::brief::GenerationAction;
use content_studio::catalog::FallbackCatalog;
use content_studio::normalizer::{FallbackReason, Normalization, ResponseNormalizer};
use content_studio::package::PackageField;

#[test]
fn every_action_falls_back_to_its_own_catalog_entry() {
    for action in GenerationAction::ALL {
        let result = ResponseNormalizer::normalize(None, action);
        assert_eq!(result.package, FallbackCatalog::entry(action));
        assert!(result.package.is_fully_populated());
    }
}

#[test]
fn normalization_is_deterministic() {
    let raw = "```\n{\"hooks\": [\"x\"], \"caption\": 7}\n```";
    let a = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateContent);
    let b = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateContent);
    assert_eq!(a, b);
}

#[test]
fn structured_hook_items_are_coerced_to_text() {
    let raw = r#"{"hooks": [{"text": "Object hook", "style": "question"}, "Plain hook", 42]}"#;
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateHooks);
    assert_eq!(result.package.hooks, vec!["Object hook", "Plain hook", "42"]);
}

#[test]
fn alternate_keys_are_accepted() {
    let raw = r#"{"b_roll_list": ["Wide shot"], "thumbnail_concept": "Big face"}"#;
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateContent);
    assert_eq!(result.package.b_roll_list, vec!["Wide shot"]);
    assert_eq!(result.package.thumbnail_concept, "Big face");
    match result.normalization {
        Normalization::Parsed { substituted } => {
            assert_eq!(
                substituted,
                vec![
                    PackageField::Hooks,
                    PackageField::Script,
                    PackageField::Caption,
                    PackageField::Hashtags,
                ]
            );
        }
        other => panic!("expected parsed, got {other:?}"),
    }
}

#[test]
fn empty_but_well_typed_fields_are_kept() {
    let raw = r#"{"hooks": [], "script": "", "caption": "   "}"#;
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateContent);
    assert!(result.package.hooks.is_empty());
    assert_eq!(result.package.script, "");
    assert_eq!(result.package.caption, "   ");
    assert_eq!(
        result.package.thumbnail_concept,
        FallbackCatalog::scalar(GenerationAction::GenerateContent, PackageField::ThumbnailConcept)
    );
    match result.normalization {
        Normalization::Parsed { substituted } => {
            assert!(!substituted.contains(&PackageField::Hooks));
            assert!(!substituted.contains(&PackageField::Script));
            assert!(!substituted.contains(&PackageField::Caption));
        }
        other => panic!("expected parsed, got {other:?}"),
    }
}

#[test]
fn top_level_array_becomes_hooks() {
    let raw = r#"["Tuesday 9am", "Thursday 7pm"]"#;
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::PostingTimes);
    assert_eq!(result.package.hooks, vec!["Tuesday 9am", "Thursday 7pm"]);
    assert_eq!(
        result.package.caption,
        FallbackCatalog::scalar(GenerationAction::PostingTimes, PackageField::Caption)
    );
}

#[test]
fn object_without_known_fields_falls_back_entirely() {
    let raw = r#"{"answer": "something else"}"#;
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateScript);
    assert_eq!(
        result.package,
        FallbackCatalog::entry(GenerationAction::GenerateScript)
    );
    assert_eq!(
        result.normalization,
        Normalization::Fallback {
            reason: FallbackReason::NoRecognizedFields
        }
    );
}

#[test]
fn chat_prose_is_salvaged_as_script() {
    let raw = "  Try filming your morning routine as a 30-second reel.  ";
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::Chat);
    assert_eq!(result.normalization, Normalization::Salvaged);
    assert_eq!(
        result.package.script,
        "Try filming your morning routine as a 30-second reel."
    );
    assert!(result.package.is_fully_populated());
}

#[test]
fn unterminated_fence_uses_whole_text() {
    let raw = "```json\n{\"hooks\": [\"x\"]}";
    let result = ResponseNormalizer::normalize(Some(raw), GenerationAction::GenerateHooks);
    assert_eq!(
        result.normalization,
        Normalization::Fallback {
            reason: FallbackReason::Unparsable
        }
    );
}

#[test]
fn normalization_serializes_with_kind_tag() {
    let value = serde_json::to_value(Normalization::Parsed {
        substituted: vec![PackageField::BRollList],
    })
    .unwrap();
    assert_eq!(value["kind"], "parsed");
    assert_eq!(value["substituted"][0], "bRollList");
}

#[test]
fn catalog_entries_round_trip_through_the_normalizer() {
    for action in GenerationAction::ALL {
        let entry = FallbackCatalog::entry(action);
        let raw = serde_json::to_string(&entry).unwrap();
        let result = ResponseNormalizer::normalize(Some(&raw), action);
        assert_eq!(result.package, entry);
        assert_eq!(
            result.normalization,
            Normalization::Parsed {
                substituted: vec![]
            }
        );
    }
}
