//! Response Normalizer
//!
//! Turns raw provider text into a [`ContentPackage`]. The normalizer never fails: a
//! missing response or unparsable text yields the catalog entry for the action, and
//! structured output that only partially matches the schema has its bad fields
//! replaced from the catalog one by one. Well-typed values are kept as sent, empty
//! ones included.

pub mod extract;

use crate::brief::GenerationAction;
use crate::catalog::FallbackCatalog;
use crate::package::{ContentPackage, PackageField};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Why the whole catalog entry was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The provider call failed; there was no text at all.
    NoResponse,
    /// The text was not a JSON object or array.
    Unparsable,
    /// The text parsed, but none of the package fields were usable.
    NoRecognizedFields,
}

/// How the returned package was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalization {
    /// Structured output parsed. `substituted` lists fields taken from the catalog.
    Parsed { substituted: Vec<PackageField> },
    /// Unstructured prose kept as the script of a free-form action.
    Salvaged,
    /// Catalog entry returned wholesale.
    Fallback { reason: FallbackReason },
}

impl Normalization {
    /// True when the package carries text produced by the provider.
    pub fn has_live_content(&self) -> bool {
        !matches!(self, Normalization::Fallback { .. })
    }
}

/// Package plus the record of how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPackage {
    pub package: ContentPackage,
    pub normalization: Normalization,
}

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Normalize raw provider text (or its absence) for the given action.
    pub fn normalize(raw: Option<&str>, action: GenerationAction) -> NormalizedPackage {
        let Some(raw) = raw else {
            debug!(action = %action, "No provider text, using catalog entry");
            return fallback(action, FallbackReason::NoResponse);
        };

        let candidate = extract::candidate(raw);
        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => from_object(&map, action),
            Ok(Value::Array(items)) => from_array(&items, action),
            Ok(_) | Err(_) => unparsable(candidate, action),
        }
    }
}

fn fallback(action: GenerationAction, reason: FallbackReason) -> NormalizedPackage {
    NormalizedPackage {
        package: FallbackCatalog::entry(action),
        normalization: Normalization::Fallback { reason },
    }
}

fn unparsable(candidate: &str, action: GenerationAction) -> NormalizedPackage {
    if action.is_free_form() && !candidate.is_empty() {
        debug!(action = %action, chars = candidate.len(), "Keeping unstructured text as script");
        let mut package = FallbackCatalog::entry(action);
        package.script = candidate.to_string();
        return NormalizedPackage {
            package,
            normalization: Normalization::Salvaged,
        };
    }
    debug!(action = %action, "Provider text is not structured, using catalog entry");
    fallback(action, FallbackReason::Unparsable)
}

/// A bare array is the action's primary sequence (hooks, or posting slots).
fn from_array(items: &[Value], action: GenerationAction) -> NormalizedPackage {
    let primary = PackageField::Hooks;
    let mut package = ContentPackage::default();
    let mut substituted = Vec::new();
    for field in PackageField::ALL {
        if field == primary {
            package.set_sequence(field, coerce_items(items, field));
        } else {
            substitute(&mut package, field, action);
            substituted.push(field);
        }
    }
    NormalizedPackage {
        package,
        normalization: Normalization::Parsed { substituted },
    }
}

fn from_object(map: &Map<String, Value>, action: GenerationAction) -> NormalizedPackage {
    let mut package = ContentPackage::default();
    let mut substituted = Vec::new();

    for field in PackageField::ALL {
        let value = field.accepted_keys().iter().find_map(|key| map.get(*key));
        match value {
            Some(Value::Array(items)) if field.is_sequence() => {
                package.set_sequence(field, coerce_items(items, field));
            }
            Some(Value::String(text)) if !field.is_sequence() => {
                package.set_scalar(field, text.clone());
            }
            _ => {
                substitute(&mut package, field, action);
                substituted.push(field);
            }
        }
    }

    if substituted.len() == PackageField::ALL.len() {
        debug!(action = %action, "No usable fields in structured output");
        return fallback(action, FallbackReason::NoRecognizedFields);
    }
    if !substituted.is_empty() {
        debug!(action = %action, substituted = ?substituted, "Substituted catalog fields");
    }
    if !package.is_fully_populated() {
        debug!(action = %action, "Provider returned empty fields");
    }
    NormalizedPackage {
        package,
        normalization: Normalization::Parsed { substituted },
    }
}

fn substitute(package: &mut ContentPackage, field: PackageField, action: GenerationAction) {
    if field.is_sequence() {
        package.set_sequence(field, FallbackCatalog::sequence(action, field));
    } else {
        package.set_scalar(field, FallbackCatalog::scalar(action, field));
    }
}

/// Coerce every element to text; nothing is dropped.
fn coerce_items(items: &[Value], field: PackageField) -> Vec<String> {
    items.iter().map(|item| coerce_item(item, field)).collect()
}

fn coerce_item(item: &Value, field: PackageField) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Object(map) => field
            .item_text_key()
            .and_then(|key| map.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| item.to_string()),
        other => other.to_string(),
    }
}
