//! Canonical content package returned to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six-field output of every generation. Every field is always present; only the
/// provider can make one empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPackage {
    pub hooks: Vec<String>,
    pub script: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub b_roll_list: Vec<String>,
    pub thumbnail_concept: String,
}

/// Field selector, used for per-field fallback bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PackageField {
    Hooks,
    Script,
    Caption,
    Hashtags,
    BRollList,
    ThumbnailConcept,
}

impl PackageField {
    pub const ALL: [PackageField; 6] = [
        PackageField::Hooks,
        PackageField::Script,
        PackageField::Caption,
        PackageField::Hashtags,
        PackageField::BRollList,
        PackageField::ThumbnailConcept,
    ];

    /// Canonical JSON key.
    pub fn key(self) -> &'static str {
        match self {
            PackageField::Hooks => "hooks",
            PackageField::Script => "script",
            PackageField::Caption => "caption",
            PackageField::Hashtags => "hashtags",
            PackageField::BRollList => "bRollList",
            PackageField::ThumbnailConcept => "thumbnailConcept",
        }
    }

    /// Keys accepted from provider output, canonical key first.
    pub fn accepted_keys(self) -> &'static [&'static str] {
        match self {
            PackageField::Hooks => &["hooks"],
            PackageField::Script => &["script"],
            PackageField::Caption => &["caption"],
            PackageField::Hashtags => &["hashtags"],
            PackageField::BRollList => &["bRollList", "brollList", "b_roll_list"],
            PackageField::ThumbnailConcept => &["thumbnailConcept", "thumbnail_concept"],
        }
    }

    pub fn is_sequence(self) -> bool {
        matches!(
            self,
            PackageField::Hooks | PackageField::Hashtags | PackageField::BRollList
        )
    }

    /// Sub-field holding the text of a structured sequence item.
    pub fn item_text_key(self) -> Option<&'static str> {
        match self {
            PackageField::Hooks => Some("text"),
            PackageField::Hashtags => Some("tag"),
            PackageField::BRollList => Some("shot"),
            _ => None,
        }
    }
}

impl fmt::Display for PackageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl ContentPackage {
    pub fn sequence(&self, field: PackageField) -> Option<&[String]> {
        match field {
            PackageField::Hooks => Some(&self.hooks),
            PackageField::Hashtags => Some(&self.hashtags),
            PackageField::BRollList => Some(&self.b_roll_list),
            _ => None,
        }
    }

    pub fn scalar(&self, field: PackageField) -> Option<&str> {
        match field {
            PackageField::Script => Some(&self.script),
            PackageField::Caption => Some(&self.caption),
            PackageField::ThumbnailConcept => Some(&self.thumbnail_concept),
            _ => None,
        }
    }

    pub(crate) fn set_sequence(&mut self, field: PackageField, items: Vec<String>) {
        match field {
            PackageField::Hooks => self.hooks = items,
            PackageField::Hashtags => self.hashtags = items,
            PackageField::BRollList => self.b_roll_list = items,
            _ => {}
        }
    }

    pub(crate) fn set_scalar(&mut self, field: PackageField, value: String) {
        match field {
            PackageField::Script => self.script = value,
            PackageField::Caption => self.caption = value,
            PackageField::ThumbnailConcept => self.thumbnail_concept = value,
            _ => {}
        }
    }

    /// True when no field is empty. Catalog entries always satisfy this; provider output
    /// need not.
    pub fn is_fully_populated(&self) -> bool {
        PackageField::ALL.into_iter().all(|field| match field {
            f if f.is_sequence() => self.sequence(f).is_some_and(|s| !s.is_empty()),
            f => self.scalar(f).is_some_and(|s| !s.trim().is_empty()),
        })
    }
}
