//! Accessor name to column label mapping
//!
//! Derives an identifier-friendly key for every column label by replacing
//! spaces with a filler string, and keeps the association in column order.

use crate::constants::{IDENTIFIER_PATTERN, SHADOWED_INTEGER_PREFIX, SPACE};
use crate::models::{ColumnLabel, LabelKind};
use crate::{Error, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::debug;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"));

/// Whether `name` can be typed as a plain identifier
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Ordered mapping from accessor name to original column label
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    /// Accessor names in column order
    keys: Vec<String>,

    /// Original labels, parallel to `keys`
    labels: Vec<ColumnLabel>,

    /// Accessor name to position in `keys`
    key_to_index: HashMap<String, usize>,

    /// Classification of the labels the mapping was built from
    kind: LabelKind,
}

impl ColumnMapping {
    /// Build the mapping for `columns`
    ///
    /// Non-textual label sequences are identity-mapped and `filler` is
    /// ignored. Text labels keep their own name as key; an integer label whose
    /// display form is also a text label gets `_` prepended until it is free. With textual labels and no filler, labels containing a space
    /// are left out. Otherwise every space is replaced by `filler`, and two
    /// labels landing on the same key is a [`Error::FillerCollision`].
    pub fn build(columns: &[ColumnLabel], filler: Option<&str>) -> Result<Self> {
        let kind = LabelKind::classify(columns);
        let mut mapping = Self::empty(kind);

        match (kind, filler) {
            (LabelKind::OpaqueLabels, _) => {
                let texts: HashSet<&str> =
                    columns.iter().filter_map(ColumnLabel::as_text).collect();
                for label in columns {
                    mapping.insert(opaque_key(label, &texts), label.clone());
                }
            }
            (LabelKind::AllStringLabels, None) => {
                for label in columns {
                    if let Some(name) = label.as_text() {
                        if !name.contains(SPACE) {
                            mapping.insert(name.to_string(), label.clone());
                        }
                    }
                }
            }
            (LabelKind::AllStringLabels, Some(filler)) => {
                for label in columns {
                    if let Some(name) = label.as_text() {
                        mapping.insert(sanitize(name, filler), label.clone());
                    }
                }
                if mapping.len() < columns.len() {
                    return Err(Error::filler_collision(filler));
                }
            }
        }

        debug!(
            "Built column mapping: {} of {} columns accessible ({:?}, filler: {:?})",
            mapping.len(),
            columns.len(),
            kind,
            filler
        );

        Ok(mapping)
    }

    fn empty(kind: LabelKind) -> Self {
        Self {
            keys: Vec::new(),
            labels: Vec::new(),
            key_to_index: HashMap::new(),
            kind,
        }
    }

    /// Insert unless the key is already taken; the first label wins
    fn insert(&mut self, key: String, label: ColumnLabel) {
        if self.key_to_index.contains_key(&key) {
            return;
        }
        self.key_to_index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.labels.push(label);
    }

    /// Original label for an accessor name
    pub fn get(&self, key: &str) -> Option<&ColumnLabel> {
        self.key_to_index
            .get(key)
            .and_then(|&index| self.labels.get(index))
    }

    /// Check if an accessor name exists in the mapping
    pub fn contains_key(&self, key: &str) -> bool {
        self.key_to_index.contains_key(key)
    }

    /// Accessor names in column order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// (accessor name, original label) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnLabel)> {
        self.keys.iter().map(String::as_str).zip(self.labels.iter())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Classification of the labels the mapping was built from
    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    /// Accessor names that still are not plain identifiers
    pub fn non_identifier_keys(&self) -> Vec<&str> {
        self.keys().filter(|key| !is_identifier(key)).collect()
    }
}

/// Key of a label in a sequence containing non-textual labels
fn opaque_key(label: &ColumnLabel, texts: &HashSet<&str>) -> String {
    match label {
        ColumnLabel::Text(name) => name.clone(),
        ColumnLabel::Integer(value) => {
            let mut key = value.to_string();
            while texts.contains(key.as_str()) {
                key.insert(0, SHADOWED_INTEGER_PREFIX);
            }
            key
        }
    }
}

/// Replace every space in `name` with `filler`
pub fn sanitize(name: &str, filler: &str) -> String {
    name.replace(SPACE, filler)
}
