//! Display string lookup with `{placeholder}` substitution.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Key to template mapping supplied by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<String, String>);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.0.insert(key.into(), template.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Read-only view over a shared [`Dictionary`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translator {
    dictionary: Arc<Dictionary>,
}

enum Piece<'a> {
    Template(&'a str),
    Value(String),
}

impl Translator {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Looks up `key` and substitutes `variables` into it.
    ///
    /// A missing key renders as the key itself. Each variable replaces only
    /// the first `{name}` marker found in the template text; markers without
    /// a matching variable are left as they are. Substituted values are never
    /// searched for markers.
    pub fn translate(&self, key: &str, variables: &[(&str, &dyn Display)]) -> String {
        let template = self.dictionary.get(key).unwrap_or(key);
        let mut pieces = vec![Piece::Template(template)];

        for (name, value) in variables {
            let marker = format!("{{{name}}}");
            let hit = pieces
                .iter()
                .enumerate()
                .find_map(|(idx, piece)| match piece {
                    Piece::Template(text) => text.find(&marker).map(|pos| (idx, *text, pos)),
                    Piece::Value(_) => None,
                });
            if let Some((idx, text, pos)) = hit {
                pieces.splice(
                    idx..=idx,
                    [
                        Piece::Template(&text[..pos]),
                        Piece::Value(value.to_string()),
                        Piece::Template(&text[pos + marker.len()..]),
                    ],
                );
            }
        }

        pieces
            .iter()
            .map(|piece| match piece {
                Piece::Template(text) => *text,
                Piece::Value(value) => value.as_str(),
            })
            .collect()
    }

    /// Returns the dictionary entry for `key`, or `fallback` when absent.
    pub fn lookup_or(&self, key: &str, fallback: &str) -> String {
        self.dictionary.get(key).unwrap_or(fallback).to_string()
    }
}
