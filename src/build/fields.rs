// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field extraction: how an item turns into the strings we match against.
//!
//! The builder only ever sees one capability, a [`FieldExtractor`]: item in,
//! ordered list of optional strings out. The `key` option and the "item is
//! its own text" default are thin constructors for that capability, built on
//! the [`SearchText`] trait.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Maps an item to its text fields, in order. `None` is treated as `""`.
pub type FieldExtractor<T> = Box<dyn Fn(&T) -> Vec<Option<String>> + Send + Sync>;

/// Items that can be searched without an explicit extractor.
///
/// `search_text` is the item as a whole (used when no `key` is configured);
/// `field` looks up a named field (used with `key`). Either may be absent.
pub trait SearchText {
    fn search_text(&self) -> Option<Cow<'_, str>>;

    fn field(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl SearchText for str {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl SearchText for String {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl SearchText for Cow<'_, str> {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: SearchText + ?Sized> SearchText for &T {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        (**self).search_text()
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}

impl<T: SearchText> SearchText for Option<T> {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(SearchText::search_text)
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|item| item.field(key))
    }
}

impl SearchText for HashMap<String, String> {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl SearchText for BTreeMap<String, String> {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// JSON strings are their own text; numbers and booleans are stringified;
/// objects answer `field` lookups. Null, arrays and missing keys are absent.
#[cfg(feature = "serde_json")]
impl SearchText for serde_json::Value {
    fn search_text(&self) -> Option<Cow<'_, str>> {
        use serde_json::Value;

        match self {
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            Value::Number(number) => Some(Cow::Owned(number.to_string())),
            Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(SearchText::search_text)
    }
}

/// Extractor that treats each item as a single text field.
pub fn item_extractor<T: SearchText + 'static>() -> FieldExtractor<T> {
    Box::new(|item: &T| vec![item.search_text().map(Cow::into_owned)])
}

/// Extractor that reads the single field `key` from each item.
pub fn key_extractor<T: SearchText + 'static>(key: impl Into<String>) -> FieldExtractor<T> {
    let key = key.into();
    Box::new(move |item: &T| vec![item.field(&key).map(Cow::into_owned)])
}
