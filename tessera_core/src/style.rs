// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered style property maps.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A style property name, usually a `'static` literal from the capability
/// table.
pub type StyleKey = Cow<'static, str>;

/// A set of CSS property changes applied to an element in one step.
///
/// Keys are kept in a deterministic order so the derived
/// `transition-property` value is stable. Inserting an existing key replaces
/// its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleChanges {
    entries: BTreeMap<StyleKey, String>,
}

impl StyleChanges {
    /// Creates an empty change set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds or replaces a property and returns `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<StyleKey>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a property.
    pub fn insert(&mut self, key: impl Into<StyleKey>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value set for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Returns the keys in order, as owned handles.
    #[must_use]
    pub fn keys(&self) -> Vec<StyleKey> {
        self.entries.keys().cloned().collect()
    }

    /// Comma-joined key list, as used for `transition-property`.
    #[must_use]
    pub fn joined_keys(&self) -> String {
        let mut out = String::new();
        for (i, key) in self.entries.keys().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(key);
        }
        out
    }
}

/// Parses a CSS length the way `parseInt` does: optional leading whitespace
/// and sign, then decimal digits up to the first non-digit.
///
/// Missing, empty or unparsable values yield `0.0`.
#[must_use]
pub fn parse_px(value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0.0;
    }
    let mut magnitude = 0.0_f64;
    for b in digits[..end].bytes() {
        magnitude = magnitude * 10.0 + f64::from(b - b'0');
    }
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_sorted_and_joined() {
        let style = StyleChanges::new()
            .with("transform", "scale(1)")
            .with("opacity", "1");
        assert_eq!(style.joined_keys(), "opacity,transform");
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut style = StyleChanges::new().with("opacity", "0");
        style.insert("opacity", "1");
        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn empty_joined_keys() {
        assert_eq!(StyleChanges::new().joined_keys(), "");
        assert!(StyleChanges::default().is_empty());
    }

    #[test]
    fn parse_px_integer_prefix() {
        assert_eq!(parse_px(Some("105px")), 105.0);
        assert_eq!(parse_px(Some("  -12px")), -12.0);
        assert_eq!(parse_px(Some("7.9px")), 7.0);
        assert_eq!(parse_px(Some("+3")), 3.0);
    }

    #[test]
    fn parse_px_defaults_to_zero() {
        assert_eq!(parse_px(None), 0.0);
        assert_eq!(parse_px(Some("")), 0.0);
        assert_eq!(parse_px(Some("auto")), 0.0);
        assert_eq!(parse_px(Some("-")), 0.0);
    }
}
