// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition tuning.

use alloc::format;
use alloc::string::String;

/// How long an animated transition runs, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionDuration(pub u32);

impl TransitionDuration {
    /// One second.
    pub const ONE_SECOND: Self = Self(1000);

    /// Creates a duration from milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Returns the duration in milliseconds.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Formats the duration as a CSS time value (`"1000ms"`).
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{}ms", self.0)
    }
}

/// Per-item transition settings.
///
/// The duration is fixed regardless of how far an item moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Duration applied to every animated change.
    pub duration: TransitionDuration,
    /// Scale of the hidden pose used by reveal and remove. Kept just above
    /// zero so the element still has a non-degenerate transform.
    pub hidden_scale: f64,
}

impl TransitionConfig {
    /// One-second transitions, hidden pose at `scale(0.001)`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duration: TransitionDuration::ONE_SECOND,
            hidden_scale: 0.001,
        }
    }

    /// Returns a copy with a different duration.
    #[must_use]
    pub const fn with_duration(self, duration: TransitionDuration) -> Self {
        Self { duration, ..self }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_second() {
        let config = TransitionConfig::default();
        assert_eq!(config.duration.as_millis(), 1000);
        assert_eq!(config.duration.to_css(), "1000ms");
        assert_eq!(config.hidden_scale, 0.001);
    }

    #[test]
    fn with_duration_keeps_scale() {
        let config = TransitionConfig::new().with_duration(TransitionDuration::from_millis(250));
        assert_eq!(config.duration.to_css(), "250ms");
        assert_eq!(config.hidden_scale, 0.001);
    }
}
