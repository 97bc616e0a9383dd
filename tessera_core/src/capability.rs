// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime capability detection for animated style transitions.
//!
//! Browsers historically shipped CSS transitions under vendor-prefixed names,
//! each with its own spelling of the property, the transform property and the
//! "transition finished" event. [`detect`] resolves those spellings once at
//! startup from a [`StyleProbe`] and produces an immutable [`Capabilities`]
//! value that is handed to every
//! [`PositionedItem`](crate::item::PositionedItem).
//!
//! # Probe order
//!
//! The standard `transition` property is probed first, followed by the
//! vendor spellings in [`VENDOR_SPELLINGS`] order. The first spelling the
//! probe accepts wins. If none is accepted, the runtime has no animated
//! transitions and every item applies its final state immediately.

/// A runtime family that shipped its own transition spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Unprefixed, standardized spelling.
    Standard,
    /// Gecko (`Moz`).
    Moz,
    /// WebKit / Blink (`Webkit`).
    Webkit,
    /// Trident (`Ms`).
    Ms,
    /// Presto (`O`).
    Opera,
}

/// The runtime's name for "an animated style change has finished".
///
/// This is a closed set: every name a runtime may deliver maps to one variant
/// through [`from_type`](Self::from_type), and all variants route to the same
/// completion handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionEvent {
    /// `transitionend`, also used by Gecko and Trident.
    Standard,
    /// `webkitTransitionEnd`.
    Webkit,
    /// `otransitionend`.
    Opera,
}

impl CompletionEvent {
    /// Every known completion event.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Webkit, Self::Opera];

    /// Returns the literal event type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "transitionend",
            Self::Webkit => "webkitTransitionEnd",
            Self::Opera => "otransitionend",
        }
    }

    /// Maps a delivered event type name back to a completion event.
    ///
    /// Returns `None` for anything that is not a transition completion.
    #[must_use]
    pub fn from_type(event_type: &str) -> Option<Self> {
        match event_type {
            "transitionend" => Some(Self::Standard),
            "webkitTransitionEnd" => Some(Self::Webkit),
            "otransitionend" | "oTransitionEnd" => Some(Self::Opera),
            _ => None,
        }
    }
}

/// One row of the vendor spelling table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VendorSpelling {
    /// Which runtime family this row describes.
    pub vendor: Vendor,
    /// Script-side style property name tested by the [`StyleProbe`].
    pub probe_name: &'static str,
    /// Event delivered when a transition finishes.
    pub completion_event: CompletionEvent,
    /// CSS transition shorthand.
    pub transition: &'static str,
    /// CSS longhand selecting which properties animate.
    pub transition_property: &'static str,
    /// CSS longhand setting how long the animation runs.
    pub transition_duration: &'static str,
    /// CSS transform property driven alongside the transition.
    pub transform: &'static str,
}

/// Candidate spellings in probe order. The standard spelling comes first.
pub static VENDOR_SPELLINGS: [VendorSpelling; 5] = [
    VendorSpelling {
        vendor: Vendor::Standard,
        probe_name: "transition",
        completion_event: CompletionEvent::Standard,
        transition: "transition",
        transition_property: "transition-property",
        transition_duration: "transition-duration",
        transform: "transform",
    },
    VendorSpelling {
        vendor: Vendor::Moz,
        probe_name: "MozTransition",
        completion_event: CompletionEvent::Standard,
        transition: "-moz-transition",
        transition_property: "-moz-transition-property",
        transition_duration: "-moz-transition-duration",
        transform: "-moz-transform",
    },
    VendorSpelling {
        vendor: Vendor::Webkit,
        probe_name: "WebkitTransition",
        completion_event: CompletionEvent::Webkit,
        transition: "-webkit-transition",
        transition_property: "-webkit-transition-property",
        transition_duration: "-webkit-transition-duration",
        transform: "-webkit-transform",
    },
    VendorSpelling {
        vendor: Vendor::Ms,
        probe_name: "MsTransition",
        completion_event: CompletionEvent::Standard,
        transition: "-ms-transition",
        transition_property: "-ms-transition-property",
        transition_duration: "-ms-transition-duration",
        transform: "-ms-transform",
    },
    VendorSpelling {
        vendor: Vendor::Opera,
        probe_name: "OTransition",
        completion_event: CompletionEvent::Opera,
        transition: "-o-transition",
        transition_property: "-o-transition-property",
        transition_duration: "-o-transition-duration",
        transform: "-o-transform",
    },
];

/// Answers whether the runtime recognizes a script-side style property name.
///
/// Backends implement this against their host (for the web: whether
/// `document.documentElement.style[name]` is a string).
pub trait StyleProbe {
    /// Returns `true` if `property` is a supported style property.
    fn supports(&self, property: &str) -> bool;
}

impl<F: Fn(&str) -> bool> StyleProbe for F {
    fn supports(&self, property: &str) -> bool {
        self(property)
    }
}

/// Probes `probe` for transition support and returns the resolved
/// [`Capabilities`].
///
/// Tries [`VENDOR_SPELLINGS`] in order and stops at the first match.
#[must_use]
pub fn detect(probe: &impl StyleProbe) -> Capabilities {
    VENDOR_SPELLINGS
        .iter()
        .find(|row| probe.supports(row.probe_name))
        .map_or(Capabilities::unsupported(), |row| Capabilities {
            spelling: Some(row),
        })
}

/// The one-time-computed description of whether and how the runtime animates
/// style changes.
///
/// Cheap to copy; every item holds its own copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    spelling: Option<&'static VendorSpelling>,
}

impl Capabilities {
    /// A runtime without animated transitions.
    #[must_use]
    pub const fn unsupported() -> Self {
        Self { spelling: None }
    }

    /// A runtime with unprefixed, standard transitions.
    #[must_use]
    pub fn standard() -> Self {
        Self::for_vendor(Vendor::Standard)
    }

    /// A runtime using the given vendor's spelling.
    #[must_use]
    pub fn for_vendor(vendor: Vendor) -> Self {
        Self {
            spelling: VENDOR_SPELLINGS.iter().find(|row| row.vendor == vendor),
        }
    }

    /// Returns `true` if animated transitions exist in this runtime.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.spelling.is_some()
    }

    /// Returns the winning vendor, if any.
    #[must_use]
    pub fn vendor(&self) -> Option<Vendor> {
        self.spelling.map(|s| s.vendor)
    }

    /// Returns the completion event to listen for, if supported.
    #[must_use]
    pub fn completion_event(&self) -> Option<CompletionEvent> {
        self.spelling.map(|s| s.completion_event)
    }

    /// Returns the CSS transition shorthand, if supported.
    #[must_use]
    pub fn transition_key(&self) -> Option<&'static str> {
        self.spelling.map(|s| s.transition)
    }

    /// Returns the CSS `transition-property` spelling, if supported.
    #[must_use]
    pub fn transition_property_key(&self) -> Option<&'static str> {
        self.spelling.map(|s| s.transition_property)
    }

    /// Returns the CSS `transition-duration` spelling, if supported.
    #[must_use]
    pub fn transition_duration_key(&self) -> Option<&'static str> {
        self.spelling.map(|s| s.transition_duration)
    }

    /// Returns the CSS transform property to use.
    ///
    /// Falls back to the standard `transform` when transitions are
    /// unsupported, so static poses still apply.
    #[must_use]
    pub fn transform_key(&self) -> &'static str {
        self.spelling.map_or("transform", |s| s.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn standard_wins_over_prefixes() {
        let caps = detect(&|name: &str| name == "transition" || name == "WebkitTransition");
        assert_eq!(caps.vendor(), Some(Vendor::Standard));
        assert_eq!(caps.completion_event(), Some(CompletionEvent::Standard));
        assert_eq!(caps.transform_key(), "transform");
    }

    #[test]
    fn webkit_only_runtime() {
        let caps = detect(&|name: &str| name == "WebkitTransition");
        assert!(caps.is_supported());
        assert_eq!(caps.completion_event(), Some(CompletionEvent::Webkit));
        assert_eq!(caps.transition_property_key(), Some("-webkit-transition-property"));
        assert_eq!(caps.transition_duration_key(), Some("-webkit-transition-duration"));
        assert_eq!(caps.transform_key(), "-webkit-transform");
    }

    #[test]
    fn moz_is_probed_before_webkit() {
        let caps = detect(&|name: &str| name == "MozTransition" || name == "WebkitTransition");
        assert_eq!(caps.vendor(), Some(Vendor::Moz));
        // Gecko delivers the unprefixed event name.
        assert_eq!(caps.completion_event(), Some(CompletionEvent::Standard));
    }

    #[test]
    fn probe_order_is_fixed() {
        let seen = RefCell::new(Vec::new());
        let caps = detect(&|name: &str| {
            seen.borrow_mut().push(alloc::string::String::from(name));
            false
        });
        assert!(!caps.is_supported());
        assert_eq!(
            *seen.borrow(),
            [
                "transition",
                "MozTransition",
                "WebkitTransition",
                "MsTransition",
                "OTransition"
            ]
        );
    }

    #[test]
    fn unsupported_has_no_keys() {
        let caps = detect(&|_: &str| false);
        assert_eq!(caps, Capabilities::unsupported());
        assert_eq!(caps.completion_event(), None);
        assert_eq!(caps.transition_property_key(), None);
        assert_eq!(caps.transform_key(), "transform");
    }

    #[test]
    fn for_vendor_matches_table() {
        for row in &VENDOR_SPELLINGS {
            let caps = Capabilities::for_vendor(row.vendor);
            assert_eq!(caps.vendor(), Some(row.vendor));
            assert_eq!(caps.transition_key(), Some(row.transition));
        }
    }

    #[test]
    fn completion_event_names_round_trip() {
        for ev in CompletionEvent::ALL {
            assert_eq!(CompletionEvent::from_type(ev.name()), Some(ev));
        }
        assert_eq!(CompletionEvent::from_type("click"), None);
        assert_eq!(
            CompletionEvent::from_type("oTransitionEnd"),
            Some(CompletionEvent::Opera)
        );
    }
}
