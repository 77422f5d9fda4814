//! Widths, directive literals, and lookup results.

use std::fmt;

/// Data widths a directive slot can exist for.
///
/// The set is closed: a raw bit count outside it never constructs a
/// `Width`, so out-of-set widths cannot match any slot downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8-bit data.
    W8,
    /// 16-bit data.
    W16,
    /// 32-bit data.
    W32,
    /// 64-bit data.
    W64,
}

impl Width {
    /// Every supported width, in ascending order.
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// Map a raw bit count onto the closed width set.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Width::W8),
            16 => Some(Width::W16),
            32 => Some(Width::W32),
            64 => Some(Width::W64),
            _ => None,
        }
    }

    /// Bit count of this width.
    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

/// An assembler directive literal, e.g. `" db "` or `"\t.long\t"`.
///
/// Wraps the exact text the emitter writes in front of a value, spacing
/// included. An empty string is a valid directive; absence of a directive
/// is `Option::<Directive>::None` at the configuration layer, never a
/// sentinel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive(&'static str);

impl Directive {
    /// Wrap a literal.
    pub const fn new(text: &'static str) -> Self {
        Directive(text)
    }

    /// The literal text, exactly as configured.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Result of an extra-space directive lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveLookup {
    /// The configured literal for this (width, space) pair.
    Directive(Directive),
    /// The query named the default space; the base single-space
    /// configuration decides.
    DeferToBase,
    /// The target has no directive for this combination.
    Unsupported,
}

impl DirectiveLookup {
    /// The literal, if the lookup produced one.
    pub fn directive(self) -> Option<Directive> {
        match self {
            DirectiveLookup::Directive(d) => Some(d),
            _ => None,
        }
    }

    /// Whether the combination is unsupported on this target.
    pub fn is_unsupported(self) -> bool {
        matches!(self, DirectiveLookup::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_closed_set() {
        assert_eq!(Width::from_bits(8), Some(Width::W8));
        assert_eq!(Width::from_bits(16), Some(Width::W16));
        assert_eq!(Width::from_bits(32), Some(Width::W32));
        assert_eq!(Width::from_bits(64), Some(Width::W64));

        for bits in [0, 1, 7, 12, 24, 48, 128] {
            assert_eq!(Width::from_bits(bits), None);
        }
    }

    #[test]
    fn test_bits_round_trip() {
        for width in Width::ALL {
            assert_eq!(Width::from_bits(width.bits()), Some(width));
        }
    }

    #[test]
    fn test_empty_directive_is_not_absence() {
        let d = Directive::new("");
        assert_eq!(d.as_str(), "");
        assert_eq!(DirectiveLookup::Directive(d).directive(), Some(d));
    }

    #[test]
    fn test_lookup_accessors() {
        let d = Directive::new(" dw ");
        assert_eq!(DirectiveLookup::Directive(d).directive(), Some(d));
        assert_eq!(DirectiveLookup::DeferToBase.directive(), None);
        assert_eq!(DirectiveLookup::Unsupported.directive(), None);
        assert!(DirectiveLookup::Unsupported.is_unsupported());
        assert!(!DirectiveLookup::DeferToBase.is_unsupported());
    }
}
