// This module implements the extra-address-space directive table and its
// selector. SpaceDirectives holds one optional directive slot per supported
// width for a single address space. AddrSpaceTable maps declared address
// spaces to their slot sets; it is populated exactly once at target
// construction through the consuming with_space() builder, which rejects the
// default space and duplicate registrations, and is immutable afterwards so
// concurrent emission threads can read it without synchronization. lookup()
// is the selector: default-space queries defer to the base configuration,
// declared spaces dispatch on the closed Width enum, everything else is
// reported unsupported. Unsupported is a normal outcome, not an error.

//! Extra-address-space directive table and selector.

use hashbrown::HashMap;

use super::addr_space::AddrSpace;
use super::directive::{Directive, DirectiveLookup, Width};
use super::error::{AsmInfoError, AsmInfoResult};

/// Directive slots for one extra address space.
///
/// `None` marks a width the target cannot represent in that space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceDirectives {
    /// Directive for 8-bit data.
    pub data8: Option<Directive>,
    /// Directive for 16-bit data.
    pub data16: Option<Directive>,
    /// Directive for 32-bit data.
    pub data32: Option<Directive>,
    /// Directive for 64-bit data.
    pub data64: Option<Directive>,
}

impl SpaceDirectives {
    /// Slot for `width`.
    pub fn get(&self, width: Width) -> Option<Directive> {
        match width {
            Width::W8 => self.data8,
            Width::W16 => self.data16,
            Width::W32 => self.data32,
            Width::W64 => self.data64,
        }
    }
}

/// Per-target table of extra-address-space directives.
///
/// Targets with a single address space keep the table empty; every
/// non-default query then reports [`DirectiveLookup::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct AddrSpaceTable {
    spaces: HashMap<AddrSpace, SpaceDirectives>,
}

impl AddrSpaceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            spaces: HashMap::new(),
        }
    }

    /// Declare the directive slots for one extra address space.
    ///
    /// The default space is rejected — its directives live in the base
    /// syntax configuration — as is declaring the same space twice.
    pub fn with_space(mut self, space: AddrSpace, dirs: SpaceDirectives) -> AsmInfoResult<Self> {
        if space.is_default() {
            return Err(AsmInfoError::DefaultSpaceInTable);
        }
        if self.spaces.contains_key(&space) {
            return Err(AsmInfoError::DuplicateAddrSpace { space });
        }
        log::debug!("declaring data directives for {}", space);
        self.spaces.insert(space, dirs);
        Ok(self)
    }

    /// Whether `space` was declared in this table.
    pub fn declares(&self, space: AddrSpace) -> bool {
        self.spaces.contains_key(&space)
    }

    /// Number of declared extra spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether no extra space was declared.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Iterate over the declared spaces and their slot sets.
    pub fn iter(&self) -> impl Iterator<Item = (AddrSpace, &SpaceDirectives)> {
        self.spaces.iter().map(|(&space, dirs)| (space, dirs))
    }

    /// Select the directive for (`width`, `space`).
    ///
    /// Pure read: no side effects, constant time, identical inputs always
    /// produce identical results.
    pub fn lookup(&self, width: Width, space: AddrSpace) -> DirectiveLookup {
        if space.is_default() {
            return DirectiveLookup::DeferToBase;
        }
        match self.spaces.get(&space) {
            Some(dirs) => match dirs.get(width) {
                Some(d) => DirectiveLookup::Directive(d),
                None => DirectiveLookup::Unsupported,
            },
            None => DirectiveLookup::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROM: AddrSpace = AddrSpace(1);

    fn rom_table() -> AddrSpaceTable {
        AddrSpaceTable::new()
            .with_space(
                ROM,
                SpaceDirectives {
                    data8: Some(Directive::new(" dw ")),
                    data16: Some(Directive::new(" rom_di ")),
                    data32: Some(Directive::new(" rom_dl ")),
                    data64: None,
                },
            )
            .unwrap()
    }

    #[test]
    fn test_declared_pairs_return_exact_literals() {
        let table = rom_table();
        assert_eq!(
            table.lookup(Width::W8, ROM).directive().unwrap().as_str(),
            " dw "
        );
        assert_eq!(
            table.lookup(Width::W16, ROM).directive().unwrap().as_str(),
            " rom_di "
        );
        assert_eq!(
            table.lookup(Width::W32, ROM).directive().unwrap().as_str(),
            " rom_dl "
        );
    }

    #[test]
    fn test_width_hole_is_unsupported() {
        assert_eq!(
            rom_table().lookup(Width::W64, ROM),
            DirectiveLookup::Unsupported
        );
    }

    #[test]
    fn test_default_space_defers_for_every_width() {
        let table = rom_table();
        for width in Width::ALL {
            assert_eq!(
                table.lookup(width, AddrSpace::DEFAULT),
                DirectiveLookup::DeferToBase
            );
        }
    }

    #[test]
    fn test_undeclared_space_is_unsupported() {
        let table = rom_table();
        for width in Width::ALL {
            assert_eq!(table.lookup(width, AddrSpace(7)), DirectiveLookup::Unsupported);
        }
    }

    #[test]
    fn test_empty_table_only_defers_default() {
        let table = AddrSpaceTable::new();
        assert!(table.is_empty());
        assert_eq!(
            table.lookup(Width::W8, AddrSpace::DEFAULT),
            DirectiveLookup::DeferToBase
        );
        assert_eq!(
            table.lookup(Width::W8, AddrSpace(1)),
            DirectiveLookup::Unsupported
        );
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let table = rom_table();
        let first = table.lookup(Width::W16, ROM);
        for _ in 0..100 {
            assert_eq!(table.lookup(Width::W16, ROM), first);
        }
    }

    #[test]
    fn test_duplicate_space_rejected() {
        let err = rom_table()
            .with_space(ROM, SpaceDirectives::default())
            .unwrap_err();
        assert_eq!(err, AsmInfoError::DuplicateAddrSpace { space: ROM });
    }

    #[test]
    fn test_default_space_rejected() {
        let err = AddrSpaceTable::new()
            .with_space(AddrSpace::DEFAULT, SpaceDirectives::default())
            .unwrap_err();
        assert_eq!(err, AsmInfoError::DefaultSpaceInTable);
    }

    #[test]
    fn test_empty_string_slot_is_a_directive() {
        let table = AddrSpaceTable::new()
            .with_space(
                ROM,
                SpaceDirectives {
                    data8: Some(Directive::new("")),
                    ..SpaceDirectives::default()
                },
            )
            .unwrap();
        assert_eq!(
            table.lookup(Width::W8, ROM),
            DirectiveLookup::Directive(Directive::new(""))
        );
    }
}
