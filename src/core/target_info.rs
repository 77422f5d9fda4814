//! Per-target assembler syntax description.

use super::addr_space::AddrSpace;
use super::directive::{Directive, DirectiveLookup, Width};
use super::space_table::AddrSpaceTable;
use super::syntax::SyntaxConfig;

/// Complete assembler syntax description for one target backend.
///
/// Owned by the backend instance: built once when the backend is
/// instantiated, immutable afterwards, dropped with it. All fields are
/// plain data, so emission threads may share a description freely.
#[derive(Debug, Clone)]
pub struct TargetAsmInfo {
    /// Base single-space syntax configuration.
    pub syntax: SyntaxConfig,
    /// Extra-address-space directive table.
    pub spaces: AddrSpaceTable,
}

impl TargetAsmInfo {
    /// Assemble a description from its two halves.
    pub fn new(syntax: SyntaxConfig, spaces: AddrSpaceTable) -> Self {
        Self { syntax, spaces }
    }

    /// Extra-space directive selector.
    ///
    /// Default-space queries come back as
    /// [`DirectiveLookup::DeferToBase`]; the caller falls back to the base
    /// lookup. See [`AddrSpaceTable::lookup`].
    pub fn space_directive(&self, width: Width, space: AddrSpace) -> DirectiveLookup {
        self.spaces.lookup(width, space)
    }

    /// Emitter-facing resolution of (`width`, `space`) to a literal.
    ///
    /// Performs the base fallback for the default space. `None` means the
    /// target cannot emit data of this width in this space.
    pub fn data_directive(&self, width: Width, space: AddrSpace) -> Option<Directive> {
        match self.spaces.lookup(width, space) {
            DirectiveLookup::Directive(d) => Some(d),
            DirectiveLookup::DeferToBase => self.syntax.data_directive(width),
            DirectiveLookup::Unsupported => None,
        }
    }
}
