//! Core configuration types.
//!
//! This module provides the building blocks a target backend combines into
//! its assembler syntax description:
//!
//! - [`addr_space`] - memory region tags shared with instruction selection
//! - [`directive`] - widths, directive literals, and lookup results
//! - [`syntax`] - base single-space syntax configuration
//! - [`space_table`] - extra-address-space directive table and selector
//! - [`target_info`] - the per-target description owning both halves
//!
//! Everything here is built once at target construction and read-only
//! afterwards; concurrent readers need no synchronization.

pub mod addr_space;
pub mod directive;
pub mod error;
pub mod space_table;
pub mod syntax;
pub mod target_info;

// Re-export core components
pub use addr_space::AddrSpace;

pub use directive::{
    Directive,
    DirectiveLookup,
    Width,
};

pub use error::{
    AsmInfoError,
    AsmInfoResult,
};

pub use space_table::{
    AddrSpaceTable,
    SpaceDirectives,
};

pub use syntax::SyntaxConfig;

pub use target_info::TargetAsmInfo;
