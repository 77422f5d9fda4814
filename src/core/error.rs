//! Error types for target syntax configuration.
//!
//! Using thiserror for more idiomatic error handling. An unsupported
//! (width, address space) combination is deliberately NOT an error —
//! that is a normal lookup outcome, reported through
//! [`DirectiveLookup`](crate::core::DirectiveLookup).

use thiserror::Error;

use super::addr_space::AddrSpace;

/// Main error type for assembler syntax configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmInfoError {
    #[error("directives for {space} registered twice")]
    DuplicateAddrSpace { space: AddrSpace },

    #[error("the default address space is served by the base syntax configuration")]
    DefaultSpaceInTable,

    #[error("unknown target: {name}")]
    UnknownTarget { name: String },
}

/// Result type alias for configuration operations.
pub type AsmInfoResult<T> = Result<T, AsmInfoError>;
