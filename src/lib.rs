//! asminfo - Target assembler-syntax configuration.
//!
//! Decides which textual directive a code generator's emitter writes in
//! front of a data item, given the item's bit width and the memory address
//! space it lives in. Single-address-space targets only carry the base
//! syntax configuration; Harvard-style targets add a per-space directive
//! table that the selector consults first.
//!
//! # Primary Usage
//!
//! ```
//! use asminfo::{pic16, Width};
//!
//! let info = pic16::asm_info().unwrap();
//!
//! // A 16-bit constant placed in program memory:
//! let directive = info.data_directive(Width::W16, pic16::ROM_SPACE).unwrap();
//! assert_eq!(directive.as_str(), " rom_di ");
//!
//! // The same width in ordinary data memory resolves through the base set:
//! let directive = info.data_directive(Width::W16, pic16::RAM_SPACE).unwrap();
//! assert_eq!(directive.as_str(), " dw ");
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Shared configuration types (widths, spaces, tables)
//! - [`pic16`] - Harvard microcontroller target description
//! - [`sparc`] - Single-space ELF target description

pub mod core;
pub mod pic16;
pub mod sparc;

// Re-export common types from the core module
pub use self::core::{
    // Identifiers and literals
    AddrSpace, Directive, DirectiveLookup, Width,
    // Configuration halves and the per-target description
    AddrSpaceTable, SpaceDirectives, SyntaxConfig, TargetAsmInfo,
    // Error handling
    AsmInfoError, AsmInfoResult,
};

/// Look up a shipped target description by name.
pub fn target_asm_info(name: &str) -> AsmInfoResult<TargetAsmInfo> {
    log::debug!("resolving syntax description for target {}", name);
    match name {
        "pic16" => pic16::asm_info(),
        "sparc" => sparc::asm_info(),
        _ => Err(AsmInfoError::UnknownTarget {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_targets_resolve() {
        assert!(target_asm_info("pic16").is_ok());
        assert!(target_asm_info("sparc").is_ok());
    }

    #[test]
    fn test_unknown_target_is_reported() {
        let err = target_asm_info("z80").unwrap_err();
        assert_eq!(
            err,
            AsmInfoError::UnknownTarget {
                name: "z80".to_string()
            }
        );
    }
}
