//! SPARC ELF target syntax description.
//!
//! A conventional single-address-space target: everything lives in the
//! default data space, the extra-space table stays empty, and the base
//! configuration only swaps the comment token.

use crate::core::{AddrSpaceTable, AsmInfoResult, SyntaxConfig, TargetAsmInfo};

/// Build the SPARC assembler syntax description.
pub fn asm_info() -> AsmInfoResult<TargetAsmInfo> {
    let syntax = SyntaxConfig {
        comment_string: "!",
        ..SyntaxConfig::default()
    };
    Ok(TargetAsmInfo::new(syntax, AddrSpaceTable::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AddrSpace, DirectiveLookup, Width};

    #[test]
    fn test_no_extra_spaces() {
        let info = asm_info().unwrap();
        assert!(info.spaces.is_empty());
        for width in Width::ALL {
            assert_eq!(
                info.space_directive(width, AddrSpace(1)),
                DirectiveLookup::Unsupported
            );
        }
    }

    #[test]
    fn test_default_space_resolves_through_base() {
        let info = asm_info().unwrap();
        assert_eq!(
            info.space_directive(Width::W8, AddrSpace::DEFAULT),
            DirectiveLookup::DeferToBase
        );
        assert_eq!(
            info.data_directive(Width::W8, AddrSpace::DEFAULT)
                .unwrap()
                .as_str(),
            "\t.byte\t"
        );
        assert_eq!(
            info.data_directive(Width::W64, AddrSpace::DEFAULT)
                .unwrap()
                .as_str(),
            "\t.quad\t"
        );
    }

    #[test]
    fn test_comment_token() {
        let info = asm_info().unwrap();
        assert_eq!(info.syntax.comment_string, "!");
    }
}
