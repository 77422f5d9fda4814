//! PIC16 target syntax description.
//!
//! PIC16 parts are Harvard machines: program and data memory are separate,
//! independently addressed, and want different assembler syntax. Constants
//! placed in program memory are declared with the `rom_*` directive family
//! instead of the RAM ones.

use crate::core::{
    AddrSpace, AddrSpaceTable, AsmInfoResult, Directive, SpaceDirectives, SyntaxConfig,
    TargetAsmInfo,
};

/// Data/RAM memory, the default space.
pub const RAM_SPACE: AddrSpace = AddrSpace::DEFAULT;

/// Program/ROM memory.
pub const ROM_SPACE: AddrSpace = AddrSpace(1);

/// Build the PIC16 assembler syntax description.
pub fn asm_info() -> AsmInfoResult<TargetAsmInfo> {
    let syntax = SyntaxConfig {
        comment_string: ";",
        global_directive: Directive::new("\tglobal\t"),
        extern_directive: Directive::new("\textern\t"),
        data8: Some(Directive::new(" db ")),
        data16: Some(Directive::new(" dw ")),
        data32: Some(Directive::new(" dl ")),
        data64: None,
        zero_directive: None,
        ascii_directive: Some(Directive::new(" dt ")),
        asciz_directive: None,
        // section bookkeeping is done with banksel/pagesel, not a directive
        section_switch_directive: "",
        // .file must carry the C source name, not the IR module name
        single_parameter_dot_file: false,
    };

    // Program memory is word-addressed, so byte data widens to a word.
    let spaces = AddrSpaceTable::new().with_space(
        ROM_SPACE,
        SpaceDirectives {
            data8: Some(Directive::new(" dw ")),
            data16: Some(Directive::new(" rom_di ")),
            data32: Some(Directive::new(" rom_dl ")),
            data64: None,
        },
    )?;

    Ok(TargetAsmInfo::new(syntax, spaces))
}
