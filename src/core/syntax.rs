// This module holds the single-address-space half of a target's assembler
// syntax description. SyntaxConfig carries the directive literals a target
// uses for ordinary data of 8/16/32/64 bits together with general syntax
// properties: the comment token, symbol export/import directives, the
// zero/ascii/asciz data directives, the section-switch directive, and the
// single-parameter .file flag. The Default impl provides GNU-as style
// conventions; target descriptions override individual fields at
// construction. data_directive() is the base lookup that extra-space
// queries defer to for the default space.

//! Base assembler syntax configuration.

use super::directive::{Directive, Width};

/// Single-address-space assembler syntax description.
///
/// Built once per target backend and read-only afterwards. Every slot
/// holding `Option<Directive>` uses `None` as the explicit "this target
/// has no such directive" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    /// Token that introduces a line comment.
    pub comment_string: &'static str,
    /// Directive that exports a symbol.
    pub global_directive: Directive,
    /// Directive that imports a symbol.
    pub extern_directive: Directive,
    /// Default-space directive for 8-bit data.
    pub data8: Option<Directive>,
    /// Default-space directive for 16-bit data.
    pub data16: Option<Directive>,
    /// Default-space directive for 32-bit data.
    pub data32: Option<Directive>,
    /// Default-space directive for 64-bit data.
    pub data64: Option<Directive>,
    /// Directive reserving zero-filled space.
    pub zero_directive: Option<Directive>,
    /// Directive for character data.
    pub ascii_directive: Option<Directive>,
    /// Directive for NUL-terminated character data.
    pub asciz_directive: Option<Directive>,
    /// Directive that switches the current section; empty suppresses
    /// section switching entirely.
    pub section_switch_directive: &'static str,
    /// Whether `.file` takes only the file name.
    pub single_parameter_dot_file: bool,
}

impl Default for SyntaxConfig {
    /// GNU-as style conventions.
    fn default() -> Self {
        Self {
            comment_string: "#",
            global_directive: Directive::new("\t.globl\t"),
            extern_directive: Directive::new("\t.extern\t"),
            data8: Some(Directive::new("\t.byte\t")),
            data16: Some(Directive::new("\t.short\t")),
            data32: Some(Directive::new("\t.long\t")),
            data64: Some(Directive::new("\t.quad\t")),
            zero_directive: Some(Directive::new("\t.zero\t")),
            ascii_directive: Some(Directive::new("\t.ascii\t")),
            asciz_directive: Some(Directive::new("\t.asciz\t")),
            section_switch_directive: "\t.section\t",
            single_parameter_dot_file: true,
        }
    }
}

impl SyntaxConfig {
    /// Default-space data directive for `width`, if the target has one.
    pub fn data_directive(&self, width: Width) -> Option<Directive> {
        match width {
            Width::W8 => self.data8,
            Width::W16 => self.data16,
            Width::W32 => self.data32,
            Width::W64 => self.data64,
        }
    }
}
