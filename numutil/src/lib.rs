//! Number literal parsing and decimal/hex/binary formatting shared by the
//! `rpn`, `numtab` and `ops6502` tools.

#[macro_use] extern crate bitflags;

pub mod format;
pub mod literal;

pub use crate::format::{bin, dec, format_conversion, format_number, hex, Bases};
pub use crate::literal::{classify, parse, parse_as, LiteralError, Radix};
