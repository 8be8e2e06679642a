//! 6502 opcode names and addressing modes, grouped by mnemonic.

pub mod data;
pub mod errors;
pub mod opcodes;

pub use crate::errors::{Error, Result};
pub use crate::opcodes::{AddrMode, Entry, Mnemonic, OpcodeTable, MNEMONIC_COUNT};
