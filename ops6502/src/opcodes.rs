use std::fmt;

use log::{debug, trace};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_derive::Serialize;

use crate::data::{OPCODE_NAMES, VALID_COUNT, VALID_MODES, VALID_OPCODES};
use crate::errors::{Error, Result};

/// Number of distinct documented mnemonics.
pub const MNEMONIC_COUNT: usize = 56;

/// The only NOP that is a documented instruction.
const NOP_OPCODE: u8 = 0xEA;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AddrMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl fmt::Display for AddrMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An opcode and its addressing mode. Serializes as `[opcode, "Mode"]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Entry(pub u8, pub AddrMode);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mnemonic {
    pub name: &'static str,
    pub entries: Vec<Entry>,
}

/// Documented opcodes grouped by mnemonic, in order of first appearance.
#[derive(Debug)]
pub struct OpcodeTable {
    mnemonics: Vec<Mnemonic>,
}

impl OpcodeTable {
    pub fn build() -> Result<OpcodeTable> {
        let mut mnemonics: Vec<Mnemonic> = Vec::new();

        for (opcode, &name) in OPCODE_NAMES.iter().enumerate() {
            let opcode = opcode as u8;

            if name == "NOP" && opcode != NOP_OPCODE {
                continue;
            }

            let index = match VALID_OPCODES.iter().position(|&v| v == opcode) {
                Some(i) => i,
                None => {
                    trace!("skipping undocumented opcode 0x{:02x} ({})", opcode, name);
                    continue;
                }
            };

            let entry = Entry(opcode, VALID_MODES[index]);

            match mnemonics.iter_mut().find(|m| m.name == name) {
                Some(m) => m.entries.push(entry),
                None => mnemonics.push(Mnemonic {
                    name,
                    entries: vec![entry],
                }),
            }
        }

        let table = OpcodeTable { mnemonics };
        debug!("built {} mnemonics, {} entries", table.len(), table.entry_count());

        if table.len() != MNEMONIC_COUNT || table.entry_count() != VALID_COUNT {
            return Err(Error::DataMismatch {
                mnemonics: table.len(),
                entries: table.entry_count(),
            });
        }

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.mnemonics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mnemonics.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.mnemonics.iter().map(|m| m.entries.len()).sum()
    }

    pub fn mnemonics(&self) -> &[Mnemonic] {
        &self.mnemonics
    }

    /// Case-insensitive mnemonic lookup.
    pub fn get(&self, name: &str) -> Option<&Mnemonic> {
        self.mnemonics.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }

    pub fn find_opcode(&self, opcode: u8) -> Option<(&'static str, AddrMode)> {
        self.mnemonics.iter().find_map(|m| {
            m.entries
                .iter()
                .find(|e| e.0 == opcode)
                .map(|e| (m.name, e.1))
        })
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl Serialize for OpcodeTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.mnemonics.len()))?;
        for m in &self.mnemonics {
            map.serialize_entry(m.name, &m.entries)?;
        }
        map.end()
    }
}
