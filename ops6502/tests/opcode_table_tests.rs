//! Checks on the generated opcode table.

use ops6502::{AddrMode, Entry, OpcodeTable, MNEMONIC_COUNT};

fn table() -> OpcodeTable {
    OpcodeTable::build().unwrap()
}

#[test]
fn test_counts() {
    let t = table();
    assert_eq!(t.len(), MNEMONIC_COUNT);
    assert_eq!(t.entry_count(), 151);
}

#[test]
fn test_first_appearance_order() {
    let t = table();
    let names: Vec<&str> = t.mnemonics().iter().take(5).map(|m| m.name).collect();
    assert_eq!(names, vec!["BRK", "ORA", "ASL", "PHP", "BPL"]);
    assert_eq!(t.mnemonics().last().unwrap().name, "SED");
}

#[test]
fn test_only_documented_nop() {
    let nop = table().get("NOP").unwrap().clone();
    assert_eq!(nop.entries, vec![Entry(0xEA, AddrMode::Implied)]);
}

#[test]
fn test_jmp_modes() {
    let t = table();
    let jmp = t.get("jmp").unwrap();
    assert_eq!(
        jmp.entries,
        vec![Entry(0x4C, AddrMode::Absolute), Entry(0x6C, AddrMode::Indirect)]
    );
}

#[test]
fn test_lda_modes() {
    let t = table();
    let lda = t.get("LDA").unwrap();
    assert_eq!(lda.entries.len(), 8);
    assert!(lda.entries.contains(&Entry(0xA9, AddrMode::Immediate)));
    assert!(lda.entries.contains(&Entry(0xB1, AddrMode::IndirectY)));
}

#[test]
fn test_index_register_modes() {
    let t = table();
    assert_eq!(t.find_opcode(0x96), Some(("STX", AddrMode::ZeroPageY)));
    assert_eq!(t.find_opcode(0xBE), Some(("LDX", AddrMode::AbsoluteY)));
    assert_eq!(t.find_opcode(0x0A), Some(("ASL", AddrMode::Accumulator)));
}

#[test]
fn test_undocumented_opcodes_are_absent() {
    let t = table();
    assert_eq!(t.find_opcode(0x02), None);
    assert_eq!(t.find_opcode(0xFF), None);
    assert!(t.get("XAA").is_none());
}

const REFERENCE_JSON: &str = include_str!("data/opcodes.json");

#[test]
fn test_json_matches_reference_table() {
    let json = table().to_json(false).unwrap();

    // Per mnemonic first, so a misaligned mode names its mnemonic.
    let ours: serde_json::Value = serde_json::from_str(&json).unwrap();
    let reference: serde_json::Value = serde_json::from_str(REFERENCE_JSON).unwrap();
    for (name, entries) in reference.as_object().unwrap() {
        assert_eq!(&ours[name.as_str()], entries, "mnemonic {}", name);
    }

    // Then byte for byte, which also pins the key order.
    assert_eq!(json, REFERENCE_JSON.trim_end());
}

#[test]
fn test_json_shape() {
    let json = table().to_json(false).unwrap();
    assert!(json.starts_with(r#"{"BRK":[[0,"Implied"]],"ORA":[[1,"IndirectX"],[5,"ZeroPage"]"#));
    assert!(json.contains(r#""JMP":[[76,"Absolute"],[108,"Indirect"]]"#));
    assert!(json.ends_with(r#""SED":[[248,"Implied"]]}"#));
}

#[test]
fn test_json_parses_back() {
    let json = table().to_json(true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), MNEMONIC_COUNT);
    assert_eq!(object["NOP"], serde_json::json!([[234, "Implied"]]));
}
