//! Cross-module interaction tests
//!
//! Tests the seams between loader, runtime, and trace: what the loader
//! accepts, how the runtime reports it, and what inspection shows.

use ls8_loader::{parse_image, LoaderError};
use ls8_runtime::{Cpu, RuntimeError};
use ls8_spec::{decode, Family, PrimaryOp};
use ls8_trace::{disassemble, mnemonic};

#[test]
fn test_loader_is_structural_runtime_is_semantic() {
    // 0b0001_1111 parses fine as a byte; only the runtime knows the
    // control-flow identifier 0b1111 names nothing
    let program = parse_image("00011111\n").unwrap();
    assert_eq!(program.bytes(), &[0b0001_1111]);

    let err = Cpu::new(&program).run().unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::UnsupportedOpcode {
            opcode: 0b0001_1111,
            pc: 0
        }
    ));
}

#[test]
fn test_division_by_zero_from_image() {
    // LDI R0,9; DIV R0,R1 with R1 still zero
    let source = "\
10000010
00000000
00001001
10100011
00000000
00000001
00000001
";
    let program = parse_image(source).unwrap();
    let err = Cpu::new(&program).run().unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { pc: 3 }));
}

#[test]
fn test_listing_mnemonics_match_decoder() {
    let source = "\
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";
    let program = parse_image(source).unwrap();
    let listing = disassemble(&program).unwrap();

    for &opcode in [0b1000_0010u8, 0b0100_0111, 0b0000_0001].iter() {
        let name = mnemonic(opcode).unwrap();
        assert!(listing.contains(name), "{name} missing from listing");
        assert_eq!(decode(opcode).family, Family::Primary);
    }
}

#[test]
fn test_trace_line_reflects_fetch_window() {
    let source = "\
10000010 # LDI R0,8
00000000
00001000
00000001 # HLT
";
    let program = parse_image(source).unwrap();
    let mut cpu = Cpu::new(&program);

    assert!(cpu.trace_line().starts_with("TRACE: 00 | 82 00 08 |"));

    cpu.step().unwrap();
    assert!(cpu.trace_line().starts_with("TRACE: 03 | 01 00 00 |"));
}

#[test]
fn test_loader_errors_do_not_reach_the_runtime() {
    let err = parse_image("10x00010\n").unwrap_err();
    assert!(matches!(err, LoaderError::InvalidLine { line: 1, .. }));
}

#[test]
fn test_canonical_opcodes_survive_image_round_trip() {
    // Render HLT's canonical byte as an image line, load it back, run it
    let line = format!("{:08b}\n", PrimaryOp::Hlt.opcode());
    let program = parse_image(&line).unwrap();
    let result = Cpu::new(&program).run().unwrap();
    assert_eq!(result.cycles, 1);
    assert!(result.outputs.is_empty());
}
