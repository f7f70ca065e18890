//! Instruction and machine-state formatting
//!
//! Everything here renders from plain values handed in by the caller;
//! nothing reads or mutates machine state directly.

use crate::error::{Result, TraceError};
use ls8_spec::{decode, AluOp, ControlOp, Family, PrimaryOp, NUM_REGISTERS};

/// One trace line: PC, the three bytes at [PC, PC+1, PC+2], then all 8
/// registers, in hex.
///
/// The layout matches the classic LS-8 debug output:
///
/// ```text
/// TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
/// ```
pub fn trace_line(pc: u8, window: [u8; 3], registers: &[u8; NUM_REGISTERS]) -> String {
    let mut line = format!(
        "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
        pc, window[0], window[1], window[2]
    );
    for value in registers {
        line.push_str(&format!(" {:02X}", value));
    }
    line
}

/// Mnemonic for an opcode byte
pub fn mnemonic(opcode: u8) -> Result<&'static str> {
    let decoded = decode(opcode);
    let name = match decoded.family {
        Family::Alu => AluOp::from_ident(decoded.ident).map(AluOp::mnemonic),
        Family::Control => ControlOp::from_ident(decoded.ident).map(ControlOp::mnemonic),
        Family::Primary => PrimaryOp::from_ident(decoded.ident).map(PrimaryOp::mnemonic),
    };
    name.ok_or(TraceError::UnknownOpcode(opcode))
}

/// Format one instruction as listing text, e.g. `LDI R0, 8`
///
/// Operand bytes are register indices everywhere except LDI, whose second
/// operand is an immediate and prints in decimal.
pub fn format_instruction(opcode: u8, operands: &[u8]) -> Result<String> {
    let name = mnemonic(opcode)?;
    let decoded = decode(opcode);

    let text = match (decoded.family, operands) {
        (Family::Primary, [a, b]) => format!("{} R{}, {}", name, a, b),
        (_, [a, b]) => format!("{} R{}, R{}", name, a, b),
        (_, [a]) => format!("{} R{}", name, a),
        _ => name.to_string(),
    };
    Ok(text)
}
