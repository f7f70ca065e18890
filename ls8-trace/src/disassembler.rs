//! Program listing
//!
//! Walks a program image front to back, letting each opcode's structural
//! operand-count field say how many bytes the instruction spans. Bytes
//! that do not decode to a known operation (data, padding) are listed
//! with an inline error note rather than aborting the listing.

use crate::error::Result;
use crate::formatter::format_instruction;
use ls8_spec::{decode, Program};

/// Disassemble a program into listing text
pub fn disassemble(program: &Program) -> Result<String> {
    let bytes = program.bytes();
    let mut lines = Vec::new();
    let mut address = 0;

    while address < bytes.len() {
        let opcode = bytes[address];
        let decoded = decode(opcode);
        let end = (address + 1 + decoded.operand_count as usize).min(bytes.len());
        let operands = &bytes[address + 1..end];

        let raw: Vec<String> = bytes[address..end].iter().map(|b| format!("{:02X}", b)).collect();
        let text = if operands.len() < decoded.operand_count as usize {
            "; ERROR: truncated instruction".to_string()
        } else {
            match format_instruction(opcode, operands) {
                Ok(text) => text,
                Err(e) => format!("; ERROR: {}", e),
            }
        };

        lines.push(format!("0x{:02X}:  {:<10}{}", address, raw.join(" "), text));
        address = end;
    }

    let mut output = String::new();
    output.push_str("; LS-8 disassembly\n");
    output.push_str(&format!(
        "; {} bytes ({} instructions)\n\n",
        bytes.len(),
        lines.len()
    ));
    for line in &lines {
        output.push_str(line);
        output.push('\n');
    }

    Ok(output)
}
