//! Arithmetic/logic unit
//!
//! Operand bytes are register indices. Binary operations write the result,
//! wrapped to 8 bits, back into the first register; CMP writes only the
//! flags register. Unary operations (INC, DEC, NOT) never consult the
//! second operand byte, so whatever follows them in memory is irrelevant.

use crate::error::{Result, RuntimeError};
use crate::machine::Machine;
use ls8_spec::{AluOp, Flags};

/// Value of the register named by an operand byte
fn operand_value(machine: &Machine, operand: u8) -> Result<u8> {
    Ok(machine.read_reg(machine.operand_reg(operand)?))
}

/// Execute one ALU operation
pub(crate) fn apply(
    machine: &mut Machine,
    op: AluOp,
    operand_a: u8,
    operand_b: u8,
) -> Result<()> {
    let reg_a = machine.operand_reg(operand_a)?;
    let a = machine.read_reg(reg_a);

    let result = match op {
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        AluOp::Not => !a,
        AluOp::Cmp => {
            let b = operand_value(machine, operand_b)?;
            machine.set_flags(Flags::compare(a, b));
            return Ok(());
        }
        AluOp::Add => a.wrapping_add(operand_value(machine, operand_b)?),
        AluOp::Sub => a.wrapping_sub(operand_value(machine, operand_b)?),
        AluOp::Mul => a.wrapping_mul(operand_value(machine, operand_b)?),
        AluOp::Div => {
            let b = operand_value(machine, operand_b)?;
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { pc: machine.pc() });
            }
            a / b
        }
        AluOp::Mod => {
            let b = operand_value(machine, operand_b)?;
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { pc: machine.pc() });
            }
            a % b
        }
        AluOp::And => a & operand_value(machine, operand_b)?,
        AluOp::Or => a | operand_value(machine, operand_b)?,
        AluOp::Xor => a ^ operand_value(machine, operand_b)?,
        AluOp::Shl => {
            // Shift counts of 8 and up push every bit out
            let b = operand_value(machine, operand_b)?;
            a.checked_shl(b as u32).unwrap_or(0)
        }
        AluOp::Shr => {
            let b = operand_value(machine, operand_b)?;
            a.checked_shr(b as u32).unwrap_or(0)
        }
    };

    machine.write_reg(reg_a, result);
    Ok(())
}
