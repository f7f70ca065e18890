//! Control-flow and data-movement handlers
//!
//! Control-flow handlers decide the next PC themselves, including the
//! fall-through case of an untaken conditional jump. Data-movement
//! handlers advance PC past the instruction they executed.

use crate::error::Result;
use crate::io::IoHandler;
use crate::machine::Machine;
use ls8_spec::{ControlOp, PrimaryOp};

/// Signal from a primary handler back to the run loop
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Halt,
}

/// Execute one control-flow operation
pub(crate) fn control(machine: &mut Machine, op: ControlOp, operand_a: u8) -> Result<()> {
    match op {
        ControlOp::Jmp => {
            let target = machine.read_reg(machine.operand_reg(operand_a)?);
            machine.set_pc(target);
        }
        ControlOp::Jeq => {
            let target = machine.read_reg(machine.operand_reg(operand_a)?);
            if machine.flags().is_equal() {
                machine.set_pc(target);
            } else {
                machine.advance_pc(2);
            }
        }
        ControlOp::Jne => {
            let target = machine.read_reg(machine.operand_reg(operand_a)?);
            if machine.flags().is_equal() {
                machine.advance_pc(2);
            } else {
                machine.set_pc(target);
            }
        }
        ControlOp::Call => {
            let target = machine.read_reg(machine.operand_reg(operand_a)?);
            let return_address = machine.pc().wrapping_add(2);
            machine.push(return_address);
            machine.set_pc(target);
        }
        ControlOp::Ret => {
            let return_address = machine.pop();
            machine.set_pc(return_address);
        }
    }
    Ok(())
}

/// Execute one primary (data-movement/output/halt) operation.
///
/// `advance` is the instruction length in bytes; HLT leaves PC on the halt
/// instruction.
pub(crate) fn primary(
    machine: &mut Machine,
    io: &mut IoHandler,
    op: PrimaryOp,
    operand_a: u8,
    operand_b: u8,
    advance: u8,
) -> Result<Step> {
    match op {
        PrimaryOp::Hlt => return Ok(Step::Halt),
        PrimaryOp::Ldi => {
            let reg = machine.operand_reg(operand_a)?;
            machine.write_reg(reg, operand_b);
        }
        PrimaryOp::Prn => {
            let reg = machine.operand_reg(operand_a)?;
            io.emit(machine.read_reg(reg))?;
        }
        PrimaryOp::Push => {
            let reg = machine.operand_reg(operand_a)?;
            let value = machine.read_reg(reg);
            machine.push(value);
        }
        PrimaryOp::Pop => {
            let reg = machine.operand_reg(operand_a)?;
            let value = machine.pop();
            machine.write_reg(reg, value);
        }
    }
    machine.advance_pc(advance);
    Ok(Step::Continue)
}
