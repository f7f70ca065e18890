//! Stress tests for the LS-8 toolchain
//!
//! Large programs, long loops, and a deep stack; nothing here should be
//! anywhere near the machine's actual limits.

use ls8_runtime::{Cpu, CpuConfig, RuntimeError};
use ls8_spec::{AluOp, ControlOp, PrimaryOp, Program, Register, MEMORY_SIZE, STACK_INIT};

const LDI: u8 = PrimaryOp::Ldi.opcode();
const PRN: u8 = PrimaryOp::Prn.opcode();
const PUSH: u8 = PrimaryOp::Push.opcode();
const HLT: u8 = PrimaryOp::Hlt.opcode();
const DEC: u8 = AluOp::Dec.opcode();
const CMP: u8 = AluOp::Cmp.opcode();
const JMP: u8 = ControlOp::Jmp.opcode();
const JNE: u8 = ControlOp::Jne.opcode();

fn program(bytes: &[u8]) -> Program {
    Program::new(bytes.to_vec()).unwrap()
}

#[test]
fn test_long_countdown_prints_every_value() {
    let result = Cpu::new(&program(&[
        LDI, 0, 255, //
        LDI, 2, 6, // loop head
        PRN, 0, //
        DEC, 0, //
        CMP, 0, 3, //
        JNE, 2, //
        HLT,
    ]))
    .run()
    .unwrap();

    assert_eq!(result.outputs.len(), 255);
    assert_eq!(result.outputs[0], 255);
    assert_eq!(result.outputs[254], 1);
    // 2 loads, 4 instructions per iteration, the final halt
    assert_eq!(result.cycles, 2 + 255 * 4 + 1);
}

#[test]
fn test_program_filling_most_of_memory() {
    // 84 loads back to back, then a halt: 253 of 256 bytes
    let mut bytes = Vec::new();
    for _ in 0..84 {
        bytes.extend_from_slice(&[LDI, 0, 7]);
    }
    bytes.push(HLT);
    assert!(bytes.len() <= MEMORY_SIZE);

    let result = Cpu::new(&program(&bytes)).run().unwrap();
    assert_eq!(result.cycles, 85);
    assert!(result.outputs.is_empty());
}

#[test]
fn test_hundred_pushes_walk_the_stack_down() {
    // Push R0 a hundred times in a loop, counting down in R1
    let mut cpu = Cpu::new(&program(&[
        LDI, 0, 7, //
        LDI, 1, 100, //
        LDI, 2, 9, // loop head
        PUSH, 0, //
        DEC, 1, //
        CMP, 1, 3, //
        JNE, 2, //
        HLT,
    ]));
    while !cpu.is_halted() {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.machine().sp(), STACK_INIT - 100);
    assert_eq!(cpu.machine().read_reg(Register::R1), 0);
    // Every pushed cell holds the same value
    assert_eq!(cpu.machine().peek(STACK_INIT - 1), 7);
    assert_eq!(cpu.machine().peek(STACK_INIT - 100), 7);
}

#[test]
fn test_runaway_program_is_contained() {
    let config = CpuConfig {
        max_cycles: Some(100_000),
        trace: false,
    };
    let err = Cpu::with_config(&program(&[LDI, 0, 3, JMP, 0]), config)
        .run()
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::CycleLimitExceeded { limit: 100_000 }
    ));
}

#[test]
fn test_many_independent_machines() {
    let image = program(&[LDI, 0, 8, PRN, 0, HLT]);
    for _ in 0..100 {
        let result = Cpu::new(&image).run().unwrap();
        assert_eq!(result.outputs, vec![8]);
    }
}
