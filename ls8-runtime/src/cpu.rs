//! Fetch-decode-execute engine

use crate::alu;
use crate::error::{Result, RuntimeError};
use crate::execute::{self, Step};
use crate::io::IoHandler;
use crate::machine::Machine;
use ls8_spec::{decode, AluOp, ControlOp, Family, PrimaryOp, Program};
use std::io::Write;

/// CPU configuration
#[derive(Debug, Clone, Default)]
pub struct CpuConfig {
    /// Stop with an error after this many cycles (None = run until HLT)
    pub max_cycles: Option<u64>,

    /// Print a trace line to stderr before every cycle
    pub trace: bool,
}

/// Execution summary returned by [`Cpu::run`]
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed, the halt included
    pub cycles: u64,

    /// Values printed by PRN, in execution order
    pub outputs: Vec<u8>,
}

/// LS-8 CPU: machine state plus the run loop
pub struct Cpu {
    machine: Machine,
    io: IoHandler,
    config: CpuConfig,
    cycles: u64,
    halted: bool,
}

impl Cpu {
    pub fn new(program: &Program) -> Self {
        Self::with_config(program, CpuConfig::default())
    }

    pub fn with_config(program: &Program, config: CpuConfig) -> Self {
        Self {
            machine: Machine::with_program(program),
            io: IoHandler::new(),
            config,
            cycles: 0,
            halted: false,
        }
    }

    /// Stream PRN output to a writer as it is emitted
    pub fn set_output(&mut self, sink: Box<dyn Write + Send>) {
        self.io.set_sink(sink);
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Read-only view of the machine state
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Values printed so far
    pub fn outputs(&self) -> &[u8] {
        self.io.values()
    }

    /// Run until HLT, or until a fatal error stops the loop
    pub fn run(mut self) -> Result<ExecutionResult> {
        while !self.halted {
            if let Some(limit) = self.config.max_cycles {
                if self.cycles >= limit {
                    return Err(RuntimeError::CycleLimitExceeded { limit });
                }
            }
            if self.config.trace {
                eprintln!("{}", self.trace_line());
            }
            self.step()?;
            self.cycles += 1;
        }

        tracing::debug!(cycles = self.cycles, "halted");
        Ok(ExecutionResult {
            cycles: self.cycles,
            outputs: self.io.values().to_vec(),
        })
    }

    /// Execute a single fetch-decode-execute cycle
    pub fn step(&mut self) -> Result<()> {
        let pc = self.machine.pc();
        let opcode = self.machine.peek(pc);
        // Both operand bytes are fetched up front; they are consulted only
        // when the operand count says so.
        let operand_a = self.machine.peek(pc.wrapping_add(1));
        let operand_b = self.machine.peek(pc.wrapping_add(2));

        let decoded = decode(opcode);
        let advance = decoded.operand_count + 1;

        match decoded.family {
            Family::Alu => {
                let op = AluOp::from_ident(decoded.ident)
                    .ok_or(RuntimeError::UnsupportedOpcode { opcode, pc })?;
                alu::apply(&mut self.machine, op, operand_a, operand_b)?;
                self.machine.advance_pc(advance);
            }
            Family::Control => {
                let op = ControlOp::from_ident(decoded.ident)
                    .ok_or(RuntimeError::UnsupportedOpcode { opcode, pc })?;
                execute::control(&mut self.machine, op, operand_a)?;
            }
            Family::Primary => {
                let op = PrimaryOp::from_ident(decoded.ident)
                    .ok_or(RuntimeError::UnsupportedOpcode { opcode, pc })?;
                let step = execute::primary(
                    &mut self.machine,
                    &mut self.io,
                    op,
                    operand_a,
                    operand_b,
                    advance,
                )?;
                if step == Step::Halt {
                    self.halted = true;
                }
            }
        }
        Ok(())
    }

    /// Trace line for the current cycle (read-only)
    pub fn trace_line(&self) -> String {
        let pc = self.machine.pc();
        let window = [
            self.machine.peek(pc),
            self.machine.peek(pc.wrapping_add(1)),
            self.machine.peek(pc.wrapping_add(2)),
        ];
        ls8_trace::trace_line(pc, window, &self.machine.registers())
    }
}
