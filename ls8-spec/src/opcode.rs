//! # LS-8 Opcode Encoding
//!
//! Each instruction is a single opcode byte optionally followed by one or
//! two operand bytes. The opcode byte packs its decoding metadata into
//! fixed bit positions:
//!
//! ```text
//! bit  7 6 5 4 3 2 1 0
//!      A A B C D D D D
//! ```
//!
//! - `AA` (bits 7-6): number of operand bytes following the opcode
//! - `B` (bit 5): ALU family
//! - `C` (bit 4): control-flow family (jump/call/return)
//! - `DDDD` (bits 3-0): operation identifier within the family
//!
//! The identifier namespaces are disjoint: the same four bits name
//! different operations depending on the family bits. When both family
//! bits are set the ALU bit wins, matching the reference dispatch order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shift that brings the operand-count field down to bits 1-0
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// ALU-family bit
pub const ALU_MASK: u8 = 0b0010_0000;

/// Control-flow-family bit
pub const CONTROL_MASK: u8 = 0b0001_0000;

/// Operation identifier field
pub const IDENT_MASK: u8 = 0b0000_1111;

/// Instruction family selected by the opcode's structural bits
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Arithmetic/logic/comparison, handled by the ALU
    Alu,
    /// Jump, conditional jump, call, return
    Control,
    /// Data movement, output, stack push/pop, halt
    Primary,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Alu => "alu",
            Family::Control => "control",
            Family::Primary => "primary",
        };
        write!(f, "{}", name)
    }
}

/// Structural classification of one opcode byte
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    /// Handler family
    pub family: Family,
    /// Operation identifier (bits 3-0), meaningful within `family`
    pub ident: u8,
    /// Number of operand bytes following the opcode
    pub operand_count: u8,
}

/// Classify an opcode byte.
///
/// Pure and total: every byte maps to exactly one `(family, ident,
/// operand_count)` triple. Whether `ident` names a real operation within
/// its family is resolved separately via `from_ident` on the family enums.
#[inline]
pub fn decode(opcode: u8) -> Decoded {
    let family = if opcode & ALU_MASK != 0 {
        Family::Alu
    } else if opcode & CONTROL_MASK != 0 {
        Family::Control
    } else {
        Family::Primary
    };

    Decoded {
        family,
        ident: opcode & IDENT_MASK,
        operand_count: opcode >> OPERAND_COUNT_SHIFT,
    }
}

/// ALU operation (bit 5 set)
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    /// ADD: reg[a] = reg[a] + reg[b]
    Add = 0b0000,
    /// SUB: reg[a] = reg[a] - reg[b]
    Sub = 0b0001,
    /// MUL: reg[a] = reg[a] * reg[b]
    Mul = 0b0010,
    /// DIV: reg[a] = reg[a] / reg[b]
    Div = 0b0011,
    /// MOD: reg[a] = reg[a] % reg[b]
    Mod = 0b0100,
    /// INC: reg[a] = reg[a] + 1
    Inc = 0b0101,
    /// DEC: reg[a] = reg[a] - 1
    Dec = 0b0110,
    /// CMP: set flags from reg[a] vs reg[b]
    Cmp = 0b0111,
    /// AND: reg[a] = reg[a] & reg[b]
    And = 0b1000,
    /// NOT: reg[a] = !reg[a]
    Not = 0b1001,
    /// OR: reg[a] = reg[a] | reg[b]
    Or = 0b1010,
    /// XOR: reg[a] = reg[a] ^ reg[b]
    Xor = 0b1011,
    /// SHL: reg[a] = reg[a] << reg[b]
    Shl = 0b1100,
    /// SHR: reg[a] = reg[a] >> reg[b]
    Shr = 0b1101,
}

impl AluOp {
    /// Resolve an identifier within the ALU namespace
    pub fn from_ident(ident: u8) -> Option<Self> {
        match ident {
            0b0000 => Some(AluOp::Add),
            0b0001 => Some(AluOp::Sub),
            0b0010 => Some(AluOp::Mul),
            0b0011 => Some(AluOp::Div),
            0b0100 => Some(AluOp::Mod),
            0b0101 => Some(AluOp::Inc),
            0b0110 => Some(AluOp::Dec),
            0b0111 => Some(AluOp::Cmp),
            0b1000 => Some(AluOp::And),
            0b1001 => Some(AluOp::Not),
            0b1010 => Some(AluOp::Or),
            0b1011 => Some(AluOp::Xor),
            0b1100 => Some(AluOp::Shl),
            0b1101 => Some(AluOp::Shr),
            _ => None,
        }
    }

    #[inline]
    pub const fn ident(self) -> u8 {
        self as u8
    }

    /// INC, DEC and NOT take a single register and ignore the second
    /// operand byte
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self, AluOp::Inc | AluOp::Dec | AluOp::Not)
    }

    #[inline]
    pub const fn operand_count(self) -> u8 {
        if self.is_unary() {
            1
        } else {
            2
        }
    }

    /// Canonical opcode byte
    #[inline]
    pub const fn opcode(self) -> u8 {
        (self.operand_count() << OPERAND_COUNT_SHIFT) | ALU_MASK | self.ident()
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
            AluOp::Div => "DIV",
            AluOp::Mod => "MOD",
            AluOp::Inc => "INC",
            AluOp::Dec => "DEC",
            AluOp::Cmp => "CMP",
            AluOp::And => "AND",
            AluOp::Not => "NOT",
            AluOp::Or => "OR",
            AluOp::Xor => "XOR",
            AluOp::Shl => "SHL",
            AluOp::Shr => "SHR",
        }
    }

    /// All operations in this family
    pub const ALL: [AluOp; 14] = [
        AluOp::Add,
        AluOp::Sub,
        AluOp::Mul,
        AluOp::Div,
        AluOp::Mod,
        AluOp::Inc,
        AluOp::Dec,
        AluOp::Cmp,
        AluOp::And,
        AluOp::Not,
        AluOp::Or,
        AluOp::Xor,
        AluOp::Shl,
        AluOp::Shr,
    ];
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// Control-flow operation (bit 4 set, bit 5 clear)
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlOp {
    /// CALL: push return address, jump to reg[a]
    Call = 0b0000,
    /// RET: pop return address into PC
    Ret = 0b0001,
    /// JMP: PC = reg[a]
    Jmp = 0b0100,
    /// JEQ: PC = reg[a] if the Equal flag is set
    Jeq = 0b0101,
    /// JNE: PC = reg[a] if the Equal flag is clear
    Jne = 0b0110,
}

impl ControlOp {
    /// Resolve an identifier within the control-flow namespace
    pub fn from_ident(ident: u8) -> Option<Self> {
        match ident {
            0b0000 => Some(ControlOp::Call),
            0b0001 => Some(ControlOp::Ret),
            0b0100 => Some(ControlOp::Jmp),
            0b0101 => Some(ControlOp::Jeq),
            0b0110 => Some(ControlOp::Jne),
            _ => None,
        }
    }

    #[inline]
    pub const fn ident(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn operand_count(self) -> u8 {
        match self {
            ControlOp::Ret => 0,
            _ => 1,
        }
    }

    /// Canonical opcode byte
    #[inline]
    pub const fn opcode(self) -> u8 {
        (self.operand_count() << OPERAND_COUNT_SHIFT) | CONTROL_MASK | self.ident()
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            ControlOp::Call => "CALL",
            ControlOp::Ret => "RET",
            ControlOp::Jmp => "JMP",
            ControlOp::Jeq => "JEQ",
            ControlOp::Jne => "JNE",
        }
    }

    /// All operations in this family
    pub const ALL: [ControlOp; 5] = [
        ControlOp::Call,
        ControlOp::Ret,
        ControlOp::Jmp,
        ControlOp::Jeq,
        ControlOp::Jne,
    ];
}

impl fmt::Display for ControlOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// Primary operation (both family bits clear)
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryOp {
    /// HLT: stop execution
    Hlt = 0b0001,
    /// LDI: reg[a] = immediate b
    Ldi = 0b0010,
    /// PUSH: decrement SP, memory[SP] = reg[a]
    Push = 0b0101,
    /// POP: reg[a] = memory[SP], increment SP
    Pop = 0b0110,
    /// PRN: print reg[a] as a decimal integer
    Prn = 0b0111,
}

impl PrimaryOp {
    /// Resolve an identifier within the primary namespace
    pub fn from_ident(ident: u8) -> Option<Self> {
        match ident {
            0b0001 => Some(PrimaryOp::Hlt),
            0b0010 => Some(PrimaryOp::Ldi),
            0b0101 => Some(PrimaryOp::Push),
            0b0110 => Some(PrimaryOp::Pop),
            0b0111 => Some(PrimaryOp::Prn),
            _ => None,
        }
    }

    #[inline]
    pub const fn ident(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn operand_count(self) -> u8 {
        match self {
            PrimaryOp::Hlt => 0,
            PrimaryOp::Ldi => 2,
            _ => 1,
        }
    }

    /// Canonical opcode byte
    #[inline]
    pub const fn opcode(self) -> u8 {
        (self.operand_count() << OPERAND_COUNT_SHIFT) | self.ident()
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            PrimaryOp::Hlt => "HLT",
            PrimaryOp::Ldi => "LDI",
            PrimaryOp::Push => "PUSH",
            PrimaryOp::Pop => "POP",
            PrimaryOp::Prn => "PRN",
        }
    }

    /// All operations in this family
    pub const ALL: [PrimaryOp; 5] = [
        PrimaryOp::Hlt,
        PrimaryOp::Ldi,
        PrimaryOp::Push,
        PrimaryOp::Pop,
        PrimaryOp::Prn,
    ];
}

impl fmt::Display for PrimaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
