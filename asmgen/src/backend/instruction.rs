//! Typed output instructions and their assembly text lowering.
//!
//! This module defines the instruction operand type (`Operand`), the typed
//! instruction set (`Instr`), and the `Display` impl that lowers each
//! instruction to one line of output text.

use super::abi::Register;
use crate::frontend::Op;
use std::fmt;

// ============================================================================
// Operands
// ============================================================================

/// An instruction operand.
///
/// Registers print as their bare name (`AX`); named memory cells print in
/// bracketed form (`[total]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Reg(Register),
    Mem(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(r) => write!(f, "{r}"),
            Operand::Mem(name) => write!(f, "[{name}]"),
        }
    }
}

// ============================================================================
// Typed instructions
// ============================================================================

/// A typed output instruction.
///
/// Instructions are organised by operand format:
///
/// - **Mov** (`MOV dst , src`): register/memory transfers.
/// - **Binary** (`op Ra , Rb`): two-register arithmetic, result left in `Ra`.
/// - **Accum** (`op Rb`): single-operand arithmetic with the accumulator as
///   the implicit left operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// `MOV dst , src`
    Mov { dst: Operand, src: Operand },
    /// `ADD Ra , Rb` / `SUB Ra , Rb`
    Binary { op: Op, a: Register, b: Register },
    /// `MUL Rb` / `DIV Rb`
    Accum { op: Op, b: Register },
}

// ── Convenience constructors ────────────────────────────────────────────

impl Instr {
    /// `MOV Rd , [var]` — load a named memory cell into a register.
    pub fn load(d: Register, var: impl Into<String>) -> Self {
        Instr::Mov {
            dst: Operand::Reg(d),
            src: Operand::Mem(var.into()),
        }
    }

    /// `MOV [var] , Rs` — store a register into a named memory cell.
    pub fn store(var: impl Into<String>, s: Register) -> Self {
        Instr::Mov {
            dst: Operand::Mem(var.into()),
            src: Operand::Reg(s),
        }
    }

    /// Returns `true` if this instruction writes a memory cell.
    pub fn is_store(&self) -> bool {
        matches!(
            self,
            Instr::Mov {
                dst: Operand::Mem(_),
                ..
            }
        )
    }
}

// ── Display — lower to output text ──────────────────────────────────────

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Mov { dst, src } => write!(f, "MOV {dst} , {src}"),
            Instr::Binary { op, a, b } => write!(f, "{} {a} , {b}", op.mnemonic()),
            Instr::Accum { op, b } => write!(f, "{} {b}", op.mnemonic()),
        }
    }
}
