//! Statement-at-a-time code generation.

use super::abi::Register;
use super::instruction::Instr;
use super::regalloc::RegisterFile;
use crate::frontend::{Op, Statement};
use crate::TranslateError;

/// Code generation driver: owns the output sequence and the register bank.
pub struct Codegen {
    out: Vec<Instr>,
    regs: RegisterFile,
}

impl Codegen {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            regs: RegisterFile::new(),
        }
    }

    /// Translate one statement, appending its instructions to the output.
    ///
    /// Every register acquired here is released again before returning, so
    /// consecutive statements always start from a full bank.
    pub fn emit_statement(&mut self, stmt: &Statement) -> Result<(), TranslateError> {
        let reg1 = self.regs.acquire(&stmt.a)?;
        let reg2 = self.regs.acquire(&stmt.b)?;

        match stmt.op {
            // The MUL/DIV forms address the AX/BX pair directly; reg1/reg2
            // stay bound until the end of the statement but never appear in
            // the emitted text.
            Op::Mul | Op::Div => {
                self.out.push(Instr::load(Register::ACCUMULATOR, stmt.a.as_str()));
                self.out.push(Instr::load(Register::SECONDARY, stmt.b.as_str()));
                self.out.push(Instr::Accum {
                    op: stmt.op,
                    b: Register::SECONDARY,
                });
            }
            Op::Add | Op::Sub => {
                self.out.push(Instr::load(reg1, stmt.a.as_str()));
                self.out.push(Instr::load(reg2, stmt.b.as_str()));
                self.out.push(Instr::Binary {
                    op: stmt.op,
                    a: reg1,
                    b: reg2,
                });
            }
        }

        // The result is stored from the accumulator, whichever register the
        // destination was bound to.
        self.regs.acquire(&stmt.dest)?;
        self.out.push(Instr::store(stmt.dest.as_str(), Register::ACCUMULATOR));

        self.regs.release(&stmt.a);
        self.regs.release(&stmt.b);
        self.regs.release(&stmt.dest);
        Ok(())
    }

    /// Consume the generator and hand back the finished sequence.
    pub fn finish(self) -> Vec<Instr> {
        self.out
    }
}
