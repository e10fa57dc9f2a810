//! Source-language frontend: the statement model and line parsing.
//!
//! The input is one assignment per line, `dest = a OP b` with OP one of
//! `+ - * /`. There is no tokenizer: the operator is detected by *presence*,
//! checking `+` before `-` before `*` before `/`, and the right-hand side is
//! split on every occurrence of the winning character. A line containing `+`
//! anywhere is therefore always treated as an addition, whatever else it
//! contains.

use crate::TranslateError;

/// Binary operation of one assignment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Detection order; earlier entries win by presence, not position.
    const PRIORITY: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// The source character of this operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// The assembly mnemonic of this operation.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Op::Add => "ADD",
            Op::Sub => "SUB",
            Op::Mul => "MUL",
            Op::Div => "DIV",
        }
    }

    /// First operation whose character occurs anywhere in `rhs`.
    fn detect(rhs: &str) -> Option<Op> {
        Op::PRIORITY
            .into_iter()
            .find(|op| rhs.contains(op.symbol()))
    }
}

/// One parsed assignment, `dest = a op b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub dest: String,
    pub op: Op,
    pub a: String,
    pub b: String,
}

/// Parse one source line.
///
/// Returns `Ok(None)` for lines that are not statements: blank lines and
/// lines without `=` are skipped rather than rejected.
pub fn parse_line(line: &str) -> Result<Option<Statement>, TranslateError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let Some((dest, rhs)) = line.split_once('=') else {
        return Ok(None);
    };
    let dest = dest.trim();
    let rhs = rhs.trim();

    let op = Op::detect(rhs).ok_or_else(|| TranslateError::UnsupportedOperation {
        line: line.to_string(),
    })?;

    let operands: Vec<&str> = rhs.split(op.symbol()).collect();
    if operands.len() != 2 {
        return Err(TranslateError::MalformedOperands {
            line: line.to_string(),
        });
    }
    let a = operands[0].trim();
    let b = operands[1].trim();
    if !is_bare_operand(a) || !is_bare_operand(b) {
        return Err(TranslateError::MalformedOperands {
            line: line.to_string(),
        });
    }

    Ok(Some(Statement {
        dest: dest.to_string(),
        op,
        a: a.to_string(),
        b: b.to_string(),
    }))
}

/// A usable operand token: non-empty and free of operator and assignment
/// characters.
fn is_bare_operand(token: &str) -> bool {
    !token.is_empty() && !token.contains(['+', '-', '*', '/', '='])
}
