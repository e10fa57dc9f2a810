pub mod backend;
pub mod frontend;

use thiserror::Error;

use backend::instruction::Instr;
use backend::Codegen;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Unsupported operation in line: {line}")]
    UnsupportedOperation { line: String },

    #[error("Invalid operation format in line: {line}")]
    MalformedOperands { line: String },

    #[error("No registers available")]
    RegisterExhaustion,
}

pub fn translate_to_instrs(source: &str) -> Result<Vec<Instr>, TranslateError> {
    let mut cg = Codegen::new();
    for line in source.lines() {
        if let Some(stmt) = frontend::parse_line(line)? {
            cg.emit_statement(&stmt)?;
        }
    }
    Ok(cg.finish())
}

/// Translate source text directly to assembly text, one instruction per line.
pub fn translate(source: &str) -> Result<String, TranslateError> {
    let instrs = translate_to_instrs(source)?;
    Ok(instrs
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
