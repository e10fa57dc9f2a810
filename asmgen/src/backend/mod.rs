//! Output backend — lowers parsed statements to instruction text.
//!
//! Module layout:
//! - `abi`         — register bank definitions and fixed-role constants
//! - `instruction` — typed output instructions and their text lowering
//! - `regalloc`    — per-statement register allocation
//! - `codegen`     — statement-at-a-time emission driver

pub mod abi;
mod codegen;
pub mod instruction;
pub mod regalloc;

pub use codegen::Codegen;
