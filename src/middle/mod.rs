//! Intermediate Representation (IR)
//!
//! This module handles the transformation from AST to three-address code.

pub mod ir;
pub mod ir_gen;

#[cfg(test)]
mod tests;

pub use ir::*;
pub use ir_gen::{AstToIrGenerator, IrGenError};

use crate::frontend::core::parser::ast::Module;

/// Lower a parsed module with the default generator
pub fn lower(module: &Module) -> Result<IrModule, IrGenError> {
    AstToIrGenerator::new().generate_module_ir(module)
}
