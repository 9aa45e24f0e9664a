//! Frontend compilation pipeline
//!
//! This module contains the lexer, the parser, and the compiler driver that
//! hands the AST to the IR generator.

pub mod compiler;
pub mod config;
pub mod core;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use compiler::{Analysis, CompileError, Compiler, ErrorKind};
pub use config::CompileConfig;
pub use pipeline::{AnalysisPayload, CompilationPhase, CompilationResult, Pipeline, PipelineState};
