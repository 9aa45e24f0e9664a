//! pytac
//!
//! A compiler front end for a small Python subset: an indentation-aware
//! tokenizer, a recursive-descent parser and a lowering pass to
//! three-address code.
//!
//! # Example
//!
//! ```
//! let analysis = pytac::analyze("def hello(name):\n    print(\"Hello,\", name)\n    return name\n").unwrap();
//! let hello = analysis.ir.function("hello").unwrap();
//! assert_eq!(hello.lines(), vec!["t1 = call print(\"Hello,\", name)", "return name"]);
//! ```

#![doc(html_root_url = "https://docs.rs/pytac")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::{Analysis, AnalysisPayload, CompileConfig, CompileError, Compiler, ErrorKind};
pub use thiserror::Error;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "pytac";

/// Tokenize, parse and lower source text with the default configuration
pub fn analyze(source: &str) -> std::result::Result<Analysis, CompileError> {
    analyze_with(source, CompileConfig::default())
}

/// Tokenize, parse and lower source text
pub fn analyze_with(
    source: &str,
    config: CompileConfig,
) -> std::result::Result<Analysis, CompileError> {
    Compiler::with_config(config).compile(source)
}

/// Read a source file
pub fn read_source(path: &Path) -> Result<String> {
    debug!("reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Analyze a source file
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    let source = read_source(path)?;
    analyze(&source).with_context(|| format!("Failed to compile: {}", path.display()))
}
