//! Core algorithm layer
//! Tokenizer and parser; the IR generator lives in `middle`

pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use lexer::tokenize;
pub use parser::parse;
