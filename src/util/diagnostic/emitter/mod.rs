//! 诊断输出模块

pub mod json;
pub mod text;

pub use json::{ErrorReport, JsonEmitter};
pub use text::{EmitterConfig, TextEmitter};
