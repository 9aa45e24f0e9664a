//! 统一诊断系统
//!
//! - [`error`] - 诊断数据结构 (Diagnostic, Severity)
//! - [`codes`] - 错误码注册表
//! - [`emitter`] - 文本与 JSON 渲染器
//!
//! ```ignore
//! let emitter = TextEmitter::new();
//! eprint!("{}", emitter.render_with_source(&diagnostic, Some(&source_file)));
//! ```

pub mod codes;
pub mod emitter;
pub mod error;

#[cfg(test)]
mod tests;

// 重新导出
pub use codes::ErrorCode;
pub use emitter::{EmitterConfig, ErrorReport, JsonEmitter, TextEmitter};
pub use error::{Diagnostic, Severity};
