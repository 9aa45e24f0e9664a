//! JSON 诊断渲染器
//!
//! 输出前端服务约定的失败载荷

use crate::util::diagnostic::Diagnostic;
use serde::Serialize;

/// 失败载荷 `{success: false, error, kind, line, column}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub success: bool,
    /// 渲染后的错误消息
    pub error: String,
    /// 错误类别: `LexicalError`, `SyntaxError`, `LoweringError`
    pub kind: String,
    /// 错误码
    pub code: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

/// JSON 诊断渲染器
#[derive(Debug, Clone, Default)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// 缩进输出
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// 从诊断构建失败载荷
    pub fn report(
        &self,
        diagnostic: &Diagnostic,
        kind: &str,
    ) -> ErrorReport {
        let start = diagnostic
            .span
            .filter(|span| !span.is_dummy())
            .map(|span| span.start);

        ErrorReport {
            success: false,
            error: diagnostic.message.clone(),
            kind: kind.to_string(),
            code: diagnostic.code.clone(),
            line: start.map(|pos| pos.line),
            column: start.map(|pos| pos.column),
        }
    }

    /// 渲染为 JSON 字符串
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        kind: &str,
    ) -> serde_json::Result<String> {
        let report = self.report(diagnostic, kind);
        if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
    }
}
