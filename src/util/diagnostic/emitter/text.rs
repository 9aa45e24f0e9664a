//! 诊断渲染器

use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::span::SourceFile;

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 是否启用颜色输出
    pub use_colors: bool,
    /// 是否显示源码片段
    pub show_source: bool,
    /// 是否显示帮助信息
    pub show_help: bool,
    /// 指示字符 (默认: "^")
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_source: true,
            show_help: true,
            indicator: '^',
        }
    }
}

/// 文本诊断渲染器
#[derive(Debug, Clone)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    /// 创建新的文本渲染器
    pub fn new() -> Self {
        Self {
            config: EmitterConfig::default(),
        }
    }

    /// 使用自定义配置创建渲染器
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// 渲染单个诊断
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        self.render_with_source(diagnostic, None)
    }

    /// 渲染诊断到指定源码文件
    pub fn render_with_source(
        &self,
        diagnostic: &Diagnostic,
        source_file: Option<&SourceFile>,
    ) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header(diagnostic));
        output.push_str(&self.render_location(diagnostic, source_file));

        if self.config.show_source {
            if let Some(snippet) = self.render_source_snippet(diagnostic, source_file) {
                output.push_str(&snippet);
            }
        }

        if self.config.show_help && !diagnostic.help.is_empty() {
            output.push_str(&format!("{}: {}\n", self.color("help", "help"), diagnostic.help));
        }

        output
    }

    /// 渲染错误头部
    fn render_header(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        let severity = diagnostic.severity.to_string();
        let style = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        if diagnostic.code.is_empty() {
            format!("{}: {}\n", self.color(style, &severity), diagnostic.message)
        } else {
            format!(
                "{}: {}\n",
                self.color(style, &format!("{}[{}]", severity, diagnostic.code)),
                self.color("bold", &diagnostic.message)
            )
        }
    }

    /// 渲染位置信息
    fn render_location(
        &self,
        diagnostic: &Diagnostic,
        source_file: Option<&SourceFile>,
    ) -> String {
        match &diagnostic.span {
            Some(span) if !span.is_dummy() => {
                let file_name = source_file
                    .map(|sf| sf.name.as_str())
                    .unwrap_or("<unknown>");
                format!(
                    " --> {}:{}:{}\n",
                    file_name, span.start.line, span.start.column
                )
            }
            _ => String::new(),
        }
    }

    /// 渲染源码片段（只显示起始行）
    fn render_source_snippet(
        &self,
        diagnostic: &Diagnostic,
        source_file: Option<&SourceFile>,
    ) -> Option<String> {
        let span = diagnostic.span.as_ref()?;
        if span.is_dummy() {
            return None;
        }

        let line = source_file?.line_text(span.start.line)?;
        let line_width = line.chars().count();
        let start_column = span.start.column.max(1);

        let indicator_len = if span.start.line == span.end.line {
            span.end.column.saturating_sub(start_column).max(1)
        } else {
            line_width.saturating_sub(start_column - 1).max(1)
        };

        let mut output = String::new();
        output.push_str("     |\n");
        output.push_str(&format!("{:>4} | {}\n", span.start.line, line));
        output.push_str(&format!(
            "     | {}{}\n",
            " ".repeat(start_column - 1),
            self.color(
                "error",
                &self.config.indicator.to_string().repeat(indicator_len)
            )
        ));
        Some(output)
    }

    /// 简单的颜色渲染
    fn color(
        &self,
        style: &str,
        text: &str,
    ) -> String {
        if !self.config.use_colors {
            return text.to_string();
        }

        match style {
            "error" => format!("\x1b[31m{}\x1b[0m", text),
            "warning" => format!("\x1b[33m{}\x1b[0m", text),
            "help" => format!("\x1b[36m{}\x1b[0m", text),
            "bold" => format!("\x1b[1m{}\x1b[0m", text),
            _ => text.to_string(),
        }
    }
}

impl Default for TextEmitter {
    fn default() -> Self {
        Self::new()
    }
}
