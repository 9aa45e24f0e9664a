//! 编译器核心
//!
//! 词法分析 → 语法分析 → IR 生成，任一阶段失败即停止。

use crate::frontend::core::lexer::{self, LexError, Token};
use crate::frontend::core::parser::{self, Module, ParseError};
use crate::middle::{AstToIrGenerator, IrGenError, IrModule};
use crate::util::diagnostic::{Diagnostic, ErrorCode};
use crate::util::span::Span;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::config::CompileConfig;
use super::pipeline::{Pipeline, PipelineState};

/// 成功分析的产物
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub ast: Module,
    pub ir: IrModule,
}

/// 编译器
///
/// # 示例
///
/// ```
/// use pytac::frontend::Compiler;
///
/// let mut compiler = Compiler::new();
/// let analysis = compiler.compile("x = 1\n").unwrap();
/// assert_eq!(analysis.ir.toplevel_lines(), vec!["store 1 -> x"]);
/// ```
#[derive(Debug, Default)]
pub struct Compiler {
    /// 编译流水线
    pipeline: Pipeline,
}

impl Compiler {
    /// 创建新编译器
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用配置创建编译器
    #[inline]
    pub fn with_config(config: CompileConfig) -> Self {
        Self {
            pipeline: Pipeline::new(config),
        }
    }

    /// 获取编译配置
    #[inline]
    pub fn config(&self) -> &CompileConfig {
        self.pipeline.config()
    }

    /// 获取流水线实例
    #[inline]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// 获取当前编译状态
    #[inline]
    pub fn state(&self) -> PipelineState {
        self.pipeline.state()
    }

    /// 完整编译：AST 与 IR
    pub fn compile(
        &mut self,
        source: &str,
    ) -> Result<Analysis, CompileError> {
        self.pipeline.run(source).into_result()
    }

    /// 只进行词法分析
    pub fn lex(
        &self,
        source: &str,
    ) -> Result<Vec<Token>, CompileError> {
        Ok(lexer::tokenize_with(source, self.config().tab_width)?)
    }

    /// 只进行语法分析
    pub fn parse(
        &self,
        tokens: &[Token],
    ) -> Result<Module, CompileError> {
        Ok(parser::parse_with(tokens, self.config().parse_options())?)
    }

    /// 生成 IR
    pub fn lower(
        &self,
        ast: &Module,
    ) -> Result<IrModule, CompileError> {
        Ok(AstToIrGenerator::new().generate_module_ir(ast)?)
    }

    /// 重置编译器状态
    #[inline]
    pub fn reset(&mut self) {
        self.pipeline.reset();
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    LoweringError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::LexicalError => "LexicalError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::LoweringError => "LoweringError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 编译错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// 词法分析错误
    #[error(transparent)]
    Lex(#[from] LexError),

    /// 语法分析错误
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IR 生成错误
    #[error(transparent)]
    Lower(#[from] IrGenError),
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lex(_) => ErrorKind::LexicalError,
            CompileError::Parse(_) => ErrorKind::SyntaxError,
            CompileError::Lower(_) => ErrorKind::LoweringError,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex(e) => Span::point(e.position()),
            CompileError::Parse(e) => e.span(),
            CompileError::Lower(e) => e.span(),
        }
    }

    /// 1-based line of the error
    pub fn line(&self) -> usize {
        self.span().start.line
    }

    /// 1-based column of the error
    pub fn column(&self) -> usize {
        self.span().start.column
    }

    /// 注册表中的错误码
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Lex(e) => match e {
                LexError::UnexpectedChar { .. } => ErrorCode::UNEXPECTED_CHARACTER,
                LexError::UnterminatedString { .. } => ErrorCode::UNTERMINATED_STRING,
                LexError::InvalidEscape { .. } => ErrorCode::INVALID_ESCAPE,
                LexError::InvalidNumber { .. } => ErrorCode::MALFORMED_NUMBER,
                LexError::InconsistentDedent { .. } => ErrorCode::INCONSISTENT_DEDENT,
            },
            CompileError::Parse(e) => match e {
                ParseError::ExpectedToken { .. } | ParseError::UnexpectedToken { .. } => {
                    ErrorCode::UNEXPECTED_TOKEN
                }
                ParseError::EmptyBlock { .. } => ErrorCode::EMPTY_BLOCK,
                ParseError::InvalidAssignTarget { .. } => ErrorCode::INVALID_ASSIGN_TARGET,
                ParseError::DuplicateParameter { .. } => ErrorCode::DUPLICATE_PARAMETER,
                ParseError::Unsupported { .. } => ErrorCode::UNSUPPORTED_SYNTAX,
                ParseError::NestedDefinition { .. } => ErrorCode::NESTED_DEFINITION,
                ParseError::NestingTooDeep { .. } => ErrorCode::NESTING_TOO_DEEP,
            },
            CompileError::Lower(e) => match e {
                IrGenError::BreakOutsideLoop { .. } => ErrorCode::BREAK_OUTSIDE_LOOP,
                IrGenError::ContinueOutsideLoop { .. } => ErrorCode::CONTINUE_OUTSIDE_LOOP,
                IrGenError::ReturnOutsideFunction { .. } => ErrorCode::RETURN_OUTSIDE_FUNCTION,
                IrGenError::Unsupported { .. } => ErrorCode::UNSUPPORTED_CONSTRUCT,
            },
        }
    }

    /// 转换为可渲染的诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        Diagnostic::error(code.code, self.message())
            .at(self.span())
            .with_help(code.help)
    }
}
