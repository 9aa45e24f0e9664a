//! 编译流水线
//!
//! 管理编译状态机、执行编译流程，并构建服务端使用的 JSON 载荷。

use super::compiler::{Analysis, CompileError};
use super::config::CompileConfig;
use crate::frontend::core::lexer::{self, Token};
use crate::frontend::core::parser::{self, tree, Module};
use crate::middle::{AstToIrGenerator, IrListing, IrModule};
use crate::util::diagnostic::{ErrorReport, JsonEmitter};
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{debug, warn};

/// 编译阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilationPhase {
    Lexing,
    Parsing,
    Lowering,
}

impl fmt::Display for CompilationPhase {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            CompilationPhase::Lexing => write!(f, "lexing"),
            CompilationPhase::Parsing => write!(f, "parsing"),
            CompilationPhase::Lowering => write!(f, "lowering"),
        }
    }
}

/// 流水线状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// 空闲状态
    #[default]
    Idle,
    /// 词法分析中
    Lexing,
    /// 语法分析中
    Parsing,
    /// IR 生成中
    Lowering,
    /// 编译完成
    Completed,
    /// 编译失败
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Lexing => write!(f, "lexing"),
            PipelineState::Parsing => write!(f, "parsing"),
            PipelineState::Lowering => write!(f, "lowering"),
            PipelineState::Completed => write!(f, "completed"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// 编译结果
#[derive(Debug, Clone)]
pub struct CompilationResult {
    /// 最终状态
    pub state: PipelineState,
    /// AST 与 IR，或第一个错误；失败阶段之前的产物全部丢弃
    pub outcome: Result<Analysis, CompileError>,
    /// 各阶段耗时（微秒）
    pub phase_durations: Vec<(CompilationPhase, u64)>,
    /// 总耗时（微秒）
    pub total_duration_us: u64,
}

impl CompilationResult {
    /// 是否成功
    pub fn is_success(&self) -> bool {
        self.state == PipelineState::Completed && self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&CompileError> {
        self.outcome.as_ref().err()
    }

    /// 耗时最长的阶段
    pub fn slowest_phase(&self) -> Option<CompilationPhase> {
        self.phase_durations
            .iter()
            .max_by_key(|(_, us)| *us)
            .map(|(phase, _)| *phase)
    }

    pub fn into_result(self) -> Result<Analysis, CompileError> {
        self.outcome
    }
}

/// 编译流水线
#[derive(Debug, Default)]
pub struct Pipeline {
    /// 当前状态
    state: PipelineState,
    /// 配置
    config: CompileConfig,
}

impl Pipeline {
    /// 创建新流水线
    pub fn new(config: CompileConfig) -> Self {
        Self {
            state: PipelineState::Idle,
            config,
        }
    }

    /// 获取当前状态
    #[inline]
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// 获取配置
    #[inline]
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// 重置为空闲状态
    #[inline]
    pub fn reset(&mut self) {
        self.state = PipelineState::Idle;
    }

    /// 运行完整编译流程
    pub fn run(
        &mut self,
        source: &str,
    ) -> CompilationResult {
        let start_time = Instant::now();
        let mut phase_durations = Vec::new();
        debug!("compiling source ({} bytes)", source.len());

        let outcome = self.run_stages(source, &mut phase_durations);
        let total_us = start_time.elapsed().as_micros() as u64;

        match &outcome {
            Ok(_) => {
                self.state = PipelineState::Completed;
                debug!("compilation complete in {}us", total_us);
            }
            Err(error) => {
                self.state = PipelineState::Failed;
                warn!("compilation failed with {}: {}", error.kind(), error);
            }
        }

        CompilationResult {
            state: self.state,
            outcome,
            phase_durations,
            total_duration_us: total_us,
        }
    }

    fn run_stages(
        &mut self,
        source: &str,
        phase_durations: &mut Vec<(CompilationPhase, u64)>,
    ) -> Result<Analysis, CompileError> {
        let tokens = self.run_lexing(source, phase_durations)?;
        let ast = self.run_parsing(&tokens, phase_durations)?;
        let ir = self.run_lowering(&ast, phase_durations)?;
        Ok(Analysis { ast, ir })
    }

    /// 词法分析阶段
    fn run_lexing(
        &mut self,
        source: &str,
        phase_durations: &mut Vec<(CompilationPhase, u64)>,
    ) -> Result<Vec<Token>, CompileError> {
        self.state = PipelineState::Lexing;
        let start = Instant::now();
        let result = lexer::tokenize_with(source, self.config.tab_width);
        phase_durations.push((CompilationPhase::Lexing, start.elapsed().as_micros() as u64));
        Ok(result?)
    }

    /// 语法分析阶段
    fn run_parsing(
        &mut self,
        tokens: &[Token],
        phase_durations: &mut Vec<(CompilationPhase, u64)>,
    ) -> Result<Module, CompileError> {
        self.state = PipelineState::Parsing;
        let start = Instant::now();
        let result = parser::parse_with(tokens, self.config.parse_options());
        phase_durations.push((CompilationPhase::Parsing, start.elapsed().as_micros() as u64));
        Ok(result?)
    }

    /// IR 生成阶段
    fn run_lowering(
        &mut self,
        ast: &Module,
        phase_durations: &mut Vec<(CompilationPhase, u64)>,
    ) -> Result<IrModule, CompileError> {
        self.state = PipelineState::Lowering;
        let start = Instant::now();
        let result = AstToIrGenerator::new().generate_module_ir(ast);
        phase_durations.push((CompilationPhase::Lowering, start.elapsed().as_micros() as u64));
        Ok(result?)
    }
}

/// 成功载荷 `{success: true, ast_text, ast_tree, ir}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessPayload {
    pub success: bool,
    pub ast_text: String,
    pub ast_tree: tree::TreeNode,
    pub ir: IrListing,
}

/// 可视化服务消费的 JSON 载荷
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisPayload {
    Success(SuccessPayload),
    Failure(ErrorReport),
}

impl AnalysisPayload {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        AnalysisPayload::Success(SuccessPayload {
            success: true,
            ast_text: tree::dump(&analysis.ast),
            ast_tree: tree::to_tree(&analysis.ast),
            ir: analysis.ir.listing(),
        })
    }

    pub fn from_error(error: &CompileError) -> Self {
        let report = JsonEmitter::new().report(&error.to_diagnostic(), error.kind().as_str());
        AnalysisPayload::Failure(report)
    }

    pub fn from_result(result: &Result<Analysis, CompileError>) -> Self {
        match result {
            Ok(analysis) => Self::from_analysis(analysis),
            Err(error) => Self::from_error(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisPayload::Success(_))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
