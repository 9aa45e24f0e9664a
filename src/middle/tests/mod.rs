//! IR tests module
//!
//! - lowering: 表达式与语句的生成结果
//! - control_flow: if / while / break / continue 的标签与跳转
//! - errors: 生成错误
//! - properties: 临时变量单次定义、先定义后使用


use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::parse;
use crate::middle::{lower, IrGenError, IrModule};

pub(crate) fn lower_source(source: &str) -> IrModule {
    let tokens = tokenize(source).unwrap();
    let module = parse(&tokens).unwrap();
    lower(&module).unwrap()
}

pub(crate) fn lower_error(source: &str) -> IrGenError {
    let tokens = tokenize(source).unwrap();
    let module = parse(&tokens).unwrap();
    lower(&module).unwrap_err()
}

/// Rendered lines of a function
pub(crate) fn function_lines(
    ir: &IrModule,
    name: &str,
) -> Vec<String> {
    ir.function(name)
        .unwrap_or_else(|| panic!("function '{}' not lowered", name))
        .lines()
}
