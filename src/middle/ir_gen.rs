//! AST 到 IR 的代码生成器
//!
//! 将抽象语法树（AST）转换为三地址码（IR）。
//! 编译流程：词法分析 → 语法分析 → IR 生成
//!
//! 函数与方法各自拥有独立的临时变量和标签计数器，模块顶层语句共享一个。

use crate::frontend::core::parser::ast::{BinOp, Expr, FunctionDef, Module, Stmt, StmtKind};
use crate::middle::ir::{
    ConstValue, Instruction, IrFunction, IrModule, Label, Operand, StoreTarget, Temp,
};
use crate::util::span::Span;
use tracing::debug;

/// IR 生成错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IrGenError {
    #[error("'break' outside loop at {}", .span.start)]
    BreakOutsideLoop { span: Span },
    #[error("'continue' not properly in loop at {}", .span.start)]
    ContinueOutsideLoop { span: Span },
    #[error("'return' outside function at {}", .span.start)]
    ReturnOutsideFunction { span: Span },
    #[error("cannot lower {construct} at {}", .span.start)]
    Unsupported { construct: String, span: Span },
}

impl IrGenError {
    pub fn span(&self) -> Span {
        match self {
            IrGenError::BreakOutsideLoop { span }
            | IrGenError::ContinueOutsideLoop { span }
            | IrGenError::ReturnOutsideFunction { span }
            | IrGenError::Unsupported { span, .. } => *span,
        }
    }
}

/// AST 到 IR 的生成器
#[derive(Debug, Default)]
pub struct AstToIrGenerator;

impl AstToIrGenerator {
    /// 创建新的 IR 生成器
    pub fn new() -> Self {
        Self
    }

    /// 从 AST 模块生成 IR 模块
    ///
    /// 顶层 `def` 生成函数，`class` 的每个方法生成 `Class.method`，
    /// 其余语句进入 `toplevel`。同名定义后者覆盖前者。
    pub fn generate_module_ir(
        &self,
        module: &Module,
    ) -> Result<IrModule, IrGenError> {
        let mut ir = IrModule::default();
        let mut toplevel = LoweringContext::new(ScopeKind::Module);

        for stmt in &module.body {
            match &stmt.kind {
                StmtKind::FunctionDef(def) => {
                    let function = self.generate_function_ir(&def.name, def, false)?;
                    ir.functions.insert(function.name.clone(), function);
                }
                StmtKind::ClassDef { name, methods } => {
                    for method in methods {
                        let qualified = format!("{}.{}", name, method.name);
                        let is_init = method.name == "__init__";
                        let function = self.generate_function_ir(&qualified, method, is_init)?;
                        ir.functions.insert(qualified, function);
                    }
                }
                _ => toplevel.lower_stmt(stmt)?,
            }
        }

        ir.toplevel = toplevel.finish();
        debug!(
            "generated IR: {} function(s), {} top-level instruction(s)",
            ir.functions.len(),
            ir.toplevel.len()
        );
        Ok(ir)
    }

    /// 生成单个函数的 IR
    fn generate_function_ir(
        &self,
        name: &str,
        def: &FunctionDef,
        implicit_return: bool,
    ) -> Result<IrFunction, IrGenError> {
        let mut ctx = LoweringContext::new(ScopeKind::Function);
        ctx.lower_block(&def.body)?;

        // 构造器末尾补一个裸 return
        let ends_with_return = matches!(
            def.body.last().map(|s| &s.kind),
            Some(StmtKind::Return(_))
        );
        if implicit_return && !ends_with_return {
            ctx.emit(Instruction::Return(None));
        }

        let instructions = ctx.finish();
        debug!("lowered '{}' ({} instructions)", name, instructions.len());
        Ok(IrFunction {
            name: name.to_string(),
            params: def.param_names().map(str::to_string).collect(),
            instructions,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Module,
    Function,
}

/// `continue` 和 `break` 的跳转目标
#[derive(Debug, Clone, Copy)]
struct LoopLabels {
    head: Label,
    end: Label,
}

/// 单个作用域的生成状态
struct LoweringContext {
    scope: ScopeKind,
    instructions: Vec<Instruction>,
    next_temp: usize,
    next_label: usize,
    loops: Vec<LoopLabels>,
}

impl LoweringContext {
    fn new(scope: ScopeKind) -> Self {
        Self {
            scope,
            instructions: Vec::new(),
            next_temp: 1,
            next_label: 1,
            loops: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Instruction> {
        self.instructions
    }

    fn emit(
        &mut self,
        instruction: Instruction,
    ) {
        self.instructions.push(instruction);
    }

    fn fresh_temp(&mut self) -> Temp {
        let temp = Temp(self.next_temp);
        self.next_temp += 1;
        temp
    }

    fn fresh_label(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;
        label
    }

    fn lower_block(
        &mut self,
        stmts: &[Stmt],
    ) -> Result<(), IrGenError> {
        for stmt in stmts {
            self.lower_stmt(stmt)?;
        }
        Ok(())
    }

    fn lower_stmt(
        &mut self,
        stmt: &Stmt,
    ) -> Result<(), IrGenError> {
        match &stmt.kind {
            StmtKind::FunctionDef(_) => Err(IrGenError::Unsupported {
                construct: "nested function definition".to_string(),
                span: stmt.span,
            }),
            StmtKind::ClassDef { .. } => Err(IrGenError::Unsupported {
                construct: "nested class definition".to_string(),
                span: stmt.span,
            }),
            // `t op= v` arrives as `t = t op v` with `t` cloned into the left operand
            StmtKind::Assign {
                target,
                value: Expr::BinOp {
                    op, left, right, ..
                },
            } if **left == *target => self.lower_augmented(target, *op, right),
            StmtKind::Assign { target, value } => {
                let src = self.lower_expr(value)?;
                let target = self.lower_target(target)?;
                self.emit(Instruction::Store { src, target });
                Ok(())
            }
            StmtKind::If {
                test,
                then_body,
                else_body,
            } => self.lower_if(test, then_body, else_body.as_deref()),
            StmtKind::While { test, body } => self.lower_while(test, body),
            StmtKind::Return(value) => {
                if self.scope == ScopeKind::Module {
                    return Err(IrGenError::ReturnOutsideFunction { span: stmt.span });
                }
                let value = value.as_ref().map(|v| self.lower_expr(v)).transpose()?;
                self.emit(Instruction::Return(value));
                Ok(())
            }
            StmtKind::Pass => Ok(()),
            StmtKind::Break => {
                let labels = self
                    .loops
                    .last()
                    .ok_or(IrGenError::BreakOutsideLoop { span: stmt.span })?;
                let end = labels.end;
                self.emit(Instruction::Jump(end));
                Ok(())
            }
            StmtKind::Continue => {
                let labels = self
                    .loops
                    .last()
                    .ok_or(IrGenError::ContinueOutsideLoop { span: stmt.span })?;
                let head = labels.head;
                self.emit(Instruction::Jump(head));
                Ok(())
            }
            StmtKind::Expr(expr) => self.lower_expr_stmt(expr),
        }
    }

    /// 表达式语句：调用类表达式已产生临时变量，裸值需要显式赋给一个
    fn lower_expr_stmt(
        &mut self,
        expr: &Expr,
    ) -> Result<(), IrGenError> {
        match expr {
            Expr::Constant(..) | Expr::Name(..) | Expr::AttributeRef { .. } => {
                let src = self.lower_expr(expr)?;
                let dst = self.fresh_temp();
                self.emit(Instruction::Assign { dst, src });
            }
            _ => {
                self.lower_expr(expr)?;
            }
        }
        Ok(())
    }

    /// 增量赋值：目标的接收者只求值一次，读和写共用它
    fn lower_augmented(
        &mut self,
        target: &Expr,
        op: BinOp,
        value: &Expr,
    ) -> Result<(), IrGenError> {
        let target = self.lower_target(target)?;
        let lhs = match &target {
            StoreTarget::Var(name) => Operand::Var(name.clone()),
            StoreTarget::Attr { base, name } => Operand::Attr {
                base: Box::new(base.clone()),
                name: name.clone(),
            },
        };
        let rhs = self.lower_expr(value)?;
        let dst = self.fresh_temp();
        self.emit(Instruction::BinOp { dst, op, lhs, rhs });
        self.emit(Instruction::Store {
            src: Operand::Temp(dst),
            target,
        });
        Ok(())
    }

    fn lower_if(
        &mut self,
        test: &Expr,
        then_body: &[Stmt],
        else_body: Option<&[Stmt]>,
    ) -> Result<(), IrGenError> {
        let cond = self.lower_expr(test)?;
        let then_label = self.fresh_label();
        let else_label = else_body.map(|_| self.fresh_label());
        let end_label = self.fresh_label();

        self.emit(Instruction::CondJump {
            cond,
            target: then_label,
        });
        self.emit(Instruction::Jump(else_label.unwrap_or(end_label)));
        self.emit(Instruction::Label(then_label));
        self.lower_block(then_body)?;

        if let (Some(else_body), Some(else_label)) = (else_body, else_label) {
            self.emit(Instruction::Jump(end_label));
            self.emit(Instruction::Label(else_label));
            self.lower_block(else_body)?;
        }

        self.emit(Instruction::Label(end_label));
        Ok(())
    }

    fn lower_while(
        &mut self,
        test: &Expr,
        body: &[Stmt],
    ) -> Result<(), IrGenError> {
        let head = self.fresh_label();
        let body_label = self.fresh_label();
        let end = self.fresh_label();

        self.emit(Instruction::Label(head));
        let cond = self.lower_expr(test)?;
        self.emit(Instruction::CondJump {
            cond,
            target: body_label,
        });
        self.emit(Instruction::Jump(end));
        self.emit(Instruction::Label(body_label));

        self.loops.push(LoopLabels { head, end });
        let lowered = self.lower_block(body);
        self.loops.pop();
        lowered?;

        self.emit(Instruction::Jump(head));
        self.emit(Instruction::Label(end));
        Ok(())
    }

    fn lower_target(
        &mut self,
        target: &Expr,
    ) -> Result<StoreTarget, IrGenError> {
        match target {
            Expr::Name(name, _) => Ok(StoreTarget::Var(name.clone())),
            Expr::AttributeRef { receiver, attr, .. } => Ok(StoreTarget::Attr {
                base: self.lower_expr(receiver)?,
                name: attr.clone(),
            }),
            other => Err(IrGenError::Unsupported {
                construct: format!("assignment to {}", other.kind_name()),
                span: other.span(),
            }),
        }
    }

    fn lower_args(
        &mut self,
        args: &[Expr],
    ) -> Result<Vec<Operand>, IrGenError> {
        args.iter().map(|arg| self.lower_expr(arg)).collect()
    }

    /// 生成表达式，返回持有其值的操作数
    fn lower_expr(
        &mut self,
        expr: &Expr,
    ) -> Result<Operand, IrGenError> {
        match expr {
            Expr::Constant(literal, _) => Ok(Operand::Const(ConstValue::from(literal))),
            Expr::Name(name, _) => Ok(Operand::Var(name.clone())),
            Expr::AttributeRef { receiver, attr, .. } => Ok(Operand::Attr {
                base: Box::new(self.lower_expr(receiver)?),
                name: attr.clone(),
            }),
            Expr::BinOp {
                op, left, right, ..
            } => {
                let lhs = self.lower_expr(left)?;
                let rhs = self.lower_expr(right)?;
                let dst = self.fresh_temp();
                self.emit(Instruction::BinOp {
                    dst,
                    op: *op,
                    lhs,
                    rhs,
                });
                Ok(Operand::Temp(dst))
            }
            Expr::UnaryOp { op, operand, .. } => {
                let src = self.lower_expr(operand)?;
                let dst = self.fresh_temp();
                self.emit(Instruction::UnaryOp { dst, op: *op, src });
                Ok(Operand::Temp(dst))
            }
            Expr::Call { callee, args, .. } => {
                let func = self.lower_expr(callee)?;
                let args = self.lower_args(args)?;
                let dst = self.fresh_temp();
                self.emit(Instruction::Call { dst, func, args });
                Ok(Operand::Temp(dst))
            }
            Expr::MethodCall {
                receiver,
                method,
                args,
                ..
            } => {
                let receiver = self.lower_expr(receiver)?;
                let args = self.lower_args(args)?;
                let dst = self.fresh_temp();
                self.emit(Instruction::MethodCall {
                    dst,
                    receiver,
                    method: method.clone(),
                    args,
                });
                Ok(Operand::Temp(dst))
            }
            Expr::New { class, args, .. } => {
                let args = self.lower_args(args)?;
                let dst = self.fresh_temp();
                self.emit(Instruction::New {
                    dst,
                    class: class.clone(),
                    args,
                });
                Ok(Operand::Temp(dst))
            }
        }
    }
}
