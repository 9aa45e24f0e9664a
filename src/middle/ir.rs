//! Intermediate Representation
//!
//! Linear three-address code. Every value-producing instruction writes a fresh
//! temporary; control flow uses labels and jumps.

use crate::frontend::core::lexer::tokens::{write_quoted, Literal};
use crate::frontend::core::parser::ast::{BinOp, UnOp};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Temporary, printed `t{n}`; numbering restarts in every scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temp(pub usize);

impl fmt::Display for Temp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Jump target, printed `L{n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub usize);

impl fmt::Display for Label {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Constant value
#[derive(Debug, Clone)]
pub enum ConstValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl PartialEq for ConstValue {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(l0), Self::Bool(r0)) => l0 == r0,
            (Self::Int(l0), Self::Int(r0)) => l0 == r0,
            (Self::Float(l0), Self::Float(r0)) => l0.to_bits() == r0.to_bits(),
            (Self::String(l0), Self::String(r0)) => l0 == r0,
            _ => false,
        }
    }
}

impl Eq for ConstValue {}

impl std::hash::Hash for ConstValue {
    fn hash<H: std::hash::Hasher>(
        &self,
        state: &mut H,
    ) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::None => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::String(s) => s.hash(state),
        }
    }
}

impl From<&Literal> for ConstValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(n) => ConstValue::Int(*n),
            Literal::Float(x) => ConstValue::Float(*x),
            Literal::Bool(b) => ConstValue::Bool(*b),
            Literal::String(s) => ConstValue::String(s.clone()),
            Literal::None => ConstValue::None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ConstValue::None => write!(f, "None"),
            ConstValue::Bool(true) => write!(f, "True"),
            ConstValue::Bool(false) => write!(f, "False"),
            ConstValue::Int(n) => write!(f, "{}", n),
            ConstValue::Float(x) => write!(f, "{:?}", x),
            ConstValue::String(s) => write_quoted(f, s),
        }
    }
}

/// Instruction operand
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Temp(Temp),
    /// Named variable or parameter
    Var(String),
    Const(ConstValue),
    /// Attribute path such as `self.name`
    Attr { base: Box<Operand>, name: String },
}

impl Operand {
    /// Temporaries read when this operand is evaluated
    pub fn temps(&self) -> Vec<Temp> {
        match self {
            Operand::Temp(t) => vec![*t],
            Operand::Attr { base, .. } => base.temps(),
            Operand::Var(_) | Operand::Const(_) => Vec::new(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Operand::Temp(t) => write!(f, "{}", t),
            Operand::Var(name) => write!(f, "{}", name),
            Operand::Const(value) => write!(f, "{}", value),
            Operand::Attr { base, name } => write!(f, "{}.{}", base, name),
        }
    }
}

/// Destination of a `store`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreTarget {
    Var(String),
    Attr { base: Operand, name: String },
}

impl fmt::Display for StoreTarget {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            StoreTarget::Var(name) => write!(f, "{}", name),
            StoreTarget::Attr { base, name } => write!(f, "{}.{}", base, name),
        }
    }
}

/// Instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `t = value`, only for bare-value expression statements
    Assign {
        dst: Temp,
        src: Operand,
    },
    Store {
        src: Operand,
        target: StoreTarget,
    },
    Call {
        dst: Temp,
        func: Operand,
        args: Vec<Operand>,
    },
    MethodCall {
        dst: Temp,
        receiver: Operand,
        method: String,
        args: Vec<Operand>,
    },
    New {
        dst: Temp,
        class: String,
        args: Vec<Operand>,
    },
    BinOp {
        dst: Temp,
        op: BinOp,
        lhs: Operand,
        rhs: Operand,
    },
    UnaryOp {
        dst: Temp,
        op: UnOp,
        src: Operand,
    },
    Return(Option<Operand>),
    Label(Label),
    /// Jump to `target` when `cond` is truthy, fall through otherwise
    CondJump {
        cond: Operand,
        target: Label,
    },
    Jump(Label),
}

impl Instruction {
    /// Temporary defined by this instruction
    pub fn result(&self) -> Option<Temp> {
        match self {
            Instruction::Assign { dst, .. }
            | Instruction::Call { dst, .. }
            | Instruction::MethodCall { dst, .. }
            | Instruction::New { dst, .. }
            | Instruction::BinOp { dst, .. }
            | Instruction::UnaryOp { dst, .. } => Some(*dst),
            Instruction::Store { .. }
            | Instruction::Return(_)
            | Instruction::Label(_)
            | Instruction::CondJump { .. }
            | Instruction::Jump(_) => None,
        }
    }

    /// Temporaries read by this instruction
    pub fn used_temps(&self) -> Vec<Temp> {
        let operands: Vec<&Operand> = match self {
            Instruction::Assign { src, .. } | Instruction::UnaryOp { src, .. } => vec![src],
            Instruction::Store { src, target } => match target {
                StoreTarget::Var(_) => vec![src],
                StoreTarget::Attr { base, .. } => vec![src, base],
            },
            Instruction::Call { func, args, .. } => std::iter::once(func).chain(args).collect(),
            Instruction::MethodCall { receiver, args, .. } => {
                std::iter::once(receiver).chain(args).collect()
            }
            Instruction::New { args, .. } => args.iter().collect(),
            Instruction::BinOp { lhs, rhs, .. } => vec![lhs, rhs],
            Instruction::Return(value) => value.iter().collect(),
            Instruction::CondJump { cond, .. } => vec![cond],
            Instruction::Label(_) | Instruction::Jump(_) => Vec::new(),
        };
        operands.into_iter().flat_map(Operand::temps).collect()
    }
}

struct Args<'a>(&'a [Operand]);

impl fmt::Display for Args<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Instruction::Assign { dst, src } => write!(f, "{} = {}", dst, src),
            Instruction::Store { src, target } => write!(f, "store {} -> {}", src, target),
            Instruction::Call { dst, func, args } => {
                write!(f, "{} = call {}({})", dst, func, Args(args))
            }
            Instruction::MethodCall {
                dst,
                receiver,
                method,
                args,
            } => write!(f, "{} = call {}.{}({})", dst, receiver, method, Args(args)),
            Instruction::New { dst, class, args } => {
                write!(f, "{} = new {}({})", dst, class, Args(args))
            }
            Instruction::BinOp { dst, op, lhs, rhs } => {
                write!(f, "{} = {} {} {}", dst, lhs, op.symbol(), rhs)
            }
            Instruction::UnaryOp { dst, op, src } => write!(f, "{} = {}{}", dst, op.symbol(), src),
            Instruction::Return(Some(value)) => write!(f, "return {}", value),
            Instruction::Return(None) => write!(f, "return"),
            Instruction::Label(label) => write!(f, "{}:", label),
            Instruction::CondJump { cond, target } => write!(f, "if {} jump {}", cond, target),
            Instruction::Jump(label) => write!(f, "jump {}", label),
        }
    }
}

/// Lowered function or method
#[derive(Debug, Clone, PartialEq)]
pub struct IrFunction {
    /// `name` for functions, `Class.name` for methods
    pub name: String,
    pub params: Vec<String>,
    pub instructions: Vec<Instruction>,
}

impl IrFunction {
    /// Rendered instructions in order
    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for IrFunction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "function {}({}):", self.name, self.params.join(", "))?;
        for instruction in &self.instructions {
            writeln!(f, "    {}", instruction)?;
        }
        Ok(())
    }
}

/// Lowered module
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrModule {
    /// Functions and methods in definition order
    pub functions: IndexMap<String, IrFunction>,
    /// Module-level instructions
    pub toplevel: Vec<Instruction>,
}

impl IrModule {
    pub fn function(
        &self,
        name: &str,
    ) -> Option<&IrFunction> {
        self.functions.get(name)
    }

    pub fn toplevel_lines(&self) -> Vec<String> {
        self.toplevel.iter().map(ToString::to_string).collect()
    }

    /// Serializable listing for the service payload
    pub fn listing(&self) -> IrListing {
        IrListing {
            functions: self
                .functions
                .values()
                .map(|function| FunctionListing {
                    name: function.name.clone(),
                    params: function.params.clone(),
                    instructions: function.lines(),
                })
                .collect(),
            toplevel: self.toplevel_lines(),
        }
    }
}

impl fmt::Display for IrModule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for function in self.functions.values() {
            writeln!(f, "{}", function)?;
        }
        writeln!(f, "toplevel:")?;
        for instruction in &self.toplevel {
            writeln!(f, "    {}", instruction)?;
        }
        Ok(())
    }
}

/// `{functions, toplevel}` as rendered strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrListing {
    pub functions: Vec<FunctionListing>,
    pub toplevel: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionListing {
    pub name: String,
    pub params: Vec<String>,
    pub instructions: Vec<String>,
}
