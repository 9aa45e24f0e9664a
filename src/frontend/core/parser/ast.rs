//! Abstract Syntax Tree types

pub use crate::frontend::core::lexer::tokens::Literal;
use crate::util::span::Span;

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(Literal, Span),
    Name(String, Span),
    BinOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
        span: Span,
    },
    /// Plain call `f(args)`; the callee is any non-class expression
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        span: Span,
    },
    /// `receiver.method(args)`
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
        span: Span,
    },
    /// Call of a known class name: `Person(args)`
    New {
        class: String,
        args: Vec<Expr>,
        span: Span,
    },
    /// `receiver.attr` outside call position
    AttributeRef {
        receiver: Box<Expr>,
        attr: String,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Constant(_, span) | Expr::Name(_, span) => *span,
            Expr::BinOp { span, .. }
            | Expr::UnaryOp { span, .. }
            | Expr::Call { span, .. }
            | Expr::MethodCall { span, .. }
            | Expr::New { span, .. }
            | Expr::AttributeRef { span, .. } => *span,
        }
    }

    /// Node name used by the tree view and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Constant(..) => "Constant",
            Expr::Name(..) => "Name",
            Expr::BinOp { .. } => "BinOp",
            Expr::UnaryOp { .. } => "UnaryOp",
            Expr::Call { .. } => "Call",
            Expr::MethodCall { .. } => "MethodCall",
            Expr::New { .. } => "New",
            Expr::AttributeRef { .. } => "AttributeRef",
        }
    }

    /// Names and attribute references can appear on the left of `=`
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Name(..) | Expr::AttributeRef { .. })
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinOp {
    /// Source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::FloorDiv => "//",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOp {
    Neg,
    Not,
}

impl UnOp {
    /// Prefix spelling, `not` carries its separating space
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "not ",
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub span: Span,
}

/// Function or method definition
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl FunctionDef {
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

/// Statement kinds
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    FunctionDef(FunctionDef),
    ClassDef {
        name: String,
        methods: Vec<FunctionDef>,
    },
    /// `target = value`; augmented forms arrive already expanded
    Assign {
        target: Expr,
        value: Expr,
    },
    /// `elif` chains nest as a single `If` inside `else_body`
    If {
        test: Expr,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
    While {
        test: Expr,
        body: Vec<Stmt>,
    },
    Return(Option<Expr>),
    Pass,
    Break,
    Continue,
    Expr(Expr),
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(
        kind: StmtKind,
        span: Span,
    ) -> Self {
        Self { kind, span }
    }

    /// Node name used by the tree view and error messages
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            StmtKind::FunctionDef(_) => "FunctionDef",
            StmtKind::ClassDef { .. } => "ClassDef",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::If { .. } => "If",
            StmtKind::While { .. } => "While",
            StmtKind::Return(_) => "Return",
            StmtKind::Pass => "Pass",
            StmtKind::Break => "Break",
            StmtKind::Continue => "Continue",
            StmtKind::Expr(_) => "ExprStmt",
        }
    }
}

/// Module (compilation unit)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub body: Vec<Stmt>,
    pub span: Span,
}
