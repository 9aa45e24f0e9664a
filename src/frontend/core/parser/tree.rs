//! Renderer-facing views of the AST
//!
//! `to_tree` builds a nested, serializable tree with pre-order node ids;
//! `dump` prints one line per node, indented two spaces per level.

use crate::frontend::core::parser::ast::*;
use serde::Serialize;

/// One node of the tree view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// Pre-order number, the root is 0
    pub id: usize,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Relation to the parent (`target`, `body`, `arg`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn with_role(
        mut self,
        role: &'static str,
    ) -> Self {
        self.role = Some(role);
        self
    }

    /// Number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    /// `role: Kind(value)` without indentation
    pub fn label(&self) -> String {
        let mut label = String::new();
        if let Some(role) = self.role {
            label.push_str(role);
            label.push_str(": ");
        }
        label.push_str(self.kind);
        if let Some(value) = &self.value {
            label.push('(');
            label.push_str(value);
            label.push(')');
        }
        label
    }
}

/// Build the tree view of a module; the root is a `Module` node
pub fn to_tree(module: &Module) -> TreeNode {
    let mut builder = TreeBuilder { next_id: 0 };
    let mut root = builder.open("Module", None);
    for stmt in &module.body {
        let child = builder.stmt(stmt);
        root.children.push(child);
    }
    root
}

/// Flat text lines for the statements of a module
pub fn dump_lines(module: &Module) -> Vec<String> {
    let root = to_tree(module);
    let mut lines = Vec::with_capacity(root.size());
    for child in &root.children {
        push_lines(child, 0, &mut lines);
    }
    lines
}

/// Flat text dump, one node per line
pub fn dump(module: &Module) -> String {
    let mut text = dump_lines(module).join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

fn push_lines(
    node: &TreeNode,
    depth: usize,
    lines: &mut Vec<String>,
) {
    lines.push(format!("{}{}", "  ".repeat(depth), node.label()));
    for child in &node.children {
        push_lines(child, depth + 1, lines);
    }
}

struct TreeBuilder {
    next_id: usize,
}

impl TreeBuilder {
    /// Allocate the next id; parents are opened before their children
    fn open(
        &mut self,
        kind: &'static str,
        value: Option<String>,
    ) -> TreeNode {
        let id = self.next_id;
        self.next_id += 1;
        TreeNode {
            id,
            kind,
            value,
            role: None,
            children: Vec::new(),
        }
    }

    fn body(
        &mut self,
        node: &mut TreeNode,
        stmts: &[Stmt],
        role: &'static str,
    ) {
        for stmt in stmts {
            let child = self.stmt(stmt).with_role(role);
            node.children.push(child);
        }
    }

    fn exprs(
        &mut self,
        node: &mut TreeNode,
        exprs: &[Expr],
        role: &'static str,
    ) {
        for expr in exprs {
            let child = self.expr(expr).with_role(role);
            node.children.push(child);
        }
    }

    fn function(
        &mut self,
        def: &FunctionDef,
    ) -> TreeNode {
        let mut node = self.open("FunctionDef", Some(def.name.clone()));
        for param in &def.params {
            let child = self.open("Param", Some(param.name.clone())).with_role("param");
            node.children.push(child);
        }
        self.body(&mut node, &def.body, "body");
        node
    }

    fn stmt(
        &mut self,
        stmt: &Stmt,
    ) -> TreeNode {
        match &stmt.kind {
            StmtKind::FunctionDef(def) => self.function(def),
            StmtKind::ClassDef { name, methods } => {
                let mut node = self.open("ClassDef", Some(name.clone()));
                for method in methods {
                    let child = self.function(method).with_role("method");
                    node.children.push(child);
                }
                node
            }
            StmtKind::Assign { target, value } => {
                let mut node = self.open("Assign", None);
                let target = self.expr(target).with_role("target");
                node.children.push(target);
                let value = self.expr(value).with_role("value");
                node.children.push(value);
                node
            }
            StmtKind::If {
                test,
                then_body,
                else_body,
            } => {
                let mut node = self.open("If", None);
                let test = self.expr(test).with_role("test");
                node.children.push(test);
                self.body(&mut node, then_body, "then");
                if let Some(else_body) = else_body {
                    self.body(&mut node, else_body, "else");
                }
                node
            }
            StmtKind::While { test, body } => {
                let mut node = self.open("While", None);
                let test = self.expr(test).with_role("test");
                node.children.push(test);
                self.body(&mut node, body, "body");
                node
            }
            StmtKind::Return(value) => {
                let mut node = self.open("Return", None);
                if let Some(value) = value {
                    let child = self.expr(value).with_role("value");
                    node.children.push(child);
                }
                node
            }
            StmtKind::Pass | StmtKind::Break | StmtKind::Continue => {
                self.open(stmt.kind_name(), None)
            }
            StmtKind::Expr(expr) => {
                let mut node = self.open("ExprStmt", None);
                let child = self.expr(expr);
                node.children.push(child);
                node
            }
        }
    }

    fn expr(
        &mut self,
        expr: &Expr,
    ) -> TreeNode {
        match expr {
            Expr::Constant(literal, _) => self.open("Constant", Some(literal.to_string())),
            Expr::Name(name, _) => self.open("Name", Some(name.clone())),
            Expr::BinOp {
                op, left, right, ..
            } => {
                let mut node = self.open("BinOp", Some(op.symbol().to_string()));
                let left = self.expr(left).with_role("left");
                node.children.push(left);
                let right = self.expr(right).with_role("right");
                node.children.push(right);
                node
            }
            Expr::UnaryOp { op, operand, .. } => {
                let mut node = self.open("UnaryOp", Some(op.symbol().trim_end().to_string()));
                let operand = self.expr(operand).with_role("operand");
                node.children.push(operand);
                node
            }
            Expr::Call { callee, args, .. } => {
                let mut node = self.open("Call", None);
                let callee = self.expr(callee).with_role("callee");
                node.children.push(callee);
                self.exprs(&mut node, args, "arg");
                node
            }
            Expr::MethodCall {
                receiver,
                method,
                args,
                ..
            } => {
                let mut node = self.open("MethodCall", Some(method.clone()));
                let receiver = self.expr(receiver).with_role("receiver");
                node.children.push(receiver);
                self.exprs(&mut node, args, "arg");
                node
            }
            Expr::New { class, args, .. } => {
                let mut node = self.open("New", Some(class.clone()));
                self.exprs(&mut node, args, "arg");
                node
            }
            Expr::AttributeRef { receiver, attr, .. } => {
                let mut node = self.open("AttributeRef", Some(attr.clone()));
                let receiver = self.expr(receiver).with_role("receiver");
                node.children.push(receiver);
                node
            }
        }
    }
}
