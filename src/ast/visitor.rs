use crate::ast::{Block, Condition, Expr, Factor, Program, Statement, Term};

/// Read-only traversal over the AST. Every method defaults to walking the
/// node's children, so implementors only override what they care about.
pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    fn visit_condition(&mut self, condition: &Condition) {
        walk_condition(self, condition);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_term(&mut self, term: &Term) {
        walk_term(self, term);
    }

    fn visit_factor(&mut self, factor: &Factor) {
        walk_factor(self, factor);
    }
}

pub fn walk_program<V: AstVisitor + ?Sized>(visitor: &mut V, program: &Program) {
    visitor.visit_block(&program.block);
}

pub fn walk_block<V: AstVisitor + ?Sized>(visitor: &mut V, block: &Block) {
    for (_, procedure) in &block.procedures {
        visitor.visit_block(procedure);
    }
    visitor.visit_statement(&block.body);
}

pub fn walk_statement<V: AstVisitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Assign { expr, .. } | Statement::Write { expr } => visitor.visit_expr(expr),
        Statement::Call { .. } | Statement::Read { .. } => {}
        Statement::Compound { statements } => {
            for stmt in statements {
                visitor.visit_statement(stmt);
            }
        }
        Statement::If { cond, then } => {
            visitor.visit_condition(cond);
            visitor.visit_statement(then);
        }
        Statement::While { cond, body } => {
            visitor.visit_condition(cond);
            visitor.visit_statement(body);
        }
    }
}

pub fn walk_condition<V: AstVisitor + ?Sized>(visitor: &mut V, condition: &Condition) {
    match condition {
        Condition::Odd { expr } => visitor.visit_expr(expr),
        Condition::Compare { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
    }
}

pub fn walk_expr<V: AstVisitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    for (_, term) in &expr.terms {
        visitor.visit_term(term);
    }
}

pub fn walk_term<V: AstVisitor + ?Sized>(visitor: &mut V, term: &Term) {
    for factor in term.factors() {
        visitor.visit_factor(factor);
    }
}

pub fn walk_factor<V: AstVisitor + ?Sized>(visitor: &mut V, factor: &Factor) {
    if let Factor::Parenthesized(expr) = factor {
        visitor.visit_expr(expr);
    }
}

#[derive(Default)]
struct NodeCounter {
    count: usize,
}

impl AstVisitor for NodeCounter {
    fn visit_program(&mut self, program: &Program) {
        self.count += 1;
        walk_program(self, program);
    }

    fn visit_block(&mut self, block: &Block) {
        self.count += 1;
        walk_block(self, block);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        self.count += 1;
        walk_statement(self, statement);
    }

    fn visit_condition(&mut self, condition: &Condition) {
        self.count += 1;
        walk_condition(self, condition);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.count += 1;
        walk_expr(self, expr);
    }

    fn visit_term(&mut self, term: &Term) {
        self.count += 1;
        walk_term(self, term);
    }

    fn visit_factor(&mut self, factor: &Factor) {
        self.count += 1;
        walk_factor(self, factor);
    }
}

/// Number of AST nodes reachable from `program`, itself included.
pub fn count_nodes(program: &Program) -> usize {
    let mut counter = NodeCounter::default();
    counter.visit_program(program);
    counter.count
}
