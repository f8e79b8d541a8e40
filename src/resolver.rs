use std::collections::HashMap;
use std::mem;
use std::rc::Rc;

use crate::error::ErrorReporter;
use crate::expr::*;
use crate::interpreter::Interpreter;
use crate::literal::Literal;
use crate::stmt::*;
use crate::token::Token;

/// What kind of function body the resolver is currently inside of.
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

/// What kind of class body the resolver is currently inside of.
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Performs a single static pass over the syntax tree after parsing.
///
/// The resolver mirrors the interpreter's environment chain with a stack of
/// scopes and tells the interpreter, for every variable-like node, how many
/// frames separate the use from the declaration. It also enforces the rules
/// that are knowable without running the program, like `this` outside of a
/// class or a `return` at the top level. Globals are not tracked; a name
/// that is not found in any scope is assumed to live there.
pub struct Resolver<'a, 'o> {
    interpreter: &'a mut Interpreter<'o>,
    reporter: &'a mut ErrorReporter,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a, 'o> Resolver<'a, 'o> {
    pub fn new(interpreter: &'a mut Interpreter<'o>, reporter: &'a mut ErrorReporter) -> Self {
        Resolver {
            interpreter,
            reporter,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    fn resolve_function(&mut self, function: &Rc<FunctionData>, r#type: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, r#type);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks a name as existing but not yet usable in the current scope.
    fn declare(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("stack to be not empty");
        if scope.contains_key(&name.lexeme) {
            self.reporter.error_at(name, "Already a variable with this name in this scope.");
        }
        scope.insert(name.lexeme.to_owned(), false);
    }

    /// Marks a name as usable in the current scope.
    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert(name.lexeme.to_owned(), true);
    }

    /// Records the scope depth of a variable-like node. A name not found in
    /// any scope is left for the global environment at runtime.
    fn resolve_local(&mut self, id: usize, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, depth);
                return;
            }
        }
    }
}

impl<'a, 'o> ExprVisitor<()> for Resolver<'a, 'o> {
    fn visit_literal_expr(&mut self, _literal: &Literal) {}

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) {
        self.resolve_expr(&grouping.expr);
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) {
        self.resolve_expr(&unary.expr);
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) {
        self.resolve_expr(&binary.left);
        self.resolve_expr(&binary.right);
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) {
        self.resolve_expr(&logical.left);
        self.resolve_expr(&logical.right);
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) {
        if let Some(scope) = self.scopes.last() {
            if let Some(false) = scope.get(&variable.name.lexeme) {
                self.reporter.error_at(
                    &variable.name,
                    "Can't read local variable in its own initializer.",
                );
            }
        }

        self.resolve_local(variable.id, &variable.name);
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) {
        self.resolve_expr(&assign.value);
        self.resolve_local(assign.id, &assign.name);
    }

    fn visit_call_expr(&mut self, call: &CallData) {
        self.resolve_expr(&call.callee);

        for argument in &call.arguments {
            self.resolve_expr(argument);
        }
    }

    fn visit_get_expr(&mut self, get: &GetData) {
        // Properties are looked up dynamically, only the receiver resolves.
        self.resolve_expr(&get.object);
    }

    fn visit_set_expr(&mut self, set: &SetData) {
        self.resolve_expr(&set.value);
        self.resolve_expr(&set.object);
    }

    fn visit_this_expr(&mut self, this: &ThisData) {
        if let ClassType::None = self.current_class {
            self.reporter.error_at(&this.keyword, "Can't use 'this' outside of a class.");
            return;
        }

        self.resolve_local(this.id, &this.keyword);
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) {
        match self.current_class {
            ClassType::Subclass => (),
            ClassType::None => {
                self.reporter.error_at(&super_expr.keyword, "Can't use 'super' outside of a class.");
            },
            ClassType::Class => {
                self.reporter.error_at(
                    &super_expr.keyword,
                    "Can't use 'super' in a class with no superclass.",
                );
            },
        }

        self.resolve_local(super_expr.id, &super_expr.keyword);
    }
}

impl<'a, 'o> StmtVisitor<()> for Resolver<'a, 'o> {
    fn visit_expression_stmt(&mut self, expression: &ExpressionData) {
        self.resolve_expr(&expression.expr);
    }

    fn visit_print_stmt(&mut self, print: &PrintData) {
        self.resolve_expr(&print.expr);
    }

    fn visit_var_stmt(&mut self, var: &VarData) {
        self.declare(&var.name);
        if let Some(initializer) = &var.initializer {
            self.resolve_expr(initializer);
        }
        self.define(&var.name);
    }

    fn visit_block_stmt(&mut self, block: &BlockData) {
        self.begin_scope();
        self.resolve(&block.statements);
        self.end_scope();
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfData) {
        self.resolve_expr(&if_stmt.condition);
        self.resolve_stmt(&if_stmt.then_branch);
        if let Some(else_branch) = &if_stmt.else_branch {
            self.resolve_stmt(else_branch);
        }
    }

    fn visit_while_stmt(&mut self, while_stmt: &WhileData) {
        self.resolve_expr(&while_stmt.condition);
        self.resolve_stmt(&while_stmt.body);
    }

    fn visit_function_stmt(&mut self, function: &Rc<FunctionData>) {
        self.declare(&function.name);
        self.define(&function.name);

        self.resolve_function(function, FunctionType::Function);
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnData) {
        if let FunctionType::None = self.current_function {
            self.reporter.error_at(&return_stmt.keyword, "Can't return from top-level code.");
        }

        if let Some(value) = &return_stmt.value {
            if let FunctionType::Initializer = self.current_function {
                self.reporter.error_at(
                    &return_stmt.keyword,
                    "Can't return a value from an initializer.",
                );
                return;
            }

            self.resolve_expr(value);
        }
    }

    fn visit_class_stmt(&mut self, class: &ClassData) {
        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&class.name);
        self.define(&class.name);

        if let Some(superclass) = &class.superclass {
            if let Expr::Variable(variable) = superclass {
                if class.name.lexeme == variable.name.lexeme {
                    self.reporter.error_at(&variable.name, "A class can't inherit from itself.");
                }
            } else {
                unreachable!();
            }

            self.current_class = ClassType::Subclass;

            self.resolve_expr(superclass);

            self.begin_scope();
            self.scopes
                .last_mut()
                .expect("stack to be not empty")
                .insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert("this".to_string(), true);

        for method in &class.methods {
            let decleration = if method.name.lexeme.eq("init") {
                FunctionType::Initializer
            } else {
                FunctionType::Method
            };
            self.resolve_function(method, decleration);
        }

        self.end_scope();

        if class.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }
}
