use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{RuntimeError, Unwind};
use crate::expr::*;
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::*;
use crate::token::{Token, Type};

type EvalResult = Result<Object, Unwind>;
type ExecResult = Result<(), Unwind>;

/// Walks the resolved syntax tree and evaluates it.
///
/// The interpreter owns the global environment, a handle to the environment
/// of whatever scope is currently executing, and the scope-depth map filled
/// in by the resolver. Program output goes through the `out` writer so the
/// driver decides where prints end up.
pub struct Interpreter<'a> {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<usize, usize>,
    out: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            globals: Rc::clone(&globals),
            environment: globals,
            locals: HashMap::new(),
            out,
        }
    }

    /// Executes the statements in order. The first runtime error aborts the
    /// run and is handed back to the driver.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                return match unwind {
                    Unwind::Error(error) => Err(error),
                    Unwind::Return(_) => unreachable!("return outside of a function"),
                };
            }
        }

        Ok(())
    }

    /// Records the scope depth of a resolved node.
    pub fn resolve(&mut self, id: usize, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Executes the statements inside the given environment, restoring the
    /// previous environment on every exit path.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Fetches a variable through the depth map, falling back to globals for
    /// names the resolver never saw in a scope.
    fn look_up_variable(&self, name: &Token, id: usize) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(distance) => {
                self.environment.borrow().get_at(*distance, &name.lexeme)
                    .ok_or_else(|| RuntimeError {
                        token: name.clone(),
                        message: format!("Undefined variable '{}'.", name.lexeme),
                    })
            },
            None => self.globals.borrow().get(name),
        }
    }

    fn number_operand(&self, operator: &Token, operand: &Object) -> Result<f64, RuntimeError> {
        operand.as_number().ok_or_else(|| RuntimeError {
            token: operator.clone(),
            message: "Operand must be a number.".to_string(),
        })
    }

    fn number_operands(&self, operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
        match (left.as_number(), right.as_number()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
        }
    }
}

impl<'a> ExprVisitor<EvalResult> for Interpreter<'a> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Object::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> EvalResult {
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> EvalResult {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => {
                let number = self.number_operand(&unary.operator, &right)?;
                Ok(Object::from(-number))
            },
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!(),
        }
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> EvalResult {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        match operator.r#type {
            Type::Greater => {
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left > right))
            },
            Type::GreaterEqual => {
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left >= right))
            },
            Type::Less => {
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left < right))
            },
            Type::LessEqual => {
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left <= right))
            },
            Type::Minus => {
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left - right))
            },
            Type::Slash => {
                // Division by zero follows f64 semantics.
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left / right))
            },
            Type::Star => {
                let (left, right) = self.number_operands(operator, &left, &right)?;
                Ok(Object::from(left * right))
            },
            Type::Plus => match (left, right) {
                (Object::Literal(Literal::Number(left)), Object::Literal(Literal::Number(right))) => {
                    Ok(Object::from(left + right))
                },
                (Object::Literal(Literal::String(left)), Object::Literal(Literal::String(right))) => {
                    Ok(Object::from(left + &right))
                },
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }.into()),
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            _ => unreachable!(),
        }
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> EvalResult {
        let left = self.evaluate(&logical.left)?;

        // The result is the last operand actually evaluated, not a boolean.
        match logical.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> EvalResult {
        Ok(self.look_up_variable(&variable.name, variable.id)?)
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> EvalResult {
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.id) {
            Some(distance) => {
                self.environment.borrow_mut().assign_at(*distance, &assign.name, value.clone());
            },
            None => {
                self.globals.borrow_mut().assign(&assign.name, value.clone())?;
            },
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> EvalResult {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function,
            Object::NativeFunction(native) => native,
            Object::Class(class) => class,
            _ => return Err(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }.into()),
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            }.into());
        }

        Ok(callable.call(self, arguments)?)
    }

    fn visit_get_expr(&mut self, get: &GetData) -> EvalResult {
        let object = self.evaluate(&get.object)?;

        match &object {
            Object::Instance(instance) => Ok(instance.borrow().get(&get.name, &object)?),
            _ => Err(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have properties.".to_string(),
            }.into()),
        }
    }

    fn visit_set_expr(&mut self, set: &SetData) -> EvalResult {
        let object = self.evaluate(&set.object)?;

        match object {
            Object::Instance(instance) => {
                let value = self.evaluate(&set.value)?;
                instance.borrow_mut().set(&set.name, value.clone());
                Ok(value)
            },
            _ => Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            }.into()),
        }
    }

    fn visit_this_expr(&mut self, this: &ThisData) -> EvalResult {
        Ok(self.look_up_variable(&this.keyword, this.id)?)
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) -> EvalResult {
        // The resolver placed `super` one frame outside of `this`.
        let distance = *self.locals.get(&super_expr.id)
            .expect("'super' to be resolved");

        let superclass = self.environment.borrow().get_at(distance, "super")
            .expect("'super' to be bound in the class scope");
        let Object::Class(superclass) = superclass else { unreachable!() };

        let object = self.environment.borrow().get_at(distance - 1, "this")
            .expect("'this' to be bound inside of a method");

        let method = superclass.borrow().find_method(&super_expr.method.lexeme)
            .ok_or_else(|| RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'.", super_expr.method.lexeme),
            })?;

        Ok(Object::from(method.bind(&object)))
    }
}

impl<'a> StmtVisitor<ExecResult> for Interpreter<'a> {
    fn visit_expression_stmt(&mut self, expression: &ExpressionData) -> ExecResult {
        self.evaluate(&expression.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, print: &PrintData) -> ExecResult {
        let value = self.evaluate(&print.expr)?;
        writeln!(self.out, "{value}").expect("output stream to be writable");
        Ok(())
    }

    fn visit_var_stmt(&mut self, var: &VarData) -> ExecResult {
        let value = match &var.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&var.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, block: &BlockData) -> ExecResult {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&block.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfData) -> ExecResult {
        if self.evaluate(&if_stmt.condition)?.is_truthy() {
            self.execute(&if_stmt.then_branch)
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, while_stmt: &WhileData) -> ExecResult {
        while self.evaluate(&while_stmt.condition)?.is_truthy() {
            self.execute(&while_stmt.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, function: &Rc<FunctionData>) -> ExecResult {
        let value = Function::new(function, &self.environment, false);
        self.environment.borrow_mut().define(&function.name.lexeme, Object::from(value));
        Ok(())
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnData) -> ExecResult {
        let value = match &return_stmt.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Err(Unwind::Return(value))
    }

    fn visit_class_stmt(&mut self, class: &ClassData) -> ExecResult {
        let superclass = match &class.superclass {
            Some(expr) => {
                let Expr::Variable(variable) = expr else { unreachable!() };
                match self.evaluate(expr)? {
                    Object::Class(superclass) => Some(superclass),
                    _ => return Err(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    }.into()),
                }
            },
            None => None,
        };

        self.environment.borrow_mut().define(&class.name.lexeme, Object::from(Literal::Nil));

        // Methods of a subclass close over an extra frame binding `super`.
        if let Some(superclass) = &superclass {
            let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
            environment.define("super", Object::from(Rc::clone(superclass)));
            self.environment = Rc::new(RefCell::new(environment));
        }

        let mut methods = HashMap::new();
        for method in &class.methods {
            let is_initializer = method.name.lexeme.eq("init");
            let function = Function::new(method, &self.environment, is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        if superclass.is_some() {
            let enclosing = self.environment.borrow().enclosing.clone()
                .expect("'super' scope to have an enclosing environment");
            self.environment = enclosing;
        }

        let class_object = Class::new(class.name.lexeme.clone(), superclass, methods);
        self.environment.borrow_mut().assign(&class.name, Object::from(class_object))?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn token(r#type: Type, lexeme: &str) -> Token {
        Token::new(r#type, lexeme.to_string(), None, 1)
    }

    fn number(n: f64) -> Expr {
        Expr::Literal(Literal::Number(n))
    }

    fn string(s: &str) -> Expr {
        Expr::Literal(Literal::from(s))
    }

    fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary(BinaryData {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn evaluate(expr: &Expr) -> EvalResult {
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);
        interpreter.evaluate(expr)
    }

    #[test]
    fn evaluate_literal() {
        let result = evaluate(&number(12.0)).unwrap();
        assert_eq!(result, Object::from(12.0));
    }

    #[test]
    fn evaluate_unary_minus() {
        let expr = Expr::Unary(UnaryData {
            operator: token(Type::Minus, "-"),
            expr: Box::new(number(12.0)),
        });

        assert_eq!(evaluate(&expr).unwrap(), Object::from(-12.0));
    }

    #[test]
    fn evaluate_unary_bang() {
        let expr = Expr::Unary(UnaryData {
            operator: token(Type::Bang, "!"),
            expr: Box::new(Expr::Literal(Literal::Nil)),
        });

        assert_eq!(evaluate(&expr).unwrap(), Object::from(true));
    }

    #[test]
    fn evaluate_arithmetic() {
        let expr = binary(number(6.0), token(Type::Star, "*"), number(7.0));
        assert_eq!(evaluate(&expr).unwrap(), Object::from(42.0));
    }

    #[test]
    fn evaluate_string_concatenation() {
        let expr = binary(string("Hello"), token(Type::Plus, "+"), string("World"));
        assert_eq!(evaluate(&expr).unwrap(), Object::from("HelloWorld"));
    }

    #[test]
    fn evaluate_mixed_addition_errors() {
        let expr = binary(string("Hello"), token(Type::Plus, "+"), number(1.0));

        let Err(Unwind::Error(error)) = evaluate(&expr) else { panic!("expected a runtime error") };
        assert_eq!(error.message, "Operands must be two numbers or two strings.");
    }

    #[test]
    fn evaluate_comparison_requires_numbers() {
        let expr = binary(string("a"), token(Type::Less, "<"), number(1.0));

        let Err(Unwind::Error(error)) = evaluate(&expr) else { panic!("expected a runtime error") };
        assert_eq!(error.message, "Operands must be numbers.");
    }

    #[test]
    fn evaluate_equality_across_types() {
        let eq = |left, right| binary(left, token(Type::EqualEqual, "=="), right);

        assert_eq!(evaluate(&eq(Expr::Literal(Literal::Nil), Expr::Literal(Literal::Nil))).unwrap(), Object::from(true));
        assert_eq!(evaluate(&eq(number(1.0), string("1"))).unwrap(), Object::from(false));
        assert_eq!(evaluate(&eq(number(1.0), number(1.0))).unwrap(), Object::from(true));
    }

    #[test]
    fn evaluate_division_by_zero_follows_f64() {
        let expr = binary(number(1.0), token(Type::Slash, "/"), number(0.0));

        let result = evaluate(&expr).unwrap();
        assert_eq!(result.as_number(), Some(f64::INFINITY));
    }
}
