use crate::expr::*;
use crate::literal::Literal;
use crate::stmt::*;
use std::rc::Rc;

/// Returns a string representation of the expression in paranthesize.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$x.accept($self);
            )*
            string += ")";

            string
        }
    };
}

/// Prints the syntax tree in a Lisp-like prefix notation.
/// Mostly useful for debugging the parser.
pub struct ASTPrinter;

impl ASTPrinter {
    /// Prints a single expression using the visitor pattern.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// Prints a whole program, one statement per line.
    pub fn print_program(&mut self, statements: &[Stmt]) -> String {
        statements.iter()
            .map(|stmt| stmt.accept(self))
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn print_function(&mut self, function: &Rc<FunctionData>) -> String {
        let mut string = String::new();
        string += "(fun ";
        string += &function.name.lexeme;
        string += "(";
        for param in &function.params {
            string += &param.lexeme;
            string += " ";
        }
        string = string.trim_end().to_string();
        string += ") { ";
        string += &function.body.iter()
            .map(|stmt| stmt.accept(self))
            .collect::<Vec<String>>()
            .join(" ");
        string += " })";

        string
    }
}

impl ExprVisitor<String> for ASTPrinter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> String {
        literal.to_string() // Uses fmt::Display impl for Literal
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> String {
        parenthesize!(self, "group", grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> String {
        parenthesize!(self, &unary.operator.lexeme, unary.expr)
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> String {
        parenthesize!(self, &binary.operator.lexeme, binary.left, binary.right)
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> String {
        parenthesize!(self, &logical.operator.lexeme, logical.left, logical.right)
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> String {
        variable.name.lexeme.clone()
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> String {
        parenthesize!(self, format!("= {}", &assign.name.lexeme).as_str(), assign.value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> String {
        let mut string = String::new();
        string += "(call ";
        string += &call.callee.accept(self);
        for argument in &call.arguments {
            string += " ";
            string += &argument.accept(self);
        }
        string += ")";

        string
    }

    fn visit_get_expr(&mut self, get: &GetData) -> String {
        format!("(get {} {})", get.object.accept(self), get.name.lexeme)
    }

    fn visit_set_expr(&mut self, set: &SetData) -> String {
        format!("(set {} {} {})", set.object.accept(self), set.name.lexeme, set.value.accept(self))
    }

    fn visit_this_expr(&mut self, _this: &ThisData) -> String {
        "this".to_string()
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) -> String {
        format!("(super {})", super_expr.method.lexeme)
    }
}

impl StmtVisitor<String> for ASTPrinter {
    fn visit_expression_stmt(&mut self, expression: &ExpressionData) -> String {
        parenthesize!(self, "expr", expression.expr)
    }

    fn visit_print_stmt(&mut self, print: &PrintData) -> String {
        parenthesize!(self, "print", print.expr)
    }

    fn visit_var_stmt(&mut self, var: &VarData) -> String {
        match &var.initializer {
            Some(initializer) => format!("(var {} {})", var.name.lexeme, initializer.accept(self)),
            None => format!("(var {})", var.name.lexeme),
        }
    }

    fn visit_block_stmt(&mut self, block: &BlockData) -> String {
        let mut string = String::new();
        string += "{";
        for stmt in &block.statements {
            string += " ";
            string += &stmt.accept(self);
        }
        string += " }";

        string
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfData) -> String {
        let mut string = String::new();
        string += "(if ";
        string += &if_stmt.condition.accept(self);
        string += " ";
        string += &if_stmt.then_branch.accept(self);
        if let Some(else_branch) = &if_stmt.else_branch {
            string += " else ";
            string += &else_branch.accept(self);
        }
        string += ")";

        string
    }

    fn visit_while_stmt(&mut self, while_stmt: &WhileData) -> String {
        parenthesize!(self, "while", while_stmt.condition, while_stmt.body)
    }

    fn visit_function_stmt(&mut self, function: &Rc<FunctionData>) -> String {
        self.print_function(function)
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnData) -> String {
        match &return_stmt.value {
            Some(value) => format!("(return {})", value.accept(self)),
            None => "(return)".to_string(),
        }
    }

    fn visit_class_stmt(&mut self, class: &ClassData) -> String {
        let mut string = String::new();
        string += "(class ";
        string += &class.name.lexeme;

        if let Some(Expr::Variable(superclass)) = &class.superclass {
            string += &format!(" (< {})", superclass.name.lexeme);
        }

        for method in &class.methods {
            string += " ";
            string += &self.print_function(method);
        }
        string += ")";

        string
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::{Token, Type};

    #[test]
    fn print_nested_expression() {
        // -123 * (45.7)
        let expr = Expr::Binary(BinaryData {
            left: Box::new(Expr::Unary(UnaryData {
                operator: Token::new(Type::Minus, String::from("-"), None, 1),
                expr: Box::new(Expr::Literal(Literal::Number(123.0))),
            })),
            operator: Token::new(Type::Star, String::from("*"), None, 1),
            right: Box::new(Expr::Grouping(GroupingData {
                expr: Box::new(Expr::Literal(Literal::Number(45.7))),
            })),
        });

        assert_eq!(ASTPrinter.print(&expr), "(* (- 123) (group 45.7))");
    }

    #[test]
    fn print_literals() {
        assert_eq!(ASTPrinter.print(&Expr::Literal(Literal::Nil)), "nil");
        assert_eq!(ASTPrinter.print(&Expr::Literal(Literal::Bool(true))), "true");
        assert_eq!(ASTPrinter.print(&Expr::Literal(Literal::from("hi"))), "hi");
    }

    #[test]
    fn print_var_statement() {
        let stmt = Stmt::Var(VarData {
            name: Token::from("answer"),
            initializer: Some(Expr::Literal(Literal::Number(42.0))),
        });

        assert_eq!(ASTPrinter.print_program(&[stmt]), "(var answer 42)");
    }
}
