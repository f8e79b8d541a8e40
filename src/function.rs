use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::error::{RuntimeError, Unwind};
use crate::interpreter::Interpreter;
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::FunctionData;

/// A user-defined function together with the environment chain captured at
/// its declaration site.
#[derive(Debug, Clone)]
pub struct Function {
    pub declaration: Rc<FunctionData>,
    pub closure: Rc<RefCell<Environment>>,
    pub is_initializer: bool,
}

impl Function {
    pub fn new(declaration: &Rc<FunctionData>, closure: &Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        Function {
            declaration: Rc::clone(declaration),
            closure: Rc::clone(closure),
            is_initializer,
        }
    }

    /// Returns a copy of this function whose closure is extended with a
    /// fresh frame binding `this` to the given instance.
    pub fn bind(&self, instance: &Object) -> Function {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));
        environment.define("this", instance.clone());

        Function {
            declaration: Rc::clone(&self.declaration),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        let environment = Rc::new(RefCell::new(environment));
        match interpreter.execute_block(&self.declaration.body, environment) {
            Ok(()) => (),
            Err(Unwind::Return(value)) => {
                if !self.is_initializer {
                    return Ok(value);
                }
            },
            Err(Unwind::Error(error)) => return Err(error),
        }

        if self.is_initializer {
            // An initializer always yields the receiver, even on a bare
            // `return;` or when called again through the instance.
            let this = self.closure.borrow().get_at(0, "this")
                .expect("initializer closure to bind 'this'");
            return Ok(this);
        }

        Ok(Object::from(Literal::Nil))
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

/// Functions compare by identity: same declaration, same captured closure.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.declaration, &other.declaration) && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

/// A function implemented in the host language and exposed to user code.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// The functions pre-defined in the global environment.
    pub fn get_globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: "clock".to_owned(),
                arity: 0,
                function: |_, _| {
                    let now = SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .expect("system clock to be past the Unix epoch");
                    Ok(Object::from(now.as_secs_f64()))
                },
            },
        ]
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.function == other.function
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn>")
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
