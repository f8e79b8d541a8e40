use crate::object::Object;
use crate::token::{Token, Type};

/// Accumulates every error reported while running a piece of source code.
///
/// The sink is owned by the driver and passed through the pipeline
/// explicitly: the scanner, the parser and the resolver report static errors
/// into it, while runtime errors are returned as values and recorded by the
/// driver. The two flags decide the process exit code and whether a phase is
/// allowed to run at all.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    pub had_error: bool,
    pub had_runtime_error: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter::default()
    }

    /// Reports a static error that is not attached to a token.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a static error at a token, pointing at its lexeme.
    pub fn error_at(&mut self, token: &Token, message: &str) {
        if token.r#type == Type::EOF {
            self.report(token.line, " at end", message);
        } else {
            let location = format!(" at '{}'", token.lexeme);
            self.report(token.line, &location, message);
        }
    }

    /// Records a runtime error and prints it with the offending line.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message, error.token.line);
        self.had_runtime_error = true;
    }

    /// Clears both flags between REPL entries.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] Error{location}: {message}");
        self.had_error = true;
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// Represents an error that occurs during runtime.
///
/// The token points back at the offending piece of source code so the driver
/// can report the line number.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

/// The non-local control transfer channel of the interpreter.
///
/// Evaluation propagates this through `Result`. A `return` statement unwinds
/// as `Unwind::Return` carrying the value and is consumed at the enclosing
/// call boundary; a runtime error unwinds as `Unwind::Error` all the way to
/// the driver. Keeping them in one enum forces every call boundary to
/// distinguish the two.
#[derive(Debug)]
pub enum Unwind {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
