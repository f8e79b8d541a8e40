#![allow(clippy::needless_return)]

//! Shale is a tree-walk interpreter for Lox, a small dynamically typed
//! scripting language with lexical scoping, first-class functions and
//! single-inheritance classes. The interpreter is built around a hand-written
//! recursive descent parser and is inspired by the
//! [Crafting Interpreters](https://craftinginterpreters.com/) book.
//!
//! Running a piece of source code goes through four stages:
//!
//! ## Scanning
//! The [`scanner`](scanner) module converts the source string into a flat
//! list of tokens, one [`Token`](token::Token) per lexeme. Whitespace and
//! comments are discarded here. Trivial problems like an unterminated string
//! or a stray character are reported at this stage, and scanning keeps going
//! so a single run surfaces as many of them as possible.
//!
//! ## Parsing
//! The [`parser`](parser) module turns the token list into a syntax tree of
//! [`statements`](stmt::Stmt) and [`expressions`](expr::Expr). The parser is
//! recursive descent with a single token of lookahead. On a syntax error it
//! reports, discards tokens up to the next statement boundary and keeps
//! parsing, which again means several errors can be reported in one run.
//!
//! ## Resolving
//! The [`resolver`](resolver) module is a static pass over the finished tree.
//! It computes, for every use of a variable, how many scopes away the
//! matching declaration lives, and hands those distances to the interpreter.
//! It also rejects programs that are syntactically fine but semantically
//! wrong, like `return` at the top level or a variable that reads itself in
//! its own initializer.
//!
//! ## Interpreting
//! The [`interpreter`](interpreter) module walks the resolved tree and
//! evaluates it. Scopes are a chain of [`environments`](environment); values
//! are [`objects`](object::Object) spanning literals, functions, classes and
//! instances. Errors that can only be caught while the program runs, like
//! calling a number or adding a string to nil, surface here as
//! [`runtime errors`](error::RuntimeError) and abort the run.
//!
//! Every stage reports into an [`ErrorReporter`](error::ErrorReporter) owned
//! by the driver; if any stage records an error, the later stages do not run.

use std::io::Write;
use std::{fs, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod error;
pub mod token;
pub mod scanner;
pub mod expr;
pub mod stmt;
pub mod environment;
pub mod parser;
pub mod ast;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod function;
pub mod resolver;
pub mod class;

use error::ErrorReporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The driver: owns the interpreter and the error sink, and decides between
/// file and prompt mode. Program output is written to the writer given at
/// construction so tests can capture it.
#[allow(non_camel_case_types)]
pub struct shale<'a> {
    interpreter: Interpreter<'a>,
    reporter: ErrorReporter,
    next_id: usize,
}

impl<'a> shale<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        shale {
            interpreter: Interpreter::new(out),
            reporter: ErrorReporter::new(),
            next_id: 0,
        }
    }

    /// Runs a script from a file. Exits with 65 on a static error and 70 on
    /// a runtime error.
    pub fn run_file(&mut self, path: String) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(contents);

        if self.reporter.had_error {
            process::exit(65);
        }
        if self.reporter.had_runtime_error {
            process::exit(70);
        }
    }

    /// Runs an interactive prompt until end of input. Global state survives
    /// between lines, error flags do not.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("readline editor to be available");

        let history = home::home_dir().map(|dir| dir.join(".shale_history"));
        if let Some(path) = &history {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(line);
                    self.reporter.reset();
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("{error}");
                    break;
                },
            }
        }

        if let Some(path) = &history {
            let _ = editor.save_history(path);
        }
    }

    fn run(&mut self, source: String) {
        let mut scanner = Scanner::new(&source, &mut self.reporter);
        let tokens = scanner.scan_tokens();

        if self.reporter.had_error {
            return;
        }

        let mut parser = Parser::new(tokens, &mut self.reporter, self.next_id);
        let statements = parser.parse();
        self.next_id = parser.next_id();

        if self.reporter.had_error {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter, &mut self.reporter);
        resolver.resolve(&statements);

        if self.reporter.had_error {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            self.reporter.runtime_error(&error);
        }
    }
}
