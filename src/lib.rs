pub mod ast;
pub mod env;
pub mod error;
pub mod eval;
pub mod host;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod token;
pub mod typecheck;
pub mod value;

#[cfg(test)]
mod parser_tests;

pub use crate::{
    error::Error,
    eval::Interpreter,
    host::{BufferHost, Host, HostApi},
    lexer::Lexer,
    parser::Parser,
};

/// Lexes and parses a complete source text.
pub fn parse_source(src: &str) -> Result<ast::Program, Error> {
    let tokens = Lexer::new(src).lex()?;
    Parser::new(tokens).parse_program()
}
