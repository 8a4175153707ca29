//! Validity checking for arguments in classical propositional logic.
//!
//! Premises and an inference are written in a small symbolic notation,
//! tokenized, parsed, and joined into `premises implies inference`. The
//! argument is valid when that implication is true under every assignment
//! of truth values to its variables.

#[macro_use]
extern crate log;
extern crate thiserror;
#[cfg(test)]
#[macro_use]
extern crate maplit;
#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
extern crate quickcheck;

mod error;
pub mod token;
pub mod ast;
pub mod parser;
pub mod eval;
pub mod validate;

pub use error::{Error, Result};
pub use token::{tokenize, render, SymbolTable, Token, TokenKind};
pub use ast::AstNode;
pub use parser::parse;
pub use eval::{evaluate, check, is_tautology, Assignment, Tally};
pub use validate::{validate, Argument, Validator};
