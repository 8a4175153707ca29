use thiserror::Error;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No symbol or identifier matches the input at `offset` (in bytes).
    #[error("unrecognised input {fragment:?} at offset {offset}")]
    Lex { fragment: String, offset: usize },
    /// The token at `position` doesn't fit the grammar, even after the
    /// parenthesis-filling retry.
    #[error("expected {expected} at token {position}, found {found:?}")]
    Syntax {
        position: usize,
        expected: &'static str,
        found: Token,
    },
    /// The assignment has no value for a variable in the formula.
    #[error("no value assigned to variable {0}")]
    UnboundVariable(char),
    #[error("an argument needs at least one premise")]
    NoPremises,
}

pub type Result<T> = ::std::result::Result<T, Error>;
