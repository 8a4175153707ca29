use std::fmt;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Identifier(char),
    And,
    Or,
    Implication,
    Iff,
    Not,
    LeftParen,
    RightParen,
    EndOfInput,
}

/// The tokens a symbol may stand for. Identifiers and the end marker are
/// never spelled by a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    And,
    Or,
    Implication,
    Iff,
    Not,
    LeftParen,
    RightParen,
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Token {
        match kind {
            TokenKind::And => Token::And,
            TokenKind::Or => Token::Or,
            TokenKind::Implication => Token::Implication,
            TokenKind::Iff => Token::Iff,
            TokenKind::Not => Token::Not,
            TokenKind::LeftParen => Token::LeftParen,
            TokenKind::RightParen => Token::RightParen,
        }
    }
}

impl Token {
    pub fn is_identifier(&self) -> bool {
        matches!(*self, Token::Identifier(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Identifier(name) => write!(fmt, "{}", name),
            Token::And => write!(fmt, "and"),
            Token::Or => write!(fmt, "or"),
            Token::Implication => write!(fmt, "implies"),
            Token::Iff => write!(fmt, "iff"),
            Token::Not => write!(fmt, "not"),
            Token::LeftParen => write!(fmt, "("),
            Token::RightParen => write!(fmt, ")"),
            Token::EndOfInput => Ok(()),
        }
    }
}

/// Symbol spellings recognised by the tokenizer. Lookup always prefers the
/// longest matching symbol, so `<->` wins over `-` style prefixes and `←→`
/// over `→`.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<(String, TokenKind)>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::empty()
            .with("(", TokenKind::LeftParen)
            .with(")", TokenKind::RightParen)
            .with("and", TokenKind::And)
            .with("or", TokenKind::Or)
            .with("not", TokenKind::Not)
            .with("implies", TokenKind::Implication)
            .with("iff", TokenKind::Iff)
            .with("&", TokenKind::And)
            .with("|", TokenKind::Or)
            .with("!", TokenKind::Not)
            .with("~", TokenKind::Not)
            .with("->", TokenKind::Implication)
            .with("<->", TokenKind::Iff)
            .with("∧", TokenKind::And)
            .with("∨", TokenKind::Or)
            .with("￢", TokenKind::Not)
            .with("¬", TokenKind::Not)
            .with("→", TokenKind::Implication)
            .with("←→", TokenKind::Iff)
            .with("↔", TokenKind::Iff)
    }
}

impl SymbolTable {
    pub fn empty() -> Self {
        SymbolTable { symbols: Vec::new() }
    }

    pub fn with<S: Into<String>>(mut self, symbol: S, kind: TokenKind) -> Self {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return self;
        }
        self.symbols.retain(|&(ref s, _)| *s != symbol);
        self.symbols.push((symbol, kind));
        // Stable, so equal-length symbols keep insertion order.
        self.symbols.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self
    }

    fn lookup(&self, head: &str) -> Option<(&str, TokenKind)> {
        self.symbols
            .iter()
            .find(|&&(ref symbol, _)| head.starts_with(symbol.as_str()))
            .map(|&(ref symbol, kind)| (symbol.as_str(), kind))
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < input.len() {
            let head = &input[offset..];
            let skipped = head.len() - head.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
            if skipped > 0 {
                offset += skipped;
                continue;
            }

            let (token, width) = if let Some((symbol, kind)) = self.lookup(head) {
                (Token::from(kind), symbol.len())
            } else {
                match head.chars().next() {
                    Some(c) if c.is_ascii_uppercase() => (Token::Identifier(c), c.len_utf8()),
                    _ => {
                        debug!("No token matches {:?} at offset {}", head, offset);
                        return Err(Error::Lex {
                            fragment: head.to_string(),
                            offset,
                        });
                    }
                }
            };
            trace!("token at {}: {:?}", offset, token);
            tokens.push(token);
            offset += width;
        }

        tokens.push(Token::EndOfInput);
        Ok(tokens)
    }
}

/// Tokenize `input` with the default symbol table.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    SymbolTable::default().tokenize(input)
}

/// Canonical spelling of a token sequence, separated by single spaces.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .filter(|t| **t != Token::EndOfInput)
          .map(|t| t.to_string())
          .collect::<Vec<_>>()
          .join(" ")
}
