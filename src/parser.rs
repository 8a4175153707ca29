use crate::ast::AstNode;
use crate::token::Token;
use crate::{Error, Result};

// Grammar, one token of lookahead:
//
//   statement  := expression EOF
//   expression := IDENT | NOT expression | group
//   group      := '(' expression infix expression ')'
//   infix      := AND | OR | IMPLIES | IFF
//
// Infix operators have no precedence; every binary operation needs its own
// parentheses.

type Infix = fn(Box<AstNode>, Box<AstNode>) -> AstNode;

struct ParserState<'a> {
    cursor: usize,
    tokens: &'a [Token],
}

impl<'a> ParserState<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        ParserState {
            cursor: 0,
            tokens,
        }
    }

    // Running off the end reads as an end marker, so unterminated input
    // fails the same way as input with a missing closing paren.
    fn head(&self) -> Token {
        self.tokens.get(self.cursor).cloned().unwrap_or(Token::EndOfInput)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        Error::Syntax {
            position: self.cursor,
            expected,
            found: self.head(),
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<()> {
        if self.head() == token {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn statement(&mut self) -> Result<AstNode> {
        let ast = self.expression()?;
        match self.head() {
            Token::EndOfInput if self.cursor + 1 >= self.tokens.len() => Ok(ast),
            _ => Err(self.unexpected("end of input")),
        }
    }

    fn expression(&mut self) -> Result<AstNode> {
        trace!("expression at {}: {:?}", self.cursor, self.head());
        match self.head() {
            Token::Identifier(name) => {
                self.advance();
                Ok(AstNode::Identifier(name))
            }
            Token::Not => {
                self.advance();
                let negated = self.expression()?;
                Ok(!negated)
            }
            Token::LeftParen => self.group(),
            _ => Err(self.unexpected("identifier, negation or '('")),
        }
    }

    fn group(&mut self) -> Result<AstNode> {
        trace!("group at {}", self.cursor);
        self.expect(Token::LeftParen, "'('")?;
        let left = self.expression()?;
        let infix = self.infix_operator()?;
        let right = self.expression()?;
        self.expect(Token::RightParen, "')'")?;
        Ok(infix(Box::new(left), Box::new(right)))
    }

    fn infix_operator(&mut self) -> Result<Infix> {
        let infix: Infix = match self.head() {
            Token::And => AstNode::And,
            Token::Or => AstNode::Or,
            Token::Implication => AstNode::Implication,
            Token::Iff => AstNode::Iff,
            _ => return Err(self.unexpected("infix operator")),
        };
        self.advance();
        Ok(infix)
    }
}

/// Parse a token sequence exactly as written; every token before the final
/// `EndOfInput` has to be consumed.
pub fn parse_statement(tokens: &[Token]) -> Result<AstNode> {
    ParserState::new(tokens).statement()
}

/// Wrap everything before the end marker in one pair of parentheses, as
/// long as there is more than one identifier. Anything else comes back
/// unchanged.
pub fn fill_parens(tokens: &[Token]) -> Vec<Token> {
    let identifiers = tokens.iter().filter(|t| t.is_identifier()).count();
    if identifiers <= 1 {
        return tokens.to_vec();
    }

    let body = match tokens.split_last() {
        Some((&Token::EndOfInput, body)) => body,
        _ => tokens,
    };
    let mut filled = Vec::with_capacity(body.len() + 3);
    filled.push(Token::LeftParen);
    filled.extend_from_slice(body);
    filled.push(Token::RightParen);
    filled.push(Token::EndOfInput);
    filled
}

/// Parse a token sequence, retrying once with [`fill_parens`] applied if the
/// sequence doesn't parse as written. When both attempts fail the error from
/// the first one is reported, since its position refers to the tokens the
/// caller supplied.
pub fn parse(tokens: &[Token]) -> Result<AstNode> {
    match parse_statement(tokens) {
        Ok(ast) => Ok(ast),
        Err(err) => {
            let filled = fill_parens(tokens);
            if filled[..] == tokens[..] {
                return Err(err);
            }
            debug!("Parse failed ({}); retrying with enclosing parentheses", err);
            parse_statement(&filled).map_err(|retry_err| {
                debug!("Retry failed as well: {}", retry_err);
                err
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;
    use crate::token::Token::*;
    use crate::Error;

    fn a() -> AstNode {
        AstNode::var('A')
    }
    fn b() -> AstNode {
        AstNode::var('B')
    }

    #[test]
    fn parses_nested_group_without_retry() {
        let tokens = tokenize("(A and (not not B or (C implies D)))").unwrap();
        let expected = a() & ((!!b()) | AstNode::var('C').implies(AstNode::var('D')));
        assert_eq!(parse_statement(&tokens), Ok(expected));
    }

    #[test]
    fn single_identifier() {
        assert_eq!(parse_statement(&[Identifier('A'), EndOfInput]), Ok(a()));
    }

    #[test]
    fn not_binds_to_the_following_group() {
        let tokens = tokenize("not (A or B)").unwrap();
        assert_eq!(parse_statement(&tokens), Ok(!(a() | b())));
    }

    #[test]
    fn iff_is_an_infix_operator() {
        let tokens = tokenize("(A iff not B)").unwrap();
        assert_eq!(parse_statement(&tokens), Ok(a().iff(!b())));
    }

    #[test]
    fn bare_conjunction_needs_the_retry() {
        let tokens = tokenize("A and B").unwrap();
        assert_eq!(parse_statement(&tokens),
                   Err(Error::Syntax {
                       position: 1,
                       expected: "end of input",
                       found: And,
                   }));
        assert_eq!(parse(&tokens), Ok(a() & b()));
    }

    #[test]
    fn retry_wraps_negated_implication() {
        let tokens = tokenize("not A implies B").unwrap();
        assert_eq!(parse(&tokens), Ok((!a()).implies(b())));
    }

    #[test]
    fn retry_is_attempted_once() {
        let tokens = tokenize("A and B and C").unwrap();
        assert_eq!(parse(&tokens),
                   Err(Error::Syntax {
                       position: 1,
                       expected: "end of input",
                       found: And,
                   }));
    }

    #[test]
    fn single_identifier_is_not_wrapped() {
        let tokens = tokenize("not").unwrap();
        assert_eq!(fill_parens(&tokens), tokens);
        assert_eq!(parse(&tokens),
                   Err(Error::Syntax {
                       position: 1,
                       expected: "identifier, negation or '('",
                       found: EndOfInput,
                   }));
    }

    #[test]
    fn fill_parens_keeps_a_single_end_marker() {
        let tokens = tokenize("A or B").unwrap();
        assert_eq!(fill_parens(&tokens),
                   vec![LeftParen, Identifier('A'), Or, Identifier('B'), RightParen, EndOfInput]);
    }

    #[test]
    fn missing_operator() {
        let tokens = tokenize("(A B)").unwrap();
        assert_eq!(parse_statement(&tokens),
                   Err(Error::Syntax {
                       position: 2,
                       expected: "infix operator",
                       found: Identifier('B'),
                   }));
    }

    #[test]
    fn missing_close_paren() {
        let tokens = tokenize("(A or B").unwrap();
        assert_eq!(parse_statement(&tokens),
                   Err(Error::Syntax {
                       position: 4,
                       expected: "')'",
                       found: EndOfInput,
                   }));
    }

    #[test]
    fn empty_input_fails() {
        assert!(parse(&[EndOfInput]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn trailing_tokens_after_end_marker() {
        assert!(parse_statement(&[Identifier('A'), EndOfInput, Identifier('B'), EndOfInput])
            .is_err());
    }

    fn verify_display_parses_back_prop(ast: AstNode) -> bool {
        tokenize(&ast.to_string())
            .and_then(|tokens| parse_statement(&tokens))
            .ok() == Some(ast)
    }

    #[test]
    fn verify_display_parses_back() {
        quickcheck::quickcheck(verify_display_parses_back_prop as fn(AstNode) -> bool);
    }
}
