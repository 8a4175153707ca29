use crate::ast::AstNode;
use crate::eval::{self, Tally};
use crate::parser::parse;
use crate::token::SymbolTable;
use crate::{Error, Result};

/// Premises and an inference, already parsed. There is always at least one
/// premise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    first: AstNode,
    rest: Vec<AstNode>,
    inference: AstNode,
}

impl Argument {
    pub fn new<I: IntoIterator<Item = AstNode>>(premises: I, inference: AstNode) -> Result<Argument> {
        let mut premises = premises.into_iter();
        let first = premises.next().ok_or(Error::NoPremises)?;
        Ok(Argument {
            first,
            rest: premises.collect(),
            inference,
        })
    }

    pub fn premises(&self) -> impl Iterator<Item = &AstNode> {
        ::std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn inference(&self) -> &AstNode {
        &self.inference
    }

    /// All premises joined with `and`, folding from the left.
    pub fn premise(&self) -> AstNode {
        self.rest.iter().cloned().fold(self.first.clone(), |acc, p| acc & p)
    }

    pub fn to_implication(&self) -> AstNode {
        self.premise().implies(self.inference.clone())
    }

    pub fn check(&self) -> Result<Tally> {
        eval::check(&self.to_implication())
    }

    pub fn is_valid(&self) -> Result<bool> {
        self.check().map(|tally| tally.holds)
    }
}

/// Parses and checks arguments written in a given notation.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    symbols: SymbolTable,
}

impl Validator {
    pub fn new(symbols: SymbolTable) -> Self {
        Validator { symbols }
    }

    pub fn parse_formula(&self, text: &str) -> Result<AstNode> {
        let tokens = self.symbols.tokenize(text)?;
        parse(&tokens)
    }

    pub fn argument<I, S>(&self, premises: I, inference: &str) -> Result<Argument>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let premises = premises.into_iter()
                               .enumerate()
                               .map(|(i, text)| {
                                   self.parse_formula(text.as_ref()).map_err(|err| {
                                       debug!("Premise {} ({:?}): {}", i + 1, text.as_ref(), err);
                                       err
                                   })
                               })
                               .collect::<Result<Vec<_>>>()?;
        if premises.is_empty() {
            return Err(Error::NoPremises);
        }
        let inference = self.parse_formula(inference).map_err(|err| {
            debug!("Inference ({:?}): {}", inference, err);
            err
        })?;
        Argument::new(premises, inference)
    }

    pub fn validate<I, S>(&self, premises: I, inference: &str) -> Result<bool>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let argument = self.argument(premises, inference)?;
        let valid = argument.is_valid()?;
        info!("{} => {}", argument.to_implication(), if valid { "valid" } else { "invalid" });
        Ok(valid)
    }
}

/// Check an argument written in the default notation. `Ok(false)` means the
/// argument is well formed but invalid; malformed input is an `Err`.
pub fn validate<I, S>(premises: I, inference: &str) -> Result<bool>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Validator::default().validate(premises, inference)
}
