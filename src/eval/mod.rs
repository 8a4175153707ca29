use std::collections::BTreeMap;
use crate::ast::AstNode;
use crate::{Error, Result};

/// Truth values for the variables of a formula.
pub type Assignment = BTreeMap<char, bool>;

impl AstNode {
    pub fn eval(&self, env: &Assignment) -> Result<bool> {
        match *self {
            AstNode::Identifier(name) => {
                env.get(&name).cloned().ok_or(Error::UnboundVariable(name))
            }
            AstNode::And(ref l, ref r) => Ok(l.eval(env)? & r.eval(env)?),
            AstNode::Or(ref l, ref r) => Ok(l.eval(env)? | r.eval(env)?),
            AstNode::Implication(ref l, ref r) => Ok(!l.eval(env)? | r.eval(env)?),
            AstNode::Iff(ref l, ref r) => Ok(l.eval(env)? == r.eval(env)?),
            AstNode::Not(ref a) => Ok(!a.eval(env)?),
        }
    }
}

pub fn evaluate(ast: &AstNode, assignment: &Assignment) -> Result<bool> {
    ast.eval(assignment)
}

/// Outcome of evaluating a formula under every assignment of its variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub examined: usize,
    pub holds: bool,
    /// The first assignment, in enumeration order, that made the formula
    /// false.
    pub counterexample: Option<Assignment>,
}

impl Tally {
    fn record(&mut self, env: &Assignment, value: bool) {
        self.examined += 1;
        if !value && self.holds {
            self.holds = false;
            self.counterexample = Some(env.clone());
        }
    }
}

// Each variable is tried false first, then true. The whole tree is walked;
// there's no early exit once a false branch turns up.
fn enumerate(ast: &AstNode, vars: &[char], env: &mut Assignment, tally: &mut Tally) -> Result<()> {
    match vars.split_first() {
        None => {
            let value = ast.eval(env)?;
            trace!("{:?} => {}", env, value);
            tally.record(env, value);
        }
        Some((&name, rest)) => {
            env.insert(name, false);
            enumerate(ast, rest, env, tally)?;
            env.insert(name, true);
            enumerate(ast, rest, env, tally)?;
            env.remove(&name);
        }
    }
    Ok(())
}

/// Evaluate `ast` under all 2^n assignments of its n distinct variables.
pub fn check(ast: &AstNode) -> Result<Tally> {
    let vars = ast.variables();
    let mut tally = Tally {
        examined: 0,
        holds: true,
        counterexample: None,
    };
    enumerate(ast, &vars, &mut Assignment::new(), &mut tally)?;
    debug!("{}: {} variable(s), {} assignment(s) examined, holds: {}",
           ast,
           vars.len(),
           tally.examined,
           tally.holds);
    Ok(tally)
}

pub fn is_tautology(ast: &AstNode) -> Result<bool> {
    check(ast).map(|tally| tally.holds)
}
