use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Hash, Clone)]
pub enum AstNode {
    Identifier(char),
    And(Box<AstNode>, Box<AstNode>),
    Or(Box<AstNode>, Box<AstNode>),
    Implication(Box<AstNode>, Box<AstNode>),
    Iff(Box<AstNode>, Box<AstNode>),
    Not(Box<AstNode>),
}

impl AstNode {
    pub fn var(name: char) -> AstNode {
        AstNode::Identifier(name)
    }

    pub fn implies(self, other: AstNode) -> AstNode {
        AstNode::Implication(Box::new(self), Box::new(other))
    }

    pub fn iff(self, other: AstNode) -> AstNode {
        AstNode::Iff(Box::new(self), Box::new(other))
    }

    /// Distinct variable names, in the order they are first met walking the
    /// tree left to right.
    pub fn variables(&self) -> Vec<char> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<char>) {
        match *self {
            AstNode::Identifier(name) => {
                if !names.contains(&name) {
                    names.push(name)
                }
            }
            AstNode::And(ref l, ref r) |
            AstNode::Or(ref l, ref r) |
            AstNode::Implication(ref l, ref r) |
            AstNode::Iff(ref l, ref r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            }
            AstNode::Not(ref a) => a.collect_variables(names),
        }
    }
}

impl BitOr for AstNode {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        AstNode::Or(Box::new(self), Box::new(other))
    }
}

impl BitAnd for AstNode {
    type Output = Self;
    fn bitand(self, other: Self) -> Self {
        AstNode::And(Box::new(self), Box::new(other))
    }
}

impl Not for AstNode {
    type Output = Self;
    fn not(self) -> Self {
        AstNode::Not(Box::new(self))
    }
}

// Fully parenthesised, so the output parses back to the same tree.
impl fmt::Display for AstNode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AstNode::Identifier(name) => write!(fmt, "{}", name),
            AstNode::And(ref l, ref r) => write!(fmt, "({} and {})", l, r),
            AstNode::Or(ref l, ref r) => write!(fmt, "({} or {})", l, r),
            AstNode::Implication(ref l, ref r) => write!(fmt, "({} implies {})", l, r),
            AstNode::Iff(ref l, ref r) => write!(fmt, "({} iff {})", l, r),
            AstNode::Not(ref a) => write!(fmt, "not {}", a),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for AstNode {
    fn arbitrary(g: &mut quickcheck::Gen) -> AstNode {
        arbitrary_sized(g, 4)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = AstNode>> {
        match *self {
            AstNode::Identifier(_) => Box::new(::std::iter::empty()),
            AstNode::Not(ref a) => Box::new(::std::iter::once((**a).clone())),
            AstNode::And(ref l, ref r) |
            AstNode::Or(ref l, ref r) |
            AstNode::Implication(ref l, ref r) |
            AstNode::Iff(ref l, ref r) => Box::new(vec![(**l).clone(), (**r).clone()].into_iter()),
        }
    }
}

#[cfg(test)]
fn arbitrary_sized(g: &mut quickcheck::Gen, depth: usize) -> AstNode {
    use quickcheck::Arbitrary;
    // A small alphabet keeps the enumeration cheap and makes repeats likely.
    let names = ['A', 'B', 'C', 'D'];
    let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 6 };
    match choice {
        0 => AstNode::var(*g.choose(&names).expect("names")),
        1 => !arbitrary_sized(g, depth - 1),
        2 => arbitrary_sized(g, depth - 1) & arbitrary_sized(g, depth - 1),
        3 => arbitrary_sized(g, depth - 1) | arbitrary_sized(g, depth - 1),
        4 => arbitrary_sized(g, depth - 1).implies(arbitrary_sized(g, depth - 1)),
        _ => arbitrary_sized(g, depth - 1).iff(arbitrary_sized(g, depth - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::AstNode;

    #[test]
    fn variables_in_first_seen_order() {
        let a = AstNode::var('A');
        let b = AstNode::var('B');
        let c = AstNode::var('C');
        let f = (c.clone() | !b.clone()).implies(a & (b | c));
        assert_eq!(f.variables(), vec!['C', 'B', 'A']);
    }

    #[test]
    fn display_is_fully_parenthesised() {
        let f = (!(AstNode::var('A') & AstNode::var('B'))).iff(!!AstNode::var('C'));
        assert_eq!(f.to_string(), "(not (A and B) iff not not C)");
    }
}
