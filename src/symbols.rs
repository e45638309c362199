use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use itertools::Itertools;

/// A single-letter propositional variable.
///
/// The name is always stored lower-cased, so `A` and `a` denote the same letter.
/// The index is the column the variable occupies in a truth table, which is the
/// order in which it first occurred in the scanned expression. Equality, hashing
/// and ordering all use the column first and the letter second.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    pub name: char,
    pub index: usize,
}

impl Variable {
    pub const fn new(name: char, index: usize) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            index,
        }
    }

    /// Case-insensitive comparison against a raw character.
    pub const fn is(&self, name: char) -> bool {
        self.name == name.to_ascii_lowercase()
    }

    const fn key(&self) -> (usize, char) {
        (self.index, self.name)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.name, f)
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Variable {}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered, duplicate-free sequence of variables in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    vars: Vec<Variable>,
}

impl VariableSet {
    pub const fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Appends `name` unless an equal (case-insensitive) variable is already present.
    /// Returns whether the variable was added.
    pub fn insert(&mut self, name: char) -> bool {
        if self.contains(name) {
            return false;
        }

        let var = Variable::new(name, self.vars.len());
        self.vars.push(var);
        true
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, name: char) -> bool {
        self.vars.iter().any(|v| v.is(name))
    }

    pub fn position(&self, name: char) -> Option<usize> {
        self.vars.iter().position(|v| v.is(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.vars.iter()
    }

    pub fn names(&self) -> Vec<char> {
        self.vars.iter().map(|v| v.name).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.vars.iter().map(Variable::to_string).collect()
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.vars.iter().join(", "))
    }
}

impl FromIterator<char> for VariableSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}
