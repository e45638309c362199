use std::iter::FusedIterator;

use log::debug;

use crate::symbols::VariableSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Single variable assignment in a truth table.
///
/// [`True`] is assigned when the variable holds in that row, [`False`] when it does not.
///
/// [`True`]: TruthTableEntry::True
/// [`False`]: TruthTableEntry::False
pub enum TruthTableEntry {
    True,
    False,
}

impl From<bool> for TruthTableEntry {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

/// One row of a truth table: a truth value per variable, leftmost column first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// Builds the row for counter value `i` over `width` columns.
    ///
    /// Column `p` (0 = leftmost) takes bit `width - 1 - p` of `i`, so the leftmost
    /// variable is the most significant bit.
    pub fn from_index(width: usize, i: usize) -> Self {
        let values = (0..width)
            .map(|p| (i >> (width - 1 - p)) & 1 != 0)
            .collect();

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<bool> {
        self.values.get(column).copied()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn entries(&self) -> impl Iterator<Item = TruthTableEntry> + '_ {
        self.values.iter().map(|&v| TruthTableEntry::from(v))
    }
}

/// Lazily yields all `2^n` assignments over `n` columns in canonical order:
/// the counter runs from `2^n - 1` (all true) down to `0` (all false).
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    // remaining counter values are lower..upper, handed out from the top
    upper: usize,
    lower: usize,
}

impl Assignments {
    /// Returns `None` when `2^width` does not fit in a `usize`.
    pub fn try_new(width: usize) -> Option<Self> {
        let total = u32::try_from(width)
            .ok()
            .and_then(|w| 1usize.checked_shl(w))?;

        Some(Self {
            width,
            upper: total,
            lower: 0,
        })
    }

    /// # Panics
    ///
    /// Panics when `2^width` does not fit in a `usize`.
    pub fn new(width: usize) -> Self {
        match Self::try_new(width) {
            Some(assignments) => assignments,
            None => panic!("cannot enumerate 2^{width} assignments"),
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.upper == self.lower {
            return None;
        }

        self.upper -= 1;
        Some(Assignment::from_index(self.width, self.upper))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.upper - self.lower;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Assignments {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.upper == self.lower {
            return None;
        }

        let i = self.lower;
        self.lower += 1;
        Some(Assignment::from_index(self.width, i))
    }
}

impl ExactSizeIterator for Assignments {}

impl FusedIterator for Assignments {}

/// Header (the variables) followed by one row per assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: VariableSet,
    rows: Vec<Assignment>,
}

impl TruthTable {
    pub const fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn header(&self) -> Vec<String> {
        self.variables.labels()
    }

    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        1 + self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.variables.len()
    }

    /// A table over zero variables: a single data row with no columns.
    pub fn is_degenerate(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Enumerates every truth assignment over `variables` in canonical order.
///
/// Over zero variables the result holds exactly one empty row, so there are always
/// `2^N` data rows.
pub fn enumerate(variables: &VariableSet) -> TruthTable {
    let rows: Vec<Assignment> = Assignments::new(variables.len()).collect();

    debug!(
        "enumerated {} assignment(s) over {} variable(s)",
        rows.len(),
        variables.len()
    );

    TruthTable {
        variables: variables.clone(),
        rows,
    }
}
