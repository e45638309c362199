use std::io::BufRead;

use anyhow::bail;
use log::{debug, warn};

use crate::extract::extract_variables;
use crate::symbols::VariableSet;
use crate::truth_table::{enumerate, TruthTable};

/// Default cap on the number of variables a single evaluation may enumerate.
pub const DEFAULT_MAX_VARIABLES: usize = 16;

// 2^N rows must be countable in a usize
const MAX_ENUMERABLE: usize = usize::BITS as usize - 1;

/// Result of evaluating one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub variables: VariableSet,
    pub table: TruthTable,
}

impl Evaluation {
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

/// Evaluates expressions one at a time. Holds configuration only; every call to
/// [`Session::evaluate`] starts from an empty variable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    max_variables: usize,
}

impl Session {
    pub const fn new() -> Self {
        Self::with_max_variables(DEFAULT_MAX_VARIABLES)
    }

    pub const fn with_max_variables(max_variables: usize) -> Self {
        Self { max_variables }
    }

    pub const fn max_variables(&self) -> usize {
        self.max_variables
    }

    pub fn evaluate(&self, expression: &str) -> anyhow::Result<Evaluation> {
        let expression = expression.to_lowercase();
        let variables = extract_variables(&expression);
        let n = variables.len();

        let limit = self.max_variables.min(MAX_ENUMERABLE);

        if n > limit {
            bail!("too many variables: {n} (limit is {limit})");
        }

        if n + 2 >= self.max_variables && n > 0 {
            warn!(
                "{n} variables produce 2^{n} rows, close to the limit of {}",
                self.max_variables
            );
        }

        let table = enumerate(&variables);
        debug!("evaluated {:?} into {} rows", expression, table.row_count());

        Ok(Evaluation { variables, table })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads one expression per line, skipping blank and whitespace-only lines.
pub fn read_expressions<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut expressions = Vec::new();

    for line in reader.lines() {
        let line = line?;

        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }

    Ok(expressions)
}
