use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::symbols::VariableSet;

lazy_static! {
    static ref LETTER: Regex = Regex::new(r"[a-zA-Z]").expect("invalid letter pattern");
}

/// Scans `expression` left to right and collects every distinct letter, in order of
/// first occurrence.
///
/// Consecutive letters are not grouped into identifiers: `ab` yields two variables.
/// Everything that is not an ASCII letter (operators, whitespace, parentheses) is skipped.
/// Letters that might be read as constants (`t`, `f`) are variables like any other.
pub fn extract_variables(expression: &str) -> VariableSet {
    let vars: VariableSet = LETTER
        .find_iter(expression)
        .filter_map(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_lowercase())
        .unique()
        .collect();

    debug!("extracted {} variable(s) {} from {:?}", vars.len(), vars, expression);

    vars
}
