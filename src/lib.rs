#![warn(clippy::disallowed_types)]

pub use extract::extract_variables;
pub use session::{Evaluation, Session, DEFAULT_MAX_VARIABLES};
pub use symbols::*;
pub use truth_table::{enumerate, Assignment, Assignments, TruthTable, TruthTableEntry};

pub mod extract;
pub mod render;
pub mod session;
pub mod truth_table;

mod symbols;
