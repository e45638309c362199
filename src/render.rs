use std::fmt::{self, Display};
use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::ValueEnum;
use itertools::Itertools;

use crate::session::Evaluation;
use crate::truth_table::{Assignment, TruthTable, TruthTableEntry};

/// The pair of symbols a row is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub truth: String,
    pub falsity: String,
}

impl Symbols {
    pub fn new<T: Into<String>, F: Into<String>>(truth: T, falsity: F) -> anyhow::Result<Self> {
        let truth = truth.into();
        let falsity = falsity.into();

        if truth.is_empty() || falsity.is_empty() {
            bail!("truth symbols must not be empty");
        }

        if truth == falsity {
            bail!("truth and falsity must use different symbols, both are {truth:?}");
        }

        Ok(Self { truth, falsity })
    }

    /// Parses a `TRUE/FALSE` pair such as `V/F` or `1/0`.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let (truth, falsity) = s
            .split_once('/')
            .with_context(|| format!("expected symbols as TRUE/FALSE, got {s:?}"))?;

        Self::new(truth, falsity)
    }

    pub fn symbol(&self, entry: TruthTableEntry) -> &str {
        match entry {
            TruthTableEntry::True => &self.truth,
            TruthTableEntry::False => &self.falsity,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            truth: "V".to_string(),
            falsity: "F".to_string(),
        }
    }
}

impl FromStr for Symbols {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Symbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.truth, self.falsity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableFormat {
    /// One line per row, symbols separated by the column separator
    #[default]
    Text,
    /// Comma-separated values with a header record
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub symbols: Symbols,
    pub format: TableFormat,
    /// Column separator for the text format
    pub separator: String,
    /// Emit the variable names as the first line
    pub header: bool,
    /// Precede each table with a `variables: N` line (text format only)
    pub count: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            symbols: Symbols::default(),
            format: TableFormat::Text,
            separator: " ".to_string(),
            header: true,
            count: false,
        }
    }
}

pub fn render_row(row: &Assignment, symbols: &Symbols, separator: &str) -> String {
    row.entries().map(|e| symbols.symbol(e)).join(separator)
}

/// Writes the tables of several evaluations one after another.
///
/// In the text format consecutive tables are separated by one blank line and, when
/// `count` is set, each is preceded by its variable count. The count line would
/// corrupt a CSV stream, so that combination is rejected before anything is written.
pub fn write_evaluations<W: Write>(
    writer: &mut W,
    evaluations: &[Evaluation],
    options: &RenderOptions,
) -> anyhow::Result<()> {
    if options.count && options.format == TableFormat::Csv {
        bail!("variable counts cannot be written into csv output");
    }

    for (i, evaluation) in evaluations.iter().enumerate() {
        if i > 0 && options.format == TableFormat::Text {
            writeln!(writer)?;
        }

        if options.count {
            writeln!(writer, "variables: {}", evaluation.variable_count())?;
        }

        write_table(writer, &evaluation.table, options)?;
    }

    Ok(())
}

/// Writes `table` to `writer`.
///
/// A table over zero variables has nothing to show and produces no output.
pub fn write_table<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    if table.is_degenerate() {
        return Ok(());
    }

    match options.format {
        TableFormat::Text => write_text(writer, table, options),
        TableFormat::Csv => write_csv(writer, table, options),
    }
}

fn write_text<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    if options.header {
        writeln!(writer, "{}", table.header().join(options.separator.as_str()))?;
    }

    for row in table.rows() {
        writeln!(
            writer,
            "{}",
            render_row(row, &options.symbols, &options.separator)
        )?;
    }

    Ok(())
}

fn write_csv<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    if options.header {
        csv_writer.write_record(table.header())?;
    }

    for row in table.rows() {
        csv_writer.write_record(row.entries().map(|e| options.symbols.symbol(e)))?;
    }

    csv_writer.flush().context("cannot flush csv output")?;

    Ok(())
}
