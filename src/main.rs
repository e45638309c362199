use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rstruth::render::{write_evaluations, RenderOptions, Symbols, TableFormat};
use rstruth::session::read_expressions;
use rstruth::{Session, DEFAULT_MAX_VARIABLES};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "EXPRESSION")]
    /// Expressions to tabulate; read line by line from the input if none are given
    expressions: Vec<String>,

    #[clap(value_parser, short, long, value_name = "FILE", env = "RSTRUTH_INPUT")]
    /// The input filename (or stdin if not provided)
    input: Option<PathBuf>,

    #[clap(value_parser, short, long, value_name = "FILE", env = "RSTRUTH_OUTPUT")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value_t = TableFormat::Text, env = "RSTRUTH_FORMAT")]
    /// Output format of the tables
    format: TableFormat,

    #[clap(short, long, value_name = "TRUE/FALSE", default_value_t = Symbols::default(), env = "RSTRUTH_SYMBOLS")]
    /// Symbols used for true and false
    symbols: Symbols,

    #[clap(long, value_name = "STR", default_value = " ", env = "RSTRUTH_SEPARATOR")]
    /// Column separator in the text format
    separator: String,

    #[clap(long)]
    /// Omit the line of variable names
    no_header: bool,

    #[clap(short, long, value_name = "N", default_value_t = DEFAULT_MAX_VARIABLES, env = "RSTRUTH_MAX_VARIABLES")]
    /// Refuse expressions with more than N distinct variables
    max_variables: usize,

    #[clap(short, long)]
    /// Print the number of variables before each table (text format only)
    count: bool,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity (repeatable)
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;
    let args = Args::parse_from(args);

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let options = RenderOptions {
        symbols: args.symbols.clone(),
        format: args.format,
        separator: args.separator.clone(),
        header: !args.no_header,
        count: args.count,
    };

    let expressions = if args.expressions.is_empty() {
        read_input(args.input.as_ref())?
    } else {
        args.expressions.clone()
    };

    let session = Session::with_max_variables(args.max_variables);

    let evaluations = expressions
        .iter()
        .map(|expression| {
            session
                .evaluate(expression)
                .with_context(|| format!("cannot tabulate {expression:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut writer = if let Some(output_file) = &args.output {
        let file = File::create(output_file)
            .with_context(|| format!("cannot create {}", output_file.display()))?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    write_evaluations(&mut writer, &evaluations, &options)?;

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<Vec<String>> {
    if let Some(input_file) = input {
        let file = File::open(input_file)
            .with_context(|| format!("cannot open {}", input_file.display()))?;
        read_expressions(BufReader::new(file))
    } else {
        read_expressions(io::stdin().lock())
    }
}
