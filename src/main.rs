use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use log::{LevelFilter, Log, Metadata, Record};
use shunt::{
    error::EvalError,
    evaluate_with,
    interpreter::{scan::scan_identifier, value::table::ValueTable},
    trace_with,
};

/// shunt evaluates infix arithmetic, bitwise and logical expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate every non-empty line of
    /// that file on its own.
    #[arg(short, long)]
    file: bool,

    /// Print the canonical infix and postfix forms before each result.
    #[arg(short, long)]
    trace: bool,

    /// Bind a variable before evaluating, e.g. `-d rate=0.5`. The value is
    /// itself an expression and may use earlier definitions.
    #[arg(short, long = "define", value_name = "NAME=EXPR", value_parser = parse_definition)]
    define: Vec<(String, String)>,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn parse_definition(arg: &str) -> Result<(String, String), String> {
    let Some((name, expression)) = arg.split_once('=') else {
        return Err(format!("expected NAME=EXPR, found '{arg}'"));
    };
    let name = name.trim();

    let is_identifier = name.starts_with(|c: char| c.is_ascii_alphabetic())
                        && scan_identifier(name, 0).1 == name.len();
    if !is_identifier || matches!(name, "true" | "false") {
        return Err(format!("'{name}' is not a variable name"));
    }

    Ok((name.to_string(), expression.to_string()))
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn seed_table(definitions: &[(String, String)]) -> Result<ValueTable, EvalError> {
    let mut table = ValueTable::new();
    for (name, expression) in definitions {
        let value = evaluate_with(expression, table.clone())?;
        log::info!("defined {name} = {value}");
        table.bind(name, value);
    }
    Ok(table)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let table = match seed_table(&args.define) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let lines: Vec<&str> = if args.file {
        script.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
    } else {
        vec![script.as_str()]
    };

    let mut failed = false;
    for line in lines {
        match trace_with(line, table.clone()) {
            Ok(trace) => {
                if args.trace {
                    println!("{}", trace.infix);
                    println!("{}", trace.postfix);
                }
                println!("{}", trace.result);
            },
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
