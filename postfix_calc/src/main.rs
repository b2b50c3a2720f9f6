mod err;
mod repl;
mod sink;
mod source;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::info;
use postfix_parser::evaluate_postfix;
use rustyline::DefaultEditor;

use crate::err::CalcResult;

#[derive(Parser, Debug)]
#[command(name = "postfix-calc")]
#[command(about = "Evaluate postfix (reverse Polish) arithmetic expressions", long_about = None)]
struct Cli {
    #[arg(
        value_name = "FILE",
        help = "Read the expression from a UTF-8 text file",
        conflicts_with_all = ["expr", "repl"]
    )]
    file: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "EXPR",
        allow_hyphen_values = true,
        conflicts_with = "repl",
        help = "Evaluate EXPR, e.g. \"3 4 +\""
    )]
    expr: Option<String>,

    #[arg(short, long, help = "Evaluate one expression per line until exit")]
    repl: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (-v, -vv, -vvv)")]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            sink::report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    if cli.repl {
        let mut rl = DefaultEditor::new()?;
        return repl::run(&mut rl);
    }
    let expr = match (cli.file, cli.expr) {
        (Some(path), _) => source::read_expression_file(&path)?,
        (None, Some(expr)) => source::trimmed(&expr, "empty expression")?,
        (None, None) => source::from_menu(&mut DefaultEditor::new()?)?,
    };
    info!("evaluating {expr:?}");
    let value = evaluate_postfix(&expr)?;
    println!("{}", sink::format_result(value));
    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
