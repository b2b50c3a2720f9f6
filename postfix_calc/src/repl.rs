use log::info;
use postfix_parser::evaluate_postfix;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::{err::CalcResult, sink::report_error};

#[cfg(feature = "with-file-history")]
const HISTORY_FILE: &str = "history.txt";

enum ReservedWord {
    Exit,
}

/// Evaluates one expression per line until `exit`, Ctrl-C or Ctrl-D.
/// Evaluation errors are reported and the loop keeps going.
pub fn run(rl: &mut DefaultEditor) -> CalcResult<()> {
    #[cfg(feature = "with-file-history")]
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let bare_line = line.trim();
                if bare_line.is_empty() {
                    continue;
                }
                rl.add_history_entry(bare_line)?;
                match is_reserved(bare_line) {
                    Some(ReservedWord::Exit) => break,
                    None => match evaluate_postfix(bare_line) {
                        Ok(value) => println!("= {value:?}"),
                        Err(e) => report_error(&e.into()),
                    },
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                info!("input closed, leaving");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history(HISTORY_FILE)?;
    Ok(())
}

fn is_reserved(word: &str) -> Option<ReservedWord> {
    match word {
        "exit" | "quit" => Some(ReservedWord::Exit),
        _ => None,
    }
}
