use std::{io::ErrorKind, path::Path};

use log::info;
use rustyline::DefaultEditor;

use crate::err::{CalcErr, CalcResult, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    File,
    Console,
}
impl Mode {
    pub fn from_choice(choice: &str) -> Option<Mode> {
        match choice.trim() {
            "1" => Some(Self::File),
            "2" => Some(Self::Console),
            _ => None,
        }
    }
}

/// Asks which source to use, then reads one expression from it.
pub fn from_menu(rl: &mut DefaultEditor) -> CalcResult<String> {
    println!("--- Postfix calculator ---");
    println!("1 = File");
    println!("2 = Console");
    let choice = rl.readline("Your choice: ")?;
    match Mode::from_choice(&choice) {
        Some(Mode::File) => {
            let path = read_expression_line(rl, "File path: ", "empty file path")?;
            read_expression_file(Path::new(&path))
        }
        Some(Mode::Console) => {
            read_expression_line(rl, "Enter a postfix expression: ", "empty expression")
        }
        None => Err(CalcErr::UnknownMode(choice.trim().to_string())),
    }
}

pub fn read_expression_file(path: &Path) -> CalcResult<String> {
    info!("reading expression from {}", path.display());
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CalcErr::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e).trace(format!("reading {}", path.display())),
    };
    trimmed(&content, "empty expression in file")
}

pub fn read_expression_line(
    rl: &mut DefaultEditor,
    prompt: &str,
    what: &'static str,
) -> CalcResult<String> {
    let line = rl.readline(prompt)?;
    trimmed(&line, what)
}

/// Trims `text`, failing with `EmptyInput(what)` when nothing is left.
pub fn trimmed(text: &str, what: &'static str) -> CalcResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CalcErr::EmptyInput(what));
    }
    Ok(text.to_string())
}
