use std::path::PathBuf;

use postfix_parser::err::EvalError;
use rustyline::error::ReadlineError;

pub type CalcResult<T> = Result<T, CalcErr>;
pub trait Trace<T> {
    fn trace(self, msg: impl ToString) -> CalcResult<T>;
}
impl<T, E: Into<CalcErr>> Trace<T> for Result<T, E> {
    fn trace(self, msg: impl ToString) -> CalcResult<T> {
        self.map_err(|e| e.into().add_trace(msg.to_string()))
    }
}

#[derive(Debug)]
pub enum CalcErr {
    Backtrace(String, Box<Self>),
    NotFound(PathBuf),
    Io(std::io::Error),
    EmptyInput(&'static str),
    UnknownMode(String),
    Readline(ReadlineError),
    Eval(EvalError),
}
impl CalcErr {
    pub fn add_trace(self, s: String) -> Self {
        Self::Backtrace(s, Box::new(self))
    }

    /// The innermost error, with every context message peeled off.
    pub fn root(&self) -> &CalcErr {
        match self {
            CalcErr::Backtrace(_, inner) => inner.root(),
            leaf => leaf,
        }
    }

    fn write_leaf(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcErr::Backtrace(msg, _) => write!(f, "{msg}"),
            CalcErr::NotFound(path) => write!(f, "file not found: {}", path.display()),
            CalcErr::Io(e) => write!(f, "{e}"),
            CalcErr::EmptyInput(what) => write!(f, "{what}"),
            CalcErr::UnknownMode(choice) => write!(f, "unknown mode: '{choice}'"),
            CalcErr::Readline(e) => write!(f, "input closed: {e}"),
            CalcErr::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl From<std::io::Error> for CalcErr {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
impl From<ReadlineError> for CalcErr {
    fn from(value: ReadlineError) -> Self {
        Self::Readline(value)
    }
}
impl From<EvalError> for CalcErr {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for CalcErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_chain(
            err: &CalcErr,
            f: &mut std::fmt::Formatter<'_>,
            depth: usize,
        ) -> std::fmt::Result {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            err.write_leaf(f)?;
            if let CalcErr::Backtrace(_, inner) = err {
                writeln!(f)?;
                write_chain(inner, f, depth + 1)?;
            }
            Ok(())
        }

        write_chain(self, f, 0)
    }
}

impl std::error::Error for CalcErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcErr::Backtrace(_, inner) => Some(inner.as_ref()),
            CalcErr::Io(e) => Some(e),
            CalcErr::Readline(e) => Some(e),
            CalcErr::Eval(e) => Some(e),
            _ => None,
        }
    }
}
