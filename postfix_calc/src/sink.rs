use log::debug;

use crate::err::CalcErr;

pub fn format_result(value: f64) -> String {
    format!("Result: {value:?}")
}

pub fn format_error(err: &CalcErr) -> String {
    format!("=== ERROR: {} ===", err.root())
}

/// Prints the innermost message to stderr; the full chain only goes to the log.
pub fn report_error(err: &CalcErr) {
    debug!("{err}");
    eprintln!("{}", format_error(err));
}
