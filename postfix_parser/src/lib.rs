use std::fmt::Display;

use log::{debug, trace};

use crate::err::{EvalError, EvalResult};
pub mod err;

#[derive(Default, Debug)]
struct CalcStack(Vec<f64>);
impl CalcStack {
    fn push_token(&mut self, tok: &str) -> EvalResult<()> {
        match Token::classify(tok)? {
            Token::Number(n) => self.0.push(n),
            Token::Op(op) => {
                // top of stack is the right-hand operand
                let (Some(rhs), Some(lhs)) = (self.0.pop(), self.0.pop()) else {
                    return Err(EvalError::InsufficientOperands(op.to_string()));
                };
                self.0.push(op.apply(lhs, rhs)?);
            }
        }
        trace!("{tok:>6} -> {:?}", self.0);
        Ok(())
    }

    fn finish(self) -> EvalResult<f64> {
        match self.0.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::InvalidExpression(rest.len())),
        }
    }
}

/// Evaluates a whole postfix expression, e.g. `"3 4 + 2 *"`.
pub fn evaluate_postfix(text: &str) -> EvalResult<f64> {
    let tokens = tokenize(text)?;
    let value = evaluate(&tokens)?;
    debug!("{text:?} = {value}");
    Ok(value)
}

/// Splits `text` on runs of whitespace. Tokens are not classified here.
pub fn tokenize(text: &str) -> EvalResult<Vec<&str>> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    debug!("tokens: {tokens:?}");
    Ok(tokens)
}

/// Runs the stack machine over `tokens`, left to right, stopping at the
/// first error.
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> EvalResult<f64> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    let mut stack = CalcStack::default();
    tokens
        .iter()
        .try_for_each(|t| stack.push_token(t.as_ref()))?;
    stack.finish()
}

/// True for signed or fractional decimal literals such as `3`, `-2.5` or `1e3`.
///
/// Spelled-out `inf`/`nan` are not numbers here.
pub fn is_number(tok: &str) -> bool {
    tok.bytes().any(|b| b.is_ascii_digit()) && tok.parse::<f64>().is_ok()
}

/// Applies the operator spelled `symbol`; `lhs` is the deeper operand.
pub fn apply(symbol: &str, lhs: f64, rhs: f64) -> EvalResult<f64> {
    Operation::from_symbol(symbol)
        .ok_or_else(|| EvalError::UnsupportedOperator(symbol.to_string()))?
        .apply(lhs, rhs)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Operation),
}
impl Token {
    pub fn classify(tok: &str) -> EvalResult<Token> {
        if is_number(tok) {
            return tok
                .parse()
                .map(Self::Number)
                .map_err(|_| EvalError::UnknownSymbol(tok.to_string()));
        }
        Operation::from_symbol(tok)
            .map(Self::Op)
            .ok_or_else(|| EvalError::UnknownSymbol(tok.to_string()))
    }
}
impl From<Operation> for Token {
    fn from(value: Operation) -> Self {
        Self::Op(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}
impl Operation {
    pub fn from_symbol(s: &str) -> Option<Operation> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Computes `lhs OP rhs`. A zero divisor is rejected before dividing.
    pub fn apply(&self, lhs: f64, rhs: f64) -> EvalResult<f64> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Operation::Divide => Ok(lhs / rhs),
        }
    }
}
impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Operation, Token, apply, err::EvalError, evaluate, evaluate_postfix, is_number, tokenize,
    };

    fn token_sig(tokens: Vec<&str>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|t| match Token::classify(t) {
                Ok(Token::Number(n)) => format!("num:{n}"),
                Ok(Token::Op(op)) => format!("op:{op}"),
                Err(_) => format!("bad:{t}"),
            })
            .collect()
    }

    #[test]
    fn tokenize_matrix() {
        let cases = [
            ("3 4 +", vec!["num:3", "num:4", "op:+"]),
            ("  3\t4\n+  ", vec!["num:3", "num:4", "op:+"]),
            ("-2.5 1e3 *", vec!["num:-2.5", "num:1000", "op:*"]),
            ("10 2 - 4 /", vec!["num:10", "num:2", "op:-", "num:4", "op:/"]),
            ("3 x +", vec!["num:3", "bad:x", "op:+"]),
            ("3 4+", vec!["num:3", "bad:4+"]),
        ];

        for (input, expected) in cases {
            let actual = token_sig(tokenize(input).unwrap());
            let expected = expected.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            assert_eq!(actual, expected, "input: {input:?}");
        }
    }

    #[test]
    fn tokenize_rejects_blank_input() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(
                tokenize(input),
                Err(EvalError::EmptyExpression),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn is_number_matrix() {
        let numbers = ["3", "-2.5", "1e3", "+7", ".5", "5.", "0", "-0", "2E-3"];
        let not_numbers = ["+", "-", "*", "/", "x", "", ".", "1,5", "inf", "NaN", "3x"];

        for tok in numbers {
            assert!(is_number(tok), "expected number: {tok:?}");
        }
        for tok in not_numbers {
            assert!(!is_number(tok), "expected non-number: {tok:?}");
        }
    }

    #[test]
    fn classify_operators() {
        let cases = [
            ("+", Operation::Add),
            ("-", Operation::Subtract),
            ("*", Operation::Multiply),
            ("/", Operation::Divide),
        ];
        for (sym, op) in cases {
            assert_eq!(Token::classify(sym), Ok(op.into()));
            assert_eq!(op.to_string(), sym);
        }
        assert_eq!(
            Token::classify("%"),
            Err(EvalError::UnknownSymbol("%".to_string()))
        );
    }

    #[test]
    fn apply_keeps_operand_order() {
        let cases = [
            ("+", 10.0, 2.0, 12.0),
            ("-", 10.0, 2.0, 8.0),
            ("*", 10.0, 2.0, 20.0),
            ("/", 10.0, 2.0, 5.0),
            ("-", 2.0, 10.0, -8.0),
            ("/", 1.0, 4.0, 0.25),
        ];
        for (op, lhs, rhs, expected) in cases {
            assert_eq!(apply(op, lhs, rhs), Ok(expected), "{lhs} {op} {rhs}");
        }
    }

    #[test]
    fn apply_guards_division_and_unknown_ops() {
        assert_eq!(apply("/", 10.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(apply("/", 10.0, -0.0), Err(EvalError::DivisionByZero));
        assert_eq!(
            apply("^", 2.0, 3.0),
            Err(EvalError::UnsupportedOperator("^".to_string()))
        );
    }

    #[test]
    fn evaluate_matrix() {
        let cases: [(&[&str], f64); 6] = [
            (&["3", "4", "+"], 7.0),
            (&["5", "1", "2", "+", "4", "*", "+", "3", "-"], 14.0),
            (&["10", "2", "-"], 8.0),
            (&["42"], 42.0),
            (&["-2.5", "2", "*"], -5.0),
            (&["1", "4", "/", "1e1", "*"], 2.5),
        ];

        for (tokens, expected) in cases {
            assert_eq!(evaluate(tokens), Ok(expected), "tokens: {tokens:?}");
        }
    }

    #[test]
    fn evaluate_error_matrix() {
        let cases: [(&[&str], EvalError); 7] = [
            (&[], EvalError::EmptyExpression),
            (&["10", "0", "/"], EvalError::DivisionByZero),
            (&["3", "+"], EvalError::InsufficientOperands("+".to_string())),
            (&["-"], EvalError::InsufficientOperands("-".to_string())),
            (&["3", "4"], EvalError::InvalidExpression(2)),
            (&["3", "x", "+"], EvalError::UnknownSymbol("x".to_string())),
            (&["1", "0", "/", "y"], EvalError::DivisionByZero),
        ];

        for (tokens, expected) in cases {
            assert_eq!(evaluate(tokens), Err(expected), "tokens: {tokens:?}");
        }
    }

    #[test]
    fn evaluate_is_repeatable() {
        let tokens = ["5", "1", "2", "+", "4", "*", "+", "3", "-"];
        let first = evaluate(&tokens);
        for _ in 0..3 {
            assert_eq!(evaluate(&tokens), first);
        }
        assert_eq!(evaluate(&["3", "4"]), evaluate(&["3", "4"]));
    }

    #[test]
    fn evaluate_postfix_matrix() {
        let cases = [
            ("3 4 +", Ok(7.0)),
            ("  5 1 2 + 4 * + 3 -\n", Ok(14.0)),
            ("", Err(EvalError::EmptyExpression)),
            ("   ", Err(EvalError::EmptyExpression)),
            ("1 2 3 +", Err(EvalError::InvalidExpression(2))),
            ("4 2 / *", Err(EvalError::InsufficientOperands("*".to_string()))),
            ("inf 1 +", Err(EvalError::UnknownSymbol("inf".to_string()))),
            ("1_000 1 +", Err(EvalError::UnknownSymbol("1_000".to_string()))),
        ];

        for (input, expected) in cases {
            assert_eq!(evaluate_postfix(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn error_messages() {
        let cases = [
            (EvalError::EmptyExpression, "empty expression"),
            (
                EvalError::UnknownSymbol("x".to_string()),
                "unknown or invalid symbol: 'x'",
            ),
            (
                EvalError::InsufficientOperands("+".to_string()),
                "not enough operands for '+'",
            ),
            (EvalError::DivisionByZero, "division by zero"),
            (
                EvalError::UnsupportedOperator("^".to_string()),
                "unsupported operator: ^",
            ),
            (
                EvalError::InvalidExpression(2),
                "invalid expression (2 values left on the stack)",
            ),
        ];
        for (err, msg) in cases {
            assert_eq!(err.to_string(), msg);
        }
    }
}
