use postfix_parser::{err::EvalResult, evaluate, tokenize};

const T1: &str = "5 1 2 + 4 * + 3 -";

fn main() -> EvalResult<()> {
    let tokens = tokenize(T1)?;
    println!("{tokens:?}");
    let value = evaluate(&tokens);
    println!("{value:?}");
    Ok(())
}
