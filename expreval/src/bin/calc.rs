extern crate expreval;

mod repl {
    use expreval::{evaluate_with, EvalError, Strategy};

    fn describe(err: &EvalError) -> String {
        if err.is_internal() {
            format!("Internal error: {} (this is a bug)", err)
        } else {
            format!("Eval error: {}", err)
        }
    }

    pub fn evalexpr(input: &str, strategy: Strategy) {
        match evaluate_with(input, strategy) {
            Err(e) => println!("{}", describe(&e)),
            Ok(result) => println!("{} = {}", input.trim(), result),
        }
    }

    // Lines like ":stack" switch evaluator, anything else is an expression
    pub fn parse_statement(strategy: &mut Strategy, input: &str) {
        match input.trim().strip_prefix(':') {
            Some(name) => match name.trim().parse::<Strategy>() {
                Ok(s) => *strategy = s,
                Err(e) => println!("{}", e),
            },
            None => evalexpr(input, *strategy),
        }
    }
}

fn main() -> Result<(), String> {
    use expreval::Strategy;

    let mut args = std::env::args().skip(1).peekable();
    let flag = match args.peek().map(|a| a.as_str()) {
        Some("--stack") => Some(Strategy::Stack),
        Some("--span") => Some(Strategy::Span),
        _ => None,
    };
    if flag.is_some() {
        args.next();
    }
    let mut strategy = flag.unwrap_or_default();

    let input = args.collect::<Vec<String>>().join(" ");
    if !input.is_empty() {
        repl::evalexpr(&input, strategy);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".calc_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::parse_statement(&mut strategy, &line);
            }
        }
    }
    if let Some(path) = histpath {
        rl.save_history(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
