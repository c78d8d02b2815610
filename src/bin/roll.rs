use clap::Parser;
use dicecalc::{EvalResult, RollContext, DEFAULT_MAX_ROLLS};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Evaluates arithmetic expressions with dice, such as `3d6 + 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the whole result, including every roll and token.
    #[arg(short, long)]
    verbose: bool,

    /// The most dice a single expression may roll.
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLS)]
    max_rolls: usize,

    /// The expression to evaluate. Without one, expressions are read from
    /// standard input, one per line.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn report(result: &EvalResult, verbose: bool) -> bool {
    if verbose {
        println!("{:#?}", result);
    } else if !result.error {
        println!("{}", result.value);
    }
    if result.error {
        eprintln!("Error: {}", result.error_code);
    }
    !result.error
}

fn repl(ctx: &mut RollContext, verbose: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next().transpose()? {
        if !line.trim().is_empty() {
            report(&ctx.eval_str(&line), verbose);
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut ctx = RollContext::new_bounded(args.max_rolls, rand::thread_rng());

    match args.expression {
        Some(expression) => {
            if report(&ctx.eval_str(&expression), args.verbose) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => match repl(&mut ctx, args.verbose) {
            Ok(()) => ExitCode::SUCCESS,
            Err(why) => {
                eprintln!("Error: {}", why);
                ExitCode::FAILURE
            }
        },
    }
}
