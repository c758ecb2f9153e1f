use clap::Parser;
use mathex::evaluate_expression;

/// mathex evaluates a single mathematical expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, for example "2 + 3 * (4 - 1)".
    expression: String,
}

fn main() {
    let args = Args::parse();

    match evaluate_expression(&args.expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
