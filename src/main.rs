use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Input {
    /// The expression to evaluate, e.g. "sin x + y^2"
    expression: String,

    /// Value bound to the x variable
    #[clap(short, long, default_value = "0.0")]
    x: f64,

    /// Value bound to the y variable
    #[clap(short, long, default_value = "0.0")]
    y: f64,
}

fn main() -> miette::Result<()> {
    let Input { expression, x, y } = Input::parse();

    let expr = plotexpr::parse(&expression)?;
    println!("{}", expr.evaluate(x, y));

    Ok(())
}
