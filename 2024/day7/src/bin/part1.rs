use anyhow::{Context, Result};
use day7::{CLIArgs, Operator};
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let equations = day7::read_equations(&args.input_path).with_context(|| {
        format!(
            "Failed to read calibration equations from given file({}).",
            args.input_path.display()
        )
    })?;

    let ops = [Operator::Add, Operator::Mul];
    println!("Answer: {}", day7::calibration_total(&equations, &ops));

    Ok(())
}
