use anyhow::{Context, Result};
use day3::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let program = day3::read_program(&args.input_path).with_context(|| {
        format!(
            "Failed to read instructions from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", program.mul_sum()?);

    Ok(())
}
