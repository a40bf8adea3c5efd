use anyhow::{Context, Result};
use day18::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let positions = day18::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read falling byte positions from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", day18::first_cutting_byte(args.size, &positions)?);

    Ok(())
}
