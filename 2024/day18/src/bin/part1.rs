use anyhow::{Context, Result};
use day18::Part1CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: Part1CLIArgs = utils::parse_args()?;
    let input_path = &args.common.input_path;
    let positions = day18::read_positions(input_path).with_context(|| {
        format!(
            "Failed to read falling byte positions from given file({}).",
            input_path.display()
        )
    })?;

    let steps_n = day18::steps_after_fallen(args.common.size, &positions, args.fallen)?;
    println!("Answer: {}", steps_n);

    Ok(())
}
