use anyhow::{Context, Result};
use day13::{CLIArgs, PRIZE_OFFSET};
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let arcade = day13::read_arcade(&args.input_path).with_context(|| {
        format!(
            "Failed to read claw machines from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", arcade.min_tokens_with_offset(PRIZE_OFFSET));

    Ok(())
}
