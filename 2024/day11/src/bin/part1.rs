use anyhow::{Context, Result};
use day11::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let stones = day11::read_stones(&args.input_path).with_context(|| {
        format!(
            "Failed to read stones from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", stones.count_after(25));

    Ok(())
}
