use anyhow::{Context, Result};
use day12::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let garden = day12::read_garden(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", garden.fence_price());

    Ok(())
}
