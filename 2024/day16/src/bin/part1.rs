use anyhow::{Context, Result};
use day16::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let map = day16::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", map.min_score()?);

    Ok(())
}
