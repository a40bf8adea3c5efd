use anyhow::{Context, Result};
use day8::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let map = day8::read_antenna_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read antenna map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", map.antinode_count(true));

    Ok(())
}
