use anyhow::{Context, Result};
use day19::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let onsen = day19::read_onsen(&args.input_path).with_context(|| {
        format!(
            "Failed to read towel patterns and designs from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", onsen.total_arrangement_count()?);

    Ok(())
}
