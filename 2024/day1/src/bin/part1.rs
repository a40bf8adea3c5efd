use anyhow::{Context, Result};
use day1::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let lists = day1::read_lists(&args.input_path).with_context(|| {
        format!(
            "Failed to read location ID lists from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", lists.total_distance());

    Ok(())
}
