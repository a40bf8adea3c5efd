use anyhow::{Context, Result};
use day20::{CLIArgs, SHORT_CHEAT};
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let map = day20::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read race track map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", map.cheat_count(SHORT_CHEAT, args.min_saving)?);

    Ok(())
}
