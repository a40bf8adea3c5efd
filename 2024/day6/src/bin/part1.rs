use anyhow::{Context, Result};
use day6::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let lab = day6::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", lab.patrol_tile_count());

    Ok(())
}
