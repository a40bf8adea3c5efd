use anyhow::{Context, Result};
use day15::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let (warehouse, dirs) = day15::read_game(&args.input_path).with_context(|| {
        format!(
            "Failed to read warehouse map and moves from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut wide = warehouse.widen();
    wide.simulate(&dirs);
    println!("Answer: {}", wide.gps_sum());

    Ok(())
}
