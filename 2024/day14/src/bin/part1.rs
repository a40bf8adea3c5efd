use anyhow::{Context, Result};
use day14::{CLIArgs, Map, SAFETY_SECONDS};
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let robots = day14::read_robots(&args.input_path).with_context(|| {
        format!(
            "Failed to read robots from given file({}).",
            args.input_path.display()
        )
    })?;

    let map = Map::new(args.width, args.height)?;
    println!("Answer: {}", map.safety_factor(&robots, SAFETY_SECONDS));

    Ok(())
}
