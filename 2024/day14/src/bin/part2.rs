use std::io::stderr;

use anyhow::{Context, Result};
use day14::{Map, Part2CLIArgs};
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: Part2CLIArgs = utils::parse_args()?;
    let input_path = &args.common.input_path;
    let robots = day14::read_robots(input_path).with_context(|| {
        format!(
            "Failed to read robots from given file({}).",
            input_path.display()
        )
    })?;

    let map = Map::new(args.common.width, args.common.height)?;
    let seconds = map.least_safety_second(&robots);
    if args.show {
        eprintln!("After {} second(s):", seconds);
        map.display(&robots, seconds, &mut stderr().lock())?;
    }
    println!("Answer: {}", seconds);

    Ok(())
}
