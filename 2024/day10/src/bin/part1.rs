use anyhow::{Context, Result};
use day10::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let map = day10::read_topo_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read topographic map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", map.score_sum());

    Ok(())
}
