use anyhow::{Context, Result};
use day5::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let queue = day5::read_print_queue(&args.input_path).with_context(|| {
        format!(
            "Failed to read page ordering rules and updates from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", queue.reordered_middle_sum());

    Ok(())
}
