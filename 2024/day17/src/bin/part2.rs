use anyhow::{Context, Result};
use day17::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let info = day17::read_debug_info(&args.input_path).with_context(|| {
        format!(
            "Failed to read debug information from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", info.self_output_a()?);

    Ok(())
}
