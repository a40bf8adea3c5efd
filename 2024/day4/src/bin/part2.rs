use anyhow::{Context, Result};
use day4::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let search = day4::read_word_search(&args.input_path).with_context(|| {
        format!(
            "Failed to read word search from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", search.count_x_mas());

    Ok(())
}
