use anyhow::{Context, Result};
use day9::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let disk_map = day9::read_disk_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read disk map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Answer: {}", disk_map.compact_files_checksum());

    Ok(())
}
