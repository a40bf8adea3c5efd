use anyhow::{Context, Result};
use day2::CLIArgs;
use utils::Timer;

fn main() -> Result<()> {
    let _timer = Timer::start();
    let args: CLIArgs = utils::parse_args()?;
    let reports = day2::read_reports(&args.input_path).with_context(|| {
        format!(
            "Failed to read reports from given file({}).",
            args.input_path.display()
        )
    })?;

    let safe_n = reports.iter().filter(|r| r.is_safe()).count();
    println!("Answer: {}", safe_n);

    Ok(())
}
