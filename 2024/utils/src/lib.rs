//! Shared harness for the daily puzzle programs: argument parsing, input
//! loading and the run timer.

pub mod cli;
pub mod input;
pub mod timer;

pub use cli::parse_args;
pub use input::{read_input, LoadError};
pub use timer::Timer;
