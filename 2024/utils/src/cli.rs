use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};

/// Parses the process arguments into `T`.
///
/// Help and version requests are printed by clap and end the process as
/// usual. Every other failure, like a missing input path, comes back as an
/// error so `main` can propagate it and exit with status 1.
pub fn parse_args<T: Parser>() -> Result<T> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<T, I, S>(args: I) -> Result<T>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => Err(e).context("Failed to parse command line arguments."),
        },
    }
}
