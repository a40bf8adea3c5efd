use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidStone(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStone(s) => write!(f, "Invalid number({}) engraved on stone.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Stones {
    numbers: Vec<u64>,
}

impl FromStr for Stones {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let numbers = s
            .split_ascii_whitespace()
            .map(|n| {
                n.parse::<u64>()
                    .map_err(|_| Error::InvalidStone(n.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { numbers })
    }
}

impl Stones {
    /// Number of stones in the line after blinking `blink_n` times.
    pub fn count_after(&self, blink_n: usize) -> u64 {
        let mut cache = HashMap::new();
        self.numbers
            .iter()
            .map(|n| count_from(*n, blink_n, &mut cache))
            .sum()
    }
}

fn count_from(number: u64, blink_n: usize, cache: &mut HashMap<(u64, usize), u64>) -> u64 {
    if blink_n == 0 {
        return 1;
    }
    if let Some(count) = cache.get(&(number, blink_n)) {
        return *count;
    }

    let count = match blink(number) {
        (first, None) => count_from(first, blink_n - 1, cache),
        (first, Some(second)) => {
            count_from(first, blink_n - 1, cache) + count_from(second, blink_n - 1, cache)
        }
    };
    cache.insert((number, blink_n), count);

    count
}

fn blink(number: u64) -> (u64, Option<u64>) {
    if number == 0 {
        return (1, None);
    }

    let digit_n = number.ilog10() + 1;
    if digit_n % 2 == 0 {
        let half = 10u64.pow(digit_n / 2);
        (number / half, Some(number % half))
    } else {
        (number.saturating_mul(2024), None)
    }
}

pub fn read_stones<P: AsRef<Path>>(path: P) -> Result<Stones> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
