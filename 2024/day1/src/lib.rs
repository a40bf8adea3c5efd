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
    MissingId(usize),
    ExtraText(usize, String),
    InvalidId(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingId(line_n) => {
                write!(f, "Expect two location IDs in line {}, found less.", line_n)
            }
            Error::ExtraText(line_n, s) => write!(
                f,
                "Unexpected text({}) after two location IDs in line {}.",
                s, line_n
            ),
            Error::InvalidId(s) => write!(f, "Invalid location ID({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct LocationLists {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl FromStr for LocationLists {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut lists = LocationLists::default();
        for (ind, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut ids = line.split_ascii_whitespace();
            let left = ids.next().ok_or(Error::MissingId(ind + 1))?;
            let right = ids.next().ok_or(Error::MissingId(ind + 1))?;
            if let Some(extra) = ids.next() {
                return Err(Error::ExtraText(ind + 1, extra.to_string()));
            }

            lists.left.push(parse_id(left)?);
            lists.right.push(parse_id(right)?);
        }

        Ok(lists)
    }
}

fn parse_id(s: &str) -> std::result::Result<u64, Error> {
    s.parse::<u64>()
        .map_err(|_| Error::InvalidId(s.to_string()))
}

impl LocationLists {
    /// Sum of distances between the two lists paired up in sorted order.
    pub fn total_distance(&self) -> u64 {
        let mut left = self.left.clone();
        let mut right = self.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        left.iter()
            .zip(right.iter())
            .map(|(l, r)| l.abs_diff(*r))
            .sum()
    }

    /// Sum of each left ID weighted by how often it shows up in the right list.
    pub fn similarity_score(&self) -> u64 {
        let mut right_counts = HashMap::new();
        for id in &self.right {
            *right_counts.entry(*id).or_insert(0u64) += 1;
        }

        self.left
            .iter()
            .map(|id| id * right_counts.get(id).copied().unwrap_or(0))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

pub fn read_lists<P: AsRef<Path>>(path: P) -> Result<LocationLists> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
