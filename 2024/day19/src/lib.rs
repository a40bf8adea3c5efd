use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoPatterns,
    EmptyPattern,
    InvalidStripe(char),
    CountOverflow(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoPatterns => write!(
                f,
                "Expect one line for patterns at the start of given file."
            ),
            Error::EmptyPattern => write!(f, "Found an empty towel pattern."),
            Error::InvalidStripe(c) => write!(f, "Invalid stripe color({}).", c),
            Error::CountOverflow(design) => write!(
                f,
                "Arrangement count of design({}) doesn't fit in 64 bits.",
                design
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const STRIPE_COLORS: &str = "wubrg";

#[derive(Debug)]
pub struct Design {
    text: String,
}

impl Display for Design {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.text.fmt(f)
    }
}

impl Design {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn is_possible_with(&self, patterns: &[String]) -> bool {
        let text = self.text.as_bytes();
        let mut possible = vec![false; text.len() + 1];
        possible[text.len()] = true;
        for ind in (0..text.len()).rev() {
            possible[ind] = patterns
                .iter()
                .any(|p| text[ind..].starts_with(p.as_bytes()) && possible[ind + p.len()]);
        }

        possible[0]
    }

    /// Number of distinct pattern sequences spelling out this design.
    pub fn arrangement_count(&self, patterns: &[String]) -> std::result::Result<u64, Error> {
        let text = self.text.as_bytes();
        // counts[ind] is the number of ways to build the suffix starting at ind.
        let mut counts = vec![0u64; text.len() + 1];
        counts[text.len()] = 1;
        for ind in (0..text.len()).rev() {
            for p in patterns.iter().filter(|p| text[ind..].starts_with(p.as_bytes())) {
                counts[ind] = counts[ind]
                    .checked_add(counts[ind + p.len()])
                    .ok_or_else(|| Error::CountOverflow(self.text.clone()))?;
            }
        }

        Ok(counts[0])
    }
}

#[derive(Debug)]
pub struct Onsen {
    patterns: Vec<String>,
    designs: Vec<Design>,
}

impl FromStr for Onsen {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut lines = s.lines();
        let patterns = lines
            .next()
            .filter(|l| !l.trim().is_empty())
            .ok_or(Error::NoPatterns)?
            .split(',')
            .map(|p| check_stripes(p.trim()).map(str::to_string))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if patterns.iter().any(|p| p.is_empty()) {
            return Err(Error::EmptyPattern);
        }

        let designs = lines
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| check_stripes(l).map(Design::new))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { patterns, designs })
    }
}

fn check_stripes(text: &str) -> std::result::Result<&str, Error> {
    match text.chars().find(|c| !STRIPE_COLORS.contains(*c)) {
        Some(c) => Err(Error::InvalidStripe(c)),
        None => Ok(text),
    }
}

impl Onsen {
    pub fn designs(&self) -> &[Design] {
        &self.designs
    }

    pub fn possible_design_count(&self) -> usize {
        self.designs
            .iter()
            .filter(|d| d.is_possible_with(&self.patterns))
            .count()
    }

    pub fn total_arrangement_count(&self) -> std::result::Result<u64, Error> {
        self.designs.iter().try_fold(0u64, |total, d| {
            total
                .checked_add(d.arrangement_count(&self.patterns)?)
                .ok_or_else(|| Error::CountOverflow(d.to_string()))
        })
    }
}

pub fn read_onsen<P: AsRef<Path>>(path: P) -> Result<Onsen> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_counts() {
        let onsen: Onsen = SAMPLE.parse().unwrap();
        assert_eq!(onsen.designs().len(), 8);
        assert_eq!(onsen.possible_design_count(), 6);
        assert_eq!(onsen.total_arrangement_count().unwrap(), 16);
    }

    #[test]
    fn single_design_arrangements() {
        let patterns = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"]
            .map(String::from)
            .to_vec();
        assert_eq!(Design::new("brwrr").arrangement_count(&patterns).unwrap(), 2);
        assert_eq!(Design::new("rrbgbr").arrangement_count(&patterns).unwrap(), 6);
        assert!(!Design::new("ubwu").is_possible_with(&patterns));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!("".parse::<Onsen>(), Err(Error::NoPatterns)));
        assert!(matches!("r, , b\n\nrb\n".parse::<Onsen>(), Err(Error::EmptyPattern)));
        assert!(matches!("r, x\n\nrb\n".parse::<Onsen>(), Err(Error::InvalidStripe('x'))));
    }

    #[test]
    fn long_design_overflows_count() {
        let patterns = ["w", "ww"].map(String::from).to_vec();
        // Arrangements of n stripes follow the Fibonacci numbers.
        assert_eq!(
            Design::new(&"w".repeat(90)).arrangement_count(&patterns).unwrap(),
            4660046610375530309
        );

        let design = Design::new(&"w".repeat(100));
        assert!(design.is_possible_with(&patterns));
        assert!(matches!(
            design.arrangement_count(&patterns),
            Err(Error::CountOverflow(_))
        ));
    }
}
