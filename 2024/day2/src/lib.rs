use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidLevel(usize, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLevel(line_n, s) => {
                write!(f, "Invalid level({}) in report of line {}.", s, line_n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    fn allows(&self, from: i64, to: i64) -> bool {
        let diff = to - from;
        match self {
            Trend::Increasing => (1..=3).contains(&diff),
            Trend::Decreasing => (-3..=-1).contains(&diff),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    levels: Vec<i64>,
}

impl Report {
    pub fn new(levels: Vec<i64>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[i64] {
        &self.levels
    }

    pub fn is_safe(&self) -> bool {
        is_safe_levels(self.levels.iter().copied())
    }

    /// Safe as is, or safe once any single level is dropped.
    pub fn is_safe_dampened(&self) -> bool {
        self.is_safe()
            || (0..self.levels.len()).any(|skip_ind| {
                is_safe_levels(
                    self.levels
                        .iter()
                        .enumerate()
                        .filter(|(ind, _)| *ind != skip_ind)
                        .map(|(_, level)| *level),
                )
            })
    }
}

fn is_safe_levels<I: Iterator<Item = i64> + Clone>(levels: I) -> bool {
    [Trend::Increasing, Trend::Decreasing].iter().any(|trend| {
        levels
            .clone()
            .zip(levels.clone().skip(1))
            .all(|(from, to)| trend.allows(from, to))
    })
}

pub fn parse_reports(text: &str) -> std::result::Result<Vec<Report>, Error> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            line.split_ascii_whitespace()
                .map(|s| {
                    s.parse::<i64>()
                        .map_err(|_| Error::InvalidLevel(ind + 1, s.to_string()))
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Report::new)
        })
        .collect()
}

pub fn read_reports<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    let text = utils::read_input(path)?;
    Ok(parse_reports(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    fn report(levels: &[i64]) -> Report {
        Report::new(levels.to_vec())
    }

    #[test]
    fn sample_safe_counts() {
        let reports = parse_reports(SAMPLE).unwrap();
        assert_eq!(reports.len(), 6);
        assert_eq!(reports.iter().filter(|r| r.is_safe()).count(), 2);
        assert_eq!(reports.iter().filter(|r| r.is_safe_dampened()).count(), 4);
    }

    #[test]
    fn dampener_drops_one_level_anywhere() {
        assert!(report(&[8, 6, 4, 4, 1]).is_safe_dampened());
        assert!(report(&[1, 50, 2, 3, 4]).is_safe_dampened());
        assert!(report(&[3, 1, 2, 3, 4]).is_safe_dampened());
        assert!(report(&[29, 28, 27, 25, 26, 25, 22, 20]).is_safe_dampened());
        assert!(!report(&[9, 7, 6, 2, 1]).is_safe_dampened());
        assert!(!report(&[36, 38, 36, 39, 42, 43, 40]).is_safe_dampened());
    }

    #[test]
    fn short_reports_are_safe() {
        assert!(report(&[]).is_safe());
        assert!(report(&[42]).is_safe());
        assert!(report(&[1, 9]).is_safe_dampened());
    }

    #[test]
    fn rejects_bad_level() {
        let err = parse_reports("1 2 3\n4 five 6\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLevel(2, s) if s == "five"));
    }

    #[test]
    fn skips_blank_lines() {
        let reports = parse_reports("\n1 3 6 7 9\n\n").unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].levels(), &[1, 3, 6, 7, 9]);
    }
}
