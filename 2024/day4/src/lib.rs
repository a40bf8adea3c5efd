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
    InconsistentRow(usize, usize),
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) in word search.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug)]
pub struct WordSearch {
    letters: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl FromStr for WordSearch {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut letters = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_col_n = line.len();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap_or(0), this_col_n));
            }

            if let Some(c) = line.chars().find(|c| !c.is_ascii_uppercase()) {
                return Err(Error::InvalidChar(c));
            }

            letters.extend_from_slice(line.as_bytes());
            row_n += 1;
        }

        Ok(Self {
            letters,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }
}

impl WordSearch {
    /// Counts every occurrence of `word` read in any of the 8 directions.
    pub fn count_word(&self, word: &str) -> usize {
        let word = word.as_bytes();
        let Some(&first) = word.first() else {
            return 0;
        };

        (0..self.letters.len())
            .filter(|ind| self.letters[*ind] == first)
            .map(|ind| {
                DIRECTIONS
                    .iter()
                    .filter(|(dr, dc)| {
                        word.iter().enumerate().all(|(step, letter)| {
                            self.letter_at(ind, *dr, *dc, step) == Some(*letter)
                        })
                    })
                    .count()
            })
            .sum()
    }

    /// Counts the `A`s whose two diagonals both read `MAS` in either direction.
    pub fn count_x_mas(&self) -> usize {
        (0..self.letters.len())
            .filter(|ind| self.letters[*ind] == b'A')
            .filter(|ind| {
                let is_mas = |dr: isize, dc: isize| {
                    matches!(
                        (
                            self.letter_at(*ind, dr, dc, 1),
                            self.letter_at(*ind, -dr, -dc, 1),
                        ),
                        (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
                    )
                };

                is_mas(-1, -1) && is_mas(-1, 1)
            })
            .count()
    }

    fn letter_at(&self, ind: usize, dr: isize, dc: isize, step: usize) -> Option<u8> {
        let step = isize::try_from(step).ok()?;
        let r = isize::try_from(ind / self.col_n).ok()? + dr * step;
        let c = isize::try_from(ind % self.col_n).ok()? + dc * step;
        let r = usize::try_from(r).ok().filter(|r| *r < self.row_n)?;
        let c = usize::try_from(c).ok().filter(|c| *c < self.col_n)?;

        Some(self.letters[r * self.col_n + c])
    }
}

pub fn read_word_search<P: AsRef<Path>>(path: P) -> Result<WordSearch> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
