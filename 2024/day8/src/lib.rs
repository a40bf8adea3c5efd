use std::{
    collections::{HashMap, HashSet},
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
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

type Position = (isize, isize);

#[derive(Debug)]
pub struct AntennaMap {
    row_n: isize,
    col_n: isize,
    antennas: HashMap<char, Vec<Position>>,
}

impl FromStr for AntennaMap {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut antennas: HashMap<char, Vec<Position>> = HashMap::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap_or(0), this_col_n));
            }

            for (c_ind, c) in line.chars().enumerate() {
                if c.is_ascii_alphanumeric() {
                    antennas.entry(c).or_default().push((row_n, c_ind as isize));
                }
            }
            row_n += 1;
        }

        Ok(Self {
            row_n,
            col_n: col_n.unwrap_or(0) as isize,
            antennas,
        })
    }
}

impl AntennaMap {
    /// Counts distinct in-map positions holding at least one antinode.
    ///
    /// Without resonance each ordered pair of same-frequency antennas makes a
    /// single antinode one step beyond the second antenna. With resonance the
    /// antinodes repeat along the whole line, antennas included.
    pub fn antinode_count(&self, resonant: bool) -> usize {
        let mut antinodes = HashSet::new();
        for positions in self.antennas.values() {
            for (i, a) in positions.iter().enumerate() {
                for (j, b) in positions.iter().enumerate() {
                    if i == j {
                        continue;
                    }

                    let delta = (b.0 - a.0, b.1 - a.1);
                    if resonant {
                        let mut pos = *b;
                        while self.contains(pos) {
                            antinodes.insert(pos);
                            pos = (pos.0 + delta.0, pos.1 + delta.1);
                        }
                    } else {
                        let pos = (b.0 + delta.0, b.1 + delta.1);
                        if self.contains(pos) {
                            antinodes.insert(pos);
                        }
                    }
                }
            }
        }

        antinodes.len()
    }

    fn contains(&self, (r, c): Position) -> bool {
        (0..self.row_n).contains(&r) && (0..self.col_n).contains(&c)
    }
}

pub fn read_antenna_map<P: AsRef<Path>>(path: P) -> Result<AntennaMap> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_antinodes() {
        let map: AntennaMap = SAMPLE.parse().unwrap();
        assert_eq!(map.antennas.len(), 2);
        assert_eq!(map.antinode_count(false), 14);
        assert_eq!(map.antinode_count(true), 34);
    }

    #[test]
    fn resonant_line_of_three() {
        let map: AntennaMap = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
"
        .parse()
        .unwrap();
        assert_eq!(map.antinode_count(true), 9);
    }

    #[test]
    fn lone_antenna_has_no_antinode() {
        let map: AntennaMap = "....\n.a..\n....\n".parse().unwrap();
        assert_eq!(map.antinode_count(false), 0);
        assert_eq!(map.antinode_count(true), 0);
    }

    #[test]
    fn marks_other_than_letters_and_digits_are_empty() {
        let map: AntennaMap = "a.#.\n....\n..a!\n".parse().unwrap();
        assert_eq!(map.antennas.len(), 1);
        assert_eq!(map.antinode_count(false), 0);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = "...\n..\n".parse::<AntennaMap>().unwrap_err();
        assert!(matches!(err, Error::InconsistentRow(3, 2)));
    }
}
