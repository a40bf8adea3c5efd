use std::{
    collections::HashSet,
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
    InvalidHeight(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            Error::InvalidHeight(c) => write!(f, "Invalid height({}) in topographic map.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const TRAIL_TOP: u8 = 9;

#[derive(Debug)]
pub struct TopoMap {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl FromStr for TopoMap {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut heights = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap_or(0), this_col_n));
            }

            for c in line.chars() {
                let height = c.to_digit(10).ok_or(Error::InvalidHeight(c))?;
                heights.push(height as u8);
            }
            row_n += 1;
        }

        Ok(Self {
            heights,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }
}

impl TopoMap {
    /// Sum over trailheads of how many distinct 9s each one reaches.
    pub fn score_sum(&self) -> usize {
        self.trailheads()
            .map(|ind| {
                let mut tops = HashSet::new();
                self.walk(ind, &mut |top| {
                    tops.insert(top);
                });
                tops.len()
            })
            .sum()
    }

    /// Sum over trailheads of how many distinct hiking trails start there.
    pub fn rating_sum(&self) -> usize {
        self.trailheads()
            .map(|ind| {
                let mut trail_n = 0;
                self.walk(ind, &mut |_| trail_n += 1);
                trail_n
            })
            .sum()
    }

    fn trailheads(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.heights.len()).filter(|ind| self.heights[*ind] == 0)
    }

    // Calls `on_top` once per trail from `ind` that climbs by exactly 1 each step.
    fn walk(&self, ind: usize, on_top: &mut impl FnMut(usize)) {
        let height = self.heights[ind];
        if height == TRAIL_TOP {
            on_top(ind);
            return;
        }

        for next in self.neighbors(ind) {
            if self.heights[next] == height + 1 {
                self.walk(next, on_top);
            }
        }
    }

    fn neighbors(&self, ind: usize) -> impl Iterator<Item = usize> {
        let (r, c) = (ind / self.col_n, ind % self.col_n);
        let col_n = self.col_n;
        [
            (r > 0).then(|| ind - col_n),
            (c + 1 < col_n).then(|| ind + 1),
            (r + 1 < self.row_n).then(|| ind + col_n),
            (c > 0).then(|| ind - 1),
        ]
        .into_iter()
        .flatten()
    }
}

pub fn read_topo_map<P: AsRef<Path>>(path: P) -> Result<TopoMap> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
