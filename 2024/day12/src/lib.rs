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
    InvalidPlant(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            Error::InvalidPlant(c) => write!(f, "Invalid plant type({}) in garden.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

#[derive(Debug)]
pub struct Garden {
    plants: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl FromStr for Garden {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut plants = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap_or(0), this_col_n));
            }

            if let Some(c) = line.chars().find(|c| !c.is_ascii_uppercase()) {
                return Err(Error::InvalidPlant(c));
            }
            plants.extend_from_slice(line.as_bytes());
            row_n += 1;
        }

        Ok(Self {
            plants,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }
}

// Clockwise from up.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl Garden {
    pub fn regions(&self) -> Vec<Region> {
        let mut visited = vec![false; self.plants.len()];
        let mut regions = Vec::new();
        for start in 0..self.plants.len() {
            if visited[start] {
                continue;
            }

            visited[start] = true;
            let plant = self.plants[start];
            let mut region = Region {
                area: 0,
                perimeter: 0,
                sides: 0,
            };
            let mut stack = vec![start];
            while let Some(ind) = stack.pop() {
                let (r, c) = self.position(ind);
                region.area += 1;
                region.sides += self.corner_count(r, c, plant);
                for (dr, dc) in DIRECTIONS {
                    match self.index_of(r + dr, c + dc) {
                        Some(next) if self.plants[next] == plant => {
                            if !visited[next] {
                                visited[next] = true;
                                stack.push(next);
                            }
                        }
                        _ => region.perimeter += 1,
                    }
                }
            }
            regions.push(region);
        }

        regions
    }

    pub fn fence_price(&self) -> usize {
        self.regions().iter().map(|r| r.area * r.perimeter).sum()
    }

    pub fn bulk_fence_price(&self) -> usize {
        self.regions().iter().map(|r| r.area * r.sides).sum()
    }

    // A region has as many sides as corners. Each plot adds one corner per
    // pair of adjacent directions that is convex (both neighbors foreign) or
    // concave (both neighbors same, the diagonal between them foreign).
    fn corner_count(&self, r: isize, c: isize, plant: u8) -> usize {
        let is_same = |dr: isize, dc: isize| self.plant_at(r + dr, c + dc) == Some(plant);
        (0..DIRECTIONS.len())
            .filter(|ind| {
                let (ar, ac) = DIRECTIONS[*ind];
                let (br, bc) = DIRECTIONS[(ind + 1) % DIRECTIONS.len()];
                let a = is_same(ar, ac);
                let b = is_same(br, bc);
                (!a && !b) || (a && b && !is_same(ar + br, ac + bc))
            })
            .count()
    }

    fn position(&self, ind: usize) -> (isize, isize) {
        ((ind / self.col_n) as isize, (ind % self.col_n) as isize)
    }

    fn index_of(&self, r: isize, c: isize) -> Option<usize> {
        let r = usize::try_from(r).ok().filter(|r| *r < self.row_n)?;
        let c = usize::try_from(c).ok().filter(|c| *c < self.col_n)?;
        Some(r * self.col_n + c)
    }

    fn plant_at(&self, r: isize, c: isize) -> Option<u8> {
        self.index_of(r, c).map(|ind| self.plants[ind])
    }
}

pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Garden> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_prices() {
        let garden: Garden = SAMPLE.parse().unwrap();
        assert_eq!(garden.regions().len(), 11);
        assert_eq!(garden.fence_price(), 1930);
        assert_eq!(garden.bulk_fence_price(), 1206);
    }

    #[test]
    fn small_garden_regions() {
        let garden: Garden = "AAAA\nBBCD\nBBCC\nEEEC\n".parse().unwrap();
        let regions = garden.regions();
        assert_eq!(regions.len(), 5);
        assert_eq!(
            regions[0],
            Region {
                area: 4,
                perimeter: 10,
                sides: 4
            }
        );
        assert_eq!(garden.fence_price(), 140);
        assert_eq!(garden.bulk_fence_price(), 80);
    }

    #[test]
    fn enclosed_regions() {
        let garden: Garden = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO\n".parse().unwrap();
        assert_eq!(garden.fence_price(), 772);
        assert_eq!(garden.bulk_fence_price(), 436);
    }

    #[test]
    fn diagonal_touch_counts_sides_separately() {
        let garden: Garden = "\
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA
"
        .parse()
        .unwrap();
        assert_eq!(garden.bulk_fence_price(), 368);
    }

    #[test]
    fn rejects_lowercase_plant() {
        let err = "AB\nBa\n".parse::<Garden>().unwrap_err();
        assert!(matches!(err, Error::InvalidPlant('a')));
    }
}
