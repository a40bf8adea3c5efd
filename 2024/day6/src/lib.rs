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
    MultipleGuards(usize, usize),
    InvalidChar(char),
    NoGuard,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            Error::MultipleGuards(row0, row1) => write!(
                f,
                "Found guards in row {} and row {} of given laboratory, expect one only.",
                row0, row1
            ),
            Error::InvalidChar(c) => {
                write!(f, "Invalid character({}) in text of laboratory layout.", c)
            }
            Error::NoGuard => write!(f, "There's no guard in given laboratory, but expect one."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    fn mark(self) -> u8 {
        1 << self as u8
    }
}

enum Move {
    To(usize, Direction),
    Exit,
    Trapped,
}

/// Laboratory floor stored row by row; tiles are addressed by `row * width + col`.
#[derive(Debug)]
pub struct Laboratory {
    obstacles: Vec<bool>,
    width: usize,
    height: usize,
    guard: usize,
    guard_dir: Direction,
}

impl FromStr for Laboratory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut obstacles = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut guard: Option<(usize, Direction)> = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_width = line.chars().count();
            if *width.get_or_insert(this_width) != this_width {
                return Err(Error::InconsistentRow(width.unwrap_or(0), this_width));
            }

            for c in line.chars() {
                let dir = match c {
                    '.' => None,
                    '#' => {
                        obstacles.push(true);
                        continue;
                    }
                    '^' => Some(Direction::Up),
                    '>' => Some(Direction::Right),
                    'v' => Some(Direction::Down),
                    '<' => Some(Direction::Left),
                    other => return Err(Error::InvalidChar(other)),
                };
                if let Some(dir) = dir {
                    if let Some((ind, _)) = guard {
                        return Err(Error::MultipleGuards(ind / this_width, height));
                    }
                    guard = Some((obstacles.len(), dir));
                }
                obstacles.push(false);
            }
            height += 1;
        }

        let (guard, guard_dir) = guard.ok_or(Error::NoGuard)?;
        Ok(Self {
            obstacles,
            width: width.unwrap_or(0),
            height,
            guard,
            guard_dir,
        })
    }
}

impl Laboratory {
    /// Number of distinct tiles the guard stands on before walking out.
    pub fn patrol_tile_count(&self) -> usize {
        let mut visited = vec![false; self.obstacles.len()];
        visited[self.guard] = true;
        let (mut pos, mut dir) = (self.guard, self.guard_dir);
        while let Move::To(next, next_dir) = self.advance(pos, dir, None) {
            visited[next] = true;
            pos = next;
            dir = next_dir;
        }

        visited.iter().filter(|v| **v).count()
    }

    /// Number of tiles where one new obstruction traps the guard in a loop.
    ///
    /// Candidates are the tiles on the original route. Each one is tried the
    /// first time the guard is about to step onto it, resuming the walk from
    /// there instead of from the start.
    pub fn loop_obstruction_count(&self) -> usize {
        let mut visited = vec![false; self.obstacles.len()];
        visited[self.guard] = true;
        let (mut pos, mut dir) = (self.guard, self.guard_dir);
        let mut count = 0;
        while let Move::To(next, next_dir) = self.advance(pos, dir, None) {
            if !visited[next] {
                visited[next] = true;
                if self.is_loop_from(pos, dir, next) {
                    count += 1;
                }
            }

            pos = next;
            dir = next_dir;
        }

        count
    }

    fn is_loop_from(&self, mut pos: usize, mut dir: Direction, obstruction: usize) -> bool {
        let mut seen = vec![0u8; self.obstacles.len()];
        loop {
            if seen[pos] & dir.mark() != 0 {
                return true;
            }
            seen[pos] |= dir.mark();

            match self.advance(pos, dir, Some(obstruction)) {
                Move::To(next, next_dir) => {
                    pos = next;
                    dir = next_dir;
                }
                Move::Exit => return false,
                Move::Trapped => return true,
            }
        }
    }

    fn advance(&self, pos: usize, mut dir: Direction, obstruction: Option<usize>) -> Move {
        for _ in 0..4 {
            match self.step(pos, dir) {
                None => return Move::Exit,
                Some(next) if self.obstacles[next] || Some(next) == obstruction => {
                    dir = dir.turn_right();
                }
                Some(next) => return Move::To(next, dir),
            }
        }

        Move::Trapped
    }

    fn step(&self, pos: usize, dir: Direction) -> Option<usize> {
        let (r, c) = (pos / self.width, pos % self.width);
        match dir {
            Direction::Up if r > 0 => Some(pos - self.width),
            Direction::Right if c + 1 < self.width => Some(pos + 1),
            Direction::Down if r + 1 < self.height => Some(pos + self.width),
            Direction::Left if c > 0 => Some(pos - 1),
            _ => None,
        }
    }
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Laboratory> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
