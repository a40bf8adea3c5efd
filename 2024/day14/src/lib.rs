use std::{
    error,
    fmt::Display,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidRobotText(String),
    EmptyMap(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRobotText(s) => write!(f, "Invalid text({}) for robot.", s),
            Error::EmptyMap(w, h) => write!(f, "Map({}x{}) has no room for robots.", w, h),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(long, default_value_t = 101)]
    pub width: usize,
    #[arg(long, default_value_t = 103)]
    pub height: usize,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    #[command(flatten)]
    pub common: CLIArgs,
    /// Draw the robots at the found second on stderr.
    #[arg(long)]
    pub show: bool,
}

pub const SAFETY_SECONDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy)]
struct Vector {
    x: i64,
    y: i64,
}

#[derive(Debug)]
pub struct Map {
    width: usize,
    height: usize,
}

impl Map {
    pub fn new(width: usize, height: usize) -> std::result::Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyMap(width, height));
        }

        Ok(Self { width, height })
    }

    /// Quadrant index (0..4) of `pos`, none on the middle row or column.
    ///
    /// An even side has no middle line and is split evenly.
    pub fn quad_ind(&self, pos: &Position) -> Option<usize> {
        let half_x = self.width / 2;
        let half_y = self.height / 2;
        if self.width % 2 == 1 && pos.x == half_x || self.height % 2 == 1 && pos.y == half_y {
            return None;
        }

        let mut ind = if pos.x < half_x { 0 } else { 1 };
        if pos.y >= half_y {
            ind += 2;
        }

        Some(ind)
    }

    pub fn safety_factor(&self, robots: &[Robot], seconds: usize) -> usize {
        let mut counts_in_quads = [0usize; 4];
        for robot in robots {
            if let Some(quad_ind) = self.quad_ind(&robot.pos_after(seconds, self)) {
                counts_in_quads[quad_ind] += 1;
            }
        }

        counts_in_quads.iter().product()
    }

    /// First second in `1..=width*height` with the lowest safety factor.
    ///
    /// Robots repeat their layout every `width*height` seconds, and the
    /// picture packs most of them into one quadrant.
    pub fn least_safety_second(&self, robots: &[Robot]) -> usize {
        let mut best = (usize::MAX, 1);
        for seconds in 1..=self.width * self.height {
            let factor = self.safety_factor(robots, seconds);
            if factor < best.0 {
                best = (factor, seconds);
            }
        }

        best.1
    }

    pub fn display<W: Write>(&self, robots: &[Robot], seconds: usize, out: &mut W) -> Result<()> {
        let mut marks = vec![false; self.width * self.height];
        for robot in robots {
            let pos = robot.pos_after(seconds, self);
            marks[pos.y * self.width + pos.x] = true;
        }

        for row in marks.chunks(self.width) {
            let line = row
                .iter()
                .map(|marked| if *marked { '#' } else { '.' })
                .collect::<String>();
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Robot {
    pos: Position,
    velocity: Vector,
}

impl Robot {
    pub fn pos_after(&self, seconds: usize, map: &Map) -> Position {
        fn move_wrap(from: usize, speed: i64, seconds: usize, wrap: usize) -> usize {
            let wrap = wrap as i64;
            let offset = (speed.rem_euclid(wrap) * (seconds as i64 % wrap)).rem_euclid(wrap);
            ((from as i64 % wrap + offset) % wrap) as usize
        }

        Position::new(
            move_wrap(self.pos.x, self.velocity.x, seconds, map.width),
            move_wrap(self.pos.y, self.velocity.y, seconds, map.height),
        )
    }
}

impl FromStr for Robot {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        static ROBOT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"p=(\d+),(\d+) v=(-?\d+),(-?\d+)").unwrap());

        let invalid = || Error::InvalidRobotText(s.to_string());
        let caps = ROBOT_PATTERN.captures(s).ok_or_else(invalid)?;
        let pos = Position::new(
            caps[1].parse().map_err(|_| invalid())?,
            caps[2].parse().map_err(|_| invalid())?,
        );
        let velocity = Vector {
            x: caps[3].parse().map_err(|_| invalid())?,
            y: caps[4].parse().map_err(|_| invalid())?,
        };

        Ok(Self { pos, velocity })
    }
}

pub fn parse_robots(text: &str) -> std::result::Result<Vec<Robot>, Error> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(Robot::from_str)
        .collect()
}

pub fn read_robots<P: AsRef<Path>>(path: P) -> Result<Vec<Robot>> {
    let text = utils::read_input(path)?;
    Ok(parse_robots(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_safety_factor() {
        let robots = parse_robots(SAMPLE).unwrap();
        let map = Map::new(11, 7).unwrap();
        assert_eq!(robots.len(), 12);
        assert_eq!(map.safety_factor(&robots, SAFETY_SECONDS), 12);
        assert_eq!(map.least_safety_second(&robots), 5);
    }

    #[test]
    fn robot_wraps_around() {
        let robot: Robot = "p=2,4 v=2,-3".parse().unwrap();
        let map = Map::new(11, 7).unwrap();
        assert_eq!(robot.pos_after(0, &map), Position::new(2, 4));
        assert_eq!(robot.pos_after(1, &map), Position::new(4, 1));
        assert_eq!(robot.pos_after(2, &map), Position::new(6, 5));
        assert_eq!(robot.pos_after(5, &map), Position::new(1, 3));
    }

    #[test]
    fn middle_lines_belong_to_no_quadrant() {
        let map = Map::new(11, 7).unwrap();
        assert_eq!(map.quad_ind(&Position::new(5, 0)), None);
        assert_eq!(map.quad_ind(&Position::new(0, 3)), None);
        assert_eq!(map.quad_ind(&Position::new(0, 0)), Some(0));
        assert_eq!(map.quad_ind(&Position::new(10, 6)), Some(3));
    }

    #[test]
    fn display_marks_robots() {
        let robots = parse_robots("p=0,0 v=1,0\np=2,1 v=0,0\n").unwrap();
        let map = Map::new(3, 2).unwrap();
        let mut out = Vec::new();
        map.display(&robots, 1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ".#.\n..#\n");
    }

    #[test]
    fn rejects_bad_robot() {
        let err = "p=1,2 v=3".parse::<Robot>().unwrap_err();
        assert!(matches!(err, Error::InvalidRobotText(_)));
        assert!(matches!(Map::new(0, 7), Err(Error::EmptyMap(0, 7))));
    }
}
