use std::{
    collections::VecDeque,
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoCommaInPositionText(String),
    InvalidCoordinateText(String),
    EmptyMap,
    ExitUnreachable,
    PathNeverCut,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCommaInPositionText(s) => write!(
                f,
                "Expect a comma to separate coordinates of position in text({}).",
                s
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of position.", s)
            }
            Error::EmptyMap => write!(f, "Memory space needs a size of at least 1."),
            Error::ExitUnreachable => write!(f, "No path leads from start to exit."),
            Error::PathNeverCut => write!(f, "No falling byte cuts every path to the exit."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Side length of the square memory space.
    #[arg(long, default_value_t = 71)]
    pub size: usize,
}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    #[command(flatten)]
    pub common: CLIArgs,
    /// How many bytes have fallen before walking.
    #[arg(long, default_value_t = 1024)]
    pub fallen: usize,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn all_dirs() -> &'static [Direction] {
        &[
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (c_text, r_text) = s
            .split_once(',')
            .ok_or_else(|| Error::NoCommaInPositionText(s.to_string()))?;
        let parse_coord = |text: &str| {
            text.trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidCoordinateText(text.to_string()))
        };

        Ok(Position::new(parse_coord(r_text)?, parse_coord(c_text)?))
    }
}

/// Shown as `x,y`, the way the positions are given.
impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.c, self.r)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Fine,
    Corrupted,
}

#[derive(Debug, Clone)]
pub struct Map {
    tiles: Vec<Tile>,
    side_len: usize,
}

impl Map {
    pub fn new_square(side_len: usize) -> std::result::Result<Self, Error> {
        if side_len == 0 {
            return Err(Error::EmptyMap);
        }

        Ok(Self {
            tiles: vec![Tile::Fine; side_len * side_len],
            side_len,
        })
    }

    /// Marks positions as corrupted; positions outside the map are ignored.
    pub fn corrupt(&mut self, corr_positions: &[Position]) {
        for pos in corr_positions {
            if let Some(ind) = self.pos_to_ind(pos) {
                self.tiles[ind] = Tile::Corrupted;
            }
        }
    }

    pub fn exit_steps_n(&self) -> Option<usize> {
        let last = self.side_len - 1;
        self.min_steps_n(&Position::new(0, 0), &Position::new(last, last))
    }

    pub fn min_steps_n(&self, from: &Position, to: &Position) -> Option<usize> {
        if !self.is_fine(from) || !self.is_fine(to) {
            return None;
        }

        let mut searched = vec![false; self.tiles.len()];
        searched[self.pos_to_ind(from)?] = true;
        let mut search_positions = VecDeque::from([(0, *from)]);
        while let Some((cur_steps_n, cur_pos)) = search_positions.pop_front() {
            if cur_pos == *to {
                return Some(cur_steps_n);
            }

            for next_pos in Direction::all_dirs()
                .iter()
                .flat_map(|dir| cur_pos.neighbor(*dir))
                .filter(|pos| self.is_fine(pos))
            {
                if let Some(ind) = self.pos_to_ind(&next_pos) {
                    if !searched[ind] {
                        searched[ind] = true;
                        search_positions.push_back((cur_steps_n + 1, next_pos));
                    }
                }
            }
        }

        None
    }

    fn is_fine(&self, pos: &Position) -> bool {
        self.pos_to_ind(pos)
            .is_some_and(|ind| self.tiles[ind] == Tile::Fine)
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        (pos.r < self.side_len && pos.c < self.side_len).then(|| pos.r * self.side_len + pos.c)
    }
}

/// Fewest steps to the exit after the first `fallen` bytes have landed.
pub fn steps_after_fallen(
    side_len: usize,
    positions: &[Position],
    fallen: usize,
) -> std::result::Result<usize, Error> {
    let mut map = Map::new_square(side_len)?;
    map.corrupt(&positions[..fallen.min(positions.len())]);
    map.exit_steps_n().ok_or(Error::ExitUnreachable)
}

/// The first byte whose landing leaves no path to the exit.
///
/// Blocking is monotonic in the number of fallen bytes, so the cut-off is
/// found by binary search.
pub fn first_cutting_byte(
    side_len: usize,
    positions: &[Position],
) -> std::result::Result<Position, Error> {
    let is_cut = |fallen: usize| -> std::result::Result<bool, Error> {
        let mut map = Map::new_square(side_len)?;
        map.corrupt(&positions[..fallen]);
        Ok(map.exit_steps_n().is_none())
    };

    if !is_cut(positions.len())? {
        return Err(Error::PathNeverCut);
    }

    if is_cut(0)? {
        return Err(Error::ExitUnreachable);
    }

    // `low` bytes leave a path, `high` bytes don't.
    let (mut low, mut high) = (0, positions.len());
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if is_cut(mid)? {
            high = mid;
        } else {
            low = mid;
        }
    }

    Ok(positions[high - 1])
}

pub fn parse_positions(text: &str) -> std::result::Result<Vec<Position>, Error> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(Position::from_str)
        .collect()
}

pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
    let text = utils::read_input(path)?;
    Ok(parse_positions(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_steps() {
        let positions = parse_positions(SAMPLE).unwrap();
        assert_eq!(positions.len(), 25);
        assert_eq!(steps_after_fallen(7, &positions, 12).unwrap(), 22);
    }

    #[test]
    fn sample_cutting_byte() {
        let positions = parse_positions(SAMPLE).unwrap();
        assert_eq!(first_cutting_byte(7, &positions).unwrap().to_string(), "6,1");
    }

    #[test]
    fn fallen_beyond_input_uses_every_byte() {
        let positions = parse_positions("1,0\n").unwrap();
        assert_eq!(steps_after_fallen(2, &positions, 1024).unwrap(), 2);
    }

    #[test]
    fn unreachable_exit() {
        let positions = parse_positions("1,0\n0,1\n").unwrap();
        assert!(matches!(
            steps_after_fallen(3, &positions, 2),
            Err(Error::ExitUnreachable)
        ));
        assert_eq!(first_cutting_byte(3, &positions).unwrap(), Position::new(1, 0));
    }

    #[test]
    fn path_never_cut() {
        let positions = parse_positions("1,1\n").unwrap();
        assert!(matches!(
            first_cutting_byte(3, &positions),
            Err(Error::PathNeverCut)
        ));
    }

    #[test]
    fn rejects_bad_position() {
        assert!(matches!(
            "3;4".parse::<Position>(),
            Err(Error::NoCommaInPositionText(_))
        ));
        assert!(matches!(
            "3,x".parse::<Position>(),
            Err(Error::InvalidCoordinateText(_))
        ));
    }
}
