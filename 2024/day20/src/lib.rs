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
    InconsistentRow(usize, usize),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    InvalidCharForMap(char),
    NoStartPosition,
    NoEndPosition,
    NoPathToEnd,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoStartPosition => write!(f, "No start position in map."),
            Error::NoEndPosition => write!(f, "No end position in map."),
            Error::NoPathToEnd => write!(f, "The track doesn't lead from start to end."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Count only cheats saving at least this many picoseconds.
    #[arg(long, default_value_t = 100)]
    pub min_saving: usize,
}

pub const SHORT_CHEAT: usize = 2;
pub const LONG_CHEAT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn manhattan_dist(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }

    fn neighbors(&self) -> impl Iterator<Item = Position> {
        [
            self.r.checked_sub(1).map(|r| Position::new(r, self.c)),
            Some(Position::new(self.r, self.c + 1)),
            Some(Position::new(self.r + 1, self.c)),
            self.c.checked_sub(1).map(|c| Position::new(self.r, c)),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Track,
}

#[derive(Debug)]
pub struct Map {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
    start_pos: Position,
    end_pos: Position,
}

impl Map {
    pub fn fastest_steps_n(&self) -> std::result::Result<usize, Error> {
        let steps = self.steps_from_start();
        self.pos_to_ind(&self.end_pos)
            .and_then(|ind| steps[ind])
            .ok_or(Error::NoPathToEnd)
    }

    /// Number of cheats that save at least `min_saving` picoseconds.
    ///
    /// A cheat passes through walls for up to `max_cheat_len` moves and is
    /// identified by its start and end tiles on the track.
    pub fn cheat_count(
        &self,
        max_cheat_len: usize,
        min_saving: usize,
    ) -> std::result::Result<usize, Error> {
        let steps = self.steps_from_start();
        if self.pos_to_ind(&self.end_pos).and_then(|ind| steps[ind]).is_none() {
            return Err(Error::NoPathToEnd);
        }

        let track = steps
            .iter()
            .enumerate()
            .filter_map(|(ind, s)| s.map(|s| (self.ind_to_pos(ind), s)))
            .collect::<Vec<_>>();

        let mut count = 0;
        for (from, from_steps) in &track {
            let r_range = from.r.saturating_sub(max_cheat_len)
                ..=(from.r + max_cheat_len).min(self.row_n - 1);
            for r in r_range {
                let c_radius = max_cheat_len - from.r.abs_diff(r);
                let c_range =
                    from.c.saturating_sub(c_radius)..=(from.c + c_radius).min(self.col_n - 1);
                for c in c_range {
                    let to = Position::new(r, c);
                    let Some(to_steps) = self.pos_to_ind(&to).and_then(|ind| steps[ind]) else {
                        continue;
                    };

                    let cheat_len = from.manhattan_dist(&to);
                    if to_steps >= from_steps + cheat_len + min_saving {
                        count += 1;
                    }
                }
            }
        }

        Ok(count)
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        self.pos_to_ind(pos).map(|ind| &self.tiles[ind])
    }

    // Breadth-first distances along the track; walls and unreached tiles are `None`.
    fn steps_from_start(&self) -> Vec<Option<usize>> {
        let mut steps = vec![None; self.tiles.len()];
        let Some(start_ind) = self.pos_to_ind(&self.start_pos) else {
            return steps;
        };

        steps[start_ind] = Some(0);
        let mut search_positions = VecDeque::from([(0, self.start_pos)]);
        while let Some((cur_steps_n, cur_pos)) = search_positions.pop_front() {
            for next_pos in cur_pos.neighbors() {
                if self.tile(&next_pos) != Some(&Tile::Track) {
                    continue;
                }
                if let Some(ind) = self.pos_to_ind(&next_pos) {
                    if steps[ind].is_none() {
                        steps[ind] = Some(cur_steps_n + 1);
                        search_positions.push_back((cur_steps_n + 1, next_pos));
                    }
                }
            }
        }

        steps
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        (pos.r < self.row_n && pos.c < self.col_n).then(|| pos.r * self.col_n + pos.c)
    }

    fn ind_to_pos(&self, ind: usize) -> Position {
        Position::new(ind / self.col_n, ind % self.col_n)
    }
}

impl FromStr for Map {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut tiles = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        let mut start_pos = None;
        let mut end_pos = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap_or(0), this_col_n));
            }

            for (c, tile_char) in line.chars().enumerate() {
                let pos = Position::new(row_n, c);
                let tile = match tile_char {
                    '#' => Tile::Wall,
                    '.' => Tile::Track,
                    'S' => {
                        if let Some(last_pos) = start_pos.replace(pos) {
                            return Err(Error::MultipleStartPosition(last_pos, pos));
                        }
                        Tile::Track
                    }
                    'E' => {
                        if let Some(last_pos) = end_pos.replace(pos) {
                            return Err(Error::MultipleEndPosition(last_pos, pos));
                        }
                        Tile::Track
                    }
                    other => return Err(Error::InvalidCharForMap(other)),
                };
                tiles.push(tile);
            }
            row_n += 1;
        }

        Ok(Self {
            tiles,
            row_n,
            col_n: col_n.unwrap_or(0),
            start_pos: start_pos.ok_or(Error::NoStartPosition)?,
            end_pos: end_pos.ok_or(Error::NoEndPosition)?,
        })
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<Map> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_track_length() {
        let map: Map = SAMPLE.parse().unwrap();
        assert_eq!(map.fastest_steps_n().unwrap(), 84);
    }

    #[test]
    fn sample_short_cheats() {
        let map: Map = SAMPLE.parse().unwrap();
        assert_eq!(map.cheat_count(SHORT_CHEAT, 64).unwrap(), 1);
        assert_eq!(map.cheat_count(SHORT_CHEAT, 20).unwrap(), 5);
        assert_eq!(map.cheat_count(SHORT_CHEAT, 1).unwrap(), 44);
        assert_eq!(map.cheat_count(SHORT_CHEAT, 100).unwrap(), 0);
    }

    #[test]
    fn sample_long_cheats() {
        let map: Map = SAMPLE.parse().unwrap();
        assert_eq!(map.cheat_count(LONG_CHEAT, 76).unwrap(), 3);
        assert_eq!(map.cheat_count(LONG_CHEAT, 50).unwrap(), 285);
    }

    #[test]
    fn blocked_track() {
        let map: Map = "#####\n#S#E#\n#####\n".parse().unwrap();
        assert!(matches!(map.fastest_steps_n(), Err(Error::NoPathToEnd)));
        assert!(matches!(map.cheat_count(SHORT_CHEAT, 1), Err(Error::NoPathToEnd)));
    }

    #[test]
    fn rejects_second_start() {
        let err = "#S.S#\n#.E.#\n".parse::<Map>().unwrap_err();
        assert!(matches!(err, Error::MultipleStartPosition(_, _)));
    }
}
