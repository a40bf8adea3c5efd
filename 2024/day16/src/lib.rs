use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
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
            Error::NoPathToEnd => write!(f, "The reindeer can't reach the end position."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North => self.r.checked_sub(1).map(|r| Self::new(r, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West => self.c.checked_sub(1).map(|c| Self::new(self.r, c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Forward,
    TurnClockwise,
    TurnCounterclockwise,
}

impl Action {
    pub fn all_actions() -> &'static [Action] {
        &[
            Action::Forward,
            Action::TurnClockwise,
            Action::TurnCounterclockwise,
        ]
    }

    pub fn score(&self) -> usize {
        match self {
            Action::Forward => 1,
            Action::TurnClockwise | Action::TurnCounterclockwise => 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn reverse(&self) -> Self {
        self.turn_clockwise().turn_clockwise()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reindeer {
    pos: Position,
    dir: Direction,
}

impl Reindeer {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    pub fn clone_and_do(&self, action: Action, map: &Map) -> Option<Reindeer> {
        match action {
            Action::Forward => self
                .pos
                .neighbor(self.dir)
                .filter(|next_pos| map.is_floor(next_pos))
                .map(|next_pos| Self::new(next_pos, self.dir)),
            Action::TurnClockwise => Some(Self::new(self.pos, self.dir.turn_clockwise())),
            Action::TurnCounterclockwise => {
                Some(Self::new(self.pos, self.dir.turn_counterclockwise()))
            }
        }
    }

    /// The state that reaches `self` by doing `action`.
    pub fn clone_and_undo(&self, action: Action, map: &Map) -> Option<Reindeer> {
        match action {
            Action::Forward => self
                .pos
                .neighbor(self.dir.reverse())
                .filter(|last_pos| map.is_floor(last_pos))
                .map(|last_pos| Self::new(last_pos, self.dir)),
            Action::TurnClockwise => Some(Self::new(self.pos, self.dir.turn_counterclockwise())),
            Action::TurnCounterclockwise => Some(Self::new(self.pos, self.dir.turn_clockwise())),
        }
    }
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
    pub fn min_score(&self) -> std::result::Result<usize, Error> {
        let scores = self.scores_from(&[self.init_deer()], Reindeer::clone_and_do);
        self.end_deers()
            .filter_map(|deer| scores.get(&deer).copied())
            .min()
            .ok_or(Error::NoPathToEnd)
    }

    /// Number of tiles on at least one lowest-score path from start to end.
    pub fn best_seat_count(&self) -> std::result::Result<usize, Error> {
        let min_score = self.min_score()?;
        let from_start = self.scores_from(&[self.init_deer()], Reindeer::clone_and_do);
        let end_deers = self.end_deers().collect::<Vec<_>>();
        let to_end = self.scores_from(&end_deers, Reindeer::clone_and_undo);

        let seats = from_start
            .iter()
            .filter(|(deer, score)| {
                to_end
                    .get(*deer)
                    .is_some_and(|rest| **score + *rest == min_score)
            })
            .map(|(deer, _)| deer.pos)
            .collect::<HashSet<_>>();

        Ok(seats.len())
    }

    // Dijkstra over reindeer states, with `step` deciding which way edges go.
    fn scores_from<F>(&self, starts: &[Reindeer], step: F) -> HashMap<Reindeer, usize>
    where
        F: Fn(&Reindeer, Action, &Map) -> Option<Reindeer>,
    {
        let mut scores = HashMap::new();
        let mut possible_states = starts
            .iter()
            .map(|deer| Reverse((0, *deer)))
            .collect::<BinaryHeap<_>>();
        while let Some(Reverse((score, deer))) = possible_states.pop() {
            if scores.contains_key(&deer) {
                continue;
            }
            scores.insert(deer, score);

            for action in Action::all_actions() {
                if let Some(next_deer) = step(&deer, *action, self) {
                    if !scores.contains_key(&next_deer) {
                        possible_states.push(Reverse((score + action.score(), next_deer)));
                    }
                }
            }
        }

        scores
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        if pos.r < self.row_n && pos.c < self.col_n {
            self.tiles.get(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    fn is_floor(&self, pos: &Position) -> bool {
        self.tile(pos).is_some_and(|tile| *tile == Tile::Floor)
    }

    fn init_deer(&self) -> Reindeer {
        Reindeer::new(self.start_pos, Direction::East)
    }

    fn end_deers(&self) -> impl Iterator<Item = Reindeer> + '_ {
        Direction::all()
            .into_iter()
            .map(|dir| Reindeer::new(self.end_pos, dir))
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
                    '.' => Tile::Floor,
                    'S' => {
                        if let Some(last_pos) = start_pos.replace(pos) {
                            return Err(Error::MultipleStartPosition(last_pos, pos));
                        }
                        Tile::Floor
                    }
                    'E' => {
                        if let Some(last_pos) = end_pos.replace(pos) {
                            return Err(Error::MultipleEndPosition(last_pos, pos));
                        }
                        Tile::Floor
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

    const SECOND_SAMPLE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn sample_scores() {
        let map: Map = SAMPLE.parse().unwrap();
        assert_eq!(map.min_score().unwrap(), 7036);
        assert_eq!(map.best_seat_count().unwrap(), 45);
    }

    #[test]
    fn second_sample_scores() {
        let map: Map = SECOND_SAMPLE.parse().unwrap();
        assert_eq!(map.min_score().unwrap(), 11048);
        assert_eq!(map.best_seat_count().unwrap(), 64);
    }

    #[test]
    fn straight_corridor() {
        let map: Map = "#####\n#S.E#\n#####\n".parse().unwrap();
        assert_eq!(map.min_score().unwrap(), 2);
        assert_eq!(map.best_seat_count().unwrap(), 3);
    }

    #[test]
    fn walled_off_end() {
        let map: Map = "#####\n#S#E#\n#####\n".parse().unwrap();
        assert!(matches!(map.min_score(), Err(Error::NoPathToEnd)));
    }

    #[test]
    fn rejects_missing_end() {
        let err = "####\n#S.#\n####\n".parse::<Map>().unwrap_err();
        assert!(matches!(err, Error::NoEndPosition));
    }
}
