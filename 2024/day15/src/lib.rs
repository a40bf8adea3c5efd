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
    MultipleRobots(Position, Position),
    InvalidCharforMap(char),
    NoRobotInMap,
    InvalidCharforDirection(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::MultipleRobots(last_position, this_position) => write!(
                f,
                "Given two robots in map({}, {}), expect only one.",
                last_position, this_position
            ),
            Error::InvalidCharforMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoRobotInMap => write!(f, "No robot found in given map, expect one."),
            Error::InvalidCharforDirection(c) => {
                write!(f, "Invalid character({}) for direction.", c)
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
pub enum Tile {
    Floor,
    Wall,
    Box,
    WideBoxLeft,
    WideBoxRight,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tile_char = match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Box => 'O',
            Tile::WideBoxLeft => '[',
            Tile::WideBoxRight => ']',
        };

        write!(f, "{}", tile_char)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
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

    pub fn gps(&self) -> usize {
        self.r * 100 + self.c
    }

    fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up => self.r.checked_sub(1).map(|r| Self::new(r, self.c)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left => self.c.checked_sub(1).map(|c| Self::new(self.r, c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '^' => Ok(Direction::Up),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            '>' => Ok(Direction::Right),
            other => Err(Error::InvalidCharforDirection(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
    robot: Position,
}

impl Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.tiles.chunks(self.col_n).enumerate() {
            for (c, tile) in row.iter().enumerate() {
                if self.robot == Position::new(r, c) {
                    write!(f, "@")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Warehouse {
    pub fn robot(&self) -> Position {
        self.robot
    }

    /// The same warehouse with every tile doubled in width.
    pub fn widen(&self) -> Self {
        let tiles = self
            .tiles
            .iter()
            .flat_map(|tile| match tile {
                Tile::Box => [Tile::WideBoxLeft, Tile::WideBoxRight],
                Tile::WideBoxLeft | Tile::WideBoxRight | Tile::Floor => [Tile::Floor; 2],
                Tile::Wall => [Tile::Wall; 2],
            })
            .collect();

        Self {
            tiles,
            row_n: self.row_n,
            col_n: self.col_n * 2,
            robot: Position::new(self.robot.r, self.robot.c * 2),
        }
    }

    pub fn simulate(&mut self, dirs: &[Direction]) {
        for dir in dirs {
            self.try_move(*dir);
        }
    }

    /// Sum of GPS coordinates of every box, measured from its left edge.
    pub fn gps_sum(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| matches!(tile, Tile::Box | Tile::WideBoxLeft))
            .map(|(ind, _)| Position::new(ind / self.col_n, ind % self.col_n).gps())
            .sum()
    }

    // Collects everything the robot would push, level by level, and moves it
    // only if nothing in the chain is blocked.
    fn try_move(&mut self, dir: Direction) -> bool {
        let mut pushed = vec![self.robot];
        let mut seen = HashSet::from([self.robot]);
        let mut ind = 0;
        while ind < pushed.len() {
            let Some(next) = pushed[ind].neighbor(dir) else {
                return false;
            };
            ind += 1;

            let partner = match self.tile(&next) {
                None | Some(Tile::Wall) => return false,
                Some(Tile::Floor) => continue,
                Some(Tile::Box) => None,
                Some(Tile::WideBoxLeft) => next.neighbor(Direction::Right),
                Some(Tile::WideBoxRight) => next.neighbor(Direction::Left),
            };
            for pos in std::iter::once(next).chain(partner) {
                if seen.insert(pos) {
                    pushed.push(pos);
                }
            }
        }

        for pos in pushed.iter().skip(1).rev() {
            if let Some(to) = pos.neighbor(dir) {
                let (from_ind, to_ind) = (self.pos_to_ind(pos), self.pos_to_ind(&to));
                self.tiles[to_ind] = std::mem::replace(&mut self.tiles[from_ind], Tile::Floor);
            }
        }
        if let Some(robot) = self.robot.neighbor(dir) {
            self.robot = robot;
        }

        true
    }

    fn tile(&self, pos: &Position) -> Option<Tile> {
        (pos.r < self.row_n && pos.c < self.col_n).then(|| self.tiles[self.pos_to_ind(pos)])
    }

    fn pos_to_ind(&self, pos: &Position) -> usize {
        pos.r * self.col_n + pos.c
    }
}

impl FromStr for Warehouse {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut tiles = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        let mut robot = None;
        for line in s.lines().filter(|l| !l.is_empty()) {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap_or(0), this_col_n));
            }

            for (c, tile_char) in line.chars().enumerate() {
                let tile = match tile_char {
                    '.' => Tile::Floor,
                    '#' => Tile::Wall,
                    'O' => Tile::Box,
                    '[' => Tile::WideBoxLeft,
                    ']' => Tile::WideBoxRight,
                    '@' => {
                        let this_pos = Position::new(row_n, c);
                        if let Some(last_pos) = robot.replace(this_pos) {
                            return Err(Error::MultipleRobots(last_pos, this_pos));
                        }
                        Tile::Floor
                    }
                    other => return Err(Error::InvalidCharforMap(other)),
                };
                tiles.push(tile);
            }
            row_n += 1;
        }

        Ok(Self {
            tiles,
            row_n,
            col_n: col_n.unwrap_or(0),
            robot: robot.ok_or(Error::NoRobotInMap)?,
        })
    }
}

pub fn parse_game(text: &str) -> std::result::Result<(Warehouse, Vec<Direction>), Error> {
    let (map_text, dirs_text) = text
        .split_once("\n\n")
        .or_else(|| text.split_once("\r\n\r\n"))
        .unwrap_or((text, ""));
    let warehouse = map_text.parse()?;
    let dirs = dirs_text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Direction::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((warehouse, dirs))
}

pub fn read_game<P: AsRef<Path>>(path: P) -> Result<(Warehouse, Vec<Direction>)> {
    let text = utils::read_input(path)?;
    Ok(parse_game(&text)?)
}
