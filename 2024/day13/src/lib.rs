use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    NoButtonBLine,
    NoPrize,
    InvalidButtonText(String),
    InvalidPrizeText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoButtonBLine => {
                write!(f, "Expect one more line for button B, but can't find one.")
            }
            Error::NoPrize => write!(f, "Expect one more line for prize, but can't find one."),
            Error::InvalidButtonText(s) => write!(f, "Invalid text({}) for button.", s),
            Error::InvalidPrizeText(s) => write!(f, "Invalid text({}) for prize.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub const PRIZE_OFFSET: i64 = 10_000_000_000_000;
const BUTTON_A_COST: i64 = 3;
const BUTTON_B_COST: i64 = 1;

type Vector = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    button_a_count: i64,
    button_b_count: i64,
}

impl Solution {
    pub fn new(button_a_count: i64, button_b_count: i64) -> Self {
        Self {
            button_a_count,
            button_b_count,
        }
    }

    pub fn tokens_n(&self) -> i64 {
        self.button_a_count * BUTTON_A_COST + self.button_b_count * BUTTON_B_COST
    }
}

#[derive(Debug, Clone)]
pub struct ClawMachine {
    button_a_move: Vector,
    button_b_move: Vector,
    prize: Vector,
}

impl ClawMachine {
    pub fn new(button_a_move: Vector, button_b_move: Vector, prize: Vector) -> Self {
        Self {
            button_a_move,
            button_b_move,
            prize,
        }
    }

    pub fn with_prize_offset(&self, offset: i64) -> Self {
        Self {
            prize: (self.prize.0 + offset, self.prize.1 + offset),
            ..self.clone()
        }
    }

    /// The non-negative whole press counts that land the claw on the prize.
    ///
    /// Solved by Cramer's rule; buttons moving along the same line give no
    /// solution.
    pub fn solution(&self) -> Option<Solution> {
        let (ax, ay) = self.button_a_move;
        let (bx, by) = self.button_b_move;
        let (px, py) = self.prize;
        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }

        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }

        let (a, b) = (a_num / det, b_num / det);
        (a >= 0 && b >= 0).then(|| Solution::new(a, b))
    }
}

pub fn min_tokens(machines: &[ClawMachine]) -> i64 {
    machines
        .iter()
        .filter_map(|m| m.solution())
        .map(|s| s.tokens_n())
        .sum()
}

#[derive(Debug)]
pub struct Arcade {
    machines: Vec<ClawMachine>,
}

impl FromStr for Arcade {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut machines = Vec::new();
        let mut lines = s.lines();
        while let Some(button_a_line) = lines.next() {
            if button_a_line.trim().is_empty() {
                continue;
            }

            let button_a_move = read_button(button_a_line)?;
            let button_b_move = read_button(lines.next().ok_or(Error::NoButtonBLine)?)?;
            let prize = read_prize(lines.next().ok_or(Error::NoPrize)?)?;
            machines.push(ClawMachine::new(button_a_move, button_b_move, prize));
        }

        Ok(Self { machines })
    }
}

impl Arcade {
    pub fn machines(&self) -> &[ClawMachine] {
        &self.machines
    }

    pub fn min_tokens(&self) -> i64 {
        min_tokens(&self.machines)
    }

    pub fn min_tokens_with_offset(&self, offset: i64) -> i64 {
        let machines = self
            .machines
            .iter()
            .map(|m| m.with_prize_offset(offset))
            .collect::<Vec<_>>();
        min_tokens(&machines)
    }
}

fn read_button(text: &str) -> std::result::Result<Vector, Error> {
    static BUTTON_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"Button \w+: X\+(\d+), Y\+(\d+)").unwrap());

    BUTTON_PATTERN
        .captures(text)
        .and_then(|caps| Some((caps[1].parse().ok()?, caps[2].parse().ok()?)))
        .ok_or_else(|| Error::InvalidButtonText(text.to_string()))
}

fn read_prize(text: &str) -> std::result::Result<Vector, Error> {
    static PRIZE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"Prize: X=(\d+), Y=(\d+)").unwrap());

    PRIZE_PATTERN
        .captures(text)
        .and_then(|caps| Some((caps[1].parse().ok()?, caps[2].parse().ok()?)))
        .ok_or_else(|| Error::InvalidPrizeText(text.to_string()))
}

pub fn read_arcade<P: AsRef<Path>>(path: P) -> Result<Arcade> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_tokens() {
        let arcade: Arcade = SAMPLE.parse().unwrap();
        assert_eq!(arcade.machines().len(), 4);
        assert_eq!(arcade.min_tokens(), 480);
        assert_eq!(arcade.min_tokens_with_offset(PRIZE_OFFSET), 875318608908);
    }

    #[test]
    fn first_machine_presses() {
        let arcade: Arcade = SAMPLE.parse().unwrap();
        let machines = arcade.machines();
        assert_eq!(machines[0].solution(), Some(Solution::new(80, 40)));
        assert_eq!(machines[1].solution(), None);
        assert!(machines[1].with_prize_offset(PRIZE_OFFSET).solution().is_some());
        assert!(machines[0].with_prize_offset(PRIZE_OFFSET).solution().is_none());
    }

    #[test]
    fn parallel_buttons_are_unwinnable() {
        let machine = ClawMachine::new((1, 1), (2, 2), (4, 4));
        assert_eq!(machine.solution(), None);
    }

    #[test]
    fn negative_presses_are_rejected() {
        let machine = ClawMachine::new((1, 0), (0, 1), (-1, 2));
        assert_eq!(machine.solution(), None);
    }

    #[test]
    fn missing_prize_line() {
        let err = "Button A: X+1, Y+2\nButton B: X+3, Y+4\n"
            .parse::<Arcade>()
            .unwrap_err();
        assert!(matches!(err, Error::NoPrize));
    }

    #[test]
    fn malformed_button() {
        let err = "Button A: X-1, Y+2\nButton B: X+3, Y+4\nPrize: X=1, Y=1\n"
            .parse::<Arcade>()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidButtonText(_)));
    }
}
