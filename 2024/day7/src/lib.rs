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
    NoColon(String),
    NoOperands(String),
    InvalidNumber(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoColon(s) => write!(f, "Expect colon after test value in equation({}).", s),
            Error::NoOperands(s) => write!(f, "Found no operands in equation({}).", s),
            Error::InvalidNumber(s) => write!(f, "Invalid number({}) in equation.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    /// Undoes `lhs <op> operand == target`, giving the `lhs` needed.
    fn undo(&self, target: u64, operand: u64) -> Option<u64> {
        match self {
            Operator::Add => target.checked_sub(operand),
            Operator::Mul if operand == 0 => (target == 0).then_some(0),
            Operator::Mul => (target % operand == 0).then(|| target / operand),
            Operator::Concat => {
                let shift = 10u64.checked_pow(digit_count(operand))?;
                (target % shift == operand).then(|| target / shift)
            }
        }
    }
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().unwrap_or(0) + 1
}

#[derive(Debug)]
pub struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl FromStr for Equation {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (test_value, operands) = s
            .split_once(':')
            .ok_or_else(|| Error::NoColon(s.to_string()))?;
        let test_value = parse_number(test_value.trim())?;
        let operands = operands
            .split_ascii_whitespace()
            .map(parse_number)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(Error::NoOperands(s.to_string()));
        }

        Ok(Self {
            test_value,
            operands,
        })
    }
}

fn parse_number(s: &str) -> std::result::Result<u64, Error> {
    s.parse::<u64>()
        .map_err(|_| Error::InvalidNumber(s.to_string()))
}

impl Equation {
    pub fn test_value(&self) -> u64 {
        self.test_value
    }

    /// Whether the operands, combined left to right with `ops`, can make the test value.
    pub fn is_solvable(&self, ops: &[Operator]) -> bool {
        can_make(self.test_value, &self.operands, ops)
    }
}

// Works backwards from the last operand so each operator can prune early.
fn can_make(target: u64, operands: &[u64], ops: &[Operator]) -> bool {
    match operands.split_last() {
        None => false,
        Some((first, [])) => target == *first,
        Some((last, rest)) => ops.iter().any(|op| {
            // Anything times zero is zero.
            if *op == Operator::Mul && *last == 0 {
                return target == 0;
            }

            op.undo(target, *last)
                .is_some_and(|lhs| can_make(lhs, rest, ops))
        }),
    }
}

pub fn calibration_total(equations: &[Equation], ops: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|eq| eq.is_solvable(ops))
        .map(|eq| eq.test_value())
        .sum()
}

pub fn parse_equations(text: &str) -> std::result::Result<Vec<Equation>, Error> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(Equation::from_str)
        .collect()
}

pub fn read_equations<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>> {
    let text = utils::read_input(path)?;
    Ok(parse_equations(&text)?)
}
