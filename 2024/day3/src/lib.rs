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
    InvalidOperand(String),
    SumOverflow,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidOperand(s) => write!(f, "Invalid operand({}) for multiply.", s),
            Error::SumOverflow => write!(f, "Sum of products doesn't fit in 64 bits."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

/// The well-formed instructions found in a corrupted memory dump, in order.
#[derive(Debug)]
pub struct Program {
    insts: Vec<Instruction>,
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        static INST_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"mul\(([0-9]+),([0-9]+)\)|do\(\)|don't\(\)").unwrap());

        let mut insts = Vec::new();
        for caps in INST_PATTERN.captures_iter(s) {
            let inst = match &caps[0] {
                "do()" => Instruction::Do,
                "don't()" => Instruction::Dont,
                _ => Instruction::Mul(parse_operand(&caps[1])?, parse_operand(&caps[2])?),
            };
            insts.push(inst);
        }

        Ok(Self { insts })
    }
}

fn parse_operand(s: &str) -> std::result::Result<u64, Error> {
    s.parse::<u64>()
        .map_err(|_| Error::InvalidOperand(s.to_string()))
}

impl Program {
    pub fn insts(&self) -> &[Instruction] {
        &self.insts
    }

    pub fn mul_sum(&self) -> std::result::Result<u64, Error> {
        self.insts.iter().try_fold(0u64, |sum, inst| match inst {
            Instruction::Mul(l, r) => add_product(sum, *l, *r),
            _ => Ok(sum),
        })
    }

    /// Like `mul_sum`, but skips multiplies between a `don't()` and the next `do()`.
    pub fn enabled_mul_sum(&self) -> std::result::Result<u64, Error> {
        let (sum, _) = self
            .insts
            .iter()
            .try_fold((0u64, true), |(sum, enabled), inst| match inst {
                Instruction::Mul(l, r) if enabled => Ok((add_product(sum, *l, *r)?, enabled)),
                Instruction::Mul(_, _) => Ok((sum, enabled)),
                Instruction::Do => Ok((sum, true)),
                Instruction::Dont => Ok((sum, false)),
            })?;

        Ok(sum)
    }
}

fn add_product(sum: u64, l: u64, r: u64) -> std::result::Result<u64, Error> {
    l.checked_mul(r)
        .and_then(|product| sum.checked_add(product))
        .ok_or(Error::SumOverflow)
}

pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Program> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
