use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;
use int_enum::IntEnum;

#[derive(Debug)]
pub enum Error {
    NoRegisterLine(RegisterName),
    NoProgram,
    InvalidRegisterText(String),
    InvalidRegisterValue(String),
    InvalidProgramText(String),
    InvalidCode(String),
    InvalidOpcode(u8),
    InvalidComboOperand(u8),
    NoSelfOutputValue,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoRegisterLine(name) => write!(
                f,
                "Can't find line for register {:?} in debug information.",
                name
            ),
            Error::NoProgram => write!(f, "Can't find line for program in debug information."),
            Error::InvalidRegisterText(s) => write!(f, "Invalid text({}) for register.", s),
            Error::InvalidRegisterValue(s) => write!(f, "Invalid text({}) for register value.", s),
            Error::InvalidProgramText(s) => write!(f, "Invalid text({}) for program.", s),
            Error::InvalidCode(s) => write!(f, "Invalid text({}) for code.", s),
            Error::InvalidOpcode(n) => write!(f, "Invalid operation code({}).", n),
            Error::InvalidComboOperand(n) => write!(f, "Invalid combo operand({}).", n),
            Error::NoSelfOutputValue => write!(
                f,
                "No value of register A makes the program output itself."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
#[repr(u8)]
enum Instruction {
    Adv = 0,
    Bxl = 1,
    Bst = 2,
    Jnz = 3,
    Bxc = 4,
    Out = 5,
    Bdv = 6,
    Cdv = 7,
}

impl Instruction {
    fn exec_in(&self, operand: u8, computer: &mut Computer) -> Result<(), Error> {
        match self {
            Instruction::Adv => {
                computer.registers[RegisterName::A] = computer.divide_a(operand)?;
            }
            Instruction::Bxl => computer.registers[RegisterName::B] ^= u64::from(operand),
            Instruction::Bst => {
                computer.registers[RegisterName::B] = computer.combo_operand(operand)? % 8;
            }
            Instruction::Jnz => {
                if computer.registers[RegisterName::A] != 0 {
                    computer.inst_ptr = usize::from(operand);
                    return Ok(());
                }
            }
            Instruction::Bxc => {
                computer.registers[RegisterName::B] ^= computer.registers[RegisterName::C];
            }
            Instruction::Out => {
                let value = computer.combo_operand(operand)? % 8;
                computer.output.push(value as u8);
            }
            Instruction::Bdv => {
                computer.registers[RegisterName::B] = computer.divide_a(operand)?;
            }
            Instruction::Cdv => {
                computer.registers[RegisterName::C] = computer.divide_a(operand)?;
            }
        }
        computer.inst_ptr += 2;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
#[repr(usize)]
pub enum RegisterName {
    A = 0,
    B = 1,
    C = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers(pub [u64; 3]);

impl std::ops::Index<RegisterName> for Registers {
    type Output = u64;

    fn index(&self, name: RegisterName) -> &Self::Output {
        &self.0[usize::from(name)]
    }
}

impl std::ops::IndexMut<RegisterName> for Registers {
    fn index_mut(&mut self, name: RegisterName) -> &mut Self::Output {
        &mut self.0[usize::from(name)]
    }
}

#[derive(Debug)]
pub struct Computer {
    registers: Registers,
    inst_ptr: usize,
    output: Vec<u8>,
}

impl Computer {
    pub fn new(registers: Registers) -> Self {
        Self {
            registers,
            inst_ptr: 0,
            output: Vec::new(),
        }
    }

    /// Runs until the instruction pointer leaves the program.
    pub fn run(&mut self, program: &[u8]) -> Result<(), Error> {
        while self.inst_ptr < program.len() {
            let code = program[self.inst_ptr];
            let inst = Instruction::try_from(code).map_err(Error::InvalidOpcode)?;
            let Some(operand) = program.get(self.inst_ptr + 1).copied() else {
                break;
            };

            inst.exec_in(operand, self)?;
        }

        Ok(())
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    fn divide_a(&self, operand: u8) -> Result<u64, Error> {
        let shift = u32::try_from(self.combo_operand(operand)?).unwrap_or(u32::MAX);
        Ok(self.registers[RegisterName::A]
            .checked_shr(shift)
            .unwrap_or(0))
    }

    fn combo_operand(&self, operand: u8) -> Result<u64, Error> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.registers[RegisterName::A]),
            5 => Ok(self.registers[RegisterName::B]),
            6 => Ok(self.registers[RegisterName::C]),
            other => Err(Error::InvalidComboOperand(other)),
        }
    }
}

#[derive(Debug)]
pub struct DebugInfo {
    registers: Registers,
    program: Vec<u8>,
}

impl DebugInfo {
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    pub fn run(&self) -> Result<Vec<u8>, Error> {
        output_of(self.registers, &self.program)
    }

    pub fn output_text(&self) -> Result<String, Error> {
        Ok(self
            .run()?
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(","))
    }

    /// Lowest value of register A that makes the program print itself.
    ///
    /// Relies on the program consuming A three bits per output value, so the
    /// value is built up three bits at a time, matching the output from its
    /// last value backwards.
    pub fn self_output_a(&self) -> Result<u64, Error> {
        if self.program.is_empty() {
            return Err(Error::NoSelfOutputValue);
        }

        self.search_a(0, self.program.len() - 1)?
            .ok_or(Error::NoSelfOutputValue)
    }

    fn search_a(&self, high_bits: u64, code_ind: usize) -> Result<Option<u64>, Error> {
        let Some(shifted) = high_bits.checked_mul(8) else {
            return Ok(None);
        };

        for low_bits in 0..8 {
            let a = shifted | low_bits;
            let mut registers = self.registers;
            registers[RegisterName::A] = a;
            if output_of(registers, &self.program)? != self.program[code_ind..] {
                continue;
            }

            if code_ind == 0 {
                return Ok(Some(a));
            }
            if let Some(a) = self.search_a(a, code_ind - 1)? {
                return Ok(Some(a));
            }
        }

        Ok(None)
    }
}

fn output_of(registers: Registers, program: &[u8]) -> Result<Vec<u8>, Error> {
    let mut computer = Computer::new(registers);
    computer.run(program)?;
    Ok(computer.output)
}

impl FromStr for DebugInfo {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut registers = Registers([0; 3]);
        for name in [RegisterName::A, RegisterName::B, RegisterName::C] {
            let line = lines.next().ok_or(Error::NoRegisterLine(name))?;
            registers[name] = read_register(name, line)?;
        }

        let program_line = lines
            .find(|l| !l.trim().is_empty())
            .ok_or(Error::NoProgram)?;

        Ok(Self {
            registers,
            program: read_program(program_line)?,
        })
    }
}

fn read_register(name: RegisterName, text: &str) -> Result<u64, Error> {
    let header = format!("Register {:?}:", name);
    let value_text = text
        .strip_prefix(&header)
        .ok_or_else(|| Error::InvalidRegisterText(text.to_string()))?
        .trim();
    value_text
        .parse::<u64>()
        .map_err(|_| Error::InvalidRegisterValue(value_text.to_string()))
}

fn read_program(text: &str) -> Result<Vec<u8>, Error> {
    static HEADER: &str = "Program:";
    let code_text = text
        .strip_prefix(HEADER)
        .ok_or_else(|| Error::InvalidProgramText(text.to_string()))?
        .trim();
    code_text
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .ok()
                .filter(|code| *code < 8)
                .ok_or_else(|| Error::InvalidCode(s.to_string()))
        })
        .collect()
}

pub fn read_debug_info<P: AsRef<Path>>(path: P) -> Result<DebugInfo> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}
