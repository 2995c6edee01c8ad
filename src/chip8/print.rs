//! The pretty print implementation of the [`chipset`](super::ChipSet), used to dump the
//! machine state, for example after a fault.

use std::fmt::{self, Write};

use once_cell::sync::Lazy;

use super::ChipSet;
use crate::{
    definitions::memory,
    devices::{DisplayCommands, KeyboardCommands, SoundCommands},
    opcode::{self, Opcode},
};

/// The amount of entries printed per line
const HEX_PRINT_STEP: usize = 8;

const INDENT_FILLAMENT: char = '\t';

/// The values that are used when there are at least two rows of zeros.
const FILLER_BASE: &str = "...";

/// The row printed in place of consecutive rows of zeros, as wide as a normal row.
static ZERO_FILLER: Lazy<String> = Lazy::new(|| {
    let zero = format!("{:#06X}", 0u16);
    let width = zero.len() * HEX_PRINT_STEP + (HEX_PRINT_STEP - 1);
    let filler = " ".repeat((width - 2 * zero.len() - FILLER_BASE.len()) / 2);
    format!("{}{}{}{}{}", zero, filler, FILLER_BASE, filler, zero)
});

/// will format all integer types
fn integer_formatter<T>(line: &mut String, data: T) -> fmt::Result
where
    T: fmt::UpperHex + num_traits::Unsigned + Copy,
{
    write!(line, "{:#06X}", data)
}

/// will format the pointers according to definition
fn pointer_formatter(line: &mut String, from: usize, to: usize) -> fmt::Result {
    write!(line, "{:#06X} - {:#06X} :", from, to)
}

/// will pretty print all the integer data given
fn integer_printer<T>(data: &[T], indent: usize) -> Result<String, fmt::Error>
where
    T: fmt::UpperHex + num_traits::Unsigned + Copy,
{
    let mut res = String::new();
    for from in (0..data.len()).step_by(HEX_PRINT_STEP) {
        let to = (from + HEX_PRINT_STEP - 1).min(data.len() - 1);

        res.extend(std::iter::repeat(INDENT_FILLAMENT).take(indent));
        pointer_formatter(&mut res, from, to)?;
        for entry in &data[from..=to] {
            res.push(' ');
            integer_formatter(&mut res, *entry)?;
        }
        res.push('\n');
    }
    Ok(res)
}

/// will pretty print the content of the raw memory as opcodes, consecutive
/// rows of zeros are folded into a single one.
fn memory_printer(memory: &[u8], indent: usize) -> Result<String, fmt::Error> {
    // the internal length of the row, as an opcode is two bytes long
    const POINTER_INCREMENT: usize = HEX_PRINT_STEP * memory::opcodes::SIZE;

    // (from, to, opcodes), no opcodes means only zeros
    let mut rows: Vec<(usize, usize, Option<Vec<Opcode>>)> = Vec::new();
    for from in (0..memory.len()).step_by(POINTER_INCREMENT) {
        let to = (from + POINTER_INCREMENT - 1).min(memory.len() - 1);
        let data: Vec<Opcode> = (from..to)
            .step_by(memory::opcodes::SIZE)
            .filter_map(|index| opcode::build_opcode(memory, index).ok())
            .collect();

        if data.iter().any(|entry| *entry > 0) {
            rows.push((from, to, Some(data)));
            continue;
        }

        match rows.last_mut() {
            Some((_, last_to, None)) => *last_to = to,
            _ => rows.push((from, to, None)),
        }
    }

    let mut res = String::new();
    for (from, to, data) in rows {
        res.extend(std::iter::repeat(INDENT_FILLAMENT).take(indent));
        pointer_formatter(&mut res, from, to)?;
        res.push(' ');
        match data {
            Some(data) => {
                for (i, entry) in data.iter().enumerate() {
                    if i > 0 {
                        res.push(' ');
                    }
                    integer_formatter(&mut res, *entry)?;
                }
            }
            None => res.push_str(&ZERO_FILLER),
        }
        res.push('\n');
    }
    Ok(res)
}

impl<D, K, S> fmt::Display for ChipSet<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chipset '{}' {:?}", self.name, self.state)?;
        writeln!(f, "- program counter: {:#06X}", self.program_counter)?;
        writeln!(f, "- opcode: {:#06X}", self.opcode)?;
        writeln!(f, "- index register: {:#06X}", self.index_register)?;
        writeln!(
            f,
            "- timers: delay {:#04X} sound {:#04X}",
            self.timers.delay.get_value(),
            self.timers.sound.get_value()
        )?;
        writeln!(f, "- registers:")?;
        write!(f, "{}", integer_printer(&self.registers, 1)?)?;
        writeln!(f, "- stack ({}):", self.stack.pointer())?;
        write!(f, "{}", integer_printer(self.stack.as_slice(), 1)?)?;
        writeln!(f, "- memory:")?;
        write!(f, "{}", memory_printer(self.memory.as_slice(), 1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_printer() {
        let data: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 0xFF];
        let res = integer_printer(&data, 0).unwrap();
        assert_eq!(
            res,
            "0x0000 - 0x0007 : 0x0000 0x0001 0x0002 0x0003 0x0004 0x0005 0x0006 0x0007\n\
             0x0008 - 0x0009 : 0x0008 0x00FF\n"
        );
    }

    #[test]
    fn test_memory_printer_folds_zeros() {
        let mut data = vec![0u8; 64];
        data[0] = 0x12;
        data[1] = 0x34;
        let res = memory_printer(&data, 0).unwrap();
        let lines: Vec<&str> = res.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0x0000 - 0x000F : 0x1234 0x0000"));
        assert!(lines[1].starts_with("0x0010 - 0x003F : 0x0000"));
        assert!(lines[1].contains(FILLER_BASE));
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
