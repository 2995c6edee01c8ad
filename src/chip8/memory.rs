use crate::{
    definitions::{cpu, display::fontset, memory},
    opcode::{self, Opcode},
    resources::Rom,
    OpcodeError,
};

/// The end of the font area, everything below is read only after initialization.
const FONT_END: usize = fontset::LOCATION + fontset::FONTSET.len();

/// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
/// - `0x000-0x04F` - Used for the built in `4x5` pixel font set (`0-F`)
/// - `0x200-0xFFF` - Program ROM and work RAM
///
/// Any address given to the memory wraps around at `0x1000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Will create the ram with the font loaded and the rom written to the program start.
    pub fn new(rom: &Rom) -> Self {
        // initialize all the memory with 0
        let mut data = vec![0; memory::SIZE];

        // load fonts
        data[fontset::LOCATION..FONT_END].copy_from_slice(&fontset::FONTSET);

        // write the rom data into memory, the rom guarantees to fit
        let program = rom.get_data();
        data[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + program.len())]
            .copy_from_slice(program);

        Self { data }
    }

    #[inline]
    fn wrap(address: usize) -> usize {
        address & memory::ADDRESS_MASK
    }

    pub fn read(&self, address: usize) -> u8 {
        self.data[Self::wrap(address)]
    }

    /// Writes the byte, writes into the font area are dropped.
    pub fn write(&mut self, address: usize, value: u8) {
        let address = Self::wrap(address);
        if address < FONT_END {
            log::warn!("dropped write of {:#04X} into the font at {:#06X}", value, address);
            return;
        }
        self.data[address] = value;
    }

    /// Copies `len` bytes starting at `from`, wrapping at the end of memory.
    pub fn read_slice(&self, from: usize, len: usize) -> Vec<u8> {
        (from..from + len).map(|address| self.read(address)).collect()
    }

    /// Will get the instruction word at the pointer, both bytes have to be in memory.
    pub fn opcode(&self, pointer: usize) -> Result<Opcode, OpcodeError> {
        opcode::build_opcode(&self.data, pointer)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
