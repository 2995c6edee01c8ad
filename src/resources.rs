//! Loading of rom images.
use std::{io::Read, path::Path};

use crate::{definitions::cpu, RomError};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program, stored as a u8 slice on the heap
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data, the data has to fit
    /// between the program start and the end of memory.
    pub fn new(name: &str, data: impl Into<Box<[u8]>>) -> Result<Self, RomError> {
        let data = data.into();
        if data.len() > cpu::MAX_ROM_SIZE {
            return Err(RomError::TooLarge {
                name: name.to_string(),
                len: data.len(),
                max: cpu::MAX_ROM_SIZE,
            });
        }
        Ok(Rom {
            name: name.to_string(),
            data,
        })
    }

    /// Reads the whole stream as the rom image.
    pub fn from_reader<R: Read>(name: &str, mut reader: R) -> Result<Self, RomError> {
        let mut data = Vec::with_capacity(cpu::MAX_ROM_SIZE);
        // read one byte more then fits so that oversized images are detected
        reader
            .by_ref()
            .take(cpu::MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut data)?;
        Self::new(name, data)
    }

    /// Loads the rom file, the file stem is used as the rom name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = std::fs::File::open(path)?;
        let rom = Self::from_reader(&name, file)?;
        log::info!("loaded rom '{}' ({} bytes)", rom.get_name(), rom.get_data().len());
        Ok(rom)
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}
