use crate::constants::{ADDRESS_MASK, FONT_ADDRESS, MEMORY_SIZE, SPRITE_SHEET};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressable memory.
///
/// - 0x000..0x050 holds the built-in sprite sheet
/// - 0x200.. is where programs are conventionally loaded
///
/// Every address is masked into 0x000..=0xFFF, so reads and writes never
/// leave memory no matter what a program does with I or the PC.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Zeroed memory with the sprite sheet installed
    pub fn new() -> Result<Self> {
        let mut bytes: Vec<u8> = Vec::new();
        bytes
            .try_reserve_exact(MEMORY_SIZE)
            .map_err(|source| Error::Allocation {
                what: "memory",
                source,
            })?;
        bytes.resize(MEMORY_SIZE, 0);

        let font = FONT_ADDRESS as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        Ok(Memory {
            bytes: bytes.into_boxed_slice(),
        })
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Self::index(addr)]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[Self::index(addr)] = value;
    }

    /// Reads the big-endian word at addr; the second byte wraps to 0x000
    pub fn read_word(&self, addr: u16) -> u16 {
        let left = u16::from(self.read(addr));
        let right = u16::from(self.read(addr.wrapping_add(1)));
        left << 8 | right
    }

    /// Copies `data` into memory starting at `offset`.
    /// Fails rather than wrapping if the data would run off the end.
    pub fn load(&mut self, offset: u16, data: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start
            .checked_add(data.len())
            .filter(|end| *end <= MEMORY_SIZE)
            .ok_or(Error::ProgramTooLarge {
                offset,
                len: data.len(),
                capacity: MEMORY_SIZE,
            })?;
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn index(addr: u16) -> usize {
        (addr & ADDRESS_MASK) as usize
    }
}
