/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Mask that keeps an address inside of memory (and I/PC inside of 12 bits)
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where programs are conventionally loaded and where the PC starts
pub const PROGRAM_START: u16 = 0x200;

/// Where the built-in font sheet lives
pub const FONT_ADDRESS: u16 = 0x000;

/// Bytes per font glyph
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Sprites are always a single byte wide
pub const SPRITE_WIDTH: usize = 8;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// The flag register (VF)
pub const FLAG: usize = 0xF;

pub const DEFAULT_STACK_CAPACITY: usize = 32;

/// Instructions executed per call to `tick`
/// At 60 ticks a second this comes out at 600 instructions a second
pub const DEFAULT_INSTRUCTIONS_PER_TICK: u32 = 10;

/// How often the host is expected to call `tick`
pub const TICKS_PER_SECOND: u32 = 60;

/// # Sprite Sheet
/// Hexadecimal digits 0..F, each 5 bytes tall and 4 pixels wide.
///
/// ```text
/// "0"     Binary   Hex
/// ****    11110000 0xF0
/// *  *    10010000 0x90
/// *  *    10010000 0x90
/// *  *    10010000 0x90
/// ****    11110000 0xF0
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
