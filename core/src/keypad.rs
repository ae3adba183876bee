use crate::constants::KEY_COUNT;

/// # Keypad
/// Tracks which of the 16 hexadecimal keys are currently held.
///
/// Bit k of the mask is set while key k is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: u16,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad { pressed: 0 }
    }

    pub fn press(&mut self, key: u8) {
        self.pressed |= Self::bit(key);
    }

    pub fn release(&mut self, key: u8) {
        self.pressed &= !Self::bit(key);
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed & Self::bit(key) != 0
    }

    pub fn pressed_mask(&self) -> u16 {
        self.pressed
    }

    /// Keys are masked to their low nibble
    fn bit(key: u8) -> u16 {
        0x1 << (key as usize % KEY_COUNT)
    }
}
