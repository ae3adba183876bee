use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_WIDTH};

/// The FrameBuffer is indexed as [y][x]; a cell is 1 when lit
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display
/// A 64x32 monochrome surface that sprites are XORed onto.
///
/// A cell's value is the XOR of every sprite bit drawn onto it since the
/// last `clear`.
#[derive(Clone, PartialEq, Eq)]
pub struct Display {
    frame_buffer: FrameBuffer,
}

impl Display {
    pub fn new() -> Self {
        Display {
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// Flips the cell at (x, y), wrapping both coordinates onto the surface.
    /// Returns true if the cell went from lit to unlit.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH];
        *cell ^= 1;
        *cell == 0
    }

    /// XORs one sprite row (most significant bit leftmost) onto the surface.
    /// Returns true if any lit cell was turned off.
    pub fn blit_row(&mut self, x: usize, y: usize, row: u8) -> bool {
        let mut collided = false;
        for bit in 0..SPRITE_WIDTH {
            if row & (0x80 >> bit) != 0 {
                collided |= self.toggle(x + bit, y);
            }
        }
        collided
    }

    /// Whether the cell at (x, y) is lit; anything off the surface is unlit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.frame_buffer
            .get(y)
            .and_then(|row| row.get(x))
            .map_or(false, |cell| *cell != 0)
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn lit_count(&self) -> usize {
        self.frame_buffer
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| **cell != 0)
            .count()
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_display_is_blank() {
        let display = Display::new();
        assert_eq!(display.lit_count(), 0);
    }

    #[test]
    fn test_toggle_reports_collision_only_on_lit_to_unlit() {
        let mut display = Display::new();
        assert!(!display.toggle(3, 4));
        assert!(display.pixel(3, 4));
        assert!(display.toggle(3, 4));
        assert!(!display.pixel(3, 4));
    }

    #[test]
    fn test_toggle_wraps() {
        let mut display = Display::new();
        display.toggle(DISPLAY_WIDTH + 1, DISPLAY_HEIGHT + 2);
        assert!(display.pixel(1, 2));
    }

    #[test]
    fn test_blit_row_only_touches_set_bits() {
        let mut display = Display::new();
        display.blit_row(0, 0, 0b1010_0001);
        assert_eq!(display.frame_buffer()[0][0..8], [1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_blit_row_xors() {
        let mut display = Display::new();
        // 0 1 0 1 -> Set
        display.blit_row(0, 0, 0b0101_0000);
        // 1 1 0 0 -> Draw xor
        let collided = display.blit_row(0, 0, 0b1100_0000);
        assert_eq!(display.frame_buffer()[0][0..4], [1, 0, 0, 1]);
        assert!(collided);
    }

    #[test]
    fn test_blit_row_wraps_horizontally() {
        let mut display = Display::new();
        display.blit_row(60, 0, 0xFF);
        assert_eq!(display.frame_buffer()[0][60..64], [1, 1, 1, 1]);
        assert_eq!(display.frame_buffer()[0][0..4], [1, 1, 1, 1]);
    }

    #[test]
    fn test_clear() {
        let mut display = Display::new();
        display.blit_row(0, 0, 0xFF);
        display.clear();
        assert_eq!(display.lit_count(), 0);
    }

    #[test]
    fn test_pixel_off_surface_is_unlit() {
        let display = Display::new();
        assert!(!display.pixel(DISPLAY_WIDTH, 0));
        assert!(!display.pixel(0, DISPLAY_HEIGHT));
    }
}
