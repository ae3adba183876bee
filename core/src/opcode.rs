/// # Opcodes
///
/// Opcodes are 16 bits each, stored big-endian. Their behavior is cased on:
/// - `[f___]` the family; one handler per value 0x0..0xF
/// - `[___n]` or `[__nn]` the specific operation within some families
///
/// The remaining nibbles carry operands:
/// - `[_nnn]` a 12-bit address
/// - `[__nn]` a byte that is assigned to and/or compared with Vx
/// - `[_x__]` the register Vx, or the last register of the range V0..=Vx
/// - `[__y_]` the register Vy
/// - `[___n]` a 4-bit count (sprite height)
pub trait Opcode {
    /// The Opcode's component nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's most significant nibble.
    /// `[f___]`
    fn family(&self) -> u8;

    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> u8;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> u8;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__nn]`
    fn nn(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_family() {
        let op: u16 = 0xABCD;
        assert_eq!(op.family(), 0xA);
    }

    #[test]
    fn test_x() {
        let op: u16 = 0xABCD;
        assert_eq!(op.x(), 0xB);
    }

    #[test]
    fn test_y() {
        let op: u16 = 0xABCD;
        assert_eq!(op.y(), 0xC);
    }

    #[test]
    fn test_n() {
        let op: u16 = 0xABCD;
        assert_eq!(op.n(), 0xD);
    }

    #[test]
    fn test_nn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nn(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nnn(), 0x0BCD);
    }
}
