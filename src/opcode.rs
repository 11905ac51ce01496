/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` the instruction family; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a family (e.g. the ALU operation of `8XY_`)
/// - `(_, _, n, n)` more specific behavior within a family (e.g. `FX15` vs `FX18`)
/// - `(_, n, n, n)` some fixed function that doesn't require operands (e.g. `00E0`; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry operands.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an immediate byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx
/// - `(_, _, n, _)` the register Vy
pub trait Opcode {
    /// Returns the Opcode's component nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

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
        (
            ((self & 0xF000) >> 12) as u8,
            ((self & 0x0F00) >> 8) as u8,
            ((self & 0x00F0) >> 4) as u8,
            self.n(),
        )
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
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

/// Combines two bytes fetched from memory into a single big-endian opcode
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xD1E5;
        assert_eq!(op.nibbles(), (0xD, 0x1, 0xE, 0x5));
    }

    #[test]
    fn test_registers() {
        let op: u16 = 0x8AB4;
        assert_eq!(op.x(), 0xA);
        assert_eq!(op.y(), 0xB);
    }

    #[test]
    fn test_n() {
        let op: u16 = 0xD127;
        assert_eq!(op.n(), 0x7);
    }

    #[test]
    fn test_nn() {
        let op: u16 = 0x63FF;
        assert_eq!(op.nn(), 0xFF);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0x2F0E;
        assert_eq!(op.nnn(), 0x0F0E);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        assert_eq!(from_bytes(0x12, 0x34), 0x1234);
        assert_eq!(from_bytes(0x00, 0xEE), 0x00EE);
    }
}
