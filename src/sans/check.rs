//! Cyclic redundancy checks over document bytes.
//!
//! The check is CRC-16 with the reflected polynomial `0xA001`, processed a
//! nibble at a time and seeded with zero. It covers both the document header
//! (a 14-byte header carries its own check over the first 12 bytes) and the
//! whole document up to the trailing two check bytes.

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800, 0xB401,
    0x5000, 0x9C01, 0x8801, 0x4400,
];

/// Accumulate a slice of bytes into a cyclic redundancy check value.
pub fn compute_crc(init: u16, r: &[u8]) -> u16 {
    r.iter().fold(init, |acc, b| crc_byte(acc, *b))
}

/// Accumulate a single byte, low nibble first.
fn crc_byte(crc: u16, b: u8) -> u16 {
    [b & 0xF, b >> 4].into_iter().fold(crc, |crc, nibble| {
        let tmp = CRC_TABLE[(crc & 0xF) as usize];
        ((crc >> 4) & 0x0FFF) ^ tmp ^ CRC_TABLE[nibble as usize]
    })
}

/// Check bytes found alongside the data they protect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    pub found: u16,
    pub calculated: u16,
}

impl Checksum {
    /// Compute the check over `r` and pair it with the stored value.
    pub fn over(r: &[u8], found: u16) -> Self {
        Self {
            found,
            calculated: compute_crc(0, r),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.found == self.calculated
    }
}
