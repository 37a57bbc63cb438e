//! Errors from fallible conversions

use core::fmt;

/// An error from a runtime conversion.
///
/// Layout problems never show up here. Those are compile errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The number does not name a device interrupt.
    InvalidInterrupt(u16),
    /// The register address is outside of the peripheral bit-band region.
    OutOfBitBandRegion(u32),
    /// The bit index does not fit in a 32-bit register.
    InvalidBit(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInterrupt(nr) => write!(f, "no device interrupt with number {nr}"),
            Error::OutOfBitBandRegion(addr) => {
                write!(f, "address {addr:#010X} is outside of the bit-band region")
            }
            Error::InvalidBit(bit) => write!(f, "bit {bit} is out of range"),
        }
    }
}
