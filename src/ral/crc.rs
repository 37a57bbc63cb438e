//! CRC calculator
//!
//! Write the seed to `RES`, then feed data through `DIN`. The data width
//! follows the width of the bus access, 8, 16 or 32 bits.

use super::{Instance, RWRegister};
use crate::memory_map::CRC_BASE;

/// CRC registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Polynomial and bit order
    pub TYP: RWRegister<u32>,
    /// Data input
    pub DIN: RWRegister<u32>,
    /// Result, and the seed when written
    pub RES: RWRegister<u32>,
    /// Calculation status
    pub CLC: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x10, {
    TYP: 0x00,
    DIN: 0x04,
    RES: 0x08,
    CLC: 0x0C,
});

fields! {
    /// Polynomial and bit order
    TYP: u32 {
        /// Polynomial
        CRC [0; 2] { Crc32 = 0, Crc16 = 1, Crc16Ccitt = 2, Crc8 = 3 },
        /// Input bit order
        UIS [4; 1] { MsbFirst = 0, LsbFirst = 1 },
        /// Result bit order
        URS [5; 1] { MsbFirst = 0, LsbFirst = 1 },
        /// Invert the result
        CRCINV [6; 1] { Normal = 0, Inverted = 1 },
    }

    /// Data input
    DIN: u32 {
        /// Data
        DIN [0; 32],
    }

    /// Result
    RES: u32 {
        /// Remainder
        RES [0; 32],
    }

    /// Calculation status
    CLC: u32 {
        /// Calculation running
        CLCBSY [0; 1] { Idle = 0, Busy = 1 },
    }
}

/// CRC calculator.
pub const CRC: *const RegisterBlock = CRC_BASE as usize as *const _;
/// CRC calculator.
pub type CRC = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::CRC_BASE;

    bitband_aliases! {
        RegisterBlock;
        CRC_BASE;
        {
            TYP_UIS = TYP[4];
            TYP_URS = TYP[5];
            TYP_CRCINV = TYP[6];
            CLC_CLCBSY = CLC[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn crc32_setup() {
        let mut mem = [0u32; 4];
        let base = mem.as_mut_ptr();
        let crc = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::crc, crc, TYP, CRC: Crc32, UIS: LsbFirst, URS: LsbFirst, CRCINV: Inverted);
        ral::write_reg!(ral::crc, crc, RES, 0xFFFF_FFFF);
        unsafe {
            assert_eq!(base.read(), 0b111_0000);
            assert_eq!(base.add(2).read(), u32::MAX);
        }
        assert!(ral::read_reg!(ral::crc, crc, CLC, CLCBSY == Idle));
    }
}
