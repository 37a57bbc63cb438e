//! 8-bit digital to analog converter
//!
//! Two channels, DA0 and DA1.

use super::{Instance, RWRegister};
use crate::memory_map::{DA0_BASE, DA1_BASE};

/// DAC registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control
    pub CR: RWRegister<u32>,
    /// Output value
    pub REG: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x08, {
    CR: 0x00,
    REG: 0x04,
});

fields! {
    /// Control
    CR: u32 {
        /// Analog output
        OP [0; 1] { HiZ = 0, Enabled = 1 },
        /// Reference voltage supply
        REFON [1; 1] { Off = 0, On = 1 },
    }

    /// Output value
    REG: u32 {
        /// Output code
        DAC [0; 8],
    }
}

/// DAC channel 0.
pub const DA0: *const RegisterBlock = DA0_BASE as usize as *const _;
/// DAC channel 0.
pub type DA0 = Instance<RegisterBlock, 0>;
/// DAC channel 1.
pub const DA1: *const RegisterBlock = DA1_BASE as usize as *const _;
/// DAC channel 1.
pub type DA1 = Instance<RegisterBlock, 1>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{DA0_BASE, DA1_BASE};

    bitband_aliases! {
        RegisterBlock;
        [DA0 = DA0_BASE, DA1 = DA1_BASE];
        {
            CR_OP = CR[0];
            CR_REFON = CR[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn output_code() {
        let mut mem = [0u32; 2];
        let base = mem.as_mut_ptr();
        let dac = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::dac, dac, CR, REFON: On, OP: Enabled);
        ral::write_reg!(ral::dac, dac, REG, DAC: 0x1FF);
        unsafe {
            assert_eq!(base.read(), 0b11);
            // Truncated to the converter width.
            assert_eq!(base.add(1).read(), 0xFF);
        }
        assert_eq!(bitband::DA1::CR_REFON.register(), DA1_BASE);
    }
}
