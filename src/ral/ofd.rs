//! Oscillation frequency detector
//!
//! Compares the high-speed clock against the internal oscillator and resets
//! the device when it leaves the configured window. Registers other than
//! `CR1` are writable only after `CR1` is set to `Enabled`.

use super::{Instance, RORegister, RWRegister};
use crate::memory_map::OFD_BASE;

/// Frequency detector registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Write protection
    pub CR1: RWRegister<u32>,
    /// Detection enable
    pub CR2: RWRegister<u32>,
    /// Lower limit, main PLL off
    pub MNPLLOFF: RWRegister<u32>,
    /// Lower limit, main PLL on
    pub MNPLLON: RWRegister<u32>,
    /// Upper limit, main PLL off
    pub MXPLLOFF: RWRegister<u32>,
    /// Upper limit, main PLL on
    pub MXPLLON: RWRegister<u32>,
    /// Reset control
    pub RST: RWRegister<u32>,
    /// Status
    pub STAT: RORegister<u32>,
    /// Monitored clock
    pub MON: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x24, {
    CR1: 0x00,
    CR2: 0x04,
    MNPLLOFF: 0x08,
    MNPLLON: 0x0C,
    MXPLLOFF: 0x10,
    MXPLLON: 0x14,
    RST: 0x18,
    STAT: 0x1C,
    MON: 0x20,
});

fields! {
    /// Write protection
    CR1: u32 {
        /// Register write enable key
        OFDWEN [0; 8] { Disabled = 0x06, Enabled = 0xF9 },
    }

    /// Detection enable
    CR2: u32 {
        /// Detection key
        OFDEN [0; 8] { Disabled = 0x00, Enabled = 0xE4 },
    }

    /// Lower limit, main PLL off
    MNPLLOFF: u32 {
        /// Count
        OFDMN [0; 9],
    }

    /// Upper limit, main PLL off
    MXPLLOFF: u32 {
        /// Count
        OFDMX [0; 9],
    }

    /// Reset control
    RST: u32 {
        /// Reset on detection
        OFDRSTEN [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Status
    STAT: u32 {
        /// Frequency error detected
        FRQERR [0; 1],
        /// Detection running
        OFDBUSY [1; 1] { Stopped = 0, Running = 1 },
    }

    /// Monitored clock
    MON: u32 {
        /// Clock source
        OFDMON [0; 1] { Internal = 0, External = 1 },
    }
}

pub use self::MNPLLOFF as MNPLLON;
pub use self::MXPLLOFF as MXPLLON;

/// Frequency detector.
pub const OFD: *const RegisterBlock = OFD_BASE as usize as *const _;
/// Frequency detector.
pub type OFD = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::OFD_BASE;

    bitband_aliases! {
        RegisterBlock;
        OFD_BASE;
        {
            RST_OFDRSTEN = RST[0];
            STAT_FRQERR = STAT[0];
            STAT_OFDBUSY = STAT[1];
            MON_OFDMON = MON[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn detection_window() {
        let mut mem = [0u32; 9];
        let base = mem.as_mut_ptr();
        let ofd = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::ofd, ofd, CR1, OFDWEN: Enabled);
        ral::write_reg!(ral::ofd, ofd, MNPLLON, OFDMN: 0x0F0);
        ral::write_reg!(ral::ofd, ofd, MXPLLON, OFDMX: 0x110);
        ral::write_reg!(ral::ofd, ofd, CR2, OFDEN: Enabled);
        ral::write_reg!(ral::ofd, ofd, CR1, OFDWEN: Disabled);

        unsafe {
            assert_eq!(base.read(), 0x06);
            assert_eq!(base.add(1).read(), 0xE4);
            assert_eq!(base.add(3).read(), 0x0F0);
            assert_eq!(base.add(5).read(), 0x110);
        }
    }

    #[test]
    fn limits_are_nine_bits() {
        assert_eq!(MNPLLOFF::OFDMN::mask, 0x1FF);
        assert_eq!(MXPLLOFF::OFDMX::mask, 0x1FF);
        assert_eq!(MXPLLON::OFDMX::mask, 0x1FF);

        let mut mem = [0u32; 9];
        let base = mem.as_mut_ptr();
        let ofd = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        // Counts wider than the field lose their upper bits.
        ral::write_reg!(ral::ofd, ofd, MXPLLOFF, OFDMX: 0x210);
        assert_eq!(ral::read_reg!(ral::ofd, ofd, MXPLLOFF, OFDMX), 0x010);
    }
}
