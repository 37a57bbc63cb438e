//! Real time clock
//!
//! Byte-wide registers, except `ADJDAT`. Time and date fields hold BCD.
//! `PAGER[PAGE]` selects between the clock (page 0) and the alarm (page 1)
//! for `MINR` through `DATER`. On page 1, `MONTHR` selects the 12 or 24 hour
//! clock.

use super::{Instance, RWRegister};
use crate::memory_map::RTC_BASE;

/// RTC registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Seconds
    pub SECR: RWRegister<u8>,
    /// Minutes
    pub MINR: RWRegister<u8>,
    /// Hours
    pub HOURR: RWRegister<u8>,
    _reserved0: [u8; 1],
    /// Day of the week
    pub DAYR: RWRegister<u8>,
    /// Day of the month
    pub DATER: RWRegister<u8>,
    /// Month, or the hour mode on page 1
    pub MONTHR: RWRegister<u8>,
    /// Year, or the leap year counter on page 1
    pub YEARR: RWRegister<u8>,
    /// Page and function control
    pub PAGER: RWRegister<u8>,
    _reserved1: [u8; 3],
    /// Reset
    pub RESTR: RWRegister<u8>,
    _reserved2: [u8; 1],
    /// Write protection
    pub PROTECT: RWRegister<u8>,
    /// Correction control
    pub ADJCTL: RWRegister<u8>,
    /// Correction value
    pub ADJDAT: RWRegister<u16>,
}

assert_layout!(RegisterBlock, size: 0x12, {
    SECR: 0x00,
    MINR: 0x01,
    HOURR: 0x02,
    DAYR: 0x04,
    DATER: 0x05,
    MONTHR: 0x06,
    YEARR: 0x07,
    PAGER: 0x08,
    RESTR: 0x0C,
    PROTECT: 0x0E,
    ADJCTL: 0x0F,
    ADJDAT: 0x10,
});

fields! {
    /// Seconds
    SECR: u8 {
        /// BCD seconds
        SE [0; 7],
    }

    /// Minutes
    MINR: u8 {
        /// BCD minutes
        MI [0; 7],
    }

    /// Hours
    HOURR: u8 {
        /// BCD hours
        HO [0; 6],
    }

    /// Day of the week
    DAYR: u8 {
        /// Day, 0 through 6
        WE [0; 3],
    }

    /// Day of the month
    DATER: u8 {
        /// BCD day
        DA [0; 6],
    }

    /// Month
    MONTHR: u8 {
        /// BCD month on page 0. On page 1, bit 0 selects the hour mode.
        MO [0; 5] { Hour12 = 0, Hour24 = 1 },
    }

    /// Year
    YEARR: u8 {
        /// BCD year on page 0, leap year counter on page 1
        YE [0; 8],
    }

    /// Page and function control
    PAGER: u8 {
        /// Register page
        PAGE [0; 1] { Clock = 0, Alarm = 1 },
        /// Alarm
        ENAALM [2; 1] { Disabled = 0, Enabled = 1 },
        /// Clock
        ENATMR [3; 1] { Disabled = 0, Enabled = 1 },
        /// Seconds adjustment request
        ADJUST [4; 1] { Idle = 0, Request = 1 },
        /// Interrupt
        INTENA [7; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Reset
    RESTR: u8 {
        /// Reset the alarm
        RSTALM [4; 1] { Reset = 1 },
        /// Reset the sub-second divider
        RSTTMR [5; 1] { Reset = 1 },
        /// 2 Hz interrupt
        DIS2HZ [6; 1] { Enabled = 0, Disabled = 1 },
        /// 1 Hz interrupt
        DIS1HZ [7; 1] { Enabled = 0, Disabled = 1 },
    }

    /// Write protection
    PROTECT: u8 {
        /// Write 0xC1 to allow writes to the clock
        PROTECT [0; 8] { Locked = 0x00, Unlocked = 0xC1 },
    }

    /// Correction control
    ADJCTL: u8 {
        /// Correction
        AJEN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Correction period
        AJSEL [1; 3] { Sec1 = 0, Sec10 = 1, Sec20 = 2, Sec30 = 3, Min1 = 4 },
    }

    /// Correction value
    ADJDAT: u16 {
        /// Signed correction, in 32.768 kHz cycles
        ADJDAT [0; 9],
    }
}

/// Real time clock.
pub const RTC: *const RegisterBlock = RTC_BASE as usize as *const _;
/// Real time clock.
pub type RTC = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::RTC_BASE;

    bitband_aliases! {
        RegisterBlock;
        RTC_BASE;
        {
            PAGER_PAGE = PAGER[0];
            PAGER_ENAALM = PAGER[2];
            PAGER_ENATMR = PAGER[3];
            PAGER_ADJUST = PAGER[4];
            PAGER_INTENA = PAGER[7];
            RESTR_RSTALM = RESTR[4];
            RESTR_RSTTMR = RESTR[5];
            RESTR_DIS2HZ = RESTR[6];
            RESTR_DIS1HZ = RESTR[7];
            ADJCTL_AJEN = ADJCTL[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn set_time() {
        // u16 storage, for the alignment of ADJDAT.
        let mut mem = [0u16; 0x12 / 2];
        let base = mem.as_mut_ptr().cast::<u8>();
        let rtc = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::rtc, rtc, PROTECT, PROTECT: Unlocked);
        ral::write_reg!(ral::rtc, rtc, PAGER, PAGE: Clock, ENATMR: Disabled);
        ral::write_reg!(ral::rtc, rtc, HOURR, HO: 0x23);
        ral::write_reg!(ral::rtc, rtc, MINR, MI: 0x59);
        ral::modify_reg!(ral::rtc, rtc, PAGER, ENATMR: Enabled);

        unsafe {
            assert_eq!(base.add(0x0E).read(), 0xC1);
            assert_eq!(base.add(2).read(), 0x23);
            assert_eq!(base.add(1).read(), 0x59);
            assert_eq!(base.add(8).read(), 1 << 3);
        }
    }

    #[test]
    fn byte_register_aliases() {
        // PAGER is byte 0 of the word at 0x08, RESTR byte 0 of 0x0C.
        assert_eq!(bitband::PAGER_ENATMR.register(), RTC_BASE + 0x08);
        assert_eq!(bitband::PAGER_ENATMR.bit(), 3);
        assert_eq!(bitband::ADJCTL_AJEN.register(), RTC_BASE + 0x0C);
        assert_eq!(bitband::ADJCTL_AJEN.bit(), 24);
    }
}
