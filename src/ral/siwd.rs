//! Clock selective watchdog timer

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::SIWD0_BASE;

/// Watchdog registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Write protection
    pub PROTECT: RWRegister<u32>,
    /// Enable
    pub EN: RWRegister<u32>,
    /// Control code
    pub CR: WORegister<u32>,
    /// Mode
    pub MOD: RWRegister<u32>,
    /// Counter monitor
    pub MONI: RORegister<u32>,
    /// Clock control
    pub OSCCR: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x18, {
    PROTECT: 0x00,
    EN: 0x04,
    CR: 0x08,
    MOD: 0x0C,
    MONI: 0x10,
    OSCCR: 0x14,
});

fields! {
    /// Write protection
    PROTECT: u32 {
        /// Write 0x6B to allow writes to EN, MOD and OSCCR
        PROT [0; 8] { Locked = 0x00, Unlocked = 0x6B },
    }

    /// Enable
    EN: u32 {
        /// Counter operation
        WDTE [0; 1] { Disabled = 0, Enabled = 1 },
        /// Counter status
        WDTF [1; 1] { Stopped = 0, Running = 1 },
    }

    /// Control code
    CR: u32 {
        /// Clear the counter, or disable the watchdog
        WDCR [0; 8] { Clear = 0x4E, Disable = 0xB1 },
    }

    /// Mode
    MOD: u32 {
        /// Action on overflow
        RESCR [1; 1] { Interrupt = 0, Reset = 1 },
        /// Detection time, 2^(15 + 2n) counter clocks
        WDTP [4; 3],
        /// Keep counting in IDLE mode
        WDTIDLE [8; 1] { Stop = 0, Run = 1 },
    }

    /// Counter monitor
    MONI: u32 {
        /// Counter value
        CNTM [0; 32],
    }

    /// Clock control
    OSCCR: u32 {
        /// Counter clock source
        OSCSEL [0; 1] { Ihosc2 = 0, Fosc = 1 },
    }
}

/// Watchdog, unit 0.
pub const SIWD0: *const RegisterBlock = SIWD0_BASE as usize as *const _;
/// Watchdog, unit 0.
pub type SIWD0 = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::SIWD0_BASE;

    bitband_aliases! {
        RegisterBlock;
        [SIWD0 = SIWD0_BASE];
        {
            EN_WDTE = EN[0];
            EN_WDTF = EN[1];
            MOD_RESCR = MOD[1];
            MOD_WDTIDLE = MOD[8];
            OSCCR_OSCSEL = OSCCR[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn disable_sequence() {
        let mut mem = [0u32; 6];
        let base = mem.as_mut_ptr();
        let wd = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::siwd, wd, PROTECT, PROT: Unlocked);
        ral::write_reg!(ral::siwd, wd, CR, WDCR: Disable);
        ral::modify_reg!(ral::siwd, wd, MOD, RESCR: Reset, WDTP: 3);

        unsafe {
            assert_eq!(base.read(), 0x6B);
            assert_eq!(base.add(2).read(), 0xB1);
            assert_eq!(base.add(3).read(), (3 << 4) | (1 << 1));
        }
    }
}
