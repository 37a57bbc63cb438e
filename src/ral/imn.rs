//! Interrupt monitor
//!
//! Read-only flags that mirror the state of interrupt sources which share
//! an NVIC line, or which can't be observed elsewhere.

use super::{Instance, RORegister};
use crate::memory_map::IMN_BASE;

/// Interrupt monitor registers.
#[repr(C)]
pub struct RegisterBlock {
    /// NMI source flags
    pub FLGNMI: RORegister<u32>,
    /// Interrupt monitor flags 1 through 7
    pub FLG: [RORegister<u32>; 7],
}

assert_layout!(RegisterBlock, size: 0x20, {
    FLGNMI: 0x00,
    FLG: 0x04,
});

fields! {
    /// NMI source flags
    FLGNMI: u32 {
        /// Watchdog
        INT000FLG [0; 1],
        /// Oscillation frequency detector
        INT016FLG [16; 1],
    }

    /// Interrupt monitor flags
    FLG: u32 {
        /// One flag per monitored source
        FLAGS [0; 32],
    }
}

/// Interrupt monitor.
pub const IMN: *const RegisterBlock = IMN_BASE as usize as *const _;
/// Interrupt monitor.
pub type IMN = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::IMN_BASE;

    bitband_aliases! {
        RegisterBlock;
        IMN_BASE;
        {
            FLGNMI_INT000FLG = FLGNMI[0];
            FLGNMI_INT016FLG = FLGNMI[16];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn monitor_flags() {
        let mut mem = [0u32; 8];
        let base = mem.as_mut_ptr();
        let imn = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        unsafe {
            base.write(1 << 16);
            base.add(3).write(0x8000_0001);
        }
        assert_eq!(ral::read_reg!(ral::imn, imn, FLGNMI, INT016FLG), 1);
        assert_eq!(ral::read_reg!(ral::imn, imn, FLGNMI, INT000FLG), 0);
        assert_eq!(imn.FLG[2].read(), 0x8000_0001);
        assert_eq!(bitband::FLGNMI_INT016FLG.bit(), 16);
    }
}
