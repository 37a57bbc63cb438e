//! Voltage detection

use super::{Instance, RORegister, RWRegister};
use crate::memory_map::LVD_BASE;

/// Voltage detection registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control
    pub CR: RWRegister<u32>,
    /// Status
    pub SR: RORegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x08, {
    CR: 0x00,
    SR: 0x04,
});

fields! {
    /// Control
    CR: u32 {
        /// Detection
        EN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Detection voltage
        LVL [1; 3] {
            V2_80 = 0,
            V2_85 = 1,
            V2_90 = 2,
            V2_95 = 3,
            V3_00 = 4,
            V3_05 = 5,
            V3_10 = 6,
            V3_15 = 7,
        },
        /// Interrupt condition
        INTSEL [4; 1] { Falling = 0, Both = 1 },
        /// Reset on detection
        RSTEN [5; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Status
    SR: u32 {
        /// Supply is below the detection voltage
        ST [0; 1] { Above = 0, Below = 1 },
    }
}

/// Voltage detection.
pub const LVD: *const RegisterBlock = LVD_BASE as usize as *const _;
/// Voltage detection.
pub type LVD = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::LVD_BASE;

    bitband_aliases! {
        RegisterBlock;
        LVD_BASE;
        {
            CR_EN = CR[0];
            CR_INTSEL = CR[4];
            CR_RSTEN = CR[5];
            SR_ST = SR[0];
        }
    }
}
