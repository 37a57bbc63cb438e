//! RAM parity

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::RAMP_BASE;

/// RAM parity registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control
    pub CTL: RWRegister<u32>,
    /// Status
    pub ST: RORegister<u32>,
    /// Status clear
    pub CLR: WORegister<u32>,
    /// Error address, RAM0
    pub EAD0: RORegister<u32>,
    /// Error address, RAM1
    pub EAD1: RORegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x14, {
    CTL: 0x00,
    ST: 0x04,
    CLR: 0x08,
    EAD0: 0x0C,
    EAD1: 0x10,
});

fields! {
    /// Control
    CTL: u32 {
        /// Parity check
        RPEC [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Status
    ST: u32 {
        /// Parity error in RAM0
        RPEF0 [0; 1],
        /// Parity error in RAM1
        RPEF1 [1; 1],
    }

    /// Status clear
    CLR: u32 {
        /// Clear RPEF0
        RPEFC0 [0; 1] { Clear = 1 },
        /// Clear RPEF1
        RPEFC1 [1; 1] { Clear = 1 },
    }

    /// Error address, RAM0
    EAD0: u32 {
        /// Address of the last parity error
        EAD [0; 32],
    }

    /// Error address, RAM1
    EAD1: u32 {
        /// Address of the last parity error
        EAD [0; 32],
    }
}

/// RAM parity.
pub const RAMP: *const RegisterBlock = RAMP_BASE as usize as *const _;
/// RAM parity.
pub type RAMP = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::RAMP_BASE;

    bitband_aliases! {
        RegisterBlock;
        RAMP_BASE;
        {
            CTL_RPEC = CTL[0];
            ST_RPEF0 = ST[0];
            ST_RPEF1 = ST[1];
        }
    }
}
