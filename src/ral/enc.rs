//! Encoder input
//!
//! Three units, EN0 through EN2. Each decodes a two or three phase
//! encoder or hall sensor, and counts or times its pulses.

use super::{Instance, RORegister, RWRegister};
use crate::memory_map::{EN0_BASE, EN1_BASE, EN2_BASE};

/// Encoder registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control
    pub TNCR: RWRegister<u32>,
    /// Counter reload
    pub RELOAD: RWRegister<u32>,
    /// Compare
    pub INT: RWRegister<u32>,
    /// Counter
    pub CNT: RWRegister<u32>,
    /// Status
    pub STS: RORegister<u32>,
    /// Input process control
    pub INPCR: RWRegister<u32>,
    /// Sample delay
    pub SMPDLY: RWRegister<u32>,
    /// Input monitor
    pub INPMON: RORegister<u32>,
    /// Sample clock control
    pub CLKCR: RWRegister<u32>,
    /// Interrupt enable
    pub INTCR: RWRegister<u32>,
    /// Phase compare
    pub MCMP: RWRegister<u32>,
    /// Timer rate
    pub RATE: RWRegister<u32>,
    /// Interrupt flags
    pub INTF: RORegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x34, {
    TNCR: 0x00,
    RELOAD: 0x04,
    INT: 0x08,
    CNT: 0x0C,
    STS: 0x10,
    INPCR: 0x14,
    SMPDLY: 0x18,
    INPMON: 0x1C,
    CLKCR: 0x20,
    INTCR: 0x24,
    MCMP: 0x28,
    RATE: 0x2C,
    INTF: 0x30,
});

fields! {
    /// Control
    TNCR: u32 {
        /// Operating mode
        MODE [0; 2] { Encoder = 0, SensorEvent = 1, SensorTimer = 2, Timer = 3 },
        /// Number of input phases
        P3EN [2; 1] { TwoPhase = 0, ThreePhase = 1 },
        /// Interrupt
        INTEN [3; 1] { Disabled = 0, Enabled = 1 },
        /// Operation
        ENRUN [4; 1] { Stop = 0, Run = 1 },
        /// Z phase input
        ZEN [5; 1] { Disabled = 0, Enabled = 1 },
        /// Compare function
        CMPEN [6; 1] { Disabled = 0, Enabled = 1 },
        /// Z phase edge
        ZESEL [7; 1] { Rising = 0, Falling = 1 },
        /// Clear the counter
        ENCLR [8; 1] { Clear = 1 },
        /// Software capture
        SFTCAP [9; 1] { Capture = 1 },
        /// Edge selection
        DECMD [10; 2] { Both = 0, Rising = 1, Falling = 2 },
        /// Count direction in timer mode
        UDMD [12; 2] { Up = 0, Down = 1 },
    }

    /// Counter reload
    RELOAD: u32 {
        /// Reload value
        RELOAD [0; 16],
    }

    /// Compare
    INT: u32 {
        /// Compare value
        INT [0; 32],
    }

    /// Counter
    CNT: u32 {
        /// Count
        CNT [0; 32],
    }

    /// Status
    STS: u32 {
        /// Z phase detected
        ZDET [0; 1],
        /// Rotation direction
        UD [1; 1] { Reverse = 0, Forward = 1 },
        /// Phase error
        ERR [2; 1],
        /// Phase input pattern error
        INERR [3; 1],
    }

    /// Input process control
    INPCR: u32 {
        /// Noise filter
        NF [0; 2] { Disabled = 0, Clocks31 = 1, Clocks63 = 2, Clocks127 = 3 },
        /// Sampling synchronized to the PMD
        SYNCSPLEN [4; 1] { Disabled = 0, Enabled = 1 },
        /// Phase compare mode
        PDSTT [8; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Sample delay
    SMPDLY: u32 {
        /// Delay, in PMD clocks
        SMPDLY [0; 8],
    }

    /// Input monitor
    INPMON: u32 {
        /// A phase, or U
        ENCA [0; 1],
        /// B phase, or V
        ENCB [1; 1],
        /// Z phase, or W
        ENCZ [2; 1],
    }

    /// Sample clock control
    CLKCR: u32 {
        /// Prescaler
        PRSCK [0; 4],
        /// Sample clock
        SPLCKS [4; 1] { Prescaler = 0, Pmd = 1 },
    }

    /// Interrupt enable
    INTCR: u32 {
        /// Timer pulse interrupt
        TPLSIE [0; 1] { Disabled = 0, Enabled = 1 },
        /// Reload interrupt
        RLDIE [1; 1] { Disabled = 0, Enabled = 1 },
        /// Phase compare interrupt
        MCMPIE [2; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Phase compare
    MCMP: u32 {
        /// Compare value
        MCMP [0; 32],
    }

    /// Timer rate
    RATE: u32 {
        /// Timer period
        RATE [0; 16],
    }

    /// Interrupt flags
    INTF: u32 {
        /// Timer pulse
        TPLSF [0; 1],
        /// Reload
        RLDF [1; 1],
        /// Phase compare
        MCMPF [2; 1],
    }
}

/// Encoder unit 0.
pub const EN0: *const RegisterBlock = EN0_BASE as usize as *const _;
/// Encoder unit 0.
pub type EN0 = Instance<RegisterBlock, 0>;
/// Encoder unit 1.
pub const EN1: *const RegisterBlock = EN1_BASE as usize as *const _;
/// Encoder unit 1.
pub type EN1 = Instance<RegisterBlock, 1>;
/// Encoder unit 2.
pub const EN2: *const RegisterBlock = EN2_BASE as usize as *const _;
/// Encoder unit 2.
pub type EN2 = Instance<RegisterBlock, 2>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{EN0_BASE, EN1_BASE, EN2_BASE};

    bitband_aliases! {
        RegisterBlock;
        [EN0 = EN0_BASE, EN1 = EN1_BASE, EN2 = EN2_BASE];
        {
            TNCR_P3EN = TNCR[2];
            TNCR_INTEN = TNCR[3];
            TNCR_ENRUN = TNCR[4];
            TNCR_ZEN = TNCR[5];
            TNCR_CMPEN = TNCR[6];
            TNCR_ZESEL = TNCR[7];
            TNCR_ENCLR = TNCR[8];
            TNCR_SFTCAP = TNCR[9];
            STS_ZDET = STS[0];
            STS_UD = STS[1];
            STS_ERR = STS[2];
            STS_INERR = STS[3];
            INPCR_SYNCSPLEN = INPCR[4];
            INPCR_PDSTT = INPCR[8];
            INPMON_ENCA = INPMON[0];
            INPMON_ENCB = INPMON[1];
            INPMON_ENCZ = INPMON[2];
            CLKCR_SPLCKS = CLKCR[4];
            INTCR_TPLSIE = INTCR[0];
            INTCR_RLDIE = INTCR[1];
            INTCR_MCMPIE = INTCR[2];
            INTF_TPLSF = INTF[0];
            INTF_RLDF = INTF[1];
            INTF_MCMPF = INTF[2];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn quadrature_decoder() {
        let mut mem = [0u32; 0x34 / 4];
        let base = mem.as_mut_ptr();
        let enc = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::enc, enc, RELOAD, RELOAD: 4095);
        ral::write_reg!(ral::enc, enc, TNCR, MODE: Encoder, ZEN: Enabled, ENRUN: Run, INTEN: Enabled);

        unsafe {
            assert_eq!(base.add(1).read(), 4095);
            assert_eq!(base.read(), 0b11_1000);
        }

        unsafe { base.add(4).write(0b10) };
        assert!(ral::read_reg!(ral::enc, enc, STS, UD == Forward));
        assert_eq!(bitband::EN2::STS_UD.register(), EN2_BASE + 0x10);
    }
}
