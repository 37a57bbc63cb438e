//! Programmable motor driver
//!
//! One unit, PMD0. Three-phase PWM generation with dead time, emergency
//! and overvoltage shutdown, and trigger outputs to the ADC.
//!
//! `EMGREL` takes the two-step key sequence before an emergency stop can
//! be released:
//!
//! ```no_run
//! use tmpm4g_pac::ral::{self, pmd};
//!
//! let pmd0 = unsafe { pmd::PMD0::new(pmd::PMD0) };
//! ral::write_reg!(ral::pmd, pmd0, EMGREL, EMGREL: Key1);
//! ral::write_reg!(ral::pmd, pmd0, EMGREL, EMGREL: Key2);
//! ral::write_reg!(ral::pmd, pmd0, PORTMD, PORTMD: AllOutput);
//! ```

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::PMD0_BASE;

/// PMD registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Enable
    pub MDEN: RWRegister<u32>,
    /// Port output mode
    pub PORTMD: RWRegister<u32>,
    /// Control
    pub MDCR: RWRegister<u32>,
    /// Carrier status
    pub CARSTA: RORegister<u32>,
    /// Basic carrier
    pub BCARI: RORegister<u32>,
    /// PWM period
    pub RATE: RWRegister<u32>,
    /// U phase compare
    pub CMPU: RWRegister<u32>,
    /// V phase compare
    pub CMPV: RWRegister<u32>,
    /// W phase compare
    pub CMPW: RWRegister<u32>,
    /// Mode select
    pub MODESEL: RWRegister<u32>,
    /// Output control
    pub MDOUT: RWRegister<u32>,
    /// Output setting
    pub MDPOT: RWRegister<u32>,
    /// Emergency release key
    pub EMGREL: WORegister<u32>,
    /// Emergency control
    pub EMGCR: RWRegister<u32>,
    /// Emergency status
    pub EMGSTA: RORegister<u32>,
    /// Overvoltage control
    pub OVVCR: RWRegister<u32>,
    /// Overvoltage status
    pub OVVSTA: RORegister<u32>,
    /// Dead time
    pub DTR: RWRegister<u32>,
    /// Trigger compare 0
    pub TRGCMP0: RWRegister<u32>,
    /// Trigger compare 1
    pub TRGCMP1: RWRegister<u32>,
    /// Trigger compare 2
    pub TRGCMP2: RWRegister<u32>,
    /// Trigger compare 3
    pub TRGCMP3: RWRegister<u32>,
    /// Trigger control
    pub TRGCR: RWRegister<u32>,
    /// Trigger output mode
    pub TRGMD: RWRegister<u32>,
    /// Trigger output select
    pub TRGSEL: RWRegister<u32>,
    /// Trigger update timing
    pub TRGSYNCR: RWRegister<u32>,
    /// V phase PWM phase shift
    pub VPWMPH: RWRegister<u32>,
    /// Compare buffer control
    pub MBUFCR: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x70, {
    MDEN: 0x00,
    PORTMD: 0x04,
    MDCR: 0x08,
    CARSTA: 0x0C,
    BCARI: 0x10,
    RATE: 0x14,
    CMPU: 0x18,
    CMPV: 0x1C,
    CMPW: 0x20,
    MODESEL: 0x24,
    MDOUT: 0x28,
    MDPOT: 0x2C,
    EMGREL: 0x30,
    EMGCR: 0x34,
    EMGSTA: 0x38,
    OVVCR: 0x3C,
    OVVSTA: 0x40,
    DTR: 0x44,
    TRGCMP0: 0x48,
    TRGCMP1: 0x4C,
    TRGCMP2: 0x50,
    TRGCMP3: 0x54,
    TRGCR: 0x58,
    TRGMD: 0x5C,
    TRGSEL: 0x60,
    TRGSYNCR: 0x64,
    VPWMPH: 0x68,
    MBUFCR: 0x6C,
});

fields! {
    /// Enable
    MDEN: u32 {
        /// Waveform synthesis
        PWMEN [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Port output mode
    PORTMD: u32 {
        /// Output pins
        PORTMD [0; 2] { AllHiZ = 0, UpperHiZ = 1, LowerHiZ = 2, AllOutput = 3 },
    }

    /// Control
    MDCR: u32 {
        /// Carrier waveform
        PWMMD [0; 1] { Sawtooth = 0, Triangle = 1 },
        /// PWM interrupt period, in carrier periods
        INTPRD [1; 2] { Half = 0, One = 1, Two = 2, Four = 3 },
        /// PWM interrupt timing
        PINT [3; 1] { Minimum = 0, Maximum = 1 },
        /// Duty mode
        DTYMD [4; 1] { Common = 0, PerPhase = 1 },
        /// Port output sync
        SYNTMD [5; 1] { Normal = 0, Inverted = 1 },
        /// PWM period extension
        PWMCK [6; 1] { Normal = 0, Extended = 1 },
        /// Duty carrier comparison
        DCMEN [7; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Carrier status
    CARSTA: u32 {
        /// Carrier direction
        PWMST [0; 1] { Up = 0, Down = 1 },
    }

    /// Basic carrier
    BCARI: u32 {
        /// Carrier count
        PWMBC [0; 16],
    }

    /// PWM period
    RATE: u32 {
        /// Period, in PMD clocks
        RATE [0; 16],
    }

    /// U phase compare
    CMPU: u32 {
        /// Duty
        CMP [0; 16],
    }

    /// Mode select
    MODESEL: u32 {
        /// Register update path
        MDSEL [0; 1] { Bus = 0, Vector = 1 },
    }

    /// Output control
    MDOUT: u32 {
        /// U phase output
        UOC [0; 2] { Off = 0, Lower = 1, Upper = 2, Both = 3 },
        /// V phase output
        VOC [2; 2] { Off = 0, Lower = 1, Upper = 2, Both = 3 },
        /// W phase output
        WOC [4; 2] { Off = 0, Lower = 1, Upper = 2, Both = 3 },
        /// U phase PWM
        UPWM [8; 1] { High = 0, Pwm = 1 },
        /// V phase PWM
        VPWM [9; 1] { High = 0, Pwm = 1 },
        /// W phase PWM
        WPWM [10; 1] { High = 0, Pwm = 1 },
    }

    /// Output setting
    MDPOT: u32 {
        /// MDOUT reflection timing
        PSYNCS [0; 2] { Async = 0, Minimum = 1, Maximum = 2, Both = 3 },
        /// Lower phase polarity
        POLL [2; 1] { ActiveLow = 0, ActiveHigh = 1 },
        /// Upper phase polarity
        POLH [3; 1] { ActiveLow = 0, ActiveHigh = 1 },
    }

    /// Emergency release key
    EMGREL: u32 {
        /// Write `Key1` then `Key2`
        EMGREL [0; 8] { Key1 = 0x5A, Key2 = 0xA5 },
    }

    /// Emergency control
    EMGCR: u32 {
        /// Emergency stop
        EMGEN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Release emergency stop
        EMGRS [1; 1] { Release = 1 },
        /// Input source
        EMGISEL [2; 1] { Port = 0, Comparator = 1 },
        /// Output during emergency
        EMGMD [3; 2] { AllHiZ = 0, UpperOn = 1, LowerOn = 2 },
        /// Tool break stops the outputs
        INHEN [5; 1] { Disabled = 0, Enabled = 1 },
        /// Input filter, in 16-clock steps
        EMGCNT [8; 4],
    }

    /// Emergency status
    EMGSTA: u32 {
        /// Emergency stop active
        EMGST [0; 1] { Normal = 0, Stopped = 1 },
        /// Input level
        EMGI [1; 1],
    }

    /// Overvoltage control
    OVVCR: u32 {
        /// Overvoltage detection
        OVVEN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Release overvoltage state
        OVVRS [1; 1] { Release = 1 },
        /// Input source
        OVVISEL [2; 1] { Port = 0, Adc = 1 },
        /// Output during overvoltage
        OVVMD [3; 2] { NoChange = 0, UpperOn = 1, LowerOn = 2, AllOff = 3 },
        /// ADC monitor 0 as source
        ADIN0EN [5; 1] { Disabled = 0, Enabled = 1 },
        /// ADC monitor 1 as source
        ADIN1EN [6; 1] { Disabled = 0, Enabled = 1 },
        /// Input filter, in 16-clock steps
        OVVCNT [8; 4],
    }

    /// Overvoltage status
    OVVSTA: u32 {
        /// Overvoltage state active
        OVVST [0; 1] { Normal = 0, Active = 1 },
        /// Input level
        OVVI [1; 1],
    }

    /// Dead time
    DTR: u32 {
        /// Dead time, in 8-clock steps
        DTR [0; 8],
    }

    /// Trigger compare 0
    TRGCMP0: u32 {
        /// Compare value
        TRGCMP [0; 16],
    }

    /// Trigger control
    TRGCR: u32 {
        /// Trigger 0 mode
        TRG0MD [0; 3],
        /// Trigger 0 buffer
        TRG0BE [3; 1] { Sync = 0, Async = 1 },
        /// Trigger 1 mode
        TRG1MD [4; 3],
        /// Trigger 1 buffer
        TRG1BE [7; 1] { Sync = 0, Async = 1 },
        /// Trigger 2 mode
        TRG2MD [8; 3],
        /// Trigger 2 buffer
        TRG2BE [11; 1] { Sync = 0, Async = 1 },
        /// Trigger 3 mode
        TRG3MD [12; 3],
        /// Trigger 3 buffer
        TRG3BE [15; 1] { Sync = 0, Async = 1 },
    }

    /// Trigger output mode
    TRGMD: u32 {
        /// Trigger output during emergency
        EMGTGE [0; 1] { Disabled = 0, Enabled = 1 },
        /// Trigger output
        TRGOUT [1; 1] { Fixed = 0, Select = 1 },
    }

    /// Trigger output select
    TRGSEL: u32 {
        /// Output trigger
        TRGSEL [0; 3],
    }

    /// Trigger update timing
    TRGSYNCR: u32 {
        /// Update timing of TRGCMP
        TSYNCS [0; 2] { Minimum = 0, Maximum = 1, Both = 2, Async = 3 },
    }

    /// V phase PWM phase shift
    VPWMPH: u32 {
        /// Shift, in PMD clocks
        VPWMPH [0; 16],
    }

    /// Compare buffer control
    MBUFCR: u32 {
        /// Compare buffer update
        CMPBE [0; 1] { Sync = 0, Async = 1 },
    }
}

pub use self::CMPU as CMPV;
pub use self::CMPU as CMPW;
pub use self::TRGCMP0 as TRGCMP1;
pub use self::TRGCMP0 as TRGCMP2;
pub use self::TRGCMP0 as TRGCMP3;

/// Motor driver 0.
pub const PMD0: *const RegisterBlock = PMD0_BASE as usize as *const _;
/// Motor driver 0.
pub type PMD0 = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::PMD0_BASE;

    bitband_aliases! {
        RegisterBlock;
        [PMD0 = PMD0_BASE];
        {
            MDEN_PWMEN = MDEN[0];
            MDCR_PWMMD = MDCR[0];
            MDCR_PINT = MDCR[3];
            MDCR_DTYMD = MDCR[4];
            MDCR_SYNTMD = MDCR[5];
            MDCR_PWMCK = MDCR[6];
            MDCR_DCMEN = MDCR[7];
            CARSTA_PWMST = CARSTA[0];
            MODESEL_MDSEL = MODESEL[0];
            MDOUT_UPWM = MDOUT[8];
            MDOUT_VPWM = MDOUT[9];
            MDOUT_WPWM = MDOUT[10];
            MDPOT_POLL = MDPOT[2];
            MDPOT_POLH = MDPOT[3];
            EMGCR_EMGEN = EMGCR[0];
            EMGCR_EMGRS = EMGCR[1];
            EMGCR_EMGISEL = EMGCR[2];
            EMGCR_INHEN = EMGCR[5];
            EMGSTA_EMGST = EMGSTA[0];
            EMGSTA_EMGI = EMGSTA[1];
            OVVCR_OVVEN = OVVCR[0];
            OVVCR_OVVRS = OVVCR[1];
            OVVCR_OVVISEL = OVVCR[2];
            OVVCR_ADIN0EN = OVVCR[5];
            OVVCR_ADIN1EN = OVVCR[6];
            OVVSTA_OVVST = OVVSTA[0];
            OVVSTA_OVVI = OVVSTA[1];
            TRGCR_TRG0BE = TRGCR[3];
            TRGCR_TRG1BE = TRGCR[7];
            TRGCR_TRG2BE = TRGCR[11];
            TRGCR_TRG3BE = TRGCR[15];
            TRGMD_EMGTGE = TRGMD[0];
            TRGMD_TRGOUT = TRGMD[1];
            MBUFCR_CMPBE = MBUFCR[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn triangle_pwm_with_dead_time() {
        let mut mem = [0u32; 0x70 / 4];
        let base = mem.as_mut_ptr();
        let pmd = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::pmd, pmd, MDCR, PWMMD: Triangle, INTPRD: One, DTYMD: PerPhase);
        ral::write_reg!(ral::pmd, pmd, RATE, RATE: 0x0FA0);
        ral::write_reg!(ral::pmd, pmd, CMPV, CMP: 0x07D0);
        ral::write_reg!(ral::pmd, pmd, DTR, DTR: 10);
        ral::write_reg!(ral::pmd, pmd, MDOUT, UOC: Both, VOC: Both, WOC: Both, UPWM: Pwm, VPWM: Pwm, WPWM: Pwm);
        ral::write_reg!(ral::pmd, pmd, MDEN, PWMEN: Enabled);

        unsafe {
            assert_eq!(base.add(2).read(), 0b1_0011);
            assert_eq!(base.add(5).read(), 0x0FA0);
            assert_eq!(base.add(7).read(), 0x07D0);
            assert_eq!(base.add(0x44 / 4).read(), 10);
            assert_eq!(base.add(0x28 / 4).read(), 0x73F);
            assert_eq!(base.read(), 1);
        }
    }

    #[test]
    fn emergency_release_keys() {
        let mut mem = [0u32; 0x70 / 4];
        let base = mem.as_mut_ptr();
        let pmd = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::pmd, pmd, EMGREL, EMGREL: Key1);
        assert_eq!(unsafe { base.add(0x30 / 4).read() }, 0x5A);
        ral::write_reg!(ral::pmd, pmd, EMGREL, EMGREL: Key2);
        assert_eq!(unsafe { base.add(0x30 / 4).read() }, 0xA5);

        unsafe { base.add(0x38 / 4).write(0b01) };
        assert!(ral::read_reg!(ral::pmd, pmd, EMGSTA, EMGST == Stopped));
    }
}
