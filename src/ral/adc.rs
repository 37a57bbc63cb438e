//! 12-bit analog to digital converter
//!
//! One unit, ADA, with 24 conversion slots. Each slot is configured by a
//! `TSET` register, which selects the analog input and the trigger, and
//! reports through the matching `REG` register. `PSET` describes the
//! programs started by the motor control unit, and `PSEL` / `PINTS` route
//! PMD triggers and interrupts to those programs.
//!
//! The slot arrays don't work with the RAL macros. Access them directly:
//!
//! ```no_run
//! use tmpm4g_pac::ral::adc;
//!
//! let ada = unsafe { adc::ADA::new(adc::ADA) };
//! let reg = ada.REG[4].read();
//! if reg & adc::REG::ADRF::mask != 0 {
//!     let sample = (reg & adc::REG::ADR::mask) >> adc::REG::ADR::offset;
//! #   let _ = sample;
//! }
//! ```

use super::{Instance, RORegister, RWRegister};
use crate::memory_map::ADA_BASE;

/// Number of conversion slots.
pub const SLOTS: usize = 24;
/// Number of PMD trigger programs.
pub const PROGRAMS: usize = 8;

/// ADC registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control 0
    pub CR0: RWRegister<u32>,
    /// Control 1
    pub CR1: RWRegister<u32>,
    /// Status
    pub ST: RORegister<u32>,
    /// Conversion clock
    pub CLK: RWRegister<u32>,
    /// Mode 0
    pub MOD0: RWRegister<u32>,
    /// Mode 1
    pub MOD1: RWRegister<u32>,
    /// Mode 2
    pub MOD2: RWRegister<u32>,
    /// Monitor enable
    pub CMPEN: RWRegister<u32>,
    /// Monitor control 0
    pub CMPCR0: RWRegister<u32>,
    /// Monitor control 1
    pub CMPCR1: RWRegister<u32>,
    /// Monitor compare value 0
    pub CMP0: RWRegister<u32>,
    /// Monitor compare value 1
    pub CMP1: RWRegister<u32>,
    _reserved0: [u32; 1],
    /// PMD trigger program select, one per PMD trigger
    pub PSEL: [RWRegister<u32>; 12],
    /// PMD program interrupt select
    pub PINTS: [RWRegister<u32>; 6],
    /// PMD program, four slots each
    pub PSET: [RWRegister<u32>; PROGRAMS],
    _reserved1: [u32; 9],
    /// Conversion slot setting
    pub TSET: [RWRegister<u32>; SLOTS],
    _reserved2: [u32; 8],
    /// Conversion result
    pub REG: [RORegister<u32>; SLOTS],
}

// Did I calculate my reservations correctly?
assert_layout!(RegisterBlock, size: 0x1A0, {
    CR0: 0x00,
    CR1: 0x04,
    ST: 0x08,
    CLK: 0x0C,
    MOD0: 0x10,
    MOD1: 0x14,
    MOD2: 0x18,
    CMPEN: 0x1C,
    CMPCR0: 0x20,
    CMPCR1: 0x24,
    CMP0: 0x28,
    CMP1: 0x2C,
    PSEL: 0x34,
    PINTS: 0x64,
    PSET: 0x7C,
    TSET: 0xC0,
    REG: 0x140,
});

fields! {
    /// Control 0
    CR0: u32 {
        /// Start a single conversion
        SGL [1; 1] { Start = 1 },
        /// Start continuous conversion
        CNT [2; 1] { Start = 1 },
        /// Converter enable
        ADEN [7; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Control 1
    CR1: u32 {
        /// General purpose trigger
        TRGEN [0; 1] { Disabled = 0, Enabled = 1 },
        /// DMA request on general trigger conversion
        TRGDMEN [4; 1] { Disabled = 0, Enabled = 1 },
        /// DMA request on single conversion
        SGLDMEN [5; 1] { Disabled = 0, Enabled = 1 },
        /// DMA request on continuous conversion
        CNTDMEN [6; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Status
    ST: u32 {
        /// PMD triggered conversion running
        PMDF [0; 1],
        /// General trigger conversion running
        TRGF [2; 1],
        /// Single conversion running
        SNGF [3; 1],
        /// Continuous conversion running
        CNTF [4; 1],
        /// Converter busy
        ADBF [7; 1] { Idle = 0, Busy = 1 },
    }

    /// Conversion clock
    CLK: u32 {
        /// Clock divider
        VADCLK [0; 3] { Div1 = 0, Div2 = 1, Div4 = 2, Div8 = 3, Div16 = 4 },
        /// Sample hold time, AINA00 to AINA11
        EXAZ0 [3; 4],
        /// Sample hold time, other inputs
        EXAZ1 [7; 4],
    }

    /// Mode 0
    MOD0: u32 {
        /// Analog power
        DACON [0; 1] { Off = 0, On = 1 },
        /// Reference current cut during conversion
        RCUT [1; 1] { Normal = 0, Cut = 1 },
    }

    /// Monitor enable
    CMPEN: u32 {
        /// Monitor 0
        CMP0EN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Monitor 1
        CMP1EN [1; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Monitor control 0
    CMPCR0: u32 {
        /// Monitored slot
        AINS [0; 5],
        /// Compare condition
        ADBIG [5; 1] { Larger = 0, Smaller = 1 },
        /// Count condition
        CMPCND [6; 1] { Sequential = 0, Cumulative = 1 },
        /// Number of matches before the interrupt, minus one
        CMPCNT [8; 4],
    }

    /// Monitor compare value 0
    CMP0: u32 {
        /// Compare value
        AD [0; 12],
    }

    /// PMD trigger program select
    PSEL: u32 {
        /// Program number
        PMDS [0; 3],
        /// Trigger enable
        PENS [7; 1] { Disabled = 0, Enabled = 1 },
    }

    /// PMD program interrupt select
    PINTS: u32 {
        /// Program whose completion raises the interrupt
        INTSEL [0; 5],
    }

    /// PMD program, four slots
    PSET: u32 {
        /// Slot 0 analog input
        AINSP0 [0; 5],
        /// Slot 0 phase
        UVWIS0 [5; 2] { Fixed = 0, U = 1, V = 2, W = 3 },
        /// Slot 0 enable
        ENSP0 [7; 1] { Disabled = 0, Enabled = 1 },
        /// Slot 1 analog input
        AINSP1 [8; 5],
        /// Slot 1 phase
        UVWIS1 [13; 2] { Fixed = 0, U = 1, V = 2, W = 3 },
        /// Slot 1 enable
        ENSP1 [15; 1] { Disabled = 0, Enabled = 1 },
        /// Slot 2 analog input
        AINSP2 [16; 5],
        /// Slot 2 phase
        UVWIS2 [21; 2] { Fixed = 0, U = 1, V = 2, W = 3 },
        /// Slot 2 enable
        ENSP2 [23; 1] { Disabled = 0, Enabled = 1 },
        /// Slot 3 analog input
        AINSP3 [24; 5],
        /// Slot 3 phase
        UVWIS3 [29; 2] { Fixed = 0, U = 1, V = 2, W = 3 },
        /// Slot 3 enable
        ENSP3 [31; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Conversion slot setting
    TSET: u32 {
        /// Analog input
        AINST [0; 5],
        /// Conversion trigger
        TRGS [5; 2] { Disabled = 0, General = 1, Single = 2, Continuous = 3 },
        /// Interrupt on completion
        ENINT [7; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Conversion result
    REG: u32 {
        /// Result
        ADR [0; 12],
        /// Result is valid. Cleared by reading.
        ADRF [12; 1] { Empty = 0, Valid = 1 },
        /// Result overwritten before it was read
        ADOVRF [13; 1] { Normal = 0, Overrun = 1 },
    }
}

pub use self::CMP0 as CMP1;
pub use self::CMPCR0 as CMPCR1;

/// ADC unit A.
pub const ADA: *const RegisterBlock = ADA_BASE as usize as *const _;
/// ADC unit A.
pub type ADA = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::{RegisterBlock, SLOTS};
    use crate::bitband::{strided, BitBand};
    use crate::memory_map::ADA_BASE;

    bitband_aliases! {
        RegisterBlock;
        ADA_BASE;
        {
            CR0_SGL = CR0[1];
            CR0_CNT = CR0[2];
            CR0_ADEN = CR0[7];
            CR1_TRGEN = CR1[0];
            CR1_TRGDMEN = CR1[4];
            CR1_SGLDMEN = CR1[5];
            CR1_CNTDMEN = CR1[6];
            ST_PMDF = ST[0];
            ST_TRGF = ST[2];
            ST_SNGF = ST[3];
            ST_CNTF = ST[4];
            ST_ADBF = ST[7];
            MOD0_DACON = MOD0[0];
            MOD0_RCUT = MOD0[1];
            CMPEN_CMP0EN = CMPEN[0];
            CMPEN_CMP1EN = CMPEN[1];
            CMPCR0_ADBIG = CMPCR0[5];
            CMPCR0_CMPCND = CMPCR0[6];
            CMPCR1_ADBIG = CMPCR1[5];
            CMPCR1_CMPCND = CMPCR1[6];
        }
    }

    const TSET0: u32 = ADA_BASE + core::mem::offset_of!(RegisterBlock, TSET) as u32;
    const REG0: u32 = ADA_BASE + core::mem::offset_of!(RegisterBlock, REG) as u32;

    /// `ENINT` of each `TSET` slot.
    pub const TSET_ENINT: [BitBand; SLOTS] = strided(TSET0, 4, 7);
    /// `ADRF` of each `REG` slot.
    pub const REG_ADRF: [BitBand; SLOTS] = strided(REG0, 4, 12);
    /// `ADOVRF` of each `REG` slot.
    pub const REG_ADOVRF: [BitBand; SLOTS] = strided(REG0, 4, 13);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn single_conversion_slot() {
        let mut mem = [0u32; 0x1A0 / 4];
        let base = mem.as_mut_ptr();
        let ada = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::adc, ada, CLK, VADCLK: Div2, EXAZ0: 0b1010);
        ral::write_reg!(ral::adc, ada, MOD0, DACON: On);
        ral::write_reg!(ral::adc, ada, CR0, ADEN: Enabled);
        ada.TSET[5].write(
            (TSET::ENINT::RW::Enabled << TSET::ENINT::offset)
                | (TSET::TRGS::RW::Single << TSET::TRGS::offset)
                | 9,
        );
        ral::modify_reg!(ral::adc, ada, CR0, SGL: Start);

        unsafe {
            assert_eq!(base.add(3).read(), (0b1010 << 3) | 1);
            assert_eq!(base.add(0xC0 / 4 + 5).read(), 0b1100_1001);
            assert_eq!(base.read(), (1 << 7) | (1 << 1));
        }
    }

    #[test]
    fn conversion_result() {
        let mut mem = [0u32; 0x1A0 / 4];
        let base = mem.as_mut_ptr();
        let ada = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        unsafe { base.add(0x140 / 4 + 23).write((1 << 12) | 0xABC) };
        let reg = ada.REG[23].read();
        assert_eq!(reg & REG::ADR::mask, 0xABC);
        assert_eq!((reg & REG::ADRF::mask) >> REG::ADRF::offset, REG::ADRF::RW::Valid);
        assert_eq!(ada.REG[0].read(), 0);
    }

    #[test]
    fn slot_aliases() {
        assert_eq!(bitband::TSET_ENINT[0].register(), ADA_BASE + 0xC0);
        assert_eq!(bitband::TSET_ENINT[23].register(), ADA_BASE + 0x11C);
        assert_eq!(bitband::REG_ADRF[1].register(), ADA_BASE + 0x144);
        assert_eq!(bitband::REG_ADOVRF[1].bit(), 13);
    }
}
