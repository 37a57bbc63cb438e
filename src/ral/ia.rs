//! Interrupt control A
//!
//! Reset and NMI flags, and one byte-wide control register per external
//! interrupt pin (`IMC`). `IMC[n]` controls `INTnn`. Each `IMC` selects
//! the active level or edge, and enables the interrupt as a release source
//! for the low power modes.

use super::{Instance, RORegister, RWRegister};
use crate::memory_map::IA_BASE;
use crate::Interrupt;

/// Number of external interrupt pins.
pub const EXTERNAL_INTERRUPTS: usize = 22;

/// Interrupt control A registers.
#[repr(C)]
pub struct RegisterBlock {
    /// NMI flag
    pub NMIFLG: RORegister<u8>,
    /// Reset flag 0
    pub RSTFLG0: RWRegister<u8>,
    /// Reset flag 1
    pub RSTFLG1: RWRegister<u8>,
    _reserved0: [u8; 0x1D],
    /// External interrupt mode control, INT00 through INT21
    pub IMC: [RWRegister<u8>; EXTERNAL_INTERRUPTS],
}

assert_layout!(RegisterBlock, size: 0x36, {
    NMIFLG: 0x00,
    RSTFLG0: 0x01,
    RSTFLG1: 0x02,
    IMC: 0x20,
});

fields! {
    /// NMI flag
    NMIFLG: u8 {
        /// NMI from the watchdog
        NMIFLG0 [0; 1],
        /// NMI from the oscillation frequency detector
        NMIFLG1 [1; 1],
    }

    /// Reset flag 0
    RSTFLG0: u8 {
        /// Power-on reset
        PORF [0; 1],
        /// External reset pin
        PINRSTF [3; 1],
        /// Voltage detection reset
        LVDRSTF [5; 1],
    }

    /// Reset flag 1
    RSTFLG1: u8 {
        /// System reset request from the CPU
        SYSRSTF [0; 1],
        /// CPU lockup reset
        LOCKRSTF [1; 1],
        /// Watchdog reset
        WDTRSTF [2; 1],
        /// Oscillation frequency detector reset
        OFDRSTF [3; 1],
    }

    /// External interrupt mode control
    IMC: u8 {
        /// Release low power mode on this interrupt
        INTEN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Active state
        EMCG [1; 3] {
            LowLevel = 0,
            HighLevel = 1,
            FallingEdge = 2,
            RisingEdge = 3,
            BothEdges = 4,
        },
        /// Detected edge, for `BothEdges`
        EMST [4; 2] { NoEdge = 0, Rising = 1, Falling = 2, Both = 3 },
        /// Noise filter bypass
        INTNCS [7; 1] { Filtered = 0, Bypass = 1 },
    }
}

/// Returns the `IMC` index that controls `irq`, if it's an external
/// interrupt.
pub const fn imc_index(irq: Interrupt) -> Option<usize> {
    let nr = irq as usize;
    if nr < EXTERNAL_INTERRUPTS {
        Some(nr)
    } else {
        None
    }
}

/// Interrupt control A.
pub const IA: *const RegisterBlock = IA_BASE as usize as *const _;
/// Interrupt control A.
pub type IA = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::*;
    use crate::bitband::{strided, BitBand};

    bitband_aliases! {
        RegisterBlock;
        IA_BASE;
        {
            NMIFLG_NMIFLG0 = NMIFLG[0];
            NMIFLG_NMIFLG1 = NMIFLG[1];
            RSTFLG0_PORF = RSTFLG0[0];
            RSTFLG0_PINRSTF = RSTFLG0[3];
            RSTFLG0_LVDRSTF = RSTFLG0[5];
            RSTFLG1_SYSRSTF = RSTFLG1[0];
            RSTFLG1_LOCKRSTF = RSTFLG1[1];
            RSTFLG1_WDTRSTF = RSTFLG1[2];
            RSTFLG1_OFDRSTF = RSTFLG1[3];
        }
    }

    /// `INTEN` bit of each `IMC` register.
    pub const IMC_INTEN: [BitBand; EXTERNAL_INTERRUPTS] =
        strided(IA_BASE + core::mem::offset_of!(RegisterBlock, IMC) as u32, 1, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn external_interrupt_control() {
        let mut mem = [0u8; 0x36];
        let base = mem.as_mut_ptr();
        let ia = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        let idx = imc_index(Interrupt::INT07).unwrap();
        let imc = &ia.IMC[idx];
        imc.write(((IMC::EMCG::RW::RisingEdge << IMC::EMCG::offset) & IMC::EMCG::mask) | IMC::INTEN::RW::Enabled);

        assert_eq!(unsafe { base.add(0x27).read() }, 0b0111);
        assert_eq!(ral::read_reg!(ral::ia, ia, NMIFLG), 0);
    }

    #[test]
    fn only_pins_have_imc() {
        assert_eq!(imc_index(Interrupt::INT00), Some(0));
        assert_eq!(imc_index(Interrupt::INT21), Some(21));
        assert_eq!(imc_index(Interrupt::INTEMG0), None);
    }

    #[test]
    fn byte_register_aliases() {
        // IMC07 is byte 3 of the word at 0x24.
        let alias = bitband::IMC_INTEN[7];
        assert_eq!(alias.register(), IA_BASE + 0x24);
        assert_eq!(alias.bit(), 24);
        assert_eq!(bitband::RSTFLG1_WDTRSTF.register(), IA_BASE);
        assert_eq!(bitband::RSTFLG1_WDTRSTF.bit(), 16 + 2);
    }
}
