//! Clock generator
//!
//! Oscillator selection, PLL, clock gearing, standby modes and the
//! per-peripheral clock supply enables. Most registers are write protected;
//! write [`PROTECT::PROTECT::RW::Unlocked`] before modifying them.

use super::{Instance, RWRegister};
use crate::memory_map::CG_BASE;

/// Clock generator registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Write protection
    pub PROTECT: RWRegister<u32>,
    /// Oscillation control
    pub OSCCR: RWRegister<u32>,
    /// System clock control
    pub SYSCR: RWRegister<u32>,
    /// Standby control
    pub STBYCR: RWRegister<u32>,
    _reserved0: [u32; 4],
    /// PLL selection for fsys
    pub PLL0SEL: RWRegister<u32>,
    _reserved1: [u32; 3],
    /// High-speed oscillator warm-up
    pub WUPHCR: RWRegister<u32>,
    _reserved2: [u32; 5],
    /// Supply enable for fsysm, group A
    pub FSYSMENA: RWRegister<u32>,
    /// Supply enable for fsysm, group B
    pub FSYSMENB: RWRegister<u32>,
    /// Supply enable for fsysh, group A
    pub FSYSENA: RWRegister<u32>,
    _reserved3: [u32; 1],
    /// Special clock enables
    pub SPCLKEN: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x5C, {
    PROTECT: 0x00,
    OSCCR: 0x04,
    SYSCR: 0x08,
    STBYCR: 0x0C,
    PLL0SEL: 0x20,
    WUPHCR: 0x30,
    FSYSMENA: 0x48,
    FSYSMENB: 0x4C,
    FSYSENA: 0x50,
    SPCLKEN: 0x58,
});

fields! {
    /// Write protection
    PROTECT: u32 {
        /// Write 0xC1 to enable writes to the protected registers.
        PROTECT [0; 8] {
            Locked = 0x00,
            Unlocked = 0xC1,
        },
    }

    /// Oscillation control
    OSCCR: u32 {
        /// Internal high-speed oscillator 1 enable
        IHOSC1EN [0; 1] { Disabled = 0, Enabled = 1 },
        /// External high-speed oscillator mode
        EOSCEN [1; 2] {
            NotUsed = 0,
            Crystal = 1,
            ExternalClock = 2,
        },
        /// Internal high-speed oscillator 2 enable
        IHOSC2EN [5; 1] { Disabled = 0, Enabled = 1 },
        /// High-speed oscillator selection for fosc
        OSCSEL [8; 1] { Internal = 0, External = 1 },
        /// fosc source status
        OSCF [9; 1] { Internal = 0, External = 1 },
        /// Internal oscillator 1 is stable
        IHOSC1F [16; 1] { Unstable = 0, Stable = 1 },
        /// Internal oscillator 2 is stable
        IHOSC2F [17; 1] { Unstable = 0, Stable = 1 },
    }

    /// System clock control
    SYSCR: u32 {
        /// fc gear for fsysh
        GEAR [0; 3] {
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
        },
        /// Prescaler clock (fc/2^n) for peripherals
        PRCK [8; 4] {
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
            Div64 = 6,
            Div128 = 7,
            Div256 = 8,
            Div512 = 9,
        },
        /// fsysm to fsysh ratio
        MCKSEL [14; 2] { Div1 = 0, Div2 = 1 },
        /// Current gear status
        GEARST [16; 3],
        /// Current fsysm ratio status
        MCKSELGST [22; 2],
        /// Current prescaler status
        PRCKST [24; 4],
        /// Current prescaler ratio status
        MCKSELPST [30; 2],
    }

    /// Standby control
    STBYCR: u32 {
        /// Standby mode entered on WFI
        STBY [0; 2] { Idle = 0, Stop1 = 1, Stop2 = 2 },
    }

    /// PLL selection for fsys
    PLL0SEL: u32 {
        /// PLL operation
        PLL0ON [0; 1] { Stop = 0, Oscillation = 1 },
        /// fc source
        PLL0SEL [1; 1] { Fosc = 0, Fpll = 1 },
        /// fc source status
        PLL0ST [2; 1] { Fosc = 0, Fpll = 1 },
        /// PLL multiplication setting
        PLL0SET [8; 24],
    }

    /// High-speed oscillator warm-up
    WUPHCR: u32 {
        /// Start warm-up
        WUON [0; 1] { Start = 1 },
        /// Warm-up in progress
        WUEF [1; 1] { Done = 0, Running = 1 },
        /// Warm-up counter clock
        WUCLK [8; 1] { Ihosc = 0, Ehosc = 1 },
        /// Warm-up count
        WUPT [16; 16],
    }

    /// Supply enable for fsysm, group A
    ///
    /// One bit per peripheral. Bits 0 through 19 supply the GPIO ports, in
    /// port order. Bits 20 through 27 supply T32A0 through T32A7. Bits 28
    /// through 31 supply TSPI0 through TSPI3.
    FSYSMENA: u32 {
        /// Ports PA through PY
        PORTS [0; 20],
        /// T32A0 through T32A7
        T32A [20; 8],
        /// TSPI0 through TSPI3
        TSPI [28; 4],
    }

    /// Supply enable for fsysm, group B
    FSYSMENB: u32 {
        /// TSPI4
        TSPI4 [0; 1] { Disabled = 0, Enabled = 1 },
        /// UART0 through UART5
        UART [1; 6],
        /// I2C0 through I2C4
        I2C [7; 5],
        /// ADC unit A
        ADA [12; 1] { Disabled = 0, Enabled = 1 },
        /// DAC channel 0 and 1
        DA [13; 2],
        /// PMD0
        PMD0 [15; 1] { Disabled = 0, Enabled = 1 },
        /// Encoder 0 through 2
        EN [16; 3],
        /// CRC calculator
        CRC [19; 1] { Disabled = 0, Enabled = 1 },
        /// DMA unit A
        DMAA [20; 1] { Disabled = 0, Enabled = 1 },
        /// DMA unit B
        DMAB [21; 1] { Disabled = 0, Enabled = 1 },
        /// Trigger selection
        TRGSEL [22; 1] { Disabled = 0, Enabled = 1 },
        /// Oscillation frequency detector
        OFD [23; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Supply enable for fsysh, group A
    FSYSENA: u32 {
        /// Clock selective watchdog
        SIWD0 [0; 1] { Disabled = 0, Enabled = 1 },
        /// RAM parity
        RAMP [1; 1] { Disabled = 0, Enabled = 1 },
        /// Flash controller
        FC [2; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Special clock enables
    SPCLKEN: u32 {
        /// Trace clock
        TRCKEN [0; 1] { Disabled = 0, Enabled = 1 },
        /// ADC conversion clock, unit A
        ADCKEN0 [16; 1] { Disabled = 0, Enabled = 1 },
    }
}

/// Clock generator.
pub const CG: *const RegisterBlock = CG_BASE as usize as *const _;
/// Clock generator.
pub type CG = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::bitband::{bits, BitBand};
    use crate::memory_map::CG_BASE;

    bitband_aliases! {
        RegisterBlock;
        CG_BASE;
        {
            OSCCR_IHOSC1EN = OSCCR[0];
            OSCCR_IHOSC2EN = OSCCR[5];
            OSCCR_OSCSEL = OSCCR[8];
            OSCCR_OSCF = OSCCR[9];
            OSCCR_IHOSC1F = OSCCR[16];
            OSCCR_IHOSC2F = OSCCR[17];
            PLL0SEL_PLL0ON = PLL0SEL[0];
            PLL0SEL_PLL0SEL = PLL0SEL[1];
            PLL0SEL_PLL0ST = PLL0SEL[2];
            WUPHCR_WUON = WUPHCR[0];
            WUPHCR_WUEF = WUPHCR[1];
            WUPHCR_WUCLK = WUPHCR[8];
            FSYSENA_SIWD0 = FSYSENA[0];
            FSYSENA_RAMP = FSYSENA[1];
            FSYSENA_FC = FSYSENA[2];
            SPCLKEN_TRCKEN = SPCLKEN[0];
            SPCLKEN_ADCKEN0 = SPCLKEN[16];
        }
    }

    /// `FSYSMENA` bits, `IPMENA00` through `IPMENA31`.
    pub const FSYSMENA_IPMENA: [BitBand; 32] =
        bits(CG_BASE + core::mem::offset_of!(RegisterBlock, FSYSMENA) as u32);
    /// `FSYSMENB` bits, `IPMENB00` through `IPMENB23`.
    pub const FSYSMENB_IPMENB: [BitBand; 24] =
        bits(CG_BASE + core::mem::offset_of!(RegisterBlock, FSYSMENB) as u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn clock_setup_through_block() {
        let mut mem = [0u32; 0x5C / 4];
        let base = mem.as_mut_ptr();
        let cg = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::cg, cg, PROTECT, PROTECT: Unlocked);
        ral::write_reg!(ral::cg, cg, OSCCR, IHOSC1EN: Enabled, EOSCEN: Crystal, OSCSEL: External);
        ral::write_reg!(ral::cg, cg, PLL0SEL, PLL0ON: Oscillation, PLL0SET: 0x0000_136A);
        ral::modify_reg!(ral::cg, cg, PLL0SEL, PLL0SEL: Fpll);

        unsafe {
            assert_eq!(base.add(0).read(), 0xC1);
            assert_eq!(base.add(1).read(), 0b1_0000_0011);
            assert_eq!(base.add(8).read(), (0x0000_136A << 8) | 0b11);
        }
        assert!(ral::read_reg!(ral::cg, cg, PLL0SEL, PLL0SEL == Fpll));
    }

    #[test]
    fn peripheral_clock_aliases() {
        let fsysmena = CG_BASE + 0x48;
        assert_eq!(bitband::FSYSMENA_IPMENA[0].register(), fsysmena);
        assert_eq!(bitband::FSYSMENA_IPMENA[31].bit(), 31);
        assert_eq!(bitband::FSYSMENB_IPMENB[1].register(), CG_BASE + 0x4C);
        assert_eq!(bitband::SPCLKEN_ADCKEN0.bit(), 16);
    }

    #[test]
    fn system_clock_aliases_match_fields() {
        assert_eq!(bitband::FSYSENA_SIWD0.register(), CG_BASE + 0x50);
        assert_eq!(bitband::FSYSENA_SIWD0.bit(), FSYSENA::SIWD0::offset);
        assert_eq!(bitband::FSYSENA_RAMP.bit(), FSYSENA::RAMP::offset);
        assert_eq!(bitband::FSYSENA_FC.bit(), FSYSENA::FC::offset);
    }
}
