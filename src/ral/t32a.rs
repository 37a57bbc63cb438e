//! 32-bit timer event counter
//!
//! Eight units, T32A0 through T32A7. Each unit has two 16-bit timers, A and
//! B, and timer C. Timer C is 32 bits wide when `MOD[MODE32]` is set, in
//! which case A and B are unused.
//!
//! Timers A and B share one field layout. The field modules for B, and the
//! 16-bit registers of C, are re-exports of the A modules.

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::{
    T32A0_BASE, T32A1_BASE, T32A2_BASE, T32A3_BASE, T32A4_BASE, T32A5_BASE, T32A6_BASE,
    T32A7_BASE,
};

/// T32A registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Mode
    pub MOD: RWRegister<u32>,
    _reserved0: [u32; 15],
    /// Timer A run
    pub RUNA: RWRegister<u32>,
    /// Timer A control
    pub CRA: RWRegister<u32>,
    /// Timer A capture control
    pub CAPCRA: RWRegister<u32>,
    /// Timer A output control 0
    pub OUTCRA0: WORegister<u32>,
    /// Timer A output control 1
    pub OUTCRA1: RWRegister<u32>,
    /// Timer A interrupt status
    pub STA: RWRegister<u32>,
    /// Timer A interrupt mask
    pub IMA: RWRegister<u32>,
    /// Timer A counter
    pub TMRA: RORegister<u32>,
    /// Timer A reload
    pub RELDA: RWRegister<u32>,
    /// Timer A compare 0
    pub RGA0: RWRegister<u32>,
    /// Timer A compare 1
    pub RGA1: RWRegister<u32>,
    /// Timer A capture 0
    pub CAPA0: RORegister<u32>,
    /// Timer A capture 1
    pub CAPA1: RORegister<u32>,
    /// Timer A DMA request enable
    pub DMAA: RWRegister<u32>,
    _reserved1: [u32; 2],
    /// Timer B run
    pub RUNB: RWRegister<u32>,
    /// Timer B control
    pub CRB: RWRegister<u32>,
    /// Timer B capture control
    pub CAPCRB: RWRegister<u32>,
    /// Timer B output control 0
    pub OUTCRB0: WORegister<u32>,
    /// Timer B output control 1
    pub OUTCRB1: RWRegister<u32>,
    /// Timer B interrupt status
    pub STB: RWRegister<u32>,
    /// Timer B interrupt mask
    pub IMB: RWRegister<u32>,
    /// Timer B counter
    pub TMRB: RORegister<u32>,
    /// Timer B reload
    pub RELDB: RWRegister<u32>,
    /// Timer B compare 0
    pub RGB0: RWRegister<u32>,
    /// Timer B compare 1
    pub RGB1: RWRegister<u32>,
    /// Timer B capture 0
    pub CAPB0: RORegister<u32>,
    /// Timer B capture 1
    pub CAPB1: RORegister<u32>,
    /// Timer B DMA request enable
    pub DMAB: RWRegister<u32>,
    _reserved2: [u32; 2],
    /// Timer C run
    pub RUNC: RWRegister<u32>,
    /// Timer C control
    pub CRC: RWRegister<u32>,
    /// Timer C capture control
    pub CAPCRC: RWRegister<u32>,
    /// Timer C output control 0
    pub OUTCRC0: WORegister<u32>,
    /// Timer C output control 1
    pub OUTCRC1: RWRegister<u32>,
    /// Timer C interrupt status
    pub STC: RWRegister<u32>,
    /// Timer C interrupt mask
    pub IMC: RWRegister<u32>,
    /// Timer C counter
    pub TMRC: RORegister<u32>,
    /// Timer C reload
    pub RELDC: RWRegister<u32>,
    /// Timer C compare 0
    pub RGC0: RWRegister<u32>,
    /// Timer C compare 1
    pub RGC1: RWRegister<u32>,
    /// Timer C capture 0
    pub CAPC0: RORegister<u32>,
    /// Timer C capture 1
    pub CAPC1: RORegister<u32>,
    /// Timer C DMA request enable
    pub DMAC: RWRegister<u32>,
    /// Timer C pulse count control
    pub PLSCR: RWRegister<u32>,
}

// Did I calculate my reservations correctly?
assert_layout!(RegisterBlock, size: 0xFC, {
    MOD: 0x00,
    RUNA: 0x40,
    CRA: 0x44,
    CAPCRA: 0x48,
    OUTCRA0: 0x4C,
    OUTCRA1: 0x50,
    STA: 0x54,
    IMA: 0x58,
    TMRA: 0x5C,
    RELDA: 0x60,
    RGA0: 0x64,
    RGA1: 0x68,
    CAPA0: 0x6C,
    CAPA1: 0x70,
    DMAA: 0x74,
    RUNB: 0x80,
    CRB: 0x84,
    CAPCRB: 0x88,
    OUTCRB0: 0x8C,
    OUTCRB1: 0x90,
    STB: 0x94,
    IMB: 0x98,
    TMRB: 0x9C,
    RELDB: 0xA0,
    RGB0: 0xA4,
    RGB1: 0xA8,
    CAPB0: 0xAC,
    CAPB1: 0xB0,
    DMAB: 0xB4,
    RUNC: 0xC0,
    CRC: 0xC4,
    CAPCRC: 0xC8,
    OUTCRC0: 0xCC,
    OUTCRC1: 0xD0,
    STC: 0xD4,
    IMC: 0xD8,
    TMRC: 0xDC,
    RELDC: 0xE0,
    RGC0: 0xE4,
    RGC1: 0xE8,
    CAPC0: 0xEC,
    CAPC1: 0xF0,
    DMAC: 0xF4,
    PLSCR: 0xF8,
});

fields! {
    /// Mode
    MOD: u32 {
        /// Timer configuration
        MODE32 [0; 1] { Split16 = 0, Full32 = 1 },
        /// Behavior while the core is halted by a debugger
        HALT [1; 1] { Run = 0, Stop = 1 },
    }

    /// Timer A run
    RUNA: u32 {
        /// Counter enable
        RUN [0; 1] { Stop = 0, Run = 1 },
        /// Software start
        SFTSTA [1; 1] { Start = 1 },
        /// Software stop
        SFTSTP [2; 1] { Stop = 1 },
        /// Counter is running
        RUNFLG [4; 1] { Stopped = 0, Running = 1 },
    }

    /// Timer A control
    CRA: u32 {
        /// Start trigger
        START [0; 3] {
            Software = 0,
            TriggerRising = 1,
            TriggerFalling = 2,
            InternalRising = 3,
            InternalFalling = 4,
            Sync = 5,
        },
        /// Stop trigger
        STOP [4; 3] {
            Software = 0,
            TriggerRising = 1,
            TriggerFalling = 2,
            InternalRising = 3,
            InternalFalling = 4,
            Sync = 5,
        },
        /// Reload condition
        RELD [8; 4] {
            Disabled = 0,
            TriggerRising = 1,
            TriggerFalling = 2,
            InternalRising = 3,
            InternalFalling = 4,
            Sync = 5,
            MatchRG1 = 6,
            Overflow = 7,
        },
        /// Count direction
        UPDN [16; 2] { Up = 0, Down = 1, UpDown = 2, PulseCount = 3 },
        /// Double buffering of RG0 / RG1
        WBF [20; 1] { Disabled = 0, Enabled = 1 },
        /// Count source
        CLK [24; 3] {
            Prescaler = 0,
            UpCounterC = 1,
            InternalRising = 2,
            InternalFalling = 3,
            ExternalRising = 4,
            ExternalFalling = 5,
        },
        /// Prescaler output, division by 2^n
        PRSCL [28; 3] {
            Div1 = 0,
            Div2 = 1,
            Div8 = 2,
            Div32 = 3,
            Div128 = 4,
            Div256 = 5,
            Div512 = 6,
            Div1024 = 7,
        },
    }

    /// Timer A capture control
    CAPCRA: u32 {
        /// Capture 0 trigger
        CAPM0 [24; 4] {
            Disabled = 0,
            InputRising = 1,
            InputFalling = 2,
            InputBoth = 3,
            TriggerRising = 4,
            TriggerFalling = 5,
            TriggerBoth = 6,
            InternalRising = 7,
        },
        /// Capture 1 trigger
        CAPM1 [28; 4] {
            Disabled = 0,
            InputRising = 1,
            InputFalling = 2,
            InputBoth = 3,
            TriggerRising = 4,
            TriggerFalling = 5,
            TriggerBoth = 6,
            InternalRising = 7,
        },
    }

    /// Timer A output control 0
    OUTCRA0: u32 {
        /// Output level, applied on write
        OCR [0; 2] { Hold = 0, Set = 1, Clear = 2, Invert = 3 },
    }

    /// Timer A output control 1
    OUTCRA1: u32 {
        /// Output on RG0 match
        OCRCMP0 [0; 2] { Hold = 0, Set = 1, Clear = 2, Invert = 3 },
        /// Output on RG1 match
        OCRCMP1 [2; 2] { Hold = 0, Set = 1, Clear = 2, Invert = 3 },
        /// Output on capture 0
        OCRCAP0 [4; 2] { Hold = 0, Set = 1, Clear = 2, Invert = 3 },
        /// Output on capture 1
        OCRCAP1 [6; 2] { Hold = 0, Set = 1, Clear = 2, Invert = 3 },
    }

    /// Timer A interrupt status. Write 1 to clear.
    STA: u32 {
        /// RG0 match
        INT0 [0; 1] { Clear = 1 },
        /// RG1 match
        INT1 [1; 1] { Clear = 1 },
        /// Overflow
        INTOF [2; 1] { Clear = 1 },
        /// Underflow
        INTUF [3; 1] { Clear = 1 },
    }

    /// Timer A interrupt mask. A set bit masks the source.
    IMA: u32 {
        /// RG0 match
        IM0 [0; 1] { Unmasked = 0, Masked = 1 },
        /// RG1 match
        IM1 [1; 1] { Unmasked = 0, Masked = 1 },
        /// Overflow
        IMOF [2; 1] { Unmasked = 0, Masked = 1 },
        /// Underflow
        IMUF [3; 1] { Unmasked = 0, Masked = 1 },
    }

    /// Timer A counter
    TMRA: u32 {
        /// Count
        TMR [0; 16],
    }

    /// Timer A reload
    RELDA: u32 {
        /// Reload value
        RELD [0; 16],
    }

    /// Timer A compare 0
    RGA0: u32 {
        /// Compare value
        RG [0; 16],
    }

    /// Timer A capture 0
    CAPA0: u32 {
        /// Captured count
        CAP [0; 16],
    }

    /// Timer A DMA request enable
    DMAA: u32 {
        /// Request on capture 0
        DMAEN0 [0; 1] { Disabled = 0, Enabled = 1 },
        /// Request on capture 1
        DMAEN1 [1; 1] { Disabled = 0, Enabled = 1 },
        /// Request on RG0 match
        DMAEN2 [2; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Timer C counter, 32 bits in `Full32` mode
    TMRC: u32 {
        /// Count
        TMR [0; 32],
    }

    /// Timer C reload
    RELDC: u32 {
        /// Reload value
        RELD [0; 32],
    }

    /// Timer C compare 0
    RGC0: u32 {
        /// Compare value
        RG [0; 32],
    }

    /// Timer C capture 0
    CAPC0: u32 {
        /// Captured count
        CAP [0; 32],
    }

    /// Timer C pulse count control
    PLSCR: u32 {
        /// Encoder input mode
        PMODE [0; 1] { TwoPhase = 0, OnePhase = 1 },
        /// Count direction in one-phase mode
        PDIR [1; 1] { Forward = 0, Reverse = 1 },
        /// Input noise filter
        NF [4; 2] { Disabled = 0, Clocks2 = 1, Clocks4 = 2, Clocks8 = 3 },
        /// Phase detect error flag
        PDN [8; 1],
        /// Count up flag
        PUP [9; 1],
    }
}

pub use self::CAPA0 as CAPA1;
pub use self::RGA0 as RGA1;

pub use self::CAPA0 as CAPB0;
pub use self::CAPA0 as CAPB1;
pub use self::CAPCRA as CAPCRB;
pub use self::CRA as CRB;
pub use self::DMAA as DMAB;
pub use self::IMA as IMB;
pub use self::OUTCRA0 as OUTCRB0;
pub use self::OUTCRA1 as OUTCRB1;
pub use self::RELDA as RELDB;
pub use self::RGA0 as RGB0;
pub use self::RGA0 as RGB1;
pub use self::RUNA as RUNB;
pub use self::STA as STB;
pub use self::TMRA as TMRB;

pub use self::CAPC0 as CAPC1;
pub use self::CAPCRA as CAPCRC;
pub use self::CRA as CRC;
pub use self::DMAA as DMAC;
pub use self::IMA as IMC;
pub use self::OUTCRA0 as OUTCRC0;
pub use self::OUTCRA1 as OUTCRC1;
pub use self::RGC0 as RGC1;
pub use self::RUNA as RUNC;
pub use self::STA as STC;

macro_rules! instances {
    ($($(#[$attr:meta])* $name:ident = $base:expr, $n:literal;)*) => {
        $(
            $(#[$attr])*
            pub const $name: *const RegisterBlock = $base as usize as *const _;
            $(#[$attr])*
            pub type $name = Instance<RegisterBlock, $n>;
        )*
    };
}

instances! {
    /// T32A unit 0.
    T32A0 = T32A0_BASE, 0;
    /// T32A unit 1.
    T32A1 = T32A1_BASE, 1;
    /// T32A unit 2.
    T32A2 = T32A2_BASE, 2;
    /// T32A unit 3.
    T32A3 = T32A3_BASE, 3;
    /// T32A unit 4.
    T32A4 = T32A4_BASE, 4;
    /// T32A unit 5.
    T32A5 = T32A5_BASE, 5;
    /// T32A unit 6.
    T32A6 = T32A6_BASE, 6;
    /// T32A unit 7.
    T32A7 = T32A7_BASE, 7;
}

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{
        T32A0_BASE, T32A1_BASE, T32A2_BASE, T32A3_BASE, T32A4_BASE, T32A5_BASE, T32A6_BASE,
        T32A7_BASE,
    };

    bitband_aliases! {
        RegisterBlock;
        [
            T32A0 = T32A0_BASE,
            T32A1 = T32A1_BASE,
            T32A2 = T32A2_BASE,
            T32A3 = T32A3_BASE,
            T32A4 = T32A4_BASE,
            T32A5 = T32A5_BASE,
            T32A6 = T32A6_BASE,
            T32A7 = T32A7_BASE,
        ];
        {
            MOD_MODE32 = MOD[0];
            MOD_HALT = MOD[1];
            RUNA_RUN = RUNA[0];
            RUNA_SFTSTA = RUNA[1];
            RUNA_SFTSTP = RUNA[2];
            RUNA_RUNFLG = RUNA[4];
            CRA_WBF = CRA[20];
            STA_INT0 = STA[0];
            STA_INT1 = STA[1];
            STA_INTOF = STA[2];
            STA_INTUF = STA[3];
            IMA_IM0 = IMA[0];
            IMA_IM1 = IMA[1];
            IMA_IMOF = IMA[2];
            IMA_IMUF = IMA[3];
            DMAA_DMAEN0 = DMAA[0];
            DMAA_DMAEN1 = DMAA[1];
            DMAA_DMAEN2 = DMAA[2];
            RUNB_RUN = RUNB[0];
            RUNB_SFTSTA = RUNB[1];
            RUNB_SFTSTP = RUNB[2];
            RUNB_RUNFLG = RUNB[4];
            CRB_WBF = CRB[20];
            STB_INT0 = STB[0];
            STB_INT1 = STB[1];
            STB_INTOF = STB[2];
            STB_INTUF = STB[3];
            IMB_IM0 = IMB[0];
            IMB_IM1 = IMB[1];
            IMB_IMOF = IMB[2];
            IMB_IMUF = IMB[3];
            DMAB_DMAEN0 = DMAB[0];
            DMAB_DMAEN1 = DMAB[1];
            DMAB_DMAEN2 = DMAB[2];
            RUNC_RUN = RUNC[0];
            RUNC_SFTSTA = RUNC[1];
            RUNC_SFTSTP = RUNC[2];
            RUNC_RUNFLG = RUNC[4];
            CRC_WBF = CRC[20];
            STC_INT0 = STC[0];
            STC_INT1 = STC[1];
            STC_INTOF = STC[2];
            STC_INTUF = STC[3];
            IMC_IM0 = IMC[0];
            IMC_IM1 = IMC[1];
            IMC_IMOF = IMC[2];
            IMC_IMUF = IMC[3];
            DMAC_DMAEN0 = DMAC[0];
            DMAC_DMAEN1 = DMAC[1];
            DMAC_DMAEN2 = DMAC[2];
            PLSCR_PMODE = PLSCR[0];
            PLSCR_PDIR = PLSCR[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn interval_timer_b() {
        let mut mem = [0u32; 0xFC / 4];
        let base = mem.as_mut_ptr();
        let t32a = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::t32a, t32a, MOD, MODE32: Split16);
        ral::write_reg!(ral::t32a, t32a, CRB, PRSCL: Div8, CLK: Prescaler, RELD: MatchRG1, UPDN: Up);
        ral::write_reg!(ral::t32a, t32a, RGB1, RG: 999);
        ral::write_reg!(ral::t32a, t32a, RUNB, RUN: Run, SFTSTA: Start);

        unsafe {
            assert_eq!(base.read(), 0);
            assert_eq!(base.add(0x84 / 4).read(), (2 << 28) | (6 << 8));
            assert_eq!(base.add(0xA8 / 4).read(), 999);
            assert_eq!(base.add(0x80 / 4).read(), 0b11);
        }
    }

    #[test]
    fn timer_c_is_32_bits() {
        let mut mem = [0u32; 0xFC / 4];
        let base = mem.as_mut_ptr();
        let t32a = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::t32a, t32a, MOD, MODE32: Full32);
        ral::write_reg!(ral::t32a, t32a, RGC1, RG: 0x0012_3456);
        assert_eq!(ral::read_reg!(ral::t32a, t32a, RGC1, RG), 0x0012_3456);
        ral::write_reg!(ral::t32a, t32a, RGA1, RG: 0x0012_3456);
        assert_eq!(ral::read_reg!(ral::t32a, t32a, RGA1, RG), 0x3456);

        unsafe { base.add(0xDC / 4).write(0x8000_0001) };
        assert_eq!(ral::read_reg!(ral::t32a, t32a, TMRC, TMR), 0x8000_0001);
    }

    #[test]
    fn aliases_track_instance_stride() {
        use bitband::{T32A0, T32A1};
        assert_eq!(
            T32A1::RUNA_RUN.address() - T32A0::RUNA_RUN.address(),
            0x400 * 32
        );
        assert_eq!(T32A0::RUNC_RUN.register(), T32A0_BASE + 0xC0);
        assert_eq!(T32A0::IMC_IMUF.bit(), 3);
    }
}
