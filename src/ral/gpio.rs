//! General purpose I/O ports
//!
//! Ports PA through PY, eight pins each. Every register holds one bit per
//! pin in its low byte. `FR1` through `FR8` select the pin's alternate
//! function; at most one of them may have a pin's bit set.
//!
//! The TMPM4G6 doesn't bond out ports PR through PY. With the `tmpm4g6`
//! feature, those instances are absent.

use super::{Instance, RWRegister};
use crate::memory_map::*;

/// Pins per port.
pub const PINS: usize = 8;

/// GPIO port registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Data
    pub DATA: RWRegister<u32>,
    /// Output control
    pub CR: RWRegister<u32>,
    /// Function 1
    pub FR1: RWRegister<u32>,
    /// Function 2
    pub FR2: RWRegister<u32>,
    /// Function 3
    pub FR3: RWRegister<u32>,
    /// Function 4
    pub FR4: RWRegister<u32>,
    /// Function 5
    pub FR5: RWRegister<u32>,
    /// Function 6
    pub FR6: RWRegister<u32>,
    /// Function 7
    pub FR7: RWRegister<u32>,
    /// Function 8
    pub FR8: RWRegister<u32>,
    /// Open drain
    pub OD: RWRegister<u32>,
    /// Pull-up
    pub PUP: RWRegister<u32>,
    /// Pull-down
    pub PDN: RWRegister<u32>,
    _reserved0: [u32; 1],
    /// Input enable
    pub IE: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x3C, {
    DATA: 0x00,
    CR: 0x04,
    FR1: 0x08,
    FR2: 0x0C,
    FR3: 0x10,
    FR4: 0x14,
    FR5: 0x18,
    FR6: 0x1C,
    FR7: 0x20,
    FR8: 0x24,
    OD: 0x28,
    PUP: 0x2C,
    PDN: 0x30,
    IE: 0x38,
});

fields! {
    /// One bit per pin. Every port register shares this layout.
    DATA: u32 {
        /// Pin 0
        P0 [0; 1],
        /// Pin 1
        P1 [1; 1],
        /// Pin 2
        P2 [2; 1],
        /// Pin 3
        P3 [3; 1],
        /// Pin 4
        P4 [4; 1],
        /// Pin 5
        P5 [5; 1],
        /// Pin 6
        P6 [6; 1],
        /// Pin 7
        P7 [7; 1],
        /// All pins
        PINS [0; 8],
    }
}

pub use self::DATA as CR;
pub use self::DATA as FR1;
pub use self::DATA as FR2;
pub use self::DATA as FR3;
pub use self::DATA as FR4;
pub use self::DATA as FR5;
pub use self::DATA as FR6;
pub use self::DATA as FR7;
pub use self::DATA as FR8;
pub use self::DATA as IE;
pub use self::DATA as OD;
pub use self::DATA as PDN;
pub use self::DATA as PUP;

/// Mask of pin `pin` in any port register.
pub const fn pin_mask(pin: usize) -> u32 {
    assert!(pin < PINS);
    1 << pin
}

macro_rules! ports {
    ($($(#[$attr:meta])* $port:ident = $base:ident, $n:literal;)*) => {
        $(
            $(#[$attr])*
            pub const $port: *const RegisterBlock = $base as usize as *const _;
            $(#[$attr])*
            pub type $port = Instance<RegisterBlock, $n>;
        )*
    };
}

ports! {
    /// Port A.
    PA = PA_BASE, 0;
    /// Port B.
    PB = PB_BASE, 1;
    /// Port C.
    PC = PC_BASE, 2;
    /// Port D.
    PD = PD_BASE, 3;
    /// Port E.
    PE = PE_BASE, 4;
    /// Port F.
    PF = PF_BASE, 5;
    /// Port G.
    PG = PG_BASE, 6;
    /// Port H.
    PH = PH_BASE, 7;
    /// Port J.
    PJ = PJ_BASE, 8;
    /// Port K.
    PK = PK_BASE, 9;
    /// Port L.
    PL = PL_BASE, 10;
    /// Port M.
    PM = PM_BASE, 11;
    /// Port N.
    PN = PN_BASE, 12;
    /// Port P.
    PP = PP_BASE, 13;
}

cfg_if::cfg_if! {
    if #[cfg(not(feature = "tmpm4g6"))] {
        ports! {
            /// Port R.
            PR = PR_BASE, 14;
            /// Port T.
            PT = PT_BASE, 15;
            /// Port U.
            PU = PU_BASE, 16;
            /// Port V.
            PV = PV_BASE, 17;
            /// Port W.
            PW = PW_BASE, 18;
            /// Port Y.
            PY = PY_BASE, 19;
        }
    }
}

/// Bit-band aliases
///
/// One module per port. Each register is an array of per-pin aliases:
///
/// ```no_run
/// use tmpm4g_pac::ral::gpio::bitband::PA;
///
/// // Drive PA3 high.
/// unsafe { PA::DATA[3].set() };
/// ```
pub mod bitband {
    use super::{RegisterBlock, PINS};
    use crate::bitband::{bits, BitBand};
    #[allow(unused_imports)]
    use crate::memory_map::*;

    macro_rules! port_aliases {
        ($($(#[$attr:meta])* $port:ident = $base:ident;)*) => {
            $(
                $(#[$attr])*
                pub mod $port {
                    use super::*;

                    port_aliases!(@regs $base; DATA CR FR1 FR2 FR3 FR4 FR5 FR6 FR7 FR8 OD PUP PDN IE);
                }
            )*
        };
        (@regs $base:ident; $($reg:ident)*) => {
            $(
                pub const $reg: [BitBand; PINS] =
                    bits($base + core::mem::offset_of!(RegisterBlock, $reg) as u32);
            )*
        };
    }

    port_aliases! {
        /// Port A
        PA = PA_BASE;
        /// Port B
        PB = PB_BASE;
        /// Port C
        PC = PC_BASE;
        /// Port D
        PD = PD_BASE;
        /// Port E
        PE = PE_BASE;
        /// Port F
        PF = PF_BASE;
        /// Port G
        PG = PG_BASE;
        /// Port H
        PH = PH_BASE;
        /// Port J
        PJ = PJ_BASE;
        /// Port K
        PK = PK_BASE;
        /// Port L
        PL = PL_BASE;
        /// Port M
        PM = PM_BASE;
        /// Port N
        PN = PN_BASE;
        /// Port P
        PP = PP_BASE;
    }

    cfg_if::cfg_if! {
        if #[cfg(not(feature = "tmpm4g6"))] {
            port_aliases! {
                /// Port R
                PR = PR_BASE;
                /// Port T
                PT = PT_BASE;
                /// Port U
                PU = PU_BASE;
                /// Port V
                PV = PV_BASE;
                /// Port W
                PW = PW_BASE;
                /// Port Y
                PY = PY_BASE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn output_pin_with_pull_up_input() {
        let mut mem = [0u32; 0x3C / 4];
        let base = mem.as_mut_ptr();
        let port = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::gpio, port, CR, P3: 1);
        ral::write_reg!(ral::gpio, port, PUP, P5: 1);
        ral::write_reg!(ral::gpio, port, IE, P5: 1);
        ral::modify_reg!(ral::gpio, port, DATA, P3: 1);
        ral::modify_reg!(ral::gpio, port, FR2, |r| r | pin_mask(6));

        unsafe {
            assert_eq!(base.add(1).read(), 1 << 3);
            assert_eq!(base.add(0x2C / 4).read(), 1 << 5);
            assert_eq!(base.add(0x38 / 4).read(), 1 << 5);
            assert_eq!(base.read(), 1 << 3);
            assert_eq!(base.add(0x0C / 4).read(), 1 << 6);
        }
        assert_eq!(ral::read_reg!(ral::gpio, port, DATA, PINS), 0b1000);
    }

    #[test]
    fn per_pin_aliases() {
        use bitband::{PA, PP};
        assert_eq!(PA::DATA[0].register(), PA_BASE);
        assert_eq!(PA::IE[7].register(), PA_BASE + 0x38);
        assert_eq!(PA::IE[7].bit(), 7);
        assert_eq!(PP::FR8[2].register(), PP_BASE + 0x24);
    }

    #[cfg(not(feature = "tmpm4g6"))]
    #[test]
    fn large_package_ports() {
        assert_eq!(PY as usize, 0x400E_1300);
        assert_eq!(bitband::PY::DATA[1].register(), PY_BASE);
    }
}
