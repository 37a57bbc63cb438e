//! Trigger selection
//!
//! Routes internal trigger sources to the trigger inputs of the timers, the
//! ADC and the DMA controllers. Each `CRn` register drives four trigger
//! outputs, one per byte lane. All fourteen registers share the `CR0` field
//! layout.

use super::{Instance, RWRegister};
use crate::memory_map::TRGSEL_BASE;

/// Trigger selection registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Outputs 0 to 3
    pub CR0: RWRegister<u32>,
    /// Outputs 4 to 7
    pub CR1: RWRegister<u32>,
    /// Outputs 8 to 11
    pub CR2: RWRegister<u32>,
    /// Outputs 12 to 15
    pub CR3: RWRegister<u32>,
    /// Outputs 16 to 19
    pub CR4: RWRegister<u32>,
    /// Outputs 20 to 23
    pub CR5: RWRegister<u32>,
    /// Outputs 24 to 27
    pub CR6: RWRegister<u32>,
    /// Outputs 28 to 31
    pub CR7: RWRegister<u32>,
    /// Outputs 32 to 35
    pub CR8: RWRegister<u32>,
    /// Outputs 36 to 39
    pub CR9: RWRegister<u32>,
    /// Outputs 40 to 43
    pub CR10: RWRegister<u32>,
    /// Outputs 44 to 47
    pub CR11: RWRegister<u32>,
    /// Outputs 48 to 51
    pub CR12: RWRegister<u32>,
    /// Outputs 52 to 55
    pub CR13: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x38, {
    CR0: 0x00,
    CR1: 0x04,
    CR2: 0x08,
    CR3: 0x0C,
    CR4: 0x10,
    CR5: 0x14,
    CR6: 0x18,
    CR7: 0x1C,
    CR8: 0x20,
    CR9: 0x24,
    CR10: 0x28,
    CR11: 0x2C,
    CR12: 0x30,
    CR13: 0x34,
});

fields! {
    /// Four trigger outputs
    CR0: u32 {
        /// Lane 0 output
        EN0 [0; 1] { Disabled = 0, Enabled = 1 },
        /// Lane 0 edge
        INSEL0 [1; 1] { Rising = 0, Falling = 1 },
        /// Lane 0 source
        SEL0 [2; 6],
        /// Lane 1 output
        EN1 [8; 1] { Disabled = 0, Enabled = 1 },
        /// Lane 1 edge
        INSEL1 [9; 1] { Rising = 0, Falling = 1 },
        /// Lane 1 source
        SEL1 [10; 6],
        /// Lane 2 output
        EN2 [16; 1] { Disabled = 0, Enabled = 1 },
        /// Lane 2 edge
        INSEL2 [17; 1] { Rising = 0, Falling = 1 },
        /// Lane 2 source
        SEL2 [18; 6],
        /// Lane 3 output
        EN3 [24; 1] { Disabled = 0, Enabled = 1 },
        /// Lane 3 edge
        INSEL3 [25; 1] { Rising = 0, Falling = 1 },
        /// Lane 3 source
        SEL3 [26; 6],
    }
}

pub use self::CR0 as CR1;
pub use self::CR0 as CR2;
pub use self::CR0 as CR3;
pub use self::CR0 as CR4;
pub use self::CR0 as CR5;
pub use self::CR0 as CR6;
pub use self::CR0 as CR7;
pub use self::CR0 as CR8;
pub use self::CR0 as CR9;
pub use self::CR0 as CR10;
pub use self::CR0 as CR11;
pub use self::CR0 as CR12;
pub use self::CR0 as CR13;

/// Number of trigger outputs.
pub const OUTPUTS: usize = 56;

/// Trigger selection.
pub const TRGSEL: *const RegisterBlock = TRGSEL_BASE as usize as *const _;
/// Trigger selection.
pub type TRGSEL = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::{RegisterBlock, OUTPUTS};
    use crate::bitband::{strided, BitBand};
    use crate::memory_map::TRGSEL_BASE;

    const CR0: u32 = TRGSEL_BASE + core::mem::offset_of!(RegisterBlock, CR0) as u32;

    /// Enable bit of each trigger output. Output `n` is lane `n % 4` of
    /// `CR(n / 4)`.
    pub const EN: [BitBand; OUTPUTS] = strided(CR0, 1, 0);
    /// Edge select bit of each trigger output.
    pub const INSEL: [BitBand; OUTPUTS] = strided(CR0, 1, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn route_lane() {
        let mut mem = [0u32; 14];
        let base = mem.as_mut_ptr();
        let trgsel = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::trgsel, trgsel, CR11, SEL2: 0x25, INSEL2: Falling, EN2: Enabled);
        assert_eq!(unsafe { base.add(11).read() }, (0x25 << 18) | (1 << 17) | (1 << 16));
        assert_eq!(ral::read_reg!(ral::trgsel, trgsel, CR11, SEL2), 0x25);
    }

    #[test]
    fn output_aliases() {
        assert_eq!(bitband::EN[0].register(), TRGSEL_BASE);
        assert_eq!(bitband::EN[0].bit(), 0);
        assert_eq!(bitband::EN[46].register(), TRGSEL_BASE + 0x2C);
        assert_eq!(bitband::EN[46].bit(), 16);
        assert_eq!(bitband::INSEL[55].bit(), 25);
    }
}
