//! Flash controller
//!
//! Sits at 0x5DFF_0000, outside the peripheral bit-band region, so there
//! are no bit-band aliases. Program and erase run as command sequences
//! written to the flash array itself; these registers select the areas,
//! report status and hold the protection state.

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::FC_BASE;

/// Flash controller registers.
#[repr(C)]
pub struct RegisterBlock {
    _reserved0: [u32; 4],
    /// Security bit
    pub SECBIT: RWRegister<u32>,
    _reserved1: [u32; 3],
    /// Protect status, blocks 0 to 31
    pub PSR0: RORegister<u32>,
    /// Protect status, blocks 32 to 63
    pub PSR1: RORegister<u32>,
    _reserved2: [u32; 6],
    /// Protect mask, blocks 0 to 31
    pub PMR0: RWRegister<u32>,
    /// Protect mask, blocks 32 to 63
    pub PMR1: RWRegister<u32>,
    _reserved3: [u32; 62],
    /// Area selection
    pub AREASEL: RWRegister<u32>,
    /// Control
    pub CR: RWRegister<u32>,
    /// Status clear
    pub STSCLR: WORegister<u32>,
    /// Write / erase buffer clear
    pub WCLR: WORegister<u32>,
    _reserved4: [u32; 44],
    /// Status 0
    pub SR0: RORegister<u32>,
    /// Status 1, code flash blocks
    pub SR1: RORegister<u32>,
    /// Status 2, data flash blocks
    pub SR2: RORegister<u32>,
    /// Status 3
    pub SR3: RORegister<u32>,
    _reserved5: [u32; 60],
    /// Access cycles
    pub ACCR: RWRegister<u32>,
    _reserved6: [u32; 63],
    /// Area selection key
    pub KER: WORegister<u32>,
}

// Did I calculate my reservations correctly?
assert_layout!(RegisterBlock, size: 0x404, {
    SECBIT: 0x010,
    PSR0: 0x020,
    PSR1: 0x024,
    PMR0: 0x040,
    PMR1: 0x044,
    AREASEL: 0x140,
    CR: 0x144,
    STSCLR: 0x148,
    WCLR: 0x14C,
    SR0: 0x200,
    SR1: 0x204,
    SR2: 0x208,
    SR3: 0x20C,
    ACCR: 0x300,
    KER: 0x400,
});

fields! {
    /// Security bit
    SECBIT: u32 {
        /// Read protection from the debug port
        SECBIT [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Area selection
    AREASEL: u32 {
        /// Code flash area 0
        AREA0 [0; 3] { Disabled = 0, Enabled = 0b111 },
        /// Code flash area 1
        AREA1 [4; 3] { Disabled = 0, Enabled = 0b111 },
        /// Data flash area
        AREA4 [16; 3] { Disabled = 0, Enabled = 0b111 },
    }

    /// Control
    CR: u32 {
        /// Abort the running program or erase
        WEABORT [0; 1] { Abort = 1 },
    }

    /// Status clear
    STSCLR: u32 {
        /// Clear the abort status
        WEABORTCLR [0; 1] { Clear = 1 },
    }

    /// Write / erase buffer clear
    WCLR: u32 {
        /// Clear the buffer
        WCLR [0; 1] { Clear = 1 },
    }

    /// Status 0
    SR0: u32 {
        /// Auto operation status
        RDYBSY [0; 1] { Busy = 0, Ready = 1 },
        /// Code flash area 0 busy
        RDYBSY0 [8; 1] { Busy = 0, Ready = 1 },
        /// Data flash busy
        RDYBSY4 [12; 1] { Busy = 0, Ready = 1 },
        /// The last operation was aborted
        WEABORT [16; 1],
    }

    /// Access cycles
    ACCR: u32 {
        /// Code flash wait states
        FCLK [0; 4],
        /// Data flash wait states
        DCLK [8; 4],
    }

    /// Area selection key
    KER: u32 {
        /// Write `Unlock` before changing `AREASEL`
        KEY [0; 32] { Lock = 0, Unlock = 0xA74A_9D23 },
    }
}

/// Flash controller.
pub const FC: *const RegisterBlock = FC_BASE as usize as *const _;
/// Flash controller.
pub type FC = Instance<RegisterBlock, 0>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn area_select_sequence() {
        let mut mem = [0u32; 0x404 / 4];
        let base = mem.as_mut_ptr();
        let fc = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::fc, fc, KER, KEY: Unlock);
        ral::write_reg!(ral::fc, fc, AREASEL, AREA0: Enabled);
        unsafe {
            assert_eq!(base.add(0x400 / 4).read(), 0xA74A_9D23);
            assert_eq!(base.add(0x140 / 4).read(), 0b111);
            base.add(0x200 / 4).write(1);
        }
        assert!(ral::read_reg!(ral::fc, fc, SR0, RDYBSY == Ready));
    }

    #[test]
    fn outside_bitband_region() {
        assert!(crate::bitband::BitBand::new(FC_BASE + 0x200, 0).is_err());
    }
}
