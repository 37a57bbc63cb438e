//! Low-speed oscillator and power mode control
//!
//! Byte-wide registers in the always-on domain.

use super::{Instance, RWRegister};
use crate::memory_map::RLM_BASE;

/// Low-speed oscillator and power mode control registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Low-speed oscillation control
    pub LOSCCR: RWRegister<u8>,
    /// Shutdown operation control
    pub SHTDNOP: RWRegister<u8>,
    _reserved0: [u8; 2],
    /// Write protection
    pub PROTECT: RWRegister<u8>,
    _reserved1: [u8; 3],
}

assert_layout!(RegisterBlock, size: 0x08, {
    LOSCCR: 0x00,
    SHTDNOP: 0x01,
    PROTECT: 0x04,
});

fields! {
    /// Low-speed oscillation control
    LOSCCR: u8 {
        /// Low-speed crystal oscillator enable
        XTEN [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Shutdown operation control
    SHTDNOP: u8 {
        /// Keep port state during STOP2
        PTKEEP [0; 1] { Released = 0, Kept = 1 },
    }

    /// Write protection
    PROTECT: u8 {
        /// Write 0xC1 to allow writes to LOSCCR and SHTDNOP
        PROTECT [0; 8] { Locked = 0x00, Unlocked = 0xC1 },
    }
}

/// Low-speed oscillator and power mode control.
pub const RLM: *const RegisterBlock = RLM_BASE as usize as *const _;
/// Low-speed oscillator and power mode control.
pub type RLM = Instance<RegisterBlock, 0>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::RLM_BASE;

    bitband_aliases! {
        RegisterBlock;
        RLM_BASE;
        {
            LOSCCR_XTEN = LOSCCR[0];
            SHTDNOP_PTKEEP = SHTDNOP[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn unlock_and_enable_crystal() {
        let mut mem = [0u32; 2];
        let base = mem.as_mut_ptr();
        let rlm = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::rlm, rlm, PROTECT, PROTECT: Unlocked);
        ral::modify_reg!(ral::rlm, rlm, SHTDNOP, PTKEEP: Kept);
        ral::modify_reg!(ral::rlm, rlm, LOSCCR, XTEN: Enabled);

        unsafe {
            assert_eq!(base.add(1).read(), u32::from_ne_bytes([0xC1, 0, 0, 0]));
            assert_eq!(base.read(), u32::from_ne_bytes([1, 1, 0, 0]));
        }
    }

    #[test]
    fn byte_register_alias() {
        // SHTDNOP is the second byte of the first word.
        assert_eq!(bitband::SHTDNOP_PTKEEP.register(), RLM_BASE);
        assert_eq!(bitband::SHTDNOP_PTKEEP.bit(), 8);
        assert_eq!(
            bitband::SHTDNOP_PTKEEP.address(),
            crate::bitband::alias_address(RLM_BASE + 1, 0)
        );
    }
}
