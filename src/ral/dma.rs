//! DMA controller
//!
//! Two 32-channel units, DMAA and DMAB. Each channel is described by a
//! [`ChannelControl`] entry in a RAM-resident [`ControlTable`], which
//! the controller finds through `CTRLBASEPTR`. Channel-wise registers come
//! in set / clear pairs: writing a 1 to a `*SET` bit sets the channel's
//! state, writing a 1 to the matching `*CLR` bit clears it, and zeros are
//! ignored.

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::{DMAA_BASE, DMAB_BASE};

/// Number of channels per DMA unit.
pub const CHANNELS: usize = 32;

/// DMA registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Status
    pub STATUS: RORegister<u32>,
    /// Configuration
    pub CFG: WORegister<u32>,
    /// Primary control table base pointer
    pub CTRLBASEPTR: RWRegister<u32>,
    /// Alternate control table base pointer
    pub ALTCTRLBASEPTR: RORegister<u32>,
    _reserved0: [u32; 1],
    /// Software request
    pub CHNLSWREQUEST: WORegister<u32>,
    /// Burst-only set
    pub CHNLUSEBURSTSET: RWRegister<u32>,
    /// Burst-only clear
    pub CHNLUSEBURSTCLR: WORegister<u32>,
    /// Request mask set
    pub CHNLREQMASKSET: RWRegister<u32>,
    /// Request mask clear
    pub CHNLREQMASKCLR: WORegister<u32>,
    /// Channel enable set
    pub CHNLENABLESET: RWRegister<u32>,
    /// Channel enable clear
    pub CHNLENABLECLR: WORegister<u32>,
    /// Primary / alternate select set
    pub CHNLPRIALTSET: RWRegister<u32>,
    /// Primary / alternate select clear
    pub CHNLPRIALTCLR: WORegister<u32>,
    /// Priority set
    pub CHNLPRIORITYSET: RWRegister<u32>,
    /// Priority clear
    pub CHNLPRIORITYCLR: WORegister<u32>,
    _reserved1: [u32; 3],
    /// Bus error clear
    pub ERRCLR: RWRegister<u32>,
}

// Did I calculate my reservations correctly?
assert_layout!(RegisterBlock, size: 0x50, {
    STATUS: 0x000,
    CFG: 0x004,
    CTRLBASEPTR: 0x008,
    ALTCTRLBASEPTR: 0x00C,
    CHNLSWREQUEST: 0x014,
    CHNLUSEBURSTSET: 0x018,
    CHNLUSEBURSTCLR: 0x01C,
    CHNLREQMASKSET: 0x020,
    CHNLREQMASKCLR: 0x024,
    CHNLENABLESET: 0x028,
    CHNLENABLECLR: 0x02C,
    CHNLPRIALTSET: 0x030,
    CHNLPRIALTCLR: 0x034,
    CHNLPRIORITYSET: 0x038,
    CHNLPRIORITYCLR: 0x03C,
    ERRCLR: 0x04C,
});

fields! {
    /// Status
    STATUS: u32 {
        /// Controller enable status
        MASTER_ENABLE [0; 1] { Disabled = 0, Enabled = 1 },
        /// State machine
        STATE [4; 4] {
            Idle = 0,
            ReadingChannelControl = 1,
            ReadingSourceEndPointer = 2,
            ReadingDestinationEndPointer = 3,
            ReadingSourceData = 4,
            WritingDestinationData = 5,
            WaitingForRequestClear = 6,
            WritingChannelControl = 7,
            Stalled = 8,
            Done = 9,
            PeripheralScatterGatherTransition = 10,
        },
        /// Number of channels, minus one
        CHNLS_MINUS1 [16; 5],
    }

    /// Configuration
    CFG: u32 {
        /// Controller enable
        MASTER_ENABLE [0; 1] { Disabled = 0, Enabled = 1 },
        /// Bus protection, HPROT[3:1]
        CHNL_PROT_CTRL [5; 3],
    }

    /// Primary control table base pointer
    CTRLBASEPTR: u32 {
        /// Table address. Lower bits are zero, see [`ControlTable`](super::ControlTable).
        CTRL_BASE_PTR [10; 22],
    }

    /// Alternate control table base pointer
    ALTCTRLBASEPTR: u32 {
        /// Address of the alternate table
        ALT_CTRL_BASE_PTR [0; 32],
    }

    /// Channel bit field shared by the set / clear registers
    CHNL: u32 {
        /// One bit per channel
        CHANNELS [0; 32],
    }

    /// Bus error clear
    ERRCLR: u32 {
        /// Bus error flag. Write 1 to clear.
        ERR_CLR [0; 1] { Clear = 1 },
    }
}

/// Channel mask for the set / clear registers.
pub const fn channel_mask(channel: usize) -> u32 {
    assert!(channel < CHANNELS);
    1 << channel
}

/// A channel control entry.
///
/// Lives in RAM, not in the peripheral. The controller reads and updates it
/// while a transfer runs. `SRC_END_PTR` and `DST_END_PTR` hold the address
/// of the *last* item of each buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct ChannelControl {
    /// Source end pointer
    pub SRC_END_PTR: u32,
    /// Destination end pointer
    pub DST_END_PTR: u32,
    /// Channel configuration, see [`CHANNEL_CFG`]
    pub CHANNEL_CFG: u32,
    _unused: u32,
}

impl ChannelControl {
    /// An idle entry.
    pub const fn new() -> Self {
        Self {
            SRC_END_PTR: 0,
            DST_END_PTR: 0,
            CHANNEL_CFG: 0,
            _unused: 0,
        }
    }
}

const _: () = assert!(core::mem::size_of::<ChannelControl>() == 16);
const _: () = assert!(core::mem::offset_of!(ChannelControl, CHANNEL_CFG) == 8);

fields! {
    /// Channel configuration word of a [`ChannelControl`](super::ChannelControl)
    CHANNEL_CFG: u32 {
        /// Operating mode
        CYCLE_CTRL [0; 3] {
            Stop = 0,
            Basic = 1,
            AutoRequest = 2,
            PingPong = 3,
            MemoryScatterGatherPrimary = 4,
            MemoryScatterGatherAlternate = 5,
            PeripheralScatterGatherPrimary = 6,
            PeripheralScatterGatherAlternate = 7,
        },
        /// Use the alternate entry for the next burst
        NEXT_USEBURST [3; 1],
        /// Number of transfers, minus one
        N_MINUS_1 [4; 10],
        /// Arbitrate after 2^R transfers
        R_POWER [14; 4],
        /// Source bus protection
        SRC_PROT_CTRL [18; 3],
        /// Destination bus protection
        DST_PROT_CTRL [21; 3],
        /// Source data size
        SRC_SIZE [24; 2] { Byte = 0, Halfword = 1, Word = 2 },
        /// Source address increment
        SRC_INC [26; 2] { Byte = 0, Halfword = 1, Word = 2, NoIncrement = 3 },
        /// Destination data size
        DST_SIZE [28; 2] { Byte = 0, Halfword = 1, Word = 2 },
        /// Destination address increment
        DST_INC [30; 2] { Byte = 0, Halfword = 1, Word = 2, NoIncrement = 3 },
    }
}

/// Primary and alternate channel control entries.
///
/// The controller ignores the low ten bits of `CTRLBASEPTR`, so the table
/// is aligned to its own size.
#[derive(Debug)]
#[repr(C, align(1024))]
pub struct ControlTable {
    /// Primary entries
    pub primary: [ChannelControl; CHANNELS],
    /// Alternate entries
    pub alternate: [ChannelControl; CHANNELS],
}

impl ControlTable {
    /// A table of idle entries.
    pub const fn new() -> Self {
        Self {
            primary: [ChannelControl::new(); CHANNELS],
            alternate: [ChannelControl::new(); CHANNELS],
        }
    }
}

impl Default for ControlTable {
    fn default() -> Self {
        Self::new()
    }
}

const _: () = assert!(core::mem::size_of::<ControlTable>() == 1024);
const _: () = assert!(core::mem::offset_of!(ControlTable, alternate) == 0x200);

/// DMA unit A.
pub const DMAA: *const RegisterBlock = DMAA_BASE as usize as *const _;
/// DMA unit A.
pub type DMAA = Instance<RegisterBlock, 0>;
/// DMA unit B.
pub const DMAB: *const RegisterBlock = DMAB_BASE as usize as *const _;
/// DMA unit B.
pub type DMAB = Instance<RegisterBlock, 1>;

/// Bit-band aliases
///
/// `CFG` is write-only and has no aliases. Use `STATUS_MASTER_ENABLE` to
/// observe the controller state.
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{DMAA_BASE, DMAB_BASE};

    bitband_aliases! {
        RegisterBlock;
        [DMAA = DMAA_BASE, DMAB = DMAB_BASE];
        {
            STATUS_MASTER_ENABLE = STATUS[0];
            ERRCLR_ERR_CLR = ERRCLR[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn enable_channel() {
        let mut mem = [0u32; 0x50 / 4];
        let base = mem.as_mut_ptr();
        let dma = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        let table = ControlTable::new();
        let addr = &table as *const ControlTable as usize as u32;
        assert_eq!(addr & 0x3FF, 0);

        ral::write_reg!(ral::dma, dma, CTRLBASEPTR, addr);
        ral::write_reg!(ral::dma, dma, CFG, MASTER_ENABLE: Enabled);
        ral::write_reg!(ral::dma, dma, CHNLENABLESET, channel_mask(5));
        ral::write_reg!(ral::dma, dma, CHNLSWREQUEST, channel_mask(5));

        unsafe {
            assert_eq!(base.add(2).read(), addr);
            assert_eq!(base.add(1).read(), 1);
            assert_eq!(base.add(10).read(), 1 << 5);
            assert_eq!(base.add(5).read(), 1 << 5);
        }
    }

    #[test]
    fn basic_word_transfer_entry() {
        use CHANNEL_CFG::*;
        let mut entry = ChannelControl::new();
        entry.CHANNEL_CFG = (DST_INC::RW::Word << DST_INC::offset)
            | (DST_SIZE::RW::Word << DST_SIZE::offset)
            | (SRC_INC::RW::Word << SRC_INC::offset)
            | (SRC_SIZE::RW::Word << SRC_SIZE::offset)
            | (((16 - 1) << N_MINUS_1::offset) & N_MINUS_1::mask)
            | CYCLE_CTRL::RW::Basic;
        assert_eq!(entry.CHANNEL_CFG, 0xAA00_00F1);

        let mut table = ControlTable::new();
        table.alternate[3] = entry;
        assert_eq!(table.primary[3], ChannelControl::default());
        assert_eq!(table.alternate[3].CHANNEL_CFG & CYCLE_CTRL::mask, CYCLE_CTRL::RW::Basic);
    }

    #[test]
    #[should_panic]
    fn no_channel_32() {
        let _ = channel_mask(CHANNELS);
    }
}
