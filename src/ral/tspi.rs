//! Toshiba serial peripheral interface
//!
//! Five channels, TSPI0 through TSPI4. Control and format registers sit at
//! the start of the block; the data FIFO and status registers are further
//! out, at 0x100 and 0x200.

use super::{Instance, RWRegister};
use crate::memory_map::{TSPI0_BASE, TSPI1_BASE, TSPI2_BASE, TSPI3_BASE, TSPI4_BASE};

/// TSPI registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control 0
    pub CR0: RWRegister<u32>,
    /// Control 1
    pub CR1: RWRegister<u32>,
    /// Control 2
    pub CR2: RWRegister<u32>,
    /// Control 3
    pub CR3: RWRegister<u32>,
    /// Baud rate
    pub BR: RWRegister<u32>,
    /// Format control 0
    pub FMTR0: RWRegister<u32>,
    /// Format control 1
    pub FMTR1: RWRegister<u32>,
    /// Sector mode control 0
    pub SECTCR0: RWRegister<u32>,
    /// Sector mode control 1
    pub SECTCR1: RWRegister<u32>,
    _reserved0: [u32; 55],
    /// Data
    pub DR: RWRegister<u32>,
    _reserved1: [u32; 63],
    /// Status
    pub SR: RWRegister<u32>,
    /// Error flags
    pub ERR: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x208, {
    CR0: 0x000,
    CR1: 0x004,
    CR2: 0x008,
    CR3: 0x00C,
    BR: 0x010,
    FMTR0: 0x014,
    FMTR1: 0x018,
    SECTCR0: 0x01C,
    SECTCR1: 0x020,
    DR: 0x100,
    SR: 0x200,
    ERR: 0x204,
});

fields! {
    /// Control 0
    CR0: u32 {
        /// Channel enable
        TSPIE [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Control 1
    CR1: u32 {
        /// Number of frames to transfer. Zero is unlimited.
        FC [0; 8],
        /// Transmit enable
        TXE [14; 1] { Disabled = 0, Enabled = 1 },
        /// Receive enable
        RXE [15; 1] { Disabled = 0, Enabled = 1 },
        /// Transfer mode
        TRXE [12; 1] { Stop = 0, Start = 1 },
        /// Operating mode
        MSTR [11; 1] { Slave = 0, Master = 1 },
        /// Transfer format
        TSPIMS [10; 1] { Spi = 0, Ssp = 1 },
        /// Sector mode
        INF [9; 1] { Disabled = 0, Enabled = 1 },
        /// Start transfer
        TRGEN [8; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Control 2
    CR2: u32 {
        /// Receive FIFO interrupt fill level
        RXFILL [0; 4],
        /// Transmit FIFO interrupt fill level
        TXFILL [4; 4],
        /// Receive DMA request
        DMARE [8; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit DMA request
        DMATE [9; 1] { Disabled = 0, Enabled = 1 },
        /// Error interrupt
        INTERR [10; 1] { Disabled = 0, Enabled = 1 },
        /// Receive fill level interrupt
        INTRXFE [12; 1] { Disabled = 0, Enabled = 1 },
        /// Receive complete interrupt
        INTRXWE [13; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit fill level interrupt
        INTTXFE [14; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit complete interrupt
        INTTXWE [15; 1] { Disabled = 0, Enabled = 1 },
        /// Idle level of TXD in SPI mode
        TIDLE [22; 2] { HiZ = 0, Last = 1, Low = 2, High = 3 },
        /// Underrun output level in slave mode
        TXDEMP [21; 1] { Low = 0, High = 1 },
        /// SCK idle level
        SCKIDLE [20; 1] { Low = 0, High = 1 },
    }

    /// Control 3
    CR3: u32 {
        /// Receive FIFO clear
        RFFLLCLR [0; 1] { Clear = 1 },
        /// Transmit FIFO clear
        TFEMPCLR [1; 1] { Clear = 1 },
    }

    /// Baud rate
    BR: u32 {
        /// Divider
        BRS [0; 4],
        /// Prescaler input clock
        BRCK [4; 4],
    }

    /// Format control 0
    FMTR0: u32 {
        /// CS3 through CS0 polarity
        CSSCKDL [0; 4],
        /// CS hold time after the last SCK
        SCKCSDL [4; 4],
        /// Idle time between frames
        IDLE [8; 4],
        /// Data length in bits
        FL [24; 6],
        /// Data direction
        DIR [31; 1] { LsbFirst = 0, MsbFirst = 1 },
        /// SCK phase
        CKPHA [14; 1] { FirstEdge = 0, SecondEdge = 1 },
        /// SCK polarity
        CKPOL [15; 1] { IdleLow = 0, IdleHigh = 1 },
        /// CS0 polarity
        CS0POL [16; 1] { ActiveLow = 0, ActiveHigh = 1 },
        /// CS1 polarity
        CS1POL [17; 1] { ActiveLow = 0, ActiveHigh = 1 },
        /// CS2 polarity
        CS2POL [18; 1] { ActiveLow = 0, ActiveHigh = 1 },
        /// CS3 polarity
        CS3POL [19; 1] { ActiveLow = 0, ActiveHigh = 1 },
        /// Chip select
        CS3_0 [20; 4],
    }

    /// Format control 1
    FMTR1: u32 {
        /// Parity enable
        VPE [5; 1] { Disabled = 0, Enabled = 1 },
        /// Parity type
        VP [4; 1] { Even = 0, Odd = 1 },
        /// Frame interval on SCK unit
        EHOLD [0; 4],
    }

    /// Sector mode control 0
    SECTCR0: u32 {
        /// Sector mode
        SECT [0; 1] { Frame = 0, Sector = 1 },
    }

    /// Sector mode control 1
    SECTCR1: u32 {
        /// Sector 0 length
        SECTL0 [0; 6],
        /// Sector 1 length
        SECTL1 [8; 6],
        /// Sector 2 length
        SECTL2 [16; 6],
        /// Sector 3 length
        SECTL3 [24; 6],
    }

    /// Data
    DR: u32 {
        /// Transmit / receive data
        DR [0; 32],
    }

    /// Status
    SR: u32 {
        /// Receive FIFO fill level
        RLVL [0; 4],
        /// Receive FIFO reached RXFILL
        RXFF [4; 1],
        /// Receive complete. Write 1 to clear.
        RXEND [5; 1] { Clear = 1 },
        /// Receive shift operation
        RXRUN [6; 1] { Idle = 0, Busy = 1 },
        /// Transmit FIFO fill level
        TLVL [16; 4],
        /// Transmit FIFO reached TXFILL
        TXFF [20; 1],
        /// Transmit complete. Write 1 to clear.
        TXEND [21; 1] { Clear = 1 },
        /// Transmit shift operation
        TXRUN [22; 1] { Idle = 0, Busy = 1 },
        /// Ready for configuration
        TSPISUE [31; 1] { Ready = 0, Busy = 1 },
    }

    /// Error flags. Write 1 to clear.
    ERR: u32 {
        /// Parity error
        PERR [0; 1] { Clear = 1 },
        /// Overrun error
        OVRERR [1; 1] { Clear = 1 },
        /// Underrun error
        UNDERR [2; 1] { Clear = 1 },
        /// Trigger error
        TRGERR [3; 1] { Clear = 1 },
    }
}

/// TSPI channel 0.
pub const TSPI0: *const RegisterBlock = TSPI0_BASE as usize as *const _;
/// TSPI channel 0.
pub type TSPI0 = Instance<RegisterBlock, 0>;
/// TSPI channel 1.
pub const TSPI1: *const RegisterBlock = TSPI1_BASE as usize as *const _;
/// TSPI channel 1.
pub type TSPI1 = Instance<RegisterBlock, 1>;
/// TSPI channel 2.
pub const TSPI2: *const RegisterBlock = TSPI2_BASE as usize as *const _;
/// TSPI channel 2.
pub type TSPI2 = Instance<RegisterBlock, 2>;
/// TSPI channel 3.
pub const TSPI3: *const RegisterBlock = TSPI3_BASE as usize as *const _;
/// TSPI channel 3.
pub type TSPI3 = Instance<RegisterBlock, 3>;
/// TSPI channel 4.
pub const TSPI4: *const RegisterBlock = TSPI4_BASE as usize as *const _;
/// TSPI channel 4.
pub type TSPI4 = Instance<RegisterBlock, 4>;

/// Bit-band aliases
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{TSPI0_BASE, TSPI1_BASE, TSPI2_BASE, TSPI3_BASE, TSPI4_BASE};

    bitband_aliases! {
        RegisterBlock;
        [
            TSPI0 = TSPI0_BASE,
            TSPI1 = TSPI1_BASE,
            TSPI2 = TSPI2_BASE,
            TSPI3 = TSPI3_BASE,
            TSPI4 = TSPI4_BASE,
        ];
        {
            CR0_TSPIE = CR0[0];
            CR1_TRGEN = CR1[8];
            CR1_INF = CR1[9];
            CR1_TSPIMS = CR1[10];
            CR1_MSTR = CR1[11];
            CR1_TRXE = CR1[12];
            CR1_TXE = CR1[14];
            CR1_RXE = CR1[15];
            CR2_DMARE = CR2[8];
            CR2_DMATE = CR2[9];
            CR2_INTERR = CR2[10];
            CR2_INTRXFE = CR2[12];
            CR2_INTRXWE = CR2[13];
            CR2_INTTXFE = CR2[14];
            CR2_INTTXWE = CR2[15];
            CR2_SCKIDLE = CR2[20];
            CR2_TXDEMP = CR2[21];
            CR3_RFFLLCLR = CR3[0];
            CR3_TFEMPCLR = CR3[1];
            FMTR0_CKPHA = FMTR0[14];
            FMTR0_CKPOL = FMTR0[15];
            FMTR0_CS0POL = FMTR0[16];
            FMTR0_CS1POL = FMTR0[17];
            FMTR0_CS2POL = FMTR0[18];
            FMTR0_CS3POL = FMTR0[19];
            FMTR0_DIR = FMTR0[31];
            FMTR1_VP = FMTR1[4];
            FMTR1_VPE = FMTR1[5];
            SECTCR0_SECT = SECTCR0[0];
            SR_RXFF = SR[4];
            SR_RXEND = SR[5];
            SR_RXRUN = SR[6];
            SR_TXFF = SR[20];
            SR_TXEND = SR[21];
            SR_TXRUN = SR[22];
            SR_TSPISUE = SR[31];
            ERR_PERR = ERR[0];
            ERR_OVRERR = ERR[1];
            ERR_UNDERR = ERR[2];
            ERR_TRGERR = ERR[3];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn master_eight_bit_frames() {
        let mut mem = [0u32; 0x208 / 4];
        let base = mem.as_mut_ptr();
        let spi = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::tspi, spi, CR0, TSPIE: Enabled);
        ral::write_reg!(ral::tspi, spi, FMTR0, DIR: MsbFirst, FL: 8, CKPOL: IdleHigh, CKPHA: SecondEdge);
        ral::write_reg!(ral::tspi, spi, CR1, MSTR: Master, TSPIMS: Spi, TXE: Enabled);
        ral::write_reg!(ral::tspi, spi, DR, 0xA5);

        unsafe {
            assert_eq!(base.read(), 1);
            assert_eq!(base.add(5).read(), (1 << 31) | (8 << 24) | (1 << 15) | (1 << 14));
            assert_eq!(base.add(1).read(), (1 << 14) | (1 << 11));
            assert_eq!(base.add(0x40).read(), 0xA5);
        }

        unsafe { base.add(0x80).write((1 << 22) | (3 << 16)) };
        assert!(ral::read_reg!(ral::tspi, spi, SR, TXRUN == Busy));
        assert_eq!(ral::read_reg!(ral::tspi, spi, SR, TLVL), 3);
    }

    #[test]
    fn aliases_per_channel() {
        assert_eq!(bitband::TSPI2::SR_TXEND.register(), TSPI2_BASE + 0x200);
        assert_eq!(bitband::TSPI2::SR_TXEND.bit(), 21);
        assert_eq!(
            bitband::TSPI1::CR0_TSPIE.address() - bitband::TSPI0::CR0_TSPIE.address(),
            0x400 * 32
        );
    }
}
