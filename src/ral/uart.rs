//! Asynchronous serial interface
//!
//! Six channels, UART0 through UART5, each with 8-entry transmit and
//! receive FIFOs.

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::{UART0_BASE, UART1_BASE, UART2_BASE, UART3_BASE, UART4_BASE, UART5_BASE};

/// UART registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Software reset
    pub SWRST: RWRegister<u32>,
    /// Control 0
    pub CR0: RWRegister<u32>,
    /// Control 1
    pub CR1: RWRegister<u32>,
    /// Clock control
    pub CLK: RWRegister<u32>,
    /// Baud rate
    pub BRD: RWRegister<u32>,
    /// Transfer enable
    pub TRANS: RWRegister<u32>,
    /// Data
    pub DR: RWRegister<u32>,
    /// Status
    pub SR: RORegister<u32>,
    /// FIFO clear
    pub FIFOCLR: WORegister<u32>,
    /// Error flags
    pub ERR: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x28, {
    SWRST: 0x00,
    CR0: 0x04,
    CR1: 0x08,
    CLK: 0x0C,
    BRD: 0x10,
    TRANS: 0x14,
    DR: 0x18,
    SR: 0x1C,
    FIFOCLR: 0x20,
    ERR: 0x24,
});

fields! {
    /// Software reset
    SWRST: u32 {
        /// Reset sequence. Write `Step1` then `Step2`.
        SWRST [0; 2] { Step1 = 0b10, Step2 = 0b01 },
        /// Reset in progress
        SWRSTF [7; 1] { Done = 0, Running = 1 },
    }

    /// Control 0
    CR0: u32 {
        /// Data length
        SM [0; 2] { SevenBit = 0b00, EightBit = 0b01, NineBit = 0b10 },
        /// Parity enable
        PE [2; 1] { Disabled = 0, Enabled = 1 },
        /// Parity type
        EVEN [3; 1] { Odd = 0, Even = 1 },
        /// Stop bit length
        SBLEN [4; 1] { One = 0, Two = 1 },
        /// Data direction
        DIR [5; 1] { LsbFirst = 0, MsbFirst = 1 },
        /// Wake-up function, 9-bit mode
        WU [6; 1] { Disabled = 0, Enabled = 1 },
        /// Loopback test
        LPB [7; 1] { Disabled = 0, Enabled = 1 },
        /// RTS handshake
        RTSE [9; 1] { Disabled = 0, Enabled = 1 },
        /// CTS handshake
        CTSE [10; 1] { Disabled = 0, Enabled = 1 },
        /// Noise filter
        NF [12; 3],
        /// Half-duplex handshake
        HBSEN [15; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit data inversion
        TXDINV [16; 1] { Normal = 0, Inverted = 1 },
        /// Receive data inversion
        RXDINV [17; 1] { Normal = 0, Inverted = 1 },
    }

    /// Control 1
    CR1: u32 {
        /// Receive DMA request
        DMARE [0; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit DMA request
        DMATE [1; 1] { Disabled = 0, Enabled = 1 },
        /// Error interrupt
        INTERR [2; 1] { Disabled = 0, Enabled = 1 },
        /// Receive complete interrupt
        INTRXWE [4; 1] { Disabled = 0, Enabled = 1 },
        /// Receive fill level interrupt
        INTRXFE [5; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit complete interrupt
        INTTXWE [6; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit fill level interrupt
        INTTXFE [7; 1] { Disabled = 0, Enabled = 1 },
        /// Receive FIFO interrupt fill level
        RXFLV [8; 3],
        /// Transmit FIFO interrupt fill level
        TXFLV [12; 3],
        /// Receive fill level interrupt condition
        RIL [16; 3],
        /// Transmit fill level interrupt condition
        TIL [20; 3],
    }

    /// Clock control
    CLK: u32 {
        /// Prescaler divide ratio, 2^n
        PRSEL [4; 4] {
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
    }

    /// Baud rate
    BRD: u32 {
        /// Integer divider
        BRN [0; 16],
        /// Fractional divider, in 64ths
        BRK [16; 6],
        /// Fractional divider enable
        KEN [23; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Transfer enable
    TRANS: u32 {
        /// Receive enable
        RXE [0; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit enable
        TXE [1; 1] { Disabled = 0, Enabled = 1 },
        /// Transmit stop, for the handshake
        TXTRG [2; 1] { Disabled = 0, Enabled = 1 },
        /// Break output
        BK [3; 1] { Normal = 0, Break = 1 },
    }

    /// Data
    DR: u32 {
        /// Transmit / receive data
        DR [0; 9],
        /// Parity error of this datum
        PERR [16; 1],
        /// Framing error of this datum
        FERR [17; 1],
        /// Break of this datum
        BERR [18; 1],
    }

    /// Status
    SR: u32 {
        /// Receive FIFO fill level
        RLVL [0; 4],
        /// Receive FIFO reached RXFLV
        RXFF [5; 1],
        /// Receive complete
        RXEND [6; 1],
        /// Receive in progress
        RXRUN [7; 1] { Idle = 0, Busy = 1 },
        /// Transmit FIFO fill level
        TLVL [8; 4],
        /// Transmit FIFO reached TXFLV
        TXFF [13; 1],
        /// Transmit complete
        TXEND [14; 1],
        /// Transmit in progress
        TXRUN [15; 1] { Idle = 0, Busy = 1 },
        /// Configuration change allowed
        SUE [31; 1] { Ready = 0, Busy = 1 },
    }

    /// FIFO clear
    FIFOCLR: u32 {
        /// Clear the receive FIFO
        RFCLR [0; 1] { Clear = 1 },
        /// Clear the transmit FIFO
        TFCLR [1; 1] { Clear = 1 },
    }

    /// Error flags. Write 1 to clear.
    ERR: u32 {
        /// Overrun
        OVRERR [0; 1] { Clear = 1 },
        /// Parity
        PERR [1; 1] { Clear = 1 },
        /// Framing
        FERR [2; 1] { Clear = 1 },
        /// Break
        BERR [3; 1] { Clear = 1 },
        /// Trigger
        TRGERR [4; 1] { Clear = 1 },
    }
}

/// UART channel 0.
pub const UART0: *const RegisterBlock = UART0_BASE as usize as *const _;
/// UART channel 0.
pub type UART0 = Instance<RegisterBlock, 0>;
/// UART channel 1.
pub const UART1: *const RegisterBlock = UART1_BASE as usize as *const _;
/// UART channel 1.
pub type UART1 = Instance<RegisterBlock, 1>;
/// UART channel 2.
pub const UART2: *const RegisterBlock = UART2_BASE as usize as *const _;
/// UART channel 2.
pub type UART2 = Instance<RegisterBlock, 2>;
/// UART channel 3.
pub const UART3: *const RegisterBlock = UART3_BASE as usize as *const _;
/// UART channel 3.
pub type UART3 = Instance<RegisterBlock, 3>;
/// UART channel 4.
pub const UART4: *const RegisterBlock = UART4_BASE as usize as *const _;
/// UART channel 4.
pub type UART4 = Instance<RegisterBlock, 4>;
/// UART channel 5.
pub const UART5: *const RegisterBlock = UART5_BASE as usize as *const _;
/// UART channel 5.
pub type UART5 = Instance<RegisterBlock, 5>;

/// Bit-band aliases
///
/// `FIFOCLR` is write-only and has no aliases. Clear the FIFOs with
/// `write_reg!`.
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{
        UART0_BASE, UART1_BASE, UART2_BASE, UART3_BASE, UART4_BASE, UART5_BASE,
    };

    bitband_aliases! {
        RegisterBlock;
        [
            UART0 = UART0_BASE,
            UART1 = UART1_BASE,
            UART2 = UART2_BASE,
            UART3 = UART3_BASE,
            UART4 = UART4_BASE,
            UART5 = UART5_BASE,
        ];
        {
            SWRST_SWRSTF = SWRST[7];
            CR0_PE = CR0[2];
            CR0_EVEN = CR0[3];
            CR0_SBLEN = CR0[4];
            CR0_DIR = CR0[5];
            CR0_WU = CR0[6];
            CR0_LPB = CR0[7];
            CR0_RTSE = CR0[9];
            CR0_CTSE = CR0[10];
            CR0_HBSEN = CR0[15];
            CR0_TXDINV = CR0[16];
            CR0_RXDINV = CR0[17];
            CR1_DMARE = CR1[0];
            CR1_DMATE = CR1[1];
            CR1_INTERR = CR1[2];
            CR1_INTRXWE = CR1[4];
            CR1_INTRXFE = CR1[5];
            CR1_INTTXWE = CR1[6];
            CR1_INTTXFE = CR1[7];
            BRD_KEN = BRD[23];
            TRANS_RXE = TRANS[0];
            TRANS_TXE = TRANS[1];
            TRANS_TXTRG = TRANS[2];
            TRANS_BK = TRANS[3];
            SR_RXFF = SR[5];
            SR_RXEND = SR[6];
            SR_RXRUN = SR[7];
            SR_TXFF = SR[13];
            SR_TXEND = SR[14];
            SR_TXRUN = SR[15];
            SR_SUE = SR[31];
            ERR_OVRERR = ERR[0];
            ERR_PERR = ERR[1];
            ERR_FERR = ERR[2];
            ERR_BERR = ERR[3];
            ERR_TRGERR = ERR[4];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn configure_115200_8n1() {
        let mut mem = [0u32; 10];
        let base = mem.as_mut_ptr();
        let uart = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::uart, uart, SWRST, SWRST: Step1);
        ral::write_reg!(ral::uart, uart, SWRST, SWRST: Step2);
        ral::write_reg!(ral::uart, uart, CR0, SM: EightBit, SBLEN: One, DIR: LsbFirst);
        ral::write_reg!(ral::uart, uart, BRD, BRN: 10, BRK: 55, KEN: Enabled);
        ral::write_reg!(ral::uart, uart, TRANS, RXE: Enabled, TXE: Enabled);
        ral::write_reg!(ral::uart, uart, FIFOCLR, RFCLR: Clear, TFCLR: Clear);

        unsafe {
            assert_eq!(base.read(), 0b01);
            assert_eq!(base.add(1).read(), 0b01);
            assert_eq!(base.add(4).read(), (1 << 23) | (55 << 16) | 10);
            assert_eq!(base.add(5).read(), 0b11);
            assert_eq!(base.add(8).read(), 0b11);
        }
    }

    #[test]
    fn status_fields() {
        let mut mem = [0u32; 10];
        let base = mem.as_mut_ptr();
        let uart = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        unsafe { base.add(7).write((1 << 15) | (2 << 8) | 5) };
        assert_eq!(ral::read_reg!(ral::uart, uart, SR, RLVL), 5);
        assert_eq!(ral::read_reg!(ral::uart, uart, SR, TLVL), 2);
        assert!(ral::read_reg!(ral::uart, uart, SR, TXRUN == Busy));
        assert!(!ral::read_reg!(ral::uart, uart, SR, SUE == Busy));
    }
}
