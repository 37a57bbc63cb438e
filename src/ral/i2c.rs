//! I2C bus interface
//!
//! Five channels, I2C0 through I2C4.
//!
//! `CR2` and `SR` share offset 0x0C. Reads return the status, writes go to
//! the control register. The block exposes `SR` as a field, so it works with
//! the RAL macros, and `CR2` through [`RegisterBlock::CR2`]:
//!
//! ```no_run
//! use tmpm4g_pac::ral::{self, i2c};
//!
//! let i2c0 = unsafe { i2c::I2C0::new(i2c::I2C0) };
//! // Generate a start condition as master transmitter.
//! i2c0.CR2().write(i2c::cr2(i2c::CR2::MST::RW::Master, i2c::CR2::TRX::RW::Transmit, 1, 1));
//! while ral::read_reg!(ral::i2c, i2c0, SR, PIN == Requested) {}
//! ```

use super::{Instance, RORegister, RWRegister, WORegister};
use crate::memory_map::{I2C0_BASE, I2C1_BASE, I2C2_BASE, I2C3_BASE, I2C4_BASE};

/// I2C registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Control 1
    pub CR1: RWRegister<u32>,
    /// Data buffer
    pub DBR: RWRegister<u32>,
    /// Slave address
    pub AR: RWRegister<u32>,
    /// Status. Shares its address with `CR2`.
    pub SR: RORegister<u32>,
    /// Prescaler clock
    pub PRS: RWRegister<u32>,
    /// Interrupt enable
    pub IE: RWRegister<u32>,
    /// Interrupt status
    pub ST: RWRegister<u32>,
    /// Extended function
    pub OP: RWRegister<u32>,
    /// Bus pin monitor
    pub PM: RORegister<u32>,
    /// Second slave address
    pub AR2: RWRegister<u32>,
}

assert_layout!(RegisterBlock, size: 0x28, {
    CR1: 0x00,
    DBR: 0x04,
    AR: 0x08,
    SR: 0x0C,
    PRS: 0x10,
    IE: 0x14,
    ST: 0x18,
    OP: 0x1C,
    PM: 0x20,
    AR2: 0x24,
});

impl RegisterBlock {
    /// Control 2, the write side of `SR`.
    pub fn CR2(&self) -> &WORegister<u32> {
        // Safety: CR2 and SR are the same 32-bit location. The returned
        // register can only write, so it never observes SR.
        unsafe { &*(&self.SR as *const RORegister<u32>).cast::<WORegister<u32>>() }
    }
}

/// Compose a `CR2` value that keeps the interface enabled.
///
/// `pin` and `bb` are the raw PIN and BB bits.
pub const fn cr2(mst: u32, trx: u32, bb: u32, pin: u32) -> u32 {
    ((mst << CR2::MST::offset) & CR2::MST::mask)
        | ((trx << CR2::TRX::offset) & CR2::TRX::mask)
        | ((bb << CR2::BB::offset) & CR2::BB::mask)
        | ((pin << CR2::PIN::offset) & CR2::PIN::mask)
        | (CR2::I2CM::RW::Enabled << CR2::I2CM::offset)
}

fields! {
    /// Control 1
    CR1: u32 {
        /// Serial clock frequency select
        SCK [0; 3],
        /// Slave mode NACK detection
        NOACK [3; 1] { Enabled = 0, Disabled = 1 },
        /// Acknowledgement clock
        ACK [4; 1] { Disabled = 0, Enabled = 1 },
        /// Bits per transfer. Zero means eight.
        BC [5; 3],
    }

    /// Data buffer
    DBR: u32 {
        /// Transmit / receive data
        DB [0; 8],
    }

    /// Slave address
    AR: u32 {
        /// Address recognition
        ALS [0; 1] { Recognize = 0, Ignore = 1 },
        /// Slave address
        SA [1; 7],
    }

    /// Control 2, write side of offset 0x0C
    CR2: u32 {
        /// Software reset. Write `Step1` then `Step2`.
        SWRES [0; 2] { Step1 = 0b10, Step2 = 0b01 },
        /// I2C mode
        I2CM [3; 1] { Disabled = 0, Enabled = 1 },
        /// Release the interrupt request
        PIN [4; 1] { Release = 1 },
        /// Generate a start or stop condition
        BB [5; 1] { Stop = 0, Start = 1 },
        /// Transfer direction
        TRX [6; 1] { Receive = 0, Transmit = 1 },
        /// Master / slave
        MST [7; 1] { Slave = 0, Master = 1 },
    }

    /// Status, read side of offset 0x0C
    SR: u32 {
        /// Last received bit, the ACK
        LRB [0; 1] { Ack = 0, Nack = 1 },
        /// General call, or zero address, detected
        ADO [1; 1],
        /// Addressed as slave
        AAS [2; 1],
        /// Arbitration lost
        AL [3; 1],
        /// Interrupt request
        PIN [4; 1] { Requested = 0, Released = 1 },
        /// Bus state
        BB [5; 1] { Free = 0, Busy = 1 },
        /// Transfer direction
        TRX [6; 1] { Receive = 0, Transmit = 1 },
        /// Master / slave
        MST [7; 1] { Slave = 0, Master = 1 },
    }

    /// Prescaler clock
    PRS: u32 {
        /// Prescaler, 1 through 32. Zero means 32.
        PRSCK [0; 5],
    }

    /// Interrupt enable
    IE: u32 {
        /// I2C interrupt
        IE [0; 1] { Disabled = 0, Enabled = 1 },
    }

    /// Interrupt status
    ST: u32 {
        /// I2C interrupt. Write 1 to clear.
        I2C [0; 1] { Clear = 1 },
    }

    /// Extended function
    OP: u32 {
        /// Master ACK on the final byte
        MFACK [0; 1] { Ack = 0, Nack = 1 },
        /// Repeated start generation
        SREN [1; 1] { Disabled = 0, Enabled = 1 },
        /// General call detection
        GCDI [2; 1] { Enabled = 0, Disabled = 1 },
        /// Repeated start detected
        RSTA [3; 1],
        /// Noise filter
        NFSEL [4; 1] { Digital = 0, Analog = 1 },
        /// Stop condition / repeated start interrupt
        SPROPE [5; 1] { Disabled = 0, Enabled = 1 },
        /// Matched slave address 1
        SAST [6; 1],
        /// Matched slave address 2
        SA2ST [7; 1],
        /// Arbitration lost detection
        DISAL [8; 1] { Enabled = 0, Disabled = 1 },
    }

    /// Bus pin monitor
    PM: u32 {
        /// SCL level
        SCL [0; 1],
        /// SDA level
        SDA [1; 1],
    }

    /// Second slave address
    AR2: u32 {
        /// Second address enable
        SA2EN [0; 1] { Disabled = 0, Enabled = 1 },
        /// Second slave address
        SA2 [1; 7],
    }
}

/// I2C channel 0.
pub const I2C0: *const RegisterBlock = I2C0_BASE as usize as *const _;
/// I2C channel 0.
pub type I2C0 = Instance<RegisterBlock, 0>;
/// I2C channel 1.
pub const I2C1: *const RegisterBlock = I2C1_BASE as usize as *const _;
/// I2C channel 1.
pub type I2C1 = Instance<RegisterBlock, 1>;
/// I2C channel 2.
pub const I2C2: *const RegisterBlock = I2C2_BASE as usize as *const _;
/// I2C channel 2.
pub type I2C2 = Instance<RegisterBlock, 2>;
/// I2C channel 3.
pub const I2C3: *const RegisterBlock = I2C3_BASE as usize as *const _;
/// I2C channel 3.
pub type I2C3 = Instance<RegisterBlock, 3>;
/// I2C channel 4.
pub const I2C4: *const RegisterBlock = I2C4_BASE as usize as *const _;
/// I2C channel 4.
pub type I2C4 = Instance<RegisterBlock, 4>;

/// Bit-band aliases
///
/// There are no aliases for `CR2`. A bit-band write is a read-modify-write,
/// and the read side of `CR2` is `SR`.
pub mod bitband {
    use super::RegisterBlock;
    use crate::memory_map::{I2C0_BASE, I2C1_BASE, I2C2_BASE, I2C3_BASE, I2C4_BASE};

    bitband_aliases! {
        RegisterBlock;
        [
            I2C0 = I2C0_BASE,
            I2C1 = I2C1_BASE,
            I2C2 = I2C2_BASE,
            I2C3 = I2C3_BASE,
            I2C4 = I2C4_BASE,
        ];
        {
            CR1_NOACK = CR1[3];
            CR1_ACK = CR1[4];
            AR_ALS = AR[0];
            SR_LRB = SR[0];
            SR_ADO = SR[1];
            SR_AAS = SR[2];
            SR_AL = SR[3];
            SR_PIN = SR[4];
            SR_BB = SR[5];
            SR_TRX = SR[6];
            SR_MST = SR[7];
            IE_IE = IE[0];
            ST_I2C = ST[0];
            OP_MFACK = OP[0];
            OP_SREN = OP[1];
            OP_GCDI = OP[2];
            OP_RSTA = OP[3];
            OP_NFSEL = OP[4];
            OP_SPROPE = OP[5];
            OP_SAST = OP[6];
            OP_SA2ST = OP[7];
            OP_DISAL = OP[8];
            PM_SCL = PM[0];
            PM_SDA = PM[1];
            AR2_SA2EN = AR2[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ral;

    #[test]
    fn cr2_overlays_sr() {
        let mut mem = [0u32; 10];
        let base = mem.as_mut_ptr();
        let i2c = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        assert_eq!(i2c.CR2() as *const WORegister<u32> as usize, base as usize + 0x0C);

        i2c.CR2().write(cr2(CR2::MST::RW::Master, CR2::TRX::RW::Transmit, 1, 1));
        assert_eq!(unsafe { base.add(3).read() }, 0b1111_1000);

        // The emulated memory reflects the write back through SR.
        assert!(ral::read_reg!(ral::i2c, i2c, SR, MST == Master));
        assert!(ral::read_reg!(ral::i2c, i2c, SR, BB == Busy));
    }

    #[test]
    fn slave_address() {
        let mut mem = [0u32; 10];
        let base = mem.as_mut_ptr();
        let i2c = unsafe { &*(base.cast_const().cast::<RegisterBlock>()) };

        ral::write_reg!(ral::i2c, i2c, AR, SA: 0x50, ALS: Recognize);
        ral::write_reg!(ral::i2c, i2c, CR1, BC: 0, ACK: Enabled, SCK: 4);
        unsafe {
            assert_eq!(base.add(2).read(), 0x50 << 1);
            assert_eq!(base.read(), (1 << 4) | 4);
        }
    }
}
