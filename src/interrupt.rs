//! Interrupt numbers
//!
//! [`Interrupt`] enumerates every device interrupt source by its NVIC
//! vector number. It implements `cortex_m`'s `InterruptNumber`, so it can be
//! used directly with the NVIC:
//!
//! ```no_run
//! use cortex_m::peripheral::NVIC;
//! use tmpm4g_pac::Interrupt;
//!
//! // Safety: no priority-based critical sections are in use.
//! unsafe { NVIC::unmask(Interrupt::INTUART0RX) };
//! NVIC::pend(Interrupt::INTUART0RX);
//! ```

use crate::{Error, Result};

/// Number of priority bits implemented in the NVIC.
pub const NVIC_PRIO_BITS: u8 = 4;
/// The core has a memory protection unit.
pub const MPU_PRESENT: bool = true;
/// The core has a floating point unit.
pub const FPU_PRESENT: bool = true;
/// The device uses the standard SysTick configuration.
pub const VENDOR_SYSTICK_CONFIG: bool = false;

macro_rules! interrupts {
    ($( $(#[$attr:meta])* $name:ident = $nr:literal, )*) => {
        /// Device interrupt sources.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        #[allow(non_camel_case_types)]
        pub enum Interrupt {
            $( $(#[$attr])* $name = $nr, )*
        }

        impl Interrupt {
            /// Every interrupt, in vector order.
            pub const ALL: &'static [Interrupt] = &[ $( Interrupt::$name, )* ];

            /// Returns the vendor name of the interrupt.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Interrupt::$name => stringify!($name), )*
                }
            }
        }

        impl TryFrom<u16> for Interrupt {
            type Error = Error;
            fn try_from(nr: u16) -> Result<Self> {
                match nr {
                    $( $nr => Ok(Interrupt::$name), )*
                    _ => Err(Error::InvalidInterrupt(nr)),
                }
            }
        }
    };
}

interrupts! {
    /// External interrupt pin 00
    INT00 = 0,
    /// External interrupt pin 01
    INT01 = 1,
    /// External interrupt pin 02
    INT02 = 2,
    /// External interrupt pin 03
    INT03 = 3,
    /// External interrupt pin 04
    INT04 = 4,
    /// External interrupt pin 05
    INT05 = 5,
    /// External interrupt pin 06
    INT06 = 6,
    /// External interrupt pin 07
    INT07 = 7,
    /// External interrupt pin 08
    INT08 = 8,
    /// External interrupt pin 09
    INT09 = 9,
    /// External interrupt pin 10
    INT10 = 10,
    /// External interrupt pin 11
    INT11 = 11,
    /// External interrupt pin 12
    INT12 = 12,
    /// External interrupt pin 13
    INT13 = 13,
    /// External interrupt pin 14
    INT14 = 14,
    /// External interrupt pin 15
    INT15 = 15,
    /// External interrupt pin 16
    INT16 = 16,
    /// External interrupt pin 17
    INT17 = 17,
    /// External interrupt pin 18
    INT18 = 18,
    /// External interrupt pin 19
    INT19 = 19,
    /// External interrupt pin 20
    INT20 = 20,
    /// External interrupt pin 21
    INT21 = 21,
    /// PMD0 EMG interrupt
    INTEMG0 = 22,
    /// PMD0 OVV interrupt
    INTOVV0 = 23,
    /// PMD0 PWM interrupt
    INTPWM0 = 24,
    /// Encoder 0 interrupt 0
    INTENC00 = 25,
    /// Encoder 0 interrupt 1
    INTENC01 = 26,
    /// Encoder 1 interrupt 0
    INTENC10 = 27,
    /// Encoder 1 interrupt 1
    INTENC11 = 28,
    /// Encoder 2 interrupt 0
    INTENC20 = 29,
    /// Encoder 2 interrupt 1
    INTENC21 = 30,
    /// ADC unit A PMD trigger program A done
    INTADAPDA = 31,
    /// ADC unit A PMD trigger program B done
    INTADAPDB = 32,
    /// ADC unit A monitor 0
    INTADACP0 = 33,
    /// ADC unit A monitor 1
    INTADACP1 = 34,
    /// ADC unit A general trigger conversion done
    INTADATRG = 35,
    /// ADC unit A single conversion done
    INTADASGL = 36,
    /// ADC unit A continuous conversion done
    INTADACNT = 37,
    /// TSPI0 reception
    INTT0RX = 38,
    /// TSPI0 transmission
    INTT0TX = 39,
    /// TSPI0 error
    INTT0ERR = 40,
    /// TSPI1 reception
    INTT1RX = 41,
    /// TSPI1 transmission
    INTT1TX = 42,
    /// TSPI1 error
    INTT1ERR = 43,
    /// TSPI2 reception
    INTT2RX = 44,
    /// TSPI2 transmission
    INTT2TX = 45,
    /// TSPI2 error
    INTT2ERR = 46,
    /// TSPI3 reception
    INTT3RX = 47,
    /// TSPI3 transmission
    INTT3TX = 48,
    /// TSPI3 error
    INTT3ERR = 49,
    /// TSPI4 reception
    INTT4RX = 50,
    /// TSPI4 transmission
    INTT4TX = 51,
    /// TSPI4 error
    INTT4ERR = 52,
    /// I2C0
    INTI2C0 = 53,
    /// I2C1
    INTI2C1 = 54,
    /// I2C2
    INTI2C2 = 55,
    /// I2C3
    INTI2C3 = 56,
    /// I2C4
    INTI2C4 = 57,
    /// UART0 reception
    INTUART0RX = 58,
    /// UART0 transmission
    INTUART0TX = 59,
    /// UART0 error
    INTUART0ERR = 60,
    /// UART1 reception
    INTUART1RX = 61,
    /// UART1 transmission
    INTUART1TX = 62,
    /// UART1 error
    INTUART1ERR = 63,
    /// UART2 reception
    INTUART2RX = 64,
    /// UART2 transmission
    INTUART2TX = 65,
    /// UART2 error
    INTUART2ERR = 66,
    /// UART3 reception
    INTUART3RX = 67,
    /// UART3 transmission
    INTUART3TX = 68,
    /// UART3 error
    INTUART3ERR = 69,
    /// UART4 reception
    INTUART4RX = 70,
    /// UART4 transmission
    INTUART4TX = 71,
    /// UART4 error
    INTUART4ERR = 72,
    /// UART5 reception
    INTUART5RX = 73,
    /// UART5 transmission
    INTUART5TX = 74,
    /// UART5 error
    INTUART5ERR = 75,
    /// T32A0 timer A
    INTT32A00A = 76,
    /// T32A0 timer A capture 0
    INTT32A00ACAP0 = 77,
    /// T32A0 timer A capture 1
    INTT32A00ACAP1 = 78,
    /// T32A0 timer B
    INTT32A00B = 79,
    /// T32A0 timer B capture 0
    INTT32A00BCAP0 = 80,
    /// T32A0 timer B capture 1
    INTT32A00BCAP1 = 81,
    /// T32A0 timer C
    INTT32A00C = 82,
    /// T32A0 timer C capture 0
    INTT32A00CCAP0 = 83,
    /// T32A0 timer C capture 1
    INTT32A00CCAP1 = 84,
    /// T32A1 timer A
    INTT32A01A = 85,
    /// T32A1 timer A capture 0
    INTT32A01ACAP0 = 86,
    /// T32A1 timer A capture 1
    INTT32A01ACAP1 = 87,
    /// T32A1 timer B
    INTT32A01B = 88,
    /// T32A1 timer B capture 0
    INTT32A01BCAP0 = 89,
    /// T32A1 timer B capture 1
    INTT32A01BCAP1 = 90,
    /// T32A1 timer C
    INTT32A01C = 91,
    /// T32A1 timer C capture 0
    INTT32A01CCAP0 = 92,
    /// T32A1 timer C capture 1
    INTT32A01CCAP1 = 93,
    /// T32A2 timer A
    INTT32A02A = 94,
    /// T32A2 timer A capture 0
    INTT32A02ACAP0 = 95,
    /// T32A2 timer A capture 1
    INTT32A02ACAP1 = 96,
    /// T32A2 timer B
    INTT32A02B = 97,
    /// T32A2 timer B capture 0
    INTT32A02BCAP0 = 98,
    /// T32A2 timer B capture 1
    INTT32A02BCAP1 = 99,
    /// T32A2 timer C
    INTT32A02C = 100,
    /// T32A2 timer C capture 0
    INTT32A02CCAP0 = 101,
    /// T32A2 timer C capture 1
    INTT32A02CCAP1 = 102,
    /// T32A3 timer A
    INTT32A03A = 103,
    /// T32A3 timer A capture 0
    INTT32A03ACAP0 = 104,
    /// T32A3 timer A capture 1
    INTT32A03ACAP1 = 105,
    /// T32A3 timer B
    INTT32A03B = 106,
    /// T32A3 timer B capture 0
    INTT32A03BCAP0 = 107,
    /// T32A3 timer B capture 1
    INTT32A03BCAP1 = 108,
    /// T32A3 timer C
    INTT32A03C = 109,
    /// T32A3 timer C capture 0
    INTT32A03CCAP0 = 110,
    /// T32A3 timer C capture 1
    INTT32A03CCAP1 = 111,
    /// T32A4 timer A
    INTT32A04A = 112,
    /// T32A4 timer A capture 0
    INTT32A04ACAP0 = 113,
    /// T32A4 timer A capture 1
    INTT32A04ACAP1 = 114,
    /// T32A4 timer B
    INTT32A04B = 115,
    /// T32A4 timer B capture 0
    INTT32A04BCAP0 = 116,
    /// T32A4 timer B capture 1
    INTT32A04BCAP1 = 117,
    /// T32A4 timer C
    INTT32A04C = 118,
    /// T32A4 timer C capture 0
    INTT32A04CCAP0 = 119,
    /// T32A4 timer C capture 1
    INTT32A04CCAP1 = 120,
    /// T32A5 timer A
    INTT32A05A = 121,
    /// T32A5 timer A capture 0
    INTT32A05ACAP0 = 122,
    /// T32A5 timer A capture 1
    INTT32A05ACAP1 = 123,
    /// T32A5 timer B
    INTT32A05B = 124,
    /// T32A5 timer B capture 0
    INTT32A05BCAP0 = 125,
    /// T32A5 timer B capture 1
    INTT32A05BCAP1 = 126,
    /// T32A5 timer C
    INTT32A05C = 127,
    /// T32A5 timer C capture 0
    INTT32A05CCAP0 = 128,
    /// T32A5 timer C capture 1
    INTT32A05CCAP1 = 129,
    /// T32A6 timer A
    INTT32A06A = 130,
    /// T32A6 timer A capture 0
    INTT32A06ACAP0 = 131,
    /// T32A6 timer A capture 1
    INTT32A06ACAP1 = 132,
    /// T32A6 timer B
    INTT32A06B = 133,
    /// T32A6 timer B capture 0
    INTT32A06BCAP0 = 134,
    /// T32A6 timer B capture 1
    INTT32A06BCAP1 = 135,
    /// T32A6 timer C
    INTT32A06C = 136,
    /// T32A6 timer C capture 0
    INTT32A06CCAP0 = 137,
    /// T32A6 timer C capture 1
    INTT32A06CCAP1 = 138,
    /// T32A7 timer A
    INTT32A07A = 139,
    /// T32A7 timer A capture 0
    INTT32A07ACAP0 = 140,
    /// T32A7 timer A capture 1
    INTT32A07ACAP1 = 141,
    /// T32A7 timer B
    INTT32A07B = 142,
    /// T32A7 timer B capture 0
    INTT32A07BCAP0 = 143,
    /// T32A7 timer B capture 1
    INTT32A07BCAP1 = 144,
    /// T32A7 timer C
    INTT32A07C = 145,
    /// T32A7 timer C capture 0
    INTT32A07CCAP0 = 146,
    /// T32A7 timer C capture 1
    INTT32A07CCAP1 = 147,
    /// RAM parity error, RAM0
    INTPARI0 = 148,
    /// RAM parity error, RAM1
    INTPARI1 = 149,
    /// DMA unit A transfer complete
    INTDMAATC = 150,
    /// DMA unit A transfer error
    INTDMAAERR = 151,
    /// DMA unit B transfer complete
    INTDMABTC = 152,
    /// DMA unit B transfer error
    INTDMABERR = 153,
    /// Real time clock
    INTRTC = 154,
    /// Voltage detection
    INTLVD = 155,
    /// Code flash ready
    INTFLCRDY = 156,
    /// Data flash ready
    INTFLDRDY = 157,
}

/// Number of device interrupts.
pub const INTERRUPT_COUNT: usize = Interrupt::ALL.len();

// Safety: every discriminant is a valid device vector number.
unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

impl core::fmt::Display for Interrupt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name(), *self as u16)
    }
}

/// Core exceptions, with their CMSIS IRQn numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Exception {
    /// Non maskable interrupt
    NonMaskableInt = -14,
    /// Hard fault
    HardFault = -13,
    /// Memory management fault
    MemoryManagement = -12,
    /// Bus fault
    BusFault = -11,
    /// Usage fault
    UsageFault = -10,
    /// Supervisor call
    SVCall = -5,
    /// Debug monitor
    DebugMonitor = -4,
    /// Pendable service call
    PendSV = -2,
    /// System tick timer
    SysTick = -1,
}

impl Exception {
    /// Returns the CMSIS IRQn.
    pub const fn irqn(self) -> i8 {
        self as i8
    }

    /// Returns the exception number, the IPSR value while it's active.
    pub const fn number(self) -> u8 {
        (self as i8 + 16) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_m::interrupt::InterruptNumber;

    #[test]
    fn vector_numbers_are_dense() {
        assert_eq!(INTERRUPT_COUNT, 158);
        for (idx, irq) in Interrupt::ALL.iter().enumerate() {
            assert_eq!(irq.number() as usize, idx);
            assert_eq!(Interrupt::try_from(idx as u16), Ok(*irq));
        }
    }

    #[test]
    fn known_vectors() {
        assert_eq!(Interrupt::INT00 as u16, 0);
        assert_eq!(Interrupt::INTUART0RX.number(), 58);
        assert_eq!(Interrupt::INTUART5ERR.number(), 75);
        assert_eq!(Interrupt::INTT32A07CCAP1.number(), 147);
        assert_eq!(Interrupt::INTDMAATC.number(), 150);
        assert_eq!(Interrupt::INTFLDRDY.number(), 157);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Interrupt::try_from(158), Err(Error::InvalidInterrupt(158)));
        assert_eq!(Interrupt::try_from(u16::MAX), Err(Error::InvalidInterrupt(u16::MAX)));
    }

    #[test]
    fn names() {
        assert_eq!(Interrupt::INTADASGL.name(), "INTADASGL");
        assert_eq!(Interrupt::INTT0ERR.name(), "INTT0ERR");
    }

    #[test]
    fn exceptions() {
        assert_eq!(Exception::NonMaskableInt.irqn(), -14);
        assert_eq!(Exception::NonMaskableInt.number(), 2);
        assert_eq!(Exception::SVCall.number(), 11);
        assert_eq!(Exception::SysTick.number(), 15);
    }
}
