//! Take-once ownership of every peripheral instance

use core::sync::atomic::{AtomicBool, Ordering};

use crate::ral::{
    adc, cg, crc, dac, dma, enc, fc, gpio, i2c, ia, imn, lvd, ofd, pmd, ramp, rlm, rtc, siwd,
    t32a, trgsel, tspi, uart, Instance,
};

static TAKEN: AtomicBool = AtomicBool::new(false);

macro_rules! peripherals {
    ($(
        $(#[$attr:meta])*
        $field:ident: $module:ident::$inst:ident,
    )*) => {
        /// One handle per peripheral instance.
        ///
        /// Each field is the only safe way to reach its register block.
        /// Move fields into drivers to hand out ownership.
        #[allow(non_snake_case)]
        #[derive(Debug)]
        pub struct Peripherals {
            $(
                $(#[$attr])*
                pub $field: $module::$inst,
            )*
        }

        impl Peripherals {
            /// Create every handle, unconditionally.
            ///
            /// Doesn't consult or change the flag behind [`take`](Self::take).
            ///
            /// # Safety
            ///
            /// The returned handles may alias handles that already exist.
            /// Make sure that nothing else accesses the same registers, or
            /// synchronize access yourself.
            pub unsafe fn steal() -> Self {
                Self {
                    $(
                        $(#[$attr])*
                        $field: Instance::new($module::$inst),
                    )*
                }
            }
        }
    };
}

peripherals! {
    CG: cg::CG,
    IA: ia::IA,
    IMN: imn::IMN,
    RLM: rlm::RLM,
    RAMP: ramp::RAMP,
    SIWD0: siwd::SIWD0,
    OFD: ofd::OFD,
    LVD: lvd::LVD,
    FC: fc::FC,
    RTC: rtc::RTC,
    DMAA: dma::DMAA,
    DMAB: dma::DMAB,
    TRGSEL: trgsel::TRGSEL,
    CRC: crc::CRC,
    ADA: adc::ADA,
    DA0: dac::DA0,
    DA1: dac::DA1,
    PMD0: pmd::PMD0,
    EN0: enc::EN0,
    EN1: enc::EN1,
    EN2: enc::EN2,
    T32A0: t32a::T32A0,
    T32A1: t32a::T32A1,
    T32A2: t32a::T32A2,
    T32A3: t32a::T32A3,
    T32A4: t32a::T32A4,
    T32A5: t32a::T32A5,
    T32A6: t32a::T32A6,
    T32A7: t32a::T32A7,
    TSPI0: tspi::TSPI0,
    TSPI1: tspi::TSPI1,
    TSPI2: tspi::TSPI2,
    TSPI3: tspi::TSPI3,
    TSPI4: tspi::TSPI4,
    UART0: uart::UART0,
    UART1: uart::UART1,
    UART2: uart::UART2,
    UART3: uart::UART3,
    UART4: uart::UART4,
    UART5: uart::UART5,
    I2C0: i2c::I2C0,
    I2C1: i2c::I2C1,
    I2C2: i2c::I2C2,
    I2C3: i2c::I2C3,
    I2C4: i2c::I2C4,
    PA: gpio::PA,
    PB: gpio::PB,
    PC: gpio::PC,
    PD: gpio::PD,
    PE: gpio::PE,
    PF: gpio::PF,
    PG: gpio::PG,
    PH: gpio::PH,
    PJ: gpio::PJ,
    PK: gpio::PK,
    PL: gpio::PL,
    PM: gpio::PM,
    PN: gpio::PN,
    PP: gpio::PP,
    #[cfg(not(feature = "tmpm4g6"))]
    PR: gpio::PR,
    #[cfg(not(feature = "tmpm4g6"))]
    PT: gpio::PT,
    #[cfg(not(feature = "tmpm4g6"))]
    PU: gpio::PU,
    #[cfg(not(feature = "tmpm4g6"))]
    PV: gpio::PV,
    #[cfg(not(feature = "tmpm4g6"))]
    PW: gpio::PW,
    #[cfg(not(feature = "tmpm4g6"))]
    PY: gpio::PY,
}

impl Peripherals {
    /// Take every peripheral handle.
    ///
    /// Returns `Some` exactly once. Later calls, and calls after
    /// [`seal`](Self::seal), return `None`.
    pub fn take() -> Option<Self> {
        if TAKEN
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
        {
            // Safety: the flag guarantees this is the only safe set of handles.
            Some(unsafe { Self::steal() })
        } else {
            None
        }
    }

    /// Make every later [`take`](Self::take) return `None`.
    pub fn seal() {
        TAKEN.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::Peripherals;
    use crate::memory_map;

    // The only test that calls take(). The flag is global to the test binary.
    #[test]
    fn take_once() {
        let periphs = Peripherals::take().unwrap();
        assert!(Peripherals::take().is_none());
        assert_eq!(periphs.UART2.as_ptr() as u32, memory_map::UART2_BASE);
        assert_eq!(periphs.CG.as_ptr() as u32, memory_map::CG_BASE);
        assert_eq!(periphs.FC.as_ptr() as u32, memory_map::FC_BASE);
        assert!(Peripherals::take().is_none());
    }

    #[test]
    fn steal_hands_out_distinct_instance_types() {
        let periphs = unsafe { Peripherals::steal() };
        let i2c3 = periphs.I2C3;
        assert_eq!(i2c3.release() as u32, memory_map::I2C3_BASE);
        assert_eq!(periphs.T32A7.as_ptr() as u32, memory_map::T32A7_BASE);
        assert_eq!(periphs.PP.as_ptr() as u32, memory_map::PP_BASE);
    }
}
