//! Register access layer
//!
//! One module per peripheral type. Each module has
//!
//! - a `#[repr(C)]` `RegisterBlock` that overlays the peripheral's registers.
//! - a module per register, and a module per field inside it, carrying the
//!   `offset` and `mask` constants that the RAL macros expect.
//! - raw pointer constants to each instance, and [`Instance`] type aliases
//!   of the same name.
//! - a `bitband` module of single-bit aliases, when the peripheral sits
//!   inside the bit-band region.
//!
//! ```no_run
//! use tmpm4g_pac::ral::{self, uart};
//!
//! // Safety: the only UART0 handle in the program.
//! let uart0 = unsafe { uart::UART0::new(uart::UART0) };
//! ral::write_reg!(ral::uart, uart0, BRD, BRN: 26, KEN: Disabled);
//! ral::modify_reg!(ral::uart, uart0, CR0, SM: EightBit, PE: Disabled);
//! while ral::read_reg!(ral::uart, uart0, SR, TXRUN == Busy) {}
//! ```

#![allow(
    non_snake_case, // Compatibility with RAL
    non_upper_case_globals, // RAL field constants are `offset` and `mask`
    non_camel_case_types,
    clippy::identity_op,
)]

pub use ral_registers::{modify_reg, read_reg, write_reg};
pub use ral_registers::{RORegister, RWRegister, WORegister};

/// Registers whose current value can be read back.
///
/// The bus implements a bit-band write as a read-modify-write, so only
/// these registers take bit-band aliases.
///
/// ```compile_fail
/// use tmpm4g_pac::ral::{Readable, WORegister};
///
/// fn readable<R: Readable>() {}
/// readable::<WORegister<u32>>();
/// ```
pub trait Readable {}
impl<T: Copy> Readable for RORegister<T> {}
impl<T: Copy> Readable for RWRegister<T> {}

/// Generates register field modules.
///
/// Each field is described by its bit offset and bit width, with optional
/// enumerated values. The output follows the RAL layout:
///
/// ```text
/// REG::FIELD::offset
/// REG::FIELD::mask
/// REG::FIELD::{R, W, RW}
/// ```
macro_rules! fields {
    ($(
        $(#[$rattr:meta])*
        $reg:ident: $ty:ty {
            $(
                $(#[$fattr:meta])*
                $field:ident [$offset:literal; $width:literal]
                $( { $( $(#[$vattr:meta])* $value:ident = $n:literal ),* $(,)? } )?
            ),* $(,)?
        }
    )*) => {
        $(
            $(#[$rattr])*
            pub mod $reg {
                $(
                    $(#[$fattr])*
                    pub mod $field {
                        /// Offset of the field, in bits.
                        pub const offset: $ty = $offset;
                        /// Mask of the field, already shifted into position.
                        pub const mask: $ty = (<$ty>::MAX >> (<$ty>::BITS - $width)) << offset;
                        /// Read-only values
                        pub mod R {}
                        /// Write-only values
                        pub mod W {}
                        /// Read-write values
                        pub mod RW {
                            $($(
                                $(#[$vattr])*
                                pub const $value: $ty = $n;
                            )*)?
                        }
                    }
                )*
            }
        )*
    };
}

/// Asserts, at compile time, the size of a register block and the offset
/// of each named register.
macro_rules! assert_layout {
    ($block:ty, size: $size:expr, { $( $reg:ident: $offset:expr ),* $(,)? }) => {
        const _: () = {
            $( assert!(core::mem::offset_of!($block, $reg) == $offset); )*
            assert!(core::mem::size_of::<$block>() == $size);
        };
    };
}

/// Generates named bit-band aliases for one or more peripheral instances.
///
/// Only readable registers take aliases. Naming a write-only register is a
/// compile error.
///
/// Aliases land in one module per instance:
///
/// ```text
/// bitband_aliases! {
///     RegisterBlock;
///     [UART0 = UART0_BASE, UART1 = UART1_BASE];
///     {
///         CR1_DMARE = CR1[0];
///     }
/// }
/// ```
macro_rules! bitband_aliases {
    ($block:ident; [$( $(#[$iattr:meta])* $inst:ident = $base:expr ),+ $(,)?]; $aliases:tt) => {
        $(
            $(#[$iattr])*
            pub mod $inst {
                #[allow(unused_imports)]
                use super::*;
                bitband_aliases!(@aliases $block, $base, $aliases);
            }
        )+
    };
    ($block:ident; $base:expr; $aliases:tt) => {
        bitband_aliases!(@aliases $block, $base, $aliases);
    };
    (@aliases $block:ident, $base:expr, {
        $( $(#[$attr:meta])* $name:ident = $reg:ident[$bit:literal]; )*
    }) => {
        // An alias write is a read-modify-write of the whole word.
        const _: () = {
            #[allow(dead_code)]
            fn readable<R: $crate::ral::Readable>(_: &R) {}
            #[allow(dead_code)]
            fn aliased_registers(block: &$block) {
                $( readable(&block.$reg); )*
            }
        };
        $(
            $(#[$attr])*
            pub const $name: $crate::bitband::BitBand = $crate::bitband::BitBand::peripheral(
                $base + core::mem::offset_of!($block, $reg) as u32,
                $bit,
            );
        )*
    };
}

pub mod adc;
pub mod cg;
pub mod crc;
pub mod dac;
pub mod dma;
pub mod enc;
pub mod fc;
pub mod gpio;
pub mod i2c;
pub mod ia;
pub mod imn;
pub mod lvd;
pub mod ofd;
pub mod pmd;
pub mod ramp;
pub mod rlm;
pub mod rtc;
pub mod siwd;
pub mod t32a;
pub mod trgsel;
pub mod tspi;
pub mod uart;

/// An owned handle to a peripheral instance.
///
/// `RB` is the instance's register block; `N` is the instance number, so
/// that UART0 and UART1 are distinct types. The handle dereferences to the
/// register block, which makes it usable as the instance argument of the
/// RAL macros.
///
/// Handles are not `Copy`. Use [`Peripherals::take`](crate::Peripherals::take)
/// to acquire every handle at most once.
pub struct Instance<RB, const N: u8> {
    ptr: *const RB,
}

impl<RB, const N: u8> Instance<RB, N> {
    /// The instance number.
    pub const INST: u8 = N;

    /// Create a handle to the register block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to the register block of instance `N`. The handle
    /// may alias global, mutable state. Create at most one handle per
    /// instance, or synchronize access yourself.
    pub const unsafe fn new(ptr: *const RB) -> Self {
        Self { ptr }
    }

    /// Returns the register block's address.
    pub const fn as_ptr(&self) -> *const RB {
        self.ptr
    }

    /// Release the handle, returning the register block pointer.
    pub fn release(self) -> *const RB {
        self.ptr
    }
}

impl<RB, const N: u8> core::ops::Deref for Instance<RB, N> {
    type Target = RB;
    fn deref(&self) -> &Self::Target {
        // Safety: pointer points to static memory (peripheral memory)
        unsafe { &*self.ptr }
    }
}

// Safety: a handle is the exclusive owner of its peripheral. Moving it to
// another execution context moves that ownership.
unsafe impl<RB, const N: u8> Send for Instance<RB, N> {}

impl<RB, const N: u8> core::fmt::Debug for Instance<RB, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("inst", &N)
            .field("addr", &self.ptr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{uart, Instance};

    #[test]
    fn instance_derefs_to_block() {
        let mut mem = [0u32; 10];
        let base = mem.as_mut_ptr();
        // Safety: the buffer is large enough for a UART block, and is the
        // only handle.
        let uart3: uart::UART3 = unsafe { Instance::new(base.cast_const().cast()) };
        assert_eq!(uart::UART3::INST, 3);
        uart3.BRD.write(0x1234);
        assert_eq!(unsafe { base.add(4).read() }, 0x1234);
        assert_eq!(uart3.release().cast::<u32>(), base.cast_const());
    }

    #[test]
    fn aliased_registers_read_back() {
        use super::{dma, Readable};
        use crate::memory_map::{DMAB_BASE, UART4_BASE};

        fn readable<R: Readable>(_: &R) {}
        let mem = [0u32; 0x50 / 4];
        let block = unsafe { &*(mem.as_ptr().cast::<dma::RegisterBlock>()) };
        readable(&block.STATUS);
        readable(&block.CTRLBASEPTR);

        // The enable bit is observed through STATUS, not the write-only CFG.
        let enable = dma::bitband::DMAB::STATUS_MASTER_ENABLE;
        assert_eq!(enable.register(), DMAB_BASE);
        assert_eq!(enable.bit(), 0);
        assert_eq!(uart::bitband::UART4::TRANS_TXE.register(), UART4_BASE + 0x14);
    }

    #[test]
    fn field_masks_cover_width() {
        assert_eq!(uart::BRD::BRN::offset, 0);
        assert_eq!(uart::BRD::BRN::mask, 0xFFFF);
        assert_eq!(uart::CR0::SM::mask, 0b11);
        assert_eq!(uart::CR0::NF::mask, 0b111 << 12);
        assert_eq!(uart::CR0::SM::RW::NineBit, 0b10);
    }
}
