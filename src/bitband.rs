//! Peripheral bit-banding
//!
//! The first megabyte of the peripheral region is mirrored, one bit per
//! word, into an alias region. Reading an alias word returns the bit (0 or 1).
//! Writing an alias word sets or clears the bit, with the read-modify-write
//! performed by the bus matrix as a single transaction.
//!
//! ```
//! use tmpm4g_pac::bitband::{self, BitBand};
//! use tmpm4g_pac::memory_map::CG_BASE;
//!
//! // CG OSCCR (offset 4), bit 0.
//! const IHOSC1EN: BitBand = BitBand::peripheral(CG_BASE + 4, 0);
//! assert_eq!(IHOSC1EN.address(), 0x4306_0080);
//! assert_eq!(bitband::alias_address(CG_BASE + 4, 0), 0x4306_0080);
//! ```

use core::ptr;

use crate::{Error, Result};

pub use crate::memory_map::PERI_BASE;

/// Distance from the bit-band region to its alias region.
pub const BITBAND_OFFSET: u32 = 0x0200_0000;
/// Start of the peripheral alias region.
pub const BITBAND_PERI_BASE: u32 = PERI_BASE + BITBAND_OFFSET;

const REGION_END: u32 = PERI_BASE + crate::memory_map::PERI_BITBAND_SIZE;

/// Compute the alias address of `bit` in the register at `register`.
///
/// This is the raw transform, in modular `u32` arithmetic. It does not
/// check that `register` is inside the bit-band region; addresses outside
/// of it produce a meaningless alias instead of a panic.
pub const fn alias_address(register: u32, bit: u32) -> u32 {
    BITBAND_PERI_BASE
        .wrapping_add(register.wrapping_sub(PERI_BASE).wrapping_shl(5))
        .wrapping_add(bit.wrapping_shl(2))
}

const fn in_region(register: u32) -> bool {
    register >= PERI_BASE && register < REGION_END
}

/// A single-bit alias of a peripheral register.
///
/// A `BitBand` is only an address. Accessing the bit is `unsafe`, just
/// like any other raw peripheral access.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitBand {
    alias: u32,
}

impl BitBand {
    /// Alias `bit` of the register at `register`.
    ///
    /// # Panics
    ///
    /// Panics if `register` is outside of the bit-band region, or if
    /// `bit` is 32 or greater. In a `const` item, that's a compile error.
    pub const fn peripheral(register: u32, bit: u32) -> Self {
        assert!(in_region(register), "register is outside of the bit-band region");
        assert!(bit < 32, "bit index out of range");
        Self {
            alias: alias_address(register, bit),
        }
    }

    /// Alias `bit` of the register at `register`, checking both inputs.
    pub const fn new(register: u32, bit: u32) -> Result<Self> {
        if !in_region(register) {
            Err(Error::OutOfBitBandRegion(register))
        } else if bit >= 32 {
            Err(Error::InvalidBit(bit))
        } else {
            Ok(Self {
                alias: alias_address(register, bit),
            })
        }
    }

    /// Alias `bit` of the register behind `register`.
    ///
    /// Pointers that don't fit in 32 bits are outside of the region.
    pub fn of<T>(register: *const T, bit: u32) -> Result<Self> {
        let addr = register as usize;
        let addr = u32::try_from(addr).map_err(|_| Error::OutOfBitBandRegion(addr as u32))?;
        Self::new(addr, bit)
    }

    /// Returns the alias address.
    pub const fn address(self) -> u32 {
        self.alias
    }

    /// Returns the address of the aliased register.
    ///
    /// Registers are word aligned. Byte and halfword registers report the
    /// word that contains them.
    pub const fn register(self) -> u32 {
        PERI_BASE + (((self.alias - BITBAND_PERI_BASE) >> 5) & !0b11)
    }

    /// Returns the aliased bit, counted from the LSB of the register word.
    pub const fn bit(self) -> u32 {
        ((self.alias - BITBAND_PERI_BASE) >> 2) & 0x1F
    }

    /// Returns the alias as a pointer.
    pub const fn as_ptr(self) -> *mut u32 {
        self.alias as usize as *mut u32
    }

    /// Read the bit.
    ///
    /// # Safety
    ///
    /// The alias must map to readable peripheral memory. Reads of some
    /// registers have side effects.
    #[inline(always)]
    pub unsafe fn read(self) -> bool {
        ptr::read_volatile(self.as_ptr()) & 1 != 0
    }

    /// Write the bit.
    ///
    /// # Safety
    ///
    /// The alias must map to writable peripheral memory, and the caller
    /// must be allowed to modify the register.
    #[inline(always)]
    pub unsafe fn write(self, set: bool) {
        ptr::write_volatile(self.as_ptr(), set as u32)
    }

    /// Set the bit.
    ///
    /// # Safety
    ///
    /// See [`write`](Self::write).
    #[inline(always)]
    pub unsafe fn set(self) {
        self.write(true)
    }

    /// Clear the bit.
    ///
    /// # Safety
    ///
    /// See [`write`](Self::write).
    #[inline(always)]
    pub unsafe fn clear(self) {
        self.write(false)
    }
}

impl core::fmt::Debug for BitBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "BitBand({:#010X}[{}] @ {:#010X})",
            self.register(),
            self.bit(),
            self.alias
        )
    }
}

/// Aliases of bits `0..N` of the register at `register`.
///
/// # Panics
///
/// Same as [`BitBand::peripheral`]. `N` must not exceed 32.
pub const fn bits<const N: usize>(register: u32) -> [BitBand; N] {
    let mut aliases = [BitBand { alias: 0 }; N];
    let mut bit = 0;
    while bit < N {
        aliases[bit] = BitBand::peripheral(register, bit as u32);
        bit += 1;
    }
    aliases
}

/// Aliases of the same `bit` in `N` registers, `stride` bytes apart.
///
/// For register arrays, like the ADC conversion results.
///
/// # Panics
///
/// Same as [`BitBand::peripheral`].
pub const fn strided<const N: usize>(first: u32, stride: u32, bit: u32) -> [BitBand; N] {
    let mut aliases = [BitBand { alias: 0 }; N];
    let mut n = 0;
    while n < N {
        aliases[n] = BitBand::peripheral(first + n as u32 * stride, bit);
        n += 1;
    }
    aliases
}

/// Set `bit` of `register` through its alias.
///
/// # Safety
///
/// See [`write`].
pub unsafe fn set<T>(register: *const T, bit: u32) {
    write(register, bit, true);
}

/// Clear `bit` of `register` through its alias.
///
/// # Safety
///
/// See [`write`].
pub unsafe fn clear<T>(register: *const T, bit: u32) {
    write(register, bit, false);
}

/// Write `bit` of `register` through its alias.
///
/// # Safety
///
/// `register` must point to a writable register in the bit-band region.
///
/// # Panics
///
/// Panics if `register` is outside of the bit-band region, or `bit` is
/// out of range.
pub unsafe fn write<T>(register: *const T, bit: u32, set: bool) {
    BitBand::peripheral(register_address(register), bit).write(set)
}

/// Read `bit` of `register` through its alias.
///
/// # Safety
///
/// `register` must point to a readable register in the bit-band region.
///
/// # Panics
///
/// Panics if `register` is outside of the bit-band region, or `bit` is
/// out of range.
pub unsafe fn read<T>(register: *const T, bit: u32) -> bool {
    BitBand::peripheral(register_address(register), bit).read()
}

/// Pointers beyond 32 bits map to an address that fails the region check.
fn register_address<T>(register: *const T) -> u32 {
    u32::try_from(register as usize).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::{CG_BASE, FC_BASE, PA_BASE, SRAM_BASE, UART0_BASE};

    #[test]
    fn cg_oscillator_enable() {
        assert_eq!(alias_address(CG_BASE + 0x4, 0), 0x4306_0080);
        assert_eq!(crate::ral::cg::bitband::OSCCR_IHOSC1EN.address(), 0x4306_0080);
    }

    #[test]
    fn transform_is_modular_outside_region() {
        assert_eq!(alias_address(FC_BASE, 0), 0x01E0_0000);
        assert_eq!(alias_address(SRAM_BASE, 1), 0x4200_0004);
        assert_eq!(alias_address(u32::MAX, u32::MAX), 0x41FF_FFDC);
    }

    #[test]
    fn region_corners() {
        assert_eq!(BitBand::peripheral(PERI_BASE, 0).address(), 0x4200_0000);
        assert_eq!(BitBand::peripheral(PERI_BASE, 31).address(), 0x4200_007C);
        assert_eq!(
            BitBand::peripheral(REGION_END - 4, 31).address(),
            0x43FF_FFFC
        );
    }

    #[test]
    fn inverse_transform() {
        let alias = BitBand::peripheral(UART0_BASE + 0x1C, 9);
        assert_eq!(alias.register(), UART0_BASE + 0x1C);
        assert_eq!(alias.bit(), 9);

        // A byte register at offset 2 reports its word, with the bit
        // counted from the start of that word.
        let alias = BitBand::peripheral(PA_BASE + 2, 1);
        assert_eq!(alias.register(), PA_BASE);
        assert_eq!(alias.bit(), 17);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(BitBand::new(0x2000_0000, 0), Err(Error::OutOfBitBandRegion(0x2000_0000)));
        assert_eq!(BitBand::new(REGION_END, 0), Err(Error::OutOfBitBandRegion(REGION_END)));
        assert_eq!(BitBand::new(CG_BASE, 32), Err(Error::InvalidBit(32)));
        assert_eq!(BitBand::new(CG_BASE, 3), Ok(BitBand::peripheral(CG_BASE, 3)));
        assert!(BitBand::of(0x5DFF_0000 as *const u32, 0).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn of_rejects_pointers_beyond_32_bits() {
        // The low 32 bits land inside the region.
        let high = (0x1_0000_0000usize + CG_BASE as usize) as *const u32;
        assert!(matches!(BitBand::of(high, 0), Err(Error::OutOfBitBandRegion(_))));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic]
    fn free_functions_reject_pointers_beyond_32_bits() {
        let high = (0x1_0000_0000usize + CG_BASE as usize) as *const u32;
        let _ = unsafe { read(high, 0) };
    }

    #[test]
    #[should_panic]
    fn peripheral_panics_outside_region() {
        let _ = BitBand::peripheral(0x5DFF_0000, 0);
    }

    #[test]
    fn consecutive_bits() {
        let aliases: [BitBand; 8] = bits(PA_BASE);
        for (bit, alias) in aliases.iter().enumerate() {
            assert_eq!(alias.address(), alias_address(PA_BASE, bit as u32));
            assert_eq!(alias.address() - aliases[0].address(), 4 * bit as u32);
        }
    }

    /// Emulates the bus matrix: peripheral words, and the alias region
    /// that maps onto them.
    struct Emulated {
        base: u32,
        words: [u32; 16],
    }

    impl Emulated {
        fn alias_store(&mut self, alias: BitBand, set: bool) {
            let word = &mut self.words[((alias.register() - self.base) / 4) as usize];
            if set {
                *word |= 1 << alias.bit();
            } else {
                *word &= !(1 << alias.bit());
            }
        }
        fn alias_load(&self, alias: BitBand) -> bool {
            self.words[((alias.register() - self.base) / 4) as usize] & (1 << alias.bit()) != 0
        }
    }

    #[test]
    fn register_and_alias_agree() {
        use crate::ral::{self, uart};

        let mut bus = Emulated {
            base: UART0_BASE,
            words: [0; 16],
        };

        // Write through the register block...
        {
            let base = bus.words.as_mut_ptr();
            let uart0 = unsafe { &*(base.cast_const().cast::<uart::RegisterBlock>()) };
            ral::write_reg!(ral::uart, uart0, CR1, DMARE: Enabled, INTTXWE: Enabled);
        }
        // ...observe through the aliases.
        assert!(bus.alias_load(uart::bitband::UART0::CR1_DMARE));
        assert!(bus.alias_load(uart::bitband::UART0::CR1_INTTXWE));
        assert!(!bus.alias_load(uart::bitband::UART0::CR1_DMATE));

        // Write through an alias, observe through the register block.
        bus.alias_store(uart::bitband::UART0::CR1_DMATE, true);
        bus.alias_store(uart::bitband::UART0::CR1_DMARE, false);
        let base = bus.words.as_mut_ptr();
        let uart0 = unsafe { &*(base.cast_const().cast::<uart::RegisterBlock>()) };
        assert_eq!(ral::read_reg!(ral::uart, uart0, CR1, DMATE), 1);
        assert_eq!(ral::read_reg!(ral::uart, uart0, CR1, DMARE), 0);
        assert!(ral::read_reg!(ral::uart, uart0, CR1, INTTXWE == Enabled));
    }
}
