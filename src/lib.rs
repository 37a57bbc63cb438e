//! Peripheral access layer for Toshiba TXZ+ TMPM4G microcontrollers.
//!
//! `tmpm4g-pac` provides
//!
//! - register blocks for every on-chip peripheral, in the [`ral`] module,
//!   usable with the `read_reg!`, `write_reg!` and `modify_reg!` macros.
//! - base addresses of each peripheral instance, in [`memory_map`].
//! - interrupt numbers that work with the `cortex-m` NVIC, in [`interrupt`].
//! - single-bit aliases in the Cortex-M4 bit-band region, in [`bitband`].
//!
//! This crate performs no configuration on its own. A hardware abstraction
//! layer (HAL) builds drivers on top of it. If you're using a HAL, prefer its
//! safer APIs.
//!
//! # Getting started
//!
//! Take the peripheral handles once, then move them into the code that
//! drives them. Each handle dereferences to its register block.
//!
//! ```no_run
//! use tmpm4g_pac::{ral, Peripherals};
//!
//! let periphs = Peripherals::take().unwrap();
//! let cg = periphs.CG;
//!
//! ral::write_reg!(ral::cg, cg, PROTECT, PROTECT: Unlocked);
//! ral::modify_reg!(ral::cg, cg, OSCCR, IHOSC2EN: Enabled);
//! while ral::read_reg!(ral::cg, cg, OSCCR, IHOSC2F == Unstable) {}
//! ral::write_reg!(ral::cg, cg, PROTECT, PROTECT: Locked);
//! ```
//!
//! Single bits inside the peripheral region can also be changed without a
//! read-modify-write, through their bit-band alias:
//!
//! ```no_run
//! use tmpm4g_pac::ral::uart;
//!
//! // Safety: UART0 is owned by this code.
//! unsafe { uart::bitband::UART0::CR1_DMATE.set() };
//! ```
//!
//! # Packages
//!
//! The default `tmpm4g9` feature describes the 176 pin package. Enable
//! `tmpm4g6` for the 100 pin package, which doesn't have GPIO ports PR
//! through PY. `tmpm4g6` wins when both are enabled.
//!
//! ### License
//!
//! Licensed under either of
//!
//! - [Apache License, Version 2.0](http://www.apache.org/licenses/LICENSE-2.0) ([LICENSE-APACHE](./LICENSE-APACHE))
//! - [MIT License](http://opensource.org/licenses/MIT) ([LICENSE-MIT](./LICENSE-MIT))
//!
//! at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted
//! for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
//! dual licensed as above, without any additional terms or conditions.

#![no_std]

pub mod bitband;
mod error;
pub mod interrupt;
pub mod memory_map;
mod peripherals;
pub mod ral;

pub use error::Error;
pub use interrupt::{Exception, Interrupt};
pub use peripherals::Peripherals;

/// A conversion result
pub type Result<T> = core::result::Result<T, Error>;
