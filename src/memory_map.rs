//! Base addresses
//!
//! Physical base address of every memory region and peripheral instance.
//! The peripheral register blocks in [`ral`](crate::ral) overlay these
//! addresses.

/// Code flash.
pub const FLASH_BASE: u32 = 0x0000_0000;
/// Data flash.
pub const DATA_FLASH_BASE: u32 = 0x3000_0000;
/// Main SRAM.
pub const SRAM_BASE: u32 = 0x2000_0000;
/// Start of the peripheral region, and of its bit-band region.
pub const PERI_BASE: u32 = 0x4000_0000;

/// Size of the bit-band region that starts at [`PERI_BASE`].
pub const PERI_BITBAND_SIZE: u32 = 0x0010_0000;

pub const IA_BASE: u32 = PERI_BASE + 0x0003_E000;
pub const RLM_BASE: u32 = PERI_BASE + 0x0003_E400;
pub const IMN_BASE: u32 = PERI_BASE + 0x0003_E800;
pub const RAMP_BASE: u32 = PERI_BASE + 0x0003_F000;

pub const DMAA_BASE: u32 = PERI_BASE + 0x0004_C000;
pub const DMAB_BASE: u32 = PERI_BASE + 0x0004_D000;

pub const CG_BASE: u32 = PERI_BASE + 0x0008_3000;
pub const ADA_BASE: u32 = PERI_BASE + 0x0008_7000;

pub const TRGSEL_BASE: u32 = PERI_BASE + 0x000A_3000;

pub const CRC_BASE: u32 = PERI_BASE + 0x000B_A000;
pub const DA0_BASE: u32 = PERI_BASE + 0x000B_C000;
pub const DA1_BASE: u32 = PERI_BASE + 0x000B_C400;

pub const T32A0_BASE: u32 = PERI_BASE + 0x000C_1000;
pub const T32A1_BASE: u32 = PERI_BASE + 0x000C_1400;
pub const T32A2_BASE: u32 = PERI_BASE + 0x000C_1800;
pub const T32A3_BASE: u32 = PERI_BASE + 0x000C_1C00;
pub const T32A4_BASE: u32 = PERI_BASE + 0x000C_2000;
pub const T32A5_BASE: u32 = PERI_BASE + 0x000C_2400;
pub const T32A6_BASE: u32 = PERI_BASE + 0x000C_2800;
pub const T32A7_BASE: u32 = PERI_BASE + 0x000C_2C00;

pub const TSPI0_BASE: u32 = PERI_BASE + 0x000C_A000;
pub const TSPI1_BASE: u32 = PERI_BASE + 0x000C_A400;
pub const TSPI2_BASE: u32 = PERI_BASE + 0x000C_A800;
pub const TSPI3_BASE: u32 = PERI_BASE + 0x000C_AC00;
pub const TSPI4_BASE: u32 = PERI_BASE + 0x000C_B000;

pub const RTC_BASE: u32 = PERI_BASE + 0x000C_C000;
pub const SIWD0_BASE: u32 = PERI_BASE + 0x000C_D000;

pub const UART0_BASE: u32 = PERI_BASE + 0x000C_E000;
pub const UART1_BASE: u32 = PERI_BASE + 0x000C_E400;
pub const UART2_BASE: u32 = PERI_BASE + 0x000C_E800;
pub const UART3_BASE: u32 = PERI_BASE + 0x000C_EC00;
pub const UART4_BASE: u32 = PERI_BASE + 0x000C_F000;
pub const UART5_BASE: u32 = PERI_BASE + 0x000C_F400;

pub const I2C0_BASE: u32 = PERI_BASE + 0x000D_1000;
pub const I2C1_BASE: u32 = PERI_BASE + 0x000D_1400;
pub const I2C2_BASE: u32 = PERI_BASE + 0x000D_1800;
pub const I2C3_BASE: u32 = PERI_BASE + 0x000D_1C00;
pub const I2C4_BASE: u32 = PERI_BASE + 0x000D_2000;

pub const PA_BASE: u32 = PERI_BASE + 0x000E_0000;
pub const PB_BASE: u32 = PERI_BASE + 0x000E_0100;
pub const PC_BASE: u32 = PERI_BASE + 0x000E_0200;
pub const PD_BASE: u32 = PERI_BASE + 0x000E_0300;
pub const PE_BASE: u32 = PERI_BASE + 0x000E_0400;
pub const PF_BASE: u32 = PERI_BASE + 0x000E_0500;
pub const PG_BASE: u32 = PERI_BASE + 0x000E_0600;
pub const PH_BASE: u32 = PERI_BASE + 0x000E_0700;
pub const PJ_BASE: u32 = PERI_BASE + 0x000E_0800;
pub const PK_BASE: u32 = PERI_BASE + 0x000E_0900;
pub const PL_BASE: u32 = PERI_BASE + 0x000E_0A00;
pub const PM_BASE: u32 = PERI_BASE + 0x000E_0B00;
pub const PN_BASE: u32 = PERI_BASE + 0x000E_0C00;
pub const PP_BASE: u32 = PERI_BASE + 0x000E_0D00;

cfg_if::cfg_if! {
    if #[cfg(feature = "tmpm4g6")] {
        // 100 pin package: PR and above are not bonded out.
    } else {
        pub const PR_BASE: u32 = PERI_BASE + 0x000E_0E00;
        pub const PT_BASE: u32 = PERI_BASE + 0x000E_0F00;
        pub const PU_BASE: u32 = PERI_BASE + 0x000E_1000;
        pub const PV_BASE: u32 = PERI_BASE + 0x000E_1100;
        pub const PW_BASE: u32 = PERI_BASE + 0x000E_1200;
        pub const PY_BASE: u32 = PERI_BASE + 0x000E_1300;
    }
}

pub const PMD0_BASE: u32 = PERI_BASE + 0x000E_9000;

pub const OFD_BASE: u32 = PERI_BASE + 0x000F_1000;
pub const LVD_BASE: u32 = PERI_BASE + 0x000F_4000;

pub const EN0_BASE: u32 = PERI_BASE + 0x000F_7000;
pub const EN1_BASE: u32 = PERI_BASE + 0x000F_7400;
pub const EN2_BASE: u32 = PERI_BASE + 0x000F_7800;

/// Flash controller. Outside the peripheral bit-band region.
pub const FC_BASE: u32 = 0x5DFF_0000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_instances() {
        assert_eq!(UART5_BASE - UART0_BASE, 5 * 0x400);
        assert_eq!(TSPI4_BASE - TSPI0_BASE, 4 * 0x400);
        assert_eq!(T32A7_BASE - T32A0_BASE, 7 * 0x400);
        assert_eq!(PP_BASE - PA_BASE, 13 * 0x100);
    }

    #[test]
    fn peripherals_inside_bitband_region() {
        for base in [IA_BASE, DMAB_BASE, CG_BASE, I2C4_BASE, PMD0_BASE, EN2_BASE] {
            assert!(base >= PERI_BASE && base < PERI_BASE + PERI_BITBAND_SIZE);
        }
        assert!(FC_BASE >= PERI_BASE + PERI_BITBAND_SIZE);
    }
}
