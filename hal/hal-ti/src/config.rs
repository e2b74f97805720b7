//! Device configuration

use crate::regs::NUM_PRIORITY_REGS;

#[cfg(all(feature = "tm4c123", feature = "tm4c129"))]
compile_error!("features `tm4c123` and `tm4c129` are mutually exclusive");

/// Largest identifier count the register tables can address.
pub const MAX_INTERRUPTS: u32 = (NUM_PRIORITY_REGS * 4) as u32;

/// Per-device NVIC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NvicConfig {
    /// Total supported identifier count (`N`): system exceptions included.
    pub num_interrupts: u32,
}

impl NvicConfig {
    /// TM4C123 parts.
    pub const TM4C123: Self = Self::new(155);

    /// TM4C129 parts.
    pub const TM4C129: Self = Self::new(130);

    /// Configuration selected by the `tm4c123` / `tm4c129` features.
    #[cfg(not(feature = "tm4c129"))]
    pub const DEFAULT: Self = Self::TM4C123;
    #[cfg(feature = "tm4c129")]
    pub const DEFAULT: Self = Self::TM4C129;

    /// Create a configuration for a part with `num_interrupts` identifiers.
    ///
    /// # Panics
    ///
    /// Panics if the count exceeds what the priority table covers or leaves
    /// no peripheral lines.
    pub const fn new(num_interrupts: u32) -> Self {
        assert!(num_interrupts > 16 && num_interrupts <= MAX_INTERRUPTS);
        Self { num_interrupts }
    }

    /// Check whether `id` is inside `[low, num_interrupts)`.
    pub const fn contains(&self, low: u32, id: u32) -> bool {
        id >= low && id < self.num_interrupts
    }
}

impl Default for NvicConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
