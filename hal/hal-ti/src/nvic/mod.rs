//! NVIC driver
//!
//! [`Nvic`] owns a register-access capability, a processor gate and the
//! device configuration. The operations are split by concern:
//!
//! - [`master`]   – processor interrupt gate
//! - [`priority`] – grouping and per-line priority bytes
//! - [`line`]     – enable, pend and trigger of individual lines
//!
//! Preconditions are checked with `debug_assert!` only. The checked surface
//! is the [`InterruptController`] implementation at the bottom of this file.

use hal::{HalError, HalResult, InterruptController, InterruptPriority};

use crate::access::{CpuMask, RegisterAccess};
use crate::config::NvicConfig;
use crate::ints::INT_PERIPHERAL_BASE;

pub mod line;
pub mod master;
pub mod priority;

/// Lowest identifier that owns a priority byte.
pub const FIRST_PRIORITY_ID: u32 = 4;

/// Interrupt controller driver.
#[derive(Debug)]
pub struct Nvic<R, C> {
    regs: R,
    cpu: C,
    config: NvicConfig,
}

impl<R, C> Nvic<R, C> {
    /// Create a driver over `regs` and `cpu` for the part described by `config`.
    pub const fn new(regs: R, cpu: C, config: NvicConfig) -> Self {
        Self { regs, cpu, config }
    }

    /// Device configuration.
    pub const fn config(&self) -> NvicConfig {
        self.config
    }

    /// Underlying register access.
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Underlying processor gate.
    pub fn cpu(&self) -> &C {
        &self.cpu
    }

    /// Release the capabilities.
    pub fn free(self) -> (R, C) {
        (self.regs, self.cpu)
    }

    #[inline]
    fn assert_line(&self, id: u32) {
        debug_assert!(
            self.config.contains(0, id),
            "invalid interrupt identifier {}",
            id
        );
    }

    #[inline]
    fn assert_priority_line(&self, id: u32) {
        debug_assert!(
            self.config.contains(FIRST_PRIORITY_ID, id),
            "invalid interrupt identifier {} for priority",
            id
        );
    }

    #[inline]
    fn assert_peripheral_line(&self, id: u32) {
        debug_assert!(
            self.config.contains(INT_PERIPHERAL_BASE, id),
            "invalid interrupt identifier {} for trigger",
            id
        );
    }

    fn check(&self, low: u32, id: u32) -> HalResult<()> {
        if self.config.contains(low, id) {
            Ok(())
        } else {
            Err(HalError::InvalidParameter)
        }
    }
}

#[cfg(target_arch = "arm")]
impl Nvic<crate::access::Mmio, crate::access::CortexM> {
    /// Driver for the running core with the feature-selected configuration.
    ///
    /// # Safety
    ///
    /// See [`crate::access::Mmio::new`].
    pub const unsafe fn cortex_m() -> Self {
        Self::new(
            crate::access::Mmio::new(),
            crate::access::CortexM,
            NvicConfig::DEFAULT,
        )
    }
}

impl<R, C> InterruptController for Nvic<R, C>
where
    R: RegisterAccess + Send + Sync,
    C: CpuMask + Send + Sync,
{
    fn enable_interrupt(&mut self, irq_num: u32) -> HalResult<()> {
        self.check(0, irq_num)?;
        self.enable(irq_num);
        Ok(())
    }

    fn disable_interrupt(&mut self, irq_num: u32) -> HalResult<()> {
        self.check(0, irq_num)?;
        self.disable(irq_num);
        Ok(())
    }

    fn is_enabled(&self, irq_num: u32) -> bool {
        self.check(0, irq_num).is_ok() && Self::is_enabled(self, irq_num)
    }

    fn set_priority(&mut self, irq_num: u32, priority: InterruptPriority) -> HalResult<()> {
        self.check(FIRST_PRIORITY_ID, irq_num)?;
        self.priority_set(irq_num, priority);
        Ok(())
    }

    fn priority(&self, irq_num: u32) -> HalResult<InterruptPriority> {
        self.check(FIRST_PRIORITY_ID, irq_num)?;
        Ok(self.priority_get(irq_num))
    }

    fn set_pending(&mut self, irq_num: u32) -> HalResult<()> {
        self.check(0, irq_num)?;
        self.pend_set(irq_num);
        Ok(())
    }

    fn is_pending(&self, irq_num: u32) -> bool {
        self.check(0, irq_num).is_ok() && Self::is_pending(self, irq_num)
    }

    fn clear_pending(&mut self, irq_num: u32) -> HalResult<()> {
        self.check(0, irq_num)?;
        self.pend_clear(irq_num);
        Ok(())
    }

    fn trigger(&mut self, irq_num: u32) -> HalResult<()> {
        self.check(0, irq_num)?;
        if irq_num < INT_PERIPHERAL_BASE {
            return Err(HalError::NotSupported);
        }
        Self::trigger(self, irq_num);
        Ok(())
    }
}
