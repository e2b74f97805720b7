//! Interrupt controller abstraction

use crate::error::HalResult;

/// Interrupt priority (0 = highest on most platforms)
pub type InterruptPriority = u8;

/// Interrupt controller abstraction
///
/// Vendor implementations validate `irq_num` against the part they drive and
/// report out-of-range requests as [`HalError::InvalidParameter`] instead of
/// touching the hardware.
///
/// [`HalError::InvalidParameter`]: crate::HalError::InvalidParameter
pub trait InterruptController: Send + Sync {
    /// Enable interrupt
    fn enable_interrupt(&mut self, irq_num: u32) -> HalResult<()>;

    /// Disable interrupt
    fn disable_interrupt(&mut self, irq_num: u32) -> HalResult<()>;

    /// Check if interrupt is enabled
    fn is_enabled(&self, irq_num: u32) -> bool;

    /// Set interrupt priority
    fn set_priority(&mut self, irq_num: u32, priority: InterruptPriority) -> HalResult<()>;

    /// Get interrupt priority
    fn priority(&self, irq_num: u32) -> HalResult<InterruptPriority>;

    /// Force interrupt into the pending state
    fn set_pending(&mut self, irq_num: u32) -> HalResult<()>;

    /// Check if interrupt is pending
    fn is_pending(&self, irq_num: u32) -> bool;

    /// Clear pending interrupt
    fn clear_pending(&mut self, irq_num: u32) -> HalResult<()>;

    /// Software-trigger interrupt as if its source had asserted the line
    fn trigger(&mut self, irq_num: u32) -> HalResult<()>;
}
