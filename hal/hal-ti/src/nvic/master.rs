//! Processor interrupt gate

use crate::access::CpuMask;
use crate::macros::nvic_trace;

use super::Nvic;

impl<R, C: CpuMask> Nvic<R, C> {
    /// Let the processor take interrupts.
    ///
    /// Only gates the controller's output to the core; per-line enables are
    /// untouched. Returns `true` if interrupts were disabled before the call.
    pub fn master_enable(&self) -> bool {
        nvic_trace!("nvic: master enable");
        self.cpu.enable_irq()
    }

    /// Stop the processor from taking interrupts. Pending lines stay pending.
    ///
    /// Returns `true` if interrupts were already disabled.
    pub fn master_disable(&self) -> bool {
        nvic_trace!("nvic: master disable");
        self.cpu.disable_irq()
    }

    /// Whether the processor currently takes interrupts.
    pub fn is_master_enabled(&self) -> bool {
        self.cpu.irq_enabled()
    }

    /// Run `f` with interrupts disabled at the processor.
    ///
    /// Interrupts are re-enabled afterwards only if they were enabled on entry,
    /// so calls nest. The gate is restored even if `f` unwinds.
    pub fn masked<T, F>(&self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _guard = MaskGuard {
            cpu: &self.cpu,
            was_disabled: self.cpu.disable_irq(),
        };
        f()
    }
}

/// Guard that restores the processor gate when dropped.
struct MaskGuard<'a, C: CpuMask> {
    cpu: &'a C,
    was_disabled: bool,
}

impl<C: CpuMask> Drop for MaskGuard<'_, C> {
    fn drop(&mut self) {
        if !self.was_disabled {
            self.cpu.enable_irq();
        }
    }
}
