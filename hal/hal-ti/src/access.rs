//! Register and processor access capabilities
//!
//! The driver never dereferences an address itself. Every load and store goes
//! through [`RegisterAccess`], and the processor interrupt gate goes through
//! [`CpuMask`], so host builds can drive it against [`crate::sim`].

/// Word-sized access to memory-mapped registers.
///
/// Each call must be exactly one load or one store, not merged, reordered or
/// cached: hardware may change a register between a read and the following
/// write.
pub trait RegisterAccess {
    /// Load the word at `addr`.
    fn read(&self, addr: u32) -> u32;

    /// Store `value` at `addr`.
    fn write(&self, addr: u32, value: u32);

    /// Read-modify-write the word at `addr`.
    ///
    /// Not atomic: a concurrent writer between the load and the store is lost.
    #[inline]
    fn modify<F>(&self, addr: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(addr);
        self.write(addr, f(value));
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    #[inline]
    fn read(&self, addr: u32) -> u32 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&self, addr: u32, value: u32) {
        (**self).write(addr, value)
    }
}

/// Volatile access to the physical register file.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a handle on the live register file.
    ///
    /// # Safety
    ///
    /// The caller must be running on a Cortex-M part whose system control
    /// space is mapped at the standard addresses.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline]
    fn read(&self, addr: u32) -> u32 {
        // SAFETY: `Mmio::new` guarantees the system control space is mapped.
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    #[inline]
    fn write(&self, addr: u32, value: u32) {
        // SAFETY: `Mmio::new` guarantees the system control space is mapped.
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}

/// Processor-level interrupt gate.
pub trait CpuMask {
    /// Allow the processor to take interrupts. Returns `true` if they were
    /// disabled before the call.
    fn enable_irq(&self) -> bool;

    /// Block interrupts at the processor. Returns `true` if they were already
    /// disabled.
    fn disable_irq(&self) -> bool;

    /// Whether the processor currently takes interrupts.
    fn irq_enabled(&self) -> bool;
}

impl<T: CpuMask + ?Sized> CpuMask for &T {
    #[inline]
    fn enable_irq(&self) -> bool {
        (**self).enable_irq()
    }

    #[inline]
    fn disable_irq(&self) -> bool {
        (**self).disable_irq()
    }

    #[inline]
    fn irq_enabled(&self) -> bool {
        (**self).irq_enabled()
    }
}

/// PRIMASK based gate of the running Cortex-M core.
#[cfg(target_arch = "arm")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CortexM;

#[cfg(target_arch = "arm")]
impl CpuMask for CortexM {
    #[inline]
    fn enable_irq(&self) -> bool {
        let was_disabled = cortex_m::register::primask::read().is_inactive();
        // SAFETY: re-enabling interrupts is the explicit request of the caller;
        // no critical section of this driver is open here.
        unsafe { cortex_m::interrupt::enable() };
        was_disabled
    }

    #[inline]
    fn disable_irq(&self) -> bool {
        let was_disabled = cortex_m::register::primask::read().is_inactive();
        cortex_m::interrupt::disable();
        was_disabled
    }

    #[inline]
    fn irq_enabled(&self) -> bool {
        cortex_m::register::primask::read().is_active()
    }
}
