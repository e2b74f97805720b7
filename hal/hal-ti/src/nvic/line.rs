//! Line control: enable, disable, pend, unpend and software trigger

use crate::access::RegisterAccess;
use crate::class::InterruptClass;
use crate::ints::INT_PERIPHERAL_BASE;
use crate::macros::nvic_trace;
use crate::regs::{
    DISABLE_REGS, ENABLE_REGS, INT_CTRL, PEND_REGS, SW_TRIG, UNPEND_REGS,
};

use super::Nvic;

impl<R: RegisterAccess, C> Nvic<R, C> {
    /// Enable an interrupt in the controller.
    ///
    /// Peripheral-level enables are unaffected. Identifiers below 16 without
    /// an enable bit (NMI, PendSV, SVCall, ...) are ignored.
    pub fn enable(&self, id: u32) {
        self.assert_line(id);
        nvic_trace!("nvic: enable {=u32}", id);

        match InterruptClass::of(id) {
            InterruptClass::SystemFault(fault) => {
                if let Some((reg, mask)) = fault.enable_bit() {
                    self.regs.modify(reg, |value| value | mask);
                }
            }
            InterruptClass::General { bank, bit } => {
                self.regs.write(ENABLE_REGS[bank], 1 << bit);
            }
            InterruptClass::Unmodeled => {}
        }
    }

    /// Disable an interrupt in the controller.
    pub fn disable(&self, id: u32) {
        self.assert_line(id);
        nvic_trace!("nvic: disable {=u32}", id);

        match InterruptClass::of(id) {
            InterruptClass::SystemFault(fault) => {
                if let Some((reg, mask)) = fault.enable_bit() {
                    self.regs.modify(reg, |value| value & !mask);
                }
            }
            InterruptClass::General { bank, bit } => {
                self.regs.write(DISABLE_REGS[bank], 1 << bit);
            }
            InterruptClass::Unmodeled => {}
        }
    }

    /// Whether an interrupt is enabled in the controller.
    pub fn is_enabled(&self, id: u32) -> bool {
        self.assert_line(id);

        match InterruptClass::of(id) {
            InterruptClass::SystemFault(fault) => match fault.enable_bit() {
                Some((reg, mask)) => self.regs.read(reg) & mask != 0,
                None => false,
            },
            InterruptClass::General { bank, bit } => {
                self.regs.read(ENABLE_REGS[bank]) & (1 << bit) != 0
            }
            InterruptClass::Unmodeled => false,
        }
    }

    /// Pend an interrupt.
    ///
    /// The handler runs at the next opportunity allowed by priority, and only
    /// once the line is enabled; a disabled line stays latched.
    pub fn pend_set(&self, id: u32) {
        self.assert_line(id);
        nvic_trace!("nvic: pend {=u32}", id);

        match InterruptClass::of(id) {
            InterruptClass::SystemFault(fault) => {
                // Zero bits in INT_CTRL are ignored on write.
                if let Some(mask) = fault.pend_bit() {
                    self.regs.write(INT_CTRL, mask);
                }
            }
            InterruptClass::General { bank, bit } => {
                self.regs.write(PEND_REGS[bank], 1 << bit);
            }
            InterruptClass::Unmodeled => {}
        }
    }

    /// Un-pend an interrupt, discarding any occurrence not yet dispatched.
    pub fn pend_clear(&self, id: u32) {
        self.assert_line(id);
        nvic_trace!("nvic: unpend {=u32}", id);

        match InterruptClass::of(id) {
            InterruptClass::SystemFault(fault) => {
                if let Some(mask) = fault.unpend_bit() {
                    self.regs.write(INT_CTRL, mask);
                }
            }
            InterruptClass::General { bank, bit } => {
                self.regs.write(UNPEND_REGS[bank], 1 << bit);
            }
            InterruptClass::Unmodeled => {}
        }
    }

    /// Whether an interrupt is pending.
    pub fn is_pending(&self, id: u32) -> bool {
        self.assert_line(id);

        match InterruptClass::of(id) {
            InterruptClass::SystemFault(fault) => match fault.pend_bit() {
                Some(mask) => self.regs.read(INT_CTRL) & mask != 0,
                None => false,
            },
            InterruptClass::General { bank, bit } => {
                self.regs.read(PEND_REGS[bank]) & (1 << bit) != 0
            }
            InterruptClass::Unmodeled => false,
        }
    }

    /// Software-trigger a peripheral interrupt.
    ///
    /// The controller behaves as if the source asserted the line: it must be
    /// enabled to be taken and competes on priority like any other request.
    pub fn trigger(&self, id: u32) {
        self.assert_peripheral_line(id);
        nvic_trace!("nvic: trigger {=u32}", id);

        self.regs.write(SW_TRIG, id - INT_PERIPHERAL_BASE);
    }
}
