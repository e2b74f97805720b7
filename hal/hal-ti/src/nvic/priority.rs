//! Priority grouping and per-interrupt priority

use crate::access::RegisterAccess;
use crate::grouping;
use crate::ints::NUM_PRIORITY;
use crate::macros::nvic_trace;
use crate::regs::{APINT, APINT_PRIGROUP_M, APINT_VECTKEY, PRIORITY_REGS};

use super::Nvic;

/// Bit offset of the priority byte for `id` inside its register.
#[inline]
const fn lane_shift(id: u32) -> u32 {
    8 * (id & 3)
}

impl<R: RegisterAccess, C> Nvic<R, C> {
    /// Set the number of preemption priority bits.
    ///
    /// Tiva parts implement three priority bits, so 3 through 7 behave the
    /// same. Changing the grouping alters live priority comparisons; do it
    /// before enabling any line.
    pub fn priority_grouping_set(&self, bits: u32) {
        debug_assert!(bits < NUM_PRIORITY, "invalid priority grouping {}", bits);
        nvic_trace!("nvic: priority grouping {=u32}", bits);

        self.regs.write(APINT, APINT_VECTKEY | grouping::encode(bits));
    }

    /// Number of preemption priority bits currently configured.
    ///
    /// Returns [`NUM_PRIORITY`] if the hardware field matches no encoding.
    pub fn priority_grouping_get(&self) -> u32 {
        grouping::decode(self.regs.read(APINT) & APINT_PRIGROUP_M)
    }

    /// Set the priority of an interrupt. Lower values are more urgent.
    ///
    /// Only the upper bits reach the hardware comparator; the rest can be
    /// used for software sub-prioritization. Four identifiers share each
    /// register and this is a read-modify-write: serialize calls from
    /// different contexts with [`Nvic::masked`].
    pub fn priority_set(&self, id: u32, priority: u8) {
        self.assert_priority_line(id);
        nvic_trace!("nvic: priority {=u32} <- {=u8}", id, priority);

        let shift = lane_shift(id);
        self.regs.modify(PRIORITY_REGS[(id >> 2) as usize], |value| {
            (value & !(0xFF << shift)) | (u32::from(priority) << shift)
        });
    }

    /// Priority of an interrupt.
    pub fn priority_get(&self, id: u32) -> u8 {
        self.assert_priority_line(id);

        (self.regs.read(PRIORITY_REGS[(id >> 2) as usize]) >> lane_shift(id)) as u8
    }
}
