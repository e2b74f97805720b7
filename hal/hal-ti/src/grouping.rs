//! Priority grouping codec
//!
//! Maps the number of preemption priority bits (0..=7) to the APINT PRIGROUP
//! field and back.

use crate::ints::NUM_PRIORITY;
use crate::regs::{
    APINT_PRIGROUP_0_8, APINT_PRIGROUP_1_7, APINT_PRIGROUP_2_6, APINT_PRIGROUP_3_5,
    APINT_PRIGROUP_4_4, APINT_PRIGROUP_5_3, APINT_PRIGROUP_6_2, APINT_PRIGROUP_7_1,
};

/// PRIGROUP encoding indexed by preemption bit count.
pub const PRIORITY_GROUPING: [u32; NUM_PRIORITY as usize] = [
    APINT_PRIGROUP_0_8,
    APINT_PRIGROUP_1_7,
    APINT_PRIGROUP_2_6,
    APINT_PRIGROUP_3_5,
    APINT_PRIGROUP_4_4,
    APINT_PRIGROUP_5_3,
    APINT_PRIGROUP_6_2,
    APINT_PRIGROUP_7_1,
];

/// Encode a preemption bit count. `bits` must be below [`NUM_PRIORITY`].
#[inline]
pub const fn encode(bits: u32) -> u32 {
    PRIORITY_GROUPING[bits as usize]
}

/// Decode a PRIGROUP field.
///
/// Returns [`NUM_PRIORITY`] when the field matches no table entry; callers
/// cannot tell that apart from a grouping without checking for it.
pub fn decode(field: u32) -> u32 {
    PRIORITY_GROUPING
        .iter()
        .position(|&encoding| encoding == field)
        .map_or(NUM_PRIORITY, |index| index as u32)
}
