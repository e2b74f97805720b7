//! NVIC and system control block register map
//!
//! Addresses and bit fields follow the Tiva C / E Series datasheets. Every
//! value here is part of the hardware contract and must stay bit-exact.

/// SysTick control and status.
pub const ST_CTRL: u32 = 0xE000_E010;
/// SysTick interrupt enable.
pub const ST_CTRL_INTEN: u32 = 0x0000_0002;

/// Number of 32-line banks for the peripheral enable/pend registers.
pub const NUM_BANKS: usize = 5;

/// Interrupt set-enable registers (write 1 to enable).
pub const ENABLE_REGS: [u32; NUM_BANKS] =
    [0xE000_E100, 0xE000_E104, 0xE000_E108, 0xE000_E10C, 0xE000_E110];

/// Interrupt clear-enable registers (write 1 to disable).
pub const DISABLE_REGS: [u32; NUM_BANKS] =
    [0xE000_E180, 0xE000_E184, 0xE000_E188, 0xE000_E18C, 0xE000_E190];

/// Interrupt set-pending registers (write 1 to pend).
pub const PEND_REGS: [u32; NUM_BANKS] =
    [0xE000_E200, 0xE000_E204, 0xE000_E208, 0xE000_E20C, 0xE000_E210];

/// Interrupt clear-pending registers (write 1 to unpend).
pub const UNPEND_REGS: [u32; NUM_BANKS] =
    [0xE000_E280, 0xE000_E284, 0xE000_E288, 0xE000_E28C, 0xE000_E290];

/// First peripheral priority register (identifiers 16..=19).
pub const PRI0: u32 = 0xE000_E400;
/// System handler priority 1 (identifiers 4..=7).
pub const SYS_PRI1: u32 = 0xE000_ED18;
/// System handler priority 2 (identifiers 8..=11).
pub const SYS_PRI2: u32 = 0xE000_ED1C;
/// System handler priority 3 (identifiers 12..=15).
pub const SYS_PRI3: u32 = 0xE000_ED20;

/// Number of entries in [`PRIORITY_REGS`].
pub const NUM_PRIORITY_REGS: usize = 39;

/// Priority register holding the byte for identifier `id`, indexed by `id >> 2`.
///
/// Entry 0 covers the reserved identifiers 0..=3 and has no register.
pub const PRIORITY_REGS: [u32; NUM_PRIORITY_REGS] = {
    let mut regs = [0u32; NUM_PRIORITY_REGS];
    regs[1] = SYS_PRI1;
    regs[2] = SYS_PRI2;
    regs[3] = SYS_PRI3;
    let mut i = 4;
    while i < NUM_PRIORITY_REGS {
        regs[i] = PRI0 + 4 * (i as u32 - 4);
        i += 1;
    }
    regs
};

/// Interrupt control and state.
pub const INT_CTRL: u32 = 0xE000_ED04;
/// NMI set pending.
pub const INT_CTRL_NMI_SET: u32 = 0x8000_0000;
/// PendSV set pending.
pub const INT_CTRL_PEND_SV: u32 = 0x1000_0000;
/// PendSV clear pending.
pub const INT_CTRL_UNPEND_SV: u32 = 0x0800_0000;
/// SysTick set pending.
pub const INT_CTRL_PENDSTSET: u32 = 0x0400_0000;
/// SysTick clear pending.
pub const INT_CTRL_PENDSTCLR: u32 = 0x0200_0000;

/// Application interrupt and reset control.
pub const APINT: u32 = 0xE000_ED0C;
/// Key that must accompany every APINT write.
pub const APINT_VECTKEY: u32 = 0x05FA_0000;
/// Key field mask.
pub const APINT_VECTKEY_M: u32 = 0xFFFF_0000;
/// Value the key field reads back as.
pub const APINT_VECTKEY_STAT: u32 = 0xFA05_0000;
/// Priority grouping field mask.
pub const APINT_PRIGROUP_M: u32 = 0x0000_0700;
/// 7 preemption bits, 1 sub-priority bit.
pub const APINT_PRIGROUP_7_1: u32 = 0x0000_0000;
/// 6 preemption bits, 2 sub-priority bits.
pub const APINT_PRIGROUP_6_2: u32 = 0x0000_0100;
/// 5 preemption bits, 3 sub-priority bits.
pub const APINT_PRIGROUP_5_3: u32 = 0x0000_0200;
/// 4 preemption bits, 4 sub-priority bits.
pub const APINT_PRIGROUP_4_4: u32 = 0x0000_0300;
/// 3 preemption bits, 5 sub-priority bits.
pub const APINT_PRIGROUP_3_5: u32 = 0x0000_0400;
/// 2 preemption bits, 6 sub-priority bits.
pub const APINT_PRIGROUP_2_6: u32 = 0x0000_0500;
/// 1 preemption bit, 7 sub-priority bits.
pub const APINT_PRIGROUP_1_7: u32 = 0x0000_0600;
/// 0 preemption bits, 8 sub-priority bits.
pub const APINT_PRIGROUP_0_8: u32 = 0x0000_0700;

/// System handler control and state.
pub const SYS_HND_CTRL: u32 = 0xE000_ED24;
/// Usage fault enable.
pub const SYS_HND_CTRL_USAGE: u32 = 0x0004_0000;
/// Bus fault enable.
pub const SYS_HND_CTRL_BUS: u32 = 0x0002_0000;
/// Memory management fault enable.
pub const SYS_HND_CTRL_MEM: u32 = 0x0001_0000;

/// Software trigger interrupt.
pub const SW_TRIG: u32 = 0xE000_EF00;
/// Interrupt ID field of [`SW_TRIG`].
pub const SW_TRIG_INTID_M: u32 = 0x0000_00FF;
