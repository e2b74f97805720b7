//! Interrupt identifier classification
//!
//! Every line operation resolves its identifier once into an
//! [`InterruptClass`] and matches on it, so the system-fault sentinels and
//! the banked peripheral arithmetic live in one place.

use crate::ints::{
    FAULT_BUS, FAULT_MPU, FAULT_NMI, FAULT_PENDSV, FAULT_SYSTICK, FAULT_USAGE,
    INT_PERIPHERAL_BASE,
};
use crate::regs;

/// System exceptions with a dedicated control bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemFault {
    Nmi,
    MemManage,
    BusFault,
    UsageFault,
    PendSv,
    SysTick,
}

impl SystemFault {
    /// Exception number of this fault.
    pub const fn id(self) -> u32 {
        match self {
            Self::Nmi => FAULT_NMI,
            Self::MemManage => FAULT_MPU,
            Self::BusFault => FAULT_BUS,
            Self::UsageFault => FAULT_USAGE,
            Self::PendSv => FAULT_PENDSV,
            Self::SysTick => FAULT_SYSTICK,
        }
    }

    /// Register and mask of the enable bit, if the fault can be gated.
    pub const fn enable_bit(self) -> Option<(u32, u32)> {
        match self {
            Self::MemManage => Some((regs::SYS_HND_CTRL, regs::SYS_HND_CTRL_MEM)),
            Self::BusFault => Some((regs::SYS_HND_CTRL, regs::SYS_HND_CTRL_BUS)),
            Self::UsageFault => Some((regs::SYS_HND_CTRL, regs::SYS_HND_CTRL_USAGE)),
            Self::SysTick => Some((regs::ST_CTRL, regs::ST_CTRL_INTEN)),
            Self::Nmi | Self::PendSv => None,
        }
    }

    /// INT_CTRL bit that pends the fault. Reads back as its pending status.
    pub const fn pend_bit(self) -> Option<u32> {
        match self {
            Self::Nmi => Some(regs::INT_CTRL_NMI_SET),
            Self::PendSv => Some(regs::INT_CTRL_PEND_SV),
            Self::SysTick => Some(regs::INT_CTRL_PENDSTSET),
            Self::MemManage | Self::BusFault | Self::UsageFault => None,
        }
    }

    /// INT_CTRL bit that unpends the fault. The NMI cannot be unpended.
    pub const fn unpend_bit(self) -> Option<u32> {
        match self {
            Self::PendSv => Some(regs::INT_CTRL_UNPEND_SV),
            Self::SysTick => Some(regs::INT_CTRL_PENDSTCLR),
            Self::Nmi | Self::MemManage | Self::BusFault | Self::UsageFault => None,
        }
    }
}

/// Where the controls for an interrupt identifier live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptClass {
    /// Named system exception.
    SystemFault(SystemFault),
    /// Peripheral line in a 32-bit bank of the set/clear registers.
    General { bank: usize, bit: u32 },
    /// System identifier with no control bit: line operations ignore it.
    Unmodeled,
}

impl InterruptClass {
    /// Classify a raw identifier. Range checking is the caller's job.
    pub const fn of(id: u32) -> Self {
        match id {
            FAULT_NMI => Self::SystemFault(SystemFault::Nmi),
            FAULT_MPU => Self::SystemFault(SystemFault::MemManage),
            FAULT_BUS => Self::SystemFault(SystemFault::BusFault),
            FAULT_USAGE => Self::SystemFault(SystemFault::UsageFault),
            FAULT_PENDSV => Self::SystemFault(SystemFault::PendSv),
            FAULT_SYSTICK => Self::SystemFault(SystemFault::SysTick),
            _ if id >= INT_PERIPHERAL_BASE => {
                let line = id - INT_PERIPHERAL_BASE;
                Self::General {
                    bank: (line / 32) as usize,
                    bit: line % 32,
                }
            }
            _ => Self::Unmodeled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ints::{FAULT_DEBUG, FAULT_HARD, FAULT_SVCALL, INT_UART0};

    #[test]
    fn test_named_faults_round_trip() {
        let faults = [
            SystemFault::Nmi,
            SystemFault::MemManage,
            SystemFault::BusFault,
            SystemFault::UsageFault,
            SystemFault::PendSv,
            SystemFault::SysTick,
        ];
        for fault in faults {
            assert_eq!(InterruptClass::of(fault.id()), InterruptClass::SystemFault(fault));
        }
    }

    #[test]
    fn test_unnamed_system_ids_are_unmodeled() {
        for id in [0, 1, FAULT_HARD, 7, 8, 9, 10, FAULT_SVCALL, FAULT_DEBUG, 13] {
            assert_eq!(InterruptClass::of(id), InterruptClass::Unmodeled, "id {}", id);
        }
    }

    #[test]
    fn test_general_bank_arithmetic() {
        assert_eq!(InterruptClass::of(16), InterruptClass::General { bank: 0, bit: 0 });
        assert_eq!(InterruptClass::of(47), InterruptClass::General { bank: 0, bit: 31 });
        assert_eq!(InterruptClass::of(48), InterruptClass::General { bank: 1, bit: 0 });
        assert_eq!(InterruptClass::of(154), InterruptClass::General { bank: 4, bit: 10 });
        assert_eq!(InterruptClass::of(INT_UART0), InterruptClass::General { bank: 0, bit: 5 });
    }

    #[test]
    fn test_fault_control_bits() {
        assert_eq!(SystemFault::Nmi.enable_bit(), None);
        assert_eq!(SystemFault::Nmi.unpend_bit(), None);
        assert_eq!(
            SystemFault::SysTick.enable_bit(),
            Some((regs::ST_CTRL, regs::ST_CTRL_INTEN))
        );
        assert_eq!(SystemFault::BusFault.pend_bit(), None);
    }
}
