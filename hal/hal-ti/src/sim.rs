//! Simulated NVIC register file
//!
//! [`SimulatedNvic`] stands in for the memory-mapped registers on the host.
//! It models the aliasing the driver relies on:
//!
//! - EN/DIS share one enable word per bank, PEND/UNPEND one pending word.
//! - INT_CTRL set/clear bits update NMI, PendSV and SysTick pending status.
//! - APINT drops writes without the key and reads back the key status.
//! - SW_TRIG pends the written line and keeps the value for inspection.
//!
//! Every other address is a plain word. Each access runs in its own
//! critical section, which matches the single load/store granularity of
//! the real bus.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;
use heapless::{FnvIndexMap, Vec};

use crate::access::{CpuMask, RegisterAccess};
use crate::class::InterruptClass;
use crate::regs::{
    APINT, APINT_VECTKEY, APINT_VECTKEY_M, APINT_VECTKEY_STAT, DISABLE_REGS, ENABLE_REGS,
    INT_CTRL, INT_CTRL_NMI_SET, INT_CTRL_PENDSTCLR, INT_CTRL_PENDSTSET, INT_CTRL_PEND_SV,
    INT_CTRL_UNPEND_SV, NUM_BANKS, PEND_REGS, SW_TRIG, SW_TRIG_INTID_M, UNPEND_REGS,
};

/// Number of plain words the simulation can hold.
pub const SIM_WORDS: usize = 64;

/// Number of writes kept in the write log.
pub const SIM_LOG: usize = 32;

/// Pending-status bits that INT_CTRL reads back.
const INT_CTRL_STATUS: u32 = INT_CTRL_NMI_SET | INT_CTRL_PEND_SV | INT_CTRL_PENDSTSET;

/// One recorded register store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    pub addr: u32,
    pub value: u32,
}

#[derive(Debug)]
struct SimState {
    words: FnvIndexMap<u32, u32, SIM_WORDS>,
    enabled: [u32; NUM_BANKS],
    pending: [u32; NUM_BANKS],
    int_ctrl: u32,
    log: Vec<RegisterWrite, SIM_LOG>,
}

/// Which hardware-backed word an address aliases.
enum Alias {
    Enable { bank: usize, set: bool },
    Pending { bank: usize, set: bool },
    Plain,
}

fn alias(addr: u32) -> Alias {
    let bank_of = |table: &[u32; NUM_BANKS]| table.iter().position(|&reg| reg == addr);

    if let Some(bank) = bank_of(&ENABLE_REGS) {
        Alias::Enable { bank, set: true }
    } else if let Some(bank) = bank_of(&DISABLE_REGS) {
        Alias::Enable { bank, set: false }
    } else if let Some(bank) = bank_of(&PEND_REGS) {
        Alias::Pending { bank, set: true }
    } else if let Some(bank) = bank_of(&UNPEND_REGS) {
        Alias::Pending { bank, set: false }
    } else {
        Alias::Plain
    }
}

impl SimState {
    const fn new() -> Self {
        Self {
            words: FnvIndexMap::new(),
            enabled: [0; NUM_BANKS],
            pending: [0; NUM_BANKS],
            int_ctrl: 0,
            log: Vec::new(),
        }
    }

    fn word(&self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    fn store(&mut self, addr: u32, value: u32) {
        if self.words.insert(addr, value).is_err() {
            panic!("simulated register file full at {:#010x}", addr);
        }
    }

    fn read(&self, addr: u32) -> u32 {
        match alias(addr) {
            Alias::Enable { bank, .. } => self.enabled[bank],
            Alias::Pending { bank, .. } => self.pending[bank],
            Alias::Plain => match addr {
                INT_CTRL => self.int_ctrl,
                APINT => APINT_VECTKEY_STAT | (self.word(APINT) & !APINT_VECTKEY_M),
                _ => self.word(addr),
            },
        }
    }

    fn write(&mut self, addr: u32, value: u32) {
        // A full log keeps its oldest entries.
        let _ = self.log.push(RegisterWrite { addr, value });

        match alias(addr) {
            Alias::Enable { bank, set: true } => self.enabled[bank] |= value,
            Alias::Enable { bank, set: false } => self.enabled[bank] &= !value,
            Alias::Pending { bank, set: true } => self.pending[bank] |= value,
            Alias::Pending { bank, set: false } => self.pending[bank] &= !value,
            Alias::Plain => match addr {
                INT_CTRL => self.write_int_ctrl(value),
                APINT => {
                    if value & APINT_VECTKEY_M == APINT_VECTKEY {
                        self.store(APINT, value & !APINT_VECTKEY_M);
                    }
                }
                SW_TRIG => {
                    self.store(SW_TRIG, value);
                    let line = (value & SW_TRIG_INTID_M) as usize;
                    if line / 32 < NUM_BANKS {
                        self.pending[line / 32] |= 1 << (line % 32);
                    }
                }
                _ => self.store(addr, value),
            },
        }
    }

    fn write_int_ctrl(&mut self, value: u32) {
        if value & INT_CTRL_NMI_SET != 0 {
            self.int_ctrl |= INT_CTRL_NMI_SET;
        }
        if value & INT_CTRL_PEND_SV != 0 {
            self.int_ctrl |= INT_CTRL_PEND_SV;
        }
        if value & INT_CTRL_UNPEND_SV != 0 {
            self.int_ctrl &= !INT_CTRL_PEND_SV;
        }
        if value & INT_CTRL_PENDSTSET != 0 {
            self.int_ctrl |= INT_CTRL_PENDSTSET;
        }
        if value & INT_CTRL_PENDSTCLR != 0 {
            self.int_ctrl &= !INT_CTRL_PENDSTSET;
        }
        self.int_ctrl &= INT_CTRL_STATUS;
    }
}

/// Host-side stand-in for the NVIC register file.
#[derive(Debug)]
pub struct SimulatedNvic {
    state: Mutex<RefCell<SimState>>,
}

impl SimulatedNvic {
    /// Register file in its reset state: everything zero.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(SimState::new())),
        }
    }

    /// Store a raw word, bypassing the hardware aliasing and the write log.
    ///
    /// Useful to model state changed out of band, e.g. by boot code.
    pub fn poke(&self, addr: u32, value: u32) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).store(addr, value));
    }

    /// Assert a peripheral interrupt as its source would: the pending bit
    /// latches. Identifiers without a bank bit are ignored.
    pub fn raise(&self, id: u32) {
        if let InterruptClass::General { bank, bit } = InterruptClass::of(id) {
            if bank < NUM_BANKS {
                critical_section::with(|cs| {
                    self.state.borrow_ref_mut(cs).pending[bank] |= 1 << bit;
                });
            }
        }
    }

    /// Enable word of a peripheral bank.
    pub fn enabled_bank(&self, bank: usize) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).enabled[bank])
    }

    /// Pending word of a peripheral bank.
    pub fn pending_bank(&self, bank: usize) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).pending[bank])
    }

    /// Writes recorded since the last [`SimulatedNvic::clear_log`].
    pub fn writes(&self) -> Vec<RegisterWrite, SIM_LOG> {
        critical_section::with(|cs| self.state.borrow_ref(cs).log.clone())
    }

    /// Forget the recorded writes.
    pub fn clear_log(&self) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).log.clear());
    }
}

impl Default for SimulatedNvic {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterAccess for SimulatedNvic {
    fn read(&self, addr: u32) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).read(addr))
    }

    fn write(&self, addr: u32, value: u32) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).write(addr, value));
    }
}

/// Host-side stand-in for the processor interrupt gate.
///
/// Starts with interrupts enabled, the PRIMASK reset value.
#[derive(Debug)]
pub struct SimulatedCpu {
    disabled: AtomicBool,
}

impl SimulatedCpu {
    /// Gate open.
    pub const fn new() -> Self {
        Self {
            disabled: AtomicBool::new(false),
        }
    }
}

impl Default for SimulatedCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuMask for SimulatedCpu {
    fn enable_irq(&self) -> bool {
        self.disabled.swap(false, Ordering::AcqRel)
    }

    fn disable_irq(&self) -> bool {
        self.disabled.swap(true, Ordering::AcqRel)
    }

    fn irq_enabled(&self) -> bool {
        !self.disabled.load(Ordering::Acquire)
    }
}
