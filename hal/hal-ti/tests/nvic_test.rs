//! Driver tests against the simulated register file

use hal_ti::config::NvicConfig;
use hal_ti::ints::*;
use hal_ti::regs::{
    APINT, DISABLE_REGS, ENABLE_REGS, INT_CTRL, INT_CTRL_NMI_SET, INT_CTRL_PENDSTSET,
    INT_CTRL_PEND_SV, NUM_BANKS, PEND_REGS, PRI0, SW_TRIG, ST_CTRL, ST_CTRL_INTEN,
    SYS_HND_CTRL, SYS_HND_CTRL_BUS, SYS_HND_CTRL_MEM, SYS_HND_CTRL_USAGE, SYS_PRI3,
    UNPEND_REGS,
};
use hal_ti::sim::{RegisterWrite, SimulatedCpu, SimulatedNvic};
use hal_ti::{Nvic, RegisterAccess};

const N: u32 = NvicConfig::TM4C123.num_interrupts;

fn driver(sim: &SimulatedNvic) -> Nvic<&SimulatedNvic, SimulatedCpu> {
    Nvic::new(sim, SimulatedCpu::new(), NvicConfig::TM4C123)
}

#[test]
fn test_priority_round_trip_isolated() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    for id in 4..N {
        nvic.priority_set(id, (id as u8).wrapping_mul(7));
    }
    for id in 4..N {
        assert_eq!(nvic.priority_get(id), (id as u8).wrapping_mul(7), "id {}", id);
    }

    // Sweep a value through one lane; neighbours keep theirs.
    for priority in 0..=255u8 {
        nvic.priority_set(INT_UART0, priority);
        assert_eq!(nvic.priority_get(INT_UART0), priority);
    }
    for id in (4..N).filter(|&id| id != INT_UART0) {
        assert_eq!(nvic.priority_get(id), (id as u8).wrapping_mul(7), "id {}", id);
    }
}

#[test]
fn test_priority_register_layout() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.priority_set(INT_UART0, 0xE0);
    assert_eq!(nvic.priority_get(INT_UART0), 0xE0);
    // UART0 is identifier 21: PRI1, lane 1.
    assert_eq!(sim.read(PRI0 + 4), 0x0000_E000);

    nvic.priority_set(FAULT_SYSTICK, 0x40);
    assert_eq!(sim.read(SYS_PRI3), 0x4000_0000);
}

#[test]
fn test_grouping_round_trip() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    for bits in 0..NUM_PRIORITY {
        nvic.priority_grouping_set(bits);
        assert_eq!(nvic.priority_grouping_get(), bits);
    }
}

#[test]
fn test_grouping_write_carries_key() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    sim.clear_log();
    nvic.priority_grouping_set(2);
    assert_eq!(
        sim.writes().as_slice(),
        &[RegisterWrite { addr: APINT, value: 0x05FA_0500 }]
    );
}

#[test]
fn test_grouping_reflects_out_of_band_change() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.priority_grouping_set(1);
    sim.poke(APINT, 0x0000_0300);
    assert_eq!(nvic.priority_grouping_get(), 4);
}

fn assert_only_bit(sim: &SimulatedNvic, bank: usize, bit: u32) {
    for other in 0..NUM_BANKS {
        let expected = if other == bank { 1 << bit } else { 0 };
        assert_eq!(sim.enabled_bank(other), expected, "bank {}", other);
    }
}

#[test]
fn test_bank_addressing() {
    for (id, bank, bit) in [(16, 0, 0), (47, 0, 31), (48, 1, 0)] {
        let sim = SimulatedNvic::new();
        let nvic = driver(&sim);

        nvic.enable(id);
        assert_only_bit(&sim, bank, bit);
        assert_eq!(
            sim.writes().as_slice(),
            &[RegisterWrite { addr: ENABLE_REGS[bank], value: 1 << bit }]
        );
    }
}

#[test]
fn test_disable_uses_clear_register() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.enable(INT_USB0);
    assert!(nvic.is_enabled(INT_USB0));

    sim.clear_log();
    nvic.disable(INT_USB0);
    assert!(!nvic.is_enabled(INT_USB0));
    assert_eq!(
        sim.writes().as_slice(),
        &[RegisterWrite { addr: DISABLE_REGS[1], value: 1 << 12 }]
    );
}

#[test]
fn test_pend_latches_while_disabled() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    assert!(!nvic.is_enabled(INT_TIMER0A));
    nvic.pend_set(INT_TIMER0A);
    assert!(nvic.is_pending(INT_TIMER0A));
    assert!(!nvic.is_enabled(INT_TIMER0A));

    nvic.enable(INT_TIMER0A);
    assert!(nvic.is_enabled(INT_TIMER0A));
    assert!(nvic.is_pending(INT_TIMER0A));

    nvic.pend_clear(INT_TIMER0A);
    assert!(!nvic.is_pending(INT_TIMER0A));
    assert!(nvic.is_enabled(INT_TIMER0A));
}

#[test]
fn test_pend_registers() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.pend_set(INT_UDMAERR);
    nvic.pend_clear(INT_UDMAERR);
    assert_eq!(
        sim.writes().as_slice(),
        &[
            RegisterWrite { addr: PEND_REGS[1], value: 1 << 15 },
            RegisterWrite { addr: UNPEND_REGS[1], value: 1 << 15 },
        ]
    );
}

#[test]
fn test_hardware_raised_line_is_pending() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    sim.raise(INT_GPIOF);
    assert!(nvic.is_pending(INT_GPIOF));
    assert!(!nvic.is_pending(INT_GPIOA));
}

#[test]
fn test_systick_enable_touches_only_inten() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);
    sim.poke(ST_CTRL, 0x0000_0005);

    nvic.enable(FAULT_SYSTICK);
    assert_eq!(
        sim.writes().as_slice(),
        &[RegisterWrite { addr: ST_CTRL, value: 0x0000_0005 | ST_CTRL_INTEN }]
    );
    assert!(nvic.is_enabled(FAULT_SYSTICK));

    nvic.disable(FAULT_SYSTICK);
    assert_eq!(sim.read(ST_CTRL), 0x0000_0005);
    assert!(!nvic.is_enabled(FAULT_SYSTICK));
}

#[test]
fn test_fault_enables() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.enable(FAULT_MPU);
    nvic.enable(FAULT_BUS);
    nvic.enable(FAULT_USAGE);
    assert_eq!(
        sim.read(SYS_HND_CTRL),
        SYS_HND_CTRL_MEM | SYS_HND_CTRL_BUS | SYS_HND_CTRL_USAGE
    );

    nvic.disable(FAULT_BUS);
    assert_eq!(sim.read(SYS_HND_CTRL), SYS_HND_CTRL_MEM | SYS_HND_CTRL_USAGE);
    assert!(nvic.is_enabled(FAULT_MPU));
    assert!(!nvic.is_enabled(FAULT_BUS));
    assert!(nvic.is_enabled(FAULT_USAGE));
}

#[test]
fn test_system_pends() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.pend_set(FAULT_PENDSV);
    nvic.pend_set(FAULT_SYSTICK);
    assert_eq!(sim.read(INT_CTRL), INT_CTRL_PEND_SV | INT_CTRL_PENDSTSET);

    nvic.pend_clear(FAULT_PENDSV);
    assert!(!nvic.is_pending(FAULT_PENDSV));
    assert!(nvic.is_pending(FAULT_SYSTICK));

    nvic.pend_clear(FAULT_SYSTICK);
    assert!(!nvic.is_pending(FAULT_SYSTICK));

    nvic.pend_set(FAULT_NMI);
    assert_eq!(sim.read(INT_CTRL), INT_CTRL_NMI_SET);
    // The NMI has no un-pend bit.
    nvic.pend_clear(FAULT_NMI);
    assert!(nvic.is_pending(FAULT_NMI));
}

#[test]
fn test_unmodeled_ids_are_ignored() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    for id in [0, 1, FAULT_HARD, 7, 8, 9, 10, FAULT_SVCALL, FAULT_DEBUG, 13] {
        nvic.enable(id);
        nvic.disable(id);
        nvic.pend_set(id);
        nvic.pend_clear(id);
        assert!(!nvic.is_enabled(id));
        assert!(!nvic.is_pending(id));
    }
    // Faults without an enable bit are ignored by enable/disable.
    nvic.enable(FAULT_NMI);
    nvic.enable(FAULT_PENDSV);
    assert!(!nvic.is_enabled(FAULT_NMI));
    assert!(sim.writes().is_empty());
}

#[test]
fn test_trigger_writes_line_offset() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    nvic.trigger(INT_UART0);
    assert_eq!(
        sim.writes().as_slice(),
        &[RegisterWrite { addr: SW_TRIG, value: INT_UART0 - 16 }]
    );
    assert!(nvic.is_pending(INT_UART0));
    assert!(!nvic.is_enabled(INT_UART0));
}

#[test]
fn test_master_gate() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    assert!(nvic.is_master_enabled());
    assert!(!nvic.master_disable());
    assert!(nvic.master_disable());
    assert!(!nvic.is_master_enabled());

    // Gating the core leaves pending lines pending.
    nvic.pend_set(INT_GPIOA);
    assert!(nvic.is_pending(INT_GPIOA));

    assert!(nvic.master_enable());
    assert!(!nvic.master_enable());
}

#[test]
fn test_masked_restores_gate() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    let seen = nvic.masked(|| {
        nvic.priority_set(INT_UART1, 0x20);
        nvic.is_master_enabled()
    });
    assert!(!seen);
    assert!(nvic.is_master_enabled());
    assert_eq!(nvic.priority_get(INT_UART1), 0x20);

    nvic.master_disable();
    nvic.masked(|| nvic.masked(|| ()));
    assert!(!nvic.is_master_enabled());
}

#[test]
fn test_masked_restores_gate_on_unwind() {
    let sim = SimulatedNvic::new();
    let nvic = driver(&sim);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        nvic.masked(|| panic!("handler setup failed"))
    }));
    assert!(result.is_err());
    assert!(nvic.is_master_enabled());
}

// Preconditions are checked in debug builds only.
#[cfg(debug_assertions)]
mod contract {
    use super::*;

    #[test]
    #[should_panic(expected = "invalid interrupt identifier")]
    fn test_priority_set_rejects_reserved_id() {
        let sim = SimulatedNvic::new();
        driver(&sim).priority_set(3, 0);
    }

    #[test]
    #[should_panic(expected = "invalid priority grouping")]
    fn test_grouping_set_rejects_eight() {
        let sim = SimulatedNvic::new();
        driver(&sim).priority_grouping_set(8);
    }

    #[test]
    #[should_panic(expected = "invalid interrupt identifier")]
    fn test_enable_rejects_out_of_range() {
        let sim = SimulatedNvic::new();
        driver(&sim).enable(N);
    }

    #[test]
    #[should_panic(expected = "invalid interrupt identifier")]
    fn test_trigger_rejects_system_id() {
        let sim = SimulatedNvic::new();
        driver(&sim).trigger(FAULT_SYSTICK);
    }
}

#[test]
fn test_smaller_part_limits() {
    let sim = SimulatedNvic::new();
    let nvic = Nvic::new(&sim, SimulatedCpu::new(), NvicConfig::TM4C129);

    nvic.enable(NvicConfig::TM4C129.num_interrupts - 1);
    assert!(nvic.is_enabled(NvicConfig::TM4C129.num_interrupts - 1));
}
