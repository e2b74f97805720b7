//! Interrupt identifiers
//!
//! System exceptions use their Cortex-M exception numbers. Peripheral
//! identifiers start at 16 and follow the TM4C123 vector table.

// Fault and system exceptions
pub const FAULT_NMI: u32 = 2;
pub const FAULT_HARD: u32 = 3;
pub const FAULT_MPU: u32 = 4;
pub const FAULT_BUS: u32 = 5;
pub const FAULT_USAGE: u32 = 6;
pub const FAULT_SVCALL: u32 = 11;
pub const FAULT_DEBUG: u32 = 12;
pub const FAULT_PENDSV: u32 = 14;
pub const FAULT_SYSTICK: u32 = 15;

/// First peripheral identifier.
pub const INT_PERIPHERAL_BASE: u32 = 16;

// TM4C123 peripheral interrupts
pub const INT_GPIOA: u32 = 16;
pub const INT_GPIOB: u32 = 17;
pub const INT_GPIOC: u32 = 18;
pub const INT_GPIOD: u32 = 19;
pub const INT_GPIOE: u32 = 20;
pub const INT_UART0: u32 = 21;
pub const INT_UART1: u32 = 22;
pub const INT_SSI0: u32 = 23;
pub const INT_I2C0: u32 = 24;
pub const INT_WATCHDOG: u32 = 34;
pub const INT_TIMER0A: u32 = 35;
pub const INT_TIMER0B: u32 = 36;
pub const INT_SYSCTL: u32 = 44;
pub const INT_FLASH: u32 = 45;
pub const INT_GPIOF: u32 = 46;
pub const INT_UART2: u32 = 49;
pub const INT_USB0: u32 = 60;
pub const INT_UDMA: u32 = 62;
pub const INT_UDMAERR: u32 = 63;

/// Number of priority grouping encodings.
pub const NUM_PRIORITY: u32 = 8;
