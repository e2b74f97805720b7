//! TI DriverLib NVIC driver
//!
//! Register-level driver for the Nested Vectored Interrupt Controller of Tiva C
//! and E Series parts. It enables, disables, pends and triggers individual
//! interrupts, sets their priorities and the priority grouping, and gates
//! interrupt delivery to the core.
//!
//! ## Module Overview
//! - [`regs`]     – register addresses and bit fields
//! - [`ints`]     – interrupt identifiers
//! - [`class`]    – identifier classification
//! - [`grouping`] – priority grouping codec
//! - [`access`]   – register and processor access capabilities
//! - [`nvic`]     – the driver
//! - [`sim`]      – simulated register file for host builds
//!
//! ## Usage
//!
//! ```rust
//! use hal_ti::{ints::INT_UART0, sim::{SimulatedCpu, SimulatedNvic}, Nvic, NvicConfig};
//!
//! let regs = SimulatedNvic::new();
//! let nvic = Nvic::new(&regs, SimulatedCpu::new(), NvicConfig::TM4C123);
//!
//! nvic.priority_grouping_set(3);
//! nvic.priority_set(INT_UART0, 0xE0);
//! nvic.enable(INT_UART0);
//! assert!(nvic.is_enabled(INT_UART0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod macros;

pub mod access;
pub mod class;
pub mod config;
pub mod grouping;
pub mod ints;
pub mod nvic;
pub mod regs;
pub mod sim;

pub use access::{CpuMask, Mmio, RegisterAccess};
#[cfg(target_arch = "arm")]
pub use access::CortexM;
pub use class::{InterruptClass, SystemFault};
pub use config::NvicConfig;
pub use nvic::Nvic;
