//! Hardware Abstraction Layer (HAL) for embedded systems
//!
//! This crate provides vendor-agnostic traits for interrupt controllers.
//! Vendor crates such as `hal-ti` implement them on top of their register
//! level drivers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod interrupt;

// Re-export commonly used types
pub use error::{HalError, HalResult};
pub use interrupt::{InterruptController, InterruptPriority};
