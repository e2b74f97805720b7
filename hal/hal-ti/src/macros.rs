//! Internal tracing macros

/// Emit a `defmt` trace record when the `defmt` feature is enabled.
macro_rules! nvic_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    };
}

pub(crate) use nvic_trace;
