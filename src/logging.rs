//! Logging support.
//!
//! `log_debug!`, `log_trace!` and `log_warn!` forward to the `tracing`
//! macros when the `tracing` feature is enabled. Without the feature they
//! expand to nothing. The `log_` prefix keeps them clear of the built-in
//! `#[warn]` lint attribute.

#[cfg(feature = "tracing")]
mod forward_macros {
    macro_rules! log_debug {
        ($($arg:tt)*) => {
            ::tracing::debug!($($arg)*)
        };
    }

    macro_rules! log_trace {
        ($($arg:tt)*) => {
            ::tracing::trace!($($arg)*)
        };
    }

    macro_rules! log_warn {
        ($($arg:tt)*) => {
            ::tracing::warn!($($arg)*)
        };
    }

    pub(crate) use log_debug;
    pub(crate) use log_trace;
    pub(crate) use log_warn;
}

#[cfg(feature = "tracing")]
pub(crate) use forward_macros::{log_debug, log_trace, log_warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    macro_rules! log_debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! log_trace {
        ($($arg:tt)*) => {};
    }

    macro_rules! log_warn {
        ($($arg:tt)*) => {};
    }

    pub(crate) use log_debug;
    pub(crate) use log_trace;
    pub(crate) use log_warn;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop_macros::{log_debug, log_trace, log_warn};
