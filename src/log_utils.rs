#[macro_export]
#[cfg(feature = "log_tracing")]
macro_rules! log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[macro_export]
#[cfg(not(feature = "log_tracing"))]
macro_rules! log {
    ($($arg:tt)*) => {
        println!($($arg)*)
    };
}

// Same as `log!`, but only emits in builds with debug assertions.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::log!($($arg)*)
        }
    };
}
