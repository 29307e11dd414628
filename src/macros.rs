//! `format!`-style macros over the facade functions.
//!
//! ```
//! use logshim::{debugf, infof, secretf};
//!
//! infof!("listening on {}:{}", "0.0.0.0", 8080);
//! debugf!("cache size {}", 12);
//! secretf!("loaded config:\n{}", "user: admin\npassword: hunter2");
//! ```

/// Log a trace-level message through the active logger
#[macro_export]
macro_rules! tracef {
    ($($arg:tt)+) => {
        $crate::logger::tracef(format_args!($($arg)+))
    };
}

/// Log a debug-level message through the active logger
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::logger::debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message through the active logger
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::logger::infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message through the active logger
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::logger::warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message through the active logger
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::logger::errorf(format_args!($($arg)+))
    };
}

/// Log a fatal message through the active logger and exit
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::logger::fatalf(format_args!($($arg)+))
    };
}

/// Log a trace-level message with secret values masked
#[macro_export]
macro_rules! secretf {
    ($($arg:tt)+) => {
        $crate::logger::secretf(format_args!($($arg)+))
    };
}
