//! Error macros for routegraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::Usage($msg.to_string()))
    };
}

/// Macro for rejecting a malformed snapshot
#[macro_export]
macro_rules! bail_snapshot {
    ($($arg:tt)*) => {
        return Err($crate::error::RouteError::invalid_snapshot(format!($($arg)*)))
    };
}
