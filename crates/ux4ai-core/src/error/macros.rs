//! Error macros for ux4ai

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::Ux4aiError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::Ux4aiError::UsageError($msg.to_string()))
    };
}

/// Macro for creating configuration faults
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::Ux4aiError::invalid_config(format!($($arg)*)))
    };
}
