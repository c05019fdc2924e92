//! Variadic logging macros.
//!
//! Each macro takes a facade (anything that derefs to a `Facade`) followed by
//! any number of `Display` values.

/// Log at ERROR.
///
/// # Example
///
/// ```
/// # use std::sync::Arc;
/// # use tfm_observability::{log_error, MemorySink, RecordingMetrics, TfmFacade};
/// let sink = MemorySink::new();
/// let facade = TfmFacade::new(false, Arc::new(sink.clone()), Arc::new(RecordingMetrics::new()));
/// log_error!(facade, "upload failed after", 3, "attempts");
/// assert_eq!(
///     sink.lines(),
///     vec![r#"TFMLOG:{"level":"ERROR ","details":"upload failed after 3 attempts"}"#]
/// );
/// ```
#[macro_export]
macro_rules! log_error {
    ($facade:expr $(, $value:expr)* $(,)?) => {{
        use $crate::facade::Facade as _;
        $facade.log_error(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

/// Log at INFO.
#[macro_export]
macro_rules! log_info {
    ($facade:expr $(, $value:expr)* $(,)?) => {{
        use $crate::facade::Facade as _;
        $facade.log_info(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

/// Log at WARN.
#[macro_export]
macro_rules! log_warn {
    ($facade:expr $(, $value:expr)* $(,)?) => {{
        use $crate::facade::Facade as _;
        $facade.log_warn(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

/// Log at DEBUG; a no-op unless the facade is verbose.
#[macro_export]
macro_rules! log_debug {
    ($facade:expr $(, $value:expr)* $(,)?) => {{
        use $crate::facade::Facade as _;
        $facade.log_debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}
