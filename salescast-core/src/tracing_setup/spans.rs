//! Span definitions per operation: normalize, export, archive, service.

/// Create a normalization span.
#[macro_export]
macro_rules! normalize_span {
    ($variant:expr, $file_name:expr) => {
        tracing::debug_span!("salescast.normalize", variant = %$variant, file = %$file_name)
    };
}

/// Create an export span.
#[macro_export]
macro_rules! export_span {
    ($format:expr, $rows:expr) => {
        tracing::info_span!("salescast.export", format = $format, rows = $rows)
    };
}

/// Create an archive span.
#[macro_export]
macro_rules! archive_span {
    ($op:expr) => {
        tracing::info_span!("salescast.archive", op = $op)
    };
}

/// Create a forecast-service span.
#[macro_export]
macro_rules! service_span {
    ($variant:expr, $request_id:expr) => {
        tracing::info_span!("salescast.service", variant = %$variant, request_id = %$request_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const NORMALIZE: &str = "salescast.normalize";
    pub const EXPORT: &str = "salescast.export";
    pub const ARCHIVE: &str = "salescast.archive";
    pub const SERVICE: &str = "salescast.service";
}
