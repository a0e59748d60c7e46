//! Wire-level names shared by the normalizer, the archive, and the exporters.

/// Model name the univariate service reports and the archive stores.
pub const MODEL_NAME_UNIVARIATE: &str = "UNIVARIATE";
/// Model name the multivariate service reports and the archive stores.
pub const MODEL_NAME_MULTIVARIATE: &str = "MULTIVARIATE";

/// Multipart field carrying the uploaded dataset.
pub const UPLOAD_FILE_FIELD: &str = "file";
/// Multipart field carrying the region code (multivariate only).
pub const UPLOAD_REGION_FIELD: &str = "region";
/// Content type sent with uploaded datasets.
pub const UPLOAD_CONTENT_TYPE: &str = "text/csv";

/// Shown wherever a result has no source file name.
pub const UNNAMED_FILE: &str = "Unnamed";
/// Shown in place of a missing confidence bound.
pub const MISSING_VALUE: &str = "N/A";

/// File-name suffix of the companion chart image.
pub const CHART_IMAGE_SUFFIX: &str = "_chart.png";
