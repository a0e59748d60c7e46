//! Results that carry non-fatal errors alongside their data.

use super::SalescastError;

/// Successful data plus the non-fatal errors met while producing it.
/// Lets a listing return every good record even when some fail to load.
#[derive(Debug, Default)]
pub struct Collected<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors, in the order they occurred.
    pub errors: Vec<SalescastError>,
}

impl<T: Default> Collected<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<SalescastError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
