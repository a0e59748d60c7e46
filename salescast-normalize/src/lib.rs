//! # salescast-normalize
//!
//! The single validation boundary of the pipeline. Raw service responses and
//! archived records come in as loosely-typed JSON; a [`ForecastResult`] that
//! satisfies every length invariant comes out, or a `PayloadError` does.
//!
//! [`ForecastResult`]: salescast_core::ForecastResult

pub mod fields;
pub mod intervals;
pub mod normalizer;
pub mod timestamp;

pub use normalizer::ResultNormalizer;
