//! Artifact generation for forecast results.
//!
//! Every artifact takes its column set from `ColumnSet::for_result`, the same
//! check the on-screen table uses, so the table, the PDF, and the CSV always
//! agree on whether interval columns exist.

pub mod artifacts;
pub mod csv_export;
pub mod engine;
pub mod pdf;
pub mod report;

pub use artifacts::{ExportArtifacts, ExportFormats};
pub use csv_export::CsvExport;
pub use engine::ExportEngine;
pub use report::PdfReport;
