//! ExportArtifacts: generated files and writing them to disk.

use std::path::{Path, PathBuf};

use salescast_core::constants::CHART_IMAGE_SUFFIX;
use salescast_core::errors::ExportError;
use salescast_core::ForecastVariant;
use tracing::info;

/// Which formats to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportFormats {
    pub pdf: bool,
    pub csv: bool,
}

impl ExportFormats {
    pub fn all() -> Self {
        Self {
            pdf: true,
            csv: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.pdf && !self.csv
    }
}

/// Generated artifacts for one result, named after its variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifacts {
    stem: &'static str,
    pub pdf: Option<Vec<u8>>,
    pub csv: Option<String>,
    /// Companion image of the CSV. Independent of the CSV itself.
    pub chart_png: Option<Vec<u8>>,
}

impl ExportArtifacts {
    pub fn new(variant: ForecastVariant) -> Self {
        Self {
            stem: variant.artifact_stem(),
            pdf: None,
            csv: None,
            chart_png: None,
        }
    }

    pub fn stem(&self) -> &'static str {
        self.stem
    }

    pub fn pdf_file_name(&self) -> String {
        format!("{}.pdf", self.stem)
    }

    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.stem)
    }

    pub fn chart_file_name(&self) -> String {
        format!("{}{}", self.stem, CHART_IMAGE_SUFFIX)
    }

    pub fn is_empty(&self) -> bool {
        self.pdf.is_none() && self.csv.is_none() && self.chart_png.is_none()
    }

    /// Write every present artifact into `dir`, creating it if needed.
    /// Returns the written paths in PDF, CSV, image order.
    pub async fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| io_err(dir, e))?;

        let mut written = Vec::new();
        if let Some(ref pdf) = self.pdf {
            written.push(write_file(dir.join(self.pdf_file_name()), pdf).await?);
        }
        if let Some(ref csv) = self.csv {
            written.push(write_file(dir.join(self.csv_file_name()), csv.as_bytes()).await?);
        }
        if let Some(ref png) = self.chart_png {
            written.push(write_file(dir.join(self.chart_file_name()), png).await?);
        }
        Ok(written)
    }
}

async fn write_file(path: PathBuf, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| io_err(&path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(path)
}

fn io_err(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
