//! Export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Paper size of generated PDF reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in millimetres.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::Letter => (215.9, 279.4),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory artifacts are written to.
    pub output_dir: Option<String>,
    /// Decimal places used by the PDF table. CSV always keeps full precision.
    pub table_decimals: Option<usize>,
    pub page_size: Option<PageSize>,
    /// Embed the chart snapshot in PDFs and ship it next to CSVs.
    pub embed_chart: Option<bool>,
}

impl ExportConfig {
    pub fn effective_output_dir(&self) -> PathBuf {
        PathBuf::from(
            self.output_dir
                .as_deref()
                .unwrap_or(defaults::DEFAULT_OUTPUT_DIR),
        )
    }

    pub fn effective_table_decimals(&self) -> usize {
        self.table_decimals.unwrap_or(defaults::DEFAULT_TABLE_DECIMALS)
    }

    pub fn effective_page_size(&self) -> PageSize {
        self.page_size.unwrap_or_default()
    }

    pub fn effective_embed_chart(&self) -> bool {
        self.embed_chart.unwrap_or(defaults::DEFAULT_EMBED_CHART)
    }
}
