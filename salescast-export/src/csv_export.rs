//! CSV serialization of a forecast table at full precision.

use csv::{Terminator, WriterBuilder};
use salescast_core::errors::ExportError;
use salescast_core::{ChartSnapshot, ForecastResult};
use salescast_projection::{ColumnSet, SeriesProjector};

/// CSV text plus the companion chart image, when one was captured.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub csv: String,
    pub chart: Option<ChartSnapshot>,
}

/// Header row first, one `\n`-terminated row per step. Values use the
/// shortest exact representation; a missing bound is an empty field.
pub fn write_csv(result: &ForecastResult) -> Result<String, ExportError> {
    let columns = ColumnSet::for_result(result);
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.headers()).map_err(csv_err)?;
    for row in SeriesProjector::new().project(result) {
        let mut record = vec![row.date, row.forecast.to_string()];
        if columns.has_intervals() {
            record.push(full_precision(row.lower_ci));
            record.push(full_precision(row.upper_ci));
        }
        writer.write_record(&record).map_err(csv_err)?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Csv {
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv {
        reason: e.to_string(),
    })
}

fn full_precision(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_err(e: csv::Error) -> ExportError {
    ExportError::Csv {
        reason: e.to_string(),
    }
}
