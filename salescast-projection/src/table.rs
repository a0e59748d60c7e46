//! Table: rows rendered as display text under a column set.

use salescast_core::ForecastResult;

use crate::columns::ColumnSet;
use crate::format::{format_bound, format_value};
use crate::projector::SeriesProjector;
use crate::row::Row;

/// A display table: headers from the shared [`ColumnSet`] and one string cell
/// per header in every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: ColumnSet,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn build(result: &ForecastResult, decimals: usize) -> Self {
        let columns = ColumnSet::for_result(result);
        let rows = SeriesProjector::new().project(result);
        Self::from_rows(columns, &rows, decimals)
    }

    pub fn from_rows(columns: ColumnSet, rows: &[Row], decimals: usize) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.date.clone(), format_value(row.forecast, decimals)];
                if columns.has_intervals() {
                    cells.push(format_bound(row.lower_ci, decimals));
                    cells.push(format_bound(row.upper_ci, decimals));
                }
                cells
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.columns.headers()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of each column in characters, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers()
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render as aligned plain text for terminal output.
    pub fn render_text(&self) -> String {
        let widths = self.column_widths();
        let mut out = aligned_line(self.headers().iter().copied(), &widths);
        out.push('\n');
        let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"─".repeat(rule));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&aligned_line(row.iter().map(String::as_str), &widths));
            out.push('\n');
        }
        out
    }
}

fn aligned_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect::<Vec<_>>()
        .join("  ")
}
