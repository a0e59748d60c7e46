//! PDF rendering of a [`PdfReport`] with printpdf's built-in Helvetica.
//!
//! Layout, top to bottom: title, summary line, chart image (when captured),
//! then the table. The table breaks across pages and repeats its header.

use std::fmt::Debug;

use printpdf::image_crate;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use salescast_core::config::PageSize;
use salescast_core::errors::ExportError;
use salescast_core::ChartSnapshot;
use tracing::warn;

use crate::report::PdfReport;

const LAYER_NAME: &str = "Layer 1";
const MARGIN_MM: f32 = 20.0;
const TITLE_PT: f32 = 18.0;
const SUMMARY_PT: f32 = 11.0;
const TABLE_PT: f32 = 10.0;
const TITLE_MM: f32 = 10.0;
const LINE_MM: f32 = 7.0;
const ROW_MM: f32 = 6.0;
const GAP_MM: f32 = 6.0;
const MM_PER_INCH: f32 = 25.4;

/// Render `report` into PDF bytes. A chart that cannot be decoded is left
/// out with a warning, like a failed capture.
pub fn render_pdf(
    report: &PdfReport,
    chart: Option<&ChartSnapshot>,
    page: PageSize,
) -> Result<Vec<u8>, ExportError> {
    let mut writer = PageWriter::new(&report.title, page)?;

    writer.text(&report.title, TITLE_PT, MARGIN_MM, true);
    writer.advance(TITLE_MM);
    writer.text(&report.summary, SUMMARY_PT, MARGIN_MM, false);
    writer.advance(LINE_MM + GAP_MM);

    if let Some(snapshot) = chart {
        writer.image(snapshot);
    }

    writer.table(&report.headers, &report.rows);
    writer.finish()
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    width: f32,
    height: f32,
    /// Baseline of the next line, measured from the page bottom.
    cursor: f32,
}

impl PageWriter {
    fn new(title: &str, page: PageSize) -> Result<Self, ExportError> {
        let (width, height) = page.dimensions_mm();
        let (doc, page_index, layer_index) =
            PdfDocument::new(title, Mm(width), Mm(height), LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;
        let layer = doc.get_page(page_index).get_layer(layer_index);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            width,
            height,
            cursor: height - MARGIN_MM,
        })
    }

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * MARGIN_MM
    }

    fn usable_height(&self) -> f32 {
        self.height - 2.0 * MARGIN_MM
    }

    fn advance(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    /// Start a new page when less than `needed` mm remain above the margin.
    fn ensure_space(&mut self, needed: f32) -> bool {
        if self.cursor - needed >= MARGIN_MM {
            return false;
        }
        let (page_index, layer_index) = self
            .doc
            .add_page(Mm(self.width), Mm(self.height), LAYER_NAME);
        self.layer = self.doc.get_page(page_index).get_layer(layer_index);
        self.cursor = self.height - MARGIN_MM;
        true
    }

    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.cursor), font);
    }

    fn image(&mut self, snapshot: &ChartSnapshot) {
        if snapshot.width() == 0 || snapshot.height() == 0 {
            warn!("skipping empty chart snapshot");
            return;
        }
        let decoded = match image_crate::load_from_memory(snapshot.png()) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(error = %e, "chart snapshot could not be decoded, PDF will omit it");
                return;
            }
        };

        let (width_mm, height_mm) = fit_image(
            snapshot.width(),
            snapshot.height(),
            self.usable_width(),
            self.usable_height() - GAP_MM,
        );
        self.ensure_space(height_mm + GAP_MM);

        Image::from_dynamic_image(&decoded).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_MM)),
                translate_y: Some(Mm(self.cursor - height_mm)),
                dpi: Some(snapshot.width() as f32 * MM_PER_INCH / width_mm),
                ..Default::default()
            },
        );
        self.advance(height_mm + GAP_MM + LINE_MM);
    }

    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        let column_mm = self.usable_width() / headers.len().max(1) as f32;

        self.ensure_space(2.0 * ROW_MM);
        self.table_row(headers, column_mm, true);
        for row in rows {
            if self.ensure_space(ROW_MM) {
                self.table_row(headers, column_mm, true);
            }
            self.table_row(row, column_mm, false);
        }
    }

    fn table_row(&mut self, cells: &[String], column_mm: f32, bold: bool) {
        for (i, cell) in cells.iter().enumerate() {
            let x = MARGIN_MM + i as f32 * column_mm;
            self.text(cell, TABLE_PT, x, bold);
        }
        self.advance(ROW_MM);
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc.save_to_bytes().map_err(pdf_err)
    }
}

/// Size in mm for a `px_w` x `px_h` image: full `max_w` wide unless that
/// would exceed `max_h`, in which case the height is capped and the width
/// scaled down to keep the aspect ratio.
fn fit_image(px_w: u32, px_h: u32, max_w: f32, max_h: f32) -> (f32, f32) {
    let aspect = px_h as f32 / px_w as f32;
    let height = max_w * aspect;
    if height <= max_h {
        (max_w, height)
    } else {
        (max_h / aspect, max_h)
    }
}

fn pdf_err(e: impl Debug) -> ExportError {
    ExportError::Pdf {
        reason: format!("{e:?}"),
    }
}
