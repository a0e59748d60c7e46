//! Pure projections of a `ForecastResult`: display rows, the shared column
//! set, formatted tables, and the saved-result views.

pub mod columns;
pub mod format;
pub mod ordering;
pub mod projector;
pub mod row;
pub mod table;
pub mod views;

pub use columns::ColumnSet;
pub use ordering::sort_for_display;
pub use projector::SeriesProjector;
pub use row::Row;
pub use table::Table;
pub use views::{DetailView, ThumbnailView};
