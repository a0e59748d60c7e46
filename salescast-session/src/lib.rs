//! # salescast-session
//!
//! `ForecastSession` is the short-lived context a caller owns for one
//! forecast screen. It holds the selected dataset and region, the current
//! result, and the chart showing it. Nothing here is process-wide: two
//! sessions never share state.

pub mod context;
pub mod session;

pub use context::SelectionContext;
pub use session::ForecastSession;
