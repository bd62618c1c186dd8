//! schedule-grid: layout engine for calendar week/day lesson grids.
//!
//! Raw lesson records are normalized, grouped into grade or teacher columns,
//! packed into non-overlapping lanes per column and date, and finally turned
//! into percentage/pixel geometry for a rendering layer.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LayoutConfig, LayoutEngine, LayoutFrame};
pub use error::{LayoutError, LayoutResult};
