// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the box-plot chart API, rendering and PNG normalization.

pub mod chart;
pub mod category;
pub mod stats;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;
pub mod normalize;

pub use chart::{BoxPlotChart, RenderOptions};
pub use category::Category;
pub use stats::BoxStats;
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::{ChartError, Result};
pub use normalize::{normalize_png, NormalizeOutcome};
