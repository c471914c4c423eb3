//! Dashboard Core
//!
//! The client-side logic of the emissions dashboard, kept headless:
//! usage-to-emission calculation, chart model construction, and the
//! widget lifecycle. DOM wiring (navigation, toggle buttons) lives with
//! the embedder, not here.

pub mod calculator;
pub mod charts;
pub mod theme;

pub use calculator::{EmissionBreakdown, EmissionFactors, UsageInput};
pub use charts::{
    render_dashboard, sample_total, ChartAnchor, ChartHandle, ChartKind, ChartSpec, ChartSurface,
    Dataset, InMemorySurface, RenderedCharts, WidgetId, SAMPLE_TREND,
};
pub use theme::{ChartPalette, Theme};
