//! Chart Models
//!
//! Builds the two dashboard widgets (monthly trend line, per-source
//! doughnut) and owns the widget lifecycle discipline: a redraw always
//! disposes the prior widget instance before mounting a new one, never
//! restyling in place. Handles are returned to the caller, which holds
//! and disposes them explicitly.

use std::collections::HashMap;

use chrono::{Months, Utc};

use super::calculator::{EmissionBreakdown, EmissionFactors, UsageInput};
use super::theme::{ChartPalette, Theme, SOURCE_COLORS, TREND_BORDER, TREND_FILL};

/// Static monthly totals (tCO₂) backing the trend line.
///
/// Sample data until real history is wired in; the last entry doubles as
/// the company total for the industry-comparison KPI.
pub const SAMPLE_TREND: [f64; 6] = [420.0, 400.0, 480.0, 460.0, 475.0, 450.0];

/// The company's own total emission (tCO₂), the most recent trend value
pub const fn sample_total() -> f64 {
    SAMPLE_TREND[SAMPLE_TREND.len() - 1]
}

/// Widget shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
}

/// The two canvas anchors on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartAnchor {
    Trend,
    Source,
}

/// One data series inside a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// Fill/segment colors; one per point for doughnuts, one for lines
    pub colors: Vec<&'static str>,
    pub border_color: Option<&'static str>,
}

/// Complete description of a widget to mount
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub palette: ChartPalette,
}

/// Build the monthly-trend line spec for the given theme
pub fn trend_spec(theme: Theme) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: recent_month_labels(SAMPLE_TREND.len()),
        datasets: vec![Dataset {
            label: "Total emissions (tCO₂)".to_string(),
            data: SAMPLE_TREND.to_vec(),
            colors: vec![TREND_FILL],
            border_color: Some(TREND_BORDER),
        }],
        palette: theme.palette(),
    }
}

/// Build the per-source doughnut spec from the current emissions
pub fn source_spec(theme: Theme, breakdown: &EmissionBreakdown) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: vec![
            "Power (kWh)".to_string(),
            "Diesel (L)".to_string(),
            "City gas (m³)".to_string(),
        ],
        datasets: vec![Dataset {
            label: "Source share (tCO₂)".to_string(),
            data: breakdown.as_series().to_vec(),
            colors: SOURCE_COLORS.to_vec(),
            border_color: None,
        }],
        palette: theme.palette(),
    }
}

/// Labels for the most recent `n` months, oldest first
fn recent_month_labels(n: usize) -> Vec<String> {
    let today = Utc::now().date_naive();
    (0..n)
        .rev()
        .map(|back| {
            today
                .checked_sub_months(Months::new(back as u32))
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Opaque identifier a surface assigns to a mounted widget
pub type WidgetId = u64;

/// Caller-owned reference to one mounted widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle {
    id: WidgetId,
    anchor: ChartAnchor,
}

impl ChartHandle {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn anchor(&self) -> ChartAnchor {
        self.anchor
    }
}

/// Where chart widgets are mounted.
///
/// Implementations stand in for the pair of canvas regions on the page.
pub trait ChartSurface {
    /// Mount a widget at the anchor. Returns `None` when the anchor is
    /// absent, in which case rendering for that widget is skipped.
    fn mount(&mut self, anchor: ChartAnchor, spec: ChartSpec) -> Option<WidgetId>;

    /// Tear down a previously mounted widget. Unknown ids are ignored.
    fn unmount(&mut self, id: WidgetId);
}

/// The handle set produced by one render pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderedCharts {
    trend: Option<ChartHandle>,
    source: Option<ChartHandle>,
}

impl RenderedCharts {
    pub fn trend(&self) -> Option<ChartHandle> {
        self.trend
    }

    pub fn source(&self) -> Option<ChartHandle> {
        self.source
    }

    /// Number of live widgets this handle set owns
    pub fn widget_count(&self) -> usize {
        self.trend.iter().count() + self.source.iter().count()
    }

    /// Tear down both widgets. Consumes the handles so a disposed set
    /// cannot be reused.
    pub fn dispose(self, surface: &mut dyn ChartSurface) {
        if let Some(handle) = self.trend {
            surface.unmount(handle.id);
        }
        if let Some(handle) = self.source {
            surface.unmount(handle.id);
        }
    }
}

/// Render both dashboard charts for the given theme and usage.
///
/// Any prior handle set is disposed first; the underlying widgets cannot
/// be restyled in place, so a redraw is always destroy-then-recreate.
pub fn render_dashboard(
    surface: &mut dyn ChartSurface,
    theme: Theme,
    usage: &UsageInput,
    factors: &EmissionFactors,
    prior: Option<RenderedCharts>,
) -> RenderedCharts {
    if let Some(prior) = prior {
        prior.dispose(surface);
    }

    let breakdown = usage.emissions(factors);

    let trend = surface
        .mount(ChartAnchor::Trend, trend_spec(theme))
        .map(|id| ChartHandle {
            id,
            anchor: ChartAnchor::Trend,
        });
    let source = surface
        .mount(ChartAnchor::Source, source_spec(theme, &breakdown))
        .map(|id| ChartHandle {
            id,
            anchor: ChartAnchor::Source,
        });

    RenderedCharts { trend, source }
}

/// Headless surface holding mounted specs in memory.
///
/// Backs tests and any embedder that renders the specs itself.
#[derive(Debug)]
pub struct InMemorySurface {
    anchors: Vec<ChartAnchor>,
    widgets: HashMap<WidgetId, (ChartAnchor, ChartSpec)>,
    next_id: WidgetId,
}

impl InMemorySurface {
    /// Surface with both anchors present
    pub fn new() -> Self {
        Self::with_anchors(&[ChartAnchor::Trend, ChartAnchor::Source])
    }

    /// Surface exposing only the given anchors
    pub fn with_anchors(anchors: &[ChartAnchor]) -> Self {
        Self {
            anchors: anchors.to_vec(),
            widgets: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of currently mounted widgets
    pub fn live_count(&self) -> usize {
        self.widgets.len()
    }

    /// The spec mounted at an anchor, if any
    pub fn spec_at(&self, anchor: ChartAnchor) -> Option<&ChartSpec> {
        self.widgets
            .values()
            .find(|(a, _)| *a == anchor)
            .map(|(_, spec)| spec)
    }
}

impl ChartSurface for InMemorySurface {
    fn mount(&mut self, anchor: ChartAnchor, spec: ChartSpec) -> Option<WidgetId> {
        if !self.anchors.contains(&anchor) {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.widgets.insert(id, (anchor, spec));
        Some(id)
    }

    fn unmount(&mut self, id: WidgetId) {
        self.widgets.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage() -> UsageInput {
        UsageInput::new(1000.0, 50.0, 200.0)
    }

    #[test]
    fn render_mounts_both_widgets() {
        let mut surface = InMemorySurface::new();
        let charts = render_dashboard(
            &mut surface,
            Theme::Light,
            &usage(),
            &EmissionFactors::default(),
            None,
        );

        assert_eq!(charts.widget_count(), 2);
        assert_eq!(surface.live_count(), 2);
        assert_eq!(
            surface.spec_at(ChartAnchor::Trend).map(|s| s.kind),
            Some(ChartKind::Line)
        );
        assert_eq!(
            surface.spec_at(ChartAnchor::Source).map(|s| s.kind),
            Some(ChartKind::Doughnut)
        );
    }

    #[test]
    fn rerender_disposes_prior_widgets() {
        let mut surface = InMemorySurface::new();
        let factors = EmissionFactors::default();

        let first = render_dashboard(&mut surface, Theme::Light, &usage(), &factors, None);
        let first_trend = first.trend();
        let second =
            render_dashboard(&mut surface, Theme::Dark, &usage(), &factors, Some(first));

        // No duplicate live instances, and the new handles are fresh.
        assert_eq!(surface.live_count(), 2);
        assert_eq!(second.widget_count(), 2);
        assert_ne!(second.trend(), first_trend);
    }

    #[test]
    fn missing_anchor_is_silently_skipped() {
        let mut surface = InMemorySurface::with_anchors(&[ChartAnchor::Trend]);
        let charts = render_dashboard(
            &mut surface,
            Theme::Light,
            &usage(),
            &EmissionFactors::default(),
            None,
        );

        assert!(charts.trend().is_some());
        assert!(charts.source().is_none());
        assert_eq!(surface.live_count(), 1);
    }

    #[test]
    fn theme_toggle_round_trips_colors() {
        let light = trend_spec(Theme::Light);
        let toggled_back = trend_spec(Theme::Dark.toggled());
        assert_eq!(light.palette, toggled_back.palette);
        assert_ne!(light.palette, trend_spec(Theme::Dark).palette);
    }

    #[test]
    fn doughnut_carries_derived_emissions() {
        let breakdown = usage().emissions(&EmissionFactors::default());
        let spec = source_spec(Theme::Dark, &breakdown);
        assert_eq!(spec.datasets[0].data, breakdown.as_series().to_vec());
        assert_eq!(spec.datasets[0].colors.len(), 3);
    }

    #[test]
    fn trend_has_one_label_per_sample() {
        let spec = trend_spec(Theme::Light);
        assert_eq!(spec.labels.len(), SAMPLE_TREND.len());
        assert_eq!(spec.datasets[0].data.last(), Some(&sample_total()));
    }
}
