//! Chart Theming
//!
//! Color configuration for the dashboard charts. The theme is passed
//! explicitly into every render call; nothing reads a global.

/// Dashboard color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Flip to the other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Axis/legend colors for this theme
    pub fn palette(self) -> ChartPalette {
        match self {
            Theme::Light => ChartPalette {
                text: "rgb(55, 65, 81)",
                grid: "rgba(209, 213, 219, 0.5)",
            },
            Theme::Dark => ChartPalette {
                text: "rgb(203, 213, 225)",
                grid: "rgba(71, 85, 105, 0.5)",
            },
        }
    }
}

/// Text and grid-line colors derived from a [`Theme`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub text: &'static str,
    pub grid: &'static str,
}

/// Border color of the monthly trend line
pub const TREND_BORDER: &str = "rgb(59, 130, 246)";

/// Fill color under the monthly trend line
pub const TREND_FILL: &str = "rgba(59, 130, 246, 0.1)";

/// Segment colors of the source-share doughnut: power, diesel, city gas
pub const SOURCE_COLORS: [&str; 3] = [
    "rgb(59, 130, 246)", // blue
    "rgb(234, 179, 8)",  // yellow
    "rgb(34, 197, 94)",  // green
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_palette() {
        let theme = Theme::Light;
        let original = theme.palette();
        let back = theme.toggled().toggled();
        assert_eq!(back, Theme::Light);
        assert_eq!(back.palette(), original);
    }

    #[test]
    fn themes_have_distinct_palettes() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
