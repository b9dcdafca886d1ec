//! Viewer configuration.

use crate::filter::MatchPolicy;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 30.0,
            bottom: 40.0,
            left: 50.0,
        }
    }
}

/// Canvas size and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    /// Margins around the plot area.
    pub margin: Margin,
    /// Outer canvas width.
    pub width: f64,
    /// Outer canvas height.
    pub height: f64,
}

impl PlotGeometry {
    /// Width left for points after margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height left for points after margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            width: 800.0,
            height: 500.0,
        }
    }
}

/// Everything that shapes a viewer instance.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    /// Plot canvas.
    pub geometry: PlotGeometry,
    /// Title matching rule.
    pub policy: MatchPolicy,
    /// Whether the headline table surface exists.
    pub table_enabled: bool,
}

impl ViewerConfig {
    /// Config with the table surface turned on.
    pub fn with_table() -> Self {
        Self {
            table_enabled: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_leaves_720_by_400() {
        let geometry = PlotGeometry::default();
        assert_eq!(geometry.inner_width(), 720.0);
        assert_eq!(geometry.inner_height(), 400.0);
    }

    #[test]
    fn tiny_canvas_clamps_to_zero() {
        let geometry = PlotGeometry {
            width: 40.0,
            height: 40.0,
            ..PlotGeometry::default()
        };
        assert_eq!(geometry.inner_width(), 0.0);
        assert_eq!(geometry.inner_height(), 0.0);
    }
}
