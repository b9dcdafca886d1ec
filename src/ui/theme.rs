//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Secondary text color (dates, axis labels).
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused pane.
    pub focus_border: Color,
    /// Plotted point color.
    pub point: Color,
    /// Hovered point and row color.
    pub hover: Color,
    /// Search hit foreground.
    pub match_fg: Color,
    /// Search hit background.
    pub match_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                focus_border: Color::Rgb(251, 184, 108),
                point: Color::Rgb(131, 165, 152),
                hover: Color::Rgb(254, 128, 25),
                match_fg: Color::Rgb(40, 40, 40),
                match_bg: Color::Rgb(250, 189, 47),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                focus_border: Color::Rgb(175, 58, 3),
                point: Color::Rgb(7, 102, 120),
                hover: Color::Rgb(175, 58, 3),
                match_fg: Color::Rgb(251, 245, 234),
                match_bg: Color::Rgb(181, 118, 20),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
