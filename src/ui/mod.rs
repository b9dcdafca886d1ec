//! User interface rendering.

pub mod formatters;
mod theme;
mod viewer;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    viewer::draw_viewer(f, app);
}
