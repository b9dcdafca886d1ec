//! Application state and logic.

use crate::clipboard;
use crate::controller::PlotFilterController;
use crate::search::SearchState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Surface that receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The scatter plot.
    #[default]
    Plot,
    /// The headline table.
    Table,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Filter controller owning the dataset.
    pub controller: PlotFilterController,
    /// Search box.
    pub search: SearchState,
    /// Focused surface.
    pub focus: Focus,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new(controller: PlotFilterController) -> Self {
        let status = format!(
            "{} loaded: {} records",
            controller
                .dataset()
                .file_name()
                .unwrap_or_else(|| "dataset".to_string()),
            controller.dataset().len()
        );

        let mut app = Self {
            controller,
            search: SearchState::new(),
            focus: Focus::Plot,
            status,
            theme: Theme::GruvboxDark,
        };
        let initial = app.controller.search_text().to_string();
        app.search.set(&initial);
        app
    }

    /// Rerun the filter with the search box contents.
    pub fn apply_search(&mut self) {
        let text = self.search.buffer().to_string();
        let update = self.controller.set_filter_text(&text);
        if update.table_visible != Some(true) && self.focus == Focus::Table {
            self.focus = Focus::Plot;
        }
        self.status = self.match_summary();
    }

    /// Set the search text programmatically.
    pub fn set_filter_text(&mut self, text: &str) {
        self.search.set(text);
        self.apply_search();
    }

    /// Reset the search box and the filter.
    pub fn clear_filter(&mut self) {
        self.search.clear();
        self.controller.clear();
        self.focus = Focus::Plot;
        self.status = "Filter cleared".to_string();
    }

    fn match_summary(&self) -> String {
        let total = self.controller.dataset().len();
        let shown = self.controller.view().len();
        if self.controller.search_text().trim().is_empty() {
            format!("Showing all {} records", total)
        } else {
            format!(
                "{} of {} records match '{}'",
                shown,
                total,
                self.controller.search_text()
            )
        }
    }

    /// Whether the table surface is on screen.
    pub fn table_visible(&self) -> bool {
        self.controller
            .table()
            .map(|t| t.is_visible())
            .unwrap_or(false)
    }

    /// Switch cursor keys between plot and table.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Plot if self.table_visible() => Focus::Table,
            _ => Focus::Plot,
        };
        self.status = match self.focus {
            Focus::Plot => "Focus: plot".to_string(),
            Focus::Table => "Focus: headlines".to_string(),
        };
    }

    /// Titles the cursor walks through on the focused surface.
    fn cursor_titles(&self) -> Vec<String> {
        match self.focus {
            Focus::Plot => self
                .controller
                .points()
                .points()
                .iter()
                .map(|p| p.title.clone())
                .collect(),
            Focus::Table => self
                .controller
                .table()
                .map(|t| t.rows().iter().map(|r| r.title.clone()).collect())
                .unwrap_or_default(),
        }
    }

    /// Position of the hovered record on the focused surface.
    pub fn cursor(&self) -> Option<usize> {
        let hovered = self.controller.hovered()?;
        self.cursor_titles().iter().position(|t| t == hovered)
    }

    /// Hover the next record on the focused surface.
    pub fn cursor_down(&mut self) {
        self.move_cursor(1);
    }

    /// Hover the previous record on the focused surface.
    pub fn cursor_up(&mut self) {
        self.move_cursor(-1);
    }

    fn move_cursor(&mut self, delta: isize) {
        let titles = self.cursor_titles();
        if titles.is_empty() {
            return;
        }

        let len = titles.len() as isize;
        let next = match self.cursor() {
            Some(current) => (current as isize + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        } as usize;

        let title = &titles[next];
        let hovered = match self.focus {
            Focus::Plot => self.controller.on_hover(title),
            Focus::Table => self.controller.on_row_hover(title),
        };
        if hovered {
            self.status = format!("{}/{}", next + 1, titles.len());
        }
    }

    /// Drop the hover.
    pub fn hover_end(&mut self) {
        if let Some(title) = self.controller.hovered().map(str::to_string) {
            match self.focus {
                Focus::Plot => self.controller.on_hover_end(&title),
                Focus::Table => self.controller.on_row_hover_end(&title),
            }
        }
    }

    /// Open the hovered record's link.
    pub fn select_hovered(&mut self) {
        match self.controller.hovered().map(str::to_string) {
            Some(title) => {
                self.controller.on_select(&title);
                self.status = format!("Opening {}", title);
            },
            None => self.status = "No headline selected".to_string(),
        }
    }

    /// Copy the hovered record's link.
    pub fn copy_hovered_link(&mut self) {
        let record = self
            .controller
            .hovered()
            .and_then(|t| self.controller.dataset().find(t));

        self.status = match record {
            Some(record) => match clipboard::copy_record_link(record) {
                Ok(()) => format!("Copied {}", record.url),
                Err(e) => format!("Copy failed: {}", e),
            },
            None => "No headline selected".to_string(),
        };
    }

    /// Cycle through themes.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::data::{Dataset, Record};
    use chrono::NaiveDate;

    fn app() -> App {
        let date = |d| NaiveDate::from_ymd_opt(2022, 1, d).unwrap();
        let dataset = Dataset::new(vec![
            Record::new("Wind farms", 0.0, 0.0, "https://a", date(1)),
            Record::new("Calm seas", 1.0, 1.0, "https://b", date(2)),
            Record::new("More wind", 2.0, 2.0, "https://c", date(3)),
        ])
        .unwrap();
        App::new(PlotFilterController::new(dataset, ViewerConfig::with_table()))
    }

    #[test]
    fn status_names_the_loaded_file() {
        let app = app();
        assert_eq!(app.status, "dataset loaded: 3 records");

        let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let dataset = Dataset::new(vec![Record::new("One", 0.0, 0.0, "https://a", date)])
            .unwrap()
            .with_file_path("data/articles.csv".into());
        let app = App::new(PlotFilterController::new(dataset, ViewerConfig::default()));
        assert_eq!(app.status, "articles.csv loaded: 1 records");
    }

    #[test]
    fn typing_filters_live() {
        let mut app = app();
        app.search.start();
        for c in "wind".chars() {
            app.search.input(c);
            app.apply_search();
        }
        assert_eq!(app.controller.view(), &[0, 2]);
        assert!(app.table_visible());
        assert_eq!(app.status, "2 of 3 records match 'wind'");
    }

    #[test]
    fn cursor_wraps_on_plot() {
        let mut app = app();
        app.cursor_up();
        assert_eq!(app.controller.hovered(), Some("More wind"));
        app.cursor_down();
        assert_eq!(app.controller.hovered(), Some("Wind farms"));
    }

    #[test]
    fn table_cursor_follows_table_order() {
        let mut app = app();
        app.set_filter_text("wind");
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Table);

        app.cursor_down();
        assert_eq!(app.controller.hovered(), Some("More wind"));
        assert_eq!(
            app.controller.table().unwrap().highlighted(),
            Some("More wind")
        );
    }

    #[test]
    fn focus_stays_on_plot_without_table() {
        let mut app = app();
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Plot);
    }

    #[test]
    fn clearing_returns_focus_to_plot() {
        let mut app = app();
        app.set_filter_text("wind");
        app.toggle_focus();
        app.clear_filter();
        assert_eq!(app.focus, Focus::Plot);
        assert_eq!(app.search.buffer(), "");
        assert!(!app.table_visible());
    }
}
