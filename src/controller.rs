//! The plot filter controller.
//!
//! Owns the dataset and every piece of derived state: the filtered view,
//! the keyed point set, the optional headline table and the single tooltip.
//! All filter entry points run the same pipeline and report a [`ViewUpdate`].

use crate::config::{PlotGeometry, ViewerConfig};
use crate::data::{Dataset, Record};
use crate::filter::{MatchPolicy, TitleFilter};
use crate::opener::{SystemOpener, UrlOpener};
use crate::plot::{PointDiff, PointSet};
use crate::table::HeadlineTable;

/// The transient hover popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Record title.
    pub title: String,
    /// `Published on <date>` line.
    pub published: String,
    /// Pixel position of the point, when it is on screen.
    pub anchor: Option<(f64, f64)>,
}

/// Result of one run of the filter pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    /// Dataset indices in the new view, in dataset order.
    pub view: Vec<usize>,
    /// Point changes.
    pub points: PointDiff,
    /// Table visibility, or `None` without a table surface.
    pub table_visible: Option<bool>,
    /// Number of table rows after the update.
    pub table_rows: usize,
}

/// Drives the plot and table from a single search text.
#[derive(Debug)]
pub struct PlotFilterController {
    dataset: Dataset,
    config: ViewerConfig,
    search_text: String,
    view: Vec<usize>,
    points: PointSet,
    table: Option<HeadlineTable>,
    tooltip: Option<Tooltip>,
    hovered: Option<String>,
    opener: Box<dyn UrlOpener>,
}

impl PlotFilterController {
    /// Create a controller showing the whole dataset.
    pub fn new(dataset: Dataset, config: ViewerConfig) -> Self {
        let points = PointSet::new(&dataset, &config.geometry);
        let view = (0..dataset.len()).collect();
        let table = config.table_enabled.then(HeadlineTable::new);

        Self {
            dataset,
            config,
            search_text: String::new(),
            view,
            points,
            table,
            tooltip: None,
            hovered: None,
            opener: Box::new(SystemOpener),
        }
    }

    /// Replace the link opener.
    pub fn with_opener(mut self, opener: Box<dyn UrlOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Apply new search text from the search box.
    pub fn set_filter_text(&mut self, text: &str) -> ViewUpdate {
        self.search_text = text.to_string();

        let filter = TitleFilter::new(text, self.config.policy);
        self.view = filter.apply(&self.dataset);
        let points = self.points.update(&self.dataset, &self.view);

        if let Some(table) = self.table.as_mut() {
            if filter.is_empty() {
                table.clear();
            } else {
                table.update(&self.dataset, &self.view, text);
                table.show();
                table.set_highlight(self.hovered.as_deref());
            }
        }

        if let Some(title) = self.hovered.clone() {
            if self.points.get(&title).is_none() {
                self.on_hover_end(&title);
            }
        }

        tracing::debug!(
            "Filter {:?} ({}): {} of {} records, +{} -{}",
            text,
            self.config.policy.name(),
            self.view.len(),
            self.dataset.len(),
            points.entered.len(),
            points.exited.len()
        );

        ViewUpdate {
            view: self.view.clone(),
            points,
            table_visible: self.table.as_ref().map(HeadlineTable::is_visible),
            table_rows: self.table.as_ref().map_or(0, |t| t.rows().len()),
        }
    }

    /// Programmatic equivalent of typing `text` into the search box.
    pub fn set_filter_text_externally(&mut self, text: &str) -> ViewUpdate {
        tracing::info!("Filter set externally: {:?}", text);
        self.set_filter_text(text)
    }

    /// Reset the search text and hide the table.
    pub fn clear(&mut self) -> ViewUpdate {
        self.set_filter_text("")
    }

    /// Pointer entered a point.
    pub fn on_hover(&mut self, title: &str) -> bool {
        self.hover(title)
    }

    /// Pointer left a point.
    pub fn on_hover_end(&mut self, title: &str) {
        if self.hovered.as_deref() == Some(title) {
            self.hovered = None;
        }
        self.tooltip = None;
        if let Some(table) = self.table.as_mut() {
            table.set_highlight(None);
        }
    }

    /// Pointer entered a table row.
    pub fn on_row_hover(&mut self, title: &str) -> bool {
        self.hover(title)
    }

    /// Pointer left a table row.
    pub fn on_row_hover_end(&mut self, title: &str) {
        self.on_hover_end(title);
    }

    fn hover(&mut self, title: &str) -> bool {
        if !self.show_tooltip_for_title(title) {
            return false;
        }
        self.hovered = Some(title.to_string());
        if let Some(table) = self.table.as_mut() {
            table.set_highlight(Some(title));
        }
        true
    }

    /// Show the tooltip for a title without a hover event.
    ///
    /// Any previous tooltip is retired first. Returns `false` for unknown titles.
    pub fn show_tooltip_for_title(&mut self, title: &str) -> bool {
        self.tooltip = None;

        let Some(record) = self.dataset.find(title) else {
            return false;
        };
        self.tooltip = Some(Tooltip {
            title: record.title.clone(),
            published: format!("Published on {}", record.long_date()),
            anchor: self.points.get(title).map(|p| (p.cx, p.cy)),
        });
        true
    }

    /// Open the record's link. Failures are logged, never returned.
    pub fn on_select(&self, title: &str) {
        let Some(record) = self.dataset.find(title) else {
            return;
        };
        match self.opener.open(&record.url) {
            Ok(()) => tracing::info!("Opened {}", record.url),
            Err(e) => tracing::warn!("Could not open {}: {}", record.url, e),
        }
    }

    /// The full dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Active search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Dataset indices of the filtered view.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Records in the filtered view, in dataset order.
    pub fn view_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.view.iter().filter_map(|&idx| self.dataset.get(idx))
    }

    /// Rendered points.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Headline table, if the surface exists.
    pub fn table(&self) -> Option<&HeadlineTable> {
        self.table.as_ref()
    }

    /// Active tooltip.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Title of the hovered record.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Matching rule in use.
    pub fn policy(&self) -> MatchPolicy {
        self.config.policy
    }

    /// Canvas geometry.
    pub fn geometry(&self) -> &PlotGeometry {
        &self.config.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BlockedOpener;

    impl UrlOpener for BlockedOpener {
        fn open(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "blocked"))
        }
    }

    fn record(title: &str, x: f64, y: f64, date: (i32, u32, u32)) -> Record {
        Record::new(
            title,
            x,
            y,
            format!("https://news.example/{}", title.len()),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record("Wind River Systems", 0.0, 0.0, (2021, 1, 1)),
            record("The Wind Rises", 4.0, 8.0, (2023, 6, 15)),
            record("Windy City Report", 2.0, 2.0, (2022, 3, 10)),
            record("Solar wind storms", 10.0, 10.0, (2022, 3, 10)),
        ])
        .unwrap()
    }

    fn controller() -> PlotFilterController {
        PlotFilterController::new(dataset(), ViewerConfig::with_table())
    }

    fn titles(c: &PlotFilterController) -> Vec<&str> {
        c.view_records().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_and_hidden_table() {
        let c = controller();
        assert_eq!(c.view(), &[0, 1, 2, 3]);
        assert_eq!(c.points().len(), 4);
        assert!(!c.table().unwrap().is_visible());
    }

    #[test]
    fn empty_text_restores_full_dataset() {
        let mut c = controller();
        c.set_filter_text("wind");
        let update = c.set_filter_text("");
        assert_eq!(update.view, vec![0, 1, 2, 3]);
        assert_eq!(update.table_visible, Some(false));
    }

    #[test]
    fn filter_updates_plot_and_table() {
        let mut c = controller();
        let update = c.set_filter_text("wind");

        assert_eq!(titles(&c), vec!["The Wind Rises", "Solar wind storms"]);
        assert_eq!(update.points.exited.len(), 2);
        assert_eq!(update.table_visible, Some(true));
        assert_eq!(update.table_rows, 2);

        let rows: Vec<&str> = c
            .table()
            .unwrap()
            .rows()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(rows, vec!["The Wind Rises", "Solar wind storms"]);
    }

    #[test]
    fn repeated_text_is_idempotent() {
        let mut c = controller();
        let first = c.set_filter_text("wind");
        let second = c.set_filter_text("wind");
        assert_eq!(first.view, second.view);
        assert!(second.points.is_unchanged());
    }

    #[test]
    fn kept_points_keep_identity_and_position() {
        let mut c = controller();
        let before = c.points().get("The Wind Rises").cloned().unwrap();

        c.set_filter_text("rises");
        let after = c.points().get("The Wind Rises").cloned().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn external_text_runs_the_same_pipeline() {
        let mut manual = controller();
        let mut external = controller();
        assert_eq!(
            manual.set_filter_text("storms"),
            external.set_filter_text_externally("storms")
        );
        assert_eq!(external.search_text(), "storms");
    }

    #[test]
    fn clear_resets_text_and_hides_table() {
        let mut c = controller();
        c.set_filter_text("wind");
        let update = c.clear();

        assert_eq!(c.search_text(), "");
        assert_eq!(update.view.len(), 4);
        assert_eq!(update.table_visible, Some(false));
        assert!(c.table().unwrap().rows().is_empty());
    }

    #[test]
    fn without_table_surface_nothing_is_tabulated() {
        let mut c = PlotFilterController::new(dataset(), ViewerConfig::default());
        let update = c.set_filter_text("wind");
        assert_eq!(update.table_visible, None);
        assert_eq!(update.table_rows, 0);
        assert!(c.table().is_none());
    }

    #[test]
    fn substring_policy_from_config() {
        let config = ViewerConfig {
            policy: MatchPolicy::Substring,
            ..ViewerConfig::with_table()
        };
        let mut c = PlotFilterController::new(dataset(), config);
        c.set_filter_text("wind");
        assert_eq!(c.view().len(), 4);
    }

    #[test]
    fn hover_shows_single_tooltip_and_highlights_row() {
        let mut c = controller();
        c.set_filter_text("wind");

        assert!(c.on_hover("The Wind Rises"));
        let tooltip = c.tooltip().unwrap();
        assert_eq!(tooltip.title, "The Wind Rises");
        assert_eq!(tooltip.published, "Published on Thu Jun 15 2023");
        assert!(tooltip.anchor.is_some());
        assert_eq!(c.table().unwrap().highlighted(), Some("The Wind Rises"));

        assert!(c.on_row_hover("Solar wind storms"));
        assert_eq!(c.tooltip().unwrap().title, "Solar wind storms");
        assert_eq!(c.hovered(), Some("Solar wind storms"));

        c.on_row_hover_end("Solar wind storms");
        assert!(c.tooltip().is_none());
        assert!(c.hovered().is_none());
        assert_eq!(c.table().unwrap().highlighted(), None);
    }

    #[test]
    fn hover_before_table_appears_highlights_row() {
        let mut c = controller();
        assert!(c.on_hover("The Wind Rises"));
        assert_eq!(c.table().unwrap().highlighted(), None);

        c.set_filter_text("wind");
        assert_eq!(c.table().unwrap().highlighted(), c.hovered());
        assert_eq!(c.table().unwrap().highlighted(), Some("The Wind Rises"));

        c.clear();
        c.set_filter_text("rises");
        assert_eq!(c.table().unwrap().highlighted(), Some("The Wind Rises"));
    }

    #[test]
    fn tooltip_for_unknown_title_retires_previous() {
        let mut c = controller();
        assert!(c.show_tooltip_for_title("Windy City Report"));
        assert!(!c.show_tooltip_for_title("No such headline"));
        assert!(c.tooltip().is_none());
    }

    #[test]
    fn filtering_out_hovered_point_ends_hover() {
        let mut c = controller();
        c.on_hover("Windy City Report");
        c.set_filter_text("storms");
        assert!(c.hovered().is_none());
        assert!(c.tooltip().is_none());
    }

    #[test]
    fn select_hands_url_to_opener() {
        let opener = RecordingOpener::default();
        let c = controller().with_opener(Box::new(opener.clone()));
        c.on_select("The Wind Rises");
        c.on_select("missing");
        assert_eq!(
            opener.opened.borrow().as_slice(),
            &["https://news.example/14".to_string()]
        );
    }

    #[test]
    fn blocked_open_is_swallowed() {
        let c = controller().with_opener(Box::new(BlockedOpener));
        c.on_select("The Wind Rises");
    }
}
