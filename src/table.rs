//! Headline table surface.

use crate::data::Dataset;
use crate::filter::{highlight_title, TitleSegment};

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineRow {
    /// Title key.
    pub title: String,
    /// Title split around search hits.
    pub segments: Vec<TitleSegment>,
    /// Formatted publish date.
    pub date: String,
    /// Dataset index of the record.
    pub record: usize,
}

/// Rows of matching headlines, newest first.
#[derive(Debug, Clone, Default)]
pub struct HeadlineTable {
    rows: Vec<HeadlineRow>,
    visible: bool,
    highlighted: Option<String>,
}

impl HeadlineTable {
    /// Create an empty, hidden table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with the records in `view`, sorted by date descending.
    ///
    /// Equal dates keep dataset order.
    pub fn update(&mut self, dataset: &Dataset, view: &[usize], search_text: &str) {
        let mut ordered: Vec<usize> = view.to_vec();
        ordered.sort_by(|&a, &b| {
            let da = dataset.get(a).map(|r| r.publish_date);
            let db = dataset.get(b).map(|r| r.publish_date);
            db.cmp(&da)
        });

        self.rows = ordered
            .into_iter()
            .filter_map(|idx| {
                let record = dataset.get(idx)?;
                Some(HeadlineRow {
                    title: record.title.clone(),
                    segments: highlight_title(&record.title, search_text),
                    date: record.short_date(),
                    record: idx,
                })
            })
            .collect();

        let still_listed = self
            .highlighted
            .as_deref()
            .map_or(true, |t| self.position(t).is_some());
        if !still_listed {
            self.highlighted = None;
        }
    }

    /// Remove all rows and hide the table.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.highlighted = None;
        self.visible = false;
    }

    /// Show the table.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Whether the table is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current rows.
    pub fn rows(&self) -> &[HeadlineRow] {
        &self.rows
    }

    /// Position of the row with this title.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.title == title)
    }

    /// Highlight the row with this title, or clear the highlight.
    pub fn set_highlight(&mut self, title: Option<&str>) {
        self.highlighted = title
            .filter(|t| self.position(t).is_some())
            .map(str::to_string);
    }

    /// Title of the highlighted row.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}
