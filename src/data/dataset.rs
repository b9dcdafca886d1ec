//! Loaded dataset.

use super::Record;
use crate::error::{Result, VizError};
use std::collections::HashMap;
use std::path::PathBuf;

/// An ordered, immutable collection of records keyed by title.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Path to the source file, if loaded from disk.
    pub file_path: Option<PathBuf>,
    records: Vec<Record>,
    by_title: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate titles.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut by_title = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_title.insert(record.title.clone(), idx).is_some() {
                return Err(VizError::duplicate_title(&record.title));
            }
        }

        Ok(Self {
            file_path: None,
            records,
            by_title,
        })
    }

    /// Attach the source path.
    pub fn with_file_path(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at a dataset index.
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    /// Dataset index of the record with this title.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Record with this title.
    pub fn find(&self, title: &str) -> Option<&Record> {
        self.index_of(title).and_then(|idx| self.records.get(idx))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display name of the source file.
    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(title: &str) -> Record {
        Record::new(
            title,
            1.0,
            2.0,
            "https://example.com",
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
        )
    }

    #[test]
    fn looks_up_by_title() {
        let dataset = Dataset::new(vec![record("a"), record("b")]).unwrap();
        assert_eq!(dataset.index_of("b"), Some(1));
        assert_eq!(dataset.find("a").map(|r| r.title.as_str()), Some("a"));
        assert!(dataset.find("c").is_none());
    }

    #[test]
    fn rejects_duplicate_titles() {
        let err = Dataset::new(vec![record("a"), record("a")]).unwrap_err();
        assert!(matches!(err, VizError::DuplicateTitle { ref title } if title == "a"));
        assert!(err.is_data_load_failure());
    }
}
