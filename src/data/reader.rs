//! CSV dataset reader.

use super::{parse_publish_date, Dataset, Record};
use crate::error::{Result, VizError};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One CSV row before date parsing. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    title: String,
    x: f64,
    y: f64,
    url: String,
    publish_date: String,
}

/// Article CSV reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a dataset from a CSV file.
    pub fn read_file(path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|e| VizError::file_open(path.to_path_buf(), e))?;
        let dataset = Self::read_csv(file)?.with_file_path(path.to_path_buf());

        tracing::info!(
            "Loaded {} records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Read a dataset from any CSV source.
    pub fn read_csv<R: Read>(source: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let raw: RawRecord = row.deserialize(Some(&headers))?;

            let publish_date = parse_publish_date(&raw.publish_date)
                .ok_or_else(|| VizError::invalid_date(line, &raw.publish_date))?;

            records.push(Record {
                title: raw.title,
                x: raw.x,
                y: raw.y,
                url: raw.url,
                publish_date,
            });
        }

        Dataset::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reads_rows_in_order() {
        let csv = "\
title,x,y,url,publish_date
Alpha,1.5,-2,https://a.example,2021-01-01
Beta, 3 ,4.25,https://b.example,2023-06-15T10:00:00Z
";
        let dataset = DataReader::read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);

        let beta = dataset.get(1).unwrap();
        assert_eq!(beta.title, "Beta");
        assert_eq!(beta.x, 3.0);
        assert_eq!(beta.y, 4.25);
        assert_eq!(
            beta.publish_date,
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
    }

    #[test]
    fn ignores_extra_columns_and_column_order() {
        let csv = "\
id,publish_date,url,y,x,title,source
7,2022-03-10,https://c.example,1,2,Gamma,wire
";
        let dataset = DataReader::read_csv(csv.as_bytes()).unwrap();
        let gamma = dataset.find("Gamma").unwrap();
        assert_eq!((gamma.x, gamma.y), (2.0, 1.0));
    }

    #[test]
    fn missing_column_is_a_load_failure() {
        let csv = "title,x,y,publish_date\nAlpha,1,2,2021-01-01\n";
        let err = DataReader::read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, VizError::Csv(_)));
        assert!(err.is_data_load_failure());
    }

    #[test]
    fn non_numeric_coordinate_is_a_load_failure() {
        let csv = "title,x,y,url,publish_date\nAlpha,east,2,u,2021-01-01\n";
        assert!(matches!(
            DataReader::read_csv(csv.as_bytes()),
            Err(VizError::Csv(_))
        ));
    }

    #[test]
    fn bad_date_reports_its_line() {
        let csv = "\
title,x,y,url,publish_date
Alpha,1,2,u,2021-01-01
Beta,1,2,u,someday
";
        match DataReader::read_csv(csv.as_bytes()) {
            Err(VizError::InvalidDate { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "someday");
            },
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = DataReader::read_file(Path::new("/nonexistent/vis_dims.csv")).unwrap_err();
        assert!(matches!(err, VizError::FileOpen { .. }));
    }
}
