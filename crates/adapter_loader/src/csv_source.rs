//! Single price file reader.

use std::path::Path;

use simgraph_core::types::{Date, TimeSeries};
use tracing::debug;

use crate::directory::LoaderConfig;
use crate::error::LoaderError;

/// Reads one price file into a [`TimeSeries`] keyed by its file name.
///
/// Returns `Ok(None)` if the file has no data rows.
///
/// # Errors
///
/// Fails on unreadable files, short rows, unparsable dates or prices, and
/// rows that break the series invariants (such as descending dates).
pub fn read_price_file(path: &Path, config: &LoaderConfig) -> Result<Option<TimeSeries>, LoaderError> {
    let key = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut dates = Vec::new();
    let mut values = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let field = |column: usize| {
            record.get(column).ok_or_else(|| LoaderError::MissingColumn {
                path: path.to_path_buf(),
                line,
                column,
            })
        };

        let date = Date::parse(field(config.date_column)?).map_err(|source| {
            LoaderError::InvalidDate {
                path: path.to_path_buf(),
                line,
                source,
            }
        })?;

        let raw = field(config.value_column)?;
        let value: f64 = raw.parse().map_err(|_| LoaderError::InvalidValue {
            path: path.to_path_buf(),
            line,
            value: raw.to_string(),
        })?;

        dates.push(date);
        values.push(value);
    }

    if dates.is_empty() {
        debug!("Skipping {}: no data rows", path.display());
        return Ok(None);
    }

    TimeSeries::new(key, dates, values)
        .map(Some)
        .map_err(|source| LoaderError::InvalidSeries {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_date_and_open() {
        let file = write_file(
            "Date,Open,High,Low,Close,Volume,OpenInt\n\
             2005-02-25,6.4987,6.6009,6.4668,6.5753,55766,0\n\
             2005-02-28,6.6072,6.7222,6.5753,6.6263,49343,0\n",
        );
        let series = read_price_file(file.path(), &LoaderConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.first_date(), Date::from_ymd(2005, 2, 25).unwrap());
        assert_eq!(series.values(), &[6.4987, 6.6072]);
        assert_eq!(
            series.id(),
            file.path().file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn test_header_only_is_skipped() {
        let file = write_file("Date,Open,High,Low,Close,Volume,OpenInt\n");
        assert!(read_price_file(file.path(), &LoaderConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let file = write_file("");
        assert!(read_price_file(file.path(), &LoaderConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_custom_value_column() {
        let file = write_file("Date,Open,High\n2010-01-04,1.0,2.0\n2010-01-05,1.5,2.5\n");
        let config = LoaderConfig::default().with_value_column(2);
        let series = read_price_file(file.path(), &config).unwrap().unwrap();
        assert_eq!(series.values(), &[2.0, 2.5]);
    }

    #[test]
    fn test_bad_date_reports_line() {
        let file = write_file("Date,Open\n2010-01-04,1.0\n04/01/2010,1.0\n");
        let err = read_price_file(file.path(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidDate { line: 3, .. }), "{:?}", err);
    }

    #[test]
    fn test_bad_price_reports_value() {
        let file = write_file("Date,Open\n2010-01-04,abc\n");
        let err = read_price_file(file.path(), &LoaderConfig::default()).unwrap_err();
        match err {
            LoaderError::InvalidValue { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_missing_column() {
        let file = write_file("Date,Open\n2010-01-04\n");
        let err = read_price_file(file.path(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::MissingColumn { column: 1, .. }
        ));
    }

    #[test]
    fn test_unsorted_rows_are_rejected() {
        let file = write_file("Date,Open\n2010-01-05,1.0\n2010-01-04,1.0\n");
        let err = read_price_file(file.path(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidSeries { .. }));
    }
}
