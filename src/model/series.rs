use crate::model::dataset::{Dataset, DatasetError, columns};
use std::collections::BTreeMap;
use tracing::debug;

/// Group execution times by algorithm name, preserving row order inside each
/// group. Rows missing either value are skipped.
pub fn series_by_algorithm(data: &Dataset) -> Result<BTreeMap<String, Vec<f64>>, DatasetError> {
    let name_idx = require_column(data, columns::ALGORITHM_NAME)?;
    let time_idx = require_column(data, columns::EXECUTION_TIME)?;

    let mut out: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut skipped = 0usize;

    for (i, row) in data.rows().iter().enumerate() {
        let (Some(name), Some(time)) = (row[name_idx].as_deref(), row[time_idx].as_deref()) else {
            skipped += 1;
            continue;
        };

        let value: f64 = time.trim().parse().map_err(|_| DatasetError::InvalidNumber {
            row: i + 1,
            column: columns::EXECUTION_TIME.to_string(),
            value: time.to_string(),
        })?;

        out.entry(name.to_string()).or_default().push(value);
    }

    if skipped > 0 {
        debug!(skipped, "rows without algorithm or time");
    }
    Ok(out)
}

fn require_column(data: &Dataset, name: &str) -> Result<usize, DatasetError> {
    data.column_index(name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogRecord;
    use pretty_assertions::assert_eq;

    fn record(name: &str, ms: f64) -> LogRecord {
        LogRecord {
            problem_type: "balanced".to_string(),
            goal_check_delay: 0,
            problem_number: Some(1),
            execution_time: ms,
            algorithm_name: name.to_string(),
            solution_found: true,
        }
    }

    #[test]
    fn groups_times_in_row_order() {
        let data = Dataset::from_records(&[
            record("Sequential", 3.0),
            record("C++ any_of", 1.0),
            record("Sequential", 2.0),
            record("Sequential", 5.5),
        ]);

        let series = series_by_algorithm(&data).unwrap();
        let expected: BTreeMap<String, Vec<f64>> = [
            ("C++ any_of".to_string(), vec![1.0]),
            ("Sequential".to_string(), vec![3.0, 2.0, 5.5]),
        ]
        .into_iter()
        .collect();
        assert_eq!(series, expected);
    }

    #[test]
    fn skips_rows_with_missing_cells() {
        let mut data = Dataset::new(vec![
            columns::ALGORITHM_NAME.to_string(),
            columns::EXECUTION_TIME.to_string(),
        ]);
        data.push_row(vec![Some("Sequential".into()), None]).unwrap();
        data.push_row(vec![None, Some("1.0".into())]).unwrap();
        data.push_row(vec![Some("Sequential".into()), Some("4".into())]).unwrap();

        let series = series_by_algorithm(&data).unwrap();
        assert_eq!(series["Sequential"], vec![4.0]);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn rejects_non_numeric_time() {
        let mut data = Dataset::new(vec![
            columns::ALGORITHM_NAME.to_string(),
            columns::EXECUTION_TIME.to_string(),
        ]);
        data.push_row(vec![Some("Sequential".into()), Some("slow".into())])
            .unwrap();

        let err = series_by_algorithm(&data).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidNumber { row: 1, .. }));
    }

    #[test]
    fn requires_columns() {
        let data = Dataset::new(vec![columns::ALGORITHM_NAME.to_string()]);
        let err = series_by_algorithm(&data).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(c) if c == columns::EXECUTION_TIME));
    }
}
