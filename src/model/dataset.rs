use crate::log::LogRecord;

/// Column names written for parsed records, in persisted order.
pub mod columns {
    pub const PROBLEM_TYPE: &str = "problem_type";
    pub const GOAL_CHECK_DELAY: &str = "goal_check_delay";
    pub const PROBLEM_NUMBER: &str = "problem_number";
    pub const EXECUTION_TIME: &str = "execution_time";
    pub const ALGORITHM_NAME: &str = "algorithm_name";
    pub const SOLUTION_FOUND: &str = "solution_found";

    pub const RECORD_COLUMNS: [&str; 6] = [
        PROBLEM_TYPE,
        GOAL_CHECK_DELAY,
        PROBLEM_NUMBER,
        EXECUTION_TIME,
        ALGORITHM_NAME,
        SOLUTION_FOUND,
    ];
}

/// One table row; `None` marks a missing value.
pub type Row = Vec<Option<String>>;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset has no column {0:?}")]
    MissingColumn(String),

    #[error("row {row}: {column} value {value:?} is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row has {got} cells but the dataset has {expected} columns")]
    RowWidth { expected: usize, got: usize },
}

/// Ordered table of string cells with named columns.
///
/// Values are kept as text so that tables written by earlier runs (possibly
/// with other columns) can be carried forward untouched. Empty strings are
/// persisted as empty fields and so read back as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from parsed records using the standard column layout.
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut data = Self::new(columns::RECORD_COLUMNS.iter().map(|c| c.to_string()).collect());
        data.rows = records
            .iter()
            .map(|r| {
                vec![
                    Some(r.problem_type.clone()),
                    Some(r.goal_check_delay.to_string()),
                    r.problem_number.map(|n| n.to_string()),
                    Some(format_float(r.execution_time)),
                    Some(r.algorithm_name.clone()),
                    Some(format_bool(r.solution_found).to_string()),
                ]
            })
            .collect();
        data
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn push_row(&mut self, row: Row) -> Result<(), DatasetError> {
        if row.len() != self.columns.len() {
            return Err(DatasetError::RowWidth {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Keep only rows whose `column` equals `value`. When both sides parse as
    /// numbers they are compared numerically (`100` matches `100.0`).
    /// Missing cells never match.
    pub fn retain_eq(&mut self, column: &str, value: &str) -> Result<(), DatasetError> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;
        let wanted = value.parse::<f64>().ok();

        self.rows.retain(|row| match row[idx].as_deref() {
            None => false,
            Some(cell) => match (wanted, cell.parse::<f64>().ok()) {
                (Some(a), Some(b)) => a == b,
                _ => cell == value,
            },
        });
        Ok(())
    }
}

/// Append `new` after `prior`.
///
/// Columns are unioned: prior columns keep their order, columns only present
/// in `new` are added at the end, and cells a source table did not have are
/// left missing. Rows are never dropped, reordered or deduplicated.
pub fn aggregate(prior: Option<Dataset>, new: Dataset) -> Dataset {
    let Some(mut out) = prior else {
        return new;
    };

    for col in &new.columns {
        if out.column_index(col).is_none() {
            out.columns.push(col.clone());
            for row in &mut out.rows {
                row.push(None);
            }
        }
    }

    let source: Vec<Option<usize>> = out.columns.iter().map(|c| new.column_index(c)).collect();
    out.rows.reserve(new.rows.len());
    for mut row in new.rows {
        out.rows
            .push(source.iter().map(|i| i.and_then(|i| row[i].take())).collect());
    }

    out
}

/// Floats always carry a fractional part (`7.0`, not `7`), matching files
/// written by the earlier pandas tooling.
fn format_float(v: f64) -> String {
    format!("{:?}", v)
}

fn format_bool(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Row {
        values
            .iter()
            .map(|v| (!v.is_empty()).then(|| v.to_string()))
            .collect()
    }

    fn table(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        let mut data = Dataset::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            data.push_row(cells(row)).unwrap();
        }
        data
    }

    fn record(name: &str, problem: Option<u64>, ms: f64, found: bool) -> LogRecord {
        LogRecord {
            problem_type: "unbalanced".to_string(),
            goal_check_delay: 100,
            problem_number: problem,
            execution_time: ms,
            algorithm_name: name.to_string(),
            solution_found: found,
        }
    }

    #[test]
    fn records_use_standard_layout() {
        let data = Dataset::from_records(&[
            record("C++ any_of", Some(1), 12.5, true),
            record("Recursive async", None, 7.0, false),
        ]);

        assert_eq!(data.columns(), columns::RECORD_COLUMNS.map(String::from).as_slice());
        assert_eq!(
            data.rows(),
            &[
                cells(&["unbalanced", "100", "1", "12.5", "C++ any_of", "True"]),
                cells(&["unbalanced", "100", "", "7.0", "Recursive async", "False"]),
            ]
        );
    }

    #[test]
    fn aggregate_without_prior_returns_new_table() {
        let new = table(&["a", "b"], &[&["1", "2"], &["3", "4"]]);
        assert_eq!(aggregate(None, new.clone()), new);
    }

    #[test]
    fn aggregate_appends_in_order() {
        let prior = table(&["a", "b"], &[&["1", "2"], &["3", "4"]]);
        let new = table(&["a", "b"], &[&["5", "6"], &["1", "2"]]);

        let out = aggregate(Some(prior.clone()), new.clone());
        let expected: Vec<Row> = prior.rows().iter().chain(new.rows()).cloned().collect();
        assert_eq!(out.rows(), expected.as_slice());
    }

    #[test]
    fn aggregate_unions_columns() {
        let prior = table(&["a", "b"], &[&["1", "2"]]);
        let new = table(&["b", "c"], &[&["3", "4"]]);

        let out = aggregate(Some(prior), new);
        assert_eq!(out.columns(), &["a", "b", "c"]);
        assert_eq!(out.rows(), &[cells(&["1", "2", ""]), cells(&["", "3", "4"])]);
    }

    #[test]
    fn aggregate_onto_empty_prior_keeps_prior_columns_first() {
        let prior = table(&["x"], &[]);
        let new = table(&["a"], &[&["1"]]);

        let out = aggregate(Some(prior), new);
        assert_eq!(out.columns(), &["x", "a"]);
        assert_eq!(out.rows(), &[cells(&["", "1"])]);
    }

    #[test]
    fn push_row_rejects_wrong_width() {
        let mut data = table(&["a", "b"], &[]);
        let err = data.push_row(cells(&["1"])).unwrap_err();
        assert!(matches!(err, DatasetError::RowWidth { expected: 2, got: 1 }));
    }

    #[test]
    fn retain_eq_compares_numbers_numerically() {
        let mut data = table(
            &["type", "delay"],
            &[&["a", "100"], &["b", "100.0"], &["a", "50"], &["a", ""]],
        );
        data.retain_eq("delay", "100").unwrap();
        assert_eq!(data.len(), 2);

        data.retain_eq("type", "a").unwrap();
        assert_eq!(data.rows(), &[cells(&["a", "100"])]);
    }

    #[test]
    fn retain_eq_requires_column() {
        let mut data = table(&["a"], &[&["1"]]);
        assert!(matches!(
            data.retain_eq("nope", "1"),
            Err(DatasetError::MissingColumn(c)) if c == "nope"
        ));
    }
}
