//! Persistence of the aggregate dataset as a CSV file (header row, no index
//! column, empty field = missing value).

use crate::model::{Dataset, DatasetError};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("open dataset file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dataset file {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dataset file {}", .path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },
}

/// Load a dataset. A path that does not exist is the empty prior state and
/// yields `Ok(None)`.
pub fn load(path: &Path) -> Result<Option<Dataset>, StoreError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no prior dataset");
            return Ok(None);
        }
        Err(source) => {
            return Err(StoreError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let csv_err = |source: csv::Error| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut data = Dataset::new(columns);
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let row = record
            .iter()
            .map(|f| (!f.is_empty()).then(|| f.to_string()))
            .collect();
        data.push_row(row).map_err(|source| StoreError::Shape {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!(path = %path.display(), rows = data.len(), "loaded dataset");
    Ok(Some(data))
}

/// Write the whole dataset to `path`, replacing any previous content.
pub fn save(path: &Path, data: &Dataset) -> Result<(), StoreError> {
    if data.columns().is_empty() {
        return fs::write(path, "").map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    let csv_err = |source: csv::Error| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(data.columns()).map_err(csv_err)?;
    for row in data.rows() {
        writer
            .write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = data.len(), "wrote dataset");
    Ok(())
}
