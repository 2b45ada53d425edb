use crate::foundation::error::{PlotlineError, PlotlineResult};

/// Raw tabular data as delivered by a [`TableSource`]: header-named columns
/// of string-typed fields, untyped and uncleaned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    /// Column header names, in column order.
    pub headers: Vec<String>,
    /// Row-major field values.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the column named `name`, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// The external data-source boundary.
///
/// Given a resource locator, a source yields a raw table or fails. Sources
/// may be slow; [`fetch`](TableSource::fetch) is the engine's only suspension
/// point and is never retried by the core.
pub trait TableSource {
    /// Fetch the raw table behind `locator`.
    fn fetch(&self, locator: &str) -> PlotlineResult<RawTable>;
}

/// [`TableSource`] reading a headered CSV file from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvFileSource;

impl TableSource for CsvFileSource {
    fn fetch(&self, locator: &str) -> PlotlineResult<RawTable> {
        let mut reader = csv::Reader::from_path(locator).map_err(|e| {
            PlotlineError::data_unavailable(format!("cannot open '{locator}': {e}"))
        })?;
        let headers = reader
            .headers()
            .map_err(|e| {
                PlotlineError::data_unavailable(format!("cannot read headers of '{locator}': {e}"))
            })?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| {
                PlotlineError::data_unavailable(format!("malformed row in '{locator}': {e}"))
            })?;
            rows.push(row.iter().map(str::to_string).collect());
        }
        Ok(RawTable { headers, rows })
    }
}

/// [`TableSource`] serving a fixed in-memory table, ignoring the locator.
///
/// Used by tests and seeded demos.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    table: RawTable,
}

impl InMemorySource {
    /// Build a source from literal headers and rows.
    pub fn new(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            table: RawTable {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|f| f.to_string()).collect())
                    .collect(),
            },
        }
    }
}

impl TableSource for InMemorySource {
    fn fetch(&self, _locator: &str) -> PlotlineResult<RawTable> {
        Ok(self.table.clone())
    }
}
