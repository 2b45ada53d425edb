use crate::data::model::{Dataset, Record};
use crate::data::source::{RawTable, TableSource};
use crate::foundation::error::{PlotlineError, PlotlineResult};

/// Header-name mapping from deployment column names to record fields.
///
/// Column names vary by deployment; the defaults match the 2017 fuel-economy
/// table this engine was built around.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldMap {
    /// Manufacturer column.
    pub make: String,
    /// City MPG column.
    pub city: String,
    /// Highway MPG column.
    pub highway: String,
    /// Cylinder count column.
    pub cylinders: String,
    /// Fuel type column.
    pub fuel_type: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            make: "Make".to_string(),
            city: "AverageCityMPG".to_string(),
            highway: "AverageHighwayMPG".to_string(),
            cylinders: "EngineCylinders".to_string(),
            fuel_type: "Fuel".to_string(),
        }
    }
}

/// Row-validity strictness.
///
/// Source material disagrees on whether a positive cylinder count is part of
/// row validity, so it is a loader flag rather than a hardcoded rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Strictness {
    /// Rows must also carry a positive cylinder count.
    #[default]
    RequireCylinders,
    /// Only positive city/highway MPG are required; unusable cylinder fields
    /// are kept as `None`.
    MpgOnly,
}

/// Loader configuration.
#[derive(Clone, Debug, Default)]
pub struct LoaderOpts {
    /// Column-name mapping.
    pub fields: FieldMap,
    /// Row-validity strictness.
    pub strictness: Strictness,
}

struct ColumnIndexes {
    make: usize,
    city: usize,
    highway: usize,
    cylinders: Option<usize>,
    fuel_type: Option<usize>,
}

impl ColumnIndexes {
    fn resolve(
        table: &RawTable,
        fields: &FieldMap,
        strictness: Strictness,
    ) -> PlotlineResult<Self> {
        let require = |name: &str| {
            table.column(name).ok_or_else(|| {
                PlotlineError::data_unavailable(format!(
                    "source is missing required column '{name}'"
                ))
            })
        };
        Ok(Self {
            make: require(&fields.make)?,
            city: require(&fields.city)?,
            highway: require(&fields.highway)?,
            cylinders: match strictness {
                Strictness::RequireCylinders => Some(require(&fields.cylinders)?),
                Strictness::MpgOnly => table.column(&fields.cylinders),
            },
            fuel_type: table.column(&fields.fuel_type),
        })
    }
}

/// Fetch, coerce, and clean a dataset from `source`.
///
/// Blocks the caller until the source responds. Rows failing coercion or the
/// validity predicate (`city > 0`, `highway > 0`, and under
/// [`Strictness::RequireCylinders`] a positive cylinder count) are silently
/// dropped; a skipped coercion is a filtering outcome, not an error. Fails
/// with [`PlotlineError::DataUnavailable`] when the source cannot be reached,
/// a required column is missing, or zero rows survive cleaning.
#[tracing::instrument(skip(source, opts))]
pub fn load_dataset(
    source: &dyn TableSource,
    locator: &str,
    opts: &LoaderOpts,
) -> PlotlineResult<Dataset> {
    let table = source.fetch(locator)?;
    let cols = ColumnIndexes::resolve(&table, &opts.fields, opts.strictness)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut skipped = 0usize;
    for row in &table.rows {
        match coerce_row(row, &cols, opts.strictness) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(
            skipped,
            kept = records.len(),
            "dropped rows failing coercion or the validity predicate"
        );
    }
    if records.is_empty() {
        return Err(PlotlineError::data_unavailable(format!(
            "'{locator}' has no usable rows after cleaning"
        )));
    }
    Ok(Dataset::new(records))
}

fn coerce_row(row: &[String], cols: &ColumnIndexes, strictness: Strictness) -> Option<Record> {
    let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("").trim();

    let city: f64 = field(cols.city).parse().ok()?;
    let highway: f64 = field(cols.highway).parse().ok()?;
    if !city.is_finite() || !highway.is_finite() || city <= 0.0 || highway <= 0.0 {
        return None;
    }

    let cylinders = cols
        .cylinders
        .and_then(|i| field(i).parse::<u32>().ok())
        .filter(|&c| c > 0);
    if strictness == Strictness::RequireCylinders && cylinders.is_none() {
        return None;
    }

    let fuel_type = cols
        .fuel_type
        .map(|i| field(i).to_string())
        .filter(|s| !s.is_empty());

    Some(Record {
        make: field(cols.make).to_string(),
        city,
        highway,
        cylinders,
        fuel_type,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/data/loader.rs"]
mod tests;
