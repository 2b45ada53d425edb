use std::collections::BTreeMap;

/// One cleaned vehicle entry.
///
/// Records are immutable once constructed: the loader owns construction and
/// every downstream component reads them through shared references.
/// `cylinders` and `fuel_type` are `None` on aggregated records (those fields
/// are dropped by [`Dataset::aggregate_by`]) and, under lenient loading, on
/// rows whose cylinder field failed coercion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Manufacturer name, or the group label on aggregated records.
    pub make: String,
    /// Average city MPG, strictly positive on cleaned records.
    pub city: f64,
    /// Average highway MPG, strictly positive on cleaned records.
    pub highway: f64,
    /// Engine cylinder count, when known and positive.
    #[serde(default)]
    pub cylinders: Option<u32>,
    /// Fuel type, when known.
    #[serde(default)]
    pub fuel_type: Option<String>,
}

impl Record {
    /// City plus highway MPG, the efficiency measure used by scene rules.
    pub fn combined_mpg(&self) -> f64 {
        self.city + self.highway
    }
}

/// Grouping keys supported by [`Dataset::aggregate_by`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum GroupKey {
    /// Group by manufacturer.
    Make,
    /// Group by cylinder count.
    Cylinders,
    /// Group by fuel type.
    FuelType,
}

impl GroupKey {
    fn label_for(self, record: &Record) -> Option<String> {
        match self {
            GroupKey::Make => Some(record.make.clone()),
            GroupKey::Cylinders => record.cylinders.map(|c| c.to_string()),
            GroupKey::FuelType => record.fuel_type.clone(),
        }
    }
}

/// An ordered, immutable sequence of cleaned records.
///
/// Iteration order is irrelevant to rendering but stable, so tests and frame
/// point indices are deterministic. Filtering and grouping never mutate in
/// place; they always produce new datasets.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap a record sequence.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Shared view of the records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` when the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New dataset containing the records matching `keep`.
    pub fn filtered(&self, keep: impl Fn(&Record) -> bool) -> Dataset {
        Dataset::new(self.records.iter().filter(|r| keep(r)).cloned().collect())
    }

    /// Collapse records sharing a group key into one mean-valued record each.
    ///
    /// City and highway MPG become the arithmetic mean of the group, rounded
    /// to the nearest integer. The group label is carried in `make`;
    /// `cylinders` and `fuel_type` are dropped. Records lacking the group key
    /// are skipped. Groups are emitted sorted by label.
    pub fn aggregate_by(&self, key: GroupKey) -> Dataset {
        let mut groups: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();
        for record in &self.records {
            let Some(label) = key.label_for(record) else {
                continue;
            };
            let entry = groups.entry(label).or_insert((0.0, 0.0, 0));
            entry.0 += record.city;
            entry.1 += record.highway;
            entry.2 += 1;
        }
        Dataset::new(
            groups
                .into_iter()
                .map(|(label, (city_sum, highway_sum, n))| Record {
                    make: label,
                    city: (city_sum / n as f64).round(),
                    highway: (highway_sum / n as f64).round(),
                    cylinders: None,
                    fuel_type: None,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/model.rs"]
mod tests;
