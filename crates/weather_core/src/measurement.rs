use serde::Serialize;

/// Number of cells a table row must carry to describe an observation.
pub const ROW_CELLS: usize = 4;

/// One labeled observation scraped from the source page.
///
/// `value` and `unit` are the raw cell text; nothing is parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Measurement {
    pub name: String,
    pub value: String,
    pub unit: String,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }
}

/// Text of the cells of one table row: spacer, label, value, unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    label: String,
    value: String,
    unit: String,
}

impl RawRow {
    /// Returns `None` unless exactly [`ROW_CELLS`] cells are present.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        let [_spacer, label, value, unit]: [String; ROW_CELLS] = cells.try_into().ok()?;
        Some(Self { label, value, unit })
    }
}

/// Turns raw rows into measurements, merging continuation rows such as
/// `-max last 12h` into the primary label that precedes them.
///
/// One normalizer covers one document; the continuation state must not leak
/// across extraction cycles.
#[derive(Debug, Default)]
pub struct RowNormalizer {
    last_primary: Option<Measurement>,
}

impl RowNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, row: RawRow) -> Measurement {
        let RawRow { label, value, unit } = row;
        let name = label.trim().to_lowercase();

        if let Some(primary) = self.continuation_prefix(&name) {
            // The hyphen stays: "temperature -max last 12h".
            return Measurement::new(format!("{primary} {name}"), value, unit);
        }

        let measurement = Measurement::new(name, value, unit);
        self.last_primary = Some(measurement.clone());
        measurement
    }

    pub fn normalize_all(&mut self, rows: impl IntoIterator<Item = RawRow>) -> Vec<Measurement> {
        rows.into_iter().map(|row| self.normalize(row)).collect()
    }

    fn continuation_prefix(&self, name: &str) -> Option<&str> {
        if !name.starts_with('-') {
            return None;
        }
        self.last_primary
            .as_ref()
            .map(|primary| primary.name.as_str())
            .filter(|primary| !primary.is_empty())
    }
}
