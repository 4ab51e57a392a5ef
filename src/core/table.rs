use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{ChartError, ChartResult};

/// One named field of a tidy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Numbers(Vec<f64>),
    Texts(Vec<String>),
}

impl Column {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Texts(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Self::Numbers(values) => Some(values),
            Self::Texts(_) => None,
        }
    }

    #[must_use]
    pub fn as_texts(&self) -> Option<&[String]> {
        match self {
            Self::Numbers(_) => None,
            Self::Texts(values) => Some(values),
        }
    }

    fn value_at(&self, row: usize) -> Value {
        match self {
            // Non-finite numbers have no JSON form.
            Self::Numbers(values) => values
                .get(row)
                .and_then(|value| Number::from_f64(*value))
                .map_or(Value::Null, Value::Number),
            Self::Texts(values) => values
                .get(row)
                .map_or(Value::Null, |value| Value::String(value.clone())),
        }
    }
}

/// Column-oriented table whose fields all share one row count.
///
/// Field order is insertion order. An empty table has no fields and no rows.
/// Deserialization goes through `insert`, so ragged payloads are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "IndexMap<String, Column>",
    try_from = "IndexMap<String, Column>"
)]
pub struct TidyTable {
    columns: IndexMap<String, Column>,
}

impl TryFrom<IndexMap<String, Column>> for TidyTable {
    type Error = ChartError;

    fn try_from(columns: IndexMap<String, Column>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (name, column) in columns {
            table.insert(name, column)?;
        }
        Ok(table)
    }
}

impl From<TidyTable> for IndexMap<String, Column> {
    fn from(table: TidyTable) -> Self {
        table.columns
    }
}

impl TidyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field.
    ///
    /// Fails when the column length differs from the table's row count.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> ChartResult<()> {
        let name = name.into();
        let expected = self
            .columns
            .iter()
            .find(|(existing, _)| **existing != name)
            .map(|(_, existing)| existing.len());
        if let Some(expected) = expected {
            if expected != column.len() {
                return Err(ChartError::InvalidData(format!(
                    "column `{name}` has {} rows, table has {expected}",
                    column.len()
                )));
            }
        }
        self.columns.insert(name, column);
        Ok(())
    }

    pub fn insert_numbers(&mut self, name: impl Into<String>, values: Vec<f64>) -> ChartResult<()> {
        self.insert(name, Column::Numbers(values))
    }

    pub fn insert_texts(&mut self, name: impl Into<String>, values: Vec<String>) -> ChartResult<()> {
        self.insert(name, Column::Texts(values))
    }

    /// Adds a text field holding `value` on every row.
    pub fn insert_constant_text(&mut self, name: impl Into<String>, value: &str) -> ChartResult<()> {
        let rows = self.row_count();
        self.insert_texts(name, vec![value.to_owned(); rows])
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.values().next().map_or(0, Column::len)
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds no rows (including the no-field case).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn numbers(&self, name: &str) -> Option<&[f64]> {
        self.column(name).and_then(Column::as_numbers)
    }

    #[must_use]
    pub fn texts(&self, name: &str) -> Option<&[String]> {
        self.column(name).and_then(Column::as_texts)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Row-oriented view, one JSON object per row with fields in table order.
    #[must_use]
    pub fn to_records(&self) -> Vec<Value> {
        (0..self.row_count())
            .map(|row| {
                let record: Map<String, Value> = self
                    .columns
                    .iter()
                    .map(|(name, column)| (name.clone(), column.value_at(row)))
                    .collect();
                Value::Object(record)
            })
            .collect()
    }

    /// Smallest finite value of a numeric field.
    #[must_use]
    pub fn min_of(&self, name: &str) -> Option<f64> {
        self.numbers(name)?
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .reduce(f64::min)
    }

    /// Largest finite value of a numeric field.
    #[must_use]
    pub fn max_of(&self, name: &str) -> Option<f64> {
        self.numbers(name)?
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .reduce(f64::max)
    }
}
