use serde::Serialize;
use serde_json::{Map, Value};

/// A row of one table, keyed by column name.
pub type Row = Map<String, Value>;

/// Sanitized columns ready to be written to a table.
///
/// A record is assembled once from a submission and then only read; it exposes no way to
/// change a column after construction. The `id` column is never part of a record, the
/// store assigns it on insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Row);

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Columns and values in column-name order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(column, value)| (column.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        )
    }
}

/// Equality filter used to target rows for deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    /// Matches rows whose `column` equals `value`.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}
