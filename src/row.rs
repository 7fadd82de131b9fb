use crate::HashMap;

/// Type of a metric column
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 64-bit signed integer
    Long,

    /// 64-bit float
    Double,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// A single metric column value
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    /// Long value
    Long(i64),

    /// Double value
    Double(f64),
}

impl Value {
    /// Returns the column type of this value.
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Long(_) => ColumnType::Long,
            Self::Double(_) => ColumnType::Double,
        }
    }

    /// Widens the value to a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Long(v) => *v as f64,
            Self::Double(v) => *v,
        }
    }

    pub(crate) fn min(self, other: Self) -> Self {
        match (self, other) {
            (Self::Long(a), Self::Long(b)) => Self::Long(a.min(b)),
            (a, b) => Self::Double(a.as_f64().min(b.as_f64())),
        }
    }

    pub(crate) fn max(self, other: Self) -> Self {
        match (self, other) {
            (Self::Long(a), Self::Long(b)) => Self::Long(a.max(b)),
            (a, b) => Self::Double(a.as_f64().max(b.as_f64())),
        }
    }

    // NOTE: Long sums wrap instead of panicking on overflow
    pub(crate) fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Long(a), Self::Long(b)) => Self::Long(a.wrapping_add(b)),
            (a, b) => Self::Double(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
        }
    }
}

/// An input row: dimension values plus metric column values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    dimensions: HashMap<String, String>,
    values: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a dimension value.
    #[must_use]
    pub fn with_dimension<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.dimensions.insert(key.into(), value.into());
        self
    }

    /// Sets a metric column value.
    #[must_use]
    pub fn with_value<K: Into<String>, V: Into<Value>>(mut self, column: K, value: V) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    /// Returns a dimension value.
    #[must_use]
    pub fn dimension(&self, key: &str) -> Option<&str> {
        self.dimensions.get(key).map(String::as_str)
    }

    /// Returns a metric column value.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<Value> {
        self.values.get(column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn value_min_max_long() {
        assert_eq!(Value::Long(3), Value::Long(3).min(Value::Long(7)));
        assert_eq!(Value::Long(7), Value::Long(3).max(Value::Long(7)));
    }

    #[test]
    fn value_add_long_wraps() {
        assert_eq!(Value::Long(i64::MIN), Value::Long(i64::MAX).add(Value::Long(1)));
    }

    #[test]
    fn value_mixed_widens() {
        assert_eq!(Value::Double(1.5), Value::Long(1).add(Value::Double(0.5)));
    }

    #[test]
    fn row_builder() {
        let row = crate::row!("host" => "h-1"; "duration" => 5_i64, "load" => 0.25_f64);

        assert_eq!(Some("h-1"), row.dimension("host"));
        assert_eq!(None, row.dimension("env"));
        assert_eq!(Some(ColumnType::Long), row.value("duration").map(|v| v.column_type()));
        assert_eq!(Some(Value::Double(0.25)), row.value("load"));
    }
}
