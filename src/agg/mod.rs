mod count;
mod fold;
mod group;
mod kind;
mod max;
mod min;
mod sum;

pub use kind::AggregationKind;

use crate::{Groups, Row};

/// Constructs an aggregation from an output name and a source column.
pub type AggregationFactory = fn(name: &str, field_name: &str) -> Aggregation;

/// A raw aggregation over one column, e.g. `longMin(duration)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregation {
    kind: AggregationKind,
    name: String,
    field_name: String,
}

impl Aggregation {
    fn new(kind: AggregationKind, name: &str, field_name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            field_name: field_name.to_owned(),
        }
    }

    /// Minimum of a long column.
    #[must_use]
    pub fn long_min(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::LongMin, name, field_name)
    }

    /// Maximum of a long column.
    #[must_use]
    pub fn long_max(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::LongMax, name, field_name)
    }

    /// Sum of a long column.
    #[must_use]
    pub fn long_sum(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::LongSum, name, field_name)
    }

    /// Minimum of a double column.
    #[must_use]
    pub fn double_min(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::DoubleMin, name, field_name)
    }

    /// Maximum of a double column.
    #[must_use]
    pub fn double_max(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::DoubleMax, name, field_name)
    }

    /// Sum of a double column.
    #[must_use]
    pub fn double_sum(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::DoubleSum, name, field_name)
    }

    /// Number of rows carrying the column.
    #[must_use]
    pub fn count(name: &str, field_name: &str) -> Self {
        Self::new(AggregationKind::Count, name, field_name)
    }

    /// Aggregation kind
    #[must_use]
    pub fn kind(&self) -> AggregationKind {
        self.kind
    }

    /// Output name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source column
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Aggregates `rows`, grouped by the `group_by` dimension.
    ///
    /// # Errors
    ///
    /// Returns error if a grouped row lacks the source column, or carries it with the wrong type.
    pub fn evaluate(&self, rows: &[Row], group_by: &str) -> crate::Result<Groups> {
        use AggregationKind::{Count, DoubleMax, DoubleMin, DoubleSum, LongMax, LongMin, LongSum};

        match self.kind {
            LongMin | DoubleMin => group::fold_groups::<min::Min>(self, rows, group_by),
            LongMax | DoubleMax => group::fold_groups::<max::Max>(self, rows, group_by),
            LongSum | DoubleSum => group::fold_groups::<sum::Sum>(self, rows, group_by),
            Count => group::fold_groups::<count::Count>(self, rows, group_by),
        }
    }
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.field_name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{row, Error, Value};
    use test_log::test;

    fn rows() -> Vec<Row> {
        vec![
            row!("host" => "h-1"; "duration" => 25_i64, "load" => 0.5_f64),
            row!("host" => "h-1"; "duration" => 12_i64, "load" => 0.75_f64),
            row!("host" => "h-2"; "duration" => 40_i64, "load" => 0.25_f64),
            row!("env" => "prod"; "duration" => 1_i64, "load" => 0.0_f64),
        ]
    }

    #[test]
    fn long_min_grouped() {
        let result = Aggregation::long_min("minDuration", "duration")
            .evaluate(&rows(), "host")
            .unwrap();

        assert_eq!(2, result.len());
        assert_eq!(Some(&Value::Long(12)), result.get("h-1"));
        assert_eq!(Some(&Value::Long(40)), result.get("h-2"));
    }

    #[test]
    fn long_max_and_sum() {
        let max = Aggregation::long_max("m", "duration")
            .evaluate(&rows(), "host")
            .unwrap();
        assert_eq!(Some(&Value::Long(25)), max.get("h-1"));

        let sum = Aggregation::long_sum("s", "duration")
            .evaluate(&rows(), "host")
            .unwrap();
        assert_eq!(Some(&Value::Long(37)), sum.get("h-1"));
    }

    #[test]
    fn double_aggregations() {
        let min = Aggregation::double_min("m", "load")
            .evaluate(&rows(), "host")
            .unwrap();
        assert_eq!(Some(&Value::Double(0.5)), min.get("h-1"));

        let sum = Aggregation::double_sum("s", "load")
            .evaluate(&rows(), "host")
            .unwrap();
        assert_eq!(Some(&Value::Double(1.25)), sum.get("h-1"));
    }

    #[test]
    fn double_max_grouped() {
        let max = Aggregation::double_max("m", "load")
            .evaluate(&rows(), "host")
            .unwrap();

        assert_eq!(Some(&Value::Double(0.75)), max.get("h-1"));
        assert_eq!(Some(&Value::Double(0.25)), max.get("h-2"));
    }

    #[test]
    fn count_missing_column() {
        let mut rows = rows();
        rows.push(row!("host" => "h-3"; "load" => 0.5_f64));

        let result = Aggregation::count("c", "duration").evaluate(&rows, "host");

        assert!(matches!(
            result,
            Err(Error::InvalidColumnReference { metric, column }) if metric == "c" && column == "duration"
        ));
    }

    #[test]
    fn count_rows() {
        let count = Aggregation::count("c", "load")
            .evaluate(&rows(), "host")
            .unwrap();
        assert_eq!(Some(&Value::Long(2)), count.get("h-1"));
        assert_eq!(Some(&Value::Long(1)), count.get("h-2"));
    }

    #[test]
    fn empty_group_by_is_single_group() {
        let result = Aggregation::long_min("m", "duration")
            .evaluate(&rows(), "")
            .unwrap();

        assert_eq!(1, result.len());
        assert_eq!(Some(&Value::Long(1)), result.get(""));
    }

    #[test]
    fn empty_rows_yield_no_groups() {
        let result = Aggregation::long_min("m", "duration")
            .evaluate(&[], "host")
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn wrong_column_type() {
        let result = Aggregation::long_min("m", "load").evaluate(&rows(), "host");

        assert!(matches!(
            result,
            Err(Error::InvalidColumnReference { metric, column }) if metric == "m" && column == "load"
        ));
    }

    #[test]
    fn missing_column() {
        let result = Aggregation::long_min("m", "bytes").evaluate(&rows(), "host");
        assert!(matches!(result, Err(Error::InvalidColumnReference { .. })));
    }

    #[test]
    fn display() {
        assert_eq!(
            "longMin(duration)",
            Aggregation::long_min("minDuration", "duration").to_string()
        );
    }
}
