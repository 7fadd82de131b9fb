use super::{Aggregation, AggregationFactory};
use crate::ColumnType;

/// Kind of raw aggregation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AggregationKind {
    /// Minimum of a long column
    LongMin,

    /// Maximum of a long column
    LongMax,

    /// Sum of a long column
    LongSum,

    /// Minimum of a double column
    DoubleMin,

    /// Maximum of a double column
    DoubleMax,

    /// Sum of a double column
    DoubleSum,

    /// Number of rows carrying the column
    Count,
}

impl AggregationKind {
    /// Every supported kind.
    pub const ALL: [Self; 7] = [
        Self::LongMin,
        Self::LongMax,
        Self::LongSum,
        Self::DoubleMin,
        Self::DoubleMax,
        Self::DoubleSum,
        Self::Count,
    ];

    /// Name used in metric definitions (e.g. `longMin`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongMin => "longMin",
            Self::LongMax => "longMax",
            Self::LongSum => "longSum",
            Self::DoubleMin => "doubleMin",
            Self::DoubleMax => "doubleMax",
            Self::DoubleSum => "doubleSum",
            Self::Count => "count",
        }
    }

    /// Constructor for aggregations of this kind.
    #[must_use]
    pub fn factory(self) -> AggregationFactory {
        match self {
            Self::LongMin => Aggregation::long_min,
            Self::LongMax => Aggregation::long_max,
            Self::LongSum => Aggregation::long_sum,
            Self::DoubleMin => Aggregation::double_min,
            Self::DoubleMax => Aggregation::double_max,
            Self::DoubleSum => Aggregation::double_sum,
            Self::Count => Aggregation::count,
        }
    }

    /// Column type the aggregation reads.
    ///
    /// `None` means any column type is accepted.
    #[must_use]
    pub fn column_type(self) -> Option<ColumnType> {
        match self {
            Self::LongMin | Self::LongMax | Self::LongSum => Some(ColumnType::Long),
            Self::DoubleMin | Self::DoubleMax | Self::DoubleSum => Some(ColumnType::Double),
            Self::Count => None,
        }
    }
}

impl std::fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AggregationKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownAggregation(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn kind_from_str() {
        for kind in AggregationKind::ALL {
            assert_eq!(kind, kind.as_str().parse().unwrap());
        }
    }

    #[test]
    fn kind_from_str_unknown() {
        assert!(matches!(
            "longMedian".parse::<AggregationKind>(),
            Err(crate::Error::UnknownAggregation(name)) if name == "longMedian"
        ));
    }

    #[test]
    fn kind_factory_builds_matching_kind() {
        for kind in AggregationKind::ALL {
            let aggregation = (kind.factory())("m", "col");
            assert_eq!(kind, aggregation.kind());
            assert_eq!("m", aggregation.name());
            assert_eq!("col", aggregation.field_name());
        }
    }

    #[test]
    fn kind_column_types() {
        assert_eq!(Some(ColumnType::Long), AggregationKind::LongMin.column_type());
        assert_eq!(Some(ColumnType::Double), AggregationKind::DoubleSum.column_type());
        assert_eq!(None, AggregationKind::Count.column_type());
    }
}
