use crate::{Aggregation, Groups, MetricName, Row};
use std::sync::Arc;

/// Category assigned to metrics that don't name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Descriptive information about a logical metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricInfo {
    name: MetricName,
    long_name: String,
    category: String,
    description: String,
}

impl MetricInfo {
    /// Creates metric info with default long name, category and description.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or contains unsupported characters.
    pub fn new(name: &str) -> crate::Result<Self> {
        let name = MetricName::try_from(name)?;

        Ok(Self {
            long_name: name.to_string(),
            category: DEFAULT_CATEGORY.to_owned(),
            description: name.to_string(),
            name,
        })
    }

    /// Sets the human readable name.
    #[must_use]
    pub fn long_name<S: Into<String>>(mut self, long_name: S) -> Self {
        self.long_name = long_name.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Metric name
    #[must_use]
    pub fn name(&self) -> &MetricName {
        &self.name
    }
}

/// A named metric backed by a raw aggregation.
///
/// Immutable once created. Cloning is cheap: the aggregation is shared.
#[derive(Clone, Debug)]
pub struct LogicalMetric {
    info: MetricInfo,
    aggregation: Arc<Aggregation>,
}

impl PartialEq for LogicalMetric {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info && *self.aggregation == *other.aggregation
    }
}

impl Eq for LogicalMetric {}

impl LogicalMetric {
    pub(crate) fn new(info: MetricInfo, aggregation: Aggregation) -> Self {
        Self {
            info,
            aggregation: Arc::new(aggregation),
        }
    }

    /// Metric name
    #[must_use]
    pub fn name(&self) -> &MetricName {
        &self.info.name
    }

    /// Human readable name
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.info.long_name
    }

    /// Category
    #[must_use]
    pub fn category(&self) -> &str {
        &self.info.category
    }

    /// Description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.info.description
    }

    /// The backing aggregation.
    #[must_use]
    pub fn aggregation(&self) -> &Arc<Aggregation> {
        &self.aggregation
    }

    /// Evaluates the metric over `rows`, grouped by the `group_by` dimension.
    ///
    /// Rows without the dimension are skipped. Use an empty `group_by`
    /// to aggregate all rows into a single group keyed `""`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidColumnReference`] if a grouped row lacks
    /// the source column, or carries it with the wrong type.
    pub fn evaluate(&self, rows: &[Row], group_by: &str) -> crate::Result<Groups> {
        log::trace!("evaluating {} = {} by {group_by:?}", self.name(), self.aggregation);
        self.aggregation.evaluate(rows, group_by)
    }
}

impl std::fmt::Display for LogicalMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name(), self.aggregation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn metric_info_defaults() {
        let info = MetricInfo::new("minDuration").unwrap();

        let metric = LogicalMetric::new(info, Aggregation::long_min("minDuration", "duration"));
        assert_eq!("minDuration", metric.long_name());
        assert_eq!(DEFAULT_CATEGORY, metric.category());
        assert_eq!("minDuration", metric.description());
    }

    #[test]
    fn metric_info_overrides() {
        let info = MetricInfo::new("minDuration")
            .unwrap()
            .long_name("Minimum duration")
            .category("Latency")
            .description("Shortest request duration");

        let metric = LogicalMetric::new(info, Aggregation::long_min("minDuration", "duration"));
        assert_eq!("Minimum duration", metric.long_name());
        assert_eq!("Latency", metric.category());
        assert_eq!("Shortest request duration", metric.description());
    }

    #[test]
    fn metric_display() {
        let metric = LogicalMetric::new(
            MetricInfo::new("minDuration").unwrap(),
            Aggregation::long_min("minDuration", "duration"),
        );
        assert_eq!("minDuration = longMin(duration)", metric.to_string());
    }
}
