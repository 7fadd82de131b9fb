use crate::{
    maker_builder::Builder, AggregationFactory, AggregationKind, LogicalMetric, MetricDictionary,
    MetricInfo,
};

/// Makes logical metrics that wrap one column in one raw aggregation,
/// and registers them in a [`MetricDictionary`].
///
/// ```
/// use logical_metrics::{AggregationKind, MetricDictionary, MetricMaker};
///
/// let dictionary = MetricDictionary::new();
///
/// let maker = MetricMaker::builder()
///     .dictionary(&dictionary)
///     .aggregation(AggregationKind::LongMin)
///     .build()?;
///
/// maker.make("minDuration", "duration")?;
/// assert!(dictionary.contains("minDuration"));
///
/// # Ok::<(), logical_metrics::Error>(())
/// ```
#[derive(Clone)]
pub struct MetricMaker {
    dictionary: MetricDictionary,
    factory: AggregationFactory,
}

impl std::fmt::Debug for MetricMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricMaker")
            .field("dictionary", &self.dictionary)
            .finish_non_exhaustive()
    }
}

impl MetricMaker {
    /// Returns a builder to configure a maker.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub(crate) fn from_parts(dictionary: MetricDictionary, factory: AggregationFactory) -> Self {
        Self {
            dictionary,
            factory,
        }
    }

    /// Creates a maker for the given aggregation kind.
    #[must_use]
    pub fn new(dictionary: &MetricDictionary, kind: AggregationKind) -> Self {
        Self::from_parts(dictionary.clone(), kind.factory())
    }

    /// Maker for the minimum of long columns.
    #[must_use]
    pub fn long_min(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::LongMin)
    }

    /// Maker for the maximum of long columns.
    #[must_use]
    pub fn long_max(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::LongMax)
    }

    /// Maker for the sum of long columns.
    #[must_use]
    pub fn long_sum(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::LongSum)
    }

    /// Maker for the minimum of double columns.
    #[must_use]
    pub fn double_min(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::DoubleMin)
    }

    /// Maker for the maximum of double columns.
    #[must_use]
    pub fn double_max(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::DoubleMax)
    }

    /// Maker for the sum of double columns.
    #[must_use]
    pub fn double_sum(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::DoubleSum)
    }

    /// Maker for row counts.
    #[must_use]
    pub fn count(dictionary: &MetricDictionary) -> Self {
        Self::new(dictionary, AggregationKind::Count)
    }

    /// The dictionary made metrics are registered in.
    #[must_use]
    pub fn dictionary(&self) -> &MetricDictionary {
        &self.dictionary
    }

    /// Makes a metric named `name` over `column`, and registers it.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidMetricName`] if the name is empty
    /// - [`crate::Error::InvalidColumnReference`] if the column is empty
    /// - [`crate::Error::DuplicateMetricName`] if the name is already registered
    pub fn make(&self, name: &str, column: &str) -> crate::Result<LogicalMetric> {
        self.make_with_info(MetricInfo::new(name)?, column)
    }

    /// Like [`MetricMaker::make`], with custom metric information.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidColumnReference`] if the column is empty
    /// - [`crate::Error::DuplicateMetricName`] if the name is already registered
    pub fn make_with_info(&self, info: MetricInfo, column: &str) -> crate::Result<LogicalMetric> {
        if column.is_empty() {
            return Err(crate::Error::InvalidColumnReference {
                metric: info.name().to_string(),
                column: column.to_owned(),
            });
        }

        let aggregation = (self.factory)(info.name(), column);
        let metric = LogicalMetric::new(info, aggregation);

        self.dictionary.add(metric.clone())?;

        log::debug!("made metric {metric}");

        Ok(metric)
    }
}
