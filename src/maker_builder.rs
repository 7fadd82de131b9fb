use crate::{AggregationFactory, AggregationKind, MetricDictionary, MetricMaker};

/// Builder for [`MetricMaker`].
#[derive(Default)]
pub struct Builder {
    dictionary: Option<MetricDictionary>,
    factory: Option<AggregationFactory>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the dictionary made metrics are registered in.
    #[must_use]
    pub fn dictionary(mut self, dictionary: &MetricDictionary) -> Self {
        self.dictionary = Some(dictionary.clone());
        self
    }

    /// Uses the constructor of the given aggregation kind.
    #[must_use]
    pub fn aggregation(self, kind: AggregationKind) -> Self {
        self.factory(kind.factory())
    }

    /// Uses a custom aggregation constructor.
    #[must_use]
    pub fn factory(mut self, factory: AggregationFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Builds the maker.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the dictionary or
    /// the aggregation was not set.
    pub fn build(self) -> crate::Result<MetricMaker> {
        let Some(dictionary) = self.dictionary else {
            return Err(crate::Error::InvalidConfiguration(
                "metric maker requires a metric dictionary",
            ));
        };

        let Some(factory) = self.factory else {
            return Err(crate::Error::InvalidConfiguration(
                "metric maker requires an aggregation",
            ));
        };

        Ok(MetricMaker::from_parts(dictionary, factory))
    }
}
