use crate::{LogicalMetric, MetricName};
use std::sync::{Arc, RwLock};

/// Shared mapping of metric names to logical metrics.
///
/// Cloning returns another handle to the same dictionary.
/// Metrics can only be added, never replaced or removed.
#[derive(Clone, Default)]
pub struct MetricDictionary(Arc<RwLock<crate::HashMap<MetricName, LogicalMetric>>>);

impl std::fmt::Debug for MetricDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl MetricDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a metric under its name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateMetricName`] if the name is already taken.
    /// The existing entry is left untouched.
    #[allow(clippy::expect_used)]
    pub fn add(&self, metric: LogicalMetric) -> crate::Result<()> {
        let mut lock = self.0.write().expect("lock is poisoned");

        if lock.contains_key(&**metric.name()) {
            log::debug!("rejecting duplicate metric {:?}", &**metric.name());
            return Err(crate::Error::DuplicateMetricName(metric.name().to_string()));
        }

        log::trace!("registering metric {metric}");
        lock.insert(metric.name().clone(), metric);

        Ok(())
    }

    /// Returns the metric registered under `name`.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn get(&self, name: &str) -> Option<LogicalMetric> {
        self.0.read().expect("lock is poisoned").get(name).cloned()
    }

    /// Returns `true` if a metric is registered under `name`.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn contains(&self, name: &str) -> bool {
        self.0.read().expect("lock is poisoned").contains_key(name)
    }

    /// Number of registered metrics.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn len(&self) -> usize {
        self.0.read().expect("lock is poisoned").len()
    }

    /// Returns `true` if no metric is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all registered metrics, sorted.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn names(&self) -> Vec<MetricName> {
        let mut names = self
            .0
            .read()
            .expect("lock is poisoned")
            .keys()
            .cloned()
            .collect::<Vec<_>>();

        names.sort();
        names
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{Aggregation, MetricInfo};
    use test_log::test;

    fn metric(name: &str, column: &str) -> LogicalMetric {
        LogicalMetric::new(
            MetricInfo::new(name).unwrap(),
            Aggregation::long_min(name, column),
        )
    }

    #[test]
    fn dictionary_add_get() {
        let dictionary = MetricDictionary::new();
        assert!(dictionary.is_empty());

        dictionary.add(metric("minDuration", "duration")).unwrap();

        assert_eq!(1, dictionary.len());
        assert!(dictionary.contains("minDuration"));
        assert_eq!(
            Some(metric("minDuration", "duration")),
            dictionary.get("minDuration"),
        );
        assert_eq!(None, dictionary.get("maxDuration"));
    }

    #[test]
    fn dictionary_rejects_duplicate() {
        let dictionary = MetricDictionary::new();
        dictionary.add(metric("minDuration", "duration")).unwrap();

        let result = dictionary.add(metric("minDuration", "otherCol"));
        assert!(matches!(
            result,
            Err(crate::Error::DuplicateMetricName(name)) if name == "minDuration"
        ));

        assert_eq!(1, dictionary.len());
        assert_eq!(
            "duration",
            dictionary.get("minDuration").unwrap().aggregation().field_name(),
        );
    }

    #[test]
    fn dictionary_handles_share_state() {
        let dictionary = MetricDictionary::new();
        let handle = dictionary.clone();

        handle.add(metric("a", "x")).unwrap();
        assert!(dictionary.contains("a"));
    }

    #[test]
    fn dictionary_names_sorted() {
        let dictionary = MetricDictionary::new();
        dictionary.add(metric("b", "x")).unwrap();
        dictionary.add(metric("a", "x")).unwrap();
        dictionary.add(metric("c", "x")).unwrap();

        let names = dictionary.names();
        let names = names.iter().map(|n| &**n).collect::<Vec<_>>();
        assert_eq!(["a", "b", "c"], *names);
    }
}
