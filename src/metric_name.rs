/// A metric's name.
///
/// Any non-empty string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, Debug)]
pub struct MetricName(String);

impl MetricName {
    /// Returns `true` if `value` would be accepted as a metric name.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for MetricName {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if Self::is_valid(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(crate::Error::InvalidMetricName(value.to_owned()))
        }
    }
}

impl std::ops::Deref for MetricName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::borrow::Borrow<str> for MetricName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for MetricName {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
