//! Logical metrics built from raw aggregations.
//!
//! A [`MetricMaker`] binds one aggregation kind (e.g. the minimum of a long column)
//! to a metric name, and registers the resulting [`LogicalMetric`] in a shared
//! [`MetricDictionary`]. The dictionary is insert-only: a name can be registered once.
//!
//! Metrics can be registered one by one, or loaded from a small definition format
//! (`name = kind(column)`, see [`load_definitions`]). Registered metrics can be
//! evaluated over in-memory rows, grouped by a dimension.
//!
//! ```
//! use logical_metrics::{row, MetricDictionary, MetricMaker, Value};
//!
//! let dictionary = MetricDictionary::new();
//! let maker = MetricMaker::long_min(&dictionary);
//!
//! let metric = maker.make("minDuration", "duration")?;
//! assert_eq!(Some(&metric), dictionary.get("minDuration").as_ref());
//!
//! let rows = [
//!     row!("host" => "h-1"; "duration" => 25_i64),
//!     row!("host" => "h-1"; "duration" => 12_i64),
//!     row!("host" => "h-2"; "duration" => 40_i64),
//! ];
//!
//! let result = metric.evaluate(&rows, "host")?;
//! assert_eq!(Some(&Value::Long(12)), result.get("h-1"));
//! assert_eq!(Some(&Value::Long(40)), result.get("h-2"));
//!
//! # Ok::<(), logical_metrics::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod agg;
mod config;
mod dictionary;
mod error;
mod maker;
mod maker_builder;
mod metric;
mod metric_name;
mod row;

type HashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

pub use agg::{Aggregation, AggregationFactory, AggregationKind};
pub use config::{load_definitions, load_file};
pub use dictionary::MetricDictionary;
pub use error::{Error, Result};
pub use maker::MetricMaker;
pub use maker_builder::Builder as MakerBuilder;
pub use metric::{LogicalMetric, MetricInfo, DEFAULT_CATEGORY};
pub use metric_name::MetricName;
pub use row::{ColumnType, Row, Value};

/// Evaluation result: one aggregated value per group.
pub type Groups = HashMap<String, Value>;

/// Macro to create a [`Row`].
///
/// Dimensions come first, then metric columns, separated by `;`.
///
/// # Examples
///
/// ```
/// use logical_metrics::{row, Value};
///
/// let row = row!(
///   "host" => "h-1",
///   "env" => "prod";
///   "duration" => 25_i64,
///   "load" => 0.5_f64,
/// );
///
/// assert_eq!(Some("h-1"), row.dimension("host"));
/// assert_eq!(Some(Value::Long(25)), row.value("duration"));
/// ```
#[macro_export]
macro_rules! row {
  ($($dk:expr => $dv:expr),* $(,)? ; $($mk:expr => $mv:expr),* $(,)?) => {{
      $crate::Row::new()
          $(.with_dimension($dk, $dv))*
          $(.with_value($mk, $mv))*
  }}
}
