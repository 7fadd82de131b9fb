mod definition;
mod span;

use crate::{AggregationKind, LogicalMetric, MetricDictionary, MetricMaker};
use definition::{is_blank, ParsedDefinition};
use nom::error::VerboseErrorKind;
use span::{Parse, ParseError};
use std::path::Path;

struct Definition<'a> {
    name: &'a str,
    kind: AggregationKind,
    column: &'a str,
}

fn syntax_error(line: u32, err: nom::Err<ParseError<'_>>) -> crate::Error {
    match err {
        nom::Err::Incomplete(_) => crate::Error::InvalidDefinition {
            line,
            column: 1,
            reason: "incomplete definition".to_owned(),
        },
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let column = e
                .errors
                .first()
                .map_or(1, |(input, _)| input.get_utf8_column());

            let reason = e
                .errors
                .iter()
                .find_map(|(_, kind)| match kind {
                    VerboseErrorKind::Context(ctx) => Some((*ctx).to_owned()),
                    _ => None,
                })
                .unwrap_or_else(|| "syntax error".to_owned());

            crate::Error::InvalidDefinition {
                line,
                column,
                reason,
            }
        }
    }
}

fn parse_definitions(text: &str) -> crate::Result<Vec<Definition<'_>>> {
    let mut definitions = vec![];

    for (idx, line) in text.lines().enumerate() {
        if is_blank(line) {
            continue;
        }

        let line_no = u32::try_from(idx + 1).unwrap_or(u32::MAX);

        let (_, parsed) =
            ParsedDefinition::parse_from_raw(line).map_err(|e| syntax_error(line_no, e))?;

        definitions.push(Definition {
            name: parsed.name,
            kind: parsed.kind.parse()?,
            column: parsed.column,
        });
    }

    Ok(definitions)
}

/// Parses metric definitions and registers them in `dictionary`.
///
/// One definition per line, `name = kind(column)`, e.g.:
///
/// ```text
/// # latency
/// minDuration = longMin(duration)
/// maxDuration = longMax(duration)
/// ```
///
/// The whole text is validated before any metric is registered, so on error
/// the dictionary is left unchanged.
///
/// # Examples
///
/// ```
/// use logical_metrics::{load_definitions, MetricDictionary};
///
/// let dictionary = MetricDictionary::new();
///
/// let metrics = load_definitions(&dictionary, "
///     minDuration = longMin(duration)
///     avgLoad = doubleSum(load) # summed, divided later
/// ")?;
///
/// assert_eq!(2, metrics.len());
/// assert!(dictionary.contains("avgLoad"));
///
/// # Ok::<(), logical_metrics::Error>(())
/// ```
///
/// # Errors
///
/// - [`crate::Error::InvalidDefinition`] on syntax errors
/// - [`crate::Error::UnknownAggregation`] on unknown aggregation kinds
/// - [`crate::Error::DuplicateMetricName`] if a name is defined twice, or already registered
pub fn load_definitions(
    dictionary: &MetricDictionary,
    text: &str,
) -> crate::Result<Vec<LogicalMetric>> {
    let definitions = parse_definitions(text)?;

    let mut seen = rustc_hash::FxHashSet::default();

    for definition in &definitions {
        if dictionary.contains(definition.name) || !seen.insert(definition.name) {
            return Err(crate::Error::DuplicateMetricName(definition.name.to_owned()));
        }
    }

    let mut makers: crate::HashMap<AggregationKind, MetricMaker> = crate::HashMap::default();
    let mut metrics = Vec::with_capacity(definitions.len());

    for definition in definitions {
        let maker = makers
            .entry(definition.kind)
            .or_insert_with(|| MetricMaker::new(dictionary, definition.kind));

        metrics.push(maker.make(definition.name, definition.column)?);
    }

    log::debug!("loaded {} metric definitions", metrics.len());

    Ok(metrics)
}

/// Reads a definition file and registers its metrics in `dictionary`.
///
/// See [`load_definitions`] for the format.
///
/// # Errors
///
/// Returns error if the file cannot be read, or if [`load_definitions`] fails.
pub fn load_file<P: AsRef<Path>>(
    dictionary: &MetricDictionary,
    path: P,
) -> crate::Result<Vec<LogicalMetric>> {
    let path = path.as_ref();
    log::debug!("loading metric definitions from {path:?}");

    let text = std::fs::read_to_string(path)?;
    load_definitions(dictionary, &text)
}
