use super::{fold::Fold, Aggregation};
use crate::{Groups, Row, Value};

/// Folds `rows` into one value per `group_by` dimension value.
///
/// Rows that lack the group dimension are skipped. An empty `group_by`
/// puts all rows into a single group keyed `""`.
pub fn fold_groups<F: Fold>(
    aggregation: &Aggregation,
    rows: &[Row],
    group_by: &str,
) -> crate::Result<Groups> {
    let expected = aggregation.kind().column_type();
    let mut result = Groups::default();

    for row in rows {
        let group = if group_by.is_empty() {
            ""
        } else {
            let Some(group) = row.dimension(group_by) else {
                continue;
            };
            group
        };

        let value = column_value(aggregation, row, expected)?;

        if let Some(accu) = result.get_mut(group) {
            *accu = F::transform(*accu, value);
        } else {
            result.insert(group.to_owned(), F::init(value));
        }
    }

    log::trace!(
        "folded {} rows of {:?} into {} groups",
        rows.len(),
        aggregation.field_name(),
        result.len(),
    );

    Ok(result)
}

fn column_value(
    aggregation: &Aggregation,
    row: &Row,
    expected: Option<crate::ColumnType>,
) -> crate::Result<Value> {
    let invalid = || crate::Error::InvalidColumnReference {
        metric: aggregation.name().to_owned(),
        column: aggregation.field_name().to_owned(),
    };

    let value = row.value(aggregation.field_name()).ok_or_else(invalid)?;

    match expected {
        Some(ty) if ty != value.column_type() => Err(invalid()),
        _ => Ok(value),
    }
}
