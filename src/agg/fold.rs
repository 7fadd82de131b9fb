use crate::Value;

/// Defines how the values of one group are folded into a single value.
///
/// - `init` maps the first value of a group (default: Identity)
///
/// - `transform` defines what to do with each further value (default: Add)
pub trait Fold {
    fn init(value: Value) -> Value {
        value
    }

    fn transform(accu: Value, x: Value) -> Value {
        accu.add(x)
    }
}
