use crate::Value;

#[derive(Clone)]
pub struct Count;

impl super::fold::Fold for Count {
    fn init(_: Value) -> Value {
        Value::Long(1)
    }

    fn transform(accu: Value, _: Value) -> Value {
        accu.add(Value::Long(1))
    }
}
