#[derive(Clone)]
pub struct Max;

impl super::fold::Fold for Max {
    fn transform(accu: crate::Value, x: crate::Value) -> crate::Value {
        accu.max(x)
    }
}
