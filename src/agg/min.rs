#[derive(Clone)]
pub struct Min;

impl super::fold::Fold for Min {
    fn transform(accu: crate::Value, x: crate::Value) -> crate::Value {
        accu.min(x)
    }
}
