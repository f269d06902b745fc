/// Removes exactly one level of nesting.
pub trait Flatten {
    type Output;
    fn flatten(self) -> Self::Output;
}
