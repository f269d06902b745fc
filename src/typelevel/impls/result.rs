use crate::Result;
use crate::typelevel::*;

impl<T, E> Flatten for Result<Result<T, E>, E> {
    type Output = Result<T, E>;

    fn flatten(self) -> Self::Output {
        self.and_then(core::convert::identity)
    }
}

impl<T, E> Collapse<E> for Result<T, E>
where
    T: Collapse<E>,
{
    type Value = T::Value;

    fn collapse(self) -> Result<T::Value, E> {
        match self {
            | Result::Ok(value) => value.collapse(),
            | Result::Err(error) => Result::Err(error),
        }
    }
}
