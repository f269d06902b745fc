use crate::Option;
use crate::Result;
use crate::typelevel::*;

impl<T> Flatten for Option<Option<T>> {
    type Output = Option<T>;

    fn flatten(self) -> Self::Output {
        self.and_then(core::convert::identity)
    }
}

impl<T, E> Flatten for Option<Result<T, E>> {
    type Output = Option<T>;

    fn flatten(self) -> Self::Output {
        self.and_then(Result::to_option)
    }
}
