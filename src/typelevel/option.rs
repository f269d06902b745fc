use super::Flatten;

#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(PartialOrd, Ord)]
#[derive(Hash)]
pub struct Some<T>(pub T);

#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(PartialOrd, Ord)]
#[derive(Hash)]
#[derive(Default)]
pub struct None;

impl Some<()> {
    pub const EMPTY: Self = Some(());
}

impl<T> Some<T> {
    /// Returns the contained value. Only callable once the value is known to
    /// be present, so it never panics.
    pub fn safe_unwrap(self) -> T {
        self.0
    }

    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Some<R> {
        Some(f(self.0))
    }
}

impl<T> Flatten for Some<Some<T>> {
    type Output = Some<T>;
    fn flatten(self) -> Some<T> {
        self.0
    }
}

impl Flatten for Some<None> {
    type Output = None;
    fn flatten(self) -> Self::Output {
        self.0
    }
}

impl<T> From<Some<T>> for crate::Option<T> {
    fn from(some: Some<T>) -> Self {
        crate::Option::Some(some.0)
    }
}

impl<T> From<None> for crate::Option<T> {
    fn from(_: None) -> Self {
        crate::Option::None
    }
}

#[cfg(test)]
mod tests {
    use super::None;
    use super::Some;
    use crate::typelevel::Flatten;

    #[test]
    fn test_empty() {
        assert_eq!(crate::Option::from(Some::<()>::EMPTY), crate::Option::Some(()));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Some(Some(1)).flatten(), Some(1));
        assert_eq!(Some(None).flatten(), None);
    }
}
