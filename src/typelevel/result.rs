#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(PartialOrd, Ord)]
#[derive(Hash)]
pub struct Ok<T>(pub T);

#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(PartialOrd, Ord)]
#[derive(Hash)]
pub struct Err<E>(pub E);

impl Ok<()> {
    pub const EMPTY: Self = Ok(());
}

impl Err<()> {
    pub const EMPTY: Self = Err(());
}

impl<T> Ok<T> {
    /// Returns the success value. Only callable once the value is known to
    /// be `Ok`, so it never panics.
    pub fn safe_unwrap(self) -> T {
        self.0
    }

    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Ok<R> {
        Ok(f(self.0))
    }
}

impl<E> Err<E> {
    pub fn into_error(self) -> E {
        self.0
    }

    pub fn map_err<R>(self, f: impl FnOnce(E) -> R) -> Err<R> {
        Err(f(self.0))
    }
}

impl<T, E> From<Ok<T>> for crate::Result<T, E> {
    fn from(ok: Ok<T>) -> Self {
        crate::Result::Ok(ok.0)
    }
}

impl<T, E> From<Err<E>> for crate::Result<T, E> {
    fn from(err: Err<E>) -> Self {
        crate::Result::Err(err.0)
    }
}
