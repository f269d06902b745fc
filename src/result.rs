use alloc::vec::Vec;
use core::any::Any;
use core::convert::Infallible;
use core::fmt::Debug;
use core::fmt::Display;

use futures_util::future::Ready;

pub use self::Result::Err;
pub use self::Result::Ok;
use crate::AsyncResult;
use crate::Option;
use crate::typelevel;
use crate::typelevel::Collapse;

crate::variant! {
    /// Either a success value (`Ok`) or an error (`Err`).
    #[must_use = "this `Result` may be an `Err` variant, which should be handled"]
    #[derive(Debug)]
    #[derive(Clone, Copy)]
    #[derive(PartialEq, Eq)]
    #[derive(PartialOrd, Ord)]
    #[derive(Hash)]
    pub enum Result<T, E> {
        /// Contains the success value.
        Ok(value: T),
        /// Contains the error value.
        Err(error: E),
    }
}

impl<T, E> Result<T, E> {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        matches!(self, Err(_))
    }

    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            | Ok(value) => Ok(value),
            | Err(error) => Err(error),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            | Ok(value) => Ok(value),
            | Err(error) => Err(error),
        }
    }

    /// Applies `f` to the `Ok` value, leaving an `Err` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            | Ok(value) => Ok(f(value)),
            | Err(error) => Err(error),
        }
    }

    /// Applies `f` to the `Err` value, leaving an `Ok` untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            | Ok(value) => Ok(value),
            | Err(error) => Err(f(error)),
        }
    }

    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            | Ok(value) => f(value),
            | Err(_) => default,
        }
    }

    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            | Ok(value) => f(value),
            | Err(error) => default(error),
        }
    }

    /// Calls `f` with the `Ok` value. An `Err` is returned unchanged and `f`
    /// is never called.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            | Ok(value) => f(value),
            | Err(error) => Err(error),
        }
    }

    /// Like [`and_then`](Self::and_then), but whatever `f` returns is
    /// collapsed through any number of nested `Result`s.
    ///
    /// `Ok(Ok(Ok(x)))` becomes `Ok(x)`; the first `Err` at any depth wins.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> U) -> Result<U::Value, E>
    where
        U: Collapse<E>,
    {
        match self {
            | Ok(value) => f(value).collapse(),
            | Err(error) => Err(error),
        }
    }

    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            | Ok(value) => Ok(value),
            | Err(error) => f(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            | Ok(value) => value,
            | Err(_) => default,
        }
    }

    #[deprecated(note = "use `unwrap_or` instead")]
    pub fn r#else(self, default: T) -> T {
        self.unwrap_or(default)
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            | Ok(value) => value,
            | Err(error) => f(error),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics on `Err`, with the error's `Debug` rendering in the message.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            | Ok(value) => value,
            | Err(error) => panic!("Tried to unwrap Error: {error:?}"),
        }
    }

    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            | Ok(value) => value,
            | Err(error) => panic!("{msg} - Error: {error:?}"),
        }
    }

    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            | Ok(value) => panic!("Tried to unwrap Ok: {value:?}"),
            | Err(error) => error,
        }
    }

    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            | Ok(_) => panic!("{msg}"),
            | Err(error) => error,
        }
    }

    /// Discards the error, if any.
    pub fn to_option(self) -> Option<T> {
        match self {
            | Ok(value) => Option::Some(value),
            | Err(_) => Option::None,
        }
    }

    /// Moves the payload into a case type that records which variant it is.
    pub fn narrow(self) -> Result<typelevel::Ok<T>, typelevel::Err<E>> {
        match self {
            | Ok(value) => Ok(typelevel::Ok(value)),
            | Err(error) => Err(typelevel::Err(error)),
        }
    }

    pub fn to_async_result(self) -> AsyncResult<Ready<Self>> {
        AsyncResult::new(self)
    }

    /// Collects every `Ok` value, or returns the first `Err`.
    ///
    /// An empty input yields `Ok` of an empty `Vec`.
    pub fn all(results: impl IntoIterator<Item = Self>) -> Result<Vec<T>, E> {
        let results = results.into_iter();
        let mut values = Vec::with_capacity(results.size_hint().0);
        for result in results {
            match result {
                | Ok(value) => values.push(value),
                | Err(error) => return Err(error),
            }
        }
        Ok(values)
    }

    /// Returns the first `Ok`, or every error in input order.
    ///
    /// An empty input yields `Err` of an empty `Vec`.
    pub fn any(results: impl IntoIterator<Item = Self>) -> Result<T, Vec<E>> {
        let mut errors = Vec::new();
        for result in results {
            match result {
                | Ok(value) => return Ok(value),
                | Err(error) => errors.push(error),
            }
        }
        Err(errors)
    }

    pub fn is_result(value: &dyn Any) -> bool
    where
        T: 'static,
        E: 'static,
    {
        value.is::<Self>()
    }
}

impl<T> Result<T, Infallible> {
    /// Returns the `Ok` value of a result that cannot be an `Err`.
    pub fn safe_unwrap(self) -> T {
        match self {
            | Ok(value) => value,
            | Err(never) => match never {},
        }
    }
}

impl<T, E> IntoIterator for Result<T, E>
where
    T: IntoIterator,
{
    type Item = T::Item;
    type IntoIter = core::iter::Flatten<core::option::IntoIter<T>>;

    /// Iterates the elements of an `Ok` container; an `Err` yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        core::option::Option::from(self.to_option()).into_iter().flatten()
    }
}

impl<T: Display, E: Display> Display for Result<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            | Ok(value) => write!(f, "Ok({value})"),
            | Err(error) => write!(f, "Err({error})"),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            | core::result::Result::Ok(value) => Ok(value),
            | core::result::Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            | Ok(value) => core::result::Result::Ok(value),
            | Err(error) => core::result::Result::Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use core::convert::Infallible;

    use crate::prelude::*;

    fn ok(value: i32) -> Result<i32, &'static str> {
        Ok(value)
    }

    fn err(error: &'static str) -> Result<i32, &'static str> {
        Err(error)
    }

    #[test]
    fn test_tag_exclusivity() {
        for result in [ok(1), err("a")] {
            assert_ne!(result.is_ok(), result.is_err());
        }
        assert!(ok(1).is_ok());
        assert!(err("a").is_err());
        assert_eq!(ok(1).tag(), "Ok");
        assert_eq!(err("a").tag(), "Err");
    }

    #[test]
    fn test_map_identity() {
        assert_eq!(ok(3).map(|x| x), ok(3));
        assert_eq!(err("a").map(|x| x), err("a"));
    }

    #[test]
    fn test_map_composition() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 10;
        assert_eq!(ok(2).map(f).map(g), ok(2).map(|x| g(f(x))));
        assert_eq!(ok(2).map(f).map(g), ok(30));
        assert_eq!(err("a").map(f).map(g), err("a"));
    }

    #[test]
    fn test_map_err() {
        assert_eq!(err("a").map_err(str::len), Err::<i32, usize>(1));
        assert_eq!(ok(1).map_err(str::len), Ok::<i32, usize>(1));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let calls = Cell::new(0);
        let double = |x: i32| {
            calls.set(calls.get() + 1);
            ok(x * 2)
        };

        let error = "boom";
        let result = Err::<i32, _>(error).and_then(double);
        assert_eq!(calls.get(), 0);
        match result {
            | Err(e) => assert!(core::ptr::eq(e, error)),
            | Ok(_) => panic!("expected Err"),
        }

        assert_eq!(ok(4).and_then(double), ok(8));
        assert_eq!(calls.get(), 1);
        assert_eq!(ok(4).and_then(|_| err("inner")), err("inner"));
    }

    #[test]
    fn test_flat_map_collapses_nesting() {
        let nested: Result<Result<Result<&str, i32>, i32>, i32> = Ok(Ok(Ok("x")));
        assert_eq!(nested.flat_map(|inner| inner), Ok("x"));

        let nested: Result<Result<Result<&str, i32>, i32>, i32> = Ok(Ok(Err(3)));
        assert_eq!(nested.flat_map(|inner| inner), Err(3));

        let nested: Result<Result<Result<&str, i32>, i32>, i32> = Ok(Err(2));
        assert_eq!(nested.flat_map(|inner| inner), Err(2));

        assert_eq!(ok(1).flat_map(|x| x + 1), ok(2));
        assert_eq!(ok(1).flat_map(|x| Ok::<_, &str>(Ok(x + 1))), ok(2));
    }

    #[test]
    fn test_flat_map_err_skips_mapper() {
        let calls = Cell::new(0);
        let result = err("a").flat_map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(result, err("a"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(ok(1).unwrap_or(0), 1);
        assert_eq!(err("a").unwrap_or(0), 0);
        assert_eq!(err("abc").unwrap_or_else(|e| e.len() as i32), 3);
        #[allow(deprecated)]
        let value = err("a").r#else(7);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_map_or() {
        assert_eq!(ok(2).map_or(0, |x| x * 2), 4);
        assert_eq!(err("a").map_or(0, |x| x * 2), 0);
        assert_eq!(err("ab").map_or_else(|e| e.len() as i32, |x| x * 2), 2);
    }

    #[test]
    fn test_or_else() {
        assert_eq!(err("a").or_else(|_| Ok::<i32, ()>(5)), Ok(5));
        assert_eq!(ok(1).or_else(|_| Err::<i32, ()>(())), Ok(1));
    }

    #[test]
    fn test_unwrap_ok() {
        assert_eq!(ok(1).unwrap(), 1);
        assert_eq!(ok(1).expect("unused"), 1);
        assert_eq!(err("a").expect_err("unused"), "a");
        assert_eq!(err("a").unwrap_err(), "a");
    }

    #[test]
    #[should_panic(expected = "Tried to unwrap Error: \"bad\"")]
    fn test_unwrap_err_panics() {
        err("bad").unwrap();
    }

    #[test]
    #[should_panic(expected = "reading config - Error: \"bad\"")]
    fn test_expect_panics() {
        err("bad").expect("reading config");
    }

    #[test]
    #[should_panic(expected = "should have failed")]
    fn test_expect_err_panics() {
        ok(1).expect_err("should have failed");
    }

    #[test]
    #[should_panic(expected = "Tried to unwrap Ok: 1")]
    fn test_unwrap_err_on_ok_panics() {
        ok(1).unwrap_err();
    }

    #[test]
    fn test_safe_unwrap() {
        let infallible: Result<i32, Infallible> = Ok(5);
        assert_eq!(infallible.safe_unwrap(), 5);

        match ok(6).narrow() {
            | Ok(value) => assert_eq!(value.safe_unwrap(), 6),
            | Err(_) => panic!("expected Ok"),
        }
        match err("a").narrow() {
            | Ok(_) => panic!("expected Err"),
            | Err(error) => assert_eq!(error.into_error(), "a"),
        }
    }

    #[test]
    fn test_to_option() {
        assert_eq!(ok(1).to_option(), Some(1));
        assert_eq!(err("a").to_option(), None);
    }

    #[test]
    fn test_all() {
        assert_eq!(Result::all([ok(1), err("a"), err("b")]), Err("a"));
        assert_eq!(Result::all([ok(1), ok(2)]), Ok(vec![1, 2]));
        assert_eq!(Result::all(Vec::<Result<i32, &str>>::new()), Ok(vec![]));
    }

    #[test]
    fn test_any() {
        assert_eq!(Result::any([err("a"), err("b")]), Err(vec!["a", "b"]));
        assert_eq!(Result::any([err("a"), ok(2), ok(3)]), Ok(2));
        assert_eq!(Result::any(Vec::<Result<i32, &str>>::new()), Err(vec![]));
    }

    #[test]
    fn test_is_result() {
        assert!(Result::<i32, &str>::is_result(&ok(1)));
        assert!(Result::<i32, &str>::is_result(&err("a")));
        assert!(!Result::<i32, &str>::is_result(&1));
        assert!(!Result::<i32, &str>::is_result(&core::result::Result::<i32, &str>::Ok(1)));
        assert!(!Result::<i32, &str>::is_result(&Some(1)));
    }

    #[test]
    fn test_iteration() {
        let items: Vec<i32> = Ok::<_, ()>(vec![1, 2, 3]).into_iter().collect();
        assert_eq!(items, vec![1, 2, 3]);

        let mut count = 0;
        for _ in Err::<Vec<i32>, _>("a") {
            count += 1;
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_flatten_one_level() {
        let nested: Result<Result<i32, &str>, &str> = Ok(Ok(1));
        assert_eq!(nested.flatten(), ok(1));
        let nested: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
        assert_eq!(nested.flatten(), err("inner"));
        let nested: Result<Result<i32, &str>, &str> = Err("outer");
        assert_eq!(nested.flatten(), err("outer"));
    }

    #[test]
    fn test_match_with() {
        let describe = |result: Result<i32, &'static str>| {
            result.match_with(|arms| {
                arms.ok(|value| value * 2)
                    .err(|error| error.len() as i32)
            })
        };
        assert_eq!(describe(ok(21)), 42);
        assert_eq!(describe(err("four")), 4);

        let is_ok = err("a").match_with(|arms| arms.ok(|_| true).wildcard(|| false));
        assert!(!is_ok);
    }

    #[test]
    fn test_tap() {
        let mut seen = String::new();
        let result = err("oops").tap(|handlers| handlers.err(|error| seen.push_str(error)));
        assert_eq!(result, err("oops"));
        assert_eq!(seen, "oops");
    }

    #[test]
    fn test_display() {
        assert_eq!(alloc::format!("{}", ok(1)), "Ok(1)");
        assert_eq!(alloc::format!("{}", err("a")), "Err(a)");
    }

    #[test]
    fn test_std_interop() {
        let std_result: core::result::Result<i32, &str> = ok(1).into();
        assert_eq!(std_result, core::result::Result::Ok(1));
        let result: Result<i32, &str> = core::result::Result::Err("a").into();
        assert_eq!(result, err("a"));
    }
}
