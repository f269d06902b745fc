use alloc::vec::Vec;
use core::any::Any;
use core::fmt::Display;

pub use self::Option::None;
pub use self::Option::Some;
use crate::Result;
use crate::typelevel;

crate::variant! {
    /// Either a value (`Some`) or nothing (`None`).
    #[must_use]
    #[derive(Debug)]
    #[derive(Clone, Copy)]
    #[derive(PartialEq, Eq)]
    #[derive(PartialOrd, Ord)]
    #[derive(Hash)]
    pub enum Option<T> {
        /// Contains a value.
        Some(value: T),
        /// Contains nothing.
        None,
    }
}

impl<T> Option<T> {
    pub const fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, None)
    }

    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            | Some(value) => Some(value),
            | None => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            | Some(value) => Some(value),
            | None => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            | Some(value) => Some(f(value)),
            | None => None,
        }
    }

    /// `default` is evaluated by the caller even when unused; see
    /// [`map_or_else`](Self::map_or_else) for the lazy form.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            | Some(value) => f(value),
            | None => default,
        }
    }

    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            | Some(value) => f(value),
            | None => default(),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            | Some(value) => f(value),
            | None => None,
        }
    }

    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            | Some(value) => Some(value),
            | None => other,
        }
    }

    pub fn or_else(self, other: impl FnOnce() -> Option<T>) -> Option<T> {
        match self {
            | Some(value) => Some(value),
            | None => other(),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            | Some(value) => value,
            | None => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            | Some(value) => value,
            | None => f(),
        }
    }

    /// Returns the `Some` value.
    ///
    /// # Panics
    ///
    /// Panics on `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            | Some(value) => value,
            | None => panic!("Tried to unwrap None"),
        }
    }

    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            | Some(value) => value,
            | None => panic!("{msg}"),
        }
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(error)`.
    pub fn to_result<E>(self, error: E) -> Result<T, E> {
        match self {
            | Some(value) => Result::Ok(value),
            | None => Result::Err(error),
        }
    }

    /// Moves the payload into a case type that records which variant it is.
    pub fn narrow(self) -> Result<typelevel::Some<T>, typelevel::None> {
        match self {
            | Some(value) => Result::Ok(typelevel::Some(value)),
            | None => Result::Err(typelevel::None),
        }
    }

    /// Collects every `Some` value, or returns `None` as soon as one is
    /// found.
    pub fn all(options: impl IntoIterator<Item = Self>) -> Option<Vec<T>> {
        let options = options.into_iter();
        let mut values = Vec::with_capacity(options.size_hint().0);
        for option in options {
            match option {
                | Some(value) => values.push(value),
                | None => return None,
            }
        }
        Some(values)
    }

    /// Returns the first `Some`, or `None` if there is none.
    pub fn any(options: impl IntoIterator<Item = Self>) -> Option<T> {
        options.into_iter().find(Option::is_some).unwrap_or(None)
    }

    pub fn is_option(value: &dyn Any) -> bool
    where
        T: 'static,
    {
        value.is::<Self>()
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

impl<T> IntoIterator for Option<T>
where
    T: IntoIterator,
{
    type Item = T::Item;
    type IntoIter = core::iter::Flatten<core::option::IntoIter<T>>;

    /// Iterates the elements of a `Some` container; `None` yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        core::option::Option::from(self).into_iter().flatten()
    }
}

impl<T: Display> Display for Option<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            | Some(value) => write!(f, "Some({value})"),
            | None => write!(f, "None"),
        }
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(option: core::option::Option<T>) -> Self {
        match option {
            | core::option::Option::Some(value) => Some(value),
            | core::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            | Some(value) => core::option::Option::Some(value),
            | None => core::option::Option::None,
        }
    }
}
