use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Result;

/// Removes any number of nested `Result` layers.
///
/// Nested `Ok`s are unwrapped until the first payload that is not a
/// `Result`, which is returned in `Ok`. The first `Err` found at any depth
/// is returned as is.
pub trait Collapse<E> {
    type Value;
    fn collapse(self) -> Result<Self::Value, E>;
}

/// Implements [`Collapse`] for payload types that are not `Result`s.
///
/// ```ignore
/// struct User { name: String }
/// outcome::collapse_leaf!(User);
/// ```
#[macro_export]
macro_rules! collapse_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<__E> $crate::typelevel::Collapse<__E> for $ty {
                type Value = Self;
                fn collapse(self) -> $crate::Result<Self, __E> {
                    $crate::Result::Ok(self)
                }
            }
        )*
    };
}

crate::collapse_leaf!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
);

#[cfg(feature = "std")]
crate::collapse_leaf!(crate::Panic);

macro_rules! generic_leaf {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*, E> Collapse<E> for $ty {
                type Value = Self;
                fn collapse(self) -> Result<Self, E> {
                    Result::Ok(self)
                }
            }
        )*
    };
}

generic_leaf!(
    ['a, T: ?Sized] &'a T,
    ['a, T: ?Sized] &'a mut T,
    [T: ?Sized] Box<T>,
    [T] Vec<T>,
    [T] crate::Option<T>,
    [T] core::option::Option<T>,
    [T, F] core::result::Result<T, F>,
    [A] (A,),
    [A, B] (A, B),
    [A, B, C] (A, B, C),
    [A, B, C, D] (A, B, C, D),
    [T, const N: usize] [T; N],
);

#[cfg(feature = "json")]
generic_leaf!([T] crate::Json<T>);
