#![no_std]
#![deny(unused_must_use)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod async_result;
pub mod option;
pub mod result;
pub mod stream;
pub mod typelevel;
pub mod variant;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "std")]
pub mod panic;

pub use async_result::AsyncResult;
pub use async_result::IntoResultFuture;
pub use option::Option;
pub use result::Result;
pub use stream::ResultStreamExt;
pub use variant::Variant;

#[cfg(feature = "json")]
pub use json::Json;
#[cfg(feature = "std")]
pub use panic::Panic;

/// Glob-import this to shadow the std prelude's `Ok`/`Err`/`Some`/`None`.
pub mod prelude {
    pub use crate::async_result::AsyncResult;
    pub use crate::option::Option::{self, None, Some};
    pub use crate::result::Result::{self, Err, Ok};
    pub use crate::stream::ResultStreamExt;
    pub use crate::typelevel::Collapse;
    pub use crate::typelevel::Flatten;
    pub use crate::variant::Variant;
}

#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
    pub use core::option::Option;
    pub use preinterpret::preinterpret;
}
