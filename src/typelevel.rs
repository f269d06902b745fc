//! Cases whose variant is known at compile time.
//!
//! `Result::narrow`/`Option::narrow` move a value into one of these case
//! types; accessors that cannot fail, such as `safe_unwrap`, only exist on
//! the success cases.

pub mod collapse;
pub mod flatten;
pub mod option;
pub mod result;

pub use collapse::Collapse;
pub use flatten::Flatten;
pub use option::None;
pub use option::Some;
pub use result::Err;
pub use result::Ok;

mod impls;
