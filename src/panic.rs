use alloc::boxed::Box;
use alloc::string::String;
use alloc::string::ToString;
use core::any::Any;
use core::error::Error;
use core::fmt::Display;
use core::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use crate::AsyncResult;
use crate::Result;

/// A panic caught by [`Result::wrap`] or [`Result::wrap_async`].
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
#[derive(Hash)]
pub struct Panic {
    message: String,
}

impl Panic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message of a `panic!` payload. Payloads that are neither
    /// `&str` nor `String` get a placeholder message.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            | Ok(message) => *message,
            | Err(payload) => match payload.downcast_ref::<&'static str>() {
                | Some(message) => message.to_string(),
                | None => "Box<dyn Any>".to_string(),
            },
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl Error for Panic {}

fn caught(payload: Box<dyn Any + Send>) -> Panic {
    let panic = Panic::from_payload(payload);
    log::debug!("wrapped operation {panic}");
    panic
}

impl<T> Result<T, Panic> {
    /// Runs `op`, turning a panic into `Err`.
    pub fn wrap(op: impl FnOnce() -> T) -> Self {
        match std::panic::catch_unwind(AssertUnwindSafe(op)) {
            | Ok(value) => Result::Ok(value),
            | Err(payload) => Result::Err(caught(payload)),
        }
    }

    /// Runs `op` and awaits the future it returns, turning a panic in either
    /// step into `Err`.
    pub fn wrap_async<F>(op: impl FnOnce() -> F) -> AsyncResult<impl Future<Output = Self>>
    where
        F: Future<Output = T>,
    {
        let started = std::panic::catch_unwind(AssertUnwindSafe(op));
        AsyncResult::new(async move {
            let future = match started {
                | Ok(future) => future,
                | Err(payload) => return Result::Err(caught(payload)),
            };
            match AssertUnwindSafe(future).catch_unwind().await {
                | Ok(value) => Result::Ok(value),
                | Err(payload) => Result::Err(caught(payload)),
            }
        })
    }
}
