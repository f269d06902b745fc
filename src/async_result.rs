use core::future::Future;
use core::future::IntoFuture;
use core::pin::Pin;
use core::task::Context;
use core::task::Poll;

use futures_util::future::Ready;
use pin_project_lite::pin_project;

use crate::Result;

/// A value that settles into a `Result`: either one that is already
/// available, or anything that can be awaited for one (futures and other
/// [`AsyncResult`]s).
pub trait IntoResultFuture {
    type Ok;
    type Err;
    type Future: Future<Output = Result<Self::Ok, Self::Err>>;

    fn into_result_future(self) -> Self::Future;
}

impl<T, E> IntoResultFuture for Result<T, E> {
    type Ok = T;
    type Err = E;
    type Future = Ready<Self>;

    fn into_result_future(self) -> Self::Future {
        futures_util::future::ready(self)
    }
}

impl<F, T, E> IntoResultFuture for F
where
    F: IntoFuture<Output = Result<T, E>>,
{
    type Ok = T;
    type Err = E;
    type Future = F::IntoFuture;

    fn into_result_future(self) -> Self::Future {
        self.into_future()
    }
}

pin_project! {
    /// A `Result` that is not available yet.
    ///
    /// Combinators only build a new future around the wrapped one; nothing
    /// runs until the `AsyncResult` is awaited, which is also how the final
    /// `Result` is extracted.
    ///
    /// ```ignore
    /// let doubled = AsyncResult::new(fetch_user(id))
    ///     .and_then(|user| load_settings(user.id))
    ///     .map(|settings| settings.theme)
    ///     .await;
    /// ```
    #[must_use = "an `AsyncResult` does nothing unless awaited"]
    pub struct AsyncResult<F> {
        #[pin]
        future: F,
    }
}

impl<F> AsyncResult<F> {
    pub fn new<S>(start: S) -> Self
    where
        S: IntoResultFuture<Future = F>,
    {
        Self {
            future: start.into_result_future(),
        }
    }

    pub fn into_inner(self) -> F {
        self.future
    }
}

impl<F, T, E> AsyncResult<F>
where
    F: Future<Output = Result<T, E>>,
{
    /// Once resolved, calls `mapper` with the `Ok` value and continues with
    /// whatever it returns. An `Err` is passed through and `mapper` is never
    /// called.
    pub fn and_then<U>(
        self,
        mapper: impl FnOnce(T) -> U,
    ) -> AsyncResult<impl Future<Output = Result<U::Ok, E>>>
    where
        U: IntoResultFuture<Err = E>,
    {
        AsyncResult::new(async move {
            match self.future.await {
                | Result::Ok(value) => mapper(value).into_result_future().await,
                | Result::Err(error) => Result::Err(error),
            }
        })
    }

    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> AsyncResult<impl Future<Output = Result<U, E>>> {
        AsyncResult::new(async move { self.future.await.map(mapper) })
    }

    /// Like [`map`](Self::map), but `mapper` returns a value that is awaited
    /// before being wrapped in `Ok`.
    pub fn map_async<U>(
        self,
        mapper: impl FnOnce(T) -> U,
    ) -> AsyncResult<impl Future<Output = Result<U::Output, E>>>
    where
        U: IntoFuture,
    {
        AsyncResult::new(async move {
            match self.future.await {
                | Result::Ok(value) => Result::Ok(mapper(value).await),
                | Result::Err(error) => Result::Err(error),
            }
        })
    }

    pub fn map_err<E2>(
        self,
        mapper: impl FnOnce(E) -> E2,
    ) -> AsyncResult<impl Future<Output = Result<T, E2>>> {
        AsyncResult::new(async move { self.future.await.map_err(mapper) })
    }

    /// Once resolved, calls `other` with the `Err` value and continues with
    /// whatever it returns. An `Ok` is passed through.
    pub fn or_else<U>(
        self,
        other: impl FnOnce(E) -> U,
    ) -> AsyncResult<impl Future<Output = Result<T, U::Err>>>
    where
        U: IntoResultFuture<Ok = T>,
    {
        AsyncResult::new(async move {
            match self.future.await {
                | Result::Ok(value) => Result::Ok(value),
                | Result::Err(error) => other(error).into_result_future().await,
            }
        })
    }

    pub async fn map_or<U>(self, default: U, mapper: impl FnOnce(T) -> U) -> U {
        self.future.await.map_or(default, mapper)
    }

    pub async fn map_or_else<U>(
        self,
        default: impl FnOnce(E) -> U,
        mapper: impl FnOnce(T) -> U,
    ) -> U {
        self.future.await.map_or_else(default, mapper)
    }
}

impl<F> Future for AsyncResult<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx)
    }
}

impl<T, E> From<Result<T, E>> for AsyncResult<Ready<Result<T, E>>> {
    fn from(result: Result<T, E>) -> Self {
        AsyncResult::new(result)
    }
}
