//! `Result`-aware operators for [`Stream`]s of `Result`s.
//!
//! Every operator keeps one output event per input event, except the
//! filters and the switch/merge maps, which flatten inner streams.
//! Dropping an operator drops the streams it is polling.

use alloc::boxed::Box;
use core::pin::Pin;
use core::task::Context;
use core::task::Poll;

use futures_util::Stream;
use futures_util::StreamExt;
use futures_util::future;
use futures_util::stream::Fuse;
use futures_util::stream::FusedStream;
use futures_util::stream::SelectAll;
use pin_project_lite::pin_project;

use crate::Result;

pub trait ResultStreamExt<T, E>: Stream<Item = Result<T, E>> {
    /// `map` applied to every event.
    fn result_map<U, F>(self, mut mapper: F) -> impl Stream<Item = Result<U, E>>
    where
        F: FnMut(T) -> U,
        Self: Sized,
    {
        self.map(move |result| result.map(&mut mapper))
    }

    /// `map_err` applied to every event.
    fn result_map_err<E2, F>(self, mut mapper: F) -> impl Stream<Item = Result<T, E2>>
    where
        F: FnMut(E) -> E2,
        Self: Sized,
    {
        self.map(move |result| result.map_err(&mut mapper))
    }

    /// Replaces every `Ok` value with `value`.
    fn result_map_to<U>(self, value: U) -> impl Stream<Item = Result<U, E>>
    where
        U: Clone,
        Self: Sized,
    {
        self.map(move |result| result.map(|_| value.clone()))
    }

    /// Replaces every `Err` value with `error`.
    fn result_map_err_to<E2>(self, error: E2) -> impl Stream<Item = Result<T, E2>>
    where
        E2: Clone,
        Self: Sized,
    {
        self.map(move |result| result.map_err(|_| error.clone()))
    }

    /// Unwraps `Ok` values and replaces errors with `fallback(error)`.
    fn else_map<F>(self, mut fallback: F) -> impl Stream<Item = T>
    where
        F: FnMut(E) -> T,
        Self: Sized,
    {
        self.map(move |result| result.unwrap_or_else(&mut fallback))
    }

    /// Unwraps `Ok` values and replaces errors with `value`.
    fn else_map_to(self, value: T) -> impl Stream<Item = T>
    where
        T: Clone,
        Self: Sized,
    {
        self.map(move |result| result.unwrap_or_else(|_| value.clone()))
    }

    /// Maps every `Ok` value to an inner stream and only follows the latest
    /// one. Items the active inner stream has ready are emitted first; once
    /// it is pending, a newer outer event abandons it. `Err` events are
    /// passed through without calling `mapper` and also abandon it.
    fn result_switch_map<U, F, Inner>(self, mapper: F) -> ResultSwitchMap<Self, F, Inner>
    where
        F: FnMut(T) -> Inner,
        Inner: Stream<Item = Result<U, E>>,
        Self: Sized,
    {
        ResultSwitchMap {
            outer: self.fuse(),
            inner: None,
            mapper,
        }
    }

    /// [`result_switch_map`](Self::result_switch_map) for inner streams of
    /// plain values, which are wrapped in `Ok`.
    fn result_switch_map_values<U, F, Inner>(self, mut mapper: F) -> impl Stream<Item = Result<U, E>>
    where
        F: FnMut(T) -> Inner,
        Inner: Stream<Item = U>,
        Self: Sized,
    {
        self.result_switch_map(move |value| mapper(value).map(Result::Ok))
    }

    /// Maps every `Ok` value to an inner stream and interleaves the events
    /// of all inner streams. `Err` events are passed through without calling
    /// `mapper`.
    fn result_merge_map<U, F, Inner>(self, mapper: F) -> ResultMergeMap<Self, F, Inner>
    where
        F: FnMut(T) -> Inner,
        Inner: Stream<Item = Result<U, E>>,
        Self: Sized,
    {
        ResultMergeMap {
            outer: self.fuse(),
            inner: SelectAll::new(),
            mapper,
        }
    }

    /// [`result_merge_map`](Self::result_merge_map) for inner streams of
    /// plain values, which are wrapped in `Ok`.
    fn result_merge_map_values<U, F, Inner>(self, mut mapper: F) -> impl Stream<Item = Result<U, E>>
    where
        F: FnMut(T) -> Inner,
        Inner: Stream<Item = U>,
        Self: Sized,
    {
        self.result_merge_map(move |value| mapper(value).map(Result::Ok))
    }

    /// Keeps only `Ok` events, unwrapped.
    fn filter_result_ok(self) -> impl Stream<Item = T>
    where
        Self: Sized,
    {
        self.filter_map(|result| future::ready(Option::from(result.to_option())))
    }

    /// Keeps only `Err` events, unwrapped.
    fn filter_result_err(self) -> impl Stream<Item = E>
    where
        Self: Sized,
    {
        self.filter_map(|result| {
            future::ready(match result {
                | Result::Ok(_) => None,
                | Result::Err(error) => Some(error),
            })
        })
    }

    /// Calls `f` with every `Ok` value. Events are passed on unchanged.
    fn tap_result_ok<F>(self, mut f: F) -> impl Stream<Item = Result<T, E>>
    where
        F: FnMut(&T),
        Self: Sized,
    {
        self.inspect(move |result| {
            if let Result::Ok(value) = result {
                f(value)
            }
        })
    }

    /// Calls `f` with every `Err` value. Events are passed on unchanged.
    fn tap_result_err<F>(self, mut f: F) -> impl Stream<Item = Result<T, E>>
    where
        F: FnMut(&E),
        Self: Sized,
    {
        self.inspect(move |result| {
            if let Result::Err(error) = result {
                f(error)
            }
        })
    }
}

impl<S, T, E> ResultStreamExt<T, E> for S where S: Stream<Item = Result<T, E>> {}

pin_project! {
    /// Stream for [`ResultStreamExt::result_switch_map`].
    #[must_use = "streams do nothing unless polled"]
    pub struct ResultSwitchMap<St, F, Inner> {
        #[pin]
        outer: Fuse<St>,
        #[pin]
        inner: Option<Inner>,
        mapper: F,
    }
}

impl<St, F, Inner, T, U, E> Stream for ResultSwitchMap<St, F, Inner>
where
    St: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> Inner,
    Inner: Stream<Item = Result<U, E>>,
{
    type Item = Result<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            // ready inner items go out before the next outer event is pulled
            if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                match inner.poll_next(cx) {
                    | Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                    | Poll::Ready(None) => this.inner.set(None),
                    | Poll::Pending => {}
                }
            }

            match this.outer.as_mut().poll_next(cx) {
                | Poll::Ready(Some(event)) => {
                    if this.inner.is_some() {
                        log::trace!("switch map: abandoning the active inner stream");
                    }
                    match event {
                        | Result::Ok(value) => this.inner.set(Some((this.mapper)(value))),
                        | Result::Err(error) => {
                            this.inner.set(None);
                            return Poll::Ready(Some(Result::Err(error)));
                        }
                    }
                }
                | Poll::Ready(None) if this.inner.is_none() => return Poll::Ready(None),
                | Poll::Ready(None) | Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<St, F, Inner, T, U, E> FusedStream for ResultSwitchMap<St, F, Inner>
where
    St: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> Inner,
    Inner: Stream<Item = Result<U, E>>,
{
    fn is_terminated(&self) -> bool {
        self.outer.is_terminated() && self.inner.is_none()
    }
}

pin_project! {
    /// Stream for [`ResultStreamExt::result_merge_map`].
    #[must_use = "streams do nothing unless polled"]
    pub struct ResultMergeMap<St, F, Inner> {
        #[pin]
        outer: Fuse<St>,
        inner: SelectAll<Pin<Box<Inner>>>,
        mapper: F,
    }
}

impl<St, F, Inner, T, U, E> Stream for ResultMergeMap<St, F, Inner>
where
    St: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> Inner,
    Inner: Stream<Item = Result<U, E>>,
{
    type Item = Result<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        // one outer event per poll so that inner items are not starved
        let pulled = match this.outer.as_mut().poll_next(cx) {
            | Poll::Ready(Some(Result::Ok(value))) => {
                this.inner.push(Box::pin((this.mapper)(value)));
                true
            }
            | Poll::Ready(Some(Result::Err(error))) => return Poll::Ready(Some(Result::Err(error))),
            | Poll::Ready(None) | Poll::Pending => false,
        };

        match this.inner.poll_next_unpin(cx) {
            | Poll::Ready(Some(item)) => Poll::Ready(Some(item)),
            | _ if this.outer.is_terminated() && this.inner.is_empty() => Poll::Ready(None),
            | _ => {
                if pulled {
                    cx.waker().wake_by_ref();
                }
                Poll::Pending
            }
        }
    }
}

impl<St, F, Inner, T, U, E> FusedStream for ResultMergeMap<St, F, Inner>
where
    St: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> Inner,
    Inner: Stream<Item = Result<U, E>>,
{
    fn is_terminated(&self) -> bool {
        self.outer.is_terminated() && self.inner.is_empty()
    }
}
