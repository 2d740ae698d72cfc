/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The event-loop integration boundary.
//!
//! The client never runs an event loop of its own: when it needs to be driven
//! by an external loop (libev, libuv, epoll, kqueue, a database's built-in
//! loop, ...), it delegates socket and timer interest upward through the
//! [`Reactor`] trait. The reactor does no I/O itself; it only watches file
//! descriptors, fires timers, and calls back.
//!
//! This crate defines the contract and consumes it; an implementation must be
//! supplied by whatever hosts the library.

use std::os::unix::io::RawFd;
use std::time::Duration;

use crate::error::Error;

/// A bitset of I/O readiness events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interest(u8);

impl Interest {
    /// No events.
    pub const NONE: Interest = Interest(0);
    /// The descriptor is readable.
    pub const READ: Interest = Interest(1);
    /// The descriptor is writable.
    pub const WRITE: Interest = Interest(1 << 1);

    /// Both events combined.
    pub const fn union(self, other: Interest) -> Interest {
        Interest(self.0 | other.0)
    }

    /// Whether every event in `other` is present in `self`.
    pub const fn contains(self, other: Interest) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no event is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Interest {
    type Output = Interest;

    fn bitor(self, rhs: Interest) -> Interest {
        self.union(rhs)
    }
}

/// Reactor-chosen token identifying one fd subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IoHandle(
    /// Raw token value, meaningful only to the reactor that issued it.
    pub u64,
);

/// Reactor-chosen token identifying one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(
    /// Raw token value, meaningful only to the reactor that issued it.
    pub u64,
);

/// Callback fired when a watched descriptor becomes ready. Receives the
/// subset of subscribed events that are ready.
pub type IoCallback = Box<dyn FnMut(Interest) + Send>;

/// Callback fired once when a timer elapses.
pub type TimerCallback = Box<dyn FnOnce() + Send>;

/// The capability by which the client subscribes to fd and timer events on an
/// external event loop.
pub trait Reactor: Send + Sync + std::fmt::Debug {
    /// Start watching `fd` for `interest`. The returned handle is passed to
    /// [`io_update`](Reactor::io_update) and
    /// [`io_unsubscribe`](Reactor::io_unsubscribe).
    fn io_subscribe(
        &self,
        fd: RawFd,
        interest: Interest,
        callback: IoCallback,
    ) -> Result<IoHandle, Error>;

    /// Change the event mask of an existing subscription.
    fn io_update(&self, handle: IoHandle, interest: Interest);

    /// Stop watching and release the subscription.
    fn io_unsubscribe(&self, handle: IoHandle);

    /// Arm a one-shot timer firing after `timeout`.
    fn timer_start(&self, timeout: Duration, callback: TimerCallback)
        -> Result<TimerHandle, Error>;

    /// Cancel a previously armed timer. Cancelling a timer that already fired
    /// is a no-op.
    fn timer_cancel(&self, handle: TimerHandle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_interest_bitset() {
        let both = Interest::READ | Interest::WRITE;
        assert!(both.contains(Interest::READ));
        assert!(both.contains(Interest::WRITE));
        assert!(!Interest::READ.contains(Interest::WRITE));
        assert!(Interest::NONE.is_empty());
        assert!(!both.is_empty());
        assert_eq!(Interest::READ.union(Interest::READ), Interest::READ);
    }

    /// Minimal loop stand-in proving the trait is object safe and usable
    /// through `dyn`.
    #[derive(Debug, Default)]
    struct RecordingReactor {
        next_token: AtomicU64,
        subscriptions: Mutex<Vec<(RawFd, Interest)>>,
    }

    impl Reactor for RecordingReactor {
        fn io_subscribe(
            &self,
            fd: RawFd,
            interest: Interest,
            mut callback: IoCallback,
        ) -> Result<IoHandle, Error> {
            self.subscriptions.lock().unwrap().push((fd, interest));
            callback(interest);
            Ok(IoHandle(self.next_token.fetch_add(1, Ordering::Relaxed)))
        }

        fn io_update(&self, _handle: IoHandle, _interest: Interest) {}

        fn io_unsubscribe(&self, _handle: IoHandle) {}

        fn timer_start(
            &self,
            _timeout: Duration,
            callback: TimerCallback,
        ) -> Result<TimerHandle, Error> {
            callback();
            Ok(TimerHandle(self.next_token.fetch_add(1, Ordering::Relaxed)))
        }

        fn timer_cancel(&self, _handle: TimerHandle) {}
    }

    #[test]
    fn test_trait_object_round_trip() {
        let reactor: Box<dyn Reactor> = Box::new(RecordingReactor::default());

        let seen = std::sync::Arc::new(Mutex::new(Interest::NONE));
        let seen2 = std::sync::Arc::clone(&seen);
        let handle = reactor
            .io_subscribe(
                3,
                Interest::READ | Interest::WRITE,
                Box::new(move |events| *seen2.lock().unwrap() = events),
            )
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), Interest::READ | Interest::WRITE);

        reactor.io_update(handle, Interest::READ);
        reactor.io_unsubscribe(handle);

        let fired = std::sync::Arc::new(AtomicU64::new(0));
        let fired2 = std::sync::Arc::clone(&fired);
        let timer = reactor
            .timer_start(
                Duration::from_millis(10),
                Box::new(move || {
                    fired2.fetch_add(1, Ordering::Relaxed);
                }),
            )
            .unwrap();
        assert_eq!(fired.load(Ordering::Relaxed), 1);
        reactor.timer_cancel(timer);
    }
}
