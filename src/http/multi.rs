/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The multiplexed backend: a dedicated driver thread services a pending
//! queue against a shared connection pool.
//!
//! Submitters enqueue a transaction, wake the driver, and block on a
//! per-request completion slot. The driver admits pending transactions up to
//! the configured connection cap, polls the in-flight set with a short idle
//! timeout so it notices new submissions, and signals each waiter as its
//! transaction finishes.
//!
//! Teardown flips the `stop` flag and joins the driver; the driver exits only
//! once nothing is pending or in flight, so every accepted transaction is
//! either completed or rejected before drop returns.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;

use futures_util::stream::FuturesUnordered;
use futures_util::{FutureExt, StreamExt};

use crate::auth::AuthContext;
use crate::config::Config;
use crate::error::{self, Error};
use crate::http;
use crate::http::backend::HttpBackend;
use crate::http::perform::perform;
use crate::http::transaction::{HttpOutcome, Transaction};

#[derive(Debug)]
pub(crate) struct MultiplexedBackend {
    shared: Arc<Shared>,
    driver: Option<thread::JoinHandle<()>>,
}

#[derive(Debug)]
struct Shared {
    queue: Mutex<QueueState>,
    cond: Condvar,
    idle_timeout: std::time::Duration,
    /// Cap on concurrently executing transactions; 0 means unbounded.
    max_in_flight: usize,
}

#[derive(Debug)]
struct QueueState {
    pending: VecDeque<PendingRequest>,
    /// Transitions `false -> true` exactly once, in the destructor.
    stop: bool,
}

/// Queue element carrying one transaction from its submitter to the driver
/// and the result back.
#[derive(Debug)]
struct PendingRequest {
    txn: Transaction,
    slot: Arc<CompletionSlot>,
}

#[derive(Debug, Default)]
struct CompletionSlot {
    done: Mutex<Option<Result<HttpOutcome, Error>>>,
    cond: Condvar,
}

impl CompletionSlot {
    fn complete(&self, result: Result<HttpOutcome, Error>) {
        let mut done = self.done.lock().unwrap_or_else(PoisonError::into_inner);
        *done = Some(result);
        self.cond.notify_all();
    }

    fn wait(&self) -> Result<HttpOutcome, Error> {
        let mut done = self
            .done
            .lock()
            .map_err(|_| error::runtime_error("completion slot mutex poisoned"))?;
        loop {
            match done.take() {
                Some(result) => return result,
                None => {
                    done = self
                        .cond
                        .wait(done)
                        .map_err(|_| error::runtime_error("completion slot mutex poisoned"))?;
                }
            }
        }
    }
}

impl MultiplexedBackend {
    pub(crate) fn new(config: &Config, auth: Arc<AuthContext>) -> Result<Self, Error> {
        let pool = http::build_pool(config)?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(error::init_error)?;

        let shared = Arc::new(Shared {
            queue: Mutex::new(QueueState {
                pending: VecDeque::new(),
                stop: false,
            }),
            cond: Condvar::new(),
            idle_timeout: config.multi_idle_timeout(),
            max_in_flight: config.max_total_connections(),
        });

        let driver_shared = Arc::clone(&shared);
        let driver = thread::Builder::new()
            .name("s3-courier-driver".to_owned())
            .spawn(move || driver_main(driver_shared, rt, pool, auth))
            .map_err(error::init_error)?;

        Ok(Self {
            shared,
            driver: Some(driver),
        })
    }
}

impl HttpBackend for MultiplexedBackend {
    fn execute(&self, txn: Transaction) -> Result<HttpOutcome, Error> {
        let slot = Arc::new(CompletionSlot::default());
        {
            let mut queue = self
                .shared
                .queue
                .lock()
                .map_err(|_| error::runtime_error("backend queue mutex poisoned"))?;
            if queue.stop {
                return Err(error::runtime_error("multiplexed backend is shutting down"));
            }
            queue.pending.push_back(PendingRequest {
                txn,
                slot: Arc::clone(&slot),
            });
            self.shared.cond.notify_all();
        }
        slot.wait()
    }
}

impl Drop for MultiplexedBackend {
    fn drop(&mut self) {
        {
            let mut queue = self
                .shared
                .queue
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            queue.stop = true;
            self.shared.cond.notify_all();
        }
        if let Some(driver) = self.driver.take() {
            let _ = driver.join();
        }
    }
}

type InFlight = FuturesUnordered<Pin<Box<dyn Future<Output = ()>>>>;

fn driver_main(
    shared: Arc<Shared>,
    rt: tokio::runtime::Runtime,
    pool: reqwest::Client,
    auth: Arc<AuthContext>,
) {
    let mut in_flight: InFlight = FuturesUnordered::new();

    loop {
        let admitted = {
            let mut queue = shared.queue.lock().unwrap_or_else(PoisonError::into_inner);
            while !queue.stop && queue.pending.is_empty() && in_flight.is_empty() {
                queue = shared
                    .cond
                    .wait(queue)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            if queue.stop && queue.pending.is_empty() && in_flight.is_empty() {
                break;
            }

            let budget = if shared.max_in_flight == 0 {
                queue.pending.len()
            } else {
                shared
                    .max_in_flight
                    .saturating_sub(in_flight.len())
                    .min(queue.pending.len())
            };
            queue.pending.drain(..budget).collect::<Vec<_>>()
        };

        for request in admitted {
            let pool = pool.clone();
            let auth = Arc::clone(&auth);
            tracing::trace!(url = %request.txn.url, "admitting transaction");
            in_flight.push(Box::pin(async move {
                let result = perform(&pool, &auth, request.txn).await;
                request.slot.complete(result);
            }));
        }

        if in_flight.is_empty() {
            continue;
        }

        // Poll for completions, but wake up after the idle timeout so
        // freshly queued submissions are admitted promptly.
        rt.block_on(async {
            let completion = tokio::time::timeout(shared.idle_timeout, in_flight.next()).await;
            if completion.is_ok() {
                // drain whatever else finished in the meantime
                while let Some(Some(())) = in_flight.next().now_or_never() {}
            }
        });
    }
}
