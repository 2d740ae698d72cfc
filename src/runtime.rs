/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Hook by which a host offloads the client's blocking operations.
///
/// Every public operation calls [`run`](BlockingRunner::run) exactly once at
/// its top. A host with a cooperative scheduler (a single-threaded event loop
/// with fibers) typically moves the task onto a worker thread, parks the
/// calling fiber, and resumes it when the task finishes; the default
/// [`DirectRunner`] simply invokes the task on the calling thread.
///
/// Contract:
///
/// * `run` must invoke `task` exactly once and must not return before the
///   invocation has finished.
/// * The worker thread, if any, is owned by the host; the client never
///   creates or joins it.
/// * The task is safe to run on any OS thread that is not also driving the
///   host's event loop.
pub trait BlockingRunner: Send + Sync + fmt::Debug {
    /// Execute `task` to completion, blocking the logical caller until done.
    fn run(&self, task: &mut (dyn FnMut() + Send));
}

/// The reference [`BlockingRunner`]: no offloading, the task runs inline on
/// the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectRunner;

impl BlockingRunner for DirectRunner {
    fn run(&self, task: &mut (dyn FnMut() + Send)) {
        task();
    }
}

/// Run `f` through the host's runner and hand its result back to the caller.
pub(crate) fn offload<R, F>(runner: &dyn BlockingRunner, f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    let mut f = Some(f);
    let mut output = None;
    let mut task = || {
        let f = f.take().expect("blocking task invoked more than once");
        output = Some(f());
    };
    runner.run(&mut task);
    output.expect("BlockingRunner::run must invoke the task")
}
