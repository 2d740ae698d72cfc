/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs::File;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

/// Where a transaction's request body comes from.
#[derive(Debug)]
pub(crate) enum IoSource {
    /// No request body.
    None,
    /// Positional reads against a file: `limit` bytes starting at `offset`.
    /// The kernel file offset is never touched.
    Fd { file: File, offset: u64, limit: u64 },
    /// The whole body is already in memory.
    Mem(Bytes),
}

/// Where a transaction's response body goes.
#[derive(Debug)]
pub(crate) enum IoSink {
    /// Accept and discard, counting bytes.
    Null,
    /// Positional writes against a file starting at `offset`. A non-zero
    /// `limit` caps how much the transaction may deliver; overrunning it
    /// fails the transaction.
    Fd { file: File, offset: u64, limit: u64 },
    /// Collect into an owned buffer returned on the outcome.
    Buffer,
}

/// One fully-wired HTTP transaction, built by the factory and consumed by a
/// backend. Owns everything it needs: URL, headers, body source, response
/// sink, and the byte counters shared with the streaming body.
#[derive(Debug)]
pub(crate) struct Transaction {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) read_io: IoSource,
    pub(crate) write_io: IoSink,
    /// Explicit Content-Length; bodyless PUTs still advertise zero.
    pub(crate) content_length: Option<u64>,
    /// Request-body bytes handed to the HTTP stack so far.
    pub(crate) read_bytes: Arc<AtomicU64>,
    /// Response-body bytes delivered to the sink so far.
    pub(crate) write_bytes: Arc<AtomicU64>,
}

impl Transaction {
    pub(crate) fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            read_io: IoSource::None,
            write_io: IoSink::Null,
            content_length: None,
            read_bytes: Arc::new(AtomicU64::new(0)),
            write_bytes: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// What a transaction produced at the HTTP layer. Status mapping onto the
/// error taxonomy happens in the operation layer so that callers which need
/// the retained body (DeleteObjects diagnostics) can look at it first.
#[derive(Debug)]
pub(crate) struct HttpOutcome {
    pub(crate) status: StatusCode,
    /// Bytes delivered to the caller-facing sink. Zero for non-2xx
    /// responses, whose bodies are diverted into `response_body`.
    pub(crate) bytes_written: u64,
    /// The owned response buffer: present when the sink was [`IoSink::Buffer`]
    /// or when a non-2xx body was retained for diagnostics.
    pub(crate) response_body: Option<Bytes>,
}
