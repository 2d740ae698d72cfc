/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A low-level client for Amazon S3 and S3-compatible object stores (MinIO,
//! Ceph RGW, ...) built around a request-execution engine rather than a
//! generated service binding.
//!
//! Every operation is synchronous from the caller's point of view: it blocks
//! the calling OS thread until the transaction completes. Under the hood the
//! client runs one of two interchangeable backends:
//!
//! * **Serial**: each transaction is driven to completion on the calling
//!   thread, one at a time.
//! * **Multiplexed**: a dedicated driver thread services a pending queue
//!   against a shared connection pool, so many OS threads can submit
//!   concurrently.
//!
//! Request bodies stream from files via positional reads (the kernel file
//! offset is never touched) or from in-memory buffers; response bodies stream
//! to files, buffers, or are discarded.
//!
//! # Examples
//!
//! Upload a file and read it back:
//!
//! ```no_run
//! use std::fs::File;
//! use s3_courier::{Client, Config};
//!
//! fn copy_through_s3() -> Result<(), s3_courier::error::Error> {
//!     let config = Config::builder()
//!         .endpoint("http://localhost:9000")
//!         .region("us-east-1")
//!         .access_key("minioadmin")
//!         .secret_key("minioadmin")
//!         .build();
//!     let client = Client::new(config)?;
//!
//!     let src = File::open("/tmp/hello.txt").expect("source file");
//!     client
//!         .put_object()
//!         .bucket("my-bucket")
//!         .key("hello.txt")
//!         .file(src)
//!         .send()?;
//!
//!     let dst = File::create("/tmp/hello-copy.txt").expect("destination file");
//!     let downloaded = client
//!         .get_object()
//!         .bucket("my-bucket")
//!         .key("hello.txt")
//!         .file(dst)
//!         .send()?;
//!     println!("downloaded {} bytes", downloaded.bytes_written());
//!     Ok(())
//! }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`put_object`](crate::Client::put_object) - upload a single object
//! * [`get_object`](crate::Client::get_object) - download a single object
//! * [`create_bucket`](crate::Client::create_bucket) - create a bucket
//! * [`list_objects`](crate::Client::list_objects) - list a bucket with pagination
//! * [`delete_objects`](crate::Client::delete_objects) - batch-delete objects

/// Error types emitted by `s3-courier`
pub mod error;

/// Common types used by `s3-courier`
pub mod types;

/// Client configuration
pub mod config;

/// The S3 client
pub mod client;

/// Client operations
pub mod operation;

/// Offloading hook for hosts with cooperative schedulers
pub mod runtime;

/// Event-loop integration boundary
pub mod reactor;

/// Authentication (Basic and AWS SigV4)
pub(crate) mod auth;

/// The HTTP execution engine
pub(crate) mod http;

/// Internal buffer helpers
pub(crate) mod io;

pub use self::client::Client;
pub use self::config::Config;
pub use self::error::{Error, ErrorKind};
