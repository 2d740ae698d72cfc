/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::atomic::Ordering;
use std::sync::Arc;

pub use input::{PutObjectInput, PutObjectInputBuilder};
pub(crate) use input::PutObjectSource;
pub use output::PutObjectOutput;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::http::factory;

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct PutObject;

impl PutObject {
    /// Execute a single `PutObject` transfer operation
    pub(crate) fn orchestrate(
        handle: &Handle,
        input: PutObjectInput,
    ) -> Result<PutObjectOutput, Error> {
        let bucket = handle.resolve_bucket(input.bucket.as_deref())?;
        tracing::debug!(bucket = %bucket, key = %input.key, "put object");

        let txn = factory::new_put_object(handle.config(), &bucket, input)?;
        let read_bytes = Arc::clone(&txn.read_bytes);
        let outcome = handle.backend().execute(txn)?;
        http::check_status(&outcome)?;

        Ok(PutObjectOutput {
            bytes_sent: read_bytes.load(Ordering::Relaxed),
        })
    }
}
