/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

pub use input::{GetObjectInput, GetObjectInputBuilder};
pub(crate) use input::GetObjectSink;
pub use output::GetObjectOutput;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::http::factory;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct GetObject;

impl GetObject {
    /// Execute a single `GetObject` transfer operation
    pub(crate) fn orchestrate(
        handle: &Handle,
        input: GetObjectInput,
    ) -> Result<GetObjectOutput, Error> {
        let bucket = handle.resolve_bucket(input.bucket.as_deref())?;
        tracing::debug!(bucket = %bucket, key = %input.key, "get object");

        let txn = factory::new_get_object(handle.config(), &bucket, input)?;
        let outcome = handle.backend().execute(txn)?;
        http::check_status(&outcome)?;

        Ok(GetObjectOutput {
            bytes_written: outcome.bytes_written,
            body: outcome.response_body,
        })
    }
}
