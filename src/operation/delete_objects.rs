/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

pub use input::{DeleteObjectsInput, DeleteObjectsInputBuilder};
pub use output::DeleteObjectsOutput;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::http::factory;

/// Operation struct for batch Multi-Object Delete
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObjects;

impl DeleteObjects {
    pub(crate) fn orchestrate(
        handle: &Handle,
        input: DeleteObjectsInput,
    ) -> Result<DeleteObjectsOutput, Error> {
        let bucket = handle.resolve_bucket(input.bucket.as_deref())?;
        tracing::debug!(bucket = %bucket, count = input.objects.len(), "delete objects");

        let txn = factory::new_delete_objects(handle.config(), &bucket, &input)?;
        let outcome = handle.backend().execute(txn)?;

        if !outcome.status.is_success() {
            // The server's error document was retained in the owned response
            // buffer; surface it before the outcome is mapped.
            if let Some(body) = outcome.response_body.as_deref().filter(|b| !b.is_empty()) {
                tracing::warn!(
                    status = outcome.status.as_u16(),
                    body = %String::from_utf8_lossy(body),
                    "delete objects failed"
                );
            }
        }
        http::check_status(&outcome)?;

        Ok(DeleteObjectsOutput {})
    }
}
