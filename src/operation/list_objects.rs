/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;
pub(crate) mod parser;

pub use input::{ListObjectsInput, ListObjectsInputBuilder};
pub use output::ListObjectsOutput;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::http::factory;

/// Operation struct for listing a bucket with `ListObjectsV2`
#[derive(Clone, Default, Debug)]
pub(crate) struct ListObjects;

impl ListObjects {
    pub(crate) fn orchestrate(
        handle: &Handle,
        input: ListObjectsInput,
    ) -> Result<ListObjectsOutput, Error> {
        let bucket = handle.resolve_bucket(input.bucket.as_deref())?;
        tracing::debug!(bucket = %bucket, prefix = input.prefix.as_deref(), "list objects");

        let txn = factory::new_list_objects(handle.config(), &bucket, &input);
        let outcome = handle.backend().execute(txn)?;
        http::check_status(&outcome)?;

        let body = outcome.response_body.unwrap_or_default();
        parser::parse_list_response(&body)
    }
}
