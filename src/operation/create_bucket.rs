/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

pub use input::{CreateBucketInput, CreateBucketInputBuilder};
pub use output::CreateBucketOutput;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::http::factory;

/// Operation struct for bucket creation
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateBucket;

impl CreateBucket {
    pub(crate) fn orchestrate(
        handle: &Handle,
        input: CreateBucketInput,
    ) -> Result<CreateBucketOutput, Error> {
        tracing::debug!(bucket = %input.bucket, "create bucket");

        let txn = factory::new_create_bucket(handle.config(), &input.bucket);
        let outcome = handle.backend().execute(txn)?;
        http::check_status(&outcome)?;

        Ok(CreateBucketOutput {})
    }
}
