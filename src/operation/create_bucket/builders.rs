/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::create_bucket::{CreateBucket, CreateBucketInputBuilder, CreateBucketOutput};
use crate::runtime;

/// Fluent builder for the `CreateBucket` operation.
#[derive(Debug)]
pub struct CreateBucketFluentBuilder {
    handle: Arc<Handle>,
    inner: CreateBucketInputBuilder,
}

impl CreateBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            inner: CreateBucketInputBuilder::default(),
        }
    }

    /// The bucket to create.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Execute the operation, blocking the calling thread until it completes.
    pub fn send(self) -> Result<CreateBucketOutput, Error> {
        let handle = self.handle;
        let result = match self.inner.build() {
            Ok(input) => runtime::offload(handle.config().runner(), || {
                CreateBucket::orchestrate(&handle, input)
            }),
            Err(err) => Err(err),
        };
        handle.finish(result)
    }
}
