/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::delete_objects::{DeleteObjects, DeleteObjectsInputBuilder, DeleteObjectsOutput};
use crate::runtime;
use crate::types::ObjectIdentifier;

/// Fluent builder for the batch `DeleteObjects` operation.
#[derive(Debug)]
pub struct DeleteObjectsFluentBuilder {
    handle: Arc<Handle>,
    inner: DeleteObjectsInputBuilder,
}

impl DeleteObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            inner: DeleteObjectsInputBuilder::default(),
        }
    }

    /// The bucket to delete from. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Append one object to the deletion batch.
    pub fn object(mut self, input: ObjectIdentifier) -> Self {
        self.inner = self.inner.object(input);
        self
    }

    /// Append one object to the deletion batch by key.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Quiet mode: the server reports only failures in its response.
    /// Default off.
    pub fn quiet(mut self, input: bool) -> Self {
        self.inner = self.inner.quiet(input);
        self
    }

    /// Execute the batch delete, blocking the calling thread until it
    /// completes.
    pub fn send(self) -> Result<DeleteObjectsOutput, Error> {
        let handle = self.handle;
        let result = match self.inner.build() {
            Ok(input) => runtime::offload(handle.config().runner(), || {
                DeleteObjects::orchestrate(&handle, input)
            }),
            Err(err) => Err(err),
        };
        handle.finish(result)
    }
}
