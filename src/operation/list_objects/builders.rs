/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::list_objects::{ListObjects, ListObjectsInputBuilder, ListObjectsOutput};
use crate::runtime;

/// Fluent builder for the `ListObjectsV2` operation.
#[derive(Debug)]
pub struct ListObjectsFluentBuilder {
    handle: Arc<Handle>,
    inner: ListObjectsInputBuilder,
}

impl ListObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            inner: ListObjectsInputBuilder::default(),
        }
    }

    /// The bucket to list. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Limit the listing to keys beginning with this prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Cap on the number of keys returned per page.
    pub fn max_keys(mut self, input: u32) -> Self {
        self.inner = self.inner.max_keys(input);
        self
    }

    /// Continuation token from a previous truncated page.
    pub fn continuation_token(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.continuation_token(input);
        self
    }

    /// Fetch one listing page, blocking the calling thread until it arrives.
    pub fn send(self) -> Result<ListObjectsOutput, Error> {
        let handle = self.handle;
        let result = match self.inner.build() {
            Ok(input) => runtime::offload(handle.config().runner(), || {
                ListObjects::orchestrate(&handle, input)
            }),
            Err(err) => Err(err),
        };
        handle.finish(result)
    }
}
