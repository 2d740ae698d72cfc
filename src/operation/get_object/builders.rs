/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs::File;
use std::sync::Arc;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::get_object::{GetObject, GetObjectInputBuilder, GetObjectOutput};
use crate::runtime;

/// Fluent builder for the `GetObject` operation.
#[derive(Debug)]
pub struct GetObjectFluentBuilder {
    handle: Arc<Handle>,
    inner: GetObjectInputBuilder,
}

impl GetObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            inner: GetObjectInputBuilder::default(),
        }
    }

    /// The bucket to download from. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The key of the object to fetch.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// A `Range` header value (e.g. `bytes=0-1023`) passed through verbatim.
    pub fn range(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.range(input);
        self
    }

    /// Write the object into a file using positional writes. Without a file
    /// the body is collected in memory and returned on the output.
    pub fn file(mut self, input: File) -> Self {
        self.inner = self.inner.file(input);
        self
    }

    /// Byte offset within the destination file to start writing at.
    /// Default 0.
    pub fn offset(mut self, input: u64) -> Self {
        self.inner = self.inner.offset(input);
        self
    }

    /// Cap on how many bytes the transfer may deliver. 0 (the default) means
    /// no cap.
    pub fn max_size(mut self, input: u64) -> Self {
        self.inner = self.inner.max_size(input);
        self
    }

    /// Execute the download, blocking the calling thread until it completes.
    pub fn send(self) -> Result<GetObjectOutput, Error> {
        let handle = self.handle;
        let result = match self.inner.build() {
            Ok(input) => runtime::offload(handle.config().runner(), || {
                GetObject::orchestrate(&handle, input)
            }),
            Err(err) => Err(err),
        };
        handle.finish(result)
    }
}
