/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs::File;
use std::sync::Arc;

use bytes::Bytes;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::put_object::{PutObject, PutObjectInputBuilder, PutObjectOutput};
use crate::runtime;

/// Fluent builder for the `PutObject` operation.
#[derive(Debug)]
pub struct PutObjectFluentBuilder {
    handle: Arc<Handle>,
    inner: PutObjectInputBuilder,
}

impl PutObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            inner: PutObjectInputBuilder::default(),
        }
    }

    /// The bucket to upload to. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The key to store the object under.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The `Content-Type` header to send with the object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// Upload from a file using positional reads.
    pub fn file(mut self, input: File) -> Self {
        self.inner = self.inner.file(input);
        self
    }

    /// Byte offset within the file to start reading from. Default 0.
    pub fn offset(mut self, input: u64) -> Self {
        self.inner = self.inner.offset(input);
        self
    }

    /// Number of bytes to upload. For a file source, everything from `offset`
    /// to the end of the file is sent when unset. For a buffer source the
    /// whole buffer is sent when unset; a smaller `size` sends only that many
    /// leading bytes, and a larger one is rejected.
    pub fn size(mut self, input: u64) -> Self {
        self.inner = self.inner.size(input);
        self
    }

    /// Upload an in-memory buffer instead of a file. An empty buffer uploads
    /// a zero-byte object.
    pub fn buffer(mut self, input: impl Into<Bytes>) -> Self {
        self.inner = self.inner.buffer(input);
        self
    }

    /// Execute the upload, blocking the calling thread until it completes.
    pub fn send(self) -> Result<PutObjectOutput, Error> {
        let handle = self.handle;
        let result = match self.inner.build() {
            Ok(input) => runtime::offload(handle.config().runner(), || {
                PutObject::orchestrate(&handle, input)
            }),
            Err(err) => Err(err),
        };
        handle.finish(result)
    }
}
