/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs::File;

use bytes::Bytes;

use crate::error::{self, Error};

/// Where the uploaded bytes come from.
#[derive(Debug)]
pub(crate) enum PutObjectSource {
    /// Positional reads against a file. When `size` is unset it is derived
    /// from the file length minus `offset`.
    File {
        file: File,
        offset: u64,
        size: Option<u64>,
    },
    /// The whole body is already in memory. An empty buffer uploads a
    /// zero-byte object. An explicit `size` caps the buffer to its first
    /// `size` bytes; asking for more than the buffer holds is rejected.
    Buffer { body: Bytes, size: Option<u64> },
}

/// Input type for uploading a single object
#[non_exhaustive]
#[derive(Debug)]
pub struct PutObjectInput {
    /// The bucket to upload to. Falls back to the client's default bucket.
    pub(crate) bucket: Option<String>,

    /// The key to store the object under.
    pub(crate) key: String,

    /// The `Content-Type` header to send, if any.
    pub(crate) content_type: Option<String>,

    pub(crate) source: PutObjectSource,
}

impl PutObjectInput {
    /// The bucket to upload to, when set explicitly.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key to store the object under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The `Content-Type` header to send, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// A builder for [`PutObjectInput`]
#[non_exhaustive]
#[derive(Default, Debug)]
pub struct PutObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) file: Option<File>,
    pub(crate) offset: u64,
    pub(crate) size: Option<u64>,
    pub(crate) buffer: Option<Bytes>,
}

impl PutObjectInputBuilder {
    /// The bucket to upload to. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to upload to. Falls back to the client's default bucket.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The key to store the object under.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The `Content-Type` header to send with the object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// Upload from a file using positional reads; the file's own cursor is
    /// never moved. The client takes ownership; pass a
    /// [`try_clone`](File::try_clone) to keep using the handle.
    pub fn file(mut self, input: File) -> Self {
        self.file = Some(input);
        self
    }

    /// Byte offset within the file to start reading from. Default 0.
    pub fn offset(mut self, input: u64) -> Self {
        self.offset = input;
        self
    }

    /// Number of bytes to upload. For a file source, everything from `offset`
    /// to the end of the file is sent when unset. For a buffer source the
    /// whole buffer is sent when unset; a smaller `size` sends only that many
    /// leading bytes, and a larger one is rejected.
    pub fn size(mut self, input: u64) -> Self {
        self.size = Some(input);
        self
    }

    /// Upload an in-memory buffer instead of a file. An empty buffer uploads
    /// a zero-byte object.
    pub fn buffer(mut self, input: impl Into<Bytes>) -> Self {
        self.buffer = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`PutObjectInput`]
    pub fn build(self) -> Result<PutObjectInput, Error> {
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(error::invalid_input("a non-empty key is required for PUT")),
        };

        let source = match (self.file, self.buffer) {
            (Some(file), None) => PutObjectSource::File {
                file,
                offset: self.offset,
                size: self.size,
            },
            (None, Some(buffer)) => PutObjectSource::Buffer {
                body: buffer,
                size: self.size,
            },
            (Some(_), Some(_)) => {
                return Err(error::invalid_input(
                    "PUT source must be either a file or a buffer, not both",
                ))
            }
            (None, None) => {
                return Err(error::invalid_input(
                    "a source (file or buffer) is required for PUT",
                ))
            }
        };

        Ok(PutObjectInput {
            bucket: self.bucket,
            key,
            content_type: self.content_type,
            source,
        })
    }
}
