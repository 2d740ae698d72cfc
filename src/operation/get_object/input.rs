/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs::File;

use crate::error::{self, Error};

/// Where the downloaded bytes go.
#[derive(Debug)]
pub(crate) enum GetObjectSink {
    /// Positional writes against a file starting at `offset`; a non-zero
    /// `max_size` caps the transfer.
    File {
        file: File,
        offset: u64,
        max_size: u64,
    },
    /// Collect the body in memory and return it on the output.
    Buffer,
}

/// Input type for downloading a single object
#[non_exhaustive]
#[derive(Debug)]
pub struct GetObjectInput {
    /// The bucket to download from. Falls back to the client's default bucket.
    pub(crate) bucket: Option<String>,

    /// The key of the object to fetch.
    pub(crate) key: String,

    /// A `Range` header value (e.g. `bytes=0-1023`) passed through verbatim.
    pub(crate) range: Option<String>,

    pub(crate) sink: GetObjectSink,
}

impl GetObjectInput {
    /// The bucket to download from, when set explicitly.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the object to fetch.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The `Range` header value, if any.
    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }
}

/// A builder for [`GetObjectInput`]
#[non_exhaustive]
#[derive(Default, Debug)]
pub struct GetObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) range: Option<String>,
    pub(crate) file: Option<File>,
    pub(crate) offset: u64,
    pub(crate) max_size: u64,
}

impl GetObjectInputBuilder {
    /// The bucket to download from. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to download from. Falls back to the client's default bucket.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The key of the object to fetch.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the object to fetch.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// A `Range` header value (e.g. `bytes=0-1023`) passed through verbatim.
    pub fn range(mut self, input: impl Into<String>) -> Self {
        self.range = Some(input.into());
        self
    }

    /// Write the object into a file using positional writes; the file's own
    /// cursor is never moved. Without a file the body is collected in memory
    /// and returned on the output.
    pub fn file(mut self, input: File) -> Self {
        self.file = Some(input);
        self
    }

    /// Byte offset within the destination file to start writing at.
    /// Default 0.
    pub fn offset(mut self, input: u64) -> Self {
        self.offset = input;
        self
    }

    /// Cap on how many bytes the transfer may deliver; the transaction fails
    /// with an I/O error beyond it. 0 (the default) means no cap.
    pub fn max_size(mut self, input: u64) -> Self {
        self.max_size = input;
        self
    }

    /// Consumes the builder and constructs a [`GetObjectInput`]
    pub fn build(self) -> Result<GetObjectInput, Error> {
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(error::invalid_input("a non-empty key is required for GET")),
        };

        let sink = match self.file {
            Some(file) => GetObjectSink::File {
                file,
                offset: self.offset,
                max_size: self.max_size,
            },
            None => GetObjectSink::Buffer,
        };

        Ok(GetObjectInput {
            bucket: self.bucket,
            key,
            range: self.range,
            sink,
        })
    }
}
