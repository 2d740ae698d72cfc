/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

/// Output type for downloading a single object
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GetObjectOutput {
    pub(crate) bytes_written: u64,
    pub(crate) body: Option<Bytes>,
}

impl GetObjectOutput {
    /// Number of response-body bytes delivered to the destination. With no
    /// cap configured this equals the object's `Content-Length`.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// The downloaded body when no destination file was configured.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume the output, returning the in-memory body if there is one.
    pub fn into_body(self) -> Option<Bytes> {
        self.body
    }
}
