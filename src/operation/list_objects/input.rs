/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::Error;

/// Input type for listing objects in a bucket
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListObjectsInput {
    /// The bucket to list. Falls back to the client's default bucket.
    pub(crate) bucket: Option<String>,

    /// Limit the listing to keys beginning with this prefix.
    pub(crate) prefix: Option<String>,

    /// Cap on the number of keys returned per page.
    pub(crate) max_keys: Option<u32>,

    /// Continuation token from a previous truncated page.
    pub(crate) continuation_token: Option<String>,
}

impl ListObjectsInput {
    /// The bucket to list, when set explicitly.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The configured key prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Cap on the number of keys returned per page, if any.
    pub fn max_keys(&self) -> Option<u32> {
        self.max_keys
    }

    /// Continuation token from a previous truncated page, if any.
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

/// A builder for [`ListObjectsInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ListObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) max_keys: Option<u32>,
    pub(crate) continuation_token: Option<String>,
}

impl ListObjectsInputBuilder {
    /// The bucket to list. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to list. Falls back to the client's default bucket.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// Limit the listing to keys beginning with this prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Limit the listing to keys beginning with this prefix.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Cap on the number of keys returned per page.
    pub fn max_keys(mut self, input: u32) -> Self {
        self.max_keys = Some(input);
        self
    }

    /// Continuation token from a previous truncated page.
    pub fn continuation_token(mut self, input: impl Into<String>) -> Self {
        self.continuation_token = Some(input.into());
        self
    }

    /// Continuation token from a previous truncated page.
    pub fn set_continuation_token(mut self, input: Option<String>) -> Self {
        self.continuation_token = input;
        self
    }

    /// Consumes the builder and constructs a [`ListObjectsInput`]
    pub fn build(self) -> Result<ListObjectsInput, Error> {
        Ok(ListObjectsInput {
            bucket: self.bucket,
            prefix: self.prefix,
            max_keys: self.max_keys,
            continuation_token: self.continuation_token,
        })
    }
}
