/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Input type for creating a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateBucketInput {
    /// The bucket to create. Unlike the object operations, the bucket must be
    /// named explicitly.
    pub(crate) bucket: String,
}

impl CreateBucketInput {
    /// The bucket to create.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// A builder for [`CreateBucketInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct CreateBucketInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl CreateBucketInputBuilder {
    /// The bucket to create.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to create.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// Consumes the builder and constructs a [`CreateBucketInput`]
    pub fn build(self) -> Result<CreateBucketInput, Error> {
        match self.bucket {
            Some(bucket) if !bucket.is_empty() => Ok(CreateBucketInput { bucket }),
            _ => Err(error::invalid_input("bucket name is empty")),
        }
    }
}
