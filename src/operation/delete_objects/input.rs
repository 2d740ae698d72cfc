/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types::ObjectIdentifier;

/// Input type for batch-deleting objects
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteObjectsInput {
    /// The bucket to delete from. Falls back to the client's default bucket.
    pub(crate) bucket: Option<String>,

    /// The objects to remove. Must not be empty.
    pub(crate) objects: Vec<ObjectIdentifier>,

    /// Quiet mode: the server reports only failures in its response.
    pub(crate) quiet: bool,
}

impl DeleteObjectsInput {
    /// The bucket to delete from, when set explicitly.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The objects to remove.
    pub fn objects(&self) -> &[ObjectIdentifier] {
        &self.objects
    }

    /// Whether quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// A builder for [`DeleteObjectsInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DeleteObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) objects: Vec<ObjectIdentifier>,
    pub(crate) quiet: bool,
}

impl DeleteObjectsInputBuilder {
    /// The bucket to delete from. Falls back to the client's default bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to delete from. Falls back to the client's default bucket.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// Append one object to the deletion batch.
    pub fn object(mut self, input: ObjectIdentifier) -> Self {
        self.objects.push(input);
        self
    }

    /// Append one object to the deletion batch by key.
    pub fn key(self, input: impl Into<String>) -> Self {
        self.object(ObjectIdentifier::new(input))
    }

    /// Replace the whole deletion batch.
    pub fn set_objects(mut self, input: Vec<ObjectIdentifier>) -> Self {
        self.objects = input;
        self
    }

    /// Quiet mode: the server reports only failures in its response.
    /// Default off.
    pub fn quiet(mut self, input: bool) -> Self {
        self.quiet = input;
        self
    }

    /// Consumes the builder and constructs a [`DeleteObjectsInput`]
    pub fn build(self) -> Result<DeleteObjectsInput, Error> {
        if self.objects.is_empty() {
            return Err(error::invalid_input(
                "at least one object is required for delete_objects",
            ));
        }
        Ok(DeleteObjectsInput {
            bucket: self.bucket,
            objects: self.objects,
            quiet: self.quiet,
        })
    }
}
