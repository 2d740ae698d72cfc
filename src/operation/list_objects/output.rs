/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::ObjectInfo;

/// One page of a bucket listing
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ListObjectsOutput {
    pub(crate) objects: Vec<ObjectInfo>,
    pub(crate) is_truncated: bool,
    pub(crate) next_continuation_token: Option<String>,
}

impl ListObjectsOutput {
    /// The object records on this page.
    pub fn objects(&self) -> &[ObjectInfo] {
        &self.objects
    }

    /// Whether more pages follow this one.
    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    /// Token to pass as `continuation_token` to fetch the next page.
    pub fn next_continuation_token(&self) -> Option<&str> {
        self.next_continuation_token.as_deref()
    }

    /// Consume the page, returning the object records.
    pub fn into_objects(self) -> Vec<ObjectInfo> {
        self.objects
    }
}
