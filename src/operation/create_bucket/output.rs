/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for creating a bucket
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {}
