/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for batch-deleting objects
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsOutput {}
