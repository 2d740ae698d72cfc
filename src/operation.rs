/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the single-object `PutObject` operation
pub mod put_object;

/// Types for the single-object `GetObject` operation
pub mod get_object;

/// Types for the `CreateBucket` operation
pub mod create_bucket;

/// Types for the paginated `ListObjectsV2` operation
pub mod list_objects;

/// Types for the batch Multi-Object Delete operation
pub mod delete_objects;
