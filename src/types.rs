/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Which execution backend a client drives its transactions through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendMode {
    /// Execute one transaction at a time on the calling thread.
    ///
    /// Assumes external serialization: concurrent calls into the same client
    /// take turns driving the transaction loop.
    #[default]
    Serial,

    /// Run a dedicated driver thread that services a pending queue against a
    /// shared connection pool. Safe to call from many threads concurrently.
    Multiplexed,
}

/// One object record from a `ListObjectsV2` response.
///
/// Missing response fields are left unset rather than failing the listing.
#[derive(Debug, Clone, Default)]
pub struct ObjectInfo {
    pub(crate) key: Option<String>,
    pub(crate) size: u64,
    pub(crate) etag: Option<String>,
    pub(crate) last_modified: Option<String>,
    pub(crate) storage_class: Option<String>,
}

impl ObjectInfo {
    /// The object key.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Size of the object in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The entity tag, with any surrounding double quotes stripped.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// Creation date of the object, as reported by the server.
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }

    /// The storage class the object is stored in.
    pub fn storage_class(&self) -> Option<&str> {
        self.storage_class.as_deref()
    }
}

/// One object to remove in a batch [`delete_objects`](crate::Client::delete_objects) call.
#[derive(Debug, Clone)]
pub struct ObjectIdentifier {
    pub(crate) key: String,
    pub(crate) version_id: Option<String>,
}

impl ObjectIdentifier {
    /// Identify an object by key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: None,
        }
    }

    /// Target a specific version of the object.
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// The object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The targeted version, if any.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}
