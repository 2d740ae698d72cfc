/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::{Arc, Mutex, PoisonError};

use crate::auth::AuthContext;
use crate::config::Config;
use crate::error::{self, Error, LastError};
use crate::http::backend::{self, HttpBackend};

/// Client for Amazon S3 and S3-compatible object stores.
///
/// The client owns copies of its configuration strings, the chosen execution
/// backend, and a last-error mirror. It is internally reference-counted and
/// can be freely cloned; dropping the last clone tears the backend down,
/// which drains any in-flight work first.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: config, backend, error mirror.
///
/// The backend is declared first so teardown drains it before anything else
/// is released.
#[derive(Debug)]
pub(crate) struct Handle {
    backend: Box<dyn HttpBackend>,
    config: Config,
    last_error: Mutex<Option<LastError>>,
}

impl Handle {
    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn backend(&self) -> &dyn HttpBackend {
        self.backend.as_ref()
    }

    /// Resolve the bucket an operation targets: explicit first, then the
    /// client's default bucket.
    pub(crate) fn resolve_bucket(&self, explicit: Option<&str>) -> Result<String, Error> {
        match explicit.or_else(|| self.config.default_bucket()) {
            Some(bucket) if !bucket.is_empty() => Ok(bucket.to_owned()),
            _ => Err(error::invalid_input(
                "bucket must be provided (no default_bucket configured)",
            )),
        }
    }

    /// Mirror the operation result into the last-error slot.
    pub(crate) fn finish<T>(&self, result: Result<T, Error>) -> Result<T, Error> {
        let mut slot = self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = result.as_ref().err().map(LastError::from);
        result
    }
}

impl Client {
    /// Creates a new client from a configuration.
    ///
    /// Validates that endpoint, region, access key, and secret key are
    /// present, then instantiates the selected backend (which, for the
    /// multiplexed mode, spawns its driver thread).
    pub fn new(config: Config) -> Result<Client, Error> {
        if config.endpoint().is_empty()
            || config.region().is_empty()
            || config.access_key().is_empty()
            || config.secret_key().is_empty()
        {
            return Err(error::invalid_input(
                "endpoint, region, access_key and secret_key must be set",
            ));
        }

        let auth = Arc::new(AuthContext::from_config(&config)?);
        let backend = backend::new_backend(&config, auth)?;

        Ok(Client {
            handle: Arc::new(Handle {
                config,
                backend,
                last_error: Mutex::new(None),
            }),
        })
    }

    /// Returns the client's configuration.
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// A snapshot of the most recent error reported by any operation on this
    /// client, or `None` after a successful call.
    ///
    /// The authoritative error is the one returned by the operation itself;
    /// this mirror is only meaningful under single-threaded client use.
    pub fn last_error(&self) -> Option<LastError> {
        self.handle
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Upload a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObject`](crate::operation::put_object::builders::PutObjectFluentBuilder)
    /// operation.
    pub fn put_object(&self) -> crate::operation::put_object::builders::PutObjectFluentBuilder {
        crate::operation::put_object::builders::PutObjectFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`GetObject`](crate::operation::get_object::builders::GetObjectFluentBuilder)
    /// operation.
    pub fn get_object(&self) -> crate::operation::get_object::builders::GetObjectFluentBuilder {
        crate::operation::get_object::builders::GetObjectFluentBuilder::new(self.handle.clone())
    }

    /// Create a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateBucket`](crate::operation::create_bucket::builders::CreateBucketFluentBuilder)
    /// operation.
    pub fn create_bucket(
        &self,
    ) -> crate::operation::create_bucket::builders::CreateBucketFluentBuilder {
        crate::operation::create_bucket::builders::CreateBucketFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List objects in a bucket, one page per call.
    ///
    /// Constructs a fluent builder for the
    /// [`ListObjects`](crate::operation::list_objects::builders::ListObjectsFluentBuilder)
    /// operation.
    pub fn list_objects(
        &self,
    ) -> crate::operation::list_objects::builders::ListObjectsFluentBuilder {
        crate::operation::list_objects::builders::ListObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Batch-delete objects with a single Multi-Object Delete request.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteObjects`](crate::operation::delete_objects::builders::DeleteObjectsFluentBuilder)
    /// operation.
    pub fn delete_objects(
        &self,
    ) -> crate::operation::delete_objects::builders::DeleteObjectsFluentBuilder {
        crate::operation::delete_objects::builders::DeleteObjectsFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
