/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::auth::AuthContext;
use crate::config::Config;
use crate::error::{self, Error};
use crate::http;
use crate::http::backend::HttpBackend;
use crate::http::perform::perform;
use crate::http::transaction::{HttpOutcome, Transaction};

/// The serial backend: each transaction runs to completion on the calling
/// thread before the next one starts. Concurrent callers take turns driving
/// the runtime; external serialization is assumed.
#[derive(Debug)]
pub(crate) struct SerialBackend {
    rt: tokio::runtime::Runtime,
    pool: reqwest::Client,
    auth: Arc<AuthContext>,
}

impl SerialBackend {
    pub(crate) fn new(config: &Config, auth: Arc<AuthContext>) -> Result<Self, Error> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(error::init_error)?;
        Ok(Self {
            rt,
            pool: http::build_pool(config)?,
            auth,
        })
    }
}

impl HttpBackend for SerialBackend {
    fn execute(&self, txn: Transaction) -> Result<HttpOutcome, Error> {
        self.rt.block_on(perform(&self.pool, &self.auth, txn))
    }
}
