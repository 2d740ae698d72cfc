/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::auth::AuthContext;
use crate::config::Config;
use crate::error::Error;
use crate::http::multi::MultiplexedBackend;
use crate::http::serial::SerialBackend;
use crate::http::transaction::{HttpOutcome, Transaction};
use crate::types::BackendMode;

/// The execution seam between the client and its engine.
///
/// A backend accepts one fully-wired transaction at a time and drives it to
/// completion, blocking the submitting thread. It must outlive every
/// in-flight transaction it accepted; dropping a backend drains accepted
/// work first.
pub(crate) trait HttpBackend: Send + Sync + std::fmt::Debug {
    fn execute(&self, txn: Transaction) -> Result<HttpOutcome, Error>;
}

/// Instantiate the backend selected by the configuration.
pub(crate) fn new_backend(
    config: &Config,
    auth: Arc<AuthContext>,
) -> Result<Box<dyn HttpBackend>, Error> {
    match config.backend_mode() {
        BackendMode::Serial => Ok(Box::new(SerialBackend::new(config, auth)?)),
        BackendMode::Multiplexed => Ok(Box::new(MultiplexedBackend::new(config, auth)?)),
    }
}
