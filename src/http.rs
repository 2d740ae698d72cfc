/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Config;
use crate::error::{self, Error};

pub(crate) mod backend;
pub(crate) mod body;
pub(crate) mod factory;
pub(crate) mod multi;
pub(crate) mod perform;
pub(crate) mod serial;
pub(crate) mod transaction;
pub(crate) mod url;
pub(crate) mod xml;

pub(crate) use transaction::{HttpOutcome, Transaction};

/// Build the connection pool a backend executes its transactions against.
pub(crate) fn build_pool(config: &Config) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .pool_max_idle_per_host(config.max_connections_per_host())
        .redirect(reqwest::redirect::Policy::none());

    if let Some(proxy) = config.proxy() {
        builder = builder.proxy(reqwest::Proxy::all(proxy).map_err(error::init_error)?);
    }
    if let Some(ca_bundle) = config.ca_bundle() {
        let pem = std::fs::read(ca_bundle)?;
        builder = builder
            .add_root_certificate(reqwest::Certificate::from_pem(&pem).map_err(error::init_error)?);
    }
    if config.skip_peer_verification() {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(error::init_error)
}

/// Map a completed transaction's status onto the error taxonomy. 2xx is
/// success, everything else becomes a typed error carrying the status.
pub(crate) fn check_status(outcome: &HttpOutcome) -> Result<(), Error> {
    if outcome.status.is_success() {
        Ok(())
    } else {
        Err(error::from_http_status(outcome.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pool_with_defaults() {
        let config = Config::builder()
            .endpoint("http://127.0.0.1:9000")
            .region("us-east-1")
            .access_key("ak")
            .secret_key("sk")
            .build();
        build_pool(&config).expect("pool builds");
    }

    #[test]
    fn test_build_pool_with_peer_verification_disabled() {
        let config = Config::builder()
            .endpoint("https://127.0.0.1:9000")
            .region("us-east-1")
            .access_key("ak")
            .secret_key("sk")
            .skip_peer_verification(true)
            .build();
        build_pool(&config).expect("pool builds");
    }

    #[test]
    fn test_build_pool_rejects_bad_proxy() {
        let config = Config::builder()
            .endpoint("http://127.0.0.1:9000")
            .region("us-east-1")
            .access_key("ak")
            .secret_key("sk")
            .proxy("not a proxy url")
            .build();
        let err = build_pool(&config).unwrap_err();
        assert_eq!(*err.kind(), crate::error::ErrorKind::Init);
    }
}
