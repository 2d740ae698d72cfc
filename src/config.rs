/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::runtime::{BlockingRunner, DirectRunner};
use crate::types::BackendMode;

/// Default connect timeout applied to every transaction.
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default whole-request timeout applied to every transaction.
pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default idle poll interval of the multiplexed backend's driver thread.
pub(crate) const DEFAULT_MULTI_IDLE_TIMEOUT: Duration = Duration::from_millis(50);

/// Default cap on concurrently executing transactions per client.
pub(crate) const DEFAULT_MAX_TOTAL_CONNECTIONS: usize = 64;

/// Default cap on pooled connections per host.
pub(crate) const DEFAULT_MAX_CONNECTIONS_PER_HOST: usize = 16;

/// Configuration for a [`Client`](crate::client::Client)
///
/// Endpoint, region, access key, and secret key are required; everything else
/// has a sensible default. The credential and string fields are immutable
/// once the client is constructed and may be read from any thread.
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
    region: String,
    access_key: String,
    secret_key: String,
    session_token: Option<String>,
    default_bucket: Option<String>,
    ca_bundle: Option<PathBuf>,
    proxy: Option<String>,
    skip_peer_verification: bool,
    require_sigv4: bool,
    connect_timeout: Duration,
    request_timeout: Duration,
    multi_idle_timeout: Duration,
    max_total_connections: usize,
    max_connections_per_host: usize,
    backend_mode: BackendMode,
    runner: Arc<dyn BlockingRunner>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The S3 or MinIO endpoint, e.g. `https://s3.eu-central-1.amazonaws.com`
    /// or `http://localhost:9000`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The region used for the SigV4 credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The access key id.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// The secret access key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The session token sent as `x-amz-security-token`, if any.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Bucket used by operations that do not name one explicitly.
    pub fn default_bucket(&self) -> Option<&str> {
        self.default_bucket.as_deref()
    }

    /// Path to a PEM bundle of additional trusted root certificates.
    pub fn ca_bundle(&self) -> Option<&PathBuf> {
        self.ca_bundle.as_ref()
    }

    /// Proxy URL routed through for every transaction, if any.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Whether TLS certificate verification is disabled.
    pub fn skip_peer_verification(&self) -> bool {
        self.skip_peer_verification
    }

    /// Whether requests are signed with AWS Signature Version 4 instead of
    /// HTTP Basic authentication.
    pub fn require_sigv4(&self) -> bool {
        self.require_sigv4
    }

    /// Timeout for establishing a connection.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Timeout for a whole transaction.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// How long the multiplexed driver sleeps waiting for socket progress
    /// before re-checking its queue.
    pub fn multi_idle_timeout(&self) -> Duration {
        self.multi_idle_timeout
    }

    /// Cap on concurrently executing transactions (0 = unbounded).
    pub fn max_total_connections(&self) -> usize {
        self.max_total_connections
    }

    /// Cap on pooled connections per host.
    pub fn max_connections_per_host(&self) -> usize {
        self.max_connections_per_host
    }

    /// Which execution backend the client drives transactions through.
    pub fn backend_mode(&self) -> &BackendMode {
        &self.backend_mode
    }

    /// The offloading hook invoked at the top of every operation.
    pub fn runner(&self) -> &dyn BlockingRunner {
        self.runner.as_ref()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone)]
pub struct Builder {
    endpoint: Option<String>,
    region: Option<String>,
    access_key: Option<String>,
    secret_key: Option<String>,
    session_token: Option<String>,
    default_bucket: Option<String>,
    ca_bundle: Option<PathBuf>,
    proxy: Option<String>,
    skip_peer_verification: bool,
    require_sigv4: bool,
    connect_timeout: Duration,
    request_timeout: Duration,
    multi_idle_timeout: Duration,
    max_total_connections: usize,
    max_connections_per_host: usize,
    backend_mode: BackendMode,
    runner: Arc<dyn BlockingRunner>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: None,
            access_key: None,
            secret_key: None,
            session_token: None,
            default_bucket: None,
            ca_bundle: None,
            proxy: None,
            skip_peer_verification: false,
            require_sigv4: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            multi_idle_timeout: DEFAULT_MULTI_IDLE_TIMEOUT,
            max_total_connections: DEFAULT_MAX_TOTAL_CONNECTIONS,
            max_connections_per_host: DEFAULT_MAX_CONNECTIONS_PER_HOST,
            backend_mode: BackendMode::default(),
            runner: Arc::new(DirectRunner),
        }
    }
}

impl Builder {
    /// The S3 or MinIO endpoint. Required.
    pub fn endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// The region used for the SigV4 credential scope. Required.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.region = Some(input.into());
        self
    }

    /// The access key id. Required.
    pub fn access_key(mut self, input: impl Into<String>) -> Self {
        self.access_key = Some(input.into());
        self
    }

    /// The secret access key. Required.
    pub fn secret_key(mut self, input: impl Into<String>) -> Self {
        self.secret_key = Some(input.into());
        self
    }

    /// Session token appended as `x-amz-security-token` on every request.
    pub fn session_token(mut self, input: impl Into<String>) -> Self {
        self.session_token = Some(input.into());
        self
    }

    /// Bucket used by operations that do not name one explicitly.
    pub fn default_bucket(mut self, input: impl Into<String>) -> Self {
        self.default_bucket = Some(input.into());
        self
    }

    /// Path to a PEM bundle of additional trusted root certificates.
    pub fn ca_bundle(mut self, input: impl Into<PathBuf>) -> Self {
        self.ca_bundle = Some(input.into());
        self
    }

    /// Proxy URL to route every transaction through.
    pub fn proxy(mut self, input: impl Into<String>) -> Self {
        self.proxy = Some(input.into());
        self
    }

    /// Disable TLS certificate verification, including hostname checks. Not
    /// recommended outside of test setups with self-signed certificates.
    pub fn skip_peer_verification(mut self, input: bool) -> Self {
        self.skip_peer_verification = input;
        self
    }

    /// Sign requests with AWS Signature Version 4 instead of HTTP Basic
    /// authentication. Requires a non-empty region.
    pub fn require_sigv4(mut self, input: bool) -> Self {
        self.require_sigv4 = input;
        self
    }

    /// Timeout for establishing a connection. Default 5 seconds.
    pub fn connect_timeout(mut self, input: Duration) -> Self {
        self.connect_timeout = input;
        self
    }

    /// Timeout for a whole transaction. Default 30 seconds.
    pub fn request_timeout(mut self, input: Duration) -> Self {
        self.request_timeout = input;
        self
    }

    /// Idle poll interval of the multiplexed driver thread. Default 50 ms.
    pub fn multi_idle_timeout(mut self, input: Duration) -> Self {
        self.multi_idle_timeout = input;
        self
    }

    /// Cap on concurrently executing transactions (0 = unbounded).
    /// Default 64.
    pub fn max_total_connections(mut self, input: usize) -> Self {
        self.max_total_connections = input;
        self
    }

    /// Cap on pooled connections per host. Default 16.
    pub fn max_connections_per_host(mut self, input: usize) -> Self {
        self.max_connections_per_host = input;
        self
    }

    /// Which execution backend the client drives transactions through.
    /// Default [`BackendMode::Serial`].
    pub fn backend_mode(mut self, input: BackendMode) -> Self {
        self.backend_mode = input;
        self
    }

    /// Install an offloading hook invoked at the top of every operation.
    /// Default is direct invocation on the calling thread.
    pub fn blocking_runner(mut self, input: Arc<dyn BlockingRunner>) -> Self {
        self.runner = input;
        self
    }

    /// Consumes the builder and constructs a [`Config`].
    ///
    /// Required fields left unset are materialized as empty strings and
    /// rejected by [`Client::new`](crate::client::Client::new).
    pub fn build(self) -> Config {
        Config {
            endpoint: self.endpoint.unwrap_or_default(),
            region: self.region.unwrap_or_default(),
            access_key: self.access_key.unwrap_or_default(),
            secret_key: self.secret_key.unwrap_or_default(),
            session_token: self.session_token,
            default_bucket: self.default_bucket,
            ca_bundle: self.ca_bundle,
            proxy: self.proxy,
            skip_peer_verification: self.skip_peer_verification,
            require_sigv4: self.require_sigv4,
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            multi_idle_timeout: self.multi_idle_timeout,
            max_total_connections: self.max_total_connections,
            max_connections_per_host: self.max_connections_per_host,
            backend_mode: self.backend_mode,
            runner: self.runner,
        }
    }
}
