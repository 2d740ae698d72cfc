/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// The [`ErrorKind`] is the stable classification; the HTTP status (when the
/// transaction got far enough to receive one) and the underlying cause are
/// carried alongside it. Use the standard `source` chain to reach transport
/// details such as the OS errno of a local I/O failure.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    http_status: Option<u16>,
    source: BoxError,
}

/// General categories of client errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Setup-time failure: connection pool construction, DNS resolution, or
    /// connect refused
    Init,

    /// Transport-level failure that is not a timeout or local I/O error
    Transport,

    /// The server answered with a non-2xx status that has no more specific
    /// classification
    Http,

    /// HTTP 401: the request was not authenticated
    Auth,

    /// HTTP 403: the request was authenticated but not allowed
    AccessDenied,

    /// HTTP 404: the bucket or object does not exist
    NotFound,

    /// The transaction timed out, either locally or with HTTP 408
    Timeout,

    /// Local I/O failure (file reads/writes, response body streaming)
    IOError,

    /// The operation was cancelled by the host before completion
    Cancelled,

    /// Some kind of internal runtime issue (e.g. poisoned mutex, backend
    /// shutting down)
    RuntimeError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an
    /// arbitrary error source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            http_status: None,
            source: err.into(),
        }
    }

    pub(crate) fn with_status<E>(kind: ErrorKind, status: u16, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            http_status: Some(status),
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The HTTP status of the response that produced this error, if the
    /// transaction completed at the HTTP layer.
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::Init => write!(f, "initialization error"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Http => match self.http_status {
                Some(status) => write!(f, "HTTP status {status}"),
                None => write!(f, "HTTP error"),
            },
            ErrorKind::Auth => write!(f, "authentication failed"),
            ErrorKind::AccessDenied => write!(f, "access denied"),
            ErrorKind::NotFound => write!(f, "object or bucket not found"),
            ErrorKind::Timeout => write!(f, "operation timed out"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::Cancelled => write!(f, "operation cancelled"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn init_error<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::Init, err)
}

pub(crate) fn runtime_error<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::RuntimeError, err)
}

/// Classify a transport-layer failure reported by the HTTP stack.
pub(crate) fn from_transport(err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        ErrorKind::Timeout
    } else if err.is_connect() {
        // DNS failures and refused connections are setup-time failures
        ErrorKind::Init
    } else if err.is_body() || err.is_decode() {
        ErrorKind::IOError
    } else {
        ErrorKind::Transport
    };
    let status = err.status().map(|s| s.as_u16());
    Error {
        kind,
        http_status: status,
        source: err.into(),
    }
}

/// Classify a completed transaction's HTTP status. 2xx is never an error.
pub(crate) fn from_http_status(status: reqwest::StatusCode) -> Error {
    let kind = match status.as_u16() {
        401 => ErrorKind::Auth,
        403 => ErrorKind::AccessDenied,
        404 => ErrorKind::NotFound,
        408 => ErrorKind::Timeout,
        _ => ErrorKind::Http,
    };
    Error::with_status(kind, status.as_u16(), format!("HTTP status {status}"))
}

/// A cheap snapshot of the most recent error reported by a client.
///
/// Mirrors the last failure for callers that lose the explicit error channel.
/// The authoritative error is always the one returned by the operation; the
/// snapshot is only meaningful under single-threaded client use.
#[derive(Clone, Debug)]
pub struct LastError {
    kind: ErrorKind,
    http_status: Option<u16>,
    message: String,
}

impl LastError {
    /// The classification of the recorded error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The HTTP status of the recorded error, when applicable.
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// The recorded human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&Error> for LastError {
    fn from(value: &Error) -> Self {
        LastError {
            kind: value.kind.clone(),
            http_status: value.http_status,
            message: value.source.to_string(),
        }
    }
}
