/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The shared transaction execution path both backends drive.

use std::os::unix::fs::FileExt;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_LENGTH};
use reqwest::{Body, Request, Url};
use sha2::{Digest, Sha256};

use crate::auth::{self, AuthContext};
use crate::error::{self, Error, ErrorKind};
use crate::http::body::FdSource;
use crate::http::transaction::{HttpOutcome, IoSink, IoSource, Transaction};
use crate::io::Buffer;

/// Execute one transaction against the pool: build the request, attach the
/// body and authentication, send, and stream the response into the sink.
///
/// Transport failures come back as errors; HTTP-level failures come back as
/// an [`HttpOutcome`] with the status and the retained response body, so the
/// operation layer can inspect it before mapping.
pub(crate) async fn perform(
    pool: &reqwest::Client,
    auth: &AuthContext,
    mut txn: Transaction,
) -> Result<HttpOutcome, Error> {
    let target = Url::parse(&txn.url).map_err(error::invalid_input)?;
    tracing::trace!(method = %txn.method, url = %target, "executing transaction");

    let mut request = Request::new(txn.method.clone(), target);
    *request.headers_mut() = std::mem::take(&mut txn.headers);
    if let Some(length) = txn.content_length {
        request
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from(length));
    }

    let payload_hash = match &txn.read_io {
        IoSource::None => auth::EMPTY_PAYLOAD_SHA256.to_owned(),
        IoSource::Mem(body) => hex::encode(Sha256::digest(body)),
        // streamed bodies cannot be pre-hashed
        IoSource::Fd { .. } => auth::UNSIGNED_PAYLOAD.to_owned(),
    };

    let mem_body_len = match &txn.read_io {
        IoSource::Mem(body) => Some(body.len() as u64),
        _ => None,
    };
    match std::mem::replace(&mut txn.read_io, IoSource::None) {
        IoSource::None => {}
        IoSource::Mem(body) => {
            *request.body_mut() = Some(Body::from(body));
        }
        IoSource::Fd {
            file,
            offset,
            limit,
        } => {
            let source = FdSource::new(file, offset, limit, Arc::clone(&txn.read_bytes));
            *request.body_mut() = Some(Body::wrap_stream(source));
        }
    }

    auth.apply(&mut request, &payload_hash)?;

    let mut response = pool.execute(request).await.map_err(error::from_transport)?;
    if let Some(length) = mem_body_len {
        txn.read_bytes.store(length, Ordering::Relaxed);
    }

    let status = response.status();
    if !status.is_success() {
        // Error bodies never reach the caller's sink; retain them so the
        // operation layer can log or inspect the server's error document.
        let mut diagnostics = Buffer::new();
        while let Some(chunk) = response.chunk().await.map_err(error::from_transport)? {
            diagnostics.extend_from_slice(&chunk);
        }
        return Ok(HttpOutcome {
            status,
            bytes_written: 0,
            response_body: Some(diagnostics.into_bytes()),
        });
    }

    let mut bytes_written: u64 = 0;
    let mut collected: Option<Buffer> = None;
    match txn.write_io {
        IoSink::Null => {
            while let Some(chunk) = response.chunk().await.map_err(error::from_transport)? {
                bytes_written += chunk.len() as u64;
                txn.write_bytes.store(bytes_written, Ordering::Relaxed);
            }
        }
        IoSink::Buffer => {
            let mut buffer = Buffer::new();
            while let Some(chunk) = response.chunk().await.map_err(error::from_transport)? {
                buffer.extend_from_slice(&chunk);
                bytes_written = buffer.len() as u64;
                txn.write_bytes.store(bytes_written, Ordering::Relaxed);
            }
            collected = Some(buffer);
        }
        IoSink::Fd {
            ref file,
            offset,
            limit,
        } => {
            while let Some(chunk) = response.chunk().await.map_err(error::from_transport)? {
                if limit > 0 && bytes_written + chunk.len() as u64 > limit {
                    return Err(Error::new(
                        ErrorKind::IOError,
                        format!("response body exceeds the {limit}-byte cap"),
                    ));
                }
                file.write_all_at(&chunk, offset + bytes_written)?;
                bytes_written += chunk.len() as u64;
                txn.write_bytes.store(bytes_written, Ordering::Relaxed);
            }
        }
    }

    tracing::trace!(status = status.as_u16(), bytes_written, "transaction complete");
    Ok(HttpOutcome {
        status,
        bytes_written,
        response_body: collected.map(Buffer::into_bytes),
    })
}
