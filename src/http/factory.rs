/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Constructors that turn one operation input into one fully-wired
//! [`Transaction`]: URL, headers, body source, and response sink.
//!
//! All constructors share the same pipeline: initialize the I/O variants for
//! the operation, build the URL, then attach per-method headers. Timeouts,
//! proxy, and TLS options live on the connection pool; authentication is
//! attached when the transaction is executed.

use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE, RANGE};
use reqwest::Method;

use crate::config::Config;
use crate::error::{self, Error};
use crate::http::transaction::{IoSink, IoSource, Transaction};
use crate::http::{url, xml};
use crate::operation::delete_objects::DeleteObjectsInput;
use crate::operation::get_object::{GetObjectInput, GetObjectSink};
use crate::operation::list_objects::ListObjectsInput;
use crate::operation::put_object::{PutObjectInput, PutObjectSource};

const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// `PUT /{bucket}/{key}` streaming the body from a file or buffer.
pub(crate) fn new_put_object(
    config: &Config,
    bucket: &str,
    input: PutObjectInput,
) -> Result<Transaction, Error> {
    let target = url::build_object_url(config.endpoint(), bucket, Some(&input.key));
    let mut txn = Transaction::new(Method::PUT, target);

    match input.source {
        PutObjectSource::File { file, offset, size } => {
            let size = match size {
                Some(0) => return Err(error::invalid_input("invalid size for PUT")),
                Some(size) => size,
                None => {
                    let file_len = file.metadata()?.len();
                    file_len
                        .checked_sub(offset)
                        .filter(|&remaining| remaining > 0)
                        .ok_or_else(|| {
                            error::invalid_input("nothing to upload at the given offset")
                        })?
                }
            };
            txn.content_length = Some(size);
            txn.read_io = IoSource::Fd {
                file,
                offset,
                limit: size,
            };
        }
        PutObjectSource::Buffer { body, size } => {
            // An empty buffer is a legal zero-byte object. An explicit size
            // caps the buffer; asking for more than it holds is an error.
            let body = match size {
                None => body,
                Some(size) if size <= body.len() as u64 => body.slice(..size as usize),
                Some(size) => {
                    return Err(error::invalid_input(format!(
                        "size {size} exceeds the {}-byte buffer",
                        body.len()
                    )));
                }
            };
            txn.content_length = Some(body.len() as u64);
            txn.read_io = IoSource::Mem(body);
        }
    }

    if let Some(content_type) = &input.content_type {
        txn.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(error::invalid_input)?,
        );
    }

    Ok(txn)
}

/// `GET /{bucket}/{key}` streaming the body into a file or buffer.
pub(crate) fn new_get_object(
    config: &Config,
    bucket: &str,
    input: GetObjectInput,
) -> Result<Transaction, Error> {
    let target = url::build_object_url(config.endpoint(), bucket, Some(&input.key));
    let mut txn = Transaction::new(Method::GET, target);

    txn.write_io = match input.sink {
        GetObjectSink::File {
            file,
            offset,
            max_size,
        } => IoSink::Fd {
            file,
            offset,
            limit: max_size,
        },
        GetObjectSink::Buffer => IoSink::Buffer,
    };

    if let Some(range) = &input.range {
        txn.headers.insert(
            RANGE,
            HeaderValue::from_str(range).map_err(error::invalid_input)?,
        );
    }

    Ok(txn)
}

/// `PUT /{bucket}` with an empty body.
pub(crate) fn new_create_bucket(config: &Config, bucket: &str) -> Transaction {
    let target = url::build_object_url(config.endpoint(), bucket, None);
    let mut txn = Transaction::new(Method::PUT, target);
    txn.content_length = Some(0);
    txn
}

/// `GET /{bucket}?list-type=2&...` collecting the XML response in memory.
pub(crate) fn new_list_objects(
    config: &Config,
    bucket: &str,
    input: &ListObjectsInput,
) -> Transaction {
    let target = url::build_list_url(
        config.endpoint(),
        bucket,
        input.prefix.as_deref(),
        input.max_keys,
        input.continuation_token.as_deref(),
    );
    let mut txn = Transaction::new(Method::GET, target);
    txn.write_io = IoSink::Buffer;
    txn
}

/// `POST /{bucket}?delete` with the Multi-Object Delete XML body, its
/// Content-MD5, and the response collected in memory.
pub(crate) fn new_delete_objects(
    config: &Config,
    bucket: &str,
    input: &DeleteObjectsInput,
) -> Result<Transaction, Error> {
    let body = xml::build_delete_body(&input.objects, input.quiet)?;
    let target = url::build_delete_url(config.endpoint(), bucket);
    let mut txn = Transaction::new(Method::POST, target);

    txn.headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
    txn.headers.insert(
        CONTENT_MD5,
        HeaderValue::from_str(&xml::content_md5(body.as_bytes()))
            .map_err(error::invalid_input)?,
    );

    txn.content_length = Some(body.len() as u64);
    txn.read_io = IoSource::Mem(Bytes::from(body));
    txn.write_io = IoSink::Buffer;

    Ok(txn)
}
