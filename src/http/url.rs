/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt::Write as _;

/// `endpoint[/] "/" bucket ["/" key]` with exactly one slash between
/// segments. One trailing slash on the endpoint is elided.
///
/// The key goes into the path verbatim (no URL-encoding); keys containing
/// `?`, `&`, `#`, or spaces are the caller's problem for now.
pub(crate) fn build_object_url(endpoint: &str, bucket: &str, key: Option<&str>) -> String {
    let endpoint = trim_endpoint(endpoint);
    let mut url = String::with_capacity(
        endpoint.len() + 1 + bucket.len() + key.map_or(0, |k| k.len() + 1),
    );
    url.push_str(endpoint);
    url.push('/');
    url.push_str(bucket);
    if let Some(key) = key {
        url.push('/');
        url.push_str(key);
    }
    url
}

/// `ListObjectsV2` URL: always `?list-type=2`, then `prefix`, `max-keys`,
/// and `continuation-token` in that order when present. Values are encoded
/// over the RFC 3986 unreserved set.
pub(crate) fn build_list_url(
    endpoint: &str,
    bucket: &str,
    prefix: Option<&str>,
    max_keys: Option<u32>,
    continuation_token: Option<&str>,
) -> String {
    let mut url = build_object_url(endpoint, bucket, None);
    url.push_str("?list-type=2");
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        url.push_str("&prefix=");
        url.push_str(&url_encode_query(prefix));
    }
    if let Some(max_keys) = max_keys.filter(|&n| n > 0) {
        let _ = write!(url, "&max-keys={max_keys}");
    }
    if let Some(token) = continuation_token.filter(|t| !t.is_empty()) {
        url.push_str("&continuation-token=");
        url.push_str(&url_encode_query(token));
    }
    url
}

/// Multi-Object Delete URL: `endpoint[/] "/" bucket "?delete"`.
pub(crate) fn build_delete_url(endpoint: &str, bucket: &str) -> String {
    let mut url = build_object_url(endpoint, bucket, None);
    url.push_str("?delete");
    url
}

/// Percent-encode a query value, preserving the RFC 3986 unreserved set
/// (ALPHA / DIGIT / `-` / `.` / `_` / `~`). Hex digits are uppercase.
pub(crate) fn url_encode_query(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0xf) as usize] as char);
            }
        }
    }
    out
}

fn trim_endpoint(endpoint: &str) -> &str {
    endpoint.strip_suffix('/').unwrap_or(endpoint)
}
