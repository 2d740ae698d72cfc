/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{self, Error};
use crate::types::ObjectIdentifier;

/// Build the Multi-Object Delete request body.
///
/// ```xml
/// <Delete xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
///   <Quiet>true</Quiet>
///   <Object>
///     <Key>...</Key>
///     <VersionId>...</VersionId>
///   </Object>
/// </Delete>
/// ```
///
/// Keys and version ids are XML-escaped. An empty object list or an empty
/// key is rejected before anything is emitted.
pub(crate) fn build_delete_body(
    objects: &[ObjectIdentifier],
    quiet: bool,
) -> Result<String, Error> {
    if objects.is_empty() {
        return Err(error::invalid_input("delete_objects: object list is empty"));
    }
    for object in objects {
        if object.key.is_empty() {
            return Err(error::invalid_input("delete_objects: object key is empty"));
        }
    }

    let mut body = String::new();
    body.push_str("<Delete xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\n");
    if quiet {
        body.push_str("  <Quiet>true</Quiet>\n");
    }
    for object in objects {
        body.push_str("  <Object>\n    <Key>");
        xml_escape_into(&mut body, &object.key);
        body.push_str("</Key>\n");
        if let Some(version_id) = object.version_id.as_deref().filter(|v| !v.is_empty()) {
            body.push_str("    <VersionId>");
            xml_escape_into(&mut body, version_id);
            body.push_str("</VersionId>\n");
        }
        body.push_str("  </Object>\n");
    }
    body.push_str("</Delete>");
    Ok(body)
}

/// Escape `&`, `<`, `>`, and `"` into their XML entities.
pub(crate) fn xml_escape_into(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

/// RFC 1864 `Content-MD5` value: base64 of the MD5 digest, standard alphabet
/// with padding, no line wraps.
pub(crate) fn content_md5(body: &[u8]) -> String {
    STANDARD.encode(md5::compute(body).as_ref())
}
