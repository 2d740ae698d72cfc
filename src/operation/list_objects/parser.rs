/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Parser for `ListObjectsV2` responses.
//!
//! Tolerant by design: a missing tag leaves the corresponding field unset
//! instead of failing the listing, and unknown elements are skipped at any
//! depth.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, ErrorKind};
use crate::operation::list_objects::ListObjectsOutput;
use crate::types::ObjectInfo;

/// Parse a `<ListBucketResult>` document into a listing page. Empty input
/// yields an empty page.
pub(crate) fn parse_list_response(xml: &[u8]) -> Result<ListObjectsOutput, Error> {
    let mut out = ListObjectsOutput::default();
    if xml.is_empty() {
        return Ok(out);
    }

    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"IsTruncated" => {
                    let text = read_text_content(&mut reader)?;
                    out.is_truncated = text == "true" || text == "True";
                }
                b"NextContinuationToken" => {
                    let text = read_text_content(&mut reader)?;
                    if !text.is_empty() {
                        out.next_continuation_token = Some(text);
                    }
                }
                b"Contents" => out.objects.push(parse_contents(&mut reader)?),
                // descend into the root and any wrapper elements
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

/// Parse one `<Contents>` block. The reader is positioned just after the
/// opening tag and consumes through the matching end tag.
fn parse_contents(reader: &mut Reader<&[u8]>) -> Result<ObjectInfo, Error> {
    let mut object = ObjectInfo::default();
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"Key" => object.key = non_empty(read_text_content(reader)?),
                b"Size" => {
                    let text = read_text_content(reader)?;
                    object.size = text.trim().parse().unwrap_or(0);
                }
                b"ETag" => object.etag = non_empty(strip_quotes(read_text_content(reader)?)),
                b"LastModified" => object.last_modified = non_empty(read_text_content(reader)?),
                b"StorageClass" => object.storage_class = non_empty(read_text_content(reader)?),
                _ => skip_element(reader)?,
            },
            Event::End(_) => return Ok(object),
            Event::Eof => {
                return Err(parse_error("unexpected EOF inside <Contents>"));
            }
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, Error> {
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Text(e) => {
                let unescaped = e.unescape().map_err(parse_error)?;
                text.push_str(&unescaped);
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(parse_error("unexpected EOF while reading text content"));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), Error> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(parse_error("unexpected EOF while skipping element"));
            }
            _ => {}
        }
    }
}

/// ETags usually arrive wrapped in double quotes; strip one surrounding pair.
fn strip_quotes(text: String) -> String {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text[1..text.len() - 1].to_owned()
    } else {
        text
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn parse_error<E: std::fmt::Display>(err: E) -> Error {
    Error::new(
        ErrorKind::Http,
        format!("invalid ListObjectsV2 response: {err}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>t-b</Name>
  <Prefix>o</Prefix>
  <KeyCount>2</KeyCount>
  <MaxKeys>2</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>token-abc</NextContinuationToken>
  <Contents>
    <Key>o1</Key>
    <LastModified>2024-03-01T10:00:00.000Z</LastModified>
    <ETag>&quot;9a0364b9e99bb480dd25e1f0284c8555&quot;</ETag>
    <Size>1042</Size>
    <Owner><ID>minio</ID><DisplayName>minio</DisplayName></Owner>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>o2</Key>
    <Size>7</Size>
  </Contents>
</ListBucketResult>"#;

    #[test]
    fn test_parses_objects_and_pagination() {
        let out = parse_list_response(SAMPLE.as_bytes()).unwrap();
        assert_eq!(out.objects().len(), 2);
        assert!(out.is_truncated());
        assert_eq!(out.next_continuation_token(), Some("token-abc"));

        let first = &out.objects()[0];
        assert_eq!(first.key(), Some("o1"));
        assert_eq!(first.size(), 1042);
        assert_eq!(first.etag(), Some("9a0364b9e99bb480dd25e1f0284c8555"));
        assert_eq!(first.last_modified(), Some("2024-03-01T10:00:00.000Z"));
        assert_eq!(first.storage_class(), Some("STANDARD"));
    }

    #[test]
    fn test_missing_tags_leave_fields_unset() {
        let out = parse_list_response(SAMPLE.as_bytes()).unwrap();
        let second = &out.objects()[1];
        assert_eq!(second.key(), Some("o2"));
        assert_eq!(second.size(), 7);
        assert_eq!(second.etag(), None);
        assert_eq!(second.last_modified(), None);
        assert_eq!(second.storage_class(), None);
    }

    #[test]
    fn test_count_matches_contents_blocks() {
        let mut xml = String::from("<ListBucketResult><IsTruncated>false</IsTruncated>");
        for i in 0..33 {
            xml.push_str(&format!("<Contents><Key>k{i}</Key></Contents>"));
        }
        xml.push_str("</ListBucketResult>");
        let out = parse_list_response(xml.as_bytes()).unwrap();
        assert_eq!(out.objects().len(), 33);
        assert!(!out.is_truncated());
        assert!(out.next_continuation_token().is_none());
    }

    #[test]
    fn test_empty_input_yields_empty_page() {
        let out = parse_list_response(b"").unwrap();
        assert!(out.objects().is_empty());
        assert!(!out.is_truncated());
    }

    #[test]
    fn test_capitalized_true_is_accepted() {
        let xml = "<ListBucketResult><IsTruncated>True</IsTruncated></ListBucketResult>";
        let out = parse_list_response(xml.as_bytes()).unwrap();
        assert!(out.is_truncated());
    }

    #[test]
    fn test_unquoted_etag_survives() {
        let xml = "<ListBucketResult><Contents><Key>k</Key>\
                   <ETag>bare-etag</ETag></Contents></ListBucketResult>";
        let out = parse_list_response(xml.as_bytes()).unwrap();
        assert_eq!(out.objects()[0].etag(), Some("bare-etag"));
    }

    #[test]
    fn test_escaped_key_is_unescaped() {
        let xml = "<ListBucketResult><Contents><Key>a&amp;b</Key></Contents></ListBucketResult>";
        let out = parse_list_response(xml.as_bytes()).unwrap();
        assert_eq!(out.objects()[0].key(), Some("a&b"));
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        let xml = "<ListBucketResult><Contents><Key>k</Contents>";
        let err = parse_list_response(xml.as_bytes()).unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Http);
    }
}
