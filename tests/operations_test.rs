/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! End-to-end operation tests against the in-process server, driven through
//! the serial backend.


use std::io::Write;
use std::os::unix::fs::FileExt;

use s3_courier::error::ErrorKind;
use s3_courier::types::BackendMode;
use s3_courier::{Client, Config};
use test_utils::{object_store_server, CannedResponse, TestServer};

const PAYLOAD: &[u8] = b"Hello S3 stress test! ";

fn client_for(endpoint: &str, mode: BackendMode) -> Client {
    let config = Config::builder()
        .endpoint(endpoint)
        .region("us-east-1")
        .access_key("test-access")
        .secret_key("test-secret")
        .backend_mode(mode)
        .build();
    Client::new(config).expect("client")
}

fn payload_file() -> std::fs::File {
    let mut file = tempfile::tempfile().expect("tempfile");
    file.write_all(PAYLOAD).expect("write payload");
    file
}

#[test]
fn test_round_trip_put_get_fd() {
    let (server, store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    let put = client
        .put_object()
        .bucket("firstbucket")
        .key("hello.txt")
        .file(payload_file())
        .size(PAYLOAD.len() as u64)
        .send()
        .expect("put succeeds");
    assert_eq!(put.bytes_sent(), PAYLOAD.len() as u64);
    assert_eq!(
        store.lock().unwrap().get("/firstbucket/hello.txt").unwrap(),
        PAYLOAD
    );

    let destination = tempfile::tempfile().expect("tempfile");
    let get = client
        .get_object()
        .bucket("firstbucket")
        .key("hello.txt")
        .file(destination.try_clone().expect("clone"))
        .send()
        .expect("get succeeds");
    assert_eq!(get.bytes_written(), PAYLOAD.len() as u64);

    let mut round_tripped = vec![0u8; PAYLOAD.len()];
    destination.read_exact_at(&mut round_tripped, 0).expect("read back");
    assert_eq!(round_tripped, PAYLOAD);
    assert!(client.last_error().is_none());
}

#[test]
fn test_put_sets_content_length_and_derives_size() {
    let (server, store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .put_object()
        .bucket("b")
        .key("derived")
        .file(payload_file())
        .send()
        .expect("put succeeds");

    let requests = server.requests();
    let put = requests.iter().find(|r| r.method == "PUT").unwrap();
    assert_eq!(put.header("content-length"), Some("22"));
    assert_eq!(store.lock().unwrap().get("/b/derived").unwrap(), PAYLOAD);
}

#[test]
fn test_get_to_buffer_returns_body() {
    let (server, _store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .put_object()
        .bucket("b")
        .key("k")
        .buffer(&PAYLOAD[..])
        .send()
        .expect("put succeeds");

    let output = client
        .get_object()
        .bucket("b")
        .key("k")
        .send()
        .expect("get succeeds");
    assert_eq!(output.bytes_written(), PAYLOAD.len() as u64);
    assert_eq!(output.body().map(|b| b.as_ref()), Some(PAYLOAD));
}

#[test]
fn test_round_trip_zero_byte_object_from_buffer() {
    let (server, store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    let put = client
        .put_object()
        .bucket("b")
        .key("empty")
        .buffer(&[][..])
        .send()
        .expect("empty put succeeds");
    assert_eq!(put.bytes_sent(), 0);
    assert!(store.lock().unwrap().get("/b/empty").unwrap().is_empty());

    let output = client
        .get_object()
        .bucket("b")
        .key("empty")
        .send()
        .expect("get succeeds");
    assert_eq!(output.bytes_written(), 0);
    assert_eq!(output.body().map(|b| b.len()), Some(0));
}

#[test]
fn test_put_buffer_with_explicit_size_sends_prefix() {
    let (server, store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    let put = client
        .put_object()
        .bucket("b")
        .key("capped")
        .buffer("0123456789")
        .size(4)
        .send()
        .expect("put succeeds");
    assert_eq!(put.bytes_sent(), 4);
    assert_eq!(store.lock().unwrap().get("/b/capped").unwrap(), b"0123");
}

#[test]
fn test_get_missing_object_maps_to_not_found() {
    let (server, _store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    let err = client
        .get_object()
        .bucket("bucket")
        .key("does-not-exist")
        .send()
        .expect_err("404 maps to an error");
    assert_eq!(*err.kind(), ErrorKind::NotFound);
    assert_eq!(err.http_status(), Some(404));

    let mirror = client.last_error().expect("last error recorded");
    assert_eq!(*mirror.kind(), ErrorKind::NotFound);
    assert_eq!(mirror.http_status(), Some(404));
}

#[test]
fn test_denied_requests_map_to_auth_kinds() {
    for (status, kind) in [(401, ErrorKind::Auth), (403, ErrorKind::AccessDenied)] {
        let server = TestServer::spawn(move |_| CannedResponse::status(status));
        let client = client_for(server.endpoint(), BackendMode::Serial);
        let err = client
            .put_object()
            .bucket("b")
            .key("k")
            .buffer("data")
            .send()
            .expect_err("denied");
        assert_eq!(*err.kind(), kind);
        assert_eq!(err.http_status(), Some(status));
    }
}

#[test]
fn test_create_bucket_sends_bodyless_put() {
    let server = TestServer::spawn(|request| {
        assert_eq!(request.method, "PUT");
        CannedResponse::ok(Vec::new())
    });
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .create_bucket()
        .bucket("t-b")
        .send()
        .expect("create succeeds");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/t-b");
    assert_eq!(requests[0].header("content-length"), Some("0"));
    assert!(requests[0].body.is_empty());
}

fn list_page(keys: &[&str], truncated: bool, token: Option<&str>) -> String {
    let mut xml = String::from("<ListBucketResult>");
    xml.push_str(&format!(
        "<IsTruncated>{}</IsTruncated>",
        if truncated { "true" } else { "false" }
    ));
    if let Some(token) = token {
        xml.push_str(&format!(
            "<NextContinuationToken>{token}</NextContinuationToken>"
        ));
    }
    for key in keys {
        xml.push_str(&format!(
            "<Contents><Key>{key}</Key><Size>4</Size><ETag>\"etag-{key}\"</ETag></Contents>"
        ));
    }
    xml.push_str("</ListBucketResult>");
    xml
}

#[test]
fn test_list_with_pagination() {
    let server = TestServer::spawn(|request| {
        assert_eq!(request.query_param("list-type").as_deref(), Some("2"));
        assert_eq!(request.query_param("max-keys").as_deref(), Some("2"));
        let page = match request.query_param("continuation-token").as_deref() {
            None => list_page(&["o1", "o2"], true, Some("page-2")),
            Some("page-2") => list_page(&["o3", "o4"], true, Some("page-3")),
            Some("page-3") => list_page(&["o5"], false, None),
            Some(other) => panic!("unexpected token {other}"),
        };
        CannedResponse::xml(page)
    });
    let client = client_for(server.endpoint(), BackendMode::Serial);

    let first = client
        .list_objects()
        .bucket("t-b")
        .max_keys(2)
        .send()
        .expect("first page");
    assert_eq!(first.objects().len(), 2);
    assert!(first.is_truncated());
    let token = first.next_continuation_token().expect("token").to_owned();

    let second = client
        .list_objects()
        .bucket("t-b")
        .max_keys(2)
        .continuation_token(token)
        .send()
        .expect("second page");
    assert_eq!(second.objects().len(), 2);
    assert!(second.is_truncated());
    let token = second.next_continuation_token().expect("token").to_owned();

    let third = client
        .list_objects()
        .bucket("t-b")
        .max_keys(2)
        .continuation_token(token)
        .send()
        .expect("third page");
    assert_eq!(third.objects().len(), 1);
    assert!(!third.is_truncated());
    assert!(third.next_continuation_token().is_none());
    assert_eq!(third.objects()[0].key(), Some("o5"));
    assert_eq!(third.objects()[0].etag(), Some("etag-o5"));
}

#[test]
fn test_delete_objects_batch() {
    let server = TestServer::spawn(|request| {
        if request.method == "POST" {
            assert_eq!(request.query.as_deref(), Some("delete"));
            CannedResponse::xml("<DeleteResult/>")
        } else {
            CannedResponse::xml(list_page(&[], false, None))
        }
    });
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .delete_objects()
        .bucket("t-b")
        .key("o1")
        .key("o2")
        .key("o3")
        .quiet(true)
        .send()
        .expect("delete succeeds");

    let requests = server.requests();
    let delete = requests.iter().find(|r| r.method == "POST").unwrap();
    assert_eq!(delete.header("content-type"), Some("application/xml"));
    assert_eq!(
        delete.header("content-length"),
        Some(delete.body.len().to_string().as_str())
    );

    // Content-MD5 really is base64(MD5(body)).
    let digest_b64 = delete.header("content-md5").expect("content-md5 present");
    let expected = {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        STANDARD.encode(md5::compute(&delete.body).as_ref())
    };
    assert_eq!(digest_b64, expected);

    let body = String::from_utf8(delete.body.clone()).expect("utf-8 body");
    assert_eq!(body.matches("<Object>").count(), 3);
    assert!(body.contains("<Quiet>true</Quiet>"));
    assert!(body.starts_with("<Delete xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">"));

    let listing = client
        .list_objects()
        .bucket("t-b")
        .prefix("o")
        .send()
        .expect("list succeeds");
    assert_eq!(listing.objects().len(), 0);
}

#[test]
fn test_get_with_max_size_cap_fails_on_overrun() {
    let (server, _store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .put_object()
        .bucket("b")
        .key("big")
        .buffer(vec![7u8; 4096])
        .send()
        .expect("put succeeds");

    let err = client
        .get_object()
        .bucket("b")
        .key("big")
        .file(tempfile::tempfile().expect("tempfile"))
        .max_size(100)
        .send()
        .expect_err("cap overrun fails");
    assert_eq!(*err.kind(), ErrorKind::IOError);
}

#[test]
fn test_basic_auth_header_is_sent() {
    let (server, _store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .put_object()
        .bucket("b")
        .key("k")
        .buffer("x")
        .send()
        .expect("put succeeds");

    let requests = server.requests();
    let authorization = requests[0].header("authorization").expect("authorization");
    assert!(authorization.starts_with("Basic "));
}

#[test]
fn test_sigv4_headers_are_sent() {
    let (server, _store) = object_store_server();
    let config = Config::builder()
        .endpoint(server.endpoint())
        .region("eu-central-1")
        .access_key("AKIDEXAMPLE")
        .secret_key("secret")
        .session_token("session-token")
        .require_sigv4(true)
        .build();
    let client = Client::new(config).expect("client");

    client
        .put_object()
        .bucket("b")
        .key("k")
        .buffer("x")
        .send()
        .expect("put succeeds");

    let requests = server.requests();
    let request = &requests[0];
    let authorization = request.header("authorization").expect("authorization");
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(authorization.contains("/eu-central-1/s3/aws4_request"));
    assert!(authorization.contains("Signature="));
    assert!(request.header("x-amz-date").is_some());
    assert!(request.header("x-amz-content-sha256").is_some());
    assert_eq!(request.header("x-amz-security-token"), Some("session-token"));
}

#[test]
fn test_get_respects_destination_offset() {
    let (server, _store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .put_object()
        .bucket("b")
        .key("k")
        .buffer("abcdef")
        .send()
        .expect("put succeeds");

    let destination = tempfile::tempfile().expect("tempfile");
    destination.write_all_at(b"XXXX", 0).expect("prefill");
    let get = client
        .get_object()
        .bucket("b")
        .key("k")
        .file(destination.try_clone().expect("clone"))
        .offset(4)
        .send()
        .expect("get succeeds");
    assert_eq!(get.bytes_written(), 6);

    let mut content = vec![0u8; 10];
    destination.read_exact_at(&mut content, 0).expect("read");
    assert_eq!(&content, b"XXXXabcdef");
}

#[test]
fn test_range_header_passes_through() {
    let (server, _store) = object_store_server();
    let client = client_for(server.endpoint(), BackendMode::Serial);

    client
        .put_object()
        .bucket("b")
        .key("k")
        .buffer("0123456789")
        .send()
        .expect("put succeeds");

    client
        .get_object()
        .bucket("b")
        .key("k")
        .range("bytes=0-3")
        .send()
        .expect("get succeeds");

    let requests = server.requests();
    let get = requests.iter().find(|r| r.method == "GET").unwrap();
    assert_eq!(get.header("range"), Some("bytes=0-3"));
}
