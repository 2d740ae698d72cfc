/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs::File;
use std::io;
use std::os::unix::fs::FileExt;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_util::Stream;

/// Largest chunk handed to the HTTP stack per poll.
const CHUNK_SIZE: u64 = 64 * 1024;

/// Request-body stream backed by positional file reads.
///
/// Each poll reads at `offset + bytes so far`, so the kernel file offset is
/// never perturbed and the same fd may be shared with other readers. The
/// stream ends at `limit` bytes or at end of file, whichever comes first;
/// reads interrupted by a signal are retried.
///
/// The reads are blocking and intentionally so: they run on the thread that
/// drives the transaction, between socket polls, which is fine for regular
/// files.
#[derive(Debug)]
pub(crate) struct FdSource {
    file: File,
    offset: u64,
    limit: u64,
    sent: Arc<AtomicU64>,
}

impl FdSource {
    pub(crate) fn new(file: File, offset: u64, limit: u64, sent: Arc<AtomicU64>) -> Self {
        Self {
            file,
            offset,
            limit,
            sent,
        }
    }
}

impl Stream for FdSource {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let total = this.sent.load(Ordering::Relaxed);

        let mut max = CHUNK_SIZE;
        if this.limit > 0 {
            let left = this.limit.saturating_sub(total);
            if left == 0 {
                return Poll::Ready(None);
            }
            max = max.min(left);
        }

        let mut buf = vec![0u8; max as usize];
        loop {
            match this.file.read_at(&mut buf, this.offset + total) {
                Ok(0) => return Poll::Ready(None),
                Ok(n) => {
                    this.sent.fetch_add(n as u64, Ordering::Relaxed);
                    buf.truncate(n);
                    return Poll::Ready(Some(Ok(Bytes::from(buf))));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Poll::Ready(Some(Err(err))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::io::Write;

    fn file_with(content: &[u8]) -> File {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    async fn drain(mut source: FdSource) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(chunk) = source.next().await {
            out.extend_from_slice(&chunk.unwrap());
        }
        out
    }

    #[tokio::test]
    async fn test_reads_whole_file() {
        let file = file_with(b"Hello S3 stress test! ");
        let sent = Arc::new(AtomicU64::new(0));
        let out = drain(FdSource::new(file, 0, 22, Arc::clone(&sent))).await;
        assert_eq!(out, b"Hello S3 stress test! ");
        assert_eq!(sent.load(Ordering::Relaxed), 22);
    }

    #[tokio::test]
    async fn test_respects_offset_and_limit() {
        let file = file_with(b"0123456789");
        let sent = Arc::new(AtomicU64::new(0));
        let out = drain(FdSource::new(file, 2, 5, Arc::clone(&sent))).await;
        assert_eq!(out, b"23456");
        assert_eq!(sent.load(Ordering::Relaxed), 5);
    }

    #[tokio::test]
    async fn test_short_file_ends_stream_early() {
        let file = file_with(b"abc");
        let sent = Arc::new(AtomicU64::new(0));
        let out = drain(FdSource::new(file, 0, 100, Arc::clone(&sent))).await;
        assert_eq!(out, b"abc");
        assert_eq!(sent.load(Ordering::Relaxed), 3);
    }

    #[tokio::test]
    async fn test_chunked_reads_cover_large_bodies() {
        let payload: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let file = file_with(&payload);
        let sent = Arc::new(AtomicU64::new(0));
        let out = drain(FdSource::new(file, 0, payload.len() as u64, sent)).await;
        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn test_does_not_touch_kernel_offset() {
        use std::io::{Seek, SeekFrom};
        let mut file = file_with(b"positional");
        file.seek(SeekFrom::Start(3)).unwrap();
        let clone = file.try_clone().unwrap();
        let sent = Arc::new(AtomicU64::new(0));
        let out = drain(FdSource::new(clone, 0, 10, sent)).await;
        assert_eq!(out, b"positional");
        assert_eq!(file.stream_position().unwrap(), 3);
    }
}
