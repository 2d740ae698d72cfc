/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

/// First allocation made by a growing [`Buffer`].
const INITIAL_CAPACITY: usize = 8192;

/// Growable byte buffer used for owned request and response bodies.
///
/// Capacity starts at 8 KiB and doubles until it covers the requested size,
/// so repeated small appends from the response stream stay amortized-cheap.
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Grow capacity to at least `need` bytes following the doubling policy.
    fn reserve_for(&mut self, need: usize) {
        let capacity = self.data.capacity();
        if capacity >= need {
            return;
        }
        let mut new_capacity = if capacity == 0 {
            INITIAL_CAPACITY
        } else {
            capacity * 2
        };
        while new_capacity < need {
            new_capacity *= 2;
        }
        self.data.reserve_exact(new_capacity - self.data.len());
    }

    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.reserve_for(self.data.len() + bytes.len());
        self.data.extend_from_slice(bytes);
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn into_bytes(self) -> Bytes {
        Bytes::from(self.data)
    }
}
