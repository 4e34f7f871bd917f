//! 0xFF-terminated list streams
//!
//! Lists are stored back to back with no length prefix, so list `k` is found
//! by counting `k` terminators from the stream start. [`SentinelIndex`]
//! records every list boundary in one pass for repeated lookups.

use std::ops::Range;

use tracing::debug;

use crate::error::{Error, Result};

/// List terminator
pub const SENTINEL: u8 = 0xFF;

/// Decode list `index` by scanning forward from the stream start.
///
/// `base` is the absolute offset of `stream[0]` and is only used for error
/// reporting. A list missing its terminator is reported as exhausted.
pub fn decode_list(stream: &[u8], base: usize, index: usize) -> Result<Vec<u8>> {
    let mut position = 0;
    let mut seen = 0;
    while seen < index {
        match stream.get(position) {
            Some(&SENTINEL) => seen += 1,
            Some(_) => {}
            None => return Err(exhausted("list", index, base + position)),
        }
        position += 1;
    }

    let mut items = Vec::new();
    loop {
        match stream.get(position) {
            Some(&SENTINEL) => return Ok(items),
            Some(&byte) => items.push(byte),
            None => return Err(exhausted("list", index, base + position)),
        }
        position += 1;
    }
}

fn exhausted(what: &'static str, index: usize, offset: usize) -> Error {
    Error::IndexExhausted {
        what,
        index,
        offset,
    }
}

/// Precomputed list boundaries for a sentinel stream
#[derive(Debug, Clone)]
pub struct SentinelIndex {
    base: usize,
    end: usize,
    lists: Vec<Range<usize>>,
}

impl SentinelIndex {
    /// Record the boundaries of at most `count` lists
    pub fn build(stream: &[u8], base: usize, count: usize) -> Self {
        let mut lists = Vec::with_capacity(count);
        let mut start = 0;
        for terminator in memchr::memchr_iter(SENTINEL, stream).take(count) {
            lists.push(start..terminator);
            start = terminator + 1;
        }
        debug!(
            "Indexed {} of {} lists starting at {:#07x}",
            lists.len(),
            count,
            base
        );
        Self {
            base,
            end: base + stream.len(),
            lists,
        }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Absolute offset of the first item of list `index`
    pub fn offset_of(&self, index: usize) -> Option<usize> {
        self.lists.get(index).map(|range| self.base + range.start)
    }

    /// Items of list `index`; `stream` must be the slice the index was built from
    pub fn list<'s>(&self, stream: &'s [u8], index: usize) -> Result<&'s [u8]> {
        self.lists
            .get(index)
            .and_then(|range| stream.get(range.clone()))
            .ok_or_else(|| exhausted("list", index, self.end))
    }
}
