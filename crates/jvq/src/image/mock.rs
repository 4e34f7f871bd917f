//! Test helper for placing bytes at absolute image offsets

use super::ImageBuffer;

/// Full PRG size of the supported revision (16 banks of 16 KiB)
pub const MOCK_IMAGE_SIZE: usize = 0x40000;

pub struct MockImageBuilder {
    bytes: Vec<u8>,
}

impl MockImageBuilder {
    pub fn new() -> Self {
        Self::with_size(MOCK_IMAGE_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    pub fn with_bytes(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.bytes[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn with_u8(self, offset: usize, value: u8) -> Self {
        self.with_bytes(offset, &[value])
    }

    pub fn with_u16_le(self, offset: usize, value: u16) -> Self {
        self.with_bytes(offset, &value.to_le_bytes())
    }

    pub fn build(self) -> ImageBuffer {
        ImageBuffer::new(self.bytes)
    }
}

impl Default for MockImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
