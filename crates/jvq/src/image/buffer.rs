use crate::error::{Error, Result};

/// Bounds-checked reads at absolute offsets into a program-data image
pub trait ReadImage {
    /// Total number of readable bytes
    fn size(&self) -> usize;

    /// Borrow `length` bytes starting at `offset`
    fn read_bytes(&self, offset: usize, length: usize) -> Result<&[u8]>;

    fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.read_bytes(offset, 1)?[0])
    }

    fn read_u16_le(&self, offset: usize) -> Result<u16> {
        let bytes = self.read_bytes(offset, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Copy a fixed-size record out of the image
    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]>
    where
        Self: Sized,
    {
        let mut record = [0u8; N];
        record.copy_from_slice(self.read_bytes(offset, N)?);
        Ok(record)
    }
}

/// Immutable, exclusively owned copy of the PRG region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    bytes: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for ImageBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl ReadImage for ImageBuffer {
    fn size(&self) -> usize {
        self.bytes.len()
    }

    fn read_bytes(&self, offset: usize, length: usize) -> Result<&[u8]> {
        let out_of_range = || Error::OutOfRange {
            offset,
            length,
            size: self.bytes.len(),
        };
        let end = offset.checked_add(length).ok_or_else(out_of_range)?;
        self.bytes.get(offset..end).ok_or_else(out_of_range)
    }
}
