//! iNES container parsing and revision check

use std::fs;
use std::path::Path;

use flate2::Crc;
use tracing::{info, warn};

use super::{ImageBuffer, ImageLayout};
use crate::config::ExtractConfig;
use crate::error::{Error, Result};

pub const INES_HEADER_SIZE: usize = 16;
pub const INES_MAGIC: [u8; 4] = *b"NES\x1A";
/// PRG bank count in the header is in 16 KiB units
pub const PRG_BANK_SIZE: usize = 0x4000;

/// Extract the PRG region from an iNES file image
pub fn read_prg_rom(ines: &[u8]) -> Result<ImageBuffer> {
    let header = ines.get(..INES_HEADER_SIZE).ok_or_else(|| {
        Error::Integrity(format!("iNES header shorter than {INES_HEADER_SIZE} bytes"))
    })?;
    if header[..4] != INES_MAGIC {
        return Err(Error::Integrity(format!(
            "bad iNES signature {:02X?}",
            &header[..4]
        )));
    }

    let prg_size = usize::from(header[4]) * PRG_BANK_SIZE;
    let prg = ines
        .get(INES_HEADER_SIZE..INES_HEADER_SIZE + prg_size)
        .ok_or_else(|| {
            Error::Integrity(format!(
                "PRG region truncated: header declares {prg_size:#x} bytes, file has {:#x}",
                ines.len() - INES_HEADER_SIZE
            ))
        })?;
    Ok(ImageBuffer::new(prg.to_vec()))
}

/// CRC-32 (IEEE) of a byte slice
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(bytes);
    crc.sum()
}

/// Size and checksum of a loaded image against the expected revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    pub size: usize,
    pub actual: u32,
    pub expected: u32,
}

impl ChecksumReport {
    pub fn new(image: &ImageBuffer, layout: &ImageLayout) -> Self {
        Self {
            size: image.len(),
            actual: crc32(image.as_bytes()),
            expected: layout.expected_crc32,
        }
    }

    pub fn matches(&self) -> bool {
        self.actual == self.expected
    }
}

/// Fail unless the image is the revision the layout describes
pub fn verify_checksum(image: &ImageBuffer, layout: &ImageLayout) -> Result<()> {
    let report = ChecksumReport::new(image, layout);
    if !report.matches() {
        return Err(Error::Integrity(format!(
            "PRG CRC-32 {:08X} does not match expected {:08X}",
            report.actual, report.expected
        )));
    }
    Ok(())
}

/// Read an iNES file and return its PRG region, verified unless disabled
pub fn load_prg_rom(
    path: impl AsRef<Path>,
    layout: &ImageLayout,
    config: &ExtractConfig,
) -> Result<ImageBuffer> {
    let path = path.as_ref();
    let image = read_prg_rom(&fs::read(path)?)?;
    info!("Loaded {} bytes of PRG from {}", image.len(), path.display());

    if config.verify_checksum {
        verify_checksum(&image, layout)?;
        info!("PRG checksum verified");
    } else {
        let report = ChecksumReport::new(&image, layout);
        if !report.matches() {
            warn!(
                "PRG CRC-32 {:08X} differs from expected {:08X}; continuing without verification",
                report.actual, report.expected
            );
        }
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::JVQ_LAYOUT;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ines(banks: u8, prg: &[u8]) -> Vec<u8> {
        let mut file = INES_MAGIC.to_vec();
        file.push(banks);
        file.resize(INES_HEADER_SIZE, 0);
        file.extend_from_slice(prg);
        file
    }

    #[test]
    fn test_crc32_known_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF43926);
        assert_eq!(crc32(&[]), 0);
    }

    #[test]
    fn test_read_prg_rom() {
        let mut prg = vec![0xAA; PRG_BANK_SIZE];
        // trailing CHR data is ignored
        prg.extend_from_slice(&[0x55; 16]);
        let image = read_prg_rom(&ines(1, &prg)).unwrap();
        assert_eq!(image.len(), PRG_BANK_SIZE);
        assert!(image.as_bytes().iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_read_prg_rom_failures() {
        assert!(matches!(
            read_prg_rom(b"NES\x1A"),
            Err(Error::Integrity(_))
        ));

        let mut bad_magic = ines(1, &vec![0; PRG_BANK_SIZE]);
        bad_magic[3] = 0x1B;
        assert!(matches!(read_prg_rom(&bad_magic), Err(Error::Integrity(_))));

        let short = ines(2, &vec![0; PRG_BANK_SIZE]);
        assert!(matches!(read_prg_rom(&short), Err(Error::Integrity(_))));
    }

    #[test]
    fn test_checksum_mismatch() {
        let image = ImageBuffer::new(vec![0; 32]);
        let report = ChecksumReport::new(&image, &JVQ_LAYOUT);
        assert!(!report.matches());
        assert_eq!(report.expected, 0x29C61B41);
        assert!(matches!(
            verify_checksum(&image, &JVQ_LAYOUT),
            Err(Error::Integrity(_))
        ));
    }

    #[test]
    fn test_load_prg_rom_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&ines(1, &vec![0x01; PRG_BANK_SIZE])).unwrap();

        let strict = ExtractConfig::default();
        assert!(load_prg_rom(file.path(), &JVQ_LAYOUT, &strict).is_err());

        let lenient = ExtractConfig::builder().verify_checksum(false).build();
        let image = load_prg_rom(file.path(), &JVQ_LAYOUT, &lenient).unwrap();
        assert_eq!(image.len(), PRG_BANK_SIZE);

        let mut layout = JVQ_LAYOUT;
        layout.expected_crc32 = crc32(image.as_bytes());
        assert!(load_prg_rom(file.path(), &layout, &strict).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_prg_rom("/nonexistent/jvq.nes", &JVQ_LAYOUT, &ExtractConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
