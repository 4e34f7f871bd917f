//! Hexdump command implementation.
//!
//! Displays PRG bytes in traditional hexdump format, useful for checking
//! table offsets by eye.
//!
//! # Output Format
//!
//! ```text
//! 0x0FA48: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|
//! ```

use std::path::Path;

use anyhow::Result;
use jvq::{ExtractConfig, ReadImage};

use super::load_image;

/// Run the hexdump command
pub fn run(rom: &Path, address: usize, size: usize, config: &ExtractConfig) -> Result<()> {
    let image = load_image(rom, config)?;
    let size = size.min(image.size().saturating_sub(address));
    let bytes = image.read_bytes(address, size)?;

    println!("Hexdump at 0x{:X} ({} bytes):", address, size);
    println!();
    print!("{}", format_hexdump(address, bytes));
    Ok(())
}

/// Format bytes as lines of 16 starting at `address`
pub fn format_hexdump(address: usize, bytes: &[u8]) -> String {
    let mut output = String::new();
    for (i, chunk) in bytes.chunks(16).enumerate() {
        output.push_str(&format!("0x{:05X}: ", address + i * 16));

        // Hex bytes, padded for incomplete lines
        for j in 0..16 {
            if j == 8 {
                output.push(' ');
            }
            match chunk.get(j) {
                Some(byte) => output.push_str(&format!("{:02X} ", byte)),
                None => output.push_str("   "),
            }
        }

        // ASCII representation
        output.push_str(" |");
        for &byte in chunk {
            if (0x20..0x7F).contains(&byte) {
                output.push(byte as char);
            } else {
                output.push('.');
            }
        }
        for _ in chunk.len()..16 {
            output.push(' ');
        }
        output.push_str("|\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_line() {
        let output = format_hexdump(0xFA48, b"Hello World\0\0\0\0\0");
        assert_eq!(
            output,
            "0x0FA48: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|\n"
        );
    }

    #[test]
    fn test_format_partial_line() {
        let output = format_hexdump(0x10, &[0x41, 0xFF]);
        assert_eq!(
            output,
            format!("0x00010: 41 FF {} |A.              |\n", " ".repeat(3 * 14 + 1))
        );
    }
}
