use serde::Serialize;

use crate::codec::glyph;
use crate::error::Result;

/// Action id rendered without a table lookup
pub const PLAIN_ATTACK_ACTION_ID: u8 = 0xEE;
pub const PLAIN_ATTACK_NAME: &str = "こうげき\u{3000}\u{3000}";

/// A fixed-width name slot and its decoded text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub id: u8,
    /// Empty for names that are not read from the image
    #[serde(skip)]
    pub raw: Vec<u8>,
    /// Decoded text including padding
    pub text: String,
}

impl Name {
    pub fn decode(id: u8, raw: &[u8]) -> Result<Self> {
        Ok(Self {
            id,
            raw: raw.to_vec(),
            text: glyph::decode(raw)?,
        })
    }

    pub fn plain_attack() -> Self {
        Self {
            id: PLAIN_ATTACK_ACTION_ID,
            raw: Vec::new(),
            text: PLAIN_ATTACK_NAME.to_string(),
        }
    }

    /// Text without surrounding padding
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

pub type ActionName = Name;
pub type ItemName = Name;
pub type EnemyName = Name;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_trim() {
        let name = Name::decode(4, &[0x41, 0x42, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(name.raw.len(), 7);
        assert_eq!(name.trimmed(), "アイ");
        assert!(name.text.ends_with('\u{3000}'));
    }

    #[test]
    fn test_plain_attack() {
        let name = Name::plain_attack();
        assert!(name.raw.is_empty());
        assert_eq!(name.text, "こうげき\u{3000}\u{3000}");
        assert_eq!(name.trimmed(), "こうげき");
    }
}
