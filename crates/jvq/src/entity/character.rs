use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Party members with per-level status tables
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum PlayerCharacter {
    #[strum(serialize = "じゅうべえ")]
    Jubei = 0,
    #[strum(serialize = "りゅうひめ")]
    Ryuhime = 1,
    #[strum(serialize = "ウルフ・シロ")]
    Wolf = 2,
    #[strum(serialize = "イワン・ガンちゃん")]
    Iwan = 3,
    #[strum(serialize = "オニタン")]
    Onitan = 4,
    #[strum(serialize = "ひのとり")]
    Hinotori = 5,
    #[strum(serialize = "サルボス")]
    Saruboss = 6,
    #[strum(serialize = "ペンタ")]
    Penta = 7,
    #[strum(serialize = "ラッキー")]
    Lucky = 8,
}

impl PlayerCharacter {
    pub fn display_name(&self) -> &'static str {
        self.into()
    }
}

/// Status at one level, plus the experience needed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerCharacterLevel {
    pub level: u8,
    pub hp: u16,
    pub cp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    /// 天の守り
    pub divine_protection: u8,
    /// 芯の強さ
    pub willpower: u8,
    /// 頭の良さ
    pub intelligence: u8,
    pub experience_from_previous: u16,
    pub accumulated_experience: u32,
}

impl PlayerCharacterLevel {
    /// Decode the 9-byte status record; experience fields are filled by the caller
    pub fn from_status(level: u8, status: [u8; 9]) -> Self {
        Self {
            level,
            hp: u16::from_le_bytes([status[0], status[1]]),
            cp: status[2],
            attack: status[3],
            defense: status[4],
            speed: status[5],
            divine_protection: status[6],
            willpower: status[7],
            intelligence: status[8],
            experience_from_previous: 0,
            accumulated_experience: 0,
        }
    }

    pub fn with_experience(mut self, required: u16, accumulated: u32) -> Self {
        self.experience_from_previous = required;
        self.accumulated_experience = accumulated;
        self
    }
}

/// Every level of one party member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCharacterTable {
    pub character: PlayerCharacter,
    pub max_level: u8,
    pub levels: Vec<PlayerCharacterLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_names() {
        assert_eq!(PlayerCharacter::Jubei.to_string(), "じゅうべえ");
        assert_eq!(PlayerCharacter::Iwan.display_name(), "イワン・ガンちゃん");
        assert_eq!(PlayerCharacter::iter().count(), 9);
        assert_eq!(PlayerCharacter::from_repr(8), Some(PlayerCharacter::Lucky));
    }

    #[test]
    fn test_from_status() {
        let level = PlayerCharacterLevel::from_status(3, [0x2C, 0x01, 5, 6, 7, 8, 9, 10, 11])
            .with_experience(120, 300);
        assert_eq!(level.level, 3);
        assert_eq!(level.hp, 300);
        assert_eq!(level.cp, 5);
        assert_eq!(level.speed, 8);
        assert_eq!(level.intelligence, 11);
        assert_eq!(level.experience_from_previous, 120);
        assert_eq!(level.accumulated_experience, 300);
    }
}
