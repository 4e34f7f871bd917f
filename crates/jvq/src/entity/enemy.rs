use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Susceptibility class of a 2-bit resistance field
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum Resistance {
    #[strum(serialize = "100%")]
    Full = 0,
    #[strum(serialize = "70%")]
    Partial = 1,
    #[strum(serialize = "30%")]
    Weak = 2,
    #[strum(serialize = "0%")]
    Immune = 3,
}

impl Resistance {
    /// Decode the low two bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Full,
            1 => Self::Partial,
            2 => Self::Weak,
            _ => Self::Immune,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            Self::Full => 100,
            Self::Partial => 70,
            Self::Weak => 30,
            Self::Immune => 0,
        }
    }
}

/// Turn-count bucket of a debuff
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum DebuffDuration {
    #[strum(serialize = "2 or 3")]
    Short = 0,
    #[strum(serialize = "4 or 5")]
    Medium = 1,
    #[strum(serialize = "5 or 6")]
    Long = 2,
}

impl TryFrom<u8> for DebuffDuration {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_repr(value)
            .ok_or_else(|| Error::InvalidEncoding(format!("debuff duration bucket {value}")))
    }
}

/// Resistance to one debuff spell and how long it lasts when it lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebuffProfile {
    pub resistance: Resistance,
    /// Absent when the enemy is immune
    pub duration: Option<DebuffDuration>,
}

impl DebuffProfile {
    pub fn decode(resistance_bits: u8, duration_bits: u8) -> Result<Self> {
        let resistance = Resistance::from_bits(resistance_bits);
        let duration = if resistance == Resistance::Immune {
            if duration_bits != 0 {
                return Err(Error::InvalidEncoding(format!(
                    "immune debuff carries duration bucket {duration_bits}"
                )));
            }
            None
        } else {
            Some(DebuffDuration::try_from(duration_bits)?)
        };
        Ok(Self {
            resistance,
            duration,
        })
    }
}

/// Evasion correction class from the behavior byte
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum EvasionClass {
    Class0 = 0,
    Class1 = 1,
    Class2 = 2,
    Class3 = 3,
}

impl EvasionClass {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Class0,
            1 => Self::Class1,
            2 => Self::Class2,
            _ => Self::Class3,
        }
    }

    /// Correction applied to the hit roll
    pub fn correction(&self) -> u8 {
        match self {
            Self::Class0 => 0xC0,
            Self::Class1 => 0xA0,
            Self::Class2 => 0x80,
            Self::Class3 => 0,
        }
    }
}

/// Instant-effect spells an enemy may be immune to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, IntoStaticStr, Display,
)]
pub enum Spell {
    #[strum(serialize = "ミハギト")]
    Mihagito,
    #[strum(serialize = "クルス")]
    Kurusu,
    #[strum(serialize = "ベト")]
    Beto,
}

impl Spell {
    /// Success rate in percent against an enemy without immunity
    pub fn base_rate(&self) -> u8 {
        match self {
            Self::Mihagito => 40,
            Self::Kurusu => 20,
            Self::Beto => 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpellImmunities {
    pub mihagito: bool,
    pub kurusu: bool,
    pub beto: bool,
}

impl SpellImmunities {
    pub fn is_immune(&self, spell: Spell) -> bool {
        match spell {
            Spell::Mihagito => self.mihagito,
            Spell::Kurusu => self.kurusu,
            Spell::Beto => self.beto,
        }
    }

    pub fn rate(&self, spell: Spell) -> u8 {
        if self.is_immune(spell) {
            0
        } else {
            spell.base_rate()
        }
    }
}

/// Resistances to the five attack-spell elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementalResistances {
    pub earthquake: Resistance,
    pub fire: Resistance,
    pub water_ice: Resistance,
    pub lightning: Resistance,
    pub explosion: Resistance,
}

/// Decoded enemy status record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enemy {
    pub id: u8,
    pub hp: u32,
    pub min_hp: u32,
    pub max_hp: u32,
    pub cp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub money: u32,
    pub experience: u32,
    pub escapable: bool,
    pub acts_twice: bool,
    pub evasion: EvasionClass,
    pub immunities: SpellImmunities,
    pub elements: ElementalResistances,
    pub seal: DebuffProfile,
    pub lullaby: DebuffProfile,
    pub paralysis: DebuffProfile,
    pub action_pattern_id: u8,
    pub item_drop_pattern_id: u8,
}

impl Enemy {
    /// Number of actions per turn as shown in reports
    pub fn actions_per_turn(&self) -> &'static str {
        if self.acts_twice { "1 or 2" } else { "1" }
    }
}
