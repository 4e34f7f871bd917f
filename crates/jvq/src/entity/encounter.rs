use std::collections::BTreeMap;

use serde::Serialize;

use crate::entity::Ratio;

/// Maps whose encounter rate comes from the terrain table instead of the map record
pub const WORLD_MAP_IDS: [u16; 3] = [0, 1, 2];

/// Weighted list of group pattern ids; a pattern appearing twice is twice as likely
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyGroupPatternList {
    pub id: u8,
    pub pattern_ids: Vec<u8>,
}

impl EnemyGroupPatternList {
    /// Distinct pattern ids in ascending order with their occurrence count
    pub fn pattern_frequencies(&self) -> Vec<(u8, u32)> {
        let mut counts: BTreeMap<u8, u32> = BTreeMap::new();
        for &pattern_id in &self.pattern_ids {
            *counts.entry(pattern_id).or_default() += 1;
        }
        counts.into_iter().collect()
    }

    /// Selection probability of each distinct pattern
    pub fn pattern_rates(&self) -> Vec<(u8, Ratio)> {
        let total = self.pattern_ids.len() as u32;
        self.pattern_frequencies()
            .into_iter()
            .map(|(pattern_id, count)| (pattern_id, Ratio::new(count, total)))
            .collect()
    }
}

/// One group in a battle formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GroupSlot {
    pub size: u8,
    /// Present exactly when `size` is non-zero
    pub enemy_id: Option<u8>,
}

impl GroupSlot {
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Battle formation of up to three enemy groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnemyGroupPattern {
    pub id: u8,
    pub groups: [GroupSlot; 3],
}

impl EnemyGroupPattern {
    /// Total number of enemies across all groups
    pub fn enemy_group_size(&self) -> u32 {
        self.groups.iter().map(|g| u32::from(g.size)).sum()
    }

    /// Number of populated groups
    pub fn group_count(&self) -> usize {
        self.groups.iter().filter(|g| !g.is_empty()).count()
    }
}

/// Encounter data of one map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapRecord {
    pub id: u16,
    pub group_pattern_list_id: u8,
    pub encounter_threshold_id: u8,
}

impl MapRecord {
    pub fn is_world_map(&self) -> bool {
        WORLD_MAP_IDS.contains(&self.id)
    }
}

/// Per-step chance of a random encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ratio")]
pub enum EncounterRate {
    VariesByTile,
    Fraction(Ratio),
}

impl EncounterRate {
    pub fn from_threshold(threshold: u8) -> Self {
        Self::Fraction(Ratio::of_256(threshold))
    }

    pub fn label(&self) -> String {
        match self {
            Self::VariesByTile => "移動先のマスの種類により変わる".to_string(),
            Self::Fraction(ratio) => ratio.to_string(),
        }
    }
}

/// Entry of the world map terrain table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldMapTile {
    pub index: usize,
    pub address: usize,
    pub threshold_id: u8,
    pub threshold: u8,
    pub caption: &'static str,
}

impl WorldMapTile {
    pub fn encounter_rate(&self) -> EncounterRate {
        EncounterRate::from_threshold(self.threshold)
    }
}
