//! Extraction results

use std::collections::BTreeMap;

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::action::{ActionDistribution, EnemyActionPattern};
use crate::entity::{
    ActionName, EncounterRate, Enemy, EnemyGroupPattern, EnemyGroupPatternList, EnemyName,
    ItemDropPattern, ItemName, MapRecord, PlayerCharacterTable, Ratio, WorldMapTile,
};
use crate::error::Result;
use crate::reference::Chapter;

/// At most this many actions are listed per enemy
pub const MAX_ACTIONS_PER_ENEMY: usize = 8;

/// Kind of record a batch failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RecordKind {
    Character,
    Enemy,
    EnemyName,
    ActionPattern,
    ActionName,
    ItemDropPattern,
    ItemName,
    GroupPatternList,
    GroupPattern,
    Map,
    EncounterThreshold,
    WorldMapTile,
}

/// A record skipped in lenient mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractFailure {
    pub kind: RecordKind,
    pub id: usize,
    pub message: String,
}

/// Names referenced by the extracted records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameTables {
    pub enemies: BTreeMap<u8, EnemyName>,
    pub items: BTreeMap<u8, ItemName>,
    pub actions: BTreeMap<u8, ActionName>,
}

impl NameTables {
    pub fn enemy(&self, id: u8) -> Option<&str> {
        self.enemies.get(&id).map(|n| n.trimmed())
    }

    pub fn item(&self, id: u8) -> Option<&str> {
        self.items.get(&id).map(|n| n.trimmed())
    }

    pub fn action(&self, id: u8) -> Option<&str> {
        self.actions.get(&id).map(|n| n.trimmed())
    }
}

/// Everything decoded from one image
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameData {
    pub characters: Vec<PlayerCharacterTable>,
    pub enemies: Vec<Enemy>,
    pub action_patterns: BTreeMap<u8, EnemyActionPattern>,
    pub action_distributions: BTreeMap<u8, ActionDistribution>,
    pub item_drops: BTreeMap<u8, ItemDropPattern>,
    pub group_pattern_lists: Vec<EnemyGroupPatternList>,
    pub group_patterns: BTreeMap<u8, EnemyGroupPattern>,
    pub maps: Vec<MapRecord>,
    /// Threshold per encounter threshold id; id 0 is always 0, `None` if skipped
    pub encounter_thresholds: Vec<Option<u8>>,
    pub world_map_tiles: Vec<WorldMapTile>,
    pub names: NameTables,
    pub failures: Vec<ExtractFailure>,
}

impl GameData {
    pub fn encounter_rate(&self, map: &MapRecord) -> Option<EncounterRate> {
        if map.is_world_map() {
            return Some(EncounterRate::VariesByTile);
        }
        self.encounter_thresholds
            .get(usize::from(map.encounter_threshold_id))
            .copied()
            .flatten()
            .map(EncounterRate::from_threshold)
    }

    /// Ranked actions of an enemy, limited to [`MAX_ACTIONS_PER_ENEMY`]
    pub fn ranked_actions(&self, enemy: &Enemy) -> Vec<(u8, Ratio)> {
        self.action_distributions
            .get(&enemy.action_pattern_id)
            .map(|distribution| {
                distribution
                    .ranked()
                    .into_iter()
                    .take(MAX_ACTIONS_PER_ENEMY)
                    .map(|(id, _)| (id, distribution.probability(id)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One action of an enemy profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedAction {
    pub id: u8,
    pub name: ActionName,
    pub mass: u32,
    pub probability: Ratio,
}

/// Everything known about one enemy, resolved through every referenced table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyProfile {
    pub enemy: Enemy,
    pub name: EnemyName,
    pub chapter: Chapter,
    pub note: Option<&'static str>,
    pub action_pattern: EnemyActionPattern,
    pub actions: Vec<RankedAction>,
    pub item_drop: ItemDropPattern,
    pub drop_items: Vec<ItemName>,
}

impl EnemyProfile {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kind_display() {
        assert_eq!(RecordKind::GroupPatternList.to_string(), "group-pattern-list");
        assert_eq!(RecordKind::Enemy.to_string(), "enemy");
    }

    #[test]
    fn test_world_map_rate() {
        let data = GameData {
            encounter_thresholds: vec![Some(0), Some(8), Some(16), None],
            ..Default::default()
        };
        let world = MapRecord {
            id: 1,
            group_pattern_list_id: 0,
            encounter_threshold_id: 2,
        };
        assert_eq!(data.encounter_rate(&world), Some(EncounterRate::VariesByTile));

        let town = MapRecord { id: 4, ..world };
        assert_eq!(
            data.encounter_rate(&town),
            Some(EncounterRate::from_threshold(16))
        );
        let skipped = MapRecord {
            encounter_threshold_id: 3,
            ..town
        };
        assert_eq!(data.encounter_rate(&skipped), None);
        let unknown = MapRecord {
            encounter_threshold_id: 7,
            ..town
        };
        assert_eq!(data.encounter_rate(&unknown), None);
    }
}
