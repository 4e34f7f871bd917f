//! Entity assembly: offset arithmetic over the layout plus codec delegation

use std::collections::BTreeSet;

use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::action::{self, EnemyActionPattern, aggregate};
use crate::codec::packed::{self, GROUP_PATTERN_ID_LIMIT, GroupPatternIndex};
use crate::codec::sentinel::{self, SentinelIndex};
use crate::config::ExtractConfig;
use crate::data::{
    EnemyProfile, ExtractFailure, GameData, MAX_ACTIONS_PER_ENEMY, RankedAction, RecordKind,
};
use crate::entity::{
    ActionName, EncounterRate, Enemy, EnemyGroupPattern, EnemyGroupPatternList, EnemyName,
    ItemDropPattern, ItemName, MapRecord, Name, PLAIN_ATTACK_ACTION_ID, PlayerCharacter,
    PlayerCharacterLevel, PlayerCharacterTable, WorldMapTile,
};
use crate::error::{Error, Result};
use crate::image::{ImageLayout, ReadImage, record};
use crate::reference;

/// Builds entities from an image
pub struct EntityBuilder<'a, R: ReadImage> {
    image: &'a R,
    layout: &'a ImageLayout,
    config: ExtractConfig,
    list_index: Option<SentinelIndex>,
    pattern_index: Option<GroupPatternIndex>,
}

impl<'a, R: ReadImage> EntityBuilder<'a, R> {
    pub fn new(image: &'a R, layout: &'a ImageLayout, config: ExtractConfig) -> Self {
        let mut builder = Self {
            image,
            layout,
            config,
            list_index: None,
            pattern_index: None,
        };
        if builder.config.memoize_scans {
            builder.build_indexes();
        }
        builder
    }

    /// Builder with the default layout and configuration
    pub fn with_defaults(image: &'a R) -> Self {
        Self::new(image, &crate::image::JVQ_LAYOUT, ExtractConfig::default())
    }

    fn build_indexes(&mut self) {
        let lists_start = self.layout.group_pattern_lists;
        if let Ok(stream) = self.stream(lists_start) {
            self.list_index = Some(SentinelIndex::build(
                stream,
                lists_start,
                record::GROUP_PATTERN_LIST_COUNT,
            ));
        }
        let patterns_start = self.layout.group_patterns;
        if let Ok(stream) = self.stream(patterns_start) {
            self.pattern_index = Some(GroupPatternIndex::build(
                stream,
                patterns_start,
                GROUP_PATTERN_ID_LIMIT,
            ));
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn layout(&self) -> &ImageLayout {
        self.layout
    }

    /// Everything from `start` to the end of the image
    fn stream(&self, start: usize) -> Result<&'a [u8]> {
        self.image
            .read_bytes(start, self.image.size().saturating_sub(start))
    }

    pub fn character_table(&self, character: PlayerCharacter) -> Result<PlayerCharacterTable> {
        let offsets = self
            .layout
            .character(character)
            .ok_or_else(|| Error::invalid_id("character", character as u8))?;
        let max_level = self.image.read_u8(offsets.max_level)?;

        let mut accumulated = 0u32;
        let mut levels = Vec::with_capacity(usize::from(max_level));
        for level in 1..=max_level {
            let index = usize::from(level - 1);
            let status: [u8; record::CHARACTER_STATUS] = self
                .image
                .read_array(offsets.status_start + index * record::CHARACTER_STATUS)?;
            let required = self
                .image
                .read_u16_le(offsets.experience_start + index * record::CHARACTER_EXPERIENCE)?;
            accumulated += u32::from(required);
            levels.push(
                PlayerCharacterLevel::from_status(level, status)
                    .with_experience(required, accumulated),
            );
        }
        debug!("Read {} levels for {}", levels.len(), character);

        Ok(PlayerCharacterTable {
            character,
            max_level,
            levels,
        })
    }

    pub fn enemy(&self, id: u8) -> Result<Enemy> {
        if id == 0 || id > record::ENEMY_COUNT {
            return Err(Error::invalid_id("enemy", id));
        }
        let offset = self.layout.enemy_status + usize::from(id - 1) * record::ENEMY_STATUS;
        let data: [u8; record::ENEMY_STATUS] = self.image.read_array(offset)?;
        packed::decode_enemy(id, &data)
    }

    fn name(&self, base: usize, id: u8) -> Result<Name> {
        let offset = base + usize::from(id) * record::NAME_STRIDE;
        Name::decode(id, self.image.read_bytes(offset, record::NAME_LENGTH)?)
    }

    pub fn enemy_name(&self, id: u8) -> Result<EnemyName> {
        if id == 0 {
            return Err(Error::invalid_id("enemy name", id));
        }
        self.name(self.layout.enemy_names, id)
    }

    pub fn item_name(&self, id: u8) -> Result<ItemName> {
        if id == 0 {
            return Err(Error::invalid_id("item name", id));
        }
        self.name(self.layout.item_names, id)
    }

    pub fn action_name(&self, id: u8) -> Result<ActionName> {
        if id == PLAIN_ATTACK_ACTION_ID {
            return Ok(Name::plain_attack());
        }
        self.name(self.layout.action_names, id)
    }

    pub fn action_pattern(&self, id: u8) -> Result<EnemyActionPattern> {
        EnemyActionPattern::read(self.image, self.layout, id)
    }

    pub fn action_distribution(&self, id: u8) -> Result<action::ActionDistribution> {
        aggregate(&self.action_pattern(id)?)
    }

    pub fn item_drop_pattern(&self, id: u8) -> Result<ItemDropPattern> {
        if id > record::MAX_ITEM_DROP_PATTERN_ID {
            return Err(Error::invalid_id("item drop pattern", id));
        }
        let offset = self.layout.item_drop_patterns + usize::from(id) * record::ITEM_DROP_PATTERN;
        ItemDropPattern::decode(id, self.image.read_array(offset)?)
    }

    pub fn group_pattern_list(&self, id: u8) -> Result<EnemyGroupPatternList> {
        if usize::from(id) >= record::GROUP_PATTERN_LIST_COUNT {
            return Err(Error::invalid_id("group pattern list", id));
        }
        let start = self.layout.group_pattern_lists;
        let stream = self.stream(start)?;
        let pattern_ids = match &self.list_index {
            Some(index) => index.list(stream, usize::from(id))?.to_vec(),
            None => sentinel::decode_list(stream, start, usize::from(id))?,
        };
        Ok(EnemyGroupPatternList { id, pattern_ids })
    }

    pub fn group_pattern(&self, id: u8) -> Result<EnemyGroupPattern> {
        if id == 0 {
            return Err(Error::invalid_id("group pattern", id));
        }
        let start = self.layout.group_patterns;
        let stream = self.stream(start)?;
        let position = match &self.pattern_index {
            Some(index) => index.position(usize::from(id))?,
            None => packed::skip_group_patterns(stream, start, usize::from(id))?,
        };
        let bytes = stream.get(position..).ok_or(Error::IndexExhausted {
            what: "group pattern",
            index: usize::from(id),
            offset: start + position,
        })?;
        packed::decode_group_pattern(id, bytes)
    }

    pub fn map(&self, id: u16) -> Result<MapRecord> {
        if id >= record::MAP_COUNT {
            return Err(Error::invalid_id("map", id));
        }
        let offset = self.layout.maps + usize::from(id) * record::MAP;
        Ok(packed::decode_map(id, &self.image.read_array(offset)?))
    }

    /// Threshold for an encounter threshold id; id 0 means no encounters
    pub fn encounter_threshold(&self, id: u8) -> Result<u8> {
        match id {
            0 => Ok(0),
            1..=record::MAX_ENCOUNTER_THRESHOLD_ID => self
                .image
                .read_u8(self.layout.encounter_thresholds + usize::from(id - 1)),
            _ => Err(Error::invalid_id("encounter threshold", id)),
        }
    }

    pub fn encounter_rate(&self, map: &MapRecord) -> Result<EncounterRate> {
        if map.is_world_map() {
            return Ok(EncounterRate::VariesByTile);
        }
        Ok(EncounterRate::from_threshold(
            self.encounter_threshold(map.encounter_threshold_id)?,
        ))
    }

    pub fn world_map_tile(&self, index: usize) -> Result<WorldMapTile> {
        let caption = reference::tile_caption(index)
            .ok_or_else(|| Error::invalid_id("world map tile", index))?;
        let address = self.layout.world_map_tiles + index;
        let threshold_id = self.image.read_u8(address)?;
        Ok(WorldMapTile {
            index,
            address,
            threshold_id,
            threshold: self.encounter_threshold(threshold_id)?,
            caption,
        })
    }

    pub fn world_map_tiles(&self) -> Result<Vec<WorldMapTile>> {
        (0..record::WORLD_MAP_TILE_COUNT)
            .map(|index| self.world_map_tile(index))
            .collect()
    }

    /// Resolve an enemy through every table it references
    pub fn enemy_profile(&self, id: u8) -> Result<EnemyProfile> {
        let enemy = self.enemy(id)?;
        let name = self.enemy_name(id)?;
        let action_pattern = self.action_pattern(enemy.action_pattern_id)?;
        let distribution = aggregate(&action_pattern)?;
        let actions = distribution
            .ranked()
            .into_iter()
            .take(MAX_ACTIONS_PER_ENEMY)
            .map(|(action_id, mass)| {
                Ok(RankedAction {
                    id: action_id,
                    name: self.action_name(action_id)?,
                    mass,
                    probability: distribution.probability(action_id),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let item_drop = self.item_drop_pattern(enemy.item_drop_pattern_id)?;
        let drop_items = item_drop
            .items()
            .map(|item_id| self.item_name(item_id))
            .collect::<Result<Vec<_>>>()?;

        Ok(EnemyProfile {
            chapter: reference::chapter_of(id),
            note: reference::enemy_note(id),
            enemy,
            name,
            action_pattern,
            actions,
            item_drop,
            drop_items,
        })
    }

    /// Decode every table in natural id order
    pub fn extract_all(&self) -> Result<GameData> {
        let mut batch = Batch::new(self.config.skip_failed_records);
        let mut data = GameData::default();

        for character in PlayerCharacter::iter() {
            if let Some(table) = batch.record(RecordKind::Character, character as usize, || {
                self.character_table(character)
            })? {
                data.characters.push(table);
            }
        }

        for id in 1..=record::ENEMY_COUNT {
            if let Some(enemy) = batch.record(RecordKind::Enemy, id.into(), || self.enemy(id))? {
                data.enemies.push(enemy);
            }
            if let Some(name) =
                batch.record(RecordKind::EnemyName, id.into(), || self.enemy_name(id))?
            {
                data.names.enemies.insert(id, name);
            }
        }

        let action_pattern_ids: BTreeSet<u8> =
            data.enemies.iter().map(|e| e.action_pattern_id).collect();
        let mut action_ids = BTreeSet::new();
        for id in action_pattern_ids {
            let Some(pattern) =
                batch.record(RecordKind::ActionPattern, id.into(), || self.action_pattern(id))?
            else {
                continue;
            };
            if let Some(distribution) =
                batch.record(RecordKind::ActionPattern, id.into(), || aggregate(&pattern))?
            {
                action_ids.extend(
                    distribution
                        .ranked()
                        .into_iter()
                        .map(|(action_id, _)| action_id),
                );
                data.action_distributions.insert(id, distribution);
            }
            data.action_patterns.insert(id, pattern);
        }
        for id in action_ids {
            if let Some(name) =
                batch.record(RecordKind::ActionName, id.into(), || self.action_name(id))?
            {
                data.names.actions.insert(id, name);
            }
        }

        let drop_ids: BTreeSet<u8> = data.enemies.iter().map(|e| e.item_drop_pattern_id).collect();
        let mut item_ids = BTreeSet::new();
        for id in drop_ids {
            if let Some(pattern) =
                batch.record(RecordKind::ItemDropPattern, id.into(), || self.item_drop_pattern(id))?
            {
                item_ids.extend(pattern.items());
                data.item_drops.insert(id, pattern);
            }
        }
        for id in item_ids {
            if let Some(name) =
                batch.record(RecordKind::ItemName, id.into(), || self.item_name(id))?
            {
                data.names.items.insert(id, name);
            }
        }

        let mut group_pattern_ids = BTreeSet::new();
        for id in 0..record::GROUP_PATTERN_LIST_COUNT as u8 {
            if let Some(list) = batch.record(RecordKind::GroupPatternList, id.into(), || {
                self.group_pattern_list(id)
            })? {
                group_pattern_ids.extend(list.pattern_ids.iter().copied());
                data.group_pattern_lists.push(list);
            }
        }
        let mut group_enemy_ids = BTreeSet::new();
        for id in group_pattern_ids {
            if let Some(pattern) =
                batch.record(RecordKind::GroupPattern, id.into(), || self.group_pattern(id))?
            {
                group_enemy_ids.extend(pattern.groups.iter().filter_map(|g| g.enemy_id));
                data.group_patterns.insert(id, pattern);
            }
        }
        for id in group_enemy_ids {
            if data.names.enemies.contains_key(&id) {
                continue;
            }
            if let Some(name) =
                batch.record(RecordKind::EnemyName, id.into(), || self.enemy_name(id))?
            {
                data.names.enemies.insert(id, name);
            }
        }

        for id in 0..record::MAP_COUNT {
            if let Some(map) = batch.record(RecordKind::Map, id.into(), || self.map(id))? {
                data.maps.push(map);
            }
        }
        for id in 0..=record::MAX_ENCOUNTER_THRESHOLD_ID {
            let threshold = batch.record(RecordKind::EncounterThreshold, id.into(), || {
                self.encounter_threshold(id)
            })?;
            data.encounter_thresholds.push(threshold);
        }

        for index in 0..record::WORLD_MAP_TILE_COUNT {
            if let Some(tile) =
                batch.record(RecordKind::WorldMapTile, index, || self.world_map_tile(index))?
            {
                data.world_map_tiles.push(tile);
            }
        }

        data.failures = batch.finish();
        info!(
            "Extracted {} characters, {} enemies, {} maps, {} group pattern lists ({} failures)",
            data.characters.len(),
            data.enemies.len(),
            data.maps.len(),
            data.group_pattern_lists.len(),
            data.failures.len()
        );
        Ok(data)
    }
}

/// Strict or lenient record collection for batch extraction
struct Batch {
    lenient: bool,
    failures: Vec<ExtractFailure>,
}

impl Batch {
    fn new(lenient: bool) -> Self {
        Self {
            lenient,
            failures: Vec::new(),
        }
    }

    /// `Ok(None)` only in lenient mode, after recording a decode failure
    fn record<T>(
        &mut self,
        kind: RecordKind,
        id: usize,
        decode: impl FnOnce() -> Result<T>,
    ) -> Result<Option<T>> {
        match decode() {
            Ok(value) => Ok(Some(value)),
            Err(e) if self.lenient && e.is_decode_error() => {
                warn!("Skipping {} {}: {}", kind, id, e);
                self.failures.push(ExtractFailure {
                    kind,
                    id,
                    message: e.to_string(),
                });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn finish(self) -> Vec<ExtractFailure> {
        self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DropChance, Resistance};
    use crate::image::{ImageBuffer, JVQ_LAYOUT, mock::MockImageBuilder};
    use crate::reference::Chapter;

    static L: &ImageLayout = &JVQ_LAYOUT;

    /// Names are seven glyphs; pad with ideographic spaces
    fn name_bytes(glyphs: &[u8]) -> [u8; record::NAME_LENGTH] {
        let mut raw = [0xFF; record::NAME_LENGTH];
        raw[..glyphs.len()].copy_from_slice(glyphs);
        raw
    }

    fn enemy_offset(id: u8) -> usize {
        L.enemy_status + usize::from(id - 1) * record::ENEMY_STATUS
    }

    /// Image with every table valid for a small synthetic data set
    fn sample_image() -> ImageBuffer {
        let mut builder = MockImageBuilder::new();

        for (_, offsets) in L.characters {
            builder = builder
                .with_u8(offsets.max_level, 2)
                .with_bytes(offsets.status_start, &[20, 0, 1, 2, 3, 4, 5, 6, 7])
                .with_bytes(offsets.status_start + 9, &[0x2C, 0x01, 8, 9, 10, 11, 12, 13, 14])
                .with_u16_le(offsets.experience_start, 0)
                .with_u16_le(offsets.experience_start + 2, 300);
        }

        for id in 1..=record::ENEMY_COUNT {
            builder = builder
                .with_bytes(enemy_offset(id), &[0, 14, 0b101])
                .with_bytes(L.enemy_names + usize::from(id) * 8, &name_bytes(&[0x41]));
        }
        // enemy 1: hp 20, attack 7, action pattern 1, drop pattern 2
        builder = builder
            .with_bytes(enemy_offset(1), &[0, 2, 0b101, 14])
            .with_u8(enemy_offset(1) + 9, 0xC1)
            .with_u8(enemy_offset(1) + 13, 0x02)
            .with_bytes(L.enemy_names + 8, &name_bytes(&[0x41, 0x42]));

        // every pattern: slots 1..=4, 64 each; slot table 1 -> 0x05, 2 -> pair 0x80
        for id in 0..=record::MAX_ACTION_PATTERN_ID {
            builder = builder.with_bytes(
                L.action_patterns + usize::from(id) * 8,
                &[1, 2, 3, 4, 64, 64, 64, 64],
            );
        }
        builder = builder
            .with_bytes(L.action_slots, &[0x05, 0x80, 0x06, 0x05])
            .with_bytes(L.action_pairs, &[0x07, 0xEE]);
        for action_id in [0x05u8, 0x06, 0x07] {
            builder = builder.with_bytes(
                L.action_names + usize::from(action_id) * 8,
                &name_bytes(&[0x01, 0x02]),
            );
        }

        // drop pattern 2: item 0x10, 25%
        builder = builder
            .with_bytes(L.item_drop_patterns + 2 * 3, &[0x10, 0, 0x40])
            .with_bytes(L.item_names + 0x10 * 8, &name_bytes(&[0x06, 0x07]));

        // lists: 0 = [1, 1, 2], 1 = [], rest = [2]
        let mut lists = vec![1, 1, 2, 0xFF, 0xFF];
        for _ in 2..record::GROUP_PATTERN_LIST_COUNT {
            lists.extend_from_slice(&[2, 0xFF]);
        }
        builder = builder.with_bytes(L.group_pattern_lists, &lists);
        // patterns: 0 = unused, 1 = two of enemy 1, 2 = one each of 2 and 3
        builder = builder.with_bytes(
            L.group_patterns,
            &[0b0010_0000, 0x09, 0b0100_0000, 0x01, 0b0010_0001, 0x02, 0x03],
        );

        builder = builder
            .with_bytes(L.maps + 4 * 12 + 3, &[0x02])
            .with_u8(L.maps + 4 * 12 + 10, 0b0100_0000)
            .with_bytes(L.encounter_thresholds, &[8, 16, 24, 32, 40, 48, 56])
            .with_bytes(L.world_map_tiles, &[1, 0, 7]);

        builder.build()
    }

    #[test]
    fn test_character_table_accumulates_experience() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        let table = builder.character_table(PlayerCharacter::Wolf).unwrap();
        assert_eq!(table.max_level, 2);
        assert_eq!(table.levels.len(), 2);
        assert_eq!(table.levels[0].hp, 20);
        assert_eq!(table.levels[1].hp, 300);
        assert_eq!(table.levels[1].intelligence, 14);
        assert_eq!(table.levels[1].experience_from_previous, 300);
        assert_eq!(table.levels[1].accumulated_experience, 300);
        assert!(table
            .levels
            .windows(2)
            .all(|w| w[0].accumulated_experience <= w[1].accumulated_experience));
    }

    #[test]
    fn test_enemy_bounds() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        assert!(matches!(builder.enemy(0), Err(Error::InvalidId { .. })));
        assert!(matches!(builder.enemy(174), Err(Error::InvalidId { .. })));
        let enemy = builder.enemy(1).unwrap();
        assert_eq!(enemy.hp, 20);
        assert_eq!(enemy.attack, 7);
        assert_eq!((enemy.min_hp, enemy.max_hp), (18, 22));
        assert_eq!(enemy.elements.fire, Resistance::Immune);
        assert_eq!(enemy.action_pattern_id, 1);
    }

    #[test]
    fn test_names() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        assert_eq!(builder.enemy_name(1).unwrap().trimmed(), "アイ");
        assert_eq!(builder.item_name(0x10).unwrap().trimmed(), "かき");
        assert_eq!(builder.action_name(0xEE).unwrap(), Name::plain_attack());
        assert!(matches!(builder.item_name(0), Err(Error::InvalidId { .. })));
        // zero-filled name slot contains unmapped bytes
        assert!(builder.item_name(0x11).is_err());
    }

    #[test]
    fn test_enemy_profile() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        let profile = builder.enemy_profile(1).unwrap();
        assert_eq!(profile.chapter, Chapter::Boss);
        assert_eq!(profile.name.trimmed(), "アイ");

        // slot 1 -> 0x05 (64), slot 2 -> pair (0x07, 0xEE) (32 each),
        // slot 3 -> 0x06 (64), slot 4 -> 0x05 (64)
        let ranked: Vec<(u8, u32)> = profile.actions.iter().map(|a| (a.id, a.mass)).collect();
        assert_eq!(ranked, vec![(0x05, 256), (0x06, 128), (0x07, 64), (0xEE, 64)]);
        assert_eq!(profile.actions[3].name.trimmed(), "こうげき");
        assert_eq!(profile.drop_items.len(), 1);
        assert_eq!(profile.drop_items[0].trimmed(), "かき");
        assert_eq!(profile.item_drop.drop_chance().label(), "25.00% (64 / 256)");

        let json = profile.to_json().unwrap();
        assert!(json.contains("\"chapter\": \"Boss\""));
        assert!(json.contains("\"text\": \"かき"));
    }

    #[test]
    fn test_group_patterns_naive_and_memoized_agree() {
        let image = sample_image();
        let memoized = EntityBuilder::new(&image, L, ExtractConfig::default());
        let naive = EntityBuilder::new(
            &image,
            L,
            ExtractConfig::builder().memoize_scans(false).build(),
        );
        for id in 0..record::GROUP_PATTERN_LIST_COUNT as u8 {
            assert_eq!(
                memoized.group_pattern_list(id).unwrap(),
                naive.group_pattern_list(id).unwrap()
            );
        }
        for id in 1..4 {
            assert_eq!(
                memoized.group_pattern(id).unwrap(),
                naive.group_pattern(id).unwrap()
            );
        }
        let pattern = naive.group_pattern(2).unwrap();
        assert_eq!(pattern.enemy_group_size(), 2);
        assert_eq!(pattern.group_count(), 2);
        assert_eq!(pattern.groups[2].enemy_id, Some(0x03));
        assert!(matches!(naive.group_pattern(0), Err(Error::InvalidId { .. })));
        assert!(naive.group_pattern_list(155).is_err());
        assert!(naive.group_pattern_list(1).unwrap().pattern_ids.is_empty());
    }

    #[test]
    fn test_group_pattern_at_stream_end_agrees() {
        let image = MockImageBuilder::with_size(L.group_patterns + 2).build();
        let memoized = EntityBuilder::new(&image, L, ExtractConfig::default());
        let naive = EntityBuilder::new(
            &image,
            L,
            ExtractConfig::builder().memoize_scans(false).build(),
        );
        let from_index = memoized.group_pattern(2).unwrap_err();
        let from_scan = naive.group_pattern(2).unwrap_err();
        assert!(matches!(from_scan, Error::IndexExhausted { index: 2, .. }));
        assert_eq!(from_index.to_string(), from_scan.to_string());
        assert_eq!(memoized.group_pattern(1).unwrap(), naive.group_pattern(1).unwrap());
    }

    #[test]
    fn test_encounter_thresholds() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        assert_eq!(builder.encounter_threshold(0).unwrap(), 0);
        assert_eq!(builder.encounter_threshold(1).unwrap(), 8);
        assert_eq!(builder.encounter_threshold(7).unwrap(), 56);
        assert!(matches!(
            builder.encounter_threshold(8),
            Err(Error::InvalidId { .. })
        ));

        let map = builder.map(4).unwrap();
        assert_eq!(map.group_pattern_list_id, 2);
        assert_eq!(builder.encounter_rate(&map).unwrap().label(), "6.25% (16 / 256)");
        let world = builder.map(0).unwrap();
        assert_eq!(builder.encounter_rate(&world).unwrap(), EncounterRate::VariesByTile);
        assert!(builder.map(350).is_err());
    }

    #[test]
    fn test_world_map_tiles() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        let tiles = builder.world_map_tiles().unwrap();
        assert_eq!(tiles.len(), record::WORLD_MAP_TILE_COUNT);
        assert_eq!(tiles[0].threshold, 8);
        assert_eq!(tiles[1].threshold, 0);
        assert_eq!(tiles[2].threshold, 56);
        assert_eq!(tiles[0].address, 0xFCE7);
    }

    #[test]
    fn test_extract_all() {
        let image = sample_image();
        let builder = EntityBuilder::with_defaults(&image);
        let data = builder.extract_all().unwrap();
        assert!(data.is_complete());
        assert_eq!(data.characters.len(), 9);
        assert_eq!(data.enemies.len(), 173);
        assert_eq!(data.maps.len(), 350);
        assert_eq!(data.group_pattern_lists.len(), 155);
        assert_eq!(data.world_map_tiles.len(), 150);
        assert_eq!(data.encounter_thresholds.len(), 8);
        assert_eq!(data.group_patterns.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(data.names.enemies.contains_key(&3));
        assert_eq!(data.names.item(0x10), Some("かき"));
        assert!(data.item_drops.contains_key(&2));
        assert!(matches!(
            data.item_drops[&0].drop_chance(),
            DropChance::None
        ));
        assert!(data.enemies.windows(2).all(|w| w[0].id < w[1].id));
        for enemy in &data.enemies {
            let delta = (enemy.hp / 8).min(255);
            assert!(enemy.min_hp <= enemy.hp && enemy.hp <= enemy.max_hp);
            assert_eq!(enemy.max_hp - enemy.hp, delta, "enemy {}", enemy.id);
            assert_eq!(enemy.hp - enemy.min_hp, delta, "enemy {}", enemy.id);
        }
    }

    #[test]
    fn test_extract_all_strict_and_lenient() {
        let mut bytes = sample_image().as_bytes().to_vec();
        // five-bit run in enemy 3's hp slot
        bytes[enemy_offset(3) + 2] = 0x1F;
        let image = ImageBuffer::new(bytes);

        let strict = EntityBuilder::with_defaults(&image);
        assert!(matches!(
            strict.extract_all(),
            Err(Error::InvalidEncoding(_))
        ));

        let config = ExtractConfig::builder().skip_failed_records(true).build();
        let lenient = EntityBuilder::new(&image, L, config);
        let data = lenient.extract_all().unwrap();
        assert_eq!(data.enemies.len(), 172);
        assert_eq!(data.failures.len(), 1);
        assert_eq!(data.failures[0].kind, RecordKind::Enemy);
        assert_eq!(data.failures[0].id, 3);
    }

    /// Image whose reads starting inside `hole` fail
    struct HoledImage<'a> {
        inner: &'a ImageBuffer,
        hole: std::ops::Range<usize>,
    }

    impl ReadImage for HoledImage<'_> {
        fn size(&self) -> usize {
            self.inner.size()
        }

        fn read_bytes(&self, offset: usize, length: usize) -> Result<&[u8]> {
            if self.hole.contains(&offset) {
                return Err(Error::OutOfRange {
                    offset,
                    length,
                    size: self.hole.start,
                });
            }
            self.inner.read_bytes(offset, length)
        }
    }

    #[test]
    fn test_lenient_keeps_missing_thresholds_missing() {
        let mut bytes = sample_image().as_bytes().to_vec();
        // map 4 uses threshold id 5
        bytes[L.maps + 4 * 12 + 10] = 0b1010_0000;
        let image = ImageBuffer::new(bytes);
        let holed = HoledImage {
            inner: &image,
            hole: L.encounter_thresholds + 3..L.encounter_thresholds + 7,
        };

        let strict = EntityBuilder::new(&holed, L, ExtractConfig::default());
        assert!(matches!(strict.extract_all(), Err(Error::OutOfRange { .. })));

        let config = ExtractConfig::builder().skip_failed_records(true).build();
        let data = EntityBuilder::new(&holed, L, config).extract_all().unwrap();
        assert_eq!(
            data.encounter_thresholds,
            vec![Some(0), Some(8), Some(16), Some(24), None, None, None, None]
        );
        assert!(data
            .failures
            .iter()
            .any(|f| f.kind == RecordKind::EncounterThreshold && f.id == 5));

        let map = data.maps.iter().find(|m| m.id == 4).unwrap();
        assert_eq!(map.encounter_threshold_id, 5);
        assert_eq!(data.encounter_rate(map), None);
        let table = crate::export::maps_table(&data);
        assert_eq!(table.rows[4][3], crate::export::Cell::dash());
    }
}
