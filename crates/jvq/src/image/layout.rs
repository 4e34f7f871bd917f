//! Image layout constants for the supported program-data revision
//!
//! Record sizes live in [`record`]; table base addresses are grouped in
//! [`ImageLayout`] so the decoders can be pointed at a different revision
//! without touching their logic. All addresses are absolute PRG offsets.

use crate::entity::PlayerCharacter;

/// Record sizes and counts for each decoded structure
pub mod record {
    /// Per-level character status: hp (u16) + seven u8 stats
    pub const CHARACTER_STATUS: usize = 9;
    /// Per-level experience requirement (u16)
    pub const CHARACTER_EXPERIENCE: usize = 2;

    /// Enemy status record
    pub const ENEMY_STATUS: usize = 0x14;
    /// Valid enemy ids are 1..=ENEMY_COUNT
    pub const ENEMY_COUNT: u8 = 173;

    /// Name slot stride; the last byte of each slot is not part of the name
    pub const NAME_STRIDE: usize = 8;
    pub const NAME_LENGTH: usize = NAME_STRIDE - 1;

    /// Four slot bytes followed by four thresholds
    pub const ACTION_PATTERN: usize = 8;
    /// Highest addressable action pattern id (6-bit field)
    pub const MAX_ACTION_PATTERN_ID: u8 = 0x3F;

    /// Two item ids followed by a threshold
    pub const ITEM_DROP_PATTERN: usize = 3;
    pub const MAX_ITEM_DROP_PATTERN_ID: u8 = 0x3F;

    pub const GROUP_PATTERN_LIST_COUNT: usize = 155;

    pub const MAP: usize = 12;
    pub const MAP_COUNT: u16 = 350;

    /// Encounter threshold ids are 3-bit; id 0 means no encounters
    pub const MAX_ENCOUNTER_THRESHOLD_ID: u8 = 7;

    pub const WORLD_MAP_TILE_COUNT: usize = 150;
}

/// Per-character table addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterOffsets {
    pub max_level: usize,
    pub status_start: usize,
    pub experience_start: usize,
}

/// Base addresses of every table the builder reads
#[derive(Debug, Clone, Copy)]
pub struct ImageLayout {
    /// CRC-32 of the whole PRG region of this revision
    pub expected_crc32: u32,
    pub characters: &'static [(PlayerCharacter, CharacterOffsets)],
    pub enemy_status: usize,
    pub enemy_names: usize,
    pub item_names: usize,
    pub action_names: usize,
    pub action_patterns: usize,
    /// Slot byte -> raw action id (1-based)
    pub action_slots: usize,
    /// Raw action id >= 0x80 -> pair of concrete action ids
    pub action_pairs: usize,
    pub item_drop_patterns: usize,
    pub group_pattern_lists: usize,
    pub group_patterns: usize,
    pub maps: usize,
    /// Threshold for encounter ids 1..=7
    pub encounter_thresholds: usize,
    pub world_map_tiles: usize,
}

impl ImageLayout {
    pub fn character(&self, character: PlayerCharacter) -> Option<&CharacterOffsets> {
        self.characters
            .iter()
            .find(|(c, _)| *c == character)
            .map(|(_, offsets)| offsets)
    }
}

impl Default for ImageLayout {
    fn default() -> Self {
        JVQ_LAYOUT
    }
}

#[rustfmt::skip]
static JVQ_CHARACTERS: [(PlayerCharacter, CharacterOffsets); 9] = [
    (PlayerCharacter::Jubei,    CharacterOffsets { max_level: 0x03C097, status_start: 0x027713, experience_start: 0x027519 }),
    (PlayerCharacter::Ryuhime,  CharacterOffsets { max_level: 0x03C098, status_start: 0x027A97, experience_start: 0x0275E1 }),
    (PlayerCharacter::Wolf,     CharacterOffsets { max_level: 0x03C09C, status_start: 0x0278D5, experience_start: 0x02757D }),
    (PlayerCharacter::Iwan,     CharacterOffsets { max_level: 0x03C09A, status_start: 0x027C59, experience_start: 0x027645 }),
    (PlayerCharacter::Onitan,   CharacterOffsets { max_level: 0x03C09B, status_start: 0x027DF0, experience_start: 0x02769F }),
    (PlayerCharacter::Hinotori, CharacterOffsets { max_level: 0x03C09D, status_start: 0x027E4A, experience_start: 0x0276B3 }),
    (PlayerCharacter::Saruboss, CharacterOffsets { max_level: 0x03C09E, status_start: 0x027EA4, experience_start: 0x0276C7 }),
    (PlayerCharacter::Penta,    CharacterOffsets { max_level: 0x03C09F, status_start: 0x027EEC, experience_start: 0x0276D7 }),
    (PlayerCharacter::Lucky,    CharacterOffsets { max_level: 0x03C0A0, status_start: 0x027F46, experience_start: 0x0276EB }),
];

#[rustfmt::skip]
pub static JVQ_LAYOUT: ImageLayout = ImageLayout {
    expected_crc32:         0x29C61B41,
    characters:             &JVQ_CHARACTERS,
    enemy_status:           0x00E1C2,
    enemy_names:            0x025AD5,
    item_names:             0x026685,
    action_names:           0x02634D,
    action_patterns:        0x00F442,
    action_slots:           0x00FF93,
    action_pairs:           0x00FFEE,
    item_drop_patterns:     0x00F643,
    group_pattern_lists:    0x00F704,
    group_patterns:         0x00FA48,
    maps:                   0x008004,
    encounter_thresholds:   0x00FD7D,
    world_map_tiles:        0x00FCE7,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_character_has_offsets() {
        for character in PlayerCharacter::iter() {
            assert!(JVQ_LAYOUT.character(character).is_some(), "{character}");
        }
    }

    #[test]
    fn test_world_map_tiles_end_at_threshold_table() {
        assert_eq!(
            JVQ_LAYOUT.world_map_tiles + record::WORLD_MAP_TILE_COUNT,
            JVQ_LAYOUT.encounter_thresholds
        );
    }
}
