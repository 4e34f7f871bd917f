//! Fixed and variable length bit-packed records
//!
//! Group patterns are variable length: a control byte `[g0:3][g1:3][g2:2]`
//! followed by one enemy id per non-empty group. Enemy status and map records
//! are fixed size and decoded field by field.

use tracing::debug;

use crate::codec::magnitude::{self, StatSlot};
use crate::entity::{
    DebuffProfile, ElementalResistances, Enemy, EnemyGroupPattern, EvasionClass, GroupSlot,
    MapRecord, Resistance, SpellImmunities,
};
use crate::error::{Error, Result};
use crate::image::record;

/// Group pattern ids are one byte
pub const GROUP_PATTERN_ID_LIMIT: usize = 0x100;

/// Split a control byte into the three group sizes
pub fn group_sizes(control: u8) -> [u8; 3] {
    [(control & 0xE0) >> 5, (control & 0x1C) >> 2, control & 0x03]
}

/// Encoded length of the pattern starting with `control`
pub fn group_record_len(control: u8) -> usize {
    1 + group_sizes(control).iter().filter(|&&size| size != 0).count()
}

/// Decode the pattern whose control byte is `record[0]`
pub fn decode_group_pattern(id: u8, record: &[u8]) -> Result<EnemyGroupPattern> {
    let (&control, mut ids) = record
        .split_first()
        .ok_or_else(|| truncated_pattern(id))?;
    let mut groups = [GroupSlot::default(); 3];
    for (group, size) in groups.iter_mut().zip(group_sizes(control)) {
        if size == 0 {
            continue;
        }
        let (&enemy_id, rest) = ids.split_first().ok_or_else(|| truncated_pattern(id))?;
        *group = GroupSlot {
            size,
            enemy_id: Some(enemy_id),
        };
        ids = rest;
    }
    Ok(EnemyGroupPattern { id, groups })
}

fn truncated_pattern(id: u8) -> Error {
    Error::InvalidEncoding(format!("group pattern {id} is truncated"))
}

/// Offset of pattern `id` relative to the stream start, skipping `id` records
///
/// Fails with `IndexExhausted` unless the pattern starts inside the stream.
pub fn skip_group_patterns(stream: &[u8], base: usize, id: usize) -> Result<usize> {
    let exhausted = |position: usize| Error::IndexExhausted {
        what: "group pattern",
        index: id,
        offset: base + position,
    };
    let mut position = 0;
    for _ in 0..id {
        let control = *stream.get(position).ok_or_else(|| exhausted(position))?;
        position += group_record_len(control);
    }
    if position >= stream.len() {
        return Err(exhausted(position));
    }
    Ok(position)
}

/// Record start offsets of the group pattern stream, computed in one walk
#[derive(Debug, Clone)]
pub struct GroupPatternIndex {
    base: usize,
    starts: Vec<usize>,
    /// Relative offset where the walk stopped
    stopped_at: usize,
}

impl GroupPatternIndex {
    /// Walk at most `count` records, stopping early at the end of the stream
    pub fn build(stream: &[u8], base: usize, count: usize) -> Self {
        let mut starts = Vec::with_capacity(count);
        let mut position = 0;
        while starts.len() < count {
            let Some(&control) = stream.get(position) else {
                break;
            };
            starts.push(position);
            position += group_record_len(control);
        }
        debug!(
            "Indexed {} group patterns starting at {:#07x}",
            starts.len(),
            base
        );
        Self {
            base,
            starts,
            stopped_at: position,
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Relative offset of pattern `id`
    pub fn position(&self, id: usize) -> Result<usize> {
        self.starts
            .get(id)
            .copied()
            .ok_or_else(|| Error::IndexExhausted {
                what: "group pattern",
                index: id,
                offset: self.base + self.stopped_at,
            })
    }
}

/// Decode a 20-byte enemy status record
pub fn decode_enemy(id: u8, data: &[u8; record::ENEMY_STATUS]) -> Result<Enemy> {
    let stat = |slot: StatSlot| magnitude::decode_stat(data, slot);

    let experience = stat(StatSlot::Experience)?;
    let hp = stat(StatSlot::Hp)?;
    let (min_hp, max_hp) = magnitude::hp_range(hp);
    let attack = stat(StatSlot::Attack)?;
    let defense = stat(StatSlot::Defense)?;
    let cp = stat(StatSlot::Cp)?;
    let speed = stat(StatSlot::Speed)?;
    let money = stat(StatSlot::Money)?;

    let behavior = data[8];
    let escapable = behavior & 0x04 == 0;
    let acts_twice = matches!(behavior & 0x30, 0x10 | 0x20);
    let evasion = EvasionClass::from_bits(behavior >> 6);
    let immunities = SpellImmunities {
        mihagito: behavior & 0x08 != 0,
        kurusu: !escapable,
        beto: behavior & 0x02 != 0,
    };

    let elements = ElementalResistances {
        fire: Resistance::from_bits(data[9] >> 6),
        lightning: Resistance::from_bits(data[10] >> 6),
        water_ice: Resistance::from_bits(data[10] >> 4),
        earthquake: Resistance::from_bits(data[10] >> 2),
        explosion: Resistance::from_bits(data[10]),
    };

    let debuff = |name: &str, resistance: u8, duration: u8| {
        DebuffProfile::decode(resistance & 0x03, duration & 0x03).map_err(|e| {
            Error::InvalidEncoding(format!("enemy {id} {name}: {e}"))
        })
    };
    let seal = debuff("seal", data[11] >> 6, data[11] >> 4)?;
    let lullaby = debuff("lullaby", data[11] >> 2, data[11])?;
    let paralysis = debuff("paralysis", data[12] >> 2, data[12])?;

    Ok(Enemy {
        id,
        hp,
        min_hp,
        max_hp,
        cp,
        attack,
        defense,
        speed,
        money,
        experience,
        escapable,
        acts_twice,
        evasion,
        immunities,
        elements,
        seal,
        lullaby,
        paralysis,
        action_pattern_id: data[9] & 0x3F,
        item_drop_pattern_id: data[13] & 0x3F,
    })
}

/// Decode a 12-byte map record
pub fn decode_map(id: u16, data: &[u8; record::MAP]) -> MapRecord {
    let list_id = match data[1] {
        0x01 => 0x78,
        0x02 => 0x00,
        _ => data[3],
    };
    let group_pattern_list_id = if usize::from(list_id) >= record::GROUP_PATTERN_LIST_COUNT {
        0x01
    } else {
        list_id
    };
    MapRecord {
        id,
        group_pattern_list_id,
        encounter_threshold_id: data[10] >> 5,
    }
}
