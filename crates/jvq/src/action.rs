//! Enemy action patterns and their probability distributions
//!
//! A pattern holds four slot bytes and four thresholds. Each slot byte is
//! looked up in the slot table to get a raw action id; raw ids of 0x80 and
//! above stand for a pair of concrete actions that split the slot's weight.
//!
//! Distributions are kept on a scale of 512 so that splitting a slot in two
//! stays exact for every single-byte threshold.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::entity::Ratio;
use crate::error::{Error, Result};
use crate::image::{ImageLayout, ReadImage, record};

/// Total mass of a canonical distribution
pub const DISTRIBUTION_SCALE: u32 = 0x200;

/// Raw ids at or above this value index the pair table
pub const PAIR_FLAG: u8 = 0x80;

/// Accepted range for the sum of the four stored thresholds
pub const STORED_THRESHOLD_TOLERANCE: std::ops::RangeInclusive<u32> = 0xFA..=0x100;

/// Concrete action(s) behind one pattern slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ids")]
pub enum ResolvedAction {
    Single(u8),
    Pair(u8, u8),
}

impl ResolvedAction {
    pub fn ids(&self) -> Vec<u8> {
        match *self {
            Self::Single(id) => vec![id],
            Self::Pair(first, second) => vec![first, second],
        }
    }
}

/// Resolve a raw action id through the pair table
pub fn resolve<R: ReadImage>(image: &R, layout: &ImageLayout, raw: u8) -> Result<ResolvedAction> {
    if raw < PAIR_FLAG {
        return Ok(ResolvedAction::Single(raw));
    }
    let index = usize::from(raw << 1);
    let pair = image.read_bytes(layout.action_pairs + index, 2)?;
    Ok(ResolvedAction::Pair(pair[0], pair[1]))
}

/// Look up a slot byte in the slot table, then resolve the raw id it names
pub fn resolve_slot<R: ReadImage>(
    image: &R,
    layout: &ImageLayout,
    slot: u8,
) -> Result<ResolvedAction> {
    if slot == 0 {
        return Err(Error::InvalidEncoding(
            "action slot byte 0 has no slot table entry".to_string(),
        ));
    }
    let raw = image.read_u8(layout.action_slots + usize::from(slot - 1))?;
    resolve(image, layout, raw)
}

/// Action pattern as stored, with every slot resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyActionPattern {
    pub id: u8,
    pub slots: [u8; 4],
    pub actions: [ResolvedAction; 4],
    pub stored_thresholds: [u8; 4],
}

impl EnemyActionPattern {
    /// Read and resolve pattern `id`
    pub fn read<R: ReadImage>(image: &R, layout: &ImageLayout, id: u8) -> Result<Self> {
        if id > record::MAX_ACTION_PATTERN_ID {
            return Err(Error::invalid_id("action pattern", id));
        }
        let offset = layout.action_patterns + usize::from(id) * record::ACTION_PATTERN;
        let data: [u8; record::ACTION_PATTERN] = image.read_array(offset)?;

        let slots = [data[0], data[1], data[2], data[3]];
        let stored_thresholds = [data[4], data[5], data[6], data[7]];
        let mut actions = [ResolvedAction::Single(0); 4];
        for (action, &slot) in actions.iter_mut().zip(&slots) {
            *action = resolve_slot(image, layout, slot)?;
        }

        let pattern = Self {
            id,
            slots,
            actions,
            stored_thresholds,
        };
        let stored_sum = pattern.stored_sum();
        if !STORED_THRESHOLD_TOLERANCE.contains(&stored_sum) {
            warn!(
                "Action pattern {} stored thresholds sum to {:#x}, outside {:#x}..={:#x}",
                id,
                stored_sum,
                STORED_THRESHOLD_TOLERANCE.start(),
                STORED_THRESHOLD_TOLERANCE.end()
            );
        }
        Ok(pattern)
    }

    pub fn stored_sum(&self) -> u32 {
        self.stored_thresholds.iter().map(|&t| u32::from(t)).sum()
    }

    /// Thresholds used for aggregation; the fourth fills the remainder to 256
    pub fn effective_thresholds(&self) -> Result<[u32; 4]> {
        let [t0, t1, t2, _] = self.stored_thresholds.map(u32::from);
        let t3 = 0x100u32.checked_sub(t0 + t1 + t2).ok_or_else(|| {
            Error::InvalidEncoding(format!(
                "action pattern {} thresholds {t0} + {t1} + {t2} exceed 256",
                self.id
            ))
        })?;
        Ok([t0, t1, t2, t3])
    }

    pub fn distribution(&self) -> Result<ActionDistribution> {
        aggregate(self)
    }
}

/// Probability mass of each concrete action, scaled to 512
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionDistribution {
    masses: BTreeMap<u8, u32>,
}

impl ActionDistribution {
    pub fn mass(&self, action_id: u8) -> u32 {
        self.masses.get(&action_id).copied().unwrap_or_default()
    }

    pub fn total(&self) -> u32 {
        self.masses.values().sum()
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Actions by descending mass, ties by ascending id
    pub fn ranked(&self) -> Vec<(u8, u32)> {
        let mut ranked: Vec<(u8, u32)> = self.masses.iter().map(|(&id, &m)| (id, m)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    pub fn probability(&self, action_id: u8) -> Ratio {
        Ratio::new(self.mass(action_id), DISTRIBUTION_SCALE)
    }
}

/// Merge the four slots of a pattern into a canonical distribution
pub fn aggregate(pattern: &EnemyActionPattern) -> Result<ActionDistribution> {
    let thresholds = pattern.effective_thresholds()?;
    let mut masses: BTreeMap<u8, u32> = BTreeMap::new();
    for (action, threshold) in pattern.actions.iter().zip(thresholds) {
        let ids = action.ids();
        let share = threshold * 2 / ids.len() as u32;
        for id in ids {
            *masses.entry(id).or_default() += share;
        }
    }

    let distribution = ActionDistribution { masses };
    let total = distribution.total();
    if total != DISTRIBUTION_SCALE {
        return Err(Error::InvalidEncoding(format!(
            "action pattern {} distributes {total} of {DISTRIBUTION_SCALE}",
            pattern.id
        )));
    }
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{JVQ_LAYOUT, mock::MockImageBuilder};

    fn pattern(actions: [ResolvedAction; 4], thresholds: [u8; 4]) -> EnemyActionPattern {
        EnemyActionPattern {
            id: 0,
            slots: [1, 2, 3, 4],
            actions,
            stored_thresholds: thresholds,
        }
    }

    #[test]
    fn test_resolve_single_and_pair() {
        let layout = &JVQ_LAYOUT;
        // raw 0x81 -> index 2
        let image = MockImageBuilder::new()
            .with_bytes(layout.action_pairs + 2, &[0x10, 0x11])
            .build();
        assert_eq!(resolve(&image, layout, 0x05).unwrap(), ResolvedAction::Single(0x05));
        assert_eq!(resolve(&image, layout, 0x7F).unwrap(), ResolvedAction::Single(0x7F));
        assert_eq!(
            resolve(&image, layout, 0x81).unwrap(),
            ResolvedAction::Pair(0x10, 0x11)
        );
    }

    #[test]
    fn test_resolve_slot() {
        let layout = &JVQ_LAYOUT;
        let image = MockImageBuilder::new()
            .with_bytes(layout.action_slots, &[0x20, 0x80])
            .with_bytes(layout.action_pairs, &[0x30, 0x31])
            .build();
        assert_eq!(
            resolve_slot(&image, layout, 1).unwrap(),
            ResolvedAction::Single(0x20)
        );
        assert_eq!(
            resolve_slot(&image, layout, 2).unwrap(),
            ResolvedAction::Pair(0x30, 0x31)
        );
        assert!(matches!(
            resolve_slot(&image, layout, 0),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_aggregate_single_actions() {
        let p = pattern(
            [
                ResolvedAction::Single(1),
                ResolvedAction::Single(2),
                ResolvedAction::Single(3),
                ResolvedAction::Single(4),
            ],
            [64, 64, 64, 64],
        );
        let distribution = aggregate(&p).unwrap();
        assert_eq!(distribution.total(), 512);
        assert_eq!(distribution.mass(1), 128);
        assert_eq!(distribution.probability(4).to_string(), "25.00% (128 / 512)");
    }

    #[test]
    fn test_aggregate_pair_merges_duplicates() {
        let p = pattern(
            [
                ResolvedAction::Pair(0x10, 0x11),
                ResolvedAction::Single(0x10),
                ResolvedAction::Single(0x12),
                ResolvedAction::Single(0x12),
            ],
            [128, 64, 32, 0xFF],
        );
        // fourth threshold derived as 256 - 224 = 32
        let distribution = aggregate(&p).unwrap();
        assert_eq!(distribution.mass(0x10), 128 + 128);
        assert_eq!(distribution.mass(0x11), 128);
        assert_eq!(distribution.mass(0x12), 128);
        assert_eq!(
            distribution.ranked(),
            vec![(0x10, 256), (0x11, 128), (0x12, 128)]
        );
    }

    #[test]
    fn test_aggregate_total_for_every_pair_mix() {
        for thresholds in [[37, 101, 55, 0xFF], [1, 3, 5, 0], [0, 0, 0, 7], [85, 85, 85, 1]] {
            for pair_mask in 0..16u8 {
                let mut actions = [ResolvedAction::Single(0); 4];
                for (slot, action) in actions.iter_mut().enumerate() {
                    let slot = slot as u8;
                    *action = if pair_mask & (1 << slot) != 0 {
                        ResolvedAction::Pair(0x10 + slot, 0x20 + slot)
                    } else {
                        ResolvedAction::Single(0x30 + slot)
                    };
                }
                let distribution = aggregate(&pattern(actions, thresholds)).unwrap();
                assert_eq!(
                    distribution.total(),
                    DISTRIBUTION_SCALE,
                    "thresholds {thresholds:?}, pairs {pair_mask:#06b}"
                );
            }
        }
    }

    #[test]
    fn test_aggregate_rejects_overflowing_thresholds() {
        let p = pattern([ResolvedAction::Single(1); 4], [200, 50, 10, 0]);
        assert!(matches!(aggregate(&p), Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_read_pattern() {
        let layout = &JVQ_LAYOUT;
        let image = MockImageBuilder::new()
            .with_bytes(
                layout.action_patterns + 3 * record::ACTION_PATTERN,
                &[1, 1, 2, 2, 100, 50, 50, 56],
            )
            .with_bytes(layout.action_slots, &[0x0A, 0x0B])
            .build();
        let p = EnemyActionPattern::read(&image, layout, 3).unwrap();
        assert_eq!(p.slots, [1, 1, 2, 2]);
        assert_eq!(p.stored_sum(), 256);
        let distribution = p.distribution().unwrap();
        assert_eq!(distribution.mass(0x0A), 300);
        assert_eq!(distribution.mass(0x0B), 212);
        assert!(EnemyActionPattern::read(&image, layout, 0x40).is_err());
    }

    #[test]
    fn test_read_pattern_outside_tolerance_still_returned() {
        let layout = &JVQ_LAYOUT;
        let image = MockImageBuilder::new()
            .with_bytes(layout.action_patterns, &[1, 1, 1, 1, 10, 10, 10, 10])
            .with_u8(layout.action_slots, 0x05)
            .build();
        let p = EnemyActionPattern::read(&image, layout, 0).unwrap();
        assert_eq!(p.stored_sum(), 40);
        assert_eq!(p.distribution().unwrap().mass(0x05), 512);
    }
}
