use serde::Serialize;

use crate::entity::Ratio;
use crate::error::{Error, Result};

/// Chance that an enemy drops its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ratio")]
pub enum DropChance {
    None,
    Guaranteed,
    Fraction(Ratio),
}

impl DropChance {
    pub fn label(&self) -> String {
        match self {
            Self::None => "-".to_string(),
            Self::Guaranteed => "100.00%".to_string(),
            Self::Fraction(ratio) => ratio.to_string(),
        }
    }
}

/// Up to two item ids sharing one drop threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDropPattern {
    pub id: u8,
    pub item_0: u8,
    pub item_1: u8,
    pub threshold: u8,
}

impl ItemDropPattern {
    /// Decode the 3-byte record, rejecting a second item without a first
    pub fn decode(id: u8, record: [u8; 3]) -> Result<Self> {
        let [item_0, item_1, threshold] = record;
        if item_0 == 0 && item_1 != 0 {
            return Err(Error::InvalidEncoding(format!(
                "item drop pattern {id} has item {item_1:#04x} without a first item"
            )));
        }
        Ok(Self {
            id,
            item_0,
            item_1,
            threshold,
        })
    }

    /// Non-zero item ids in slot order
    pub fn items(&self) -> impl Iterator<Item = u8> + '_ {
        [self.item_0, self.item_1].into_iter().filter(|&id| id != 0)
    }

    pub fn drop_chance(&self) -> DropChance {
        if self.item_0 == 0 {
            DropChance::None
        } else if self.threshold == 0 {
            DropChance::Guaranteed
        } else {
            DropChance::Fraction(Ratio::of_256(self.threshold))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_item() {
        let pattern = ItemDropPattern::decode(0, [0, 0, 0x40]).unwrap();
        assert_eq!(pattern.drop_chance(), DropChance::None);
        assert_eq!(pattern.items().count(), 0);
        assert_eq!(pattern.drop_chance().label(), "-");
    }

    #[test]
    fn test_guaranteed() {
        let pattern = ItemDropPattern::decode(3, [0x12, 0x13, 0]).unwrap();
        assert_eq!(pattern.drop_chance(), DropChance::Guaranteed);
        assert_eq!(pattern.items().collect::<Vec<_>>(), vec![0x12, 0x13]);
        assert_eq!(pattern.drop_chance().label(), "100.00%");
    }

    #[test]
    fn test_fraction() {
        let pattern = ItemDropPattern::decode(4, [0x12, 0, 0x20]).unwrap();
        assert_eq!(pattern.drop_chance().label(), "12.50% (32 / 256)");
    }

    #[test]
    fn test_second_item_without_first() {
        assert!(matches!(
            ItemDropPattern::decode(5, [0, 0x12, 0x20]),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
