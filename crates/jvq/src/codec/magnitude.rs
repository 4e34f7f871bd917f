//! Variable magnitude encoding of enemy stats
//!
//! Each stat is stored as a 9-bit provisional value: one bit taken from the
//! shared byte at record offset 0 and eight bits from the stat's own slot
//! byte. The low bits form a unary run that selects a power-of-ten scale.

use crate::error::{Error, Result};

/// Value produced when a four-bit run scales to a small candidate.
///
/// Only the alien doll boss is known to hit this branch in the supported
/// revision; re-check it if the layout is retargeted.
pub const ALIEN_DOLL_POWER_SENTINEL: u32 = 0x9C50;

/// Saturated value for a four-bit run whose candidate reaches 0x6000
pub const SATURATED: u32 = 0xFFFF;

/// Maximum unary run length; a longer run is not a valid encoding
const MAX_RUN: u32 = 5;

/// Stat positions inside the enemy record (slot byte = record byte `1 + y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StatSlot {
    Experience = 0,
    Hp = 1,
    Attack = 2,
    Defense = 3,
    Cp = 4,
    Speed = 5,
    Money = 6,
}

impl StatSlot {
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Combine the shared byte and a slot byte into the 9-bit provisional value
pub fn provisional(shared: u8, slot: u8, y: u8) -> u16 {
    (((u16::from(shared) >> y) << 8) + u16::from(slot)) & 0x1FF
}

/// Decode a 9-bit provisional value
pub fn decode_provisional(value: u16) -> Result<u32> {
    let mut v = u32::from(value & 0x1FF);
    let mut bit_count = 0;
    for _ in 0..MAX_RUN {
        let bit = v & 1;
        v = (v >> 1) & 0xFF;
        if bit == 0 {
            break;
        }
        bit_count += 1;
    }

    match bit_count {
        0 => Ok(v),
        1..=3 => Ok((v + 1) * 10u32.pow(bit_count)),
        4 => {
            let candidate = (v + 1) * 1000;
            if candidate & 0x6000 != 0 {
                Ok(SATURATED)
            } else {
                Ok(ALIEN_DOLL_POWER_SENTINEL)
            }
        }
        _ => Err(Error::InvalidEncoding(format!(
            "magnitude {value:#05x} has a run of {bit_count} set bits"
        ))),
    }
}

/// Decode the stat at slot `y` of an enemy record
pub fn decode_slot(shared: u8, slot: u8, y: u8) -> Result<u32> {
    decode_provisional(provisional(shared, slot, y))
}

/// Decode a stat straight from the raw enemy record
pub fn decode_stat(record: &[u8], stat: StatSlot) -> Result<u32> {
    let y = stat.index();
    let slot = record.get(1 + y as usize).copied().ok_or_else(|| {
        Error::InvalidEncoding(format!("enemy record too short for stat slot {y}"))
    })?;
    let shared = record
        .first()
        .copied()
        .ok_or_else(|| Error::InvalidEncoding("empty enemy record".to_string()))?;
    decode_slot(shared, slot, y)
}

/// Inclusive hp bounds an enemy may roll around its base hp
pub fn hp_range(hp: u32) -> (u32, u32) {
    let delta = (hp / 8).min(0xFF);
    (hp - delta, hp + delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(decode_provisional(0x000).unwrap(), 0);
        // 14 = 0b1110: run of zero, shifted once
        assert_eq!(decode_provisional(14).unwrap(), 7);
        assert_eq!(decode_provisional(0x1FE).unwrap(), 0xFF);
    }

    #[test]
    fn test_scaled_values() {
        // 1: one set bit, v = 0 -> (0 + 1) * 10
        assert_eq!(decode_provisional(1).unwrap(), 10);
        // 0b101: one set bit then zero, v = 1 -> 20
        assert_eq!(decode_provisional(0b101).unwrap(), 20);
        // 0b011: two set bits, v = 0 -> 100
        assert_eq!(decode_provisional(0b011).unwrap(), 100);
        // 0b0111: three set bits, v = 0 -> 1000
        assert_eq!(decode_provisional(0b0111).unwrap(), 1000);
    }

    #[test]
    fn test_four_bit_run() {
        assert_eq!(decode_provisional(0x0F).unwrap(), ALIEN_DOLL_POWER_SENTINEL);
        assert_eq!(decode_provisional(0x0F).unwrap(), 40016);
        assert_eq!(decode_provisional(0x10F).unwrap(), SATURATED);
    }

    #[test]
    fn test_five_bit_run_is_invalid() {
        assert!(matches!(
            decode_provisional(0x1F),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(decode_provisional(0x1FF).is_err());
    }

    #[test]
    fn test_provisional_combines_shared_bit() {
        assert_eq!(provisional(0b10, 0x0F, 1), 0x10F);
        assert_eq!(provisional(0b10, 0x0F, 0), 0x00F);
        assert_eq!(provisional(0xFF, 0x00, 6), 0x100);
    }

    #[test]
    fn test_decode_stat_from_record() {
        let mut record = [0u8; 20];
        record[0] = 0b0000_0010;
        record[2] = 0x0F; // hp slot, shared bit set
        record[3] = 14; // attack
        assert_eq!(decode_stat(&record, StatSlot::Hp).unwrap(), SATURATED);
        assert_eq!(decode_stat(&record, StatSlot::Attack).unwrap(), 7);
        assert_eq!(decode_stat(&record, StatSlot::Experience).unwrap(), 0);
        assert!(decode_stat(&record[..3], StatSlot::Money).is_err());
    }

    #[test]
    fn test_hp_range() {
        assert_eq!(hp_range(0), (0, 0));
        assert_eq!(hp_range(80), (70, 90));
        assert_eq!(hp_range(2040), (1785, 2295));
        // delta clamps at 255
        assert_eq!(hp_range(4000), (3745, 4255));
        assert_eq!(hp_range(65535), (65280, 65790));
    }

    #[test]
    fn test_hp_range_symmetric_for_every_encoding() {
        let mut decoded = 0;
        for value in 0..=0x1FFu16 {
            let Ok(hp) = decode_provisional(value) else {
                continue;
            };
            let (min_hp, max_hp) = hp_range(hp);
            let delta = (hp / 8).min(255);
            assert!(min_hp <= hp && hp <= max_hp, "value {value:#05x}");
            assert_eq!(max_hp - hp, delta, "value {value:#05x}");
            assert_eq!(hp - min_hp, delta, "value {value:#05x}");
            decoded += 1;
        }
        // every value except the 16 with a five-bit run
        assert_eq!(decoded, 0x200 - 16);
    }
}
