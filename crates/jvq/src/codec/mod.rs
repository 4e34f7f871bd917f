//! Decoders for the bespoke encodings found in the image

pub mod glyph;
pub mod magnitude;
pub mod packed;
pub mod sentinel;

pub use magnitude::{ALIEN_DOLL_POWER_SENTINEL, StatSlot, decode_provisional, decode_slot, hp_range};
pub use packed::{GroupPatternIndex, decode_enemy, decode_group_pattern, decode_map};
pub use sentinel::{SentinelIndex, decode_list};
