//! Curated labels that are not stored in the image

mod chapters;
mod maps;

pub use chapters::{Chapter, chapter_of, enemy_note};
pub use maps::{WORLD_MAP_TILE_CAPTIONS, map_description, tile_caption};
