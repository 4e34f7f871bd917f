pub mod layout;
mod buffer;
mod loader;

#[cfg(test)]
pub(crate) mod mock;

pub use buffer::{ImageBuffer, ReadImage};
pub use layout::{CharacterOffsets, ImageLayout, JVQ_LAYOUT, record};
pub use loader::*;
