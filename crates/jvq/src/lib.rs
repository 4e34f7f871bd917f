//! # jvq
//!
//! Decoder for the program data of one fixed NES image revision.
//!
//! This crate provides:
//! - iNES loading with a PRG checksum check against the supported revision
//! - Codecs for the glyph text encoding, variable-magnitude stats, sentinel
//!   lists and bit-packed records
//! - Enemy action resolution into probability distributions
//! - An entity builder that decodes characters, enemies, drops, encounter
//!   tables and maps into [`GameData`]
//! - TSV and NDJSON report sheets

pub mod action;
pub mod builder;
pub mod codec;
pub mod config;
pub mod data;
pub mod entity;
pub mod error;
pub mod export;
pub mod image;
pub mod reference;

pub use action::{ActionDistribution, EnemyActionPattern, ResolvedAction, aggregate};
pub use builder::EntityBuilder;
pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use data::{EnemyProfile, ExtractFailure, GameData, NameTables, RankedAction, RecordKind};
pub use entity::{
    DropChance, EncounterRate, Enemy, EnemyGroupPattern, EnemyGroupPatternList, ItemDropPattern,
    MapRecord, Name, PlayerCharacter, PlayerCharacterLevel, PlayerCharacterTable, Ratio,
    WorldMapTile,
};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, JsonExporter, OutputFormat, Sheet, TsvExporter, render_sheet, write_sheet,
};
pub use image::{
    ChecksumReport, ImageBuffer, ImageLayout, JVQ_LAYOUT, ReadImage, load_prg_rom, read_prg_rom,
    verify_checksum,
};
pub use reference::Chapter;
