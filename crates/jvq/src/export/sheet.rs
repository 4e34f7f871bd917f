//! Sheet layouts rendered from extracted game data

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::table::{Cell, Table};
use crate::data::{GameData, MAX_ACTIONS_PER_ENEMY};
use crate::entity::{DebuffProfile, DropChance, Enemy, Spell};
use crate::reference::{self, chapter_of};

/// Report sheets, one table each
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Sheet {
    Characters,
    Enemies,
    Maps,
    WorldMap,
    GroupPatterns,
}

impl Sheet {
    /// Sheet caption used in the report
    pub fn title(&self) -> &'static str {
        match self {
            Self::Characters => "キャラクター",
            Self::Enemies => "敵",
            Self::Maps => "マップ",
            Self::WorldMap => "ワールドマップ",
            Self::GroupPatterns => "敵グループパターン",
        }
    }

    pub fn table(&self, data: &GameData) -> Table {
        match self {
            Self::Characters => characters_table(data),
            Self::Enemies => enemies_table(data),
            Self::Maps => maps_table(data),
            Self::WorldMap => world_map_table(data),
            Self::GroupPatterns => group_patterns_table(data),
        }
    }
}

pub fn characters_table(data: &GameData) -> Table {
    let mut table = Table::new([
        "キャラクター名",
        "最大レベル",
        "レベル",
        "最大命",
        "最大超力",
        "攻撃",
        "守備",
        "スピード",
        "天の守り",
        "芯の強さ",
        "頭の良さ",
        "前レベルからの必要経験値",
        "累積必要経験値",
    ]);
    for character in &data.characters {
        for level in &character.levels {
            table.push(vec![
                character.character.display_name().into(),
                character.max_level.into(),
                level.level.into(),
                level.hp.into(),
                level.cp.into(),
                level.attack.into(),
                level.defense.into(),
                level.speed.into(),
                level.divine_protection.into(),
                level.willpower.into(),
                level.intelligence.into(),
                level.experience_from_previous.into(),
                level.accumulated_experience.into(),
            ]);
        }
    }
    table
}

fn enemy_columns() -> Vec<String> {
    let mut columns: Vec<String> = [
        "敵ID", "敵名前", "初出", "基礎命", "最小命", "最大命", "超力", "攻撃", "防御",
        "スピード", "経験値", "獲得金", "逃走", "行動回数", "回避補正",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    for spell in [Spell::Mihagito, Spell::Kurusu, Spell::Beto] {
        columns.push(format!("{spell}きく率"));
    }
    for element in ["地震系", "火炎系", "水撃系・氷結系", "電撃系", "爆発系"] {
        columns.push(format!("{element}超力きく率"));
    }
    for debuff in ["マフウジ", "ララバイ", "パラパ"] {
        columns.push(format!("{debuff}きく率"));
        columns.push(format!("{debuff}有効ターン数"));
    }
    for n in 1..=MAX_ACTIONS_PER_ENEMY {
        columns.push(format!("敵行動{n}"));
        columns.push(format!("敵行動{n}_確率"));
    }
    columns.extend(
        ["ドロップアイテム1", "ドロップアイテム2", "ドロップアイテム確率", "備考"]
            .into_iter()
            .map(String::from),
    );
    columns
}

fn debuff_cells(profile: &DebuffProfile) -> [Cell; 2] {
    let duration = profile
        .duration
        .map_or_else(Cell::dash, |duration| duration.to_string().into());
    [profile.resistance.to_string().into(), duration]
}

fn name_cell(name: Option<&str>) -> Cell {
    name.map_or_else(Cell::dash, Cell::from)
}

fn enemy_row(data: &GameData, enemy: &Enemy) -> Vec<Cell> {
    let mut row = vec![
        enemy.id.into(),
        name_cell(data.names.enemy(enemy.id)),
        chapter_of(enemy.id).to_string().into(),
        enemy.hp.into(),
        enemy.min_hp.into(),
        enemy.max_hp.into(),
        enemy.cp.into(),
        enemy.attack.into(),
        enemy.defense.into(),
        enemy.speed.into(),
        enemy.experience.into(),
        enemy.money.into(),
        if enemy.escapable { "可能" } else { "不可" }.into(),
        enemy.actions_per_turn().into(),
        enemy.evasion.correction().into(),
    ];
    for spell in [Spell::Mihagito, Spell::Kurusu, Spell::Beto] {
        row.push(format!("{}%", enemy.immunities.rate(spell)).into());
    }
    let elements = &enemy.elements;
    for resistance in [
        elements.earthquake,
        elements.fire,
        elements.water_ice,
        elements.lightning,
        elements.explosion,
    ] {
        row.push(resistance.to_string().into());
    }
    for profile in [&enemy.seal, &enemy.lullaby, &enemy.paralysis] {
        row.extend(debuff_cells(profile));
    }

    let actions = data.ranked_actions(enemy);
    for slot in 0..MAX_ACTIONS_PER_ENEMY {
        match actions.get(slot) {
            Some(&(action_id, probability)) => {
                row.push(name_cell(data.names.action(action_id)));
                row.push(probability.to_string().into());
            }
            None => row.extend([Cell::dash(), Cell::dash()]),
        }
    }

    match data.item_drops.get(&enemy.item_drop_pattern_id) {
        Some(drop) => {
            let mut items = drop.items();
            for _ in 0..2 {
                row.push(items.next().map_or_else(Cell::dash, |id| name_cell(data.names.item(id))));
            }
            row.push(drop.drop_chance().label().into());
        }
        None => row.extend([Cell::dash(), Cell::dash(), DropChance::None.label().into()]),
    }
    row.push(name_cell(reference::enemy_note(enemy.id)));
    row
}

/// Enemies ordered by the chapter they first appear in, then by id
pub fn enemies_table(data: &GameData) -> Table {
    let mut enemies: Vec<&Enemy> = data.enemies.iter().collect();
    enemies.sort_by_key(|enemy| (chapter_of(enemy.id), enemy.id));

    let mut table = Table::new(enemy_columns());
    for enemy in enemies {
        table.push(enemy_row(data, enemy));
    }
    table
}

pub fn maps_table(data: &GameData) -> Table {
    let mut table = Table::new([
        "マップID",
        "マップ説明",
        "敵グループパターンリストID",
        "敵エンカウント確率",
    ]);
    for map in &data.maps {
        let rate = data
            .encounter_rate(map)
            .map_or_else(Cell::dash, |rate| rate.label().into());
        table.push(vec![
            map.id.into(),
            reference::map_description(map.id).into(),
            map.group_pattern_list_id.into(),
            rate,
        ]);
    }
    table
}

pub fn world_map_table(data: &GameData) -> Table {
    let mut table = Table::new(["マップ説明・マス説明", "敵エンカウント確率"]);
    for tile in &data.world_map_tiles {
        table.push(vec![
            tile.caption.into(),
            tile.encounter_rate().label().into(),
        ]);
    }
    table
}

pub fn group_patterns_table(data: &GameData) -> Table {
    let mut columns = vec![
        "敵グループパターンリストID".to_string(),
        "敵グループパターンID".to_string(),
        "敵グループパターンリスト内確率".to_string(),
        "敵合計数".to_string(),
        "グループ数".to_string(),
    ];
    for n in 1..=3 {
        columns.push(format!("グループ{n}敵名前"));
        columns.push(format!("グループ{n}敵数"));
    }
    let width = columns.len();
    let mut table = Table::new(columns);

    for list in &data.group_pattern_lists {
        let rates = list.pattern_rates();
        if rates.is_empty() {
            let mut row = vec![Cell::from(list.id)];
            row.resize(width, Cell::dash());
            table.push(row);
            continue;
        }
        for (pattern_id, rate) in rates {
            let mut row = vec![list.id.into(), pattern_id.into(), rate.to_string().into()];
            match data.group_patterns.get(&pattern_id) {
                Some(pattern) => {
                    row.push(pattern.enemy_group_size().into());
                    row.push(pattern.group_count().into());
                    for group in &pattern.groups {
                        match group.enemy_id {
                            Some(enemy_id) => {
                                row.push(name_cell(data.names.enemy(enemy_id)));
                                row.push(group.size.into());
                            }
                            None => row.extend([Cell::dash(), Cell::dash()]),
                        }
                    }
                }
                None => row.resize(width, Cell::dash()),
            }
            table.push(row);
        }
    }
    table
}
