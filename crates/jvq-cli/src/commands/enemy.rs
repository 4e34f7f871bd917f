//! Enemy command: one enemy resolved through every table it references.

use std::path::Path;

use anyhow::{Context, Result};
use jvq::entity::Spell;
use jvq::{EnemyProfile, EntityBuilder, ExtractConfig, JVQ_LAYOUT};
use strum::IntoEnumIterator;

use super::load_image;

pub fn run(rom: &Path, id: u8, json: bool, config: &ExtractConfig) -> Result<()> {
    let image = load_image(rom, config)?;
    let builder = EntityBuilder::new(&image, &JVQ_LAYOUT, config.clone());
    let profile = builder
        .enemy_profile(id)
        .with_context(|| format!("Failed to decode enemy {id:#04x}"))?;

    if json {
        println!("{}", profile.to_json()?);
    } else {
        print!("{}", format_profile(&profile));
    }
    Ok(())
}

/// Human readable profile listing
pub fn format_profile(profile: &EnemyProfile) -> String {
    let enemy = &profile.enemy;
    let mut lines = vec![
        format!(
            "Enemy {:#04x} {} [{}]",
            enemy.id,
            profile.name.trimmed(),
            profile.chapter
        ),
        format!(
            "  HP {} ({}..={})  CP {}  ATK {}  DEF {}  SPD {}",
            enemy.hp, enemy.min_hp, enemy.max_hp, enemy.cp, enemy.attack, enemy.defense, enemy.speed
        ),
        format!("  EXP {}  Money {}", enemy.experience, enemy.money),
        format!(
            "  Escape {}  Actions/turn {}  Evasion {:#04x}",
            if enemy.escapable { "yes" } else { "no" },
            enemy.actions_per_turn(),
            enemy.evasion.correction()
        ),
    ];

    let spells: Vec<String> = Spell::iter()
        .map(|spell| format!("{spell} {}%", enemy.immunities.rate(spell)))
        .collect();
    lines.push(format!("  Spells: {}", spells.join("  ")));

    let elements = &enemy.elements;
    lines.push(format!(
        "  Elements: 地震 {}  火炎 {}  水撃・氷結 {}  電撃 {}  爆発 {}",
        elements.earthquake,
        elements.fire,
        elements.water_ice,
        elements.lightning,
        elements.explosion
    ));
    for (label, debuff) in [
        ("マフウジ", &enemy.seal),
        ("ララバイ", &enemy.lullaby),
        ("パラパ", &enemy.paralysis),
    ] {
        let turns = debuff
            .duration
            .map_or_else(|| "-".to_string(), |duration| duration.to_string());
        lines.push(format!("  {label} {} turns {turns}", debuff.resistance));
    }

    lines.push(format!("  Action pattern {}:", profile.action_pattern.id));
    for action in &profile.actions {
        lines.push(format!(
            "    {:#04x} {}  {}",
            action.id,
            action.name.trimmed(),
            action.probability
        ));
    }

    let items: Vec<&str> = profile.drop_items.iter().map(|item| item.trimmed()).collect();
    lines.push(format!(
        "  Drops: {}  {}",
        if items.is_empty() { "-".to_string() } else { items.join(", ") },
        profile.item_drop.drop_chance().label()
    ));
    if let Some(note) = profile.note {
        lines.push(format!("  Note: {note}"));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
