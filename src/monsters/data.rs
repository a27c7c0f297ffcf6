//! Built-in monster catalog data.

use super::types::{LootEntry, MonsterTemplate};

#[allow(clippy::too_many_arguments)]
fn template(
    monster_id: &str,
    name: &str,
    level: u32,
    monster_type: &str,
    hp: u32,
    damage: u32,
    defense: u32,
    xp: u64,
    gold: u64,
) -> MonsterTemplate {
    MonsterTemplate {
        monster_type: Some(monster_type.to_string()),
        base_hp: Some(hp),
        base_damage: Some(damage),
        base_defense: Some(defense),
        experience_reward: Some(xp),
        gold_reward: Some(gold),
        ..MonsterTemplate::new(monster_id, name, level)
    }
}

fn loot(item_name: &str, drop_chance: f64) -> LootEntry {
    LootEntry {
        item_name: item_name.to_string(),
        drop_chance,
    }
}

/// Returns every monster template shipped with the game, seven or more per tier.
pub fn builtin_templates() -> Vec<MonsterTemplate> {
    vec![
        // E: levels 1-10
        template("E_rat", "Sewer Rat", 1, "beast", 20, 3, 1, 8, 4),
        template("E_slime", "Green Slime", 2, "ooze", 30, 2, 2, 10, 5),
        template("E_bat", "Cave Bat", 3, "beast", 18, 4, 1, 10, 6),
        template("E_kobold", "Kobold Scout", 5, "humanoid", 40, 5, 3, 15, 10),
        template("E_spider", "Giant Spider", 6, "beast", 45, 6, 2, 18, 9),
        template("E_zombie", "Shambling Zombie", 8, "undead", 60, 6, 4, 20, 12),
        MonsterTemplate {
            loot_table: Some(vec![loot("Goblin Ear", 0.5), loot("Rusty Dagger", 0.1)]),
            ..template("E_goblin", "Goblin Grunt", 9, "humanoid", 55, 7, 3, 22, 15)
        },
        // D: levels 11-20
        template("D_wolf", "Dire Wolf", 11, "beast", 80, 10, 4, 30, 18),
        template("D_skeleton", "Skeleton Warrior", 12, "undead", 90, 11, 6, 32, 20),
        template("D_bandit", "Road Bandit", 14, "humanoid", 95, 12, 5, 35, 30),
        template("D_harpy", "Harpy", 15, "beast", 85, 14, 3, 38, 22),
        template("D_hobgoblin", "Hobgoblin", 17, "humanoid", 110, 13, 7, 40, 28),
        template("D_ghoul", "Ghoul", 18, "undead", 120, 14, 6, 44, 26),
        MonsterTemplate {
            loot_table: Some(vec![loot("Orc Tusk", 0.4)]),
            ..template("D_orc", "Orc Raider", 20, "humanoid", 130, 16, 8, 50, 35)
        },
        // C: levels 21-30
        template("C_troll", "Cave Troll", 21, "giant", 200, 18, 10, 60, 40),
        template("C_wraith", "Wraith", 22, "undead", 150, 20, 8, 62, 38),
        template("C_lizardman", "Lizardman Spear", 24, "humanoid", 170, 19, 11, 65, 45),
        template("C_basilisk", "Basilisk", 26, "beast", 210, 22, 12, 70, 50),
        template("C_gargoyle", "Gargoyle", 27, "construct", 190, 21, 16, 72, 48),
        template("C_ogre", "Ogre Brute", 29, "giant", 260, 25, 12, 78, 55),
        MonsterTemplate {
            loot_table: Some(vec![loot("Mage Robe", 0.15), loot("Arcane Dust", 0.6)]),
            ..template("C_darkmage", "Dark Mage", 30, "humanoid", 160, 28, 8, 85, 60)
        },
        // B: levels 31-40
        template("B_goblin", "Goblin Warlord", 31, "humanoid", 280, 30, 14, 95, 70),
        template("B_minotaur", "Minotaur", 33, "giant", 340, 32, 16, 100, 75),
        template("B_wyvern", "Wyvern", 35, "dragon", 320, 35, 15, 110, 85),
        template("B_golem", "Stone Golem", 36, "construct", 400, 28, 24, 112, 80),
        template("B_vampire", "Vampire", 37, "undead", 300, 36, 14, 118, 95),
        template("B_naga", "Naga Siren", 38, "beast", 310, 34, 16, 120, 90),
        MonsterTemplate {
            loot_table: Some(vec![loot("Chimera Horn", 0.3)]),
            ..template("B_chimera", "Chimera", 40, "beast", 380, 38, 18, 130, 100)
        },
        // A: levels 41-50
        template("A_deathknight", "Death Knight", 41, "undead", 450, 42, 24, 150, 120),
        template("A_giant", "Frost Giant", 43, "giant", 520, 44, 22, 160, 125),
        template("A_lich", "Lich", 44, "undead", 400, 48, 18, 170, 140),
        template("A_hydra", "Hydra", 46, "dragon", 560, 45, 20, 180, 150),
        template("A_behemoth", "Behemoth", 47, "beast", 600, 46, 26, 185, 145),
        template("A_demon", "Pit Demon", 48, "demon", 500, 50, 22, 190, 160),
        MonsterTemplate {
            loot_table: Some(vec![loot("Titan Core", 0.2)]),
            ..template("A_titan", "Iron Titan", 50, "construct", 650, 48, 30, 200, 170)
        },
        // S: levels 51-60
        template("S_dragon", "Elder Dragon", 52, "dragon", 800, 60, 32, 260, 250),
        template("S_archlich", "Archlich", 53, "undead", 700, 64, 28, 270, 240),
        template("S_kraken", "Kraken", 55, "beast", 900, 58, 30, 280, 260),
        template("S_seraph", "Fallen Seraph", 56, "celestial", 750, 66, 30, 290, 270),
        template("S_phoenix", "Phoenix", 57, "beast", 720, 68, 26, 300, 280),
        template("S_demonlord", "Demon Lord", 59, "demon", 880, 70, 34, 320, 300),
        MonsterTemplate {
            loot_table: Some(vec![loot("Void Shard", 0.1), loot("Crown of Ruin", 0.02)]),
            ..template("S_worldeater", "World Eater", 60, "aberration", 1000, 75, 36, 350, 333)
        },
    ]
}
