use std::fmt::Write;

use super::types::RaidResult;

/// Renders a raid result as a chat message.
pub fn create_raid_summary(result: &RaidResult) -> String {
    let mut summary = String::from("🗡️ **Raid Summary** 🗡️\n");

    let _ = writeln!(summary, "❤️ **Health Lost:** {}", result.damage_taken);

    summary.push_str("\n**Monsters Defeated:**\n");
    for monster_id in &result.monsters_defeated {
        let _ = writeln!(summary, "✅ {}", monster_id);
    }

    if !result.monsters_defeated_by.is_empty() {
        summary.push_str("\n**Monsters that Defeated You:**\n");
        for monster_id in &result.monsters_defeated_by {
            let _ = writeln!(summary, "❌ {}", monster_id);
        }
    }

    summary.push_str("\n**Rewards:**\n");
    let _ = writeln!(summary, "💰 Gold: {}", result.total_rewards.gold);
    let _ = writeln!(summary, "✨ Experience: {}", result.total_rewards.experience);

    if !result.dropped_items.is_empty() {
        summary.push_str("\n**Items Lost:**\n");
        for dropped in &result.dropped_items {
            let _ = writeln!(summary, "🎒 {} ({})", dropped.item.name, dropped.slot);
        }
    }

    // A lost battle that leaves HP reads as a retreat
    summary.push_str(if result.raid_complete {
        "\n🏆 Raid Complete! 🏆"
    } else if result.player_survived {
        "\n⚠️ Raid Abandoned - Retreated safely"
    } else {
        "\n💀 Raid Failed - Player Defeated"
    });

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Item;
    use crate::combat::{BattleResult, Rewards};
    use crate::monsters::{Monster, MonsterTemplate, RarityTier};
    use crate::raid::{run_encounters, DroppedItem};
    use crate::Player;

    #[test]
    fn test_complete_summary() {
        let mut result = RaidResult::new();
        result.record_victory(BattleResult::victory("E_rat", Rewards::new(4, 8)));
        result.record_victory(BattleResult::victory("E_bat", Rewards::new(6, 10)));
        result.raid_complete = true;

        let text = create_raid_summary(&result);
        assert!(text.contains("✅ E_rat"));
        assert!(text.contains("✅ E_bat"));
        assert!(text.contains("💰 Gold: 10"));
        assert!(text.contains("✨ Experience: 18"));
        assert!(!text.contains("Monsters that Defeated You"));
        assert!(text.ends_with("🏆 Raid Complete! 🏆"));
    }

    #[test]
    fn test_defeat_summary_lists_killer_and_losses() {
        let mut result = RaidResult::new();
        result.record_defeat(BattleResult::defeat("B_golem", 28));
        result.player_survived = false;
        result.dropped_items.push(DroppedItem {
            slot: "weapon".to_string(),
            item: Item::new("Iron Sword", 9.0),
        });

        let text = create_raid_summary(&result);
        assert!(text.contains("❤️ **Health Lost:** 28"));
        assert!(text.contains("❌ B_golem"));
        assert!(text.contains("🎒 Iron Sword (weapon)"));
        assert!(text.ends_with("💀 Raid Failed - Player Defeated"));
    }

    #[test]
    fn test_retreat_summary() {
        let text = create_raid_summary(&RaidResult::new());
        assert!(text.ends_with("⚠️ Raid Abandoned - Retreated safely"));
    }

    #[test]
    fn test_loss_with_hp_left_reads_as_retreat() {
        let monsters: Vec<Monster> = ["D_wolf", "D_boar", "D_hawk"]
            .into_iter()
            .map(|id| {
                let template = MonsterTemplate {
                    base_damage: Some(5),
                    ..MonsterTemplate::new(id, id, 12)
                };
                Monster::from_template(&template, RarityTier::D)
            })
            .collect();
        let mut player = Player::new("p", "Wary");
        let mut wins = [true, false].into_iter();

        let result = run_encounters(&mut player, &monsters, |_, m| {
            if wins.next().unwrap_or(false) {
                BattleResult::victory(m.monster_id.clone(), Rewards::new(3, 3))
            } else {
                BattleResult::defeat(m.monster_id.clone(), m.damage)
            }
        });
        assert!(result.player_survived);
        assert!(!result.raid_complete);
        assert_eq!(player.current_hp, 95.0);

        let text = create_raid_summary(&result);
        assert!(text.contains("❌ D_boar"));
        assert!(text.ends_with("⚠️ Raid Abandoned - Retreated safely"));
        assert!(!text.contains("Raid Failed"));
    }
}
