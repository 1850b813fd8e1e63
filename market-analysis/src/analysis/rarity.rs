//! Skill rarity ranking
//!
//! Orders the fixed skill index by descending rarity score. The sort is
//! stable, so skills with equal scores keep their declaration order.

use crate::model::SkillRarity;

/// Rank skills by scarcity, rarest first
pub fn skill_rarity_ranking(mut index: Vec<SkillRarity>) -> Vec<SkillRarity> {
    index.sort_by(|a, b| b.rarity_score.cmp(&a.rarity_score));
    index
}

/// Block-character bar for a rarity score, e.g. `████████░░` for 8/10
pub fn rarity_bar(score: u32) -> String {
    let filled = score.min(10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::skill_rarity_index;

    #[test]
    fn test_ranking_is_descending_and_stable() {
        let ranked = skill_rarity_ranking(skill_rarity_index());

        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].skill, "Model Context Protocol (MCP)");
        assert_eq!(ranked[0].rarity_score, 10);
        assert_eq!(ranked[7].rarity_score, 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].rarity_score >= pair[1].rarity_score);
        }

        // The two score-8 entries keep their declaration order.
        assert_eq!(ranked[1].skill, "AI/ML + Data Analytics (combined)");
        assert_eq!(
            ranked[2].skill,
            "CompTIA Quad-Stack (A+, Data+, Cloud+, Network+)"
        );
    }

    #[test]
    fn test_rarity_bar() {
        assert_eq!(rarity_bar(10), "██████████");
        assert_eq!(rarity_bar(7), "███████░░░");
        assert_eq!(rarity_bar(0), "░░░░░░░░░░");
    }
}
