use crate::is_default;

/// One stat bound for a naming rule, inclusive on both ends.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StatStringCondition {
    pub stat: String,
    pub min: i32,
    pub max: i32,
}

impl Default for StatStringCondition {
    fn default() -> Self {
        Self {
            stat: String::new(),
            min: 0,
            max: 255,
        }
    }
}

/// A soldier-name decoration: the string is appended when every condition is
/// met. Rules are evaluated in order; a multi-character match ends the search,
/// single-character matches accumulate.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StatString {
    pub string: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub conditions: Vec<StatStringCondition>,
}

/// The stat snapshot the naming rules read.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SoldierStats {
    pub tu: i32,
    pub stamina: i32,
    pub health: i32,
    pub bravery: i32,
    pub reactions: i32,
    pub firing: i32,
    pub throwing: i32,
    pub strength: i32,
    pub melee: i32,
    pub psi_strength: i32,
    pub psi_skill: i32,
}

impl SoldierStats {
    pub fn stat(&self, name: &str) -> Option<i32> {
        match name {
            "tu" => Some(self.tu),
            "stamina" => Some(self.stamina),
            "health" => Some(self.health),
            "bravery" => Some(self.bravery),
            "reactions" => Some(self.reactions),
            "firing" => Some(self.firing),
            "throwing" => Some(self.throwing),
            "strength" => Some(self.strength),
            "melee" => Some(self.melee),
            "psiStrength" => Some(self.psi_strength),
            "psiSkill" => Some(self.psi_skill),
            _ => None,
        }
    }
}

/// Walks the rules in order and builds the decoration for `stats`.
/// Psi-strength conditions only count once psi skill is revealed, unless
/// `psi_strength_eval` grants access to the hidden stat.
pub fn calc_stat_string(
    stats: &SoldierStats,
    rules: &[StatString],
    psi_strength_eval: bool,
) -> String {
    let mut out = String::new();
    for rule in rules {
        if rule.conditions.is_empty() {
            continue;
        }
        let met = rule
            .conditions
            .iter()
            .filter(|condition| {
                let Some(value) = stats.stat(&condition.stat) else {
                    return false;
                };
                let psi_visible = condition.stat != "psiStrength"
                    || stats.psi_skill > 0
                    || psi_strength_eval;
                value >= condition.min && value <= condition.max && psi_visible
            })
            .count();
        if met == rule.conditions.len() {
            out.push_str(&rule.string);
            if rule.string.chars().count() > 1 {
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(string: &str, stat: &str, min: i32, max: i32) -> StatString {
        StatString {
            string: string.to_string(),
            conditions: vec![StatStringCondition {
                stat: stat.to_string(),
                min,
                max,
            }],
        }
    }

    #[test]
    fn single_char_rules_accumulate() {
        let stats = SoldierStats {
            firing: 70,
            strength: 45,
            ..Default::default()
        };
        let rules = [rule("f", "firing", 60, 255), rule("s", "strength", 40, 255)];
        assert_eq!(calc_stat_string(&stats, &rules, false), "fs");
    }

    #[test]
    fn multi_char_rule_ends_the_search() {
        let stats = SoldierStats {
            firing: 70,
            strength: 45,
            ..Default::default()
        };
        let rules = [
            rule("Sniper", "firing", 60, 255),
            rule("s", "strength", 40, 255),
        ];
        assert_eq!(calc_stat_string(&stats, &rules, false), "Sniper");
    }

    #[test]
    fn all_conditions_must_hold() {
        let stats = SoldierStats {
            firing: 70,
            reactions: 10,
            ..Default::default()
        };
        let mut rule = rule("Elite", "firing", 60, 255);
        rule.conditions.push(StatStringCondition {
            stat: "reactions".to_string(),
            min: 50,
            max: 255,
        });
        assert_eq!(calc_stat_string(&stats, &[rule], false), "");
    }

    #[test]
    fn psi_strength_hidden_until_skill_revealed() {
        let stats = SoldierStats {
            psi_strength: 90,
            psi_skill: 0,
            ..Default::default()
        };
        let rules = [rule("Psi", "psiStrength", 80, 255)];
        assert_eq!(calc_stat_string(&stats, &rules, false), "");
        assert_eq!(calc_stat_string(&stats, &rules, true), "Psi");
        let revealed = SoldierStats {
            psi_skill: 20,
            ..stats
        };
        assert_eq!(calc_stat_string(&revealed, &rules, false), "Psi");
    }

    #[test]
    fn unknown_stat_never_matches() {
        let stats = SoldierStats::default();
        let rules = [rule("x", "charisma", 0, 255)];
        assert_eq!(calc_stat_string(&stats, &rules, false), "");
    }
}
