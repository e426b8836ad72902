use rand::Rng;

use crate::is_default;

/// How a nominal power value is turned into an actual damage roll.
#[derive(
    serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum RandomType {
    /// Resolved per resist type and damage settings at roll time.
    #[default]
    Default,
    /// Uniform in [0%, 200%] of power.
    Ufo,
    /// Uniform in [50%, 150%] of power.
    Tftd,
    /// Exactly power.
    Flat,
    /// Uniform in [5, 10], power is ignored.
    Fire,
    /// Always 0.
    None,
}

/// The damage category the receiving armor resists against.
#[derive(
    serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum ResistType {
    #[default]
    None,
    Ap,
    In,
    He,
    Laser,
    Plasma,
    Stun,
    Melee,
    Acid,
    Smoke,
}

impl ResistType {
    pub fn from_name(name: &str) -> Option<ResistType> {
        match name {
            "none" => Some(ResistType::None),
            "ap" => Some(ResistType::Ap),
            "in" => Some(ResistType::In),
            "he" => Some(ResistType::He),
            "laser" => Some(ResistType::Laser),
            "plasma" => Some(ResistType::Plasma),
            "stun" => Some(ResistType::Stun),
            "melee" => Some(ResistType::Melee),
            "acid" => Some(ResistType::Acid),
            "smoke" => Some(ResistType::Smoke),
            _ => None,
        }
    }
}

/// Damage-mode configuration, passed explicitly through the call chain.
#[derive(
    serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq,
)]
#[serde(default)]
pub struct DamageSettings {
    /// Use the [50%, 150%] spread for every default-policy roll.
    pub tftd_damage: bool,
}

/// Per-damage-type combat configuration: randomization policy, area radius,
/// conversion ratios and the fire/smoke side-effect chances.
/// Immutable after load, every missing field falls back to its default.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RuleDamageType {
    pub resist_type: ResistType,

    #[serde(default, skip_serializing_if = "is_default")]
    pub random_type: RandomType,

    /// 0 is direct single-target damage, positive is a fixed blast radius,
    /// negative asks for a radius computed from power.
    #[serde(default, skip_serializing_if = "is_default")]
    pub fix_radius: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub fire_blast_calc: bool,

    #[serde(default, skip_serializing_if = "is_default")]
    pub ignore_armor: bool,

    pub to_unit: f64,
    pub to_item: f64,
    pub to_tile: f64,
    pub to_stun: f64,
    pub to_radius: f64,

    #[serde(default, skip_serializing_if = "is_default")]
    pub fire_chance: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub smoke_chance: i32,
}

impl Default for RuleDamageType {
    fn default() -> Self {
        Self {
            resist_type: ResistType::default(),
            random_type: RandomType::default(),
            fix_radius: 0,
            fire_blast_calc: false,
            ignore_armor: false,
            to_unit: 1.0,
            to_item: 0.0,
            to_tile: 0.5,
            to_stun: 0.25,
            to_radius: 0.5,
            fire_chance: 0,
            smoke_chance: 0,
        }
    }
}

impl RuleDamageType {
    /// Rolls the actual damage for a hit with nominal `power`.
    /// Deterministic given a fixed generator state. `power` is expected to be
    /// non-negative for the power-scaled policies.
    pub fn random_damage(
        &self,
        power: i32,
        rng: &mut impl Rng,
        settings: &DamageSettings,
    ) -> i32 {
        let random_type = match self.random_type {
            RandomType::Default => {
                if self.resist_type == ResistType::In {
                    RandomType::Fire
                } else if self.resist_type == ResistType::He || settings.tftd_damage {
                    RandomType::Tftd
                } else {
                    RandomType::Ufo
                }
            }
            other => other,
        };
        let spread = match random_type {
            RandomType::Ufo => 100,
            RandomType::Tftd => 50,
            RandomType::Flat => 0,
            RandomType::Fire => return rng.gen_range(5..=10),
            RandomType::None => return 0,
            RandomType::Default => unreachable!("default policy resolved above"),
        };
        let min = power * (100 - spread) / 100;
        let max = power * (100 + spread) / 100;
        rng.gen_range(min..=max)
    }

    /// Whether this damage hits a single target instead of an area.
    /// Exact equality: a negative radius still counts as an area effect.
    pub fn is_direct(&self) -> bool {
        self.fix_radius == 0
    }

    /// The blast radius for a hit with nominal `power`.
    pub fn radius(&self, power: i32) -> i32 {
        if self.fix_radius < 0 {
            (power as f64 * self.to_radius) as i32
        } else {
            self.fix_radius
        }
    }

    pub fn unit_damage(&self, power: i32) -> i32 {
        (power as f64 * self.to_unit) as i32
    }

    pub fn item_damage(&self, power: i32) -> i32 {
        (power as f64 * self.to_item) as i32
    }

    pub fn tile_damage(&self, power: i32) -> i32 {
        (power as f64 * self.to_tile) as i32
    }

    pub fn stun_damage(&self, power: i32) -> i32 {
        (power as f64 * self.to_stun) as i32
    }

    /// Rolls whether the hit sets the tile on fire.
    pub fn roll_fire(&self, rng: &mut impl Rng) -> bool {
        self.fire_chance > 0 && rng.gen_range(0..100) < self.fire_chance
    }

    /// Rolls whether the hit produces smoke.
    pub fn roll_smoke(&self, rng: &mut impl Rng) -> bool {
        self.smoke_chance > 0 && rng.gen_range(0..100) < self.smoke_chance
    }
}
