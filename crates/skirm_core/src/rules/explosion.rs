use crate::is_default;

/// The legacy explosion sheet ships with 8 built-in frames; frames a mod
/// appends land after every other mod's, so configured indices past the
/// built-ins must be shifted by the mod's offset.
const LEGACY_SHEET: &str = "X1.PCK";
const LEGACY_BUILTIN_FRAMES: i32 = 8;

/// Visual parameters for playing back an explosion. Data only, the animation
/// itself runs in the interface layer.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RuleExplosion {
    pub name: String,
    pub sprite_sheet: String,
    pub start: i32,
    pub end: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub animation_speed: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub density: i32,
}

impl RuleExplosion {
    /// Applies the caller's mod frame offset to configured indices that point
    /// past the legacy sheet's built-in frames.
    pub fn resolve(mut self, mod_index: i32) -> Self {
        if self.sprite_sheet == LEGACY_SHEET {
            if self.start > LEGACY_BUILTIN_FRAMES {
                self.start += mod_index;
            }
            if self.end > LEGACY_BUILTIN_FRAMES {
                self.end += mod_index;
            }
        }
        self
    }
}
