use crate::is_default;

/// One item placement inside a saved loadout.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    PartialEq,
    Eq,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(default)]
pub struct EquipmentLayoutItem {
    pub item: String,
    pub slot: String,
    pub slot_x: i32,
    pub slot_y: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub ammo_item: Option<String>,

    /// Turns until a primed grenade goes off, -1 when not primed.
    pub fuse_timer: i32,
}

impl Default for EquipmentLayoutItem {
    fn default() -> Self {
        Self {
            item: String::new(),
            slot: String::new(),
            slot_x: 0,
            slot_y: 0,
            ammo_item: None,
            fuse_timer: -1,
        }
    }
}

/// A named loadout a soldier can be equipped from in one step.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(default)]
pub struct EquipmentLayout {
    pub name: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub items: Vec<EquipmentLayoutItem>,
}
