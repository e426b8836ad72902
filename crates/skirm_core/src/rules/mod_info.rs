use crate::is_default;

/// Metadata describing a loaded mod: identity, authorship and how it stacks
/// with a master mod.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ModInfo {
    pub id: String,
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub author: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub description: String,

    /// Id of the master mod this one extends, if any.
    #[serde(default, skip_serializing_if = "is_default")]
    pub master: Option<String>,

    #[serde(default, skip_serializing_if = "is_default")]
    pub is_master: bool,

    /// How many resource index blocks the mod reserves for appended frames.
    pub reserved_space: i32,
}

impl Default for ModInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            version: "1.0".to_string(),
            author: String::new(),
            description: String::new(),
            master: None,
            is_master: false,
            reserved_space: 1,
        }
    }
}
