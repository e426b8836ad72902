use crate::is_default;

/// Reskin of one interface state: which palette, backdrop and text colors the
/// state draws with. Data only, consumed by the interface layer.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StateSkin {
    pub state: String,
    pub palette: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub background: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub text_color: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub highlight_color: i32,
}
