/// One music track definition: where to find it in the audio catalog and how
/// loud to normalize it.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RuleMusic {
    pub name: String,
    /// Index into the audio catalog file, -1 when the track is a loose file.
    pub cat_index: i32,
    pub normalization: f64,
}

impl Default for RuleMusic {
    fn default() -> Self {
        Self {
            name: String::new(),
            cat_index: -1,
            normalization: 1.0,
        }
    }
}
