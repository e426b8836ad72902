//! Skirm battlescape data core
//!
//! Loads terrain object sets from the binary tileset format, resolves their
//! sprites and alternates, and evaluates damage rolls from data-driven rules.
//! Rendering, pathfinding and the turn loop live in the interface crates and
//! only consume the data produced here.

pub mod prelude;

pub mod rules;
pub mod sprite;
pub mod terrain;
pub mod vec3;

#[cfg(test)]
mod test;

/// Used to tell serde to not serialize default fields.
/// In combination with marking fields as default results in serde not serializing default fields
/// and setting as the default value fields if during deserialization the field is not present.
fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    t == &T::default()
}

/// Base directory for ruleset assets, overridable for packaged builds.
pub fn get_assets_dir() -> String {
    std::env::var("SKIRM_ASSETS").unwrap_or_else(|_| "assets".to_string())
}
