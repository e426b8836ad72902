use std::collections::HashMap;
use std::fs::read_to_string;
use std::io::{self};

use ron::error::SpannedError;

use crate::get_assets_dir;

use super::*;

/// Used only in development, in release builds use `get_assets_dir`
pub const RULESET_PATH: &str = "assets/ruleset/";

/// Every data-driven rule of a loaded mod, one section per record kind.
/// Single-writer during load, read-only for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ruleset {
    pub info: ModInfo,
    pub settings: DamageSettings,
    pub damage_types: Vec<RuleDamageType>,
    pub explosions: HashMap<String, RuleExplosion>,
    pub music: HashMap<String, RuleMusic>,
    pub stat_strings: Vec<StatString>,
    pub skins: HashMap<String, StateSkin>,
    pub layouts: HashMap<String, EquipmentLayout>,
    pub routes: HashMap<String, Route>,
}

#[derive(Debug)]
pub enum RulesetLoadError {
    ReadingFile {
        error: io::Error,
        path: String,
        current_dir: String,
    },
    Parsing(SpannedError),
}

impl From<SpannedError> for RulesetLoadError {
    fn from(value: SpannedError) -> Self {
        Self::Parsing(value)
    }
}

fn read_file(path: &str) -> Result<String, RulesetLoadError> {
    read_to_string(path).map_err(|io_err| RulesetLoadError::ReadingFile {
        error: io_err,
        path: path.to_string(),
        current_dir: std::env::current_dir()
            .map(|dir| dir.to_string_lossy().to_string())
            .unwrap_or_default(),
    })
}

impl Ruleset {
    pub fn from_assets(mod_index: i32) -> Result<Self, RulesetLoadError> {
        Ruleset::from_assets_location(&format!("{}/ruleset", get_assets_dir()), mod_index)
    }

    /// Loads every section file under `base_path`. `mod_index` is the frame
    /// offset assigned to this mod, applied when resolving explosion sprites.
    pub fn from_assets_location(
        base_path: &str,
        mod_index: i32,
    ) -> Result<Self, RulesetLoadError> {
        let path = base_path.to_string() + "/metadata.ron";
        let info: ModInfo = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/settings.ron";
        let settings: DamageSettings = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/damage_types.ron";
        let damage_types: Vec<RuleDamageType> = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/explosions.ron";
        let explosions: Vec<RuleExplosion> = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/music.ron";
        let music: Vec<RuleMusic> = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/stat_strings.ron";
        let stat_strings: Vec<StatString> = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/skins.ron";
        let skins: Vec<StateSkin> = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/layouts.ron";
        let layouts: Vec<EquipmentLayout> = ron::from_str(&read_file(path.as_str())?)?;
        let path = base_path.to_string() + "/routes.ron";
        let routes: Vec<Route> = ron::from_str(&read_file(path.as_str())?)?;
        Ok(Self {
            info,
            settings,
            damage_types,
            explosions: explosions
                .into_iter()
                .map(|e| (e.name.clone(), e.resolve(mod_index)))
                .collect(),
            music: music.into_iter().map(|m| (m.name.clone(), m)).collect(),
            stat_strings,
            skins: skins.into_iter().map(|s| (s.state.clone(), s)).collect(),
            layouts: layouts.into_iter().map(|l| (l.name.clone(), l)).collect(),
            routes: routes.into_iter().map(|r| (r.name.clone(), r)).collect(),
        })
    }

    /// Writes every section back out, sorted for stable files.
    /// Used by tests and planned for an ingame ruleset editor.
    pub fn to_assets_location(&self, base_path: &str) -> io::Result<()> {
        let config = ron::ser::PrettyConfig::default()
            .compact_arrays(true)
            .depth_limit(2);

        let info_string = ron::ser::to_string_pretty(&self.info, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/metadata.ron", info_string)?;

        let settings_string =
            ron::ser::to_string_pretty(&self.settings, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/settings.ron", settings_string)?;

        let damage_string =
            ron::ser::to_string_pretty(&self.damage_types, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/damage_types.ron", damage_string)?;

        let mut explosions: Vec<RuleExplosion> = self.explosions.values().cloned().collect();
        explosions.sort_by(|a, b| a.name.cmp(&b.name));
        let explosions_string =
            ron::ser::to_string_pretty(&explosions, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/explosions.ron", explosions_string)?;

        let mut music: Vec<RuleMusic> = self.music.values().cloned().collect();
        music.sort_by(|a, b| a.name.cmp(&b.name));
        let music_string = ron::ser::to_string_pretty(&music, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/music.ron", music_string)?;

        let stat_strings_string =
            ron::ser::to_string_pretty(&self.stat_strings, config.clone()).unwrap();
        std::fs::write(
            base_path.to_string() + "/stat_strings.ron",
            stat_strings_string,
        )?;

        let mut skins: Vec<StateSkin> = self.skins.values().cloned().collect();
        skins.sort_by(|a, b| a.state.cmp(&b.state));
        let skins_string = ron::ser::to_string_pretty(&skins, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/skins.ron", skins_string)?;

        let mut layouts: Vec<EquipmentLayout> = self.layouts.values().cloned().collect();
        layouts.sort_by(|a, b| a.name.cmp(&b.name));
        let layouts_string = ron::ser::to_string_pretty(&layouts, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/layouts.ron", layouts_string)?;

        let mut routes: Vec<Route> = self.routes.values().cloned().collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));
        let routes_string = ron::ser::to_string_pretty(&routes, config.clone()).unwrap();
        std::fs::write(base_path.to_string() + "/routes.ron", routes_string)?;

        Ok(())
    }

    pub fn get_damage_type(&self, resist: ResistType) -> &RuleDamageType {
        match self
            .damage_types
            .iter()
            .find(|rule| rule.resist_type == resist)
        {
            Some(rule) => rule,
            None => panic!("no damage type for {:?}", resist),
        }
    }
}
