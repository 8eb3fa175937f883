use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};
use smz3rando_game::{ItemType, LocationId};
use smz3rando_logic::LogicConfig;
use strum_macros::{EnumString, VariantNames};

use crate::errors::GenerationError;
use crate::item_settings::ItemSettingOptions;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, VariantNames,
)]
pub enum GameMode {
    #[default]
    Normal,
    Multiworld,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, VariantNames,
)]
pub enum KeysanityMode {
    #[default]
    None,
    Zelda,
    SuperMetroid,
    Both,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, VariantNames,
)]
pub enum ItemPlacementRule {
    #[default]
    Anywhere,
    DungeonsAndMetroid,
    CrystalDungeonsAndMetroid,
    OppositeGame,
    SameGame,
}

/// What a player asked to find at a particular location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationItemPreference {
    Any,
    Progression,
    Junk,
    Item(ItemType),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game_mode: GameMode,
    pub keysanity_mode: KeysanityMode,
    pub race: bool,
    pub item_placement_rule: ItemPlacementRule,
    pub ganons_tower_crystal_count: usize,
    pub ganon_crystal_count: usize,
    pub open_pyramid: bool,
    pub tourian_boss_count: usize,
    /// Item setting key to chosen option index.
    pub item_options: BTreeMap<String, usize>,
    /// Additional starting items, on top of those granted by `item_options`.
    pub starting_items: BTreeMap<ItemType, usize>,
    pub location_items: BTreeMap<LocationId, LocationItemPreference>,
    pub logic_config: LogicConfig,
    pub player_name: String,
    pub randomized_bottles: bool,
    pub max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game_mode: GameMode::Normal,
            keysanity_mode: KeysanityMode::None,
            race: false,
            item_placement_rule: ItemPlacementRule::Anywhere,
            ganons_tower_crystal_count: 7,
            ganon_crystal_count: 7,
            open_pyramid: false,
            tourian_boss_count: 4,
            item_options: BTreeMap::new(),
            starting_items: BTreeMap::new(),
            location_items: BTreeMap::new(),
            logic_config: LogicConfig::default(),
            player_name: "Player".to_string(),
            randomized_bottles: false,
            max_attempts: 10,
        }
    }
}

impl Config {
    pub fn single_world(&self) -> bool {
        self.game_mode == GameMode::Normal
    }

    pub fn multi_world(&self) -> bool {
        self.game_mode == GameMode::Multiworld
    }

    pub fn zelda_keysanity(&self) -> bool {
        matches!(self.keysanity_mode, KeysanityMode::Zelda | KeysanityMode::Both)
    }

    pub fn metroid_keysanity(&self) -> bool {
        matches!(
            self.keysanity_mode,
            KeysanityMode::SuperMetroid | KeysanityMode::Both
        )
    }

    pub fn keysanity(&self) -> bool {
        self.keysanity_mode != KeysanityMode::None
    }

    /// Items the player begins with, from the chosen item options plus explicit starting items.
    pub fn get_starting_items(
        &self,
        options: &ItemSettingOptions,
    ) -> Result<Vec<ItemType>, GenerationError> {
        let mut items = vec![];
        for (key, &idx) in &self.item_options {
            let option = options.option(key, idx)?;
            if !option.early {
                items.extend(option.items.iter().copied());
            }
        }
        for (&item, &count) in &self.starting_items {
            items.extend(std::iter::repeat(item).take(count));
        }
        Ok(items)
    }

    /// Items which must be placed in a location reachable with no items.
    pub fn get_early_items(
        &self,
        options: &ItemSettingOptions,
    ) -> Result<Vec<ItemType>, GenerationError> {
        let mut items = vec![];
        for (key, &idx) in &self.item_options {
            let option = options.option(key, idx)?;
            if option.early {
                items.extend(option.items.iter().copied());
            }
        }
        Ok(items)
    }

    pub fn validate(&self, options: &ItemSettingOptions) -> Result<(), GenerationError> {
        let err = |msg: String| Err(GenerationError::ConfigurationError(msg));
        if self.ganons_tower_crystal_count > 7 {
            return err(format!(
                "Ganon's Tower requires {} crystals but only 7 exist",
                self.ganons_tower_crystal_count
            ));
        }
        if self.ganon_crystal_count > 7 {
            return err(format!(
                "Ganon requires {} crystals but only 7 exist",
                self.ganon_crystal_count
            ));
        }
        if self.tourian_boss_count > 4 {
            return err(format!(
                "Tourian requires {} bosses but only 4 exist",
                self.tourian_boss_count
            ));
        }
        if self.max_attempts == 0 {
            return err("max_attempts must be at least 1".to_string());
        }
        let starting = self.get_starting_items(options)?;
        let medallions = starting.iter().filter(|t| t.is_medallion()).count();
        if medallions > 3 {
            return err(format!(
                "{medallions} starting medallions requested but only 3 exist"
            ));
        }
        for item in self.get_early_items(options)? {
            if starting.contains(&item) {
                return err(format!("{item:?} is both a starting item and an early item"));
            }
        }
        Ok(())
    }
}

/// Checks that the per-player configs can be generated together.
pub fn validate_configs(
    configs: &[Config],
    options: &ItemSettingOptions,
) -> Result<(), GenerationError> {
    let Some(first) = configs.first() else {
        return Err(GenerationError::ConfigurationError(
            "at least one player is required".to_string(),
        ));
    };
    if first.single_world() && configs.len() > 1 {
        return Err(GenerationError::ConfigurationError(format!(
            "{} players given for a single world game",
            configs.len()
        )));
    }
    for config in configs {
        if config.game_mode != first.game_mode {
            return Err(GenerationError::ConfigurationError(format!(
                "player {} uses game mode {:?} but player {} uses {:?}",
                config.player_name, config.game_mode, first.player_name, first.game_mode
            )));
        }
        config.validate(options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keysanity_modes() {
        let mut config = Config::default();
        assert!(!config.keysanity());
        config.keysanity_mode = KeysanityMode::SuperMetroid;
        assert!(config.metroid_keysanity());
        assert!(!config.zelda_keysanity());
        config.keysanity_mode = KeysanityMode::Both;
        assert!(config.metroid_keysanity() && config.zelda_keysanity());
    }

    #[test]
    fn rejects_impossible_crystal_goal() {
        let options = ItemSettingOptions::load().unwrap();
        let config = Config {
            ganons_tower_crystal_count: 8,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(&options),
            Err(GenerationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn rejects_mixed_game_modes() {
        let options = ItemSettingOptions::load().unwrap();
        let a = Config {
            game_mode: GameMode::Multiworld,
            ..Config::default()
        };
        let b = Config::default();
        assert!(validate_configs(&[a, b], &options).is_err());
        assert!(validate_configs(&[], &options).is_err());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let mut config = Config::default();
        config
            .location_items
            .insert(256 + 14, LocationItemPreference::Item(ItemType::ProgressiveSword));
        config.item_options.insert("Boots".to_string(), 1);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"keysanity_mode": "Zelda"}"#).unwrap();
        assert!(config.zelda_keysanity());
        assert_eq!(config.ganons_tower_crystal_count, 7);
        assert!(config.logic_config.quarter_magic);
    }
}
