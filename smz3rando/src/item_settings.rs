use serde_derive::{Deserialize, Serialize};
use smz3rando_game::ItemType;

use crate::errors::GenerationError;

const ITEM_SETTINGS_JSON: &str = include_str!("../data/item_settings.json");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemSettingOption {
    pub display: String,
    pub items: Vec<ItemType>,
    #[serde(default)]
    pub early: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemSetting {
    pub key: String,
    pub options: Vec<ItemSettingOption>,
}

/// Read-only table of starting/early item choices, loaded once and passed to whoever needs it.
#[derive(Clone, Debug)]
pub struct ItemSettingOptions {
    settings: Vec<ItemSetting>,
}

impl ItemSettingOptions {
    pub fn load() -> Result<Self, GenerationError> {
        Self::from_json(ITEM_SETTINGS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let settings: Vec<ItemSetting> = serde_json::from_str(json).map_err(|e| {
            GenerationError::ConfigurationError(format!("invalid item settings table: {e}"))
        })?;
        for setting in &settings {
            match setting.options.first() {
                Some(o) if o.items.is_empty() && !o.early => {}
                _ => {
                    return Err(GenerationError::ConfigurationError(format!(
                        "item setting {} must start with a randomized option",
                        setting.key
                    )))
                }
            }
        }
        Ok(ItemSettingOptions { settings })
    }

    pub fn settings(&self) -> &[ItemSetting] {
        &self.settings
    }

    pub fn option(&self, key: &str, idx: usize) -> Result<&ItemSettingOption, GenerationError> {
        let setting = self
            .settings
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| {
                GenerationError::ConfigurationError(format!("unknown item setting {key}"))
            })?;
        setting.options.get(idx).ok_or_else(|| {
            GenerationError::ConfigurationError(format!(
                "item setting {key} has no option {idx} ({} available)",
                setting.options.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_loads() {
        let options = ItemSettingOptions::load().unwrap();
        assert!(!options.settings().is_empty());
        let sword = options.option("ProgressiveSword", 2).unwrap();
        assert_eq!(sword.items, vec![ItemType::ProgressiveSword; 2]);
        assert!(!sword.early);
        assert!(options.option("Boots", 2).unwrap().early);
    }

    #[test]
    fn unknown_keys_and_indices_are_rejected() {
        let options = ItemSettingOptions::load().unwrap();
        assert!(options.option("Boots", 99).is_err());
        assert!(options.option("Hovershoes", 0).is_err());
    }

    #[test]
    fn first_option_must_be_randomized() {
        let json = r#"[{"key": "Lamp", "options": [{"display": "Lamp", "items": ["Lamp"]}]}]"#;
        assert!(ItemSettingOptions::from_json(json).is_err());
    }
}
