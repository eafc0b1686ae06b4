use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml in the store directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Letter bindings for the four keyboard commands. Case-insensitive;
/// invalid or colliding bindings fall back to the defaults as a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_fast_entry")]
    pub fast_entry: char,
    #[serde(default = "default_edit")]
    pub edit: char,
    #[serde(default = "default_next")]
    pub next: char,
    #[serde(default = "default_previous")]
    pub previous: char,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            fast_entry: default_fast_entry(),
            edit: default_edit(),
            next: default_next(),
            previous: default_previous(),
        }
    }
}

fn default_fast_entry() -> char {
    'n'
}
fn default_edit() -> char {
    'e'
}
fn default_next() -> char {
    'j'
}
fn default_previous() -> char {
    'k'
}

impl KeysConfig {
    /// Bindings normalized to lowercase; if any binding is not an ASCII
    /// letter or two commands collide, the whole table reverts to defaults.
    pub fn validated(&self) -> KeysConfig {
        let keys = [
            self.fast_entry.to_ascii_lowercase(),
            self.edit.to_ascii_lowercase(),
            self.next.to_ascii_lowercase(),
            self.previous.to_ascii_lowercase(),
        ];
        let all_letters = keys.iter().all(|c| c.is_ascii_lowercase());
        let distinct = (1..keys.len()).all(|i| !keys[..i].contains(&keys[i]));
        if all_letters && distinct {
            KeysConfig {
                fast_entry: keys[0],
                edit: keys[1],
                next: keys[2],
                previous: keys[3],
            }
        } else {
            KeysConfig::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides (e.g. focused = "#FB4196")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
