pub mod keybindings;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::core::state::settings::Settings;
use crate::utils;

pub use keybindings::{Action, KeyBindings};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    /// Startup appearance; nothing is persisted back, so these are also what
    /// a reload reverts to.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config: Config = json5::from_str(CONFIG).map_err(|e| {
            config::ConfigError::Message(format!("Failed to load default config: {e}"))
        })?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
        ];
        // A user config is optional; the embedded defaults are complete.
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings under the user's (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let cfg: Config = json5::from_str(CONFIG).unwrap();
        assert!(!cfg.keybindings.is_empty());
    }

    #[test]
    fn test_default_quit_binding_present() {
        let cfg: Config = json5::from_str(CONFIG).unwrap();
        let action = cfg
            .keybindings
            .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())])
            .unwrap();
        assert_eq!(action, &Action::Quit);
    }
}
