use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::LutError;

pub trait Config: Sized + Default + Serialize + for<'a> Deserialize<'a> {
    fn get_path() -> &'static str;

    fn validate(&self) -> Result<(), LutError> {
        Ok(())
    }

    fn load() -> anyhow::Result<Self> {
        load_config(Path::new(Self::get_path()))
    }
}

/// Reads a RON config, falling back to defaults when the file doesn't exist.
/// An empty file also counts as defaults.
pub fn load_config<T: Config>(path: &Path) -> anyhow::Result<T> {
    let config = if path.exists() {
        let config_data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        if config_data.trim().is_empty() {
            T::default()
        } else {
            ron::from_str(&config_data)
                .with_context(|| format!("Failed to parse config from {:?}", path))?
        }
    } else {
        log::warn!("No config found at {:?}, using defaults", path);
        T::default()
    };

    config
        .validate()
        .with_context(|| format!("Invalid config in {:?}", path))?;

    Ok(config)
}
