use serde_derive::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::error::{Error, Result};

pub const DEFAULT_PREFIX: &str = "bx";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Prepended to every class name, e.g. `bx` in `bx--text-input`.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.into()
}

pub fn parse_settings(contents: &str) -> Result<Settings> {
    ron::de::from_str(contents).map_err(|err| Error::Settings(err.to_string()))
}

/// Reads the settings file at `path`. If the file is missing or cannot be
/// parsed, the error is logged and the default settings are used instead.
pub fn read_settings(path: impl AsRef<Path>) -> Settings {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!("Settings file `{}` does not exist", path.display());
        return Default::default();
    }

    fs::read_to_string(path)
        .map_err(|err| {
            Error::Settings(format!(
                "Could not read settings file `{}`: {}",
                path.display(),
                err
            ))
        })
        .and_then(|contents| {
            log::info!("Reading settings file `{}`", path.display());
            parse_settings(&contents).map_err(|err| {
                Error::Settings(format!(
                    "Could not parse settings file `{}`: {}",
                    path.display(),
                    err
                ))
            })
        })
        .map_err(|err| log::error!("{}", err))
        .unwrap_or_default()
}

pub fn default_settings_str() -> Result<String> {
    ron::ser::to_string_pretty(&Settings::default(), Default::default())
        .map_err(|err| Error::Settings(err.to_string()))
}

pub fn create_default_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_settings_str()?)?;
    Ok(())
}
