// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::layout::Layout;

/// The file the console looks for in the working directory when no config is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "chequer.json";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The rendered board, for people.
    Text,
    /// One JSON object per turn, for programs.
    Json,
}

impl Default for OutputFormat {
    fn default() -> OutputFormat {
        OutputFormat::Text
    }
}

/// Console settings. Every field is optional in the file; missing ones take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    pub output: OutputFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown layout `{0}`")]
    UnknownLayout(String),
}

impl Config {
    pub fn from_reader<R: Read>(reader: R) -> Result<Config, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        Config::from_reader(file)
    }

    /// Loads `chequer.json` from the working directory if there is one.
    pub fn load_default() -> Result<Option<Config>, ConfigError> {
        if !Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Ok(None);
        }

        Config::load(DEFAULT_CONFIG_FILE).map(Some)
    }

    /// Overrides the layout from a command-line value: a layout name or a numeric selector.
    pub fn set_layout(&mut self, value: &str) -> Result<(), ConfigError> {
        self.layout = value.parse().map_err(ConfigError::UnknownLayout)?;
        Ok(())
    }
}
