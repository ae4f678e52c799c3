// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

use crate::player::BackendKind;

const CONFIG_NAME: &str = "tunedeck";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Volume restored at startup, `0..=100`.
    pub(crate) volume: u8,
    pub(crate) backend: BackendKind,
    pub(crate) fine_seek_step: u64,
    pub(crate) seek_step: u64,
    pub(crate) fine_volume_step: u8,
    pub(crate) volume_step: u8,
    /// Default tracing filter, overridden by `RUST_LOG`.
    pub(crate) log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            volume: 75,
            backend: BackendKind::Silent,
            fine_seek_step: 5,
            seek_step: 20,
            fine_volume_step: 1,
            volume_step: 5,
            log_filter: "tunedeck=debug,warn".to_string(),
        }
    }
}

/// Loads the configuration, falling back to defaults when the file cannot be
/// read. The error is handed back so it can be logged once logging is up.
pub(crate) fn load_config() -> (AppConfig, Option<confy::ConfyError>) {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
