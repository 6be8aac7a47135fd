// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

//! Settings for the `numstep` front end.
//!
//! Sources, from lowest to highest priority: built-in defaults, an optional `NumStep.toml` in
//! the working directory, an optional TOML file named by `NUMSTEP_CONFIG`, and environment
//! variables prefixed with `NUMSTEP_`.

use std::sync::RwLock;
use std::{env, mem};

use config::{Config, ConfigError, Environment, File, FileFormat};
use lazy_static::lazy_static;
use log::info;
use serde::Deserialize;

/// Build the settings from all sources.
fn load() -> Result<Config, ConfigError> {
    let mut builder = Config::builder();

    // 1. Default values
    builder = builder.set_default("separator", "\n")?
        .set_default("format", "plain")?
        .set_default("limit", 10_000)?
        .set_default("quiet", false)?;

    // 2. Override with the optional TOML file "NumStep.toml" (if there is any)
    builder = builder.add_source(File::new("NumStep.toml", FileFormat::Toml).required(false));

    // 3. Override with an optional TOML file specified by the `NUMSTEP_CONFIG` env variable
    if let Ok(file) = env::var("NUMSTEP_CONFIG") {
        info!("reading settings from {}", file);
        builder = builder.add_source(File::with_name(&file));
    }

    // 4. Override with env variables (`NUMSTEP_LIMIT`, ...)
    let builder = builder.add_source(Environment::with_prefix("NUMSTEP").ignore_empty(true));

    builder.build()
}

lazy_static! {
    static ref SETTINGS: RwLock<Config> =
        RwLock::new(load().unwrap_or_else(|e| panic!("Failed to load settings: {}", e)));
}

/// Debug listing of the loaded settings.
#[must_use]
pub fn dump() -> String {
    let settings = SETTINGS.read().unwrap();
    format!("{:#?}", *settings)
}

/// Look up `name`, or `None` if no source sets it or it has the wrong type.
fn lookup<T>(name: &'static str) -> Option<T>
where
    T: Deserialize<'static>,
{
    let settings = SETTINGS.read().unwrap();
    settings.get(name).ok()
}

/// Look up a setting that always has a default.
fn setting<T>(name: &'static str) -> T
where
    T: Deserialize<'static>,
{
    lookup(name).unwrap_or_else(|| panic!("setting {:?} has no value", name))
}

/// Replace the value of `name`, keeping every other setting.
fn override_setting<T: Into<config::Value>>(name: &'static str, value: T) {
    let mut settings = SETTINGS.write().unwrap();
    let current = mem::take(&mut *settings);
    *settings = Config::builder()
        .add_source(current)
        .set_override(name, value)
        .and_then(|builder| builder.build())
        .unwrap_or_else(|e| panic!("cannot override setting {:?}: {}", name, e));
}

/// What to print between two elements in plain output.
#[must_use]
pub fn separator() -> String {
    setting("separator")
}

/// How to print the elements: `plain` or `json`.
#[must_use]
pub fn format() -> String {
    setting("format")
}

pub fn set_format(value: &str) {
    override_setting("format", value);
}

/// The maximum number of elements to print; `0` means no cap.
#[must_use]
pub fn limit() -> u64 {
    setting("limit")
}

pub fn set_limit(value: u64) {
    override_setting("limit", value);
}

/// Should we hide informational messages?
#[must_use]
pub fn quiet() -> bool {
    setting("quiet")
}
