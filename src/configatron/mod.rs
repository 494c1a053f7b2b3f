use std::{path::Path, rc::Rc};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{BemtronError, ErrorAction, ErrorKind},
    types::{MixMap, ModifierMap},
    BemtronResult,
};

/// Display name assigned to components that do not carry one yet.
pub const DEFAULT_DISPLAY_NAME: &str = "Component";

/// Naming options as written in JSON, e.g. a `bemtron.config.json` shipped with a component library.
///
/// Every field is optional and falls back to an empty value, except `displayName`
/// which falls back to `DEFAULT_DISPLAY_NAME`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct BemOptionsJson {
    /// Literal class appended right after the block name.
    #[serde(rename = "className", default = "empty_class_name_by_default")]
    pub class_name: String,

    /// Base modifiers of the block.
    #[serde(default = "empty_map_by_default")]
    pub mods: ModifierMap,

    /// Base mixes of the block.
    #[serde(default = "empty_map_by_default")]
    pub mix: MixMap,

    /// Display name assigned to the component when it has none.
    #[serde(rename = "displayName", default = "default_display_name")]
    pub display_name: String,
}

fn empty_class_name_by_default() -> String {
    info!("Setting default empty class name");

    String::new()
}

fn empty_map_by_default() -> ModifierMap {
    info!("Setting default empty map for mods or mix");

    ModifierMap::new()
}

fn default_display_name() -> String {
    info!("Setting default display name to '{}'", DEFAULT_DISPLAY_NAME);

    DEFAULT_DISPLAY_NAME.to_string()
}

/// Options captured by the naming facade.
///
/// The maps are shared so a host can hand the same options to every render;
/// replacing a map with a new `Rc` is what signals a change to the memoized accessors.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct BemOptions {
    class_name: String,
    mods: Rc<ModifierMap>,
    mix: Rc<MixMap>,
}

impl BemOptions {
    pub fn new(class_name: &str, mods: ModifierMap, mix: MixMap) -> Self {
        info!(
            "Initializing naming options with class_name: '{}', mods: {:?}, mix: {:?}",
            class_name, mods, mix
        );

        Self {
            class_name: class_name.to_string(),
            mods: Rc::new(mods),
            mix: Rc::new(mix),
        }
    }

    pub fn get_class_name(&self) -> String {
        self.class_name.clone()
    }

    pub fn get_mods(&self) -> Rc<ModifierMap> {
        Rc::clone(&self.mods)
    }

    pub fn get_mix(&self) -> Rc<MixMap> {
        Rc::clone(&self.mix)
    }

    pub fn set_class_name(&mut self, class_name: &str) {
        self.class_name = class_name.to_string();
    }

    /// Replaces the base modifiers. The memoized block accessor recomputes on the next render.
    pub fn set_mods(&mut self, mods: ModifierMap) {
        self.mods = Rc::new(mods);
    }

    /// Replaces the base mixes. The memoized block accessor recomputes on the next render.
    pub fn set_mix(&mut self, mix: MixMap) {
        self.mix = Rc::new(mix);
    }

    pub fn generate_options_json(&self, display_name: &str) -> BemOptionsJson {
        BemOptionsJson {
            class_name: self.class_name.clone(),
            mods: (*self.mods).clone(),
            mix: (*self.mix).clone(),
            display_name: display_name.to_string(),
        }
    }
}

/// Options loaded from JSON together with the display name they declare.
#[derive(Clone, PartialEq, Debug)]
pub struct BemSettings {
    pub options: BemOptions,
    pub display_name: String,
}

impl From<BemOptionsJson> for BemSettings {
    fn from(json: BemOptionsJson) -> Self {
        Self {
            options: BemOptions::new(&json.class_name, json.mods, json.mix),
            display_name: json.display_name,
        }
    }
}

/// Parses naming options from a JSON string.
pub fn parse_bem_options(raw_options: &str) -> BemtronResult<BemSettings> {
    let options_json: BemOptionsJson = serde_json::from_str(raw_options).map_err(|err| {
        BemtronError::raise_general_configuration_error(
            ErrorKind::ConfigFileParsingError,
            &format!("Failed to parse naming options: {}", err),
            ErrorAction::Fix,
        )
    })?;

    Ok(BemSettings::from(options_json))
}

/// Reads and parses naming options from a JSON file.
///
/// # Errors
/// A general configuration error when the file cannot be read or is not valid JSON options.
pub fn load_bem_options<P: AsRef<Path>>(options_path: P) -> BemtronResult<BemSettings> {
    let options_path = options_path.as_ref();

    info!("Loading naming options from {:?}", options_path);

    let raw_options = std::fs::read_to_string(options_path).map_err(|err| {
        BemtronError::raise_general_configuration_error(
            ErrorKind::ConfigFileReadError,
            &format!(
                "Failed to read naming options from {:?}: {}",
                options_path, err
            ),
            ErrorAction::Notify,
        )
    })?;

    parse_bem_options(&raw_options)
}
