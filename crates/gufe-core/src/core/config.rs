use crate::core::models::component::ComponentError;
use crate::core::models::solvent::SolventComponent;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SOLVENT_SMILES: &str = "O";
pub const DEFAULT_POSITIVE_ION: &str = "Na+";
pub const DEFAULT_NEGATIVE_ION: &str = "Cl-";
pub const DEFAULT_ION_CONCENTRATION: f64 = 0.15; // mol/L

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid component settings: {0}")]
    Component(#[from] ComponentError),
}

/// Settings for a [`SolventComponent`]; every field is optional in TOML.
///
/// ```toml
/// positive_ion = "K+"
/// negative_ion = "Cl-"
/// ion_concentration = 0.1
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolventSettings {
    pub smiles: String,
    pub positive_ion: String,
    pub negative_ion: String,
    pub neutralize: bool,
    pub ion_concentration: f64,
}

impl Default for SolventSettings {
    fn default() -> Self {
        Self {
            smiles: DEFAULT_SOLVENT_SMILES.to_string(),
            positive_ion: DEFAULT_POSITIVE_ION.to_string(),
            negative_ion: DEFAULT_NEGATIVE_ION.to_string(),
            neutralize: true,
            ion_concentration: DEFAULT_ION_CONCENTRATION,
        }
    }
}

impl SolventSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn build(&self) -> Result<SolventComponent, ConfigError> {
        Ok(SolventComponent::from_settings(self)?)
    }
}
