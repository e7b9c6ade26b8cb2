use super::component::ComponentError;
use crate::core::config::SolventSettings;
use crate::core::utils::float::canonical_bits;
use crate::core::utils::identifiers::lookup_ion;
use std::hash::{Hash, Hasher};
use tracing::warn;

/// Bulk solvent with an optional salt, described by settings only.
///
/// A solvent carries no net formal charge. Counter-ions used to neutralize a
/// system are decided later by whatever prepares the simulation box.
#[derive(Debug, Clone)]
pub struct SolventComponent {
    name: String,
    smiles: String,
    positive_ion: String,
    negative_ion: String,
    neutralize: bool,
    ion_concentration: f64, // mol/L
}

impl SolventComponent {
    pub fn new(
        smiles: &str,
        positive_ion: &str,
        negative_ion: &str,
        neutralize: bool,
        ion_concentration: f64,
    ) -> Result<Self, ComponentError> {
        let smiles = smiles.trim();
        if smiles.is_empty() {
            return Err(ComponentError::EmptySmiles);
        }
        let positive_ion = normalize_ion(positive_ion, 1)?;
        let negative_ion = normalize_ion(negative_ion, -1)?;
        if !ion_concentration.is_finite() || ion_concentration < 0.0 {
            return Err(ComponentError::InvalidConcentration(ion_concentration));
        }
        if !neutralize && ion_concentration == 0.0 {
            warn!(
                smiles,
                "Solvent has no salt and neutralization is disabled; no counter-ions will be added."
            );
        }

        let smiles = smiles.to_string();
        Ok(Self {
            name: format!("{}, {}, {}", smiles, positive_ion, negative_ion),
            smiles,
            positive_ion,
            negative_ion,
            neutralize,
            ion_concentration,
        })
    }

    /// Default water solvent with the given salt ions.
    pub fn with_ions(positive_ion: &str, negative_ion: &str) -> Result<Self, ComponentError> {
        let defaults = SolventSettings::default();
        Self::new(
            &defaults.smiles,
            positive_ion,
            negative_ion,
            defaults.neutralize,
            defaults.ion_concentration,
        )
    }

    pub fn from_settings(settings: &SolventSettings) -> Result<Self, ComponentError> {
        Self::new(
            &settings.smiles,
            &settings.positive_ion,
            &settings.negative_ion,
            settings.neutralize,
            settings.ion_concentration,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn positive_ion(&self) -> &str {
        &self.positive_ion
    }

    pub fn negative_ion(&self) -> &str {
        &self.negative_ion
    }

    pub fn neutralize(&self) -> bool {
        self.neutralize
    }

    pub fn ion_concentration(&self) -> f64 {
        self.ion_concentration
    }

    pub fn total_charge(&self) -> i32 {
        0
    }
}

impl Default for SolventComponent {
    fn default() -> Self {
        let defaults = SolventSettings::default();
        Self {
            name: format!(
                "{}, {}, {}",
                defaults.smiles, defaults.positive_ion, defaults.negative_ion
            ),
            smiles: defaults.smiles,
            positive_ion: defaults.positive_ion,
            negative_ion: defaults.negative_ion,
            neutralize: defaults.neutralize,
            ion_concentration: defaults.ion_concentration,
        }
    }
}

impl PartialEq for SolventComponent {
    fn eq(&self, other: &Self) -> bool {
        self.smiles == other.smiles
            && self.positive_ion == other.positive_ion
            && self.negative_ion == other.negative_ion
            && self.neutralize == other.neutralize
            && canonical_bits(self.ion_concentration) == canonical_bits(other.ion_concentration)
    }
}

impl Eq for SolventComponent {}

impl Hash for SolventComponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.smiles.hash(state);
        self.positive_ion.hash(state);
        self.negative_ion.hash(state);
        self.neutralize.hash(state);
        canonical_bits(self.ion_concentration).hash(state);
    }
}

fn normalize_ion(name: &str, expected_charge: i32) -> Result<String, ComponentError> {
    let (canonical, charge) =
        lookup_ion(name).ok_or_else(|| ComponentError::UnknownIon(name.to_string()))?;
    let trimmed = name.trim();
    let contradicts_sign = (expected_charge > 0 && trimmed.ends_with('-'))
        || (expected_charge < 0 && trimmed.ends_with('+'));

    if charge != expected_charge || contradicts_sign {
        return Err(ComponentError::WrongIonPolarity {
            ion: name.to_string(),
            expected: if expected_charge > 0 {
                "positive"
            } else {
                "negative"
            },
        });
    }
    Ok(canonical.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenization::stable_hash;

    #[test]
    fn default_is_water_with_sodium_chloride() {
        let solvent = SolventComponent::default();
        assert_eq!(solvent.smiles(), "O");
        assert_eq!(solvent.positive_ion(), "Na+");
        assert_eq!(solvent.negative_ion(), "Cl-");
        assert!(solvent.neutralize());
        assert_eq!(solvent.ion_concentration(), 0.15);
        assert_eq!(solvent.name(), "O, Na+, Cl-");
    }

    #[test]
    fn with_ions_normalizes_bare_symbols() {
        let solvent = SolventComponent::with_ions("K", "Cl").unwrap();
        assert_eq!(solvent.positive_ion(), "K+");
        assert_eq!(solvent.negative_ion(), "Cl-");
        assert_eq!(solvent.smiles(), "O");
    }

    #[test]
    fn with_ions_matching_defaults_equals_default() {
        let solvent = SolventComponent::with_ions("na", "CL-").unwrap();
        assert_eq!(solvent, SolventComponent::default());
        assert_eq!(stable_hash(&solvent), stable_hash(&SolventComponent::default()));
    }

    #[test]
    fn unknown_ions_are_rejected() {
        assert_eq!(
            SolventComponent::with_ions("Mg", "Cl"),
            Err(ComponentError::UnknownIon("Mg".to_string()))
        );
    }

    #[test]
    fn swapped_ions_are_rejected() {
        assert_eq!(
            SolventComponent::with_ions("Cl", "Na"),
            Err(ComponentError::WrongIonPolarity {
                ion: "Cl".to_string(),
                expected: "positive"
            })
        );
        assert!(matches!(
            SolventComponent::with_ions("Na-", "Cl"),
            Err(ComponentError::WrongIonPolarity { .. })
        ));
    }

    #[test]
    fn invalid_concentrations_are_rejected() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SolventComponent::new("O", "Na+", "Cl-", true, bad),
                Err(ComponentError::InvalidConcentration(_))
            ));
        }
    }

    #[test]
    fn empty_solvent_smiles_is_rejected() {
        for blank in ["", "   ", "\n\t"] {
            assert_eq!(
                SolventComponent::new(blank, "Na+", "Cl-", true, 0.15),
                Err(ComponentError::EmptySmiles)
            );
        }
        let padded = SolventComponent::new(" O ", "Na+", "Cl-", true, 0.15).unwrap();
        assert_eq!(padded.smiles(), "O");
        assert_eq!(padded.name(), "O, Na+, Cl-");
    }

    #[test]
    fn solvent_is_always_neutral() {
        let solvent = SolventComponent::new("O", "K+", "Br-", false, 1.0).unwrap();
        assert_eq!(solvent.total_charge(), 0);
    }

    #[test]
    fn equality_covers_every_setting() {
        let base = SolventComponent::new("O", "Na+", "Cl-", true, 0.15).unwrap();
        assert_ne!(
            base,
            SolventComponent::new("O", "K+", "Cl-", true, 0.15).unwrap()
        );
        assert_ne!(
            base,
            SolventComponent::new("O", "Na+", "Cl-", false, 0.15).unwrap()
        );
        assert_ne!(
            base,
            SolventComponent::new("O", "Na+", "Cl-", true, 0.2).unwrap()
        );
        assert_ne!(
            base,
            SolventComponent::new("CO", "Na+", "Cl-", true, 0.15).unwrap()
        );
    }

    #[test]
    fn negative_zero_concentration_matches_zero() {
        let a = SolventComponent::new("O", "Na+", "Cl-", true, 0.0).unwrap();
        let b = SolventComponent::new("O", "Na+", "Cl-", true, -0.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(stable_hash(&a), stable_hash(&b));
    }
}
