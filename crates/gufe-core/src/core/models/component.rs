use super::protein::ProteinComponent;
use super::small_molecule::SmallMoleculeComponent;
use super::solvent::SolventComponent;
use super::system::ChemicalSystem;
use crate::core::tokenization::Tokenizable;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Protein,
    SmallMolecule,
    Solvent,
}

impl ComponentKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ComponentKind::Protein => "ProteinComponent",
            ComponentKind::SmallMolecule => "SmallMoleculeComponent",
            ComponentKind::Solvent => "SolventComponent",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid component kind string")]
pub struct ParseComponentKindError;

impl FromStr for ComponentKind {
    type Err = ParseComponentKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(ComponentKind::Protein),
            "smallmolecule" | "small_molecule" | "small-molecule" | "ligand" => {
                Ok(ComponentKind::SmallMolecule)
            }
            "solvent" => Ok(ComponentKind::Solvent),
            _ => Err(ParseComponentKindError),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ComponentKind::Protein => "Protein",
                ComponentKind::SmallMolecule => "SmallMolecule",
                ComponentKind::Solvent => "Solvent",
            }
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Unknown one-letter residue code '{code}' at position {position}")]
    UnknownResidueCode { code: char, position: usize },

    #[error("SMILES string is empty")]
    EmptySmiles,

    #[error("Unbalanced bracket atom at byte {position}")]
    UnbalancedBracket { position: usize },

    #[error("Malformed charge in bracket atom '[{atom}]'")]
    InvalidCharge { atom: String },

    #[error("Unknown ion: '{0}'")]
    UnknownIon(String),

    #[error("Ion '{ion}' cannot be used as the {expected} ion")]
    WrongIonPolarity { ion: String, expected: &'static str },

    #[error("Ion concentration must be finite and non-negative, got {0}")]
    InvalidConcentration(f64),
}

/// A molecular entity that can take part in a [`ChemicalSystem`].
///
/// Components are plain values: equality and hashing are over their content
/// and every variant reports an integer formal charge. Systems hold components
/// behind an [`Arc`], so one component can be shared by many systems.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Protein(ProteinComponent),
    SmallMolecule(SmallMoleculeComponent),
    Solvent(SolventComponent),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Protein(protein) => protein.name(),
            Component::SmallMolecule(molecule) => molecule.name(),
            Component::Solvent(solvent) => solvent.name(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Protein(_) => ComponentKind::Protein,
            Component::SmallMolecule(_) => ComponentKind::SmallMolecule,
            Component::Solvent(_) => ComponentKind::Solvent,
        }
    }

    pub fn total_charge(&self) -> i32 {
        match self {
            Component::Protein(protein) => protein.total_charge(),
            Component::SmallMolecule(molecule) => molecule.total_charge(),
            Component::Solvent(solvent) => solvent.total_charge(),
        }
    }

    pub fn as_protein(&self) -> Option<&ProteinComponent> {
        match self {
            Component::Protein(protein) => Some(protein),
            _ => None,
        }
    }

    pub fn as_small_molecule(&self) -> Option<&SmallMoleculeComponent> {
        match self {
            Component::SmallMolecule(molecule) => Some(molecule),
            _ => None,
        }
    }

    pub fn as_solvent(&self) -> Option<&SolventComponent> {
        match self {
            Component::Solvent(solvent) => Some(solvent),
            _ => None,
        }
    }
}

impl Tokenizable for Component {
    fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(name={})", self.type_name(), self.name())
    }
}

impl PartialEq<ChemicalSystem> for Component {
    fn eq(&self, _other: &ChemicalSystem) -> bool {
        false
    }
}

macro_rules! impl_component_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Component::$variant(value)
                }
            }

            impl From<$ty> for Arc<Component> {
                fn from(value: $ty) -> Self {
                    Arc::new(Component::$variant(value))
                }
            }
        )*
    };
}

impl_component_conversions! {
    Protein => ProteinComponent,
    SmallMolecule => SmallMoleculeComponent,
    Solvent => SolventComponent,
}
