use super::component::ComponentError;
use crate::core::utils::charge::sum_charges;
use crate::core::utils::identifiers::{residue_formal_charge, three_letter_code};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Residue {
    pub chain_id: char, // Chain identifier (e.g., 'A')
    pub number: isize,  // Residue sequence number
    pub name: String,   // Three-letter residue name (e.g., "LYS", "HIP")
}

impl Residue {
    pub fn new(chain_id: char, number: isize, name: &str) -> Self {
        Self {
            chain_id,
            number,
            name: name.to_string(),
        }
    }

    pub fn formal_charge(&self) -> i32 {
        residue_formal_charge(&self.name)
    }
}

/// A protein described by its residues.
///
/// The formal charge of a residue comes from its protonation-state name, so
/// `HIS` is neutral while `HIP` carries +1. Terminal charges are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProteinComponent {
    name: String,
    residues: Vec<Residue>,
}

impl ProteinComponent {
    pub fn new(name: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            name: name.into(),
            residues,
        }
    }

    /// Builds a single-chain protein from one-letter amino acid codes.
    ///
    /// Residues are numbered from 1 and whitespace in `sequence` is skipped.
    pub fn from_sequence(
        name: impl Into<String>,
        chain_id: char,
        sequence: &str,
    ) -> Result<Self, ComponentError> {
        let residues = sequence
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, code)| {
                let res_name = three_letter_code(code)
                    .ok_or(ComponentError::UnknownResidueCode { code, position })?;
                Ok(Residue::new(chain_id, position as isize + 1, res_name))
            })
            .collect::<Result<Vec<_>, ComponentError>>()?;

        Ok(Self::new(name, residues))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Distinct chain identifiers, sorted.
    pub fn chain_ids(&self) -> Vec<char> {
        let mut ids: Vec<char> = self.residues.iter().map(|r| r.chain_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn total_charge(&self) -> i32 {
        sum_charges(self.residues.iter().map(Residue::formal_charge))
    }
}
