use super::component::ComponentError;

/// Largest charge magnitude accepted on a single bracket atom.
pub const MAX_BRACKET_CHARGE: i32 = 15;

/// A small molecule (typically a ligand) identified by its SMILES string.
///
/// Only the charges written in bracket atoms are interpreted; the rest of the
/// SMILES is kept as an opaque label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SmallMoleculeComponent {
    name: String,
    smiles: String,
    formal_charge: i32,
}

impl SmallMoleculeComponent {
    pub fn from_smiles(name: impl Into<String>, smiles: &str) -> Result<Self, ComponentError> {
        let smiles = smiles.trim();
        if smiles.is_empty() {
            return Err(ComponentError::EmptySmiles);
        }
        let formal_charge = bracket_charge_sum(smiles)?;

        Ok(Self {
            name: name.into(),
            smiles: smiles.to_string(),
            formal_charge,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn total_charge(&self) -> i32 {
        self.formal_charge
    }
}

fn bracket_charge_sum(smiles: &str) -> Result<i32, ComponentError> {
    let mut total = 0;
    let mut open: Option<usize> = None;

    for (position, c) in smiles.char_indices() {
        match c {
            '[' => {
                if open.is_some() {
                    return Err(ComponentError::UnbalancedBracket { position });
                }
                open = Some(position);
            }
            ']' => {
                let start = open
                    .take()
                    .ok_or(ComponentError::UnbalancedBracket { position })?;
                let atom = &smiles[start + 1..position];
                total = bracket_atom_charge(atom)?
                    .checked_add(total)
                    .ok_or_else(|| ComponentError::InvalidCharge {
                        atom: atom.to_string(),
                    })?;
            }
            _ => {}
        }
    }

    match open {
        Some(position) => Err(ComponentError::UnbalancedBracket { position }),
        None => Ok(total),
    }
}

// Accepts `+`, `-`, repeated signs (`++`) and a sign followed by a count (`+2`).
// The magnitude is capped at MAX_BRACKET_CHARGE.
fn bracket_atom_charge(atom: &str) -> Result<i32, ComponentError> {
    let body = atom.split(':').next().unwrap_or(atom);
    let Some(pos) = body.find(['+', '-']) else {
        return Ok(0);
    };

    let sign_char = if body[pos..].starts_with('+') { '+' } else { '-' };
    let sign = if sign_char == '+' { 1 } else { -1 };
    let rest = &body[pos + 1..];
    let invalid = || ComponentError::InvalidCharge {
        atom: atom.to_string(),
    };

    let magnitude = if rest.is_empty() {
        1
    } else if rest.chars().all(|c| c == sign_char) {
        rest.len() + 1
    } else if rest.chars().all(|c| c.is_ascii_digit()) {
        rest.parse::<usize>().map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };

    match i32::try_from(magnitude) {
        Ok(n) if n <= MAX_BRACKET_CHARGE => Ok(sign * n),
        _ => Err(invalid()),
    }
}
